// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Three State Results
//!
//! This crate provides [`ApiResult`], an alternative to the standard library [`Result`] type for
//! operations that may not have completed yet. An [`ApiResult`] is either a successful value, an
//! error or a marker that the operation is still loading.
//!
//! Rather than unpacking results at every step, a computation is written as a chain of
//! combinators. Each step either continues with the successful value or passes the failure (or
//! the loading marker) through untouched, so that failures only need to be handled once, at the
//! end of the chain (using [`ApiResult::fold`], [`ApiResult::into_result`] and similar).
//!
//! Operators that need to produce an error of their own use the types in [`errors`]. A custom
//! error type can be used with these operators by implementing [`From`] for the relevant error
//! kinds. The default error type, [`errors::BoxError`], accepts all of them.

mod collections;
mod combinators;
pub mod errors;
mod result;
#[cfg(test)]
mod test_error;

pub use collections::{ApiResultIterExt, MapResults};
pub use result::{ApiResult, IntoApiResult};
