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

//! # Asynchronous Results
//!
//! Adapters between asynchronous code and [`ApiResult`]:
//!
//! * [`ApiResultFutureExt`] captures the outcome of a fallible future.
//! * [`result_stream`] and [`as_result_stream`] produce streams that report
//!   [`ApiResult::Loading`] before any terminal item.
//! * [`with_concurrent_result`] runs a group of tasks and reports the first of their failures.
//!
//! Cancellation is never reported as an [`ApiResult::Error`]. Dropping any of the futures or
//! streams in this crate simply stops the work, and a cancelled concurrent scope reports
//! [`Cancelled`] in place of a result.

mod future;
mod scope;
mod stream;

pub use future::{ApiResultFutureExt, IntoApiResultFuture};
pub use scope::{
    with_concurrent_result, with_concurrent_result_config, Cancelled, ChildHandle, ResultScope,
    ScopeClosed, ScopeConfig,
};
pub use stream::{
    as_result_stream, result_stream, ApiResultStreamExt, LoadingThen, MapResults, ResultStream,
    ResultStreamExt, SkipLoading, Successes,
};

#[doc(no_inline)]
pub use swimos_api_result::ApiResult;
