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

use std::error::Error;

use crate::errors::BoxError;
use crate::ApiResult;

/// Operators that select errors by their concrete type.
impl<T> ApiResult<T, BoxError> {
    /// Determine whether the result is an error of type `X`.
    pub fn is_error_of<X>(&self) -> bool
    where
        X: Error + 'static,
    {
        matches!(self, ApiResult::Error(err) if err.is::<X>())
    }

    /// Transform the error, if it is of type `X`. Other errors are unchanged.
    pub fn map_error_is<X, F>(self, f: F) -> Self
    where
        X: Error + 'static,
        F: FnOnce(X) -> BoxError,
    {
        match self {
            ApiResult::Error(err) => match err.downcast::<X>() {
                Ok(typed) => ApiResult::Error(f(*typed)),
                Err(err) => ApiResult::Error(err),
            },
            ow => ow,
        }
    }

    /// Replace the error with the result of `f`, if it is of type `X`.
    pub fn recover_is<X, F>(self, f: F) -> Self
    where
        X: Error + 'static,
        F: FnOnce(X) -> ApiResult<T, BoxError>,
    {
        match self {
            ApiResult::Error(err) => match err.downcast::<X>() {
                Ok(typed) => f(*typed),
                Err(err) => ApiResult::Error(err),
            },
            ow => ow,
        }
    }

    pub fn try_recover_is<X, F>(self, f: F) -> Self
    where
        X: Error + 'static,
        F: FnOnce(X) -> Result<T, BoxError>,
    {
        self.recover_is(|err: X| ApiResult::of_callable(|| f(err)))
    }

    /// Take an error of type `X` back out of the result. This is used where an error that
    /// should not have been captured (such as a cancellation) ends up inside a result.
    pub fn rethrow<X>(self) -> Result<Self, X>
    where
        X: Error + 'static,
    {
        match self {
            ApiResult::Error(err) => match err.downcast::<X>() {
                Ok(typed) => Err(*typed),
                Err(err) => Ok(ApiResult::Error(err)),
            },
            ow => Ok(ow),
        }
    }
}
