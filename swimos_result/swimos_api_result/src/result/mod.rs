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


use crate::errors::{BoxError, NotFinished};

/// The outcome of an operation that may still be in progress. A result is either a successful
/// value, an error or a marker indicating that the operation has not yet completed.
///
/// Results are immutable; all of the combinators consume the result and produce a new one.
#[must_use = "this `ApiResult` may be an `Error` variant, which should be handled"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiResult<T, E = BoxError> {
    /// The operation completed with a value.
    Success(T),
    /// The operation failed.
    Error(E),
    /// The operation has not yet completed.
    Loading,
}

impl<T, E> ApiResult<T, E> {
    pub fn success(value: T) -> Self {
        ApiResult::Success(value)
    }

    pub fn error(err: E) -> Self {
        ApiResult::Error(err)
    }

    pub fn loading() -> Self {
        ApiResult::Loading
    }

    /// Classify a value that may already represent a failure. A [`Result`] is split into
    /// [`ApiResult::Success`] and [`ApiResult::Error`]. An existing [`ApiResult`] is returned
    /// unchanged so that [`ApiResult::Loading`] is never wrapped as a successful value.
    pub fn of<V>(value: V) -> Self
    where
        V: IntoApiResult<T, E>,
    {
        value.into_api_result()
    }

    /// Run a fallible computation and capture its error, if any. Panics are not caught.
    pub fn of_callable<F>(compute: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        compute().into()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResult::Error(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ApiResult::Loading)
    }

    /// Convert into a standard [`Result`]. A result that is still loading becomes an error
    /// of [`NotFinished`].
    pub fn into_result(self) -> Result<T, E>
    where
        E: From<NotFinished>,
    {
        match self {
            ApiResult::Success(value) => Ok(value),
            ApiResult::Error(err) => Err(err),
            ApiResult::Loading => Err(NotFinished.into()),
        }
    }

    /// Split the result into its value and its error. At most one of the two will be defined
    /// and neither will be for [`ApiResult::Loading`].
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        match self {
            ApiResult::Success(value) => (Some(value), None),
            ApiResult::Error(err) => (None, Some(err)),
            ApiResult::Loading => (None, None),
        }
    }

    pub fn as_ref(&self) -> ApiResult<&T, &E> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(value),
            ApiResult::Error(err) => ApiResult::Error(err),
            ApiResult::Loading => ApiResult::Loading,
        }
    }

    pub fn as_mut(&mut self) -> ApiResult<&mut T, &mut E> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(value),
            ApiResult::Error(err) => ApiResult::Error(err),
            ApiResult::Loading => ApiResult::Loading,
        }
    }
}

impl<E> ApiResult<(), E> {
    /// A successful result carrying no value.
    pub fn unit() -> Self {
        ApiResult::Success(())
    }
}

impl<T, E> From<Result<T, E>> for ApiResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ApiResult::Success(value),
            Err(err) => ApiResult::Error(err),
        }
    }
}

/// Values that can be classified as an [`ApiResult`].
pub trait IntoApiResult<T, E> {
    fn into_api_result(self) -> ApiResult<T, E>;
}

impl<T, E> IntoApiResult<T, E> for Result<T, E> {
    fn into_api_result(self) -> ApiResult<T, E> {
        self.into()
    }
}

impl<T, E> IntoApiResult<T, E> for ApiResult<T, E> {
    fn into_api_result(self) -> ApiResult<T, E> {
        self
    }
}
