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

//! Operators over a single [`ApiResult`]. All of them are eager: any function passed to an
//! operator is called (at most once) before the operator returns. Unless stated otherwise,
//! [`ApiResult::Error`] and [`ApiResult::Loading`] are passed through without calling the
//! function.
//!
//! Operators come in two families. Those that accept a function returning a plain value
//! (`map`, `chain`, `recover`) do not guard it in any way. Those prefixed with `try_` accept a
//! function returning a [`Result`] and capture its error in the produced result.

mod dynamic;

use crate::errors::{ConditionNotSatisfied, NotFinished, WithCause};
use crate::ApiResult;

const NULL_VALUE: &str = "value was null";

impl<T, E> ApiResult<T, E> {
    pub fn map<U, F>(self, f: F) -> ApiResult<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ApiResult::Success(value) => ApiResult::Success(f(value)),
            ApiResult::Error(err) => ApiResult::Error(err),
            ApiResult::Loading => ApiResult::Loading,
        }
    }

    /// Transform the successful value with a fallible function, capturing its error.
    pub fn try_map<U, F>(self, f: F) -> ApiResult<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(|value| ApiResult::of_callable(|| f(value)))
    }

    /// Replace a successful result with the result of `f`.
    pub fn and_then<U, F>(self, f: F) -> ApiResult<U, E>
    where
        F: FnOnce(T) -> ApiResult<U, E>,
    {
        match self {
            ApiResult::Success(value) => f(value),
            ApiResult::Error(err) => ApiResult::Error(err),
            ApiResult::Loading => ApiResult::Loading,
        }
    }

    /// Run a dependent operation, keeping the original value if it succeeds. If the operation
    /// fails or is still loading, that state replaces the result.
    pub fn chain<U, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> ApiResult<U, E>,
    {
        match self {
            ApiResult::Success(value) => match f(&value) {
                ApiResult::Success(_) => ApiResult::Success(value),
                ApiResult::Error(err) => ApiResult::Error(err),
                ApiResult::Loading => ApiResult::Loading,
            },
            ow => ow,
        }
    }

    /// As [`ApiResult::chain`] where the dependent operation is a plain fallible function.
    pub fn try_chain<U, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Result<U, E>,
    {
        self.chain(|value| ApiResult::of_callable(|| f(value)))
    }

    pub fn map_error<E2, F>(self, f: F) -> ApiResult<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            ApiResult::Success(value) => ApiResult::Success(value),
            ApiResult::Error(err) => ApiResult::Error(f(err)),
            ApiResult::Loading => ApiResult::Loading,
        }
    }

    /// Replace the error with its cause, if it has one.
    pub fn map_error_to_cause(self) -> Self
    where
        E: WithCause,
    {
        self.map_error(|err| match err.into_cause() {
            Ok(cause) => cause,
            Err(err) => err,
        })
    }

    /// Produce a value for a result that is still loading. This is the only operator that turns
    /// [`ApiResult::Loading`] into [`ApiResult::Success`].
    pub fn map_loading<F>(self, f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            ApiResult::Loading => ApiResult::Success(f()),
            ow => ow,
        }
    }

    pub fn map_either<U, E2, F1, F2>(self, on_success: F1, on_error: F2) -> ApiResult<U, E2>
    where
        F1: FnOnce(T) -> U,
        F2: FnOnce(E) -> E2,
    {
        match self {
            ApiResult::Success(value) => ApiResult::Success(on_success(value)),
            ApiResult::Error(err) => ApiResult::Error(on_error(err)),
            ApiResult::Loading => ApiResult::Loading,
        }
    }

    /// Replace an error with the result of `f`.
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> ApiResult<T, E>,
    {
        match self {
            ApiResult::Error(err) => f(err),
            ow => ow,
        }
    }

    pub fn try_recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Result<T, E>,
    {
        self.recover(|err| ApiResult::of_callable(|| f(err)))
    }

    /// Replace an error with the result of `f` if the error satisfies `cond`.
    pub fn recover_if<P, F>(self, cond: P, f: F) -> Self
    where
        P: FnOnce(&E) -> bool,
        F: FnOnce(E) -> ApiResult<T, E>,
    {
        match self {
            ApiResult::Error(err) => {
                if cond(&err) {
                    f(err)
                } else {
                    ApiResult::Error(err)
                }
            }
            ow => ow,
        }
    }

    pub fn try_recover_if<P, F>(self, cond: P, f: F) -> Self
    where
        P: FnOnce(&E) -> bool,
        F: FnOnce(E) -> Result<T, E>,
    {
        self.recover_if(cond, |err| ApiResult::of_callable(|| f(err)))
    }

    /// Fail with the error produced by `exc` if the value satisfies `pred`.
    pub fn error_if<P, X>(self, pred: P, exc: X) -> Self
    where
        P: FnOnce(&T) -> bool,
        X: FnOnce() -> E,
    {
        match self {
            ApiResult::Success(value) => {
                if pred(&value) {
                    ApiResult::Error(exc())
                } else {
                    ApiResult::Success(value)
                }
            }
            ow => ow,
        }
    }

    /// Fail with [`ConditionNotSatisfied`] if the value satisfies `pred`.
    pub fn reject<P>(self, pred: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: From<ConditionNotSatisfied>,
    {
        self.error_if(pred, || ConditionNotSatisfied::new().into())
    }

    /// Fail with the error produced by `exc` unless the value satisfies `pred`.
    pub fn error_unless<P, X>(self, pred: P, exc: X) -> Self
    where
        P: FnOnce(&T) -> bool,
        X: FnOnce() -> E,
    {
        self.error_if(|value| !pred(value), exc)
    }

    /// Fail with [`ConditionNotSatisfied`] unless the value satisfies `pred`.
    pub fn ensure<P>(self, pred: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: From<ConditionNotSatisfied>,
    {
        self.error_unless(pred, || ConditionNotSatisfied::new().into())
    }

    /// Treat a result that is still loading as having failed with [`NotFinished`].
    pub fn error_on_loading(self) -> Self
    where
        E: From<NotFinished>,
    {
        self.error_on_loading_with(|| NotFinished.into())
    }

    pub fn error_on_loading_with<X>(self, exc: X) -> Self
    where
        X: FnOnce() -> E,
    {
        match self {
            ApiResult::Loading => ApiResult::Error(exc()),
            ow => ow,
        }
    }

    /// Extract the value, requiring that it satisfies `pred`. This is one of the two operators
    /// that fail at the call site rather than producing a new result.
    pub fn require<P>(self, pred: P, message: impl Into<String>) -> Result<T, E>
    where
        P: FnOnce(&T) -> bool,
        E: From<NotFinished> + From<ConditionNotSatisfied>,
    {
        self.error_unless(pred, || ConditionNotSatisfied::with_message(message).into())
            .into_result()
    }

    /// Discard any error, producing an empty success in its place.
    pub fn none_on_error(self) -> ApiResult<Option<T>, E> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(Some(value)),
            ApiResult::Error(_) => ApiResult::Success(None),
            ApiResult::Loading => ApiResult::Loading,
        }
    }

    /// Reduce the result to a single value. A result that is still loading is passed to
    /// `on_error` as [`NotFinished`].
    pub fn fold<R, F1, F2>(self, on_success: F1, on_error: F2) -> R
    where
        F1: FnOnce(T) -> R,
        F2: FnOnce(E) -> R,
        E: From<NotFinished>,
    {
        match self {
            ApiResult::Success(value) => on_success(value),
            ApiResult::Error(err) => on_error(err),
            ApiResult::Loading => on_error(NotFinished.into()),
        }
    }

    pub fn fold_with_loading<R, F1, F2, F3>(
        self,
        on_success: F1,
        on_error: F2,
        on_loading: F3,
    ) -> R
    where
        F1: FnOnce(T) -> R,
        F2: FnOnce(E) -> R,
        F3: FnOnce() -> R,
    {
        match self {
            ApiResult::Success(value) => on_success(value),
            ApiResult::Error(err) => on_error(err),
            ApiResult::Loading => on_loading(),
        }
    }

    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let ApiResult::Success(value) = &self {
            f(value);
        }
        self
    }

    pub fn on_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let ApiResult::Error(err) = &self {
            f(err);
        }
        self
    }

    pub fn on_loading<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_loading() {
            f();
        }
        self
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            ApiResult::Success(value) => value,
            _ => default,
        }
    }

    /// Extract the value or compute one from the error. A result that is still loading is
    /// passed to `f` as [`NotFinished`].
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
        E: From<NotFinished>,
    {
        self.fold(|value| value, f)
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            ApiResult::Success(value) => value,
            _ => T::default(),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ApiResult::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            ApiResult::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Narrow the successful value to another type, failing with [`ConditionNotSatisfied`] if
    /// the conversion is not possible.
    pub fn require_is<R>(self) -> ApiResult<R, E>
    where
        R: TryFrom<T>,
        E: From<ConditionNotSatisfied>,
    {
        self.and_then(|value| match R::try_from(value) {
            Ok(narrowed) => ApiResult::Success(narrowed),
            Err(_) => ApiResult::Error(
                ConditionNotSatisfied::with_message(format!(
                    "value was not of type {}",
                    std::any::type_name::<R>()
                ))
                .into(),
            ),
        })
    }

    /// Replace a successful result with `other`.
    pub fn and<U>(self, other: ApiResult<U, E>) -> ApiResult<U, E> {
        self.and_then(|_| other)
    }

    /// Combine two results. If either has not succeeded, the state of the first of them that
    /// has not is returned.
    pub fn zip<U>(self, other: ApiResult<U, E>) -> ApiResult<(T, U), E> {
        self.and_then(|left| other.map(|right| (left, right)))
    }

    /// Discard the value, keeping the state of the result.
    pub fn void(self) -> ApiResult<(), E> {
        self.map(|_| ())
    }
}

impl<T, E> ApiResult<Option<T>, E> {
    /// Fail with [`ConditionNotSatisfied`] if the value is absent.
    pub fn error_on_none(self) -> ApiResult<T, E>
    where
        E: From<ConditionNotSatisfied>,
    {
        self.error_on_none_with(|| ConditionNotSatisfied::with_message(NULL_VALUE).into())
    }

    pub fn error_on_none_with<X>(self, exc: X) -> ApiResult<T, E>
    where
        X: FnOnce() -> E,
    {
        self.and_then(|maybe_value| match maybe_value {
            Some(value) => ApiResult::Success(value),
            None => ApiResult::Error(exc()),
        })
    }
}

impl<T, E> ApiResult<ApiResult<T, E>, E> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> ApiResult<T, E> {
        self.and_then(|inner| inner)
    }
}
