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

use thiserror::Error;

/// Type-erased error used when a result does not have a more specific error type.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Produced when a [`crate::ApiResult::Loading`] value is consumed as though it had already
/// completed.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Error)]
#[error("The result has not finished loading.")]
pub struct NotFinished;

/// Produced by the predicate gating operators when the predicate does not hold.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash, Error)]
#[error("{}", .message.as_deref().unwrap_or("A required condition was not satisfied."))]
pub struct ConditionNotSatisfied {
    message: Option<String>,
}

impl ConditionNotSatisfied {
    pub fn new() -> Self {
        ConditionNotSatisfied::default()
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        ConditionNotSatisfied {
            message: Some(message.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Produced when a successful value was required from a collection of results that contained
/// none.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Error)]
#[error("The collection did not contain a successful result.")]
pub struct NoSuchElement;

/// Errors that may wrap another error of the same type as their cause.
pub trait WithCause: Sized {
    /// Replace the error with its cause. If there is no cause, the error is returned unchanged
    /// as the `Err` variant.
    fn into_cause(self) -> Result<Self, Self>;
}
