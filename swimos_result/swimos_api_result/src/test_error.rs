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

use thiserror::Error;

use crate::errors::{ConditionNotSatisfied, NoSuchElement, NotFinished, WithCause};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TestError {
    #[error("Failed with code {0}.")]
    Failed(i32),
    #[error("Wrapped failure.")]
    Wrapped(Box<TestError>),
    #[error(transparent)]
    NotFinished(#[from] NotFinished),
    #[error(transparent)]
    Condition(#[from] ConditionNotSatisfied),
    #[error(transparent)]
    NoElement(#[from] NoSuchElement),
}

impl WithCause for TestError {
    fn into_cause(self) -> Result<Self, Self> {
        match self {
            TestError::Wrapped(cause) => Ok(*cause),
            ow => Err(ow),
        }
    }
}

pub type TestResult<T> = crate::ApiResult<T, TestError>;
