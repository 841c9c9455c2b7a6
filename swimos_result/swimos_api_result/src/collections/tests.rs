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

use std::cell::Cell;

use crate::collections::ApiResultIterExt;
use crate::errors::{ConditionNotSatisfied, NoSuchElement, NotFinished};
use crate::test_error::{TestError, TestResult};
use crate::ApiResult;

fn mixed() -> Vec<TestResult<i32>> {
    vec![
        ApiResult::Success(1),
        ApiResult::Error(TestError::Failed(1)),
        ApiResult::Loading,
        ApiResult::Success(2),
        ApiResult::Error(TestError::Failed(2)),
    ]
}

#[test]
fn merge_all_successes() {
    let results: Vec<TestResult<i32>> = vec![ApiResult::Success(1), ApiResult::Success(2)];
    assert_eq!(results.into_iter().merge(), ApiResult::Success(vec![1, 2]));
}

#[test]
fn merge_empty() {
    let results: Vec<TestResult<i32>> = vec![];
    assert_eq!(results.into_iter().merge(), ApiResult::Success(vec![]));
}

#[test]
fn merge_first_failure_wins() {
    let results: Vec<TestResult<i32>> = vec![
        ApiResult::Success(1),
        ApiResult::Error(TestError::Failed(1)),
        ApiResult::Success(2),
        ApiResult::Error(TestError::Failed(2)),
    ];
    assert_eq!(
        results.into_iter().merge(),
        ApiResult::Error(TestError::Failed(1))
    );
}

#[test]
fn merge_loading_is_a_failure() {
    let results: Vec<TestResult<i32>> = vec![
        ApiResult::Success(1),
        ApiResult::Loading,
        ApiResult::Error(TestError::Failed(2)),
    ];
    assert_eq!(
        results.into_iter().merge(),
        ApiResult::Error(TestError::NotFinished(NotFinished))
    );
}

#[test]
fn merge_stops_at_first_failure() {
    let consumed = Cell::new(0);
    let results = mixed().into_iter().inspect(|_| consumed.set(consumed.get() + 1));
    assert!(results.merge().is_error());
    assert_eq!(consumed.get(), 2);
}

#[test]
fn successes_and_errors() {
    assert_eq!(mixed().into_iter().successes().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(
        mixed().into_iter().errors().collect::<Vec<_>>(),
        vec![TestError::Failed(1), TestError::Failed(2)]
    );
}

#[test]
fn first_success() {
    let results = vec![
        TestResult::Loading,
        TestResult::Error(TestError::Failed(0)),
        TestResult::Success(4),
        TestResult::Success(5),
    ];
    assert_eq!(results.clone().into_iter().first_success(), ApiResult::Success(4));
    assert_eq!(results.clone().into_iter().first_success_or_none(), Some(4));
    assert_eq!(results.into_iter().first_success_or_err(), Ok(4));
}

#[test]
fn first_success_without_successes() {
    let results = vec![TestResult::<i32>::Loading, TestResult::Error(TestError::Failed(0))];
    assert_eq!(
        results.clone().into_iter().first_success(),
        ApiResult::Error(TestError::NoElement(NoSuchElement))
    );
    assert_eq!(results.clone().into_iter().first_success_or_none(), None);
    assert_eq!(
        results.into_iter().first_success_or_err(),
        Err(TestError::NoElement(NoSuchElement))
    );
}

#[test]
fn accumulate() {
    let (values, errors) = mixed().into_iter().accumulate();
    assert_eq!(values, vec![1, 2]);
    assert_eq!(
        errors,
        vec![
            TestError::Failed(1),
            TestError::NotFinished(NotFinished),
            TestError::Failed(2),
        ]
    );
}

#[test]
fn map_results() {
    let mapped = mixed()
        .into_iter()
        .map_results(|n| n * 10)
        .collect::<Vec<_>>();
    assert_eq!(
        mapped,
        vec![
            ApiResult::Success(10),
            ApiResult::Error(TestError::Failed(1)),
            ApiResult::Loading,
            ApiResult::Success(20),
            ApiResult::Error(TestError::Failed(2)),
        ]
    );
}

#[test]
fn map_and_filter_values() {
    let result: TestResult<Vec<i32>> = ApiResult::Success(vec![1, 2, 3, 4]);
    assert_eq!(
        result.map_values(|n| n * 2).filter_values(|n| *n > 4),
        ApiResult::Success(vec![6, 8])
    );

    let error: TestResult<Vec<i32>> = ApiResult::Error(TestError::Failed(0));
    assert_eq!(
        error.map_values(|n| n * 2),
        ApiResult::Error(TestError::Failed(0))
    );
}

#[test]
fn on_empty() {
    let called = Cell::new(0);
    let empty: TestResult<Vec<i32>> = ApiResult::Success(vec![]);
    let out = empty.on_empty(|| called.set(called.get() + 1));
    assert_eq!(out, ApiResult::Success(vec![]));

    let full: TestResult<Vec<i32>> = ApiResult::Success(vec![1]);
    let _ = full.on_empty(|| called.set(called.get() + 1));

    let loading: TestResult<Vec<i32>> = ApiResult::Loading;
    let _ = loading.on_empty(|| called.set(called.get() + 1));

    assert_eq!(called.get(), 1);
}

#[test]
fn error_if_empty() {
    let empty: TestResult<Vec<i32>> = ApiResult::Success(vec![]);
    assert_eq!(
        empty.error_if_empty(),
        ApiResult::Error(TestError::Condition(ConditionNotSatisfied::with_message(
            "collection was empty"
        )))
    );

    let full: TestResult<Vec<i32>> = ApiResult::Success(vec![1]);
    assert_eq!(full.error_if_empty(), ApiResult::Success(vec![1]));

    let empty: TestResult<Vec<i32>> = ApiResult::Success(vec![]);
    assert_eq!(
        empty.error_if_empty_with(|| TestError::Failed(0)),
        ApiResult::Error(TestError::Failed(0))
    );
}
