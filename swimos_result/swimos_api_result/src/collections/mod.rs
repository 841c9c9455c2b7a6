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

#[cfg(test)]
mod tests;

use std::iter::FilterMap;

use crate::errors::{ConditionNotSatisfied, NoSuchElement, NotFinished};
use crate::ApiResult;

const EMPTY_COLLECTION: &str = "collection was empty";

type Extract<T, E, O> = fn(ApiResult<T, E>) -> Option<O>;

/// Operations on sequences of [`ApiResult`]s. The sequence is only consumed as far as is
/// required to produce the output.
pub trait ApiResultIterExt<T, E>: Iterator<Item = ApiResult<T, E>> + Sized {
    /// Collect the values of the results if they all succeeded. Otherwise, the first result
    /// that did not succeed determines the output, with [`ApiResult::Loading`] being treated as
    /// a failure of [`NotFinished`]. Later failures are not inspected.
    fn merge(self) -> ApiResult<Vec<T>, E>
    where
        E: From<NotFinished>,
    {
        let mut values = Vec::with_capacity(self.size_hint().0);
        for result in self {
            match result {
                ApiResult::Success(value) => values.push(value),
                ApiResult::Error(err) => return ApiResult::Error(err),
                ApiResult::Loading => return ApiResult::Error(NotFinished.into()),
            }
        }
        ApiResult::Success(values)
    }

    /// The values of the successful results, in order.
    fn successes(self) -> FilterMap<Self, Extract<T, E, T>> {
        self.filter_map(ApiResult::ok as Extract<T, E, T>)
    }

    /// The errors of the failed results, in order.
    fn errors(self) -> FilterMap<Self, Extract<T, E, E>> {
        self.filter_map(ApiResult::err as Extract<T, E, E>)
    }

    /// The first successful result or a failure of [`NoSuchElement`] if there is none.
    fn first_success(self) -> ApiResult<T, E>
    where
        E: From<NoSuchElement>,
    {
        self.first_success_or_err().into()
    }

    fn first_success_or_none(mut self) -> Option<T> {
        self.find_map(ApiResult::ok)
    }

    fn first_success_or_err(self) -> Result<T, E>
    where
        E: From<NoSuchElement>,
    {
        self.first_success_or_none().ok_or_else(|| NoSuchElement.into())
    }

    /// Partition the results into the successful values and the errors, preserving order
    /// within each. Results that are still loading are counted as errors of [`NotFinished`].
    fn accumulate(self) -> (Vec<T>, Vec<E>)
    where
        E: From<NotFinished>,
    {
        let mut values = vec![];
        let mut errors = vec![];
        for result in self {
            match result {
                ApiResult::Success(value) => values.push(value),
                ApiResult::Error(err) => errors.push(err),
                ApiResult::Loading => errors.push(NotFinished.into()),
            }
        }
        (values, errors)
    }

    /// Apply [`ApiResult::map`] to every result in the sequence.
    fn map_results<U, F>(self, f: F) -> MapResults<Self, F>
    where
        F: FnMut(T) -> U,
    {
        MapResults { iter: self, f }
    }
}

impl<I, T, E> ApiResultIterExt<T, E> for I where I: Iterator<Item = ApiResult<T, E>> {}

/// Iterator for the [`ApiResultIterExt::map_results`] method.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct MapResults<I, F> {
    iter: I,
    f: F,
}

impl<I, F, T, U, E> Iterator for MapResults<I, F>
where
    I: Iterator<Item = ApiResult<T, E>>,
    F: FnMut(T) -> U,
{
    type Item = ApiResult<U, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let MapResults { iter, f } = self;
        iter.next().map(|result| result.map(f))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, E> ApiResult<Vec<T>, E> {
    /// Transform each element of a successful collection.
    pub fn map_values<U, F>(self, f: F) -> ApiResult<Vec<U>, E>
    where
        F: FnMut(T) -> U,
    {
        self.map(|values| values.into_iter().map(f).collect())
    }

    /// Retain the elements of a successful collection that satisfy `pred`.
    pub fn filter_values<P>(self, mut pred: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.map(|mut values| {
            values.retain(|value| pred(value));
            values
        })
    }

    /// Run `f` if the result is a successful, empty collection.
    pub fn on_empty<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if matches!(&self, ApiResult::Success(values) if values.is_empty()) {
            f();
        }
        self
    }

    /// Fail with [`ConditionNotSatisfied`] if the result is a successful, empty collection.
    pub fn error_if_empty(self) -> Self
    where
        E: From<ConditionNotSatisfied>,
    {
        self.error_if_empty_with(|| ConditionNotSatisfied::with_message(EMPTY_COLLECTION).into())
    }

    pub fn error_if_empty_with<X>(self, exc: X) -> Self
    where
        X: FnOnce() -> E,
    {
        self.error_if(Vec::is_empty, exc)
    }
}
