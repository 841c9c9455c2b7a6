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


use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{ready, TryFuture};
use pin_project::pin_project;
use swimos_api_result::ApiResult;

/// Future type for the [`ApiResultFutureExt::into_api_result`] method.
#[pin_project]
#[derive(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct IntoApiResultFuture<F> {
    #[pin]
    inner: F,
}

impl<F: TryFuture> Future for IntoApiResultFuture<F> {
    type Output = ApiResult<F::Ok, F::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let result = ready!(self.project().inner.try_poll(cx));
        Poll::Ready(result.into())
    }
}

pub trait ApiResultFutureExt: TryFuture + Sized {
    /// Capture the outcome of a fallible future as an [`ApiResult`]. If the future is dropped
    /// before it completes, no result is produced at all.
    fn into_api_result(self) -> IntoApiResultFuture<Self> {
        IntoApiResultFuture { inner: self }
    }
}

impl<F: TryFuture> ApiResultFutureExt for F {}
