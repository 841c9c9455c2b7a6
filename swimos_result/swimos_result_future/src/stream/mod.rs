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


use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::FusedStream;
use futures::{ready, Stream, TryFuture, TryStream};
use pin_project::pin_project;
use swimos_api_result::ApiResult;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EmitState {
    Init,
    Running,
    Terminated,
}

/// A stream that reports [`ApiResult::Loading`] and then runs another stream of [`Result`]s
/// until it produces an error, after which it terminates.
#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct ResultStream<Str> {
    #[pin]
    stream: Str,
    state: EmitState,
}

impl<Str> ResultStream<Str> {
    pub fn new(stream: Str) -> Self {
        ResultStream {
            stream,
            state: EmitState::Init,
        }
    }
}

impl<Str: TryStream> Stream for ResultStream<Str> {
    type Item = ApiResult<Str::Ok, Str::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let projected = self.project();
        match *projected.state {
            EmitState::Init => {
                *projected.state = EmitState::Running;
                Poll::Ready(Some(ApiResult::Loading))
            }
            EmitState::Running => match ready!(projected.stream.try_poll_next(cx)) {
                Some(Ok(value)) => Poll::Ready(Some(ApiResult::Success(value))),
                Some(Err(err)) => {
                    trace!("Result stream terminated by an error.");
                    *projected.state = EmitState::Terminated;
                    Poll::Ready(Some(ApiResult::Error(err)))
                }
                None => {
                    *projected.state = EmitState::Terminated;
                    Poll::Ready(None)
                }
            },
            EmitState::Terminated => Poll::Ready(None),
        }
    }
}

impl<Str: TryStream> FusedStream for ResultStream<Str> {
    fn is_terminated(&self) -> bool {
        self.state == EmitState::Terminated
    }
}

/// A stream that reports [`ApiResult::Loading`] and then the outcome of a single fallible
/// future.
#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct LoadingThen<F> {
    #[pin]
    future: F,
    state: EmitState,
}

impl<F> LoadingThen<F> {
    pub fn new(future: F) -> Self {
        LoadingThen {
            future,
            state: EmitState::Init,
        }
    }
}

impl<F: TryFuture> Stream for LoadingThen<F> {
    type Item = ApiResult<F::Ok, F::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let projected = self.project();
        match *projected.state {
            EmitState::Init => {
                *projected.state = EmitState::Running;
                Poll::Ready(Some(ApiResult::Loading))
            }
            EmitState::Running => {
                let result = ready!(projected.future.try_poll(cx));
                *projected.state = EmitState::Terminated;
                Poll::Ready(Some(result.into()))
            }
            EmitState::Terminated => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            EmitState::Init => (2, Some(2)),
            EmitState::Running => (1, Some(1)),
            EmitState::Terminated => (0, Some(0)),
        }
    }
}

impl<F: TryFuture> FusedStream for LoadingThen<F> {
    fn is_terminated(&self) -> bool {
        self.state == EmitState::Terminated
    }
}

/// Create a stream that emits [`ApiResult::Loading`] immediately and then the outcome of the
/// future.
pub fn result_stream<F: TryFuture>(future: F) -> LoadingThen<F> {
    LoadingThen::new(future)
}

/// Adapt a stream of [`Result`]s to emit [`ApiResult::Loading`] first, followed by a success
/// for each value. The first error is emitted and ends the stream.
pub fn as_result_stream<Str: TryStream>(stream: Str) -> ResultStream<Str> {
    ResultStream::new(stream)
}

pub trait ResultStreamExt: TryStream + Sized {
    /// See [`as_result_stream`].
    fn as_result_stream(self) -> ResultStream<Self> {
        ResultStream::new(self)
    }
}

impl<Str: TryStream> ResultStreamExt for Str {}

/// Stream type for the [`ApiResultStreamExt::map_results`] method.
#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct MapResults<Str, F> {
    #[pin]
    stream: Str,
    f: F,
}

impl<Str, F, T, U, E> Stream for MapResults<Str, F>
where
    Str: Stream<Item = ApiResult<T, E>>,
    F: FnMut(T) -> U,
{
    type Item = ApiResult<U, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let projected = self.project();
        let f = projected.f;
        Poll::Ready(ready!(projected.stream.poll_next(cx)).map(|result| result.map(f)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

/// Stream type for the [`ApiResultStreamExt::successes`] method.
#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct Successes<Str> {
    #[pin]
    stream: Str,
}

impl<Str, T, E> Stream for Successes<Str>
where
    Str: Stream<Item = ApiResult<T, E>>,
{
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut projected = self.project();
        loop {
            match ready!(projected.stream.as_mut().poll_next(cx)) {
                Some(ApiResult::Success(value)) => break Poll::Ready(Some(value)),
                Some(_) => continue,
                None => break Poll::Ready(None),
            }
        }
    }
}

/// Stream type for the [`ApiResultStreamExt::skip_loading`] method.
#[pin_project]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct SkipLoading<Str> {
    #[pin]
    stream: Str,
}

impl<Str, T, E> Stream for SkipLoading<Str>
where
    Str: Stream<Item = ApiResult<T, E>>,
{
    type Item = ApiResult<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut projected = self.project();
        loop {
            match ready!(projected.stream.as_mut().poll_next(cx)) {
                Some(ApiResult::Loading) => continue,
                ow => break Poll::Ready(ow),
            }
        }
    }
}

/// Operations on streams of [`ApiResult`]s.
pub trait ApiResultStreamExt<T, E>: Stream<Item = ApiResult<T, E>> + Sized {
    /// Apply [`ApiResult::map`] to every item of the stream.
    fn map_results<U, F>(self, f: F) -> MapResults<Self, F>
    where
        F: FnMut(T) -> U,
    {
        MapResults { stream: self, f }
    }

    /// Only emit the values of successful items.
    fn successes(self) -> Successes<Self> {
        Successes { stream: self }
    }

    /// Drop any [`ApiResult::Loading`] items.
    fn skip_loading(self) -> SkipLoading<Self> {
        SkipLoading { stream: self }
    }
}

impl<Str, T, E> ApiResultStreamExt<T, E> for Str where Str: Stream<Item = ApiResult<T, E>> {}
