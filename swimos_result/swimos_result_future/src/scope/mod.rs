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

//! A builder for results that depend on a group of concurrent tasks.
//!
//! [`with_concurrent_result`] runs a block that is passed a [`ResultScope`]. The block can use
//! the scope to spawn child tasks (and those children can spawn further children). The builder
//! completes when the block and every child have completed and reports the first failure, by
//! completion time, of any of them. A failing child does not affect its siblings.
//!
//! Cancelling the scope, from inside or outside, stops every child task. Cancellation is
//! reported separately from the result, as [`Cancelled`], and never as an
//! [`ApiResult::Error`].


mod config;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use futures::FutureExt;
use parking_lot::Mutex;
use swimos_api_result::ApiResult;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

pub use config::ScopeConfig;

/// Reported by [`with_concurrent_result`] when the scope was cancelled.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Error)]
#[error("The concurrent scope was cancelled.")]
pub struct Cancelled;

/// Returned when attempting to spawn a child into a scope that has already completed.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Error)]
#[error("The concurrent scope has already completed.")]
pub struct ScopeClosed;

type ChildTask = BoxFuture<'static, ()>;

struct ScopeShared<E> {
    first_failure: Mutex<Option<E>>,
    cancel: CancellationToken,
}

impl<E> ScopeShared<E> {
    fn new() -> Self {
        ScopeShared {
            first_failure: Mutex::new(None),
            cancel: CancellationToken::new(),
        }
    }

    /// Only the first failure to be recorded is kept.
    fn record_failure(&self, err: E) {
        let mut guard = self.first_failure.lock();
        if guard.is_none() {
            debug!("Captured the first failure in a concurrent scope.");
            *guard = Some(err);
        } else {
            trace!("Discarding a failure as the scope has already failed.");
        }
    }

    fn take_failure(&self) -> Option<E> {
        self.first_failure.lock().take()
    }
}

/// Handle passed to the block of [`with_concurrent_result`], used to spawn child tasks into the
/// scope. Handles can be cloned and moved into children.
pub struct ResultScope<E> {
    shared: Arc<ScopeShared<E>>,
    spawn_tx: mpsc::UnboundedSender<ChildTask>,
}

impl<E> Clone for ResultScope<E> {
    fn clone(&self) -> Self {
        ResultScope {
            shared: self.shared.clone(),
            spawn_tx: self.spawn_tx.clone(),
        }
    }
}

impl<E> std::fmt::Debug for ResultScope<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultScope")
            .field("cancelled", &self.shared.cancel.is_cancelled())
            .finish()
    }
}

impl<E: Send + 'static> ResultScope<E> {
    /// Spawn a child task into the scope. If the child fails, its error is captured by the scope
    /// (unless another failure was captured first). The returned handle resolves to the value
    /// of the child if it succeeds.
    pub fn spawn<T, F>(&self, child: F) -> Result<ChildHandle<T>, ScopeClosed>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let shared = self.shared.clone();
        let task = async move {
            match child.await {
                Ok(value) => {
                    let _ = tx.send(value);
                }
                Err(err) => shared.record_failure(err),
            }
        }
        .boxed();
        self.spawn_tx.send(task).map_err(|_| ScopeClosed)?;
        Ok(ChildHandle { rx })
    }
}

impl<E> ResultScope<E> {
    /// Cancel the scope. All children will be stopped and the builder will report
    /// [`Cancelled`].
    pub fn cancel(&self) {
        self.shared.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancel.is_cancelled()
    }

    /// Wait until the scope has been cancelled.
    pub async fn cancelled(&self) {
        self.shared.cancel.cancelled().await
    }
}

/// Future type for the value of a child spawned with [`ResultScope::spawn`]. This resolves to
/// nothing if the child failed (the failure is reported by the scope) or was stopped.
#[derive(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct ChildHandle<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Future for ChildHandle<T> {
    type Output = Option<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.rx.poll_unpin(cx).map(Result::ok)
    }
}

enum BlockState<T> {
    Running,
    Succeeded(T),
    Failed,
}

/// Run `block` in a new concurrent scope, using the ambient runtime for the child tasks.
///
/// # Arguments
/// * `block` - Creates the main task of the scope. It is passed a handle for spawning children.
pub async fn with_concurrent_result<T, E, F, Fut>(block: F) -> Result<ApiResult<T, E>, Cancelled>
where
    E: Send + 'static,
    F: FnOnce(ResultScope<E>) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    with_concurrent_result_config(ScopeConfig::default(), block).await
}

/// Run `block` in a new concurrent scope.
///
/// # Arguments
/// * `config` - Selects where the child tasks are executed.
/// * `block` - Creates the main task of the scope. It is passed a handle for spawning children.
pub async fn with_concurrent_result_config<T, E, F, Fut>(
    config: ScopeConfig,
    block: F,
) -> Result<ApiResult<T, E>, Cancelled>
where
    E: Send + 'static,
    F: FnOnce(ResultScope<E>) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let ScopeConfig { runtime } = config;
    let shared = Arc::new(ScopeShared::new());
    let (spawn_tx, mut spawn_rx) = mpsc::unbounded_channel();
    let scope = ResultScope {
        shared: shared.clone(),
        spawn_tx,
    };

    let block_task = block(scope);
    tokio::pin!(block_task);

    let mut children = JoinSet::new();
    let mut block_state = BlockState::Running;
    let mut spawn_open = true;
    let mut closed = false;

    loop {
        if !matches!(block_state, BlockState::Running) && children.is_empty() {
            // Nothing in the scope is running so a pending child can only have been sent
            // before its parent completed or through an escaped handle. Children accepted
            // before the channel is closed must still run.
            match spawn_rx.try_recv() {
                Ok(task) => {
                    spawn_child(&mut children, runtime.as_ref(), task);
                    continue;
                }
                Err(_) if !closed => {
                    trace!("Closing a concurrent scope to new children.");
                    spawn_rx.close();
                    closed = true;
                    continue;
                }
                Err(_) => break,
            }
        }

        tokio::select! {
            biased;
            _ = shared.cancel.cancelled() => {
                debug!("A concurrent scope was cancelled.");
                children.shutdown().await;
                return Err(Cancelled);
            }
            Some(joined) = children.join_next(), if !children.is_empty() => {
                if let Err(err) = joined {
                    handle_join_error(&shared, err);
                }
            }
            maybe_task = spawn_rx.recv(), if spawn_open => {
                match maybe_task {
                    Some(task) => spawn_child(&mut children, runtime.as_ref(), task),
                    None => spawn_open = false,
                }
            }
            output = &mut block_task, if matches!(block_state, BlockState::Running) => {
                block_state = match output {
                    Ok(value) => BlockState::Succeeded(value),
                    Err(err) => {
                        shared.record_failure(err);
                        BlockState::Failed
                    }
                };
            }
        }
    }

    drop(spawn_rx);
    if shared.cancel.is_cancelled() {
        debug!("A concurrent scope was cancelled.");
        return Err(Cancelled);
    }
    let result = match (shared.take_failure(), block_state) {
        (Some(err), _) => ApiResult::Error(err),
        (None, BlockState::Succeeded(value)) => ApiResult::Success(value),
        (None, _) => unreachable!("A failed block always records its error."),
    };
    Ok(result)
}

fn spawn_child(children: &mut JoinSet<()>, runtime: Option<&Handle>, task: ChildTask) {
    match runtime {
        Some(handle) => {
            children.spawn_on(task, handle);
        }
        None => {
            children.spawn(task);
        }
    }
}

fn handle_join_error<E>(shared: &ScopeShared<E>, err: JoinError) {
    if err.is_panic() {
        error!("A child task in a concurrent scope panicked.");
        std::panic::resume_unwind(err.into_panic());
    } else {
        debug!("A child task in a concurrent scope was stopped externally.");
        shared.cancel.cancel();
    }
}
