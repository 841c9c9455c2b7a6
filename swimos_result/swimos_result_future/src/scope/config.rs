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

use tokio::runtime::Handle;

/// Configuration for a concurrent scope.
#[derive(Clone, Debug, Default)]
pub struct ScopeConfig {
    /// The runtime on which child tasks are spawned. If this is not specified, the runtime
    /// that is running the scope is used.
    pub runtime: Option<Handle>,
}

impl ScopeConfig {
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }
}
