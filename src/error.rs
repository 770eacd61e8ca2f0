// Copyright 2024 FastLabs Developers
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

/// Failures raised by bridge collaborators during install or removal.
///
/// These never escape the lifecycle entry points: [`BridgeController`]
/// reports them to its [`Trap`] and discards them, so the host keeps
/// starting up with whatever logging it already has.
///
/// [`BridgeController`]: crate::BridgeController
/// [`Trap`]: crate::Trap
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Attaching or detaching a handler on the legacy root logger failed.
    #[error("failed to mutate root logger handlers: {0}")]
    HandlerMutation(#[source] anyhow::Error),
    /// The bridge library's install or uninstall entry point failed.
    #[error("bridge library entry point failed: {0}")]
    BridgeLibrary(#[source] anyhow::Error),
}

impl Error {
    /// Wrap a handler attach or detach failure reported by the legacy
    /// runtime.
    pub fn handler_mutation(source: impl Into<anyhow::Error>) -> Error {
        Error::HandlerMutation(source.into())
    }

    /// Wrap a failure raised by a bridge library entry point.
    pub fn bridge_library(source: impl Into<anyhow::Error>) -> Error {
        Error::BridgeLibrary(source.into())
    }
}
