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

//! Access to the legacy runtime's root logger.

use std::fmt;
use std::sync::Arc;

use crate::Error;
use crate::handler::Handler;

/// The legacy runtime's root logger, seen as a handler registry.
///
/// The runtime owns the root logger as shared global state; this trait is
/// the capability the bridging lifecycle needs from it: observing which
/// handlers are attached and attaching or detaching one. Other code may
/// mutate the same state at any time, which is why the lifecycle re-reads
/// it on every decision instead of caching.
///
/// Implementations must not panic. Mutation failures are reported as
/// [`Error`] values and the lifecycle degrades gracefully.
pub trait LegacyRegistry: fmt::Debug + Send + Sync + 'static {
    /// A snapshot of the handlers currently attached to the root logger, in
    /// attachment order.
    fn root_handlers(&self) -> Vec<Arc<dyn Handler>>;

    /// Attach `handler` to the root logger.
    fn add_root_handler(&self, handler: Arc<dyn Handler>) -> Result<(), Error>;

    /// Detach `handler` from the root logger.
    ///
    /// Detaching a handler that is not attached is a no-op, not an error.
    fn remove_root_handler(&self, handler: &Arc<dyn Handler>) -> Result<(), Error>;
}
