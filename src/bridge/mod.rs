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

//! Bridge libraries carry legacy records into a modern logging facade.

use std::fmt;

use crate::Error;

#[cfg(feature = "bridge-log")]
mod log;

#[cfg(feature = "bridge-log")]
pub use self::log::ForwardingHandler;
#[cfg(feature = "bridge-log")]
pub use self::log::LogBridge;

/// The global entry points of a bridge library.
///
/// A bridge library owns a forwarding handler and knows how to attach it to
/// and detach it from the legacy runtime. Both entry points are safe to call
/// redundantly: installing an already installed bridge and uninstalling an
/// absent one are no-ops.
pub trait BridgeLibrary: fmt::Debug + Send + Sync + 'static {
    /// Attach the forwarding handler to the legacy runtime.
    fn install(&self) -> Result<(), Error>;

    /// Detach the forwarding handler from the legacy runtime.
    fn uninstall(&self) -> Result<(), Error>;
}

impl<T: BridgeLibrary> From<T> for Box<dyn BridgeLibrary> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
