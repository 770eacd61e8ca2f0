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

//! Traps report failures the bridging lifecycle suppresses.

use std::fmt;

use crate::Error;

mod default;

pub use self::default::DefaultTrap;

/// A sink for errors the bridging lifecycle suppresses.
///
/// Bridging must never abort application startup, so the lifecycle entry
/// points catch every collaborator failure. A trap is the channel those
/// failures are reported to before being discarded. It runs during logging
/// bootstrap and must not assume any logging pipeline is up yet.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Report one suppressed error.
    fn trap(&self, err: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
