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

//! Handlers, the legacy runtime's output sinks.

use std::fmt;
use std::io;
use std::io::Write;

use crate::record::Record;

/// An output sink attached to a logger in the legacy runtime.
///
/// Handlers are the legacy API's unit of log consumption. This crate manages
/// their attachment to the root logger; delivering records to them remains
/// the runtime's job. Handler identity is the attached instance
/// ([`Arc::ptr_eq`](std::sync::Arc::ptr_eq)), never the handler's type or
/// name.
pub trait Handler: fmt::Debug + Send + Sync + 'static {
    /// Consume one record routed to the logger this handler is attached to.
    fn publish(&self, record: &Record);

    /// Flush any buffered output.
    ///
    /// Default to no-op.
    fn flush(&self) {}

    /// Whether this is the stock console handler the legacy runtime attaches
    /// out of the box when nobody has configured logging.
    ///
    /// Default to `false`; only the stock console kind answers `true`.
    /// Handlers that merely happen to write to the console are not the stock
    /// kind and must keep the default.
    fn is_default_console(&self) -> bool {
        false
    }
}

/// The stock console handler of an unconfigured legacy runtime.
///
/// Records are written to stderr with a minimal `LEVEL target: message`
/// layout. An untouched runtime carries exactly one of these on its root
/// logger and nothing else; [`BridgeController`] recognizes and removes it
/// when redirecting the runtime.
///
/// [`BridgeController`]: crate::BridgeController
///
/// # Examples
///
/// ```
/// use logbridge::handler::ConsoleHandler;
/// use logbridge::handler::Handler;
///
/// let console = ConsoleHandler::default();
/// assert!(console.is_default_console());
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct ConsoleHandler {}

impl Handler for ConsoleHandler {
    fn publish(&self, record: &Record) {
        let _ = writeln!(
            io::stderr(),
            "{} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }

    fn is_default_console(&self) -> bool {
        true
    }
}
