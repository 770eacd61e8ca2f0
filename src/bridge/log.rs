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

use std::sync::Arc;

use crate::Error;
use crate::bridge::BridgeLibrary;
use crate::handler::Handler;
use crate::record::Record;
use crate::registry::LegacyRegistry;

/// The handler [`LogBridge`] attaches to the legacy root logger.
///
/// Every record published to it is re-emitted through [`log::logger()`]
/// with level, target, and message preserved, so legacy records flow into
/// whatever logger the application set up behind the `log` facade.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct ForwardingHandler {}

impl Handler for ForwardingHandler {
    fn publish(&self, record: &Record) {
        log::logger().log(
            &log::Record::builder()
                .args(record.args())
                .level(record.level().into())
                .target(record.target())
                .build(),
        );
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

/// A bridge library that reroutes legacy records into the `log` facade.
///
/// Installing attaches a [`ForwardingHandler`] to the legacy root logger;
/// uninstalling detaches it again. Whether the bridge is installed is always
/// derived from the registry rather than cached, so the library stays
/// correct when other code mutates the root logger between calls.
///
/// # Examples
///
/// ```
/// use logbridge::bridge::BridgeLibrary;
/// use logbridge::bridge::LogBridge;
/// use logbridge::registry::LegacyRegistry;
/// use logbridge::testing::MemoryRegistry;
///
/// let registry = MemoryRegistry::new();
/// let bridge = LogBridge::new(registry.clone());
///
/// bridge.install().unwrap();
/// assert!(bridge.installed());
/// assert_eq!(registry.root_handlers().len(), 1);
///
/// bridge.uninstall().unwrap();
/// assert!(!bridge.installed());
/// ```
#[derive(Debug)]
pub struct LogBridge {
    registry: Arc<dyn LegacyRegistry>,
    handler: Arc<ForwardingHandler>,
}

impl LogBridge {
    /// Create a bridge library over the given legacy registry.
    pub fn new(registry: impl LegacyRegistry) -> LogBridge {
        LogBridge {
            registry: Arc::new(registry),
            handler: Arc::new(ForwardingHandler::default()),
        }
    }

    /// Whether the forwarding handler is currently attached to the root
    /// logger.
    pub fn installed(&self) -> bool {
        let handler = self.handler();
        self.registry
            .root_handlers()
            .iter()
            .any(|attached| Arc::ptr_eq(attached, &handler))
    }

    fn handler(&self) -> Arc<dyn Handler> {
        self.handler.clone()
    }
}

impl BridgeLibrary for LogBridge {
    fn install(&self) -> Result<(), Error> {
        if self.installed() {
            return Ok(());
        }
        self.registry.add_root_handler(self.handler())
    }

    fn uninstall(&self) -> Result<(), Error> {
        // detaching an unattached handler is a registry-level no-op
        self.registry.remove_root_handler(&self.handler())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::handler::ConsoleHandler;
    use crate::record::Level;
    use crate::testing::MemoryRegistry;

    #[test]
    fn install_is_idempotent() {
        let registry = MemoryRegistry::new();
        let bridge = LogBridge::new(registry.clone());

        bridge.install().unwrap();
        bridge.install().unwrap();

        assert!(bridge.installed());
        assert_eq!(registry.root_handlers().len(), 1);
    }

    #[test]
    fn uninstall_detaches_only_the_forwarding_handler() {
        let registry = MemoryRegistry::new();
        let bridge = LogBridge::new(registry.clone());

        bridge.uninstall().unwrap();
        assert!(registry.root_handlers().is_empty());

        registry
            .add_root_handler(Arc::new(ConsoleHandler::default()))
            .unwrap();
        bridge.install().unwrap();
        assert_eq!(registry.root_handlers().len(), 2);

        bridge.uninstall().unwrap();
        let handlers = registry.root_handlers();
        assert_eq!(handlers.len(), 1);
        assert!(handlers[0].is_default_console());
    }

    static FORWARDED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    #[derive(Debug)]
    struct CapturingLogger;

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            FORWARDED.lock().unwrap().push(format!(
                "{} {} {}",
                record.level(),
                record.target(),
                record.args()
            ));
        }

        fn flush(&self) {}
    }

    // the log crate global can be set once per test binary, so every
    // assertion that needs it lives in this single test
    #[test]
    fn forwards_records_into_the_log_facade() {
        log::set_boxed_logger(Box::new(CapturingLogger)).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        let registry = MemoryRegistry::new();
        let bridge = LogBridge::new(registry.clone());
        bridge.install().unwrap();

        for handler in registry.root_handlers() {
            handler.publish(&Record::new(
                Level::Info,
                "vintage.core",
                format_args!("runtime {} adopted", 7),
            ));
        }

        let forwarded = FORWARDED.lock().unwrap();
        assert_eq!(forwarded.as_slice(), ["INFO vintage.core runtime 7 adopted"]);
    }
}
