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

use crate::bridge::BridgeLibrary;
use crate::registry::LegacyRegistry;
use crate::resolver::HandlerResolver;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// The fully qualified identifier of the forwarding handler a bridge
/// library attaches to the legacy root logger.
///
/// [`BridgeController`] queries the resolver with this identifier before
/// touching any shared logging state. Hosts that carry a bridge register it
/// with their resolver.
pub const BRIDGE_HANDLER: &str = "logbridge::bridge::ForwardingHandler";

/// Manages the redirection of a legacy logging runtime into the unified
/// pipeline.
///
/// A host logging system drives the controller through two lifecycle hooks:
/// [`before_initialize`][BridgeController::before_initialize] once during
/// startup and [`clean_up`][BridgeController::clean_up] on shutdown or
/// reconfiguration. Redirection is destructive, it removes the stock
/// console handler, so it only happens while the legacy runtime is still in
/// its untouched default state.
///
/// Neither hook ever reports an error to the caller. Collaborator failures
/// go to the configured [`Trap`] and startup proceeds without the bridge.
///
/// # Examples
///
/// ```
/// use logbridge::BRIDGE_HANDLER;
/// use logbridge::BridgeController;
/// use logbridge::handler::ConsoleHandler;
/// use logbridge::registry::LegacyRegistry;
/// use logbridge::resolver::StaticResolver;
/// use logbridge::testing::MemoryRegistry;
/// use logbridge::testing::RecordingBridge;
///
/// let registry = MemoryRegistry::new().with_handler(ConsoleHandler::default());
/// let bridge = RecordingBridge::new();
/// let resolver = StaticResolver::new([BRIDGE_HANDLER]);
///
/// let controller = BridgeController::new(registry.clone(), bridge.clone(), resolver);
///
/// controller.before_initialize();
/// assert!(bridge.installed());
/// assert!(registry.root_handlers().is_empty());
///
/// controller.clean_up();
/// assert!(!bridge.installed());
/// ```
#[derive(Debug)]
pub struct BridgeController {
    registry: Arc<dyn LegacyRegistry>,
    bridge: Box<dyn BridgeLibrary>,
    resolver: Box<dyn HandlerResolver>,
    trap: Box<dyn Trap>,
}

impl BridgeController {
    /// Create a controller over the given collaborators.
    ///
    /// Suppressed failures are reported through [`DefaultTrap`] unless
    /// [`with_trap`][BridgeController::with_trap] replaces it.
    pub fn new(
        registry: impl LegacyRegistry,
        bridge: impl Into<Box<dyn BridgeLibrary>>,
        resolver: impl Into<Box<dyn HandlerResolver>>,
    ) -> BridgeController {
        BridgeController {
            registry: Arc::new(registry),
            bridge: bridge.into(),
            resolver: resolver.into(),
            trap: Box::new(DefaultTrap::default()),
        }
    }

    /// Replace the [`Trap`] suppressed failures are reported to.
    pub fn with_trap(mut self, trap: impl Into<Box<dyn Trap>>) -> BridgeController {
        self.trap = trap.into();
        self
    }

    /// Startup hook. Redirects the legacy runtime when it is safe to do so.
    ///
    /// When [eligible][BridgeController::is_eligible_for_bridging], any
    /// previous installation is removed first so repeated calls cannot
    /// accumulate handlers, then the bridge is installed. Never propagates
    /// an error; on failure the runtime keeps logging without the bridge.
    pub fn before_initialize(&self) {
        self.configure_bridge_handler();
    }

    /// Shutdown hook. Removes the bridge if one could have been installed.
    ///
    /// A no-op when the forwarding handler is unavailable. The stock
    /// console handler is not restored; the legacy runtime owns its own
    /// re-initialization. Never propagates an error.
    pub fn clean_up(&self) {
        if self.is_bridge_handler_available() {
            self.remove_bridge_if_installed();
        }
    }

    /// Whether redirection may be attempted at all.
    ///
    /// True iff the forwarding handler is resolvable and the legacy root
    /// logger is still in its untouched default state, meaning no handlers
    /// or exactly the stock console handler. A custom handler always vetoes
    /// bridging: removing it would discard configuration the application
    /// set up on purpose.
    pub fn is_eligible_for_bridging(&self) -> bool {
        self.is_bridge_handler_available() && self.has_at_most_one_default_console_handler()
    }

    /// Whether the forwarding handler resolves under the resolver supplied
    /// at construction.
    pub fn is_bridge_handler_available(&self) -> bool {
        self.resolver.is_present(BRIDGE_HANDLER)
    }

    fn configure_bridge_handler(&self) {
        if self.is_eligible_for_bridging() {
            self.remove_bridge_if_installed();
            if let Err(err) = self.bridge.install() {
                self.trap.trap(&err);
            }
        }
    }

    fn has_at_most_one_default_console_handler(&self) -> bool {
        match self.registry.root_handlers().as_slice() {
            [] => true,
            [only] => only.is_default_console(),
            _ => false,
        }
    }

    // Shared by the install and cleanup paths. The stock console handler
    // goes first so a subsequent install leaves no duplicate console
    // output; the uninstall runs regardless of how the first step fared.
    fn remove_bridge_if_installed(&self) {
        self.remove_default_root_handler();
        if let Err(err) = self.bridge.uninstall() {
            self.trap.trap(&err);
        }
    }

    fn remove_default_root_handler(&self) {
        match self.registry.root_handlers().as_slice() {
            [only] if only.is_default_console() => {
                if let Err(err) = self.registry.remove_root_handler(only) {
                    self.trap.trap(&err);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ConsoleHandler;
    use crate::resolver::StaticResolver;
    use crate::testing::MemoryRegistry;
    use crate::testing::RecordingBridge;
    use crate::testing::RecordingTrap;
    use crate::testing::StubHandler;

    fn resolvable() -> StaticResolver {
        StaticResolver::new([BRIDGE_HANDLER])
    }

    #[test]
    fn empty_root_logger_is_eligible() {
        let controller =
            BridgeController::new(MemoryRegistry::new(), RecordingBridge::new(), resolvable());

        assert!(controller.is_eligible_for_bridging());
    }

    #[test]
    fn lone_console_handler_is_eligible() {
        let registry = MemoryRegistry::new().with_handler(ConsoleHandler::default());
        let controller = BridgeController::new(registry, RecordingBridge::new(), resolvable());

        assert!(controller.is_eligible_for_bridging());
    }

    #[test]
    fn lone_custom_handler_is_not_eligible() {
        let registry = MemoryRegistry::new().with_handler(StubHandler::new("audit"));
        let controller = BridgeController::new(registry, RecordingBridge::new(), resolvable());

        assert!(!controller.is_eligible_for_bridging());
    }

    #[test]
    fn multiple_handlers_are_never_eligible() {
        // even when every one of them is the stock console kind
        let registry = MemoryRegistry::new()
            .with_handler(ConsoleHandler::default())
            .with_handler(ConsoleHandler::default());
        let controller = BridgeController::new(registry, RecordingBridge::new(), resolvable());

        assert!(!controller.is_eligible_for_bridging());
    }

    #[test]
    fn unresolvable_handler_vetoes_eligibility() {
        let registry = MemoryRegistry::new();
        let bridge = RecordingBridge::new();
        let controller =
            BridgeController::new(registry.clone(), bridge.clone(), StaticResolver::default());

        assert!(!controller.is_bridge_handler_available());
        assert!(!controller.is_eligible_for_bridging());

        controller.before_initialize();

        assert!(!bridge.installed());
        assert_eq!(bridge.install_attempts(), 0);
        assert!(registry.root_handlers().is_empty());
    }

    #[test]
    fn denied_removal_is_trapped_and_install_still_attempted() {
        let registry = MemoryRegistry::new().with_handler(ConsoleHandler::default());
        let bridge = RecordingBridge::new();
        let trap = RecordingTrap::new();
        let controller = BridgeController::new(registry.clone(), bridge.clone(), resolvable())
            .with_trap(trap.clone());

        registry.deny_mutations(true);
        controller.before_initialize();

        assert!(bridge.installed());
        assert_eq!(bridge.install_attempts(), 1);
        // the console handler survived the denied removal
        assert_eq!(registry.root_handlers().len(), 1);
        let errors = trap.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("mutate root logger handlers"));
    }

    #[test]
    fn failing_uninstall_is_trapped_and_install_still_attempted() {
        let bridge = RecordingBridge::new();
        let trap = RecordingTrap::new();
        let controller =
            BridgeController::new(MemoryRegistry::new(), bridge.clone(), resolvable())
                .with_trap(trap.clone());

        bridge.fail_uninstalls(true);
        controller.before_initialize();

        assert!(bridge.installed());
        assert_eq!(bridge.uninstall_attempts(), 1);
        assert_eq!(bridge.install_attempts(), 1);
        let errors = trap.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("bridge library entry point failed"));
    }

    #[test]
    fn failing_install_never_escapes() {
        let bridge = RecordingBridge::new();
        let trap = RecordingTrap::new();
        let controller =
            BridgeController::new(MemoryRegistry::new(), bridge.clone(), resolvable())
                .with_trap(trap.clone());

        bridge.fail_installs(true);
        controller.before_initialize();

        assert!(!bridge.installed());
        let errors = trap.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("bridge library entry point failed"));
    }

    #[test]
    fn clean_up_skips_when_handler_unavailable() {
        let registry = MemoryRegistry::new().with_handler(ConsoleHandler::default());
        let bridge = RecordingBridge::new();
        let controller =
            BridgeController::new(registry.clone(), bridge.clone(), StaticResolver::default());

        controller.clean_up();

        assert_eq!(bridge.uninstall_attempts(), 0);
        assert_eq!(registry.root_handlers().len(), 1);
    }
}
