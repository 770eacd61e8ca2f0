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

//! Test doubles for the bridging collaborators.
//!
//! These types exercise the bridging lifecycle without a real legacy
//! runtime: an in-memory registry, a bridge library that records its calls,
//! a trap that collects suppressed errors, and a plain stub handler. Each
//! double shares its state across clones, so keep a clone of whatever you
//! hand to the controller and assert on it afterward.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use crate::Error;
use crate::bridge::BridgeLibrary;
use crate::handler::Handler;
use crate::record::Record;
use crate::registry::LegacyRegistry;
use crate::trap::Trap;

/// An in-memory [`LegacyRegistry`].
///
/// # Examples
///
/// ```
/// use logbridge::handler::ConsoleHandler;
/// use logbridge::registry::LegacyRegistry;
/// use logbridge::testing::MemoryRegistry;
///
/// let registry = MemoryRegistry::new().with_handler(ConsoleHandler::default());
/// assert_eq!(registry.root_handlers().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryRegistry {
    state: Arc<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    handlers: Mutex<Vec<Arc<dyn Handler>>>,
    deny_mutations: AtomicBool,
}

impl MemoryRegistry {
    /// Create a registry with no handlers attached.
    pub fn new() -> MemoryRegistry {
        MemoryRegistry::default()
    }

    /// Attach `handler` during construction.
    pub fn with_handler(self, handler: impl Handler) -> MemoryRegistry {
        self.handlers().push(Arc::new(handler));
        self
    }

    /// Deny subsequent attach and detach calls, making them return
    /// [`Error::HandlerMutation`].
    pub fn deny_mutations(&self, deny: bool) {
        self.state.deny_mutations.store(deny, Ordering::SeqCst);
    }

    fn handlers(&self) -> MutexGuard<'_, Vec<Arc<dyn Handler>>> {
        self.state.handlers.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_mutable(&self) -> Result<(), Error> {
        if self.state.deny_mutations.load(Ordering::SeqCst) {
            return Err(Error::handler_mutation(anyhow::anyhow!(
                "registry mutations denied"
            )));
        }
        Ok(())
    }
}

impl LegacyRegistry for MemoryRegistry {
    fn root_handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers().clone()
    }

    fn add_root_handler(&self, handler: Arc<dyn Handler>) -> Result<(), Error> {
        self.check_mutable()?;
        self.handlers().push(handler);
        Ok(())
    }

    fn remove_root_handler(&self, handler: &Arc<dyn Handler>) -> Result<(), Error> {
        self.check_mutable()?;
        self.handlers()
            .retain(|attached| !Arc::ptr_eq(attached, handler));
        Ok(())
    }
}

/// A [`BridgeLibrary`] that records its calls instead of touching any
/// runtime.
///
/// The installed flag flips on successful entry point calls only; attempt
/// counters record every call, failed or not.
#[derive(Clone, Debug, Default)]
pub struct RecordingBridge {
    state: Arc<BridgeState>,
}

#[derive(Debug, Default)]
struct BridgeState {
    installed: AtomicBool,
    install_attempts: AtomicUsize,
    uninstall_attempts: AtomicUsize,
    fail_install: AtomicBool,
    fail_uninstall: AtomicBool,
}

impl RecordingBridge {
    /// Create a bridge that is not installed and does not fail.
    pub fn new() -> RecordingBridge {
        RecordingBridge::default()
    }

    /// Whether the bridge currently reports itself installed.
    pub fn installed(&self) -> bool {
        self.state.installed.load(Ordering::SeqCst)
    }

    /// How many times `install` was called.
    pub fn install_attempts(&self) -> usize {
        self.state.install_attempts.load(Ordering::SeqCst)
    }

    /// How many times `uninstall` was called.
    pub fn uninstall_attempts(&self) -> usize {
        self.state.uninstall_attempts.load(Ordering::SeqCst)
    }

    /// Make subsequent `install` calls fail.
    pub fn fail_installs(&self, fail: bool) {
        self.state.fail_install.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `uninstall` calls fail.
    pub fn fail_uninstalls(&self, fail: bool) {
        self.state.fail_uninstall.store(fail, Ordering::SeqCst);
    }
}

impl BridgeLibrary for RecordingBridge {
    fn install(&self) -> Result<(), Error> {
        self.state.install_attempts.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_install.load(Ordering::SeqCst) {
            return Err(Error::bridge_library(anyhow::anyhow!("install refused")));
        }
        self.state.installed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn uninstall(&self) -> Result<(), Error> {
        self.state.uninstall_attempts.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_uninstall.load(Ordering::SeqCst) {
            return Err(Error::bridge_library(anyhow::anyhow!("uninstall refused")));
        }
        self.state.installed.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// A [`Trap`] that collects the messages of suppressed errors.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrap {
    errors: Arc<Mutex<Vec<String>>>,
}

impl RecordingTrap {
    /// Create a trap with nothing collected.
    pub fn new() -> RecordingTrap {
        RecordingTrap::default()
    }

    /// Messages of the errors trapped so far.
    pub fn errors(&self) -> Vec<String> {
        self.guard().clone()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.errors.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Trap for RecordingTrap {
    fn trap(&self, err: &Error) {
        self.guard().push(err.to_string());
    }
}

/// A named handler that is not the stock console kind.
///
/// Published messages are collected for assertions.
#[derive(Clone, Debug)]
pub struct StubHandler {
    name: &'static str,
    published: Arc<Mutex<Vec<String>>>,
}

impl StubHandler {
    /// Create a stub named `name`.
    pub fn new(name: &'static str) -> StubHandler {
        StubHandler {
            name,
            published: Arc::default(),
        }
    }

    /// The name given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Messages published to this handler so far.
    pub fn published(&self) -> Vec<String> {
        self.guard().clone()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.published.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Handler for StubHandler {
    fn publish(&self, record: &Record) {
        self.guard().push(record.args().to_string());
    }
}
