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

//! Logbridge redirects a legacy logging runtime into a modern logging
//! pipeline.
//!
//! # Overview
//!
//! Applications often embed subsystems that still log through a vintage
//! runtime: a root logger carrying an ordered list of handlers, with a
//! stock console handler attached when nobody configured anything.
//! Logbridge decides whether that runtime can be adopted safely, removes
//! the stock console output, and installs a forwarding bridge so legacy
//! records reach the pipeline the rest of the application logs to. On
//! shutdown it detaches the bridge again.
//!
//! Adoption is conservative. A runtime that carries any custom handler is
//! left untouched, and every failure inside the lifecycle is reported to a
//! [trap][crate::trap] instead of reaching the host.
//!
//! # Examples
//!
//! Drive the lifecycle over an untouched runtime:
//!
//! ```
//! use logbridge::BRIDGE_HANDLER;
//! use logbridge::BridgeController;
//! use logbridge::handler::ConsoleHandler;
//! use logbridge::resolver::StaticResolver;
//! use logbridge::testing::MemoryRegistry;
//! use logbridge::testing::RecordingBridge;
//!
//! let registry = MemoryRegistry::new().with_handler(ConsoleHandler::default());
//! let bridge = RecordingBridge::new();
//! let resolver = StaticResolver::new([BRIDGE_HANDLER]);
//!
//! let controller = BridgeController::new(registry.clone(), bridge.clone(), resolver);
//!
//! controller.before_initialize();
//! assert!(bridge.installed());
//!
//! controller.clean_up();
//! assert!(!bridge.installed());
//! ```
//!
//! A runtime that was configured on purpose is left alone:
//!
//! ```
//! use logbridge::BRIDGE_HANDLER;
//! use logbridge::BridgeController;
//! use logbridge::registry::LegacyRegistry;
//! use logbridge::resolver::StaticResolver;
//! use logbridge::testing::MemoryRegistry;
//! use logbridge::testing::RecordingBridge;
//! use logbridge::testing::StubHandler;
//!
//! let registry = MemoryRegistry::new().with_handler(StubHandler::new("audit"));
//! let bridge = RecordingBridge::new();
//! let resolver = StaticResolver::new([BRIDGE_HANDLER]);
//!
//! let controller = BridgeController::new(registry.clone(), bridge.clone(), resolver);
//!
//! controller.before_initialize();
//! assert!(!bridge.installed());
//! assert_eq!(registry.root_handlers().len(), 1);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod handler;
pub mod record;
pub mod registry;
pub mod resolver;
pub mod testing;
pub mod trap;

pub use bridge::BridgeLibrary;
pub use handler::Handler;
pub use registry::LegacyRegistry;
pub use resolver::HandlerResolver;
pub use trap::Trap;

mod controller;
pub use controller::BRIDGE_HANDLER;
pub use controller::BridgeController;

mod error;
pub use error::Error;
