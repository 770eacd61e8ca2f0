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

//! An example of a legacy runtime configured on purpose being left alone.

use logbridge::BRIDGE_HANDLER;
use logbridge::BridgeController;
use logbridge::Handler;
use logbridge::bridge::LogBridge;
use logbridge::record::Level;
use logbridge::record::Record;
use logbridge::registry::LegacyRegistry;
use logbridge::resolver::StaticResolver;
use logbridge::testing::MemoryRegistry;
use logbridge::testing::StubHandler;

fn main() {
    // the application wired its own handler into the legacy runtime
    let audit = StubHandler::new("audit");
    let registry = MemoryRegistry::new().with_handler(audit.clone());

    let controller = BridgeController::new(
        registry.clone(),
        LogBridge::new(registry.clone()),
        StaticResolver::new([BRIDGE_HANDLER]),
    );

    controller.before_initialize();
    println!("eligible: {}", controller.is_eligible_for_bridging());

    // the custom handler vetoed bridging; records keep flowing to it
    for handler in registry.root_handlers() {
        handler.publish(&Record::new(
            Level::Info,
            "vintage.audit",
            format_args!("session opened"),
        ));
    }

    println!("{} received: {:?}", audit.name(), audit.published());
}
