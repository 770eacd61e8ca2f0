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

//! An example of adopting an untouched legacy runtime into the `log` facade.

use logbridge::BRIDGE_HANDLER;
use logbridge::BridgeController;
use logbridge::Handler;
use logbridge::bridge::LogBridge;
use logbridge::handler::ConsoleHandler;
use logbridge::record::Level;
use logbridge::record::Record;
use logbridge::registry::LegacyRegistry;
use logbridge::resolver::StaticResolver;
use logbridge::testing::MemoryRegistry;

#[derive(Debug)]
struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        println!(
            "[modern] {} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn main() {
    log::set_boxed_logger(Box::new(StdoutLogger)).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    // an untouched legacy runtime: root logger with the stock console handler
    let registry = MemoryRegistry::new().with_handler(ConsoleHandler::default());

    let controller = BridgeController::new(
        registry.clone(),
        LogBridge::new(registry.clone()),
        StaticResolver::new([BRIDGE_HANDLER]),
    );
    controller.before_initialize();

    // legacy subsystems keep logging through the root logger; their records
    // now surface behind the log facade
    for handler in registry.root_handlers() {
        handler.publish(&Record::new(
            Level::Info,
            "vintage.db",
            format_args!("connection pool ready"),
        ));
        handler.publish(&Record::new(
            Level::Warn,
            "vintage.db",
            format_args!("slow query: {}ms", 1250),
        ));
    }

    controller.clean_up();
}
