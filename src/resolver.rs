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

//! Resolution of handler implementations by identifier.

use std::collections::BTreeSet;
use std::fmt;

/// Answers whether a handler implementation is loadable by identifier.
///
/// The resolver stands in for whatever mechanism the host uses to discover
/// logging components, such as static linking, a plugin registry, or dynamic
/// loading. The bridging lifecycle asks it exactly one question before
/// touching any shared logging state.
pub trait HandlerResolver: fmt::Debug + Send + Sync + 'static {
    /// Whether `id` resolves to a loadable handler implementation.
    ///
    /// Implementations must answer `false` rather than fail when the
    /// resolution machinery itself is broken.
    fn is_present(&self, id: &str) -> bool;
}

impl<T: HandlerResolver> From<T> for Box<dyn HandlerResolver> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A resolver answering from a fixed set of registered identifiers.
///
/// This is the static-linking rendition of handler resolution: hosts
/// declare the handler implementations their build actually carries.
///
/// # Examples
///
/// ```
/// use logbridge::BRIDGE_HANDLER;
/// use logbridge::resolver::HandlerResolver;
/// use logbridge::resolver::StaticResolver;
///
/// let mut resolver = StaticResolver::new([BRIDGE_HANDLER]);
/// assert!(resolver.is_present(BRIDGE_HANDLER));
/// assert!(!resolver.is_present("legacy::SocketHandler"));
///
/// resolver.insert("legacy::SocketHandler");
/// assert!(resolver.is_present("legacy::SocketHandler"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticResolver {
    ids: BTreeSet<String>,
}

impl StaticResolver {
    /// Create a resolver over the given identifiers.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticResolver {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Register one more identifier.
    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }
}

impl HandlerResolver for StaticResolver {
    fn is_present(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
