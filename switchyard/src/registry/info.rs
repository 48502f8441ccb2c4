//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


use crate::capabilities::Capabilities;

/// A registered transport as seen by selection.
///
/// Produced by [`TransportRegistry::available_transports`](crate::registry::TransportRegistry::available_transports)
/// as an owned copy; changing it has no effect on the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportInfo {
    /// Transport type name, as known to the factory.
    pub name: String,
    /// Selection priority. Higher is preferred.
    pub priority: i32,
    /// Registered capabilities, or the empty descriptor if none were registered.
    pub capabilities: Capabilities,
}

impl TransportInfo {
    /// Create a new transport description.
    pub fn new(name: impl Into<String>, priority: i32, capabilities: Capabilities) -> Self {
        Self {
            name: name.into(),
            priority,
            capabilities,
        }
    }
}
