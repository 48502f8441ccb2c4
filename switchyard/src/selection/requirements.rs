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


use crate::capabilities::SecurityFeature;
use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

/// What a caller needs from a transport for one selection request.
///
/// Every field defaults to "no constraint": `false` flags, zero sizes, no
/// latency bound, empty sets. Absence of a requirement is always satisfiable.
///
/// `min_message_size`, `min_throughput` and `max_latency` are carried for
/// custom [`TransportSelector`](crate::selection::TransportSelector)s; the
/// built-in [`meets_requirements`](crate::selection::meets_requirements)
/// predicate does not consult them.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::SecurityFeature;
/// use switchyard::selection::Requirements;
///
/// let requirements = Requirements::builder()
///     .streaming(true)
///     .security(SecurityFeature::Tls)
///     .prefer("websocket")
///     .exclude("http-poll")
///     .build();
///
/// assert!(requirements.streaming);
/// assert!(requirements.is_excluded("http-poll"));
/// assert_eq!(requirements.preferred_transports, vec!["websocket"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    /// Streaming support is required
    pub streaming: bool,
    /// Bidirectional messaging is required
    pub bidirectional: bool,
    /// Some compression algorithm is required
    pub compression: bool,
    /// Multiplexing is required
    pub multiplexing: bool,
    /// Automatic reconnection is required
    pub reconnection: bool,
    /// Smallest message size in bytes the caller will send (0 = none)
    pub min_message_size: u64,
    /// Largest message size in bytes the caller will send (0 = none)
    pub max_message_size: u64,
    /// Minimum throughput in bytes per second (0 = none)
    pub min_throughput: u64,
    /// Maximum acceptable latency
    pub max_latency: Option<Duration>,
    /// Security features that must all be present
    pub security: BTreeSet<SecurityFeature>,
    /// Transport names to try first, in order
    pub preferred_transports: Vec<String>,
    /// Transport names that must never be selected
    pub excluded_transports: HashSet<String>,
}

impl Requirements {
    /// Requirements that impose no constraint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for configuring requirements.
    pub fn builder() -> RequirementsBuilder {
        RequirementsBuilder::default()
    }

    /// Returns `true` if the named transport is excluded.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_transports.contains(name)
    }
}

/// Builder for [`Requirements`].
#[derive(Debug, Default)]
pub struct RequirementsBuilder {
    requirements: Requirements,
}

impl RequirementsBuilder {
    /// Require streaming support.
    pub fn streaming(mut self, required: bool) -> Self {
        self.requirements.streaming = required;
        self
    }

    /// Require bidirectional messaging.
    pub fn bidirectional(mut self, required: bool) -> Self {
        self.requirements.bidirectional = required;
        self
    }

    /// Require some compression algorithm.
    pub fn compression(mut self, required: bool) -> Self {
        self.requirements.compression = required;
        self
    }

    /// Require multiplexing.
    pub fn multiplexing(mut self, required: bool) -> Self {
        self.requirements.multiplexing = required;
        self
    }

    /// Require automatic reconnection.
    pub fn reconnection(mut self, required: bool) -> Self {
        self.requirements.reconnection = required;
        self
    }

    /// Set the smallest message size the caller will send.
    pub fn min_message_size(mut self, bytes: u64) -> Self {
        self.requirements.min_message_size = bytes;
        self
    }

    /// Set the largest message size the caller will send.
    pub fn max_message_size(mut self, bytes: u64) -> Self {
        self.requirements.max_message_size = bytes;
        self
    }

    /// Set the minimum throughput in bytes per second.
    pub fn min_throughput(mut self, bytes_per_second: u64) -> Self {
        self.requirements.min_throughput = bytes_per_second;
        self
    }

    /// Set the maximum acceptable latency.
    pub fn max_latency(mut self, latency: Duration) -> Self {
        self.requirements.max_latency = Some(latency);
        self
    }

    /// Require a security feature. May be called repeatedly.
    pub fn security(mut self, feature: SecurityFeature) -> Self {
        self.requirements.security.insert(feature);
        self
    }

    /// Append a preferred transport name.
    pub fn prefer(mut self, name: impl Into<String>) -> Self {
        self.requirements.preferred_transports.push(name.into());
        self
    }

    /// Exclude a transport name.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.requirements.excluded_transports.insert(name.into());
        self
    }

    /// Build the requirements.
    pub fn build(self) -> Requirements {
        self.requirements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_imposes_nothing() {
        let requirements = Requirements::default();
        assert!(!requirements.streaming);
        assert!(!requirements.compression);
        assert_eq!(requirements.max_message_size, 0);
        assert!(requirements.max_latency.is_none());
        assert!(requirements.security.is_empty());
        assert!(requirements.preferred_transports.is_empty());
        assert!(requirements.excluded_transports.is_empty());
    }

    #[test]
    fn test_builder() {
        let requirements = Requirements::builder()
            .bidirectional(true)
            .compression(true)
            .multiplexing(true)
            .reconnection(true)
            .min_message_size(16)
            .max_message_size(1024)
            .min_throughput(10_000)
            .max_latency(Duration::from_millis(50))
            .security(SecurityFeature::Jwt)
            .security(SecurityFeature::Jwt)
            .build();

        assert!(requirements.bidirectional);
        assert!(requirements.compression);
        assert!(requirements.multiplexing);
        assert!(requirements.reconnection);
        assert_eq!(requirements.min_message_size, 16);
        assert_eq!(requirements.max_message_size, 1024);
        assert_eq!(requirements.min_throughput, 10_000);
        assert_eq!(requirements.max_latency, Some(Duration::from_millis(50)));
        assert_eq!(requirements.security.len(), 1);
    }

    #[test]
    fn test_preferred_order_kept() {
        let requirements = Requirements::builder()
            .prefer("websocket")
            .prefer("sse")
            .prefer("websocket")
            .build();

        assert_eq!(
            requirements.preferred_transports,
            vec!["websocket", "sse", "websocket"]
        );
    }

    #[test]
    fn test_exclusion_is_exact_match() {
        let requirements = Requirements::builder().exclude("sse").build();
        assert!(requirements.is_excluded("sse"));
        assert!(!requirements.is_excluded("SSE"));
        assert!(!requirements.is_excluded("sse2"));
    }
}
