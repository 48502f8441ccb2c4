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


//! Configuration types for the registry.

use crate::capabilities::Capabilities;
use crate::selection::ScoringWeights;
use std::time::Duration;

/// Priority and capabilities for one transport type, applied at construction.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::Capabilities;
/// use switchyard::registry::TransportProfile;
///
/// let profile = TransportProfile::new("websocket", 10)
///     .with_capabilities(Capabilities::new().with_streaming(true));
/// assert_eq!(profile.priority, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportProfile {
    /// Transport type name.
    pub name: String,

    /// Selection priority.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: i32,

    /// Capabilities of the transport type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub capabilities: Capabilities,
}

impl TransportProfile {
    /// Create a profile with no capabilities.
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
            capabilities: Capabilities::default(),
        }
    }

    /// Set the capabilities.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

/// Configuration for a [`TransportRegistry`](crate::registry::TransportRegistry).
///
/// # Examples
///
/// ```rust
/// use switchyard::registry::RegistryConfig;
/// use std::time::Duration;
///
/// // Use default configuration
/// let config = RegistryConfig::default();
///
/// // Customize configuration
/// let config = RegistryConfig {
///     degrade_to_highest_priority: false,
///     selector_timeout: Some(Duration::from_millis(100)),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistryConfig {
    /// Priority of transports that never had one set.
    ///
    /// Default: 0
    pub default_priority: i32,

    /// Fall back to the highest priority transport when nothing meets the
    /// requirements.
    ///
    /// When disabled, such a selection fails with
    /// [`RegistryError::NoSuitableTransport`](crate::registry::RegistryError::NoSuitableTransport).
    ///
    /// Default: true
    pub degrade_to_highest_priority: bool,

    /// Upper bound on how long a single selector may take.
    ///
    /// A selector that exceeds it is skipped as if it had declined.
    /// `None` lets selectors run to completion.
    ///
    /// Default: None
    pub selector_timeout: Option<Duration>,

    /// Profiles registered when the registry is created.
    ///
    /// Default: empty
    pub transports: Vec<TransportProfile>,

    /// Weights for a [`CapabilitySelector`](crate::selection::CapabilitySelector)
    /// installed as the first selector of the chain.
    ///
    /// Default: None (no selector is installed)
    pub capability_scoring: Option<ScoringWeights>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_priority: 0,
            degrade_to_highest_priority: true,
            selector_timeout: None,
            transports: Vec::new(),
            capability_scoring: None,
        }
    }
}

impl RegistryConfig {
    /// Parse a configuration from JSON.
    ///
    /// Missing fields take their defaults. Timeouts use serde's duration
    /// form, `{"secs": 0, "nanos": 250000000}`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use switchyard::registry::RegistryConfig;
    ///
    /// let config = RegistryConfig::from_json_str(r#"{
    ///     "default_priority": 1,
    ///     "transports": [
    ///         { "name": "tcp", "priority": 10, "capabilities": { "bidirectional": true } }
    ///     ]
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.default_priority, 1);
    /// assert!(config.degrade_to_highest_priority);
    /// assert!(config.transports[0].capabilities.bidirectional);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.default_priority, 0);
        assert!(config.degrade_to_highest_priority);
        assert_eq!(config.selector_timeout, None);
        assert!(config.transports.is_empty());
        assert!(config.capability_scoring.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_with_timeout() {
        let config = RegistryConfig::from_json_str(
            r#"{
                "degrade_to_highest_priority": false,
                "selector_timeout": { "secs": 0, "nanos": 250000000 },
                "transports": [
                    { "name": "quic", "priority": 20 },
                    { "name": "ws" }
                ]
            }"#,
        )
        .unwrap();

        assert!(!config.degrade_to_highest_priority);
        assert_eq!(config.selector_timeout, Some(Duration::from_millis(250)));
        assert_eq!(config.transports.len(), 2);
        assert_eq!(config.transports[0], TransportProfile::new("quic", 20));
        assert_eq!(config.transports[1].priority, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_missing_name() {
        let result = RegistryConfig::from_json_str(r#"{ "transports": [ { "priority": 1 } ] }"#);
        assert!(result.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_with_partial_scoring_weights() {
        let config = RegistryConfig::from_json_str(
            r#"{ "capability_scoring": { "streaming_bonus": 200, "baseline": -50 } }"#,
        )
        .unwrap();

        let weights = config.capability_scoring.unwrap();
        assert_eq!(weights.streaming_bonus, 200);
        assert_eq!(weights.baseline, -50);
        assert_eq!(weights.priority_multiplier, 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_empty_json_is_default() {
        let config = RegistryConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }
}
