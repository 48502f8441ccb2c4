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


use crate::capabilities::{Capabilities, FeatureValue};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

/// A capability the two sides could not agree on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityConflict {
    /// Name of the conflicting capability
    pub capability: String,
    /// Value advertised locally
    pub local_value: String,
    /// Value advertised by the peer
    pub remote_value: String,
    /// Why the values could not be reconciled
    pub reason: String,
}

/// Outcome of comparing local and remote capabilities.
///
/// `agreed` holds what both sides support; `local_only` and `remote_only`
/// hold what just one side offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegotiationResult {
    /// Capabilities supported by both sides
    pub agreed: Capabilities,
    /// Capabilities only the local side supports
    pub local_only: Capabilities,
    /// Capabilities only the remote side supports
    pub remote_only: Capabilities,
    /// Values that could not be reconciled
    pub conflicts: Vec<CapabilityConflict>,
    /// Whether a different transport should be used instead
    pub fallback_required: bool,
    /// Why a fallback is required, if it is
    pub fallback_reason: Option<String>,
}

impl NegotiationResult {
    /// Returns `true` if negotiation finished without conflicts.
    pub fn is_compatible(&self) -> bool {
        self.conflicts.is_empty() && !self.fallback_required
    }
}

/// Resolves a custom feature both peers advertise with different values.
///
/// Rules are consulted in the order they were added to a [`Negotiator`].
/// A rule that handles a feature may still return `None` to leave it to the
/// next rule; when no rule resolves it, equal values are agreed and
/// different values become a [`CapabilityConflict`].
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::{FeatureValue, NegotiationRule};
///
/// /// Agrees on a codec only if both sides offer "cbor".
/// struct PreferCbor;
///
/// impl NegotiationRule for PreferCbor {
///     fn can_handle(&self, feature: &str) -> bool {
///         feature == "codecs"
///     }
///
///     fn negotiate(
///         &self,
///         _feature: &str,
///         local: &FeatureValue,
///         remote: &FeatureValue,
///     ) -> Option<FeatureValue> {
///         let cbor = FeatureValue::from("cbor");
///         match (local, remote) {
///             (FeatureValue::List(l), FeatureValue::List(r))
///                 if l.contains(&cbor) && r.contains(&cbor) => Some(cbor),
///             _ => None,
///         }
///     }
///
///     fn name(&self) -> &str {
///         "PreferCbor"
///     }
/// }
/// ```
pub trait NegotiationRule: Send + Sync {
    /// Returns `true` if this rule applies to the named feature.
    fn can_handle(&self, feature: &str) -> bool;

    /// Produce the agreed value, or `None` if this rule cannot reconcile them.
    fn negotiate(
        &self,
        feature: &str,
        local: &FeatureValue,
        remote: &FeatureValue,
    ) -> Option<FeatureValue>;

    /// Get a human-readable name for this rule.
    fn name(&self) -> &str;
}

/// Agrees on the smaller of two integer values for a fixed set of features.
///
/// Suited to limits both sides must respect, such as window sizes or stream
/// counts. Non-integer values are left to the next rule.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::{Capabilities, FeatureValue, MinimumRule, Negotiator};
///
/// let negotiator = Negotiator::new().with_rule(MinimumRule::new(["window"]));
///
/// let local = Capabilities::new().with_feature("window", 64);
/// let remote = Capabilities::new().with_feature("window", 16);
///
/// let result = negotiator.negotiate(&local, &remote);
/// assert_eq!(result.agreed.feature("window"), Some(&FeatureValue::Integer(16)));
/// assert!(result.is_compatible());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinimumRule {
    features: HashSet<String>,
}

impl MinimumRule {
    /// Create a rule covering the given feature names.
    pub fn new<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            features: features.into_iter().map(Into::into).collect(),
        }
    }
}

impl NegotiationRule for MinimumRule {
    fn can_handle(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    fn negotiate(
        &self,
        _feature: &str,
        local: &FeatureValue,
        remote: &FeatureValue,
    ) -> Option<FeatureValue> {
        let smaller = local.as_integer()?.min(remote.as_integer()?);
        Some(FeatureValue::Integer(smaller))
    }

    fn name(&self) -> &str {
        "MinimumRule"
    }
}

/// Compares local and remote capabilities, with pluggable rules for custom
/// features.
///
/// The fixed capability fields are negotiated the same way regardless of
/// rules:
///
/// - flags and sets split into agreed, local-only and remote-only parts
/// - message size limits agree on the smaller bound
/// - a protocol version mismatch is a conflict that requires a fallback
///
/// Custom [`features`](Capabilities::features) present on one side only are
/// reported as local-only or remote-only. Features present on both sides are
/// offered to each [`NegotiationRule`] that handles them, in the order the
/// rules were added; unresolved features are agreed if their values are equal
/// and reported as conflicts otherwise. A feature conflict makes the result
/// incompatible but does not by itself require a fallback.
///
/// Cloning a negotiator is cheap; rules are shared.
#[derive(Clone, Default)]
pub struct Negotiator {
    rules: Vec<Arc<dyn NegotiationRule>>,
}

impl Negotiator {
    /// Create a negotiator without rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn add_rule(&mut self, rule: Arc<dyn NegotiationRule>) {
        self.rules.push(rule);
    }

    /// Append a rule, builder style.
    pub fn with_rule(mut self, rule: impl NegotiationRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Get the number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Negotiate the capabilities two peers can use together.
    pub fn negotiate(&self, local: &Capabilities, remote: &Capabilities) -> NegotiationResult {
        let mut result = NegotiationResult::default();

        let (agreed, local_only, remote_only) = split_flag(local.streaming, remote.streaming);
        result.agreed.streaming = agreed;
        result.local_only.streaming = local_only;
        result.remote_only.streaming = remote_only;

        let (agreed, local_only, remote_only) =
            split_flag(local.bidirectional, remote.bidirectional);
        result.agreed.bidirectional = agreed;
        result.local_only.bidirectional = local_only;
        result.remote_only.bidirectional = remote_only;

        let (agreed, local_only, remote_only) = split_flag(local.multiplexing, remote.multiplexing);
        result.agreed.multiplexing = agreed;
        result.local_only.multiplexing = local_only;
        result.remote_only.multiplexing = remote_only;

        let (agreed, local_only, remote_only) = split_flag(local.reconnection, remote.reconnection);
        result.agreed.reconnection = agreed;
        result.local_only.reconnection = local_only;
        result.remote_only.reconnection = remote_only;

        let (agreed, local_only, remote_only) = split_set(&local.compression, &remote.compression);
        result.agreed.compression = agreed;
        result.local_only.compression = local_only;
        result.remote_only.compression = remote_only;

        let (agreed, local_only, remote_only) = split_set(&local.security, &remote.security);
        result.agreed.security = agreed;
        result.local_only.security = local_only;
        result.remote_only.security = remote_only;

        match (local.max_message_size, remote.max_message_size) {
            (0, 0) => {}
            (l, 0) => result.local_only.max_message_size = l,
            (0, r) => result.remote_only.max_message_size = r,
            (l, r) => result.agreed.max_message_size = l.min(r),
        }

        if local.protocol_version == remote.protocol_version {
            result.agreed.protocol_version = local.protocol_version.clone();
        } else {
            result.conflicts.push(CapabilityConflict {
                capability: "protocol_version".to_string(),
                local_value: local.protocol_version.clone().unwrap_or_default(),
                remote_value: remote.protocol_version.clone().unwrap_or_default(),
                reason: "protocol version mismatch".to_string(),
            });
            result.fallback_required = true;
            result.fallback_reason = Some("protocol version incompatibility".to_string());
        }

        self.negotiate_features(local, remote, &mut result);
        result
    }

    fn negotiate_features(
        &self,
        local: &Capabilities,
        remote: &Capabilities,
        result: &mut NegotiationResult,
    ) {
        for (key, local_value) in &local.features {
            let Some(remote_value) = remote.features.get(key) else {
                result.local_only.features.insert(key.clone(), local_value.clone());
                continue;
            };

            let resolved = self
                .rules
                .iter()
                .filter(|rule| rule.can_handle(key))
                .find_map(|rule| rule.negotiate(key, local_value, remote_value));

            match resolved {
                Some(value) => {
                    result.agreed.features.insert(key.clone(), value);
                }
                None if local_value == remote_value => {
                    result.agreed.features.insert(key.clone(), local_value.clone());
                }
                None => result.conflicts.push(CapabilityConflict {
                    capability: key.clone(),
                    local_value: local_value.to_string(),
                    remote_value: remote_value.to_string(),
                    reason: "feature value mismatch".to_string(),
                }),
            }
        }

        for (key, remote_value) in &remote.features {
            if !local.features.contains_key(key) {
                result.remote_only.features.insert(key.clone(), remote_value.clone());
            }
        }
    }
}

impl fmt::Debug for Negotiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<&str> = self.rules.iter().map(|rule| rule.name()).collect();
        f.debug_struct("Negotiator").field("rules", &rules).finish()
    }
}

/// Negotiates the capabilities two peers can use together, without any
/// custom feature rules.
///
/// Equivalent to `Negotiator::new().negotiate(local, remote)`.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::{negotiate, Capabilities, CompressionType};
///
/// let local = Capabilities::new()
///     .with_streaming(true)
///     .with_compression(CompressionType::Gzip)
///     .with_compression(CompressionType::Zstd)
///     .with_max_message_size(1024);
/// let remote = Capabilities::new()
///     .with_compression(CompressionType::Zstd)
///     .with_max_message_size(512);
///
/// let result = negotiate(&local, &remote);
/// assert!(result.local_only.streaming);
/// assert!(result.agreed.compression.contains(&CompressionType::Zstd));
/// assert_eq!(result.agreed.max_message_size, 512);
/// assert!(result.is_compatible());
/// ```
pub fn negotiate(local: &Capabilities, remote: &Capabilities) -> NegotiationResult {
    Negotiator::new().negotiate(local, remote)
}

fn split_flag(local: bool, remote: bool) -> (bool, bool, bool) {
    (local && remote, local && !remote, !local && remote)
}

fn split_set<T: Ord + Clone>(
    local: &BTreeSet<T>,
    remote: &BTreeSet<T>,
) -> (BTreeSet<T>, BTreeSet<T>, BTreeSet<T>) {
    (
        local.intersection(remote).cloned().collect(),
        local.difference(remote).cloned().collect(),
        remote.difference(local).cloned().collect(),
    )
}
