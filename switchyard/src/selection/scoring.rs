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


//! Weighted capability scoring.

use crate::registry::{RegistryError, TransportInfo};
use crate::selection::{Requirements, TransportSelector};
use async_trait::async_trait;
#[cfg(feature = "tracing")]
use tracing::trace;

/// Weights used by [`CapabilitySelector`].
///
/// Bonuses are added when a required capability is present; penalties are
/// subtracted when it is absent. Capabilities the caller did not ask for
/// contribute nothing.
///
/// # Examples
///
/// ```rust
/// use switchyard::selection::ScoringWeights;
///
/// // Default weights
/// let weights = ScoringWeights::default();
/// assert_eq!(weights.priority_multiplier, 10);
///
/// // Favour reconnection more heavily
/// let weights = ScoringWeights {
///     reconnection_bonus: 40,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringWeights {
    /// Multiplier applied to the transport's priority to form the base score.
    ///
    /// Default: 10
    pub priority_multiplier: i64,

    /// Default: 20
    pub streaming_bonus: i64,
    /// Default: 20
    pub bidirectional_bonus: i64,
    /// Default: 15
    pub compression_bonus: i64,
    /// Default: 15
    pub multiplexing_bonus: i64,
    /// Default: 10
    pub reconnection_bonus: i64,
    /// Added once per required security feature the transport supports.
    ///
    /// Default: 5
    pub security_bonus: i64,

    /// Default: 100
    pub streaming_penalty: i64,
    /// Default: 100
    pub bidirectional_penalty: i64,
    /// Default: 50
    pub compression_penalty: i64,
    /// Default: 50
    pub multiplexing_penalty: i64,
    /// Default: 30
    pub reconnection_penalty: i64,

    /// Score a transport must strictly exceed to be chosen.
    ///
    /// Default: 0
    pub baseline: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            priority_multiplier: 10,
            streaming_bonus: 20,
            bidirectional_bonus: 20,
            compression_bonus: 15,
            multiplexing_bonus: 15,
            reconnection_bonus: 10,
            security_bonus: 5,
            streaming_penalty: 100,
            bidirectional_penalty: 100,
            compression_penalty: 50,
            multiplexing_penalty: 50,
            reconnection_penalty: 30,
            baseline: 0,
        }
    }
}

/// Selects the transport with the highest capability score.
///
/// Unlike the registry's default first-match fallback, this selector ranks
/// every candidate. The score starts at `priority * priority_multiplier`
/// and is adjusted per requirement according to [`ScoringWeights`]. The
/// strictly highest score wins, ties going to the earlier candidate, and a
/// winner must score above `baseline`. When no candidate clears the baseline
/// the selector declines with [`RegistryError::NoSuitableTransport`].
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::Capabilities;
/// use switchyard::registry::TransportInfo;
/// use switchyard::selection::{CapabilitySelector, Requirements};
///
/// let selector = CapabilitySelector::new();
/// let requirements = Requirements::builder().streaming(true).build();
///
/// let sse = TransportInfo::new("sse", 1, Capabilities::new().with_streaming(true));
/// let poll = TransportInfo::new("http-poll", 5, Capabilities::new());
///
/// assert_eq!(selector.score(&sse, &requirements), 30);
/// assert_eq!(selector.score(&poll, &requirements), -50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapabilitySelector {
    weights: ScoringWeights,
}

impl CapabilitySelector {
    /// Create a selector with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector with custom weights.
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Get the weights in use.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one transport against the requirements.
    ///
    /// Arithmetic saturates, so extreme weights clamp at the `i64` bounds
    /// instead of overflowing.
    pub fn score(&self, info: &TransportInfo, requirements: &Requirements) -> i64 {
        let caps = &info.capabilities;
        let w = &self.weights;

        let mut score = i64::from(info.priority).saturating_mul(w.priority_multiplier);
        score = score.saturating_add(adjust(
            requirements.streaming,
            caps.streaming,
            w.streaming_bonus,
            w.streaming_penalty,
        ));
        score = score.saturating_add(adjust(
            requirements.bidirectional,
            caps.bidirectional,
            w.bidirectional_bonus,
            w.bidirectional_penalty,
        ));
        score = score.saturating_add(adjust(
            requirements.compression,
            !caps.compression.is_empty(),
            w.compression_bonus,
            w.compression_penalty,
        ));
        score = score.saturating_add(adjust(
            requirements.multiplexing,
            caps.multiplexing,
            w.multiplexing_bonus,
            w.multiplexing_penalty,
        ));
        score = score.saturating_add(adjust(
            requirements.reconnection,
            caps.reconnection,
            w.reconnection_bonus,
            w.reconnection_penalty,
        ));

        let matched = requirements
            .security
            .iter()
            .filter(|feature| caps.security.contains(*feature))
            .count() as i64;
        score.saturating_add(matched.saturating_mul(w.security_bonus))
    }
}

fn adjust(required: bool, supported: bool, bonus: i64, penalty: i64) -> i64 {
    match (required, supported) {
        (true, true) => bonus,
        (true, false) => penalty.saturating_neg(),
        (false, _) => 0,
    }
}

#[async_trait]
impl TransportSelector for CapabilitySelector {
    async fn select(
        &self,
        requirements: &Requirements,
        available: &[TransportInfo],
    ) -> Result<String, RegistryError> {
        if available.is_empty() {
            return Err(RegistryError::no_suitable_transport(
                "no transports to score",
            ));
        }

        let mut best: Option<&TransportInfo> = None;
        let mut best_score = self.weights.baseline;

        for info in available {
            let score = self.score(info, requirements);
            #[cfg(feature = "tracing")]
            trace!(transport = %info.name, score, "scored transport");

            if score > best_score {
                best_score = score;
                best = Some(info);
            }
        }

        best.map(|info| info.name.clone()).ok_or_else(|| {
            RegistryError::no_suitable_transport(format!(
                "no transport scored above {}",
                self.weights.baseline
            ))
        })
    }

    fn name(&self) -> &str {
        "CapabilitySelector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{Capabilities, CompressionType, SecurityFeature};

    fn info(name: &str, priority: i32, capabilities: Capabilities) -> TransportInfo {
        TransportInfo::new(name, priority, capabilities)
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.streaming_bonus, 20);
        assert_eq!(weights.bidirectional_bonus, 20);
        assert_eq!(weights.compression_bonus, 15);
        assert_eq!(weights.multiplexing_bonus, 15);
        assert_eq!(weights.reconnection_bonus, 10);
        assert_eq!(weights.security_bonus, 5);
        assert_eq!(weights.streaming_penalty, 100);
        assert_eq!(weights.bidirectional_penalty, 100);
        assert_eq!(weights.compression_penalty, 50);
        assert_eq!(weights.multiplexing_penalty, 50);
        assert_eq!(weights.reconnection_penalty, 30);
        assert_eq!(weights.baseline, 0);
    }

    #[test]
    fn test_base_score_is_priority_times_ten() {
        let selector = CapabilitySelector::new();
        let requirements = Requirements::default();

        assert_eq!(selector.score(&info("a", 7, Capabilities::new()), &requirements), 70);
        assert_eq!(selector.score(&info("b", -2, Capabilities::new()), &requirements), -20);
    }

    #[test]
    fn test_bonuses_for_every_satisfied_requirement() {
        let selector = CapabilitySelector::new();
        let requirements = Requirements::builder()
            .streaming(true)
            .bidirectional(true)
            .compression(true)
            .multiplexing(true)
            .reconnection(true)
            .security(SecurityFeature::Tls)
            .security(SecurityFeature::Jwt)
            .build();
        let caps = Capabilities::new()
            .with_streaming(true)
            .with_bidirectional(true)
            .with_compression(CompressionType::Zstd)
            .with_multiplexing(true)
            .with_reconnection(true)
            .with_security(SecurityFeature::Tls)
            .with_security(SecurityFeature::Jwt);

        // 20 + 20 + 15 + 15 + 10 + 2 * 5
        assert_eq!(selector.score(&info("full", 0, caps), &requirements), 90);
    }

    #[test]
    fn test_penalties_for_every_missing_requirement() {
        let selector = CapabilitySelector::new();
        let requirements = Requirements::builder()
            .streaming(true)
            .bidirectional(true)
            .compression(true)
            .multiplexing(true)
            .reconnection(true)
            .security(SecurityFeature::Tls)
            .build();

        // -100 - 100 - 50 - 50 - 30, missing security costs nothing
        assert_eq!(
            selector.score(&info("bare", 0, Capabilities::new()), &requirements),
            -330
        );
    }

    #[test]
    fn test_unrequested_capabilities_score_nothing() {
        let selector = CapabilitySelector::new();
        let caps = Capabilities::new()
            .with_streaming(true)
            .with_multiplexing(true)
            .with_security(SecurityFeature::Mtls);

        assert_eq!(
            selector.score(&info("ws", 1, caps), &Requirements::default()),
            10
        );
    }

    #[tokio::test]
    async fn test_highest_score_wins() {
        let selector = CapabilitySelector::new();
        let requirements = Requirements::builder().streaming(true).build();
        let available = vec![
            info("poll", 10, Capabilities::new()),
            info("sse", 5, Capabilities::new().with_streaming(true)),
        ];

        // poll: 100 - 100 = 0, sse: 50 + 20 = 70
        let name = selector.select(&requirements, &available).await.unwrap();
        assert_eq!(name, "sse");
    }

    #[tokio::test]
    async fn test_tie_goes_to_first_candidate() {
        let selector = CapabilitySelector::new();
        let available = vec![
            info("first", 3, Capabilities::new()),
            info("second", 3, Capabilities::new()),
        ];

        let name = selector
            .select(&Requirements::default(), &available)
            .await
            .unwrap();
        assert_eq!(name, "first");
    }

    #[tokio::test]
    async fn test_empty_snapshot_fails() {
        let selector = CapabilitySelector::new();
        let error = selector
            .select(&Requirements::default(), &[])
            .await
            .unwrap_err();
        assert!(error.is_no_suitable_transport());
    }

    #[tokio::test]
    async fn test_nothing_above_baseline_fails() {
        let selector = CapabilitySelector::new();
        let requirements = Requirements::builder().bidirectional(true).build();
        let available = vec![
            info("zero", 0, Capabilities::new().with_bidirectional(false)),
            info("negative", 5, Capabilities::new()),
        ];

        // zero: -100, negative: 50 - 100 = -50
        let error = selector.select(&requirements, &available).await.unwrap_err();
        assert!(error.is_no_suitable_transport());
    }

    #[tokio::test]
    async fn test_zero_score_does_not_win() {
        let selector = CapabilitySelector::new();
        let available = vec![info("idle", 0, Capabilities::new())];

        let result = selector.select(&Requirements::default(), &available).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_custom_baseline_allows_negative_winner() {
        let selector = CapabilitySelector::with_weights(ScoringWeights {
            baseline: i64::MIN,
            ..Default::default()
        });
        let requirements = Requirements::builder().streaming(true).build();
        let available = vec![
            info("a", 0, Capabilities::new()),
            info("b", 1, Capabilities::new()),
        ];

        let name = selector.select(&requirements, &available).await.unwrap();
        assert_eq!(name, "b");
    }

    #[test]
    fn test_extreme_priority_does_not_overflow() {
        let selector = CapabilitySelector::new();
        let score = selector.score(&info("max", i32::MAX, Capabilities::new()), &Requirements::default());
        assert_eq!(score, i64::from(i32::MAX) * 10);
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let requirements = Requirements::builder()
            .streaming(true)
            .security(SecurityFeature::Tls)
            .build();
        let streaming = Capabilities::new()
            .with_streaming(true)
            .with_security(SecurityFeature::Tls);

        let selector = CapabilitySelector::with_weights(ScoringWeights {
            priority_multiplier: i64::MAX,
            streaming_bonus: i64::MAX,
            security_bonus: i64::MAX,
            ..Default::default()
        });
        assert_eq!(selector.score(&info("max", 2, streaming), &requirements), i64::MAX);

        let selector = CapabilitySelector::with_weights(ScoringWeights {
            priority_multiplier: i64::MAX,
            streaming_penalty: i64::MIN,
            ..Default::default()
        });
        assert_eq!(
            selector.score(&info("neg", -2, Capabilities::new()), &requirements),
            i64::MIN.saturating_add(i64::MAX)
        );
    }

    #[cfg(feature = "serde")]
    #[tokio::test]
    async fn test_weights_from_json_with_minimum_penalty() {
        let weights: ScoringWeights =
            serde_json::from_str(r#"{"streaming_penalty": -9223372036854775808}"#).unwrap();
        assert_eq!(weights.streaming_penalty, i64::MIN);
        assert_eq!(weights.streaming_bonus, 20);

        let selector = CapabilitySelector::with_weights(weights);
        let requirements = Requirements::builder().streaming(true).build();
        let available = vec![
            info("plain", 1, Capabilities::new()),
            info("stream", 1, Capabilities::new().with_streaming(true)),
        ];

        // Negating the minimum penalty saturates to i64::MAX rather than panicking.
        assert_eq!(selector.score(&available[0], &requirements), i64::MAX);
        let name = selector.select(&requirements, &available).await.unwrap();
        assert_eq!(name, "plain");
    }

    #[test]
    fn test_name() {
        assert_eq!(CapabilitySelector::new().name(), "CapabilitySelector");
    }
}
