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


//! Selection counters.
//!
//! Counters are atomics so concurrent selections never contend on a lock.
//! With the `observability` feature each event is also forwarded to the
//! `metrics` facade under the `switchyard.selection.*` names.

use crate::selection::SelectionSource;
use std::sync::atomic::{AtomicU64, Ordering};

/// Live selection counters owned by a registry.
#[derive(Debug, Default)]
pub struct SelectionMetrics {
    preferred: AtomicU64,
    selector: AtomicU64,
    default: AtomicU64,
    degraded: AtomicU64,
    failures: AtomicU64,
    selector_declines: AtomicU64,
}

impl SelectionMetrics {
    /// Creates a new set of zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful selection.
    pub fn record_selection(&self, source: &SelectionSource) {
        let counter = match source {
            SelectionSource::Preferred => &self.preferred,
            SelectionSource::Selector(_) => &self.selector,
            SelectionSource::Default => &self.default,
            SelectionSource::Degraded => &self.degraded,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        #[cfg(feature = "observability")]
        {
            let source = match source {
                SelectionSource::Preferred => "preferred",
                SelectionSource::Selector(_) => "selector",
                SelectionSource::Default => "default",
                SelectionSource::Degraded => "degraded",
            };
            ::metrics::counter!("switchyard.selection.success", "source" => source).increment(1);
        }
    }

    /// Records a selection that returned an error.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        #[cfg(feature = "observability")]
        ::metrics::counter!("switchyard.selection.failures").increment(1);
    }

    /// Records a selector that declined, failed, timed out, or proposed an
    /// ineligible transport.
    pub fn record_selector_decline(&self) {
        self.selector_declines.fetch_add(1, Ordering::Relaxed);
        #[cfg(feature = "observability")]
        ::metrics::counter!("switchyard.selection.selector_declines").increment(1);
    }

    /// Returns a point-in-time copy of the counters.
    #[must_use]
    pub fn snapshot(&self) -> SelectionStats {
        SelectionStats {
            preferred: self.preferred.load(Ordering::Relaxed),
            selector: self.selector.load(Ordering::Relaxed),
            default: self.default.load(Ordering::Relaxed),
            degraded: self.degraded.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            selector_declines: self.selector_declines.load(Ordering::Relaxed),
        }
    }

    /// Resets every counter to zero.
    pub fn reset(&self) {
        self.preferred.store(0, Ordering::Relaxed);
        self.selector.store(0, Ordering::Relaxed);
        self.default.store(0, Ordering::Relaxed);
        self.degraded.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
        self.selector_declines.store(0, Ordering::Relaxed);
    }
}

/// Copy of [`SelectionMetrics`] at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Selections satisfied from the preferred list
    pub preferred: u64,
    /// Selections made by a selector
    pub selector: u64,
    /// Selections made by the default first-match rule
    pub default: u64,
    /// Selections that fell back to the highest priority transport
    pub degraded: u64,
    /// Selections that returned an error
    pub failures: u64,
    /// Selector calls that did not produce a usable answer
    pub selector_declines: u64,
}

impl SelectionStats {
    /// Total number of successful selections.
    #[must_use]
    pub fn total_selections(&self) -> u64 {
        self.preferred + self.selector + self.default + self.degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_by_source() {
        let metrics = SelectionMetrics::new();
        metrics.record_selection(&SelectionSource::Preferred);
        metrics.record_selection(&SelectionSource::Selector("s".into()));
        metrics.record_selection(&SelectionSource::Selector("t".into()));
        metrics.record_selection(&SelectionSource::Default);
        metrics.record_selection(&SelectionSource::Degraded);

        let stats = metrics.snapshot();
        assert_eq!(stats.preferred, 1);
        assert_eq!(stats.selector, 2);
        assert_eq!(stats.default, 1);
        assert_eq!(stats.degraded, 1);
        assert_eq!(stats.total_selections(), 5);
    }

    #[test]
    fn test_failures_and_declines() {
        let metrics = SelectionMetrics::new();
        metrics.record_failure();
        metrics.record_selector_decline();
        metrics.record_selector_decline();

        let stats = metrics.snapshot();
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.selector_declines, 2);
        assert_eq!(stats.total_selections(), 0);
    }

    #[test]
    fn test_reset() {
        let metrics = SelectionMetrics::new();
        metrics.record_selection(&SelectionSource::Default);
        metrics.record_failure();
        metrics.reset();
        assert_eq!(metrics.snapshot(), SelectionStats::default());
    }
}
