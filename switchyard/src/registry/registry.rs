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


//! Transport registry implementation.

use crate::capabilities::Capabilities;
use crate::factory::{CreationError, TransportFactory};
use crate::registry::{
    RegistryConfig, RegistryError, SelectionMetrics, SelectionStats, TransportInfo,
    TransportProfile,
};
use crate::selection::{
    meets_requirements, select_default, CapabilitySelector, Requirements, Selection,
    SelectionSource, TransportSelector,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Registry of transport types and the rules for choosing between them.
///
/// The registry wraps a [`TransportFactory`], which owns the list of
/// transport types and knows how to build them, and layers selection
/// metadata on top: a priority and a [`Capabilities`] descriptor per name,
/// plus an ordered chain of [`TransportSelector`]s.
///
/// The registry is cheap to clone; clones share the same state. All methods
/// take `&self` and may be called from any number of tasks at once.
///
/// # Selection
///
/// [`select_transport`](Self::select_transport) works on a snapshot of the
/// registered transports sorted by priority, highest first:
///
/// 1. An empty snapshot fails with [`RegistryError::NoTransportsAvailable`].
/// 2. Excluded transports are removed.
/// 3. The first preferred transport that meets the requirements wins.
/// 4. Otherwise selectors are asked in the order they were added. The first
///    to propose an eligible transport wins; errors, timeouts and ineligible
///    proposals move on to the next selector.
/// 5. Otherwise the first transport that meets the requirements wins, or,
///    if none does, the highest priority one.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::Capabilities;
/// use switchyard::factory::MemoryFactory;
/// use switchyard::registry::TransportRegistry;
/// use switchyard::selection::Requirements;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let factory: MemoryFactory<(), String> = MemoryFactory::new();
/// factory.register("http-poll", |name, _| Ok(name.to_string()));
/// factory.register("websocket", |name, _| Ok(name.to_string()));
///
/// let registry = TransportRegistry::new(factory);
/// registry.set_priority("http-poll", 10);
/// registry.set_priority("websocket", 5);
/// registry.register_capabilities(
///     "websocket",
///     Capabilities::new().with_streaming(true).with_bidirectional(true),
/// );
///
/// let requirements = Requirements::builder().streaming(true).build();
/// let name = registry.select_transport(&requirements).await?;
/// assert_eq!(name, "websocket");
///
/// let transport = registry.create_transport(&name, ()).await?;
/// assert_eq!(transport, "websocket");
/// # Ok(())
/// # }
/// ```
pub struct TransportRegistry<F: TransportFactory> {
    inner: Arc<RegistryInner<F>>,
}

struct RegistryInner<F> {
    factory: F,
    config: RegistryConfig,
    state: RwLock<RegistryState>,
    metrics: SelectionMetrics,
}

#[derive(Default)]
struct RegistryState {
    priorities: HashMap<String, i32>,
    capabilities: HashMap<String, Capabilities>,
    selectors: Vec<Arc<dyn TransportSelector>>,
}

impl RegistryState {
    fn apply_profile(&mut self, profile: TransportProfile) {
        self.priorities.insert(profile.name.clone(), profile.priority);
        self.capabilities.insert(profile.name, profile.capabilities);
    }
}

impl<F: TransportFactory> TransportRegistry<F> {
    /// Create a registry over `factory` with the default configuration.
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, RegistryConfig::default())
    }

    /// Create a registry over `factory`, registering every profile in
    /// `config.transports`.
    ///
    /// When `config.capability_scoring` is set, a [`CapabilitySelector`]
    /// with those weights becomes the first selector of the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use switchyard::factory::MemoryFactory;
    /// use switchyard::registry::{RegistryConfig, TransportProfile, TransportRegistry};
    ///
    /// let factory: MemoryFactory<(), ()> = MemoryFactory::new();
    /// factory.register("tcp", |_, _| Ok(()));
    ///
    /// let config = RegistryConfig {
    ///     transports: vec![TransportProfile::new("tcp", 10)],
    ///     ..Default::default()
    /// };
    /// let registry = TransportRegistry::with_config(factory, config);
    /// assert_eq!(registry.available_transports()[0].priority, 10);
    /// ```
    pub fn with_config(factory: F, config: RegistryConfig) -> Self {
        let mut state = RegistryState::default();
        for profile in config.transports.iter().cloned() {
            state.apply_profile(profile);
        }
        if let Some(weights) = &config.capability_scoring {
            state
                .selectors
                .push(Arc::new(CapabilitySelector::with_weights(weights.clone())));
        }

        #[cfg(feature = "tracing")]
        debug!(
            profiles = config.transports.len(),
            default_priority = config.default_priority,
            "transport registry created"
        );

        Self {
            inner: Arc::new(RegistryInner {
                factory,
                config,
                state: RwLock::new(state),
                metrics: SelectionMetrics::new(),
            }),
        }
    }

    /// Register (or replace) the capabilities of a transport type.
    ///
    /// The name does not have to be known to the factory yet; capabilities
    /// for names the factory never reports are simply unused.
    pub fn register_capabilities(&self, name: impl Into<String>, capabilities: Capabilities) {
        let name = name.into();
        #[cfg(feature = "tracing")]
        debug!(transport = %name, ?capabilities, "registered capabilities");
        self.inner.state.write().capabilities.insert(name, capabilities);
    }

    /// Set (or replace) the priority of a transport type. Higher is preferred.
    pub fn set_priority(&self, name: impl Into<String>, priority: i32) {
        let name = name.into();
        #[cfg(feature = "tracing")]
        debug!(transport = %name, priority, "set priority");
        self.inner.state.write().priorities.insert(name, priority);
    }

    /// Register a priority and capabilities for one transport type at once.
    pub fn register_profile(&self, profile: TransportProfile) {
        #[cfg(feature = "tracing")]
        debug!(transport = %profile.name, priority = profile.priority, "registered profile");
        self.inner.state.write().apply_profile(profile);
    }

    /// Append a selector to the end of the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use switchyard::factory::MemoryFactory;
    /// use switchyard::registry::TransportRegistry;
    /// use switchyard::selection::CapabilitySelector;
    ///
    /// let registry = TransportRegistry::new(MemoryFactory::<(), ()>::new());
    /// registry.add_selector(Arc::new(CapabilitySelector::new()));
    /// assert_eq!(registry.selector_count(), 1);
    /// ```
    pub fn add_selector(&self, selector: Arc<dyn TransportSelector>) {
        #[cfg(feature = "tracing")]
        debug!(selector = selector.name(), "added selector");
        self.inner.state.write().selectors.push(selector);
    }

    /// Get the number of selectors in the chain.
    pub fn selector_count(&self) -> usize {
        self.inner.state.read().selectors.len()
    }

    /// Get a copy of the capabilities registered for `name`.
    pub fn capabilities(&self, name: &str) -> Option<Capabilities> {
        self.inner.state.read().capabilities.get(name).cloned()
    }

    /// Get every transport type the factory reports, highest priority first.
    ///
    /// Transports with equal priority keep the factory's order. Missing
    /// priorities use `config.default_priority`; missing capabilities are
    /// empty. Names, priorities and capabilities are read under one read
    /// lock, so the result reflects a single point in time.
    pub fn available_transports(&self) -> Vec<TransportInfo> {
        let state = self.inner.state.read();
        let names = self.inner.factory.registered_names();
        self.describe(names, &state)
    }

    fn describe(&self, names: Vec<String>, state: &RegistryState) -> Vec<TransportInfo> {
        let mut available: Vec<TransportInfo> = names
            .into_iter()
            .map(|name| {
                let priority = state
                    .priorities
                    .get(&name)
                    .copied()
                    .unwrap_or(self.inner.config.default_priority);
                let capabilities = state.capabilities.get(&name).cloned().unwrap_or_default();
                TransportInfo::new(name, priority, capabilities)
            })
            .collect();
        // Stable, so equal priorities keep factory order.
        available.sort_by(|a, b| b.priority.cmp(&a.priority));
        available
    }

    fn snapshot(&self) -> (Vec<TransportInfo>, Vec<Arc<dyn TransportSelector>>) {
        let state = self.inner.state.read();
        let names = self.inner.factory.registered_names();
        let available = self.describe(names, &state);
        (available, state.selectors.clone())
    }

    /// Choose a transport for `requirements`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NoTransportsAvailable`] if the factory reports no
    ///   transports
    /// - [`RegistryError::NoSuitableTransport`] if every transport was
    ///   excluded, or nothing met the requirements and degradation is
    ///   disabled
    pub async fn select_transport(&self, requirements: &Requirements) -> Result<String, RegistryError> {
        self.select_transport_detailed(requirements)
            .await
            .map(|selection| selection.name)
    }

    /// Choose a transport for `requirements` and report how it was chosen.
    ///
    /// Errors are the same as [`select_transport`](Self::select_transport).
    pub async fn select_transport_detailed(
        &self,
        requirements: &Requirements,
    ) -> Result<Selection, RegistryError> {
        let result = self.run_selection(requirements).await;

        match &result {
            Ok(selection) => {
                self.inner.metrics.record_selection(&selection.source);
                #[cfg(feature = "tracing")]
                debug!(
                    transport = %selection.name,
                    source = %selection.source,
                    "selected transport"
                );
            }
            Err(_error) => {
                self.inner.metrics.record_failure();
                #[cfg(feature = "tracing")]
                debug!(error = %_error, "transport selection failed");
            }
        }

        result
    }

    async fn run_selection(&self, requirements: &Requirements) -> Result<Selection, RegistryError> {
        let (mut available, selectors) = self.snapshot();
        if available.is_empty() {
            return Err(RegistryError::NoTransportsAvailable);
        }

        available.retain(|info| !requirements.is_excluded(&info.name));

        for preferred in &requirements.preferred_transports {
            let candidate = available
                .iter()
                .find(|info| &info.name == preferred && meets_requirements(info, requirements));
            if let Some(info) = candidate {
                return Ok(Selection::new(info.name.clone(), SelectionSource::Preferred));
            }
        }

        for selector in &selectors {
            match self.consult(selector.as_ref(), requirements, &available).await {
                Ok(name) if available.iter().any(|info| info.name == name) => {
                    return Ok(Selection::new(
                        name,
                        SelectionSource::Selector(selector.name().to_string()),
                    ));
                }
                Ok(_name) => {
                    #[cfg(feature = "tracing")]
                    debug!(
                        selector = selector.name(),
                        proposed = %_name,
                        "selector proposed an ineligible transport"
                    );
                }
                Err(_error) => {
                    #[cfg(feature = "tracing")]
                    debug!(selector = selector.name(), error = %_error, "selector declined");
                }
            }
            self.inner.metrics.record_selector_decline();
        }

        #[cfg(feature = "tracing")]
        trace!(candidates = available.len(), "falling back to default selection");
        select_default(
            &available,
            requirements,
            self.inner.config.degrade_to_highest_priority,
        )
    }

    async fn consult(
        &self,
        selector: &dyn TransportSelector,
        requirements: &Requirements,
        available: &[TransportInfo],
    ) -> Result<String, RegistryError> {
        match self.inner.config.selector_timeout {
            Some(duration) => tokio::time::timeout(duration, selector.select(requirements, available))
                .await
                .map_err(|_| RegistryError::SelectorTimeout {
                    selector: selector.name().to_string(),
                    duration,
                })?,
            None => selector.select(requirements, available).await,
        }
    }

    /// Build a transport of type `name` through the factory.
    ///
    /// # Errors
    ///
    /// Whatever [`CreationError`] the factory returns, unchanged.
    pub async fn create_transport(
        &self,
        name: &str,
        config: F::Config,
    ) -> Result<F::Transport, CreationError> {
        #[cfg(feature = "tracing")]
        debug!(transport = %name, "creating transport");
        self.inner.factory.create(name, config).await
    }

    /// Get the underlying factory.
    pub fn factory(&self) -> &F {
        &self.inner.factory
    }

    /// Get the configuration the registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.inner.config
    }

    /// Get a copy of the selection counters.
    pub fn metrics(&self) -> SelectionStats {
        self.inner.metrics.snapshot()
    }

    /// Reset the selection counters to zero.
    pub fn reset_metrics(&self) {
        self.inner.metrics.reset();
    }
}

impl<F: TransportFactory> Clone for TransportRegistry<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: TransportFactory + fmt::Debug> fmt::Debug for TransportRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        let selectors: Vec<&str> = state.selectors.iter().map(|s| s.name()).collect();
        f.debug_struct("TransportRegistry")
            .field("factory", &self.inner.factory)
            .field("priorities", &state.priorities)
            .field("selectors", &selectors)
            .field("config", &self.inner.config)
            .finish()
    }
}
