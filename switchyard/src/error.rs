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


//! Crate-level error type.
//!
//! Selection and creation fail in different ways and are reported by
//! different methods, so each has its own error type:
//!
//! - [`RegistryError`]: choosing a transport failed
//! - [`CreationError`]: building the chosen transport failed
//!
//! [`SwitchyardError`] unifies the two for callers that select and create in
//! one step and want a single error type to propagate with `?`.

use crate::factory::CreationError;
use crate::registry::RegistryError;
use thiserror::Error;

/// Any error produced by this crate.
///
/// # Examples
///
/// ```rust
/// use switchyard::factory::{MemoryFactory, TransportFactory};
/// use switchyard::registry::TransportRegistry;
/// use switchyard::selection::Requirements;
/// use switchyard::SwitchyardError;
///
/// async fn connect<F: TransportFactory>(
///     registry: &TransportRegistry<F>,
///     config: F::Config,
/// ) -> Result<F::Transport, SwitchyardError> {
///     let name = registry.select_transport(&Requirements::default()).await?;
///     Ok(registry.create_transport(&name, config).await?)
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let registry = TransportRegistry::new(MemoryFactory::<(), ()>::new());
/// let error = connect(&registry, ()).await.unwrap_err();
/// assert!(error.is_registry_error());
/// # }
/// ```
#[derive(Debug, Error)]
pub enum SwitchyardError {
    /// Transport selection failed.
    #[error("selection error: {0}")]
    Registry(#[from] RegistryError),

    /// Transport creation failed.
    #[error("creation error: {0}")]
    Creation(#[from] CreationError),
}

impl SwitchyardError {
    /// Returns `true` if this is a selection error.
    #[must_use]
    pub fn is_registry_error(&self) -> bool {
        matches!(self, Self::Registry(_))
    }

    /// Returns `true` if this is a creation error.
    #[must_use]
    pub fn is_creation_error(&self) -> bool {
        matches!(self, Self::Creation(_))
    }
}

/// Logs an error with structured fields.
///
/// Selection failures are logged at WARN since callers often retry with
/// relaxed requirements; creation failures are logged at ERROR.
#[cfg(feature = "tracing")]
pub fn log_error(error: &SwitchyardError) {
    match error {
        SwitchyardError::Registry(e) => {
            tracing::warn!(
                error = %e,
                selector_error = e.is_selector_error(),
                "Transport selection failed"
            );
        }
        SwitchyardError::Creation(e) => {
            tracing::error!(
                error = %e,
                transport = e.transport_name(),
                configuration_error = e.is_configuration_error(),
                "Transport creation failed"
            );
        }
    }
}

/// Logs an error with structured fields.
///
/// This is a no-op when the `tracing` feature is not enabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn log_error(_error: &SwitchyardError) {}
