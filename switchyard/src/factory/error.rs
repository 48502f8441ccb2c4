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


//! Errors reported by transport factories.

use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur while creating a transport instance.
///
/// The registry never inspects or wraps these errors: whatever the factory
/// returns from [`TransportFactory::create`](crate::factory::TransportFactory::create)
/// is handed back to the caller of
/// [`TransportRegistry::create_transport`](crate::registry::TransportRegistry::create_transport).
///
/// # Examples
///
/// ```rust
/// use switchyard::factory::CreationError;
///
/// let error = CreationError::UnknownTransport {
///     name: "carrier-pigeon".to_string(),
/// };
/// assert_eq!(error.transport_name(), "carrier-pigeon");
/// assert!(!error.is_configuration_error());
/// ```
#[derive(Debug, Error)]
pub enum CreationError {
    /// No transport type with this name is registered with the factory.
    #[error("transport '{name}' is not registered")]
    UnknownTransport {
        /// The requested transport name
        name: String,
    },

    /// The configuration was rejected by the transport type.
    #[error("invalid configuration for transport '{name}': {reason}")]
    InvalidConfiguration {
        /// The requested transport name
        name: String,
        /// Description of the configuration problem
        reason: String,
    },

    /// The transport type accepted the configuration but could not be built.
    #[error("failed to create transport '{name}': {source}")]
    Failed {
        /// The requested transport name
        name: String,
        /// The underlying error
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl CreationError {
    /// Returns the name of the transport that failed to be created.
    pub fn transport_name(&self) -> &str {
        match self {
            CreationError::UnknownTransport { name }
            | CreationError::InvalidConfiguration { name, .. }
            | CreationError::Failed { name, .. } => name,
        }
    }

    /// Returns `true` if the caller's configuration was at fault.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CreationError::InvalidConfiguration { .. })
    }

    /// Returns `true` if the name is unknown to the factory.
    pub fn is_unknown_transport(&self) -> bool {
        matches!(self, CreationError::UnknownTransport { .. })
    }
}
