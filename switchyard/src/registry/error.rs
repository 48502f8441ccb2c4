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


//! Registry error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while selecting a transport.
///
/// Registration never fails, so every variant comes from selection. Selector
/// implementations return these to decline; the registry treats any selector
/// error as "try the next one" and only surfaces errors from the final stage.
///
/// # Examples
///
/// ```rust
/// use switchyard::registry::RegistryError;
///
/// let error = RegistryError::no_suitable_transport("nothing supports streaming");
/// assert!(error.is_no_suitable_transport());
/// assert_eq!(
///     error.to_string(),
///     "no suitable transport: nothing supports streaming"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The factory reports no transport types at all.
    #[error("no transports available")]
    NoTransportsAvailable,

    /// Transports exist but none could be chosen.
    #[error("no suitable transport: {reason}")]
    NoSuitableTransport {
        /// Why nothing was chosen
        reason: String,
    },

    /// A selector failed for its own reasons.
    #[error("selector {selector} failed: {reason}")]
    SelectorFailed {
        /// Name of the selector
        selector: String,
        /// Description of the failure
        reason: String,
    },

    /// A selector did not answer within the configured timeout.
    #[error("selector {selector} timed out after {duration:?}")]
    SelectorTimeout {
        /// Name of the selector
        selector: String,
        /// The timeout that was exceeded
        duration: Duration,
    },
}

impl RegistryError {
    /// Shorthand for [`RegistryError::NoSuitableTransport`].
    pub fn no_suitable_transport(reason: impl Into<String>) -> Self {
        RegistryError::NoSuitableTransport {
            reason: reason.into(),
        }
    }

    /// Returns `true` if no transports are registered with the factory.
    pub fn is_no_transports_available(&self) -> bool {
        matches!(self, RegistryError::NoTransportsAvailable)
    }

    /// Returns `true` if transports exist but none could be chosen.
    pub fn is_no_suitable_transport(&self) -> bool {
        matches!(self, RegistryError::NoSuitableTransport { .. })
    }

    /// Returns `true` if this error originated in a selector.
    pub fn is_selector_error(&self) -> bool {
        matches!(
            self,
            RegistryError::SelectorFailed { .. } | RegistryError::SelectorTimeout { .. }
        )
    }

    /// Returns `true` if this error is a selector timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RegistryError::SelectorTimeout { .. })
    }
}
