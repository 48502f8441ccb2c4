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


use crate::registry::{RegistryError, TransportInfo};
use crate::selection::Requirements;
use async_trait::async_trait;
use std::fmt;

/// Strategy that proposes a transport for a set of requirements.
///
/// Selectors are consulted by the registry in registration order. Each one
/// receives the caller's requirements and the transports that are still
/// eligible (excluded names already removed, highest priority first), and
/// either proposes a name or declines. Returning an error or an empty name
/// declines, and the registry moves on to the next selector.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use switchyard::registry::{RegistryError, TransportInfo};
/// use switchyard::selection::{Requirements, TransportSelector};
///
/// /// Picks the transport with the largest message size limit.
/// struct LargestMessages;
///
/// #[async_trait]
/// impl TransportSelector for LargestMessages {
///     async fn select(
///         &self,
///         _requirements: &Requirements,
///         available: &[TransportInfo],
///     ) -> Result<String, RegistryError> {
///         available
///             .iter()
///             .max_by_key(|info| info.capabilities.max_message_size)
///             .map(|info| info.name.clone())
///             .ok_or_else(|| RegistryError::no_suitable_transport("nothing to choose from"))
///     }
///
///     fn name(&self) -> &str {
///         "LargestMessages"
///     }
/// }
/// ```
#[async_trait]
pub trait TransportSelector: Send + Sync {
    /// Propose a transport name from `available`.
    ///
    /// # Arguments
    ///
    /// * `requirements` - What the caller needs
    /// * `available` - Eligible transports, highest priority first
    ///
    /// # Returns
    ///
    /// The proposed transport name, or an error to decline
    async fn select(
        &self,
        requirements: &Requirements,
        available: &[TransportInfo],
    ) -> Result<String, RegistryError>;

    /// Get a human-readable name for this selector.
    ///
    /// Used for logging and in [`SelectionSource::Selector`](crate::selection::SelectionSource::Selector).
    fn name(&self) -> &str;
}

/// A [`TransportSelector`] built from a closure.
///
/// The closure returns `Some(name)` to propose a transport or `None` to
/// decline.
///
/// ```rust
/// use switchyard::registry::TransportInfo;
/// use switchyard::selection::{FnSelector, Requirements, TransportSelector};
///
/// let lowest_priority = FnSelector::new(
///     "LowestPriority",
///     |_: &Requirements, available: &[TransportInfo]| {
///         available.last().map(|info| info.name.clone())
///     },
/// );
/// assert_eq!(lowest_priority.name(), "LowestPriority");
/// ```
pub struct FnSelector<F> {
    name: String,
    select: F,
}

impl<F> FnSelector<F>
where
    F: Fn(&Requirements, &[TransportInfo]) -> Option<String> + Send + Sync,
{
    /// Wraps `select` under the given selector name.
    pub fn new(name: impl Into<String>, select: F) -> Self {
        Self {
            name: name.into(),
            select,
        }
    }
}

impl<F> fmt::Debug for FnSelector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSelector")
            .field("name", &self.name)
            .finish()
    }
}

#[async_trait]
impl<F> TransportSelector for FnSelector<F>
where
    F: Fn(&Requirements, &[TransportInfo]) -> Option<String> + Send + Sync,
{
    async fn select(
        &self,
        requirements: &Requirements,
        available: &[TransportInfo],
    ) -> Result<String, RegistryError> {
        (self.select)(requirements, available).ok_or_else(|| RegistryError::SelectorFailed {
            selector: self.name.clone(),
            reason: "declined".to_string(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
