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


use crate::factory::CreationError;
use async_trait::async_trait;
use std::sync::Arc;

/// Creates transport instances by name.
///
/// The registry consumes a factory through exactly two operations: listing
/// the names of the transport types it can build, and building one of them
/// from a configuration. How transports are implemented, connected or torn
/// down is entirely the factory's business.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use switchyard::factory::{CreationError, TransportFactory};
///
/// struct LoopbackFactory;
///
/// #[async_trait]
/// impl TransportFactory for LoopbackFactory {
///     type Config = String;
///     type Transport = String;
///
///     fn registered_names(&self) -> Vec<String> {
///         vec!["loopback".to_string()]
///     }
///
///     async fn create(&self, name: &str, config: String) -> Result<String, CreationError> {
///         match name {
///             "loopback" => Ok(config),
///             _ => Err(CreationError::UnknownTransport { name: name.to_string() }),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait TransportFactory: Send + Sync + 'static {
    /// Configuration passed to [`create`](TransportFactory::create).
    type Config: Send + 'static;

    /// Handle to a created transport.
    type Transport: Send + 'static;

    /// Returns the names of all registered transport types.
    ///
    /// The order is significant: it breaks priority ties when the registry
    /// lists available transports. Names must not repeat.
    ///
    /// The registry calls this while holding its state read lock, so
    /// implementations must not call back into the registry.
    fn registered_names(&self) -> Vec<String>;

    /// Creates a transport instance of the named type.
    ///
    /// # Errors
    ///
    /// Returns [`CreationError`] if the name is unknown or the configuration
    /// is invalid for that transport type.
    async fn create(
        &self,
        name: &str,
        config: Self::Config,
    ) -> Result<Self::Transport, CreationError>;
}

#[async_trait]
impl<F: TransportFactory> TransportFactory for Arc<F> {
    type Config = F::Config;
    type Transport = F::Transport;

    fn registered_names(&self) -> Vec<String> {
        (**self).registered_names()
    }

    async fn create(
        &self,
        name: &str,
        config: Self::Config,
    ) -> Result<Self::Transport, CreationError> {
        (**self).create(name, config).await
    }
}
