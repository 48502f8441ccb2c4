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


//! In-process transport factory.

use crate::factory::{CreationError, TransportFactory};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

type Constructor<C, T> = Arc<dyn Fn(&str, C) -> Result<T, CreationError> + Send + Sync>;

/// A [`TransportFactory`] backed by constructor closures held in memory.
///
/// Transport types are kept in registration order. Registering a name that
/// already exists replaces its constructor without moving it.
///
/// # Examples
///
/// ```rust
/// use switchyard::factory::{MemoryFactory, TransportFactory};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let factory: MemoryFactory<u16, String> = MemoryFactory::new();
/// factory.register("websocket", |name, port| Ok(format!("{name}:{port}")));
/// factory.register("sse", |name, port| Ok(format!("{name}:{port}")));
///
/// assert_eq!(factory.registered_names(), vec!["websocket", "sse"]);
/// assert_eq!(factory.create("sse", 8080).await?, "sse:8080");
/// assert!(factory.create("quic", 443).await.is_err());
/// # Ok(())
/// # }
/// ```
pub struct MemoryFactory<C, T> {
    entries: RwLock<Vec<(String, Constructor<C, T>)>>,
}

impl<C, T> MemoryFactory<C, T> {
    /// Creates a factory with no registered transport types.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Registers a transport type and the closure that builds it.
    pub fn register<N, F>(&self, name: N, constructor: F)
    where
        N: Into<String>,
        F: Fn(&str, C) -> Result<T, CreationError> + Send + Sync + 'static,
    {
        let name = name.into();
        let constructor: Constructor<C, T> = Arc::new(constructor);
        let mut entries = self.entries.write();

        match entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = constructor,
            None => entries.push((name, constructor)),
        }
    }

    /// Removes a transport type, returning `true` if it was registered.
    pub fn unregister(&self, name: &str) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|(existing, _)| existing != name);
        entries.len() != before
    }

    /// Returns `true` if a transport type with this name is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.read().iter().any(|(existing, _)| existing == name)
    }

    /// Returns the number of registered transport types.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if no transport types are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<C, T> Default for MemoryFactory<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, T> fmt::Debug for MemoryFactory<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .entries
            .read()
            .iter()
            .map(|(name, _)| name.clone())
            .collect();
        f.debug_struct("MemoryFactory")
            .field("transports", &names)
            .finish()
    }
}

#[async_trait]
impl<C, T> TransportFactory for MemoryFactory<C, T>
where
    C: Send + 'static,
    T: Send + 'static,
{
    type Config = C;
    type Transport = T;

    fn registered_names(&self) -> Vec<String> {
        self.entries
            .read()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    async fn create(&self, name: &str, config: C) -> Result<T, CreationError> {
        // Clone the constructor out so the lock is not held while it runs.
        let constructor = self
            .entries
            .read()
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, constructor)| Arc::clone(constructor));

        match constructor {
            Some(constructor) => constructor(name, config),
            None => Err(CreationError::UnknownTransport {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(name: &str, config: u32) -> Result<String, CreationError> {
        Ok(format!("{}-{}", name, config))
    }

    #[test]
    fn test_new_is_empty() {
        let factory: MemoryFactory<u32, String> = MemoryFactory::new();
        assert!(factory.is_empty());
        assert!(factory.registered_names().is_empty());
    }

    #[test]
    fn test_registration_order_preserved() {
        let factory = MemoryFactory::new();
        factory.register("websocket", echo);
        factory.register("sse", echo);
        factory.register("http-poll", echo);

        assert_eq!(
            factory.registered_names(),
            vec!["websocket", "sse", "http-poll"]
        );
        assert_eq!(factory.len(), 3);
    }

    #[test]
    fn test_reregister_keeps_position() {
        let factory = MemoryFactory::new();
        factory.register("websocket", echo);
        factory.register("sse", echo);
        factory.register("websocket", |_name: &str, _config: u32| {
            Ok("replaced".to_string())
        });

        assert_eq!(factory.registered_names(), vec!["websocket", "sse"]);
    }

    #[test]
    fn test_unregister() {
        let factory = MemoryFactory::new();
        factory.register("websocket", echo);

        assert!(factory.unregister("websocket"));
        assert!(!factory.unregister("websocket"));
        assert!(!factory.is_registered("websocket"));
    }

    #[tokio::test]
    async fn test_create_known_transport() {
        let factory = MemoryFactory::new();
        factory.register("sse", echo);

        let transport = factory.create("sse", 7).await.unwrap();
        assert_eq!(transport, "sse-7");
    }

    #[tokio::test]
    async fn test_create_unknown_transport() {
        let factory = MemoryFactory::new();
        factory.register("sse", echo);

        let error = factory.create("websocket", 7).await.unwrap_err();
        assert!(error.is_unknown_transport());
        assert_eq!(error.transport_name(), "websocket");
    }

    #[tokio::test]
    async fn test_create_propagates_constructor_error() {
        let factory = MemoryFactory::new();
        factory.register("websocket", |name: &str, config: u32| {
            if config == 0 {
                Err(CreationError::InvalidConfiguration {
                    name: name.to_string(),
                    reason: "port must be non-zero".to_string(),
                })
            } else {
                Ok(config)
            }
        });

        assert_eq!(factory.create("websocket", 80).await.unwrap(), 80);
        let error = factory.create("websocket", 0).await.unwrap_err();
        assert!(error.is_configuration_error());
    }

    #[tokio::test]
    async fn test_shared_factory_through_arc() {
        let factory = Arc::new(MemoryFactory::new());
        factory.register("sse", echo);

        let shared: Arc<MemoryFactory<u32, String>> = Arc::clone(&factory);
        assert_eq!(TransportFactory::registered_names(&shared), vec!["sse"]);

        factory.register("websocket", echo);
        assert_eq!(shared.registered_names().len(), 2);
    }
}
