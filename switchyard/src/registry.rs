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


//! The transport registry.
//!
//! [`TransportRegistry`] ties a [`TransportFactory`](crate::factory::TransportFactory)
//! to the metadata used to choose between its transport types: priorities,
//! [`Capabilities`](crate::capabilities::Capabilities) and selectors. It is
//! the entry point for both selecting a transport and creating one.
//!
//! # Configuration
//!
//! [`RegistryConfig`] controls the default priority, whether selection
//! degrades to the highest priority transport when nothing qualifies, and
//! an optional per-selector timeout. It can also seed the registry with
//! [`TransportProfile`]s.

mod config;
mod error;
mod info;
mod metrics;
mod registry;

pub use config::{RegistryConfig, TransportProfile};
pub use error::RegistryError;
pub use info::TransportInfo;
pub use metrics::{SelectionMetrics, SelectionStats};
pub use registry::TransportRegistry;
