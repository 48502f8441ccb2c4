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


#![doc = include_str!("../../README.md")]
#![allow(clippy::module_inception)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! ## Architecture
//!
//! - **[`capabilities`]**: What a transport type can do, and negotiation
//!   between two descriptors
//! - **[`selection`]**: Requirements, matching, selectors and the default
//!   fallback
//! - **[`factory`]**: The factory interface the registry delegates creation to
//! - **[`registry`]**: The [`TransportRegistry`] facade, its configuration and
//!   selection metrics
//!
//! ## Feature flags
//!
//! - `tracing` (default): structured logs of registration and selection
//! - `observability` (default): selection counters exported through `metrics`
//! - `serde` (default): serde support for capabilities and configuration

pub mod capabilities;
pub mod error;
pub mod factory;
pub mod registry;
pub mod selection;

pub use capabilities::{Capabilities, CompressionType, SecurityFeature};
pub use error::{log_error, SwitchyardError};
pub use factory::{CreationError, TransportFactory};
pub use registry::{RegistryConfig, RegistryError, TransportInfo, TransportRegistry};
pub use selection::{CapabilitySelector, Requirements, TransportSelector};
