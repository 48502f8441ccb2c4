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


//! Capability descriptors for transport types.
//!
//! A [`Capabilities`] value describes what one transport type can do:
//! streaming, bidirectional messaging, compression, multiplexing, automatic
//! reconnection, message size limits and security features. The registry
//! stores one descriptor per transport name and matches it against a
//! caller's [`Requirements`](crate::selection::Requirements).
//!
//! Two peers that each advertise capabilities can work out what they share
//! with [`negotiate`]. Transport-specific [`FeatureValue`]s can be reconciled
//! by [`NegotiationRule`]s registered on a [`Negotiator`].
//!
//! # Examples
//!
//! ```rust
//! use switchyard::capabilities::{Capabilities, CompressionType, SecurityFeature};
//!
//! let sse = Capabilities::new()
//!     .with_streaming(true)
//!     .with_reconnection(true)
//!     .with_security(SecurityFeature::Tls);
//!
//! let websocket = Capabilities::new()
//!     .with_streaming(true)
//!     .with_bidirectional(true)
//!     .with_compression(CompressionType::Gzip);
//!
//! assert_ne!(sse, websocket);
//! ```

mod negotiation;
mod types;

pub use negotiation::{
    negotiate, CapabilityConflict, MinimumRule, NegotiationResult, NegotiationRule, Negotiator,
};
pub use types::{Capabilities, CompressionType, FeatureValue, SecurityFeature};
