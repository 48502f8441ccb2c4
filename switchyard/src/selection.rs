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


//! Transport selection.
//!
//! A selection request is described by [`Requirements`]. The registry
//! narrows its snapshot of registered transports with the requirements'
//! exclusions and preferences, consults the chain of [`TransportSelector`]s,
//! and finally falls back to [`select_default`].
//!
//! # Selectors
//!
//! - [`CapabilitySelector`]: weighted scoring of every candidate
//! - [`FnSelector`]: adapts a closure
//!
//! Custom selectors implement [`TransportSelector`] directly.

mod fallback;
mod matching;
mod outcome;
mod requirements;
mod scoring;
mod traits;

pub use fallback::select_default;
pub use matching::{meets_requirements, unmet_requirements};
pub use outcome::{Selection, SelectionSource};
pub use requirements::{Requirements, RequirementsBuilder};
pub use scoring::{CapabilitySelector, ScoringWeights};
pub use traits::{FnSelector, TransportSelector};
