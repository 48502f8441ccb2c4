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


//! The factory seam between the registry and concrete transports.
//!
//! The registry never builds transports itself. It asks a
//! [`TransportFactory`] which transport types exist and, once a name has been
//! selected, asks the same factory to build an instance from a caller-supplied
//! configuration. [`MemoryFactory`] is an in-process implementation driven by
//! constructor closures, useful for tests and for embedding.

mod error;
mod memory;
mod traits;

pub use error::CreationError;
pub use memory::MemoryFactory;
pub use traits::TransportFactory;
