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


use std::fmt;

/// How a transport was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectionSource {
    /// First preferred transport that met the requirements.
    Preferred,
    /// Proposed by the named selector.
    Selector(String),
    /// First transport in priority order that met the requirements.
    Default,
    /// Nothing met the requirements; the highest priority transport was used.
    Degraded,
}

impl SelectionSource {
    /// Returns true if the chosen transport may not meet the requirements.
    pub fn is_degraded(&self) -> bool {
        matches!(self, SelectionSource::Degraded)
    }
}

impl fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionSource::Preferred => write!(f, "preferred"),
            SelectionSource::Selector(name) => write!(f, "selector:{}", name),
            SelectionSource::Default => write!(f, "default"),
            SelectionSource::Degraded => write!(f, "degraded"),
        }
    }
}

/// The outcome of a successful selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Name of the chosen transport.
    pub name: String,
    /// Which stage of selection produced it.
    pub source: SelectionSource,
}

impl Selection {
    pub(crate) fn new(name: impl Into<String>, source: SelectionSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}
