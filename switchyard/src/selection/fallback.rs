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


//! Default selection used when no preference or selector produced a result.

use crate::registry::{RegistryError, TransportInfo};
use crate::selection::{meets_requirements, Requirements, Selection, SelectionSource};
#[cfg(feature = "tracing")]
use tracing::warn;

/// Pick the first transport in `available` that meets `requirements`.
///
/// `available` is expected in priority order. When nothing qualifies and
/// `degrade` is set, the first (highest priority) transport is returned with
/// [`SelectionSource::Degraded`] so callers still get a working transport.
///
/// # Errors
///
/// Returns [`RegistryError::NoSuitableTransport`] if `available` is empty,
/// or if nothing qualifies and `degrade` is false.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::Capabilities;
/// use switchyard::registry::TransportInfo;
/// use switchyard::selection::{select_default, Requirements, SelectionSource};
///
/// let available = vec![
///     TransportInfo::new("http", 10, Capabilities::new()),
///     TransportInfo::new("ws", 5, Capabilities::new().with_streaming(true)),
/// ];
/// let requirements = Requirements::builder().streaming(true).build();
///
/// let selection = select_default(&available, &requirements, true).unwrap();
/// assert_eq!(selection.name, "ws");
/// assert_eq!(selection.source, SelectionSource::Default);
/// ```
pub fn select_default(
    available: &[TransportInfo],
    requirements: &Requirements,
    degrade: bool,
) -> Result<Selection, RegistryError> {
    if let Some(info) = available
        .iter()
        .find(|info| meets_requirements(info, requirements))
    {
        return Ok(Selection::new(info.name.clone(), SelectionSource::Default));
    }

    match available.first() {
        Some(info) if degrade => {
            #[cfg(feature = "tracing")]
            warn!(
                transport = %info.name,
                "no transport meets the requirements, degrading to highest priority"
            );
            Ok(Selection::new(info.name.clone(), SelectionSource::Degraded))
        }
        Some(_) => Err(RegistryError::no_suitable_transport(
            "no transport meets the requirements",
        )),
        None => Err(RegistryError::no_suitable_transport(
            "no transports to choose from",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::Capabilities;

    fn snapshot() -> Vec<TransportInfo> {
        vec![
            TransportInfo::new("tcp", 10, Capabilities::new().with_bidirectional(true)),
            TransportInfo::new(
                "ws",
                5,
                Capabilities::new()
                    .with_bidirectional(true)
                    .with_streaming(true),
            ),
        ]
    }

    #[test]
    fn test_first_qualifying_in_order() {
        let requirements = Requirements::builder().bidirectional(true).build();
        let selection = select_default(&snapshot(), &requirements, true).unwrap();
        assert_eq!(selection.name, "tcp");
        assert_eq!(selection.source, SelectionSource::Default);
    }

    #[test]
    fn test_skips_non_qualifying() {
        let requirements = Requirements::builder().streaming(true).build();
        let selection = select_default(&snapshot(), &requirements, true).unwrap();
        assert_eq!(selection.name, "ws");
    }

    #[test]
    fn test_degrades_to_first() {
        let requirements = Requirements::builder().multiplexing(true).build();
        let selection = select_default(&snapshot(), &requirements, true).unwrap();
        assert_eq!(selection.name, "tcp");
        assert_eq!(selection.source, SelectionSource::Degraded);
    }

    #[test]
    fn test_no_degradation_fails() {
        let requirements = Requirements::builder().multiplexing(true).build();
        let error = select_default(&snapshot(), &requirements, false).unwrap_err();
        assert!(error.is_no_suitable_transport());
    }

    #[test]
    fn test_empty_fails() {
        let error = select_default(&[], &Requirements::default(), true).unwrap_err();
        assert!(error.is_no_suitable_transport());
    }
}
