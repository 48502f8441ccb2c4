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


use crate::registry::TransportInfo;
use crate::selection::Requirements;

/// Returns `true` if the transport satisfies every stated requirement.
///
/// Each requirement is an independent constraint and failing any one of them
/// disqualifies the transport:
///
/// - required streaming, bidirectional messaging, multiplexing or
///   reconnection must be advertised by the transport;
/// - required compression is satisfied by any supported algorithm;
/// - a maximum message size is only checked when both sides are bounded, and
///   then the caller's size must fit within the transport's;
/// - every required security feature must be supported.
///
/// Unset requirements impose nothing, so relaxing a requirement never turns a
/// passing transport into a failing one.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::Capabilities;
/// use switchyard::registry::TransportInfo;
/// use switchyard::selection::{meets_requirements, Requirements};
///
/// let sse = TransportInfo::new("sse", 0, Capabilities::new().with_streaming(true));
///
/// assert!(meets_requirements(&sse, &Requirements::default()));
/// assert!(meets_requirements(&sse, &Requirements::builder().streaming(true).build()));
/// assert!(!meets_requirements(&sse, &Requirements::builder().bidirectional(true).build()));
/// ```
pub fn meets_requirements(info: &TransportInfo, requirements: &Requirements) -> bool {
    unmet_requirements(info, requirements).is_empty()
}

/// Lists the requirements a transport fails, by field name.
///
/// Security features are reported as `security:<feature>`. An empty list
/// means [`meets_requirements`] holds.
pub fn unmet_requirements(info: &TransportInfo, requirements: &Requirements) -> Vec<String> {
    let caps = &info.capabilities;
    let mut unmet = Vec::new();

    if requirements.streaming && !caps.streaming {
        unmet.push("streaming".to_string());
    }
    if requirements.bidirectional && !caps.bidirectional {
        unmet.push("bidirectional".to_string());
    }
    if requirements.compression && caps.compression.is_empty() {
        unmet.push("compression".to_string());
    }
    if requirements.multiplexing && !caps.multiplexing {
        unmet.push("multiplexing".to_string());
    }
    if requirements.reconnection && !caps.reconnection {
        unmet.push("reconnection".to_string());
    }
    if requirements.max_message_size > 0
        && caps.max_message_size > 0
        && requirements.max_message_size > caps.max_message_size
    {
        unmet.push("max_message_size".to_string());
    }
    for feature in &requirements.security {
        if !caps.security.contains(feature) {
            unmet.push(format!("security:{}", feature));
        }
    }

    unmet
}
