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


use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Compression algorithm a transport can apply to its payloads.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::CompressionType;
///
/// assert_eq!(CompressionType::Zstd.as_str(), "zstd");
/// assert_eq!(format!("{}", CompressionType::Gzip), "gzip");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CompressionType {
    /// Gzip (RFC 1952)
    Gzip,
    /// Zstandard
    Zstd,
    /// Snappy
    Snappy,
    /// Brotli
    Brotli,
    /// LZ4
    Lz4,
}

impl CompressionType {
    /// Returns the identifier of this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Zstd => "zstd",
            Self::Snappy => "snappy",
            Self::Brotli => "brotli",
            Self::Lz4 => "lz4",
        }
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Security feature a transport can provide.
///
/// `Custom` covers deployment-specific mechanisms; two custom features match
/// only when their identifiers are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SecurityFeature {
    /// Transport layer security
    Tls,
    /// Mutual TLS
    Mtls,
    /// JSON web token authentication
    Jwt,
    /// Static API key authentication
    #[cfg_attr(feature = "serde", serde(rename = "api-key"))]
    ApiKey,
    /// OAuth 2.0 bearer tokens
    #[cfg_attr(feature = "serde", serde(rename = "oauth2"))]
    OAuth2,
    /// Deployment-specific feature identified by name
    Custom(String),
}

impl SecurityFeature {
    /// Returns the identifier of this feature.
    ///
    /// ```rust
    /// use switchyard::capabilities::SecurityFeature;
    ///
    /// assert_eq!(SecurityFeature::ApiKey.as_str(), "api-key");
    /// assert_eq!(SecurityFeature::Custom("hmac".into()).as_str(), "hmac");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tls => "tls",
            Self::Mtls => "mtls",
            Self::Jwt => "jwt",
            Self::ApiKey => "api-key",
            Self::OAuth2 => "oauth2",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for SecurityFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of a custom transport feature.
///
/// Features cover transport-specific settings that have no dedicated field
/// in [`Capabilities`], such as flow-control windows or codec names. With the
/// `serde` feature the value maps to plain JSON booleans, integers, strings
/// and arrays.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::FeatureValue;
///
/// assert_eq!(FeatureValue::from(64).as_integer(), Some(64));
/// assert_eq!(FeatureValue::from("cbor").to_string(), "cbor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FeatureValue {
    /// A flag
    Bool(bool),
    /// A signed integer
    Integer(i64),
    /// A string
    Text(String),
    /// An ordered list of values
    List(Vec<FeatureValue>),
}

impl FeatureValue {
    /// Returns the flag, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer, if this is an `Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{}", value),
            Self::Integer(value) => write!(f, "{}", value),
            Self::Text(value) => write!(f, "{}", value),
            Self::List(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FeatureValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<FeatureValue>> for FeatureValue {
    fn from(values: Vec<FeatureValue>) -> Self {
        Self::List(values)
    }
}

/// Describes what a transport type supports.
///
/// Capabilities are supplied once per transport type when it is registered
/// and are treated as an immutable value afterwards. The default value is the
/// zero value: it advertises no capabilities at all, so a transport without
/// registered capabilities only satisfies empty requirements.
///
/// # Examples
///
/// ```rust
/// use switchyard::capabilities::{Capabilities, CompressionType, SecurityFeature};
///
/// let websocket = Capabilities::new()
///     .with_streaming(true)
///     .with_bidirectional(true)
///     .with_compression(CompressionType::Gzip)
///     .with_max_message_size(1024 * 1024)
///     .with_security(SecurityFeature::Tls);
///
/// assert!(websocket.streaming);
/// assert!(websocket.supports_compression());
/// assert!(!websocket.is_unbounded());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Capabilities {
    /// Whether the transport can stream a sequence of messages
    pub streaming: bool,

    /// Whether both peers can send at any time
    pub bidirectional: bool,

    /// Whether several logical streams can share one connection
    pub multiplexing: bool,

    /// Whether the transport reconnects on its own after a failure
    pub reconnection: bool,

    /// Supported compression algorithms (empty means unsupported)
    pub compression: BTreeSet<CompressionType>,

    /// Largest message in bytes (0 means unbounded)
    pub max_message_size: u64,

    /// Supported security features
    pub security: BTreeSet<SecurityFeature>,

    /// Version of the transport's protocol, if it advertises one
    pub protocol_version: Option<String>,

    /// Transport-specific features keyed by name
    pub features: BTreeMap<String, FeatureValue>,
}

impl Capabilities {
    /// Creates an empty capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets streaming support.
    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    /// Sets bidirectional support.
    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    /// Sets multiplexing support.
    pub fn with_multiplexing(mut self, multiplexing: bool) -> Self {
        self.multiplexing = multiplexing;
        self
    }

    /// Sets automatic reconnection support.
    pub fn with_reconnection(mut self, reconnection: bool) -> Self {
        self.reconnection = reconnection;
        self
    }

    /// Adds a supported compression algorithm.
    pub fn with_compression(mut self, algorithm: CompressionType) -> Self {
        self.compression.insert(algorithm);
        self
    }

    /// Sets the maximum message size in bytes (0 for unbounded).
    pub fn with_max_message_size(mut self, bytes: u64) -> Self {
        self.max_message_size = bytes;
        self
    }

    /// Adds a supported security feature.
    pub fn with_security(mut self, feature: SecurityFeature) -> Self {
        self.security.insert(feature);
        self
    }

    /// Sets the advertised protocol version.
    pub fn with_protocol_version(mut self, version: impl Into<String>) -> Self {
        self.protocol_version = Some(version.into());
        self
    }

    /// Sets a custom feature, replacing any previous value for `key`.
    pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.features.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a custom feature.
    pub fn feature(&self, key: &str) -> Option<&FeatureValue> {
        self.features.get(key)
    }

    /// Returns `true` if at least one compression algorithm is supported.
    pub fn supports_compression(&self) -> bool {
        !self.compression.is_empty()
    }

    /// Returns `true` if the transport has no message size limit.
    pub fn is_unbounded(&self) -> bool {
        self.max_message_size == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let caps = Capabilities::default();
        assert!(!caps.streaming);
        assert!(!caps.bidirectional);
        assert!(!caps.multiplexing);
        assert!(!caps.reconnection);
        assert!(!caps.supports_compression());
        assert!(caps.is_unbounded());
        assert!(caps.security.is_empty());
        assert!(caps.protocol_version.is_none());
        assert!(caps.features.is_empty());
    }

    #[test]
    fn test_features() {
        let caps = Capabilities::new()
            .with_feature("window", 64)
            .with_feature("codec", "cbor")
            .with_feature("window", 128);

        assert_eq!(caps.features.len(), 2);
        assert_eq!(caps.feature("window").and_then(FeatureValue::as_integer), Some(128));
        assert_eq!(caps.feature("codec").and_then(FeatureValue::as_str), Some("cbor"));
        assert_eq!(caps.feature("missing"), None);
    }

    #[test]
    fn test_feature_value_display() {
        let list = FeatureValue::from(vec![FeatureValue::from(true), FeatureValue::from("x")]);
        assert_eq!(list.to_string(), "[true, x]");
        assert_eq!(FeatureValue::from(-3).to_string(), "-3");
        assert_eq!(FeatureValue::from(false).as_bool(), Some(false));
        assert_eq!(FeatureValue::from(1).as_bool(), None);
    }

    #[test]
    fn test_builder_methods() {
        let caps = Capabilities::new()
            .with_streaming(true)
            .with_multiplexing(true)
            .with_compression(CompressionType::Zstd)
            .with_compression(CompressionType::Zstd)
            .with_security(SecurityFeature::Mtls)
            .with_max_message_size(4096)
            .with_protocol_version("1.1");

        assert!(caps.streaming);
        assert!(caps.multiplexing);
        assert_eq!(caps.compression.len(), 1);
        assert!(caps.security.contains(&SecurityFeature::Mtls));
        assert_eq!(caps.max_message_size, 4096);
        assert_eq!(caps.protocol_version.as_deref(), Some("1.1"));
    }

    #[test]
    fn test_compression_display() {
        assert_eq!(format!("{}", CompressionType::Brotli), "brotli");
        assert_eq!(CompressionType::Lz4.as_str(), "lz4");
        assert_eq!(CompressionType::Snappy.as_str(), "snappy");
    }

    #[test]
    fn test_security_display() {
        assert_eq!(format!("{}", SecurityFeature::OAuth2), "oauth2");
        assert_eq!(format!("{}", SecurityFeature::Custom("sig".into())), "sig");
        assert_ne!(
            SecurityFeature::Custom("a".into()),
            SecurityFeature::Custom("b".into())
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_capabilities_from_partial_json() {
        let caps: Capabilities = serde_json::from_str(
            r#"{"streaming": true, "compression": ["gzip", "lz4"], "security": ["tls", "api-key"]}"#,
        )
        .unwrap();

        assert!(caps.streaming);
        assert!(!caps.bidirectional);
        assert!(caps.compression.contains(&CompressionType::Lz4));
        assert!(caps.security.contains(&SecurityFeature::ApiKey));
        assert_eq!(caps.max_message_size, 0);
        assert!(caps.features.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_features_from_json() {
        let caps: Capabilities = serde_json::from_str(
            r#"{"features": {"zero-copy": true, "window": 64, "codec": "cbor", "modes": ["a", 1]}}"#,
        )
        .unwrap();

        assert_eq!(caps.feature("zero-copy"), Some(&FeatureValue::Bool(true)));
        assert_eq!(caps.feature("window"), Some(&FeatureValue::Integer(64)));
        assert_eq!(caps.feature("codec"), Some(&FeatureValue::Text("cbor".into())));
        assert_eq!(
            caps.feature("modes"),
            Some(&FeatureValue::List(vec![
                FeatureValue::Text("a".into()),
                FeatureValue::Integer(1)
            ]))
        );
    }
}
