//! Stream settings types
//!
//! `StreamSettings` is the source schema's kind-tagged union: the `network`
//! tag selects exactly one of the per-kind sub-settings objects, the rest
//! are ignored even when populated. The raw tag stays a string here because
//! it comes straight from the document; `TransportKind` is applied at
//! translation time so an unrecognized tag surfaces as a typed error
//! instead of a parse failure.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::common::TranslateError;

/// Recognized stream-transport kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// Plain TCP, no transport wrapper
    Tcp,
    /// HTTP transport
    Http,
    /// WebSocket transport
    Ws,
    /// gRPC transport
    Grpc,
    /// gRPC transport under its legacy "gun" tag
    Gun,
    /// QUIC transport
    Quic,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Tcp => write!(f, "tcp"),
            TransportKind::Http => write!(f, "http"),
            TransportKind::Ws => write!(f, "ws"),
            TransportKind::Grpc => write!(f, "grpc"),
            TransportKind::Gun => write!(f, "gun"),
            TransportKind::Quic => write!(f, "quic"),
        }
    }
}

impl FromStr for TransportKind {
    type Err = TranslateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Self::Tcp),
            "http" => Ok(Self::Http),
            "ws" => Ok(Self::Ws),
            "grpc" => Ok(Self::Grpc),
            "gun" => Ok(Self::Gun),
            "quic" => Ok(Self::Quic),
            _ => Err(TranslateError::UnsupportedTransport(s.to_string())),
        }
    }
}

/// TCP sub-settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TcpSettings {
    /// Header obfuscation configuration, carried opaque; its mere presence
    /// makes the configuration untranslatable
    pub header: Option<Value>,
}

/// HTTP sub-settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Host list
    pub host: Option<Vec<String>>,

    /// Request path
    pub path: String,

    /// Request method
    pub method: String,

    /// Request headers; the source allows multiple values per name
    pub headers: HashMap<String, Vec<String>>,
}

/// WebSocket sub-settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WsSettings {
    /// Handshake path, possibly carrying a query string
    pub path: String,

    /// Handshake headers
    pub headers: HashMap<String, String>,
}

/// gRPC sub-settings (also used for the legacy "gun" form)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrpcSettings {
    /// Service name
    pub service_name: String,
}

/// QUIC sub-settings
///
/// The target schema copies nothing from these, so the fields are not
/// modeled; the object is accepted and ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct QuicSettings {}

/// Stream settings for one outbound
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamSettings {
    /// Declared transport kind tag; absent means "no transport"
    pub network: Option<String>,

    /// TCP sub-settings, consulted only when the kind is "tcp"
    pub tcp_settings: Option<TcpSettings>,

    /// HTTP sub-settings, consulted only when the kind is "http"
    pub http_settings: Option<HttpSettings>,

    /// WebSocket sub-settings, consulted only when the kind is "ws"
    pub ws_settings: Option<WsSettings>,

    /// gRPC sub-settings, consulted when the kind is "grpc" or "gun"
    pub grpc_settings: Option<GrpcSettings>,

    /// Legacy gun sub-settings, fallback when `grpc_settings` is absent
    pub gun_settings: Option<GrpcSettings>,

    /// QUIC sub-settings, accepted but never copied
    pub quic_settings: Option<QuicSettings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_kind_round_trip() {
        for tag in ["tcp", "http", "ws", "grpc", "gun", "quic"] {
            let kind = TransportKind::from_str(tag).unwrap();
            assert_eq!(kind.to_string(), tag);
        }
    }

    #[test]
    fn test_transport_kind_rejects_unknown() {
        let err = TransportKind::from_str("kcp").unwrap_err();
        assert!(err.to_string().contains("kcp"));
    }

    #[test]
    fn test_stream_settings_from_document() {
        let settings: StreamSettings = serde_json::from_str(
            r#"{
                "network": "ws",
                "wsSettings": {
                    "path": "/chat",
                    "headers": { "Host": "example.com" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.network.as_deref(), Some("ws"));
        let ws = settings.ws_settings.unwrap();
        assert_eq!(ws.path, "/chat");
        assert_eq!(ws.headers.get("Host").map(String::as_str), Some("example.com"));
    }
}
