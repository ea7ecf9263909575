//! Target schema module
//!
//! In-memory value objects for the sing-box-style target configuration.
//! These are the translation's output artifacts, handed to an external
//! builder/validator; variant option structs default to their zero value
//! and are skipped on serialization when empty.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport wrapper type selected by the translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportType {
    /// No transport wrapper (plain TCP)
    #[serde(rename = "")]
    None,
    /// HTTP transport
    #[serde(rename = "http")]
    Http,
    /// WebSocket transport
    #[serde(rename = "ws")]
    Ws,
    /// gRPC transport
    #[serde(rename = "grpc")]
    Grpc,
    /// QUIC transport
    #[serde(rename = "quic")]
    Quic,
}

impl Default for TransportType {
    fn default() -> Self {
        TransportType::None
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportType::None => write!(f, "none"),
            TransportType::Http => write!(f, "http"),
            TransportType::Ws => write!(f, "ws"),
            TransportType::Grpc => write!(f, "grpc"),
            TransportType::Quic => write!(f, "quic"),
        }
    }
}

/// HTTP transport options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpOptions {
    /// Host list
    pub host: Vec<String>,

    /// Request path
    pub path: String,

    /// Request method
    pub method: String,

    /// Single-valued request headers
    pub headers: HashMap<String, String>,
}

impl HttpOptions {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// WebSocket transport options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsocketOptions {
    /// Handshake path including any remaining query string
    pub path: String,

    /// Handshake headers
    pub headers: HashMap<String, String>,

    /// Early-data byte budget; 0 means early data is disabled
    pub max_early_data: u32,

    /// Header carrying early-data payloads
    pub early_data_header_name: String,
}

impl WebsocketOptions {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// gRPC transport options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrpcOptions {
    /// Service name
    pub service_name: String,
}

impl GrpcOptions {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Transport options for one outbound
///
/// The zero value (type [`TransportType::None`], all option structs empty)
/// means the connection runs directly on TCP with no wrapper.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportOptions {
    /// Selected transport wrapper
    #[serde(rename = "type")]
    pub transport_type: TransportType,

    /// HTTP options, meaningful only when the type is HTTP
    #[serde(skip_serializing_if = "HttpOptions::is_empty")]
    pub http: HttpOptions,

    /// WebSocket options, meaningful only when the type is WebSocket
    #[serde(skip_serializing_if = "WebsocketOptions::is_empty")]
    pub websocket: WebsocketOptions,

    /// gRPC options, meaningful only when the type is gRPC
    #[serde(skip_serializing_if = "GrpcOptions::is_empty")]
    pub grpc: GrpcOptions,
}

/// Resolved upstream address
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerAddress {
    /// Host (IP address or domain name); empty when unresolved
    pub host: String,

    /// Port; 0 when unresolved
    pub port: u16,
}

impl ServerAddress {
    /// Create a server address from host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ServerAddress {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
