//! Transport Bridge: v2ray-to-sing-box transport configuration translation
//!
//! This library rewrites a proxy's declarative transport configuration from
//! the v2ray/xray source schema into the sing-box target schema. Both schemas
//! describe the same thing, a transport binding for a proxy connection
//! (address, port, network, and one of several stream transports layered
//! over TCP), but diverge in field names, nesting, and encodings.
//!
//! The library never opens a socket: it consumes in-memory source-schema
//! objects produced by an external parser and produces in-memory
//! target-schema objects for an external builder. Every operation is a pure
//! function of its input, so the whole crate is safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use transport_bridge::source::{StreamSettings, WsSettings};
//! use transport_bridge::target::TransportType;
//! use transport_bridge::translate::translate_transport;
//!
//! let settings = StreamSettings {
//!     network: Some("ws".to_string()),
//!     ws_settings: Some(WsSettings {
//!         path: "chat?ed=2048".to_string(),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let options = translate_transport(&settings).unwrap();
//! assert_eq!(options.transport_type, TransportType::Ws);
//! assert_eq!(options.websocket.path, "/chat");
//! assert_eq!(options.websocket.max_early_data, 2048);
//! ```

// Public modules
pub mod common;
pub mod source;
pub mod target;
pub mod translate;

// Re-export commonly used structures and functions for convenience
pub use common::{Result, TranslateError};
pub use translate::{
    canonical_network, canonical_networks, resolve_port, resolve_server_address,
    translate_transport,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
