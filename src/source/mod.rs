//! Source schema module
//!
//! In-memory value objects for the v2ray-style source configuration, as
//! handed over by the external document parser. Field names and nesting
//! follow the source document; these types carry no behavior beyond
//! deserialization and are consumed by the `translate` module.

mod endpoint;
mod network;
mod stream;

// Re-export types
pub use endpoint::{ServerEndpoint, User};
pub use network::{Network, NetworkList, PortList, PortRange};
pub use stream::{
    GrpcSettings, HttpSettings, QuicSettings, StreamSettings, TcpSettings, TransportKind,
    WsSettings,
};
