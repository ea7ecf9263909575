//! Translation module
//!
//! The four pure functions that rewrite source-schema values into
//! target-schema values. The three resolvers project flat scalar fields;
//! the transport translator produces the nested transport-options object.
//! None of them share state or depend on call order.

mod endpoint;
mod network;
mod port;
mod transport;

// Re-export the translation entry points
pub use endpoint::resolve_server_address;
pub use network::{canonical_network, canonical_networks};
pub use port::resolve_port;
pub use transport::translate_transport;
