//! Endpoint resolver

use crate::source::{ServerEndpoint, User};
use crate::target::ServerAddress;

/// Resolve the upstream address and credentials from a server list
///
/// Only the first endpoint is consulted; the model assumes single-upstream
/// configuration, so remaining entries are ignored. An empty list resolves
/// to the zero-valued address with no credentials, not an error.
pub fn resolve_server_address(servers: &[ServerEndpoint]) -> (ServerAddress, &[User]) {
    match servers.first() {
        Some(server) => (
            ServerAddress::new(server.address.clone(), server.port),
            server.users.as_slice(),
        ),
        None => (ServerAddress::default(), &[]),
    }
}
