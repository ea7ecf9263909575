//! Server endpoint types
//!
//! An outbound declares a list of upstream servers; the model assumes a
//! single-upstream configuration, so only the first entry ever matters.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Credential record attached to a server endpoint
///
/// The account payload is protocol-specific and carried through untouched.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct User {
    /// User identifier
    pub email: String,

    /// User policy level
    pub level: u32,

    /// Protocol-specific account fields, never interpreted here
    #[serde(flatten)]
    pub account: Map<String, Value>,
}

/// A single upstream server declaration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ServerEndpoint {
    /// Server host (IP address or domain name)
    pub address: String,

    /// Server port
    pub port: u16,

    /// Credentials accepted by this server
    pub users: Vec<User>,
}
