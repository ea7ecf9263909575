//! Network and port list types
//!
//! The source document writes port and network lists in several declarative
//! forms (`443`, `"80-90,443"`, `["tcp", "udp"]`, `"tcp,udp"`). Custom
//! deserializers resolve those forms into concrete values up front;
//! `build()` exposes the concrete list to the resolvers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::common::TranslateError;

/// Network protocol tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// TCP
    Tcp,
    /// UDP
    Udp,
    /// Unix domain socket
    Unix,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Tcp => write!(f, "tcp"),
            Network::Udp => write!(f, "udp"),
            Network::Unix => write!(f, "unix"),
        }
    }
}

impl FromStr for Network {
    type Err = TranslateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tcp" => Ok(Network::Tcp),
            "udp" => Ok(Network::Udp),
            "unix" => Ok(Network::Unix),
            _ => Err(TranslateError::UnsupportedFeature(format!(
                "network protocol: {}",
                s
            ))),
        }
    }
}

/// Declared set of network protocols
///
/// Deserializes from either a comma-separated string (`"tcp,udp"`) or a
/// list of tags (`["tcp", "udp"]`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkList(Vec<Network>);

impl NetworkList {
    /// Create a network list from concrete tags
    pub fn new(networks: Vec<Network>) -> Self {
        NetworkList(networks)
    }

    /// Concrete network tags declared by this list
    pub fn build(&self) -> &[Network] {
        &self.0
    }
}

impl From<Vec<Network>> for NetworkList {
    fn from(networks: Vec<Network>) -> Self {
        NetworkList(networks)
    }
}

impl<'de> Deserialize<'de> for NetworkList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            List(Vec<String>),
        }

        let tags: Vec<String> = match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text.split(',').map(|tag| tag.trim().to_string()).collect(),
            Repr::List(list) => list,
        };

        let networks = tags
            .iter()
            .map(|tag| Network::from_str(tag).map_err(serde::de::Error::custom))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(NetworkList(networks))
    }
}

/// A single inclusive port interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    /// Lower bound
    pub from: u32,
    /// Upper bound
    pub to: u32,
}

impl PortRange {
    /// Interval covering a single port
    pub fn single(port: u32) -> Self {
        PortRange { from: port, to: port }
    }
}

/// Declared list of port intervals
///
/// Deserializes from a bare integer (`443`), an interval string
/// (`"80-90,443"`), or a list mixing both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortList(Vec<PortRange>);

impl PortList {
    /// Create a port list from concrete ranges
    pub fn new(ranges: Vec<PortRange>) -> Self {
        PortList(ranges)
    }

    /// Concrete port ranges declared by this list
    pub fn build(&self) -> &[PortRange] {
        &self.0
    }
}

impl From<Vec<PortRange>> for PortList {
    fn from(ranges: Vec<PortRange>) -> Self {
        PortList(ranges)
    }
}

/// Parse a `"443"` or `"80-90"` token into a range
fn parse_port_token(token: &str) -> std::result::Result<PortRange, String> {
    let token = token.trim();
    match token.split_once('-') {
        Some((from, to)) => {
            let from = from
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid port range '{}': {}", token, e))?;
            let to = to
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid port range '{}': {}", token, e))?;
            Ok(PortRange { from, to })
        }
        None => token
            .parse::<u32>()
            .map(PortRange::single)
            .map_err(|e| format!("invalid port '{}': {}", token, e)),
    }
}

impl<'de> Deserialize<'de> for PortList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Entry {
            Number(u32),
            Text(String),
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u32),
            Text(String),
            List(Vec<Entry>),
        }

        let mut ranges = Vec::new();
        match Repr::deserialize(deserializer)? {
            Repr::Number(port) => ranges.push(PortRange::single(port)),
            Repr::Text(text) => {
                for token in text.split(',') {
                    ranges.push(parse_port_token(token).map_err(serde::de::Error::custom)?);
                }
            }
            Repr::List(entries) => {
                for entry in entries {
                    match entry {
                        Entry::Number(port) => ranges.push(PortRange::single(port)),
                        Entry::Text(text) => {
                            for token in text.split(',') {
                                ranges
                                    .push(parse_port_token(token).map_err(serde::de::Error::custom)?);
                            }
                        }
                    }
                }
            }
        }

        Ok(PortList(ranges))
    }
}
