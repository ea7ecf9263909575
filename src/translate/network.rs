//! Network filter

use crate::source::{Network, NetworkList};

/// Reduce a declared network list to a single canonical value
///
/// A missing list resolves to `""`. See [`canonical_networks`] for the
/// reduction rule.
pub fn canonical_network(networks: Option<&NetworkList>) -> &'static str {
    match networks {
        Some(list) => canonical_networks(list.build()),
        None => "",
    }
}

/// Reduce a concrete network set to a single canonical value
///
/// Tags other than TCP and UDP are discarded; the result is defined only
/// when exactly one tag survives. Any other cardinality yields `""`, which
/// callers must treat as "unspecified". A set legitimately allowing both
/// TCP and UDP therefore collapses to unspecified; this is a known lossy
/// simplification of the target schema, not an error.
pub fn canonical_networks(networks: &[Network]) -> &'static str {
    let mut filtered = networks
        .iter()
        .filter(|network| matches!(network, Network::Tcp | Network::Udp));

    match (filtered.next(), filtered.next()) {
        (Some(Network::Tcp), None) => "tcp",
        (Some(Network::Udp), None) => "udp",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_list_is_unspecified() {
        assert_eq!(canonical_network(None), "");
    }

    #[test]
    fn test_single_survivor() {
        assert_eq!(canonical_networks(&[Network::Tcp]), "tcp");
        assert_eq!(canonical_networks(&[Network::Udp]), "udp");
        assert_eq!(canonical_networks(&[Network::Unix, Network::Udp]), "udp");
    }

    #[test]
    fn test_both_protocols_collapse_to_unspecified() {
        assert_eq!(canonical_networks(&[Network::Tcp, Network::Udp]), "");
    }

    #[test]
    fn test_no_survivors_is_unspecified() {
        assert_eq!(canonical_networks(&[]), "");
        assert_eq!(canonical_networks(&[Network::Unix]), "");
    }

    #[test]
    fn test_declarative_list() {
        let list = NetworkList::new(vec![Network::Tcp]);
        assert_eq!(canonical_network(Some(&list)), "tcp");
    }
}
