//! Port resolver

use crate::source::PortList;

/// Resolve a single port from a declared port list
///
/// Only the lower bound of the first range is used. A missing list or one
/// with zero ranges resolves to 0. Values above 65535 are truncated to 16
/// bits, not rejected; callers needing strict range checking must validate
/// beforehand.
pub fn resolve_port(ports: Option<&PortList>) -> u16 {
    match ports {
        Some(list) => list
            .build()
            .first()
            .map_or(0, |range| range.from as u16),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PortRange;

    #[test]
    fn test_missing_list_resolves_to_zero() {
        assert_eq!(resolve_port(None), 0);
    }

    #[test]
    fn test_empty_list_resolves_to_zero() {
        let list = PortList::default();
        assert_eq!(resolve_port(Some(&list)), 0);
    }

    #[test]
    fn test_first_range_lower_bound() {
        let list = PortList::new(vec![
            PortRange { from: 1000, to: 2000 },
            PortRange::single(443),
        ]);
        assert_eq!(resolve_port(Some(&list)), 1000);
    }

    #[test]
    fn test_oversized_port_truncates() {
        let list = PortList::new(vec![PortRange::single(65536 + 443)]);
        assert_eq!(resolve_port(Some(&list)), 443);
    }
}
