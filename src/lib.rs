//! Bogon ASN and IP address classification
//!
//! Tells publicly routable ASNs, addresses and prefixes apart from private,
//! reserved and documentation space, using the IANA/IETF special-purpose
//! registries. Everything here is a pure function over a compile-time table.
//!
//! ```
//! assert!(bogons::is_valid_public_asn(13335));
//! assert!(!bogons::is_valid_public_asn(64512));
//!
//! assert!(bogons::is_valid_public_ip("1.1.1.1"));
//! assert!(!bogons::is_valid_public_ip("192.168.1.1"));
//! assert!(!bogons::is_valid_public_ip("not an address"));
//! ```

pub mod asn;
pub mod error;
pub mod ip;
pub mod prefix;

// Re-export the classification API at the crate root
pub use asn::{
    check_asn, is_valid_public_asn, parse_asn, reserved_asn_range, validate_asn, AsnReservation,
    ReservedAsnRange, RESERVED_ASNS,
};
pub use error::BogonError;
pub use ip::{
    ip_bogon, ipv4_bogon, ipv6_bogon, is_global_unicast_v4, is_global_unicast_v6, is_public_ip,
    is_public_ipv4, is_public_ipv6, is_valid_public_ip, validate_ip, Bogon,
};
pub use prefix::{
    is_public_prefix, is_valid_public_prefix, prefix_bogon, IPV4_BOGON_PREFIXES,
    IPV6_BOGON_PREFIXES, IPV6_GLOBAL_UNICAST,
};
