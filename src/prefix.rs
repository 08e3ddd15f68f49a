//! Bogon checks for whole CIDR prefixes
//!
//! A prefix is public only when every address inside it is public, so a
//! prefix is rejected as soon as it overlaps any bogon range.

use crate::ip::{ipv4_bogon, ipv6_bogon, Bogon};
use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

/// IPv4 bogon space as CIDR blocks.
pub const IPV4_BOGON_PREFIXES: &[(Ipv4Net, Bogon)] = &[
    (v4net(0, 0, 0, 0, 8), Bogon::ThisNetwork),
    (v4net(10, 0, 0, 0, 8), Bogon::Private),
    (v4net(100, 64, 0, 0, 10), Bogon::SharedAddressSpace),
    (v4net(127, 0, 0, 0, 8), Bogon::Loopback),
    (v4net(169, 254, 0, 0, 16), Bogon::LinkLocal),
    (v4net(172, 16, 0, 0, 12), Bogon::Private),
    (v4net(192, 0, 0, 0, 24), Bogon::ProtocolAssignment),
    (v4net(192, 0, 2, 0, 24), Bogon::Documentation),
    (v4net(192, 168, 0, 0, 16), Bogon::Private),
    (v4net(198, 51, 100, 0, 24), Bogon::Documentation),
    (v4net(203, 0, 113, 0, 24), Bogon::Documentation),
    (v4net(224, 0, 0, 0, 4), Bogon::Multicast),
    (v4net(240, 0, 0, 0, 4), Bogon::Reserved),
];

/// IPv6 bogons carved out of the global unicast block.
pub const IPV6_BOGON_PREFIXES: &[(Ipv6Net, Bogon)] = &[
    (
        Ipv6Net::new_assert(Ipv6Addr::new(0x2001, 0, 0, 0, 0, 0, 0, 0), 32),
        Bogon::Teredo,
    ),
    (
        Ipv6Net::new_assert(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0), 32),
        Bogon::Documentation,
    ),
];

/// Currently allocated global unicast space, `2000::/3`.
pub const IPV6_GLOBAL_UNICAST: Ipv6Net =
    Ipv6Net::new_assert(Ipv6Addr::new(0x2000, 0, 0, 0, 0, 0, 0, 0), 3);

const fn v4net(a: u8, b: u8, c: u8, d: u8, len: u8) -> Ipv4Net {
    Ipv4Net::new_assert(Ipv4Addr::new(a, b, c, d), len)
}

/// Returns the first bogon range a prefix overlaps, or `None` if every
/// address in it is public.
///
/// Host prefixes (`/32`, `/128`) report the same reason as the address
/// classifier, e.g. `Unspecified` for `0.0.0.0/32`.
pub fn prefix_bogon(net: impl Into<IpNet>) -> Option<Bogon> {
    match net.into() {
        IpNet::V4(net) if net.prefix_len() == net.max_prefix_len() => ipv4_bogon(net.network()),
        IpNet::V6(net) if net.prefix_len() == net.max_prefix_len() => ipv6_bogon(net.network()),
        IpNet::V4(net) => IPV4_BOGON_PREFIXES
            .iter()
            .find(|(bogon, _)| bogon.contains(&net) || net.contains(bogon))
            .map(|(_, kind)| *kind),
        IpNet::V6(net) => {
            if !IPV6_GLOBAL_UNICAST.contains(&net) {
                return Some(Bogon::OutsideGlobalUnicast);
            }
            IPV6_BOGON_PREFIXES
                .iter()
                .find(|(bogon, _)| bogon.contains(&net) || net.contains(bogon))
                .map(|(_, kind)| *kind)
        }
    }
}

/// Checks that every address in the prefix is public.
pub fn is_public_prefix(net: impl Into<IpNet>) -> bool {
    prefix_bogon(net).is_none()
}

/// Parses `text` as a CIDR prefix and checks that it is public.
///
/// Parse failures give `false`, as with [`crate::is_valid_public_ip`].
pub fn is_valid_public_prefix(text: &str) -> bool {
    text.trim_ascii()
        .parse::<IpNet>()
        .is_ok_and(|net| prefix_bogon(net).is_none())
}
