//! Public/bogon classification of IPv4 and IPv6 addresses

use crate::error::BogonError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Reason an address is not publicly routable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bogon {
    /// `0.0.0.0` or `::`
    Unspecified,
    /// `127.0.0.0/8` or `::1`
    Loopback,
    /// IPv4 class D or `ff00::/8`
    Multicast,
    /// `169.254.0.0/16` or `fe80::/10`
    LinkLocal,
    /// `255.255.255.255`
    Broadcast,
    /// `0.0.0.0/8`
    ThisNetwork,
    /// RFC1918 space
    Private,
    /// Carrier-grade NAT space, `100.64.0.0/10`
    SharedAddressSpace,
    /// `192.0.0.0/24`
    ProtocolAssignment,
    /// Documentation ranges (TEST-NET-1/2/3, `2001:db8::/32`)
    Documentation,
    /// IPv4 class E
    Reserved,
    /// `2001::/32`
    Teredo,
    /// IPv6 outside `2000::/3`
    OutsideGlobalUnicast,
}

impl std::fmt::Display for Bogon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bogon::Unspecified => write!(f, "unspecified address"),
            Bogon::Loopback => write!(f, "loopback"),
            Bogon::Multicast => write!(f, "multicast"),
            Bogon::LinkLocal => write!(f, "link-local (RFC3927/RFC4291)"),
            Bogon::Broadcast => write!(f, "limited broadcast"),
            Bogon::ThisNetwork => write!(f, "\"this network\""),
            Bogon::Private => write!(f, "private-use network (RFC1918)"),
            Bogon::SharedAddressSpace => write!(f, "shared address space (RFC6598)"),
            Bogon::ProtocolAssignment => write!(f, "IETF protocol assignments (RFC6890)"),
            Bogon::Documentation => write!(f, "documentation (RFC5737/RFC3849)"),
            Bogon::Reserved => write!(f, "reserved (class E)"),
            Bogon::Teredo => write!(f, "Teredo tunneling (RFC4380)"),
            Bogon::OutsideGlobalUnicast => write!(f, "outside 2000::/3"),
        }
    }
}

/// Checks whether an IPv4 address is global unicast.
///
/// Mirrors the usual address-class rules: everything except unspecified,
/// loopback, multicast, link-local and the limited broadcast address.
/// Private ranges still count as global unicast here.
pub fn is_global_unicast_v4(addr: Ipv4Addr) -> bool {
    ipv4_address_class(addr).is_none()
}

/// Checks whether an IPv6 address is global unicast.
///
/// Everything except `::`, `::1`, `ff00::/8` and `fe80::/10`.
pub fn is_global_unicast_v6(addr: Ipv6Addr) -> bool {
    ipv6_address_class(addr).is_none()
}

fn ipv4_address_class(addr: Ipv4Addr) -> Option<Bogon> {
    if addr.is_unspecified() {
        Some(Bogon::Unspecified)
    } else if addr.is_loopback() {
        Some(Bogon::Loopback)
    } else if addr.is_multicast() {
        Some(Bogon::Multicast)
    } else if addr.is_link_local() {
        Some(Bogon::LinkLocal)
    } else if addr.is_broadcast() {
        Some(Bogon::Broadcast)
    } else {
        None
    }
}

fn ipv6_address_class(addr: Ipv6Addr) -> Option<Bogon> {
    if addr.is_unspecified() {
        Some(Bogon::Unspecified)
    } else if addr.is_loopback() {
        Some(Bogon::Loopback)
    } else if addr.is_multicast() {
        Some(Bogon::Multicast)
    } else if addr.segments()[0] & 0xffc0 == 0xfe80 {
        Some(Bogon::LinkLocal)
    } else {
        None
    }
}

/// Returns why an IPv4 address is not public, or `None` if it is.
pub fn ipv4_bogon(addr: impl Into<Ipv4Addr>) -> Option<Bogon> {
    let addr = addr.into();
    if let Some(class) = ipv4_address_class(addr) {
        return Some(class);
    }

    match addr.octets() {
        [0, ..] => Some(Bogon::ThisNetwork),
        [127, ..] => Some(Bogon::Loopback),
        [10, ..] => Some(Bogon::Private),
        [172, 16..=31, ..] => Some(Bogon::Private),
        [192, 168, ..] => Some(Bogon::Private),
        [100, 64..=127, ..] => Some(Bogon::SharedAddressSpace),
        [169, 254, ..] => Some(Bogon::LinkLocal),
        [192, 0, 0, _] => Some(Bogon::ProtocolAssignment),
        [192, 0, 2, _] => Some(Bogon::Documentation),
        [198, 51, 100, _] => Some(Bogon::Documentation),
        [203, 0, 113, _] => Some(Bogon::Documentation),
        [224..=255, ..] => Some(Bogon::Reserved),
        _ => None,
    }
}

/// Returns why an IPv6 address is not public, or `None` if it is.
///
/// IPv4-mapped addresses are judged as IPv6 here and so are never public;
/// use [`ip_bogon`] to classify them by their embedded IPv4 address.
pub fn ipv6_bogon(addr: impl Into<Ipv6Addr>) -> Option<Bogon> {
    let addr = addr.into();
    if let Some(class) = ipv6_address_class(addr) {
        return Some(class);
    }

    match addr.octets() {
        [0x20, 0x01, 0x00, 0x00, ..] => Some(Bogon::Teredo),
        [0x20, 0x01, 0x0d, 0xb8, ..] => Some(Bogon::Documentation),
        [0x20..=0x3f, ..] => None,
        _ => Some(Bogon::OutsideGlobalUnicast),
    }
}

/// Returns why an address is not public, or `None` if it is.
pub fn ip_bogon(addr: impl Into<IpAddr>) -> Option<Bogon> {
    match addr.into() {
        IpAddr::V4(v4) => ipv4_bogon(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => ipv4_bogon(v4),
            None => ipv6_bogon(v6),
        },
    }
}

/// Checks if the IPv4 address is a valid public address.
pub fn is_public_ipv4(addr: impl Into<Ipv4Addr>) -> bool {
    ipv4_bogon(addr).is_none()
}

/// Checks if the IPv6 address is a valid public address.
pub fn is_public_ipv6(addr: impl Into<Ipv6Addr>) -> bool {
    ipv6_bogon(addr).is_none()
}

/// Checks that an already parsed address is public, whatever its family.
pub fn is_public_ip(addr: impl Into<IpAddr>) -> bool {
    ip_bogon(addr).is_none()
}

/// Checks that `text` parses as an IPv4 or IPv6 address and that the
/// address is public.
///
/// Only ASCII whitespace around the address is ignored.
///
/// Malformed input and reserved addresses both give `false`. Call
/// [`validate_ip`] to tell them apart.
pub fn is_valid_public_ip(text: &str) -> bool {
    text.trim_ascii()
        .parse::<IpAddr>()
        .is_ok_and(|addr| ip_bogon(addr).is_none())
}

/// Parses `text` and returns the address if it is public.
pub fn validate_ip(text: &str) -> Result<IpAddr, BogonError> {
    let addr: IpAddr = text.trim_ascii().parse().map_err(|_| {
        tracing::trace!(input = text, "rejecting unparseable address");
        BogonError::InvalidAddress(text.to_string())
    })?;

    match ip_bogon(addr) {
        Some(bogon) => {
            tracing::debug!(%addr, %bogon, "rejecting bogon address");
            Err(BogonError::ReservedAddress { addr, bogon })
        }
        None => Ok(addr),
    }
}
