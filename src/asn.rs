//! Reserved ASN classification
//!
//! An ASN is "valid" here when it is not reserved, private or set aside for
//! documentation. Whether it is actually allocated to anyone is out of scope.

use crate::error::BogonError;
use serde::{Deserialize, Serialize};

/// Why an ASN is not usable on the public Internet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AsnReservation {
    /// AS0, never to be used in routing
    Unallocated,
    /// AS23456, placeholder for 4-byte ASNs on 2-byte sessions
    AsTrans,
    /// Set aside for use in documentation and sample code
    Documentation,
    /// Private use, like RFC1918 address space
    PrivateUse,
    /// Last ASN of the 16-bit and 32-bit spaces
    LastAsn,
    /// Held back by IANA
    IanaReserved,
}

impl std::fmt::Display for AsnReservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsnReservation::Unallocated => write!(f, "unallocated (RFC7607)"),
            AsnReservation::AsTrans => write!(f, "AS_TRANS (RFC6793)"),
            AsnReservation::Documentation => write!(f, "documentation (RFC5398)"),
            AsnReservation::PrivateUse => write!(f, "private use (RFC6996)"),
            AsnReservation::LastAsn => write!(f, "reserved (RFC7300)"),
            AsnReservation::IanaReserved => write!(f, "reserved (RFC5398)"),
        }
    }
}

/// A closed interval of reserved ASNs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedAsnRange {
    /// First reserved ASN
    pub start: u32,
    /// Last reserved ASN (inclusive)
    pub end: u32,
    /// Reason the range is reserved
    pub kind: AsnReservation,
    /// RFCs that set the range aside
    pub rfcs: &'static [&'static str],
}

impl ReservedAsnRange {
    /// Whether `asn` falls in this range.
    pub const fn contains(&self, asn: u32) -> bool {
        asn >= self.start && asn <= self.end
    }
}

/// Every reserved ASN range, sorted by `start` and pairwise disjoint.
pub const RESERVED_ASNS: &[ReservedAsnRange] = &[
    ReservedAsnRange {
        start: 0,
        end: 0,
        kind: AsnReservation::Unallocated,
        rfcs: &["RFC6483", "RFC7607"],
    },
    ReservedAsnRange {
        start: 23456,
        end: 23456,
        kind: AsnReservation::AsTrans,
        rfcs: &["RFC6793"],
    },
    ReservedAsnRange {
        start: 64496,
        end: 64511,
        kind: AsnReservation::Documentation,
        rfcs: &["RFC5398"],
    },
    ReservedAsnRange {
        start: 64512,
        end: 65534,
        kind: AsnReservation::PrivateUse,
        rfcs: &["RFC1930", "RFC6996"],
    },
    ReservedAsnRange {
        start: 65535,
        end: 65535,
        kind: AsnReservation::LastAsn,
        rfcs: &["RFC7300"],
    },
    ReservedAsnRange {
        start: 65536,
        end: 65551,
        kind: AsnReservation::Documentation,
        rfcs: &["RFC4893", "RFC5398"],
    },
    ReservedAsnRange {
        start: 65552,
        end: 131_071,
        kind: AsnReservation::IanaReserved,
        rfcs: &["RFC5398"],
    },
    ReservedAsnRange {
        start: 4_200_000_000,
        end: 4_294_967_294,
        kind: AsnReservation::PrivateUse,
        rfcs: &["RFC6996"],
    },
    ReservedAsnRange {
        start: 4_294_967_295,
        end: 4_294_967_295,
        kind: AsnReservation::LastAsn,
        rfcs: &["RFC7300"],
    },
];

/// Returns the reserved range containing `asn`, if any.
pub fn reserved_asn_range(asn: u32) -> Option<&'static ReservedAsnRange> {
    RESERVED_ASNS.iter().find(|range| range.contains(asn))
}

/// Checks whether an ASN is valid, i.e. not private or reserved.
pub fn is_valid_public_asn(asn: u32) -> bool {
    reserved_asn_range(asn).is_none()
}

/// Returns `asn` back if it is public, or the reservation it falls in.
pub fn check_asn(asn: u32) -> Result<u32, BogonError> {
    match reserved_asn_range(asn) {
        Some(range) => Err(BogonError::ReservedAsn {
            asn,
            reservation: range.kind,
        }),
        None => Ok(asn),
    }
}

/// Parses an ASN in asplain (`65000`, `AS65000`) or asdot (`1.10`) notation.
///
/// Surrounding ASCII whitespace and a case-insensitive `AS` prefix are accepted.
/// In asdot form both halves must fit in 16 bits (RFC5396).
pub fn parse_asn(text: &str) -> Result<u32, BogonError> {
    let invalid = || BogonError::InvalidAsn(text.to_string());

    let trimmed = text.trim_ascii();
    let digits = match trimmed.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("as") => &trimmed[2..],
        _ => trimmed,
    };

    match digits.split_once('.') {
        Some((high, low)) => {
            let high: u16 = parse_digits(high).ok_or_else(invalid)?;
            let low: u16 = parse_digits(low).ok_or_else(invalid)?;
            Ok((u32::from(high) << 16) | u32::from(low))
        }
        None => parse_digits(digits).ok_or_else(invalid),
    }
}

/// Parses an ASN and checks that it is public.
pub fn validate_asn(text: &str) -> Result<u32, BogonError> {
    let asn = parse_asn(text).inspect_err(|_| {
        tracing::trace!(input = text, "rejecting unparseable ASN");
    })?;
    check_asn(asn).inspect_err(|e| {
        tracing::debug!(asn, error = %e, "rejecting reserved ASN");
    })
}

// `str::parse` on integers accepts a leading '+', which is not an ASN.
fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_public_asn() {
        let cases = [
            (0, false),
            (1, true),
            (13335, true),
            (23456, false),
            (64496, false),
            (64511, false),
            (64512, false),
            (65534, false),
            (65535, false),
            (65551, false),
            (131_071, false),
            (131_072, true),
            (4_199_999_999, true),
            (4_200_000_000, false),
            (4_294_967_295, false),
        ];
        for (asn, want) in cases {
            assert_eq!(is_valid_public_asn(asn), want, "AS{asn}");
        }
    }

    #[test]
    fn test_table_sorted_and_disjoint() {
        for range in RESERVED_ASNS {
            assert!(range.start <= range.end, "{range:?}");
        }
        for pair in RESERVED_ASNS.windows(2) {
            assert!(
                pair[0].end < pair[1].start,
                "{:?} overlaps {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_table_does_not_cover_everything() {
        let reserved: u64 = RESERVED_ASNS
            .iter()
            .map(|r| u64::from(r.end) - u64::from(r.start) + 1)
            .sum();
        assert!(reserved < 1u64 << 32);
    }

    #[test]
    fn test_boundaries() {
        for range in RESERVED_ASNS {
            assert!(!is_valid_public_asn(range.start));
            assert!(!is_valid_public_asn(range.end));

            if let Some(below) = range.start.checked_sub(1) {
                if reserved_asn_range(below).is_none() {
                    assert!(is_valid_public_asn(below), "AS{below}");
                }
            }
            if let Some(above) = range.end.checked_add(1) {
                if reserved_asn_range(above).is_none() {
                    assert!(is_valid_public_asn(above), "AS{above}");
                }
            }
        }
    }

    #[test]
    fn test_reserved_asn_range() {
        let range = reserved_asn_range(65540).unwrap();
        assert_eq!(range.kind, AsnReservation::Documentation);
        assert_eq!(range.rfcs, &["RFC4893", "RFC5398"]);

        assert_eq!(
            reserved_asn_range(4_200_000_001).unwrap().kind,
            AsnReservation::PrivateUse
        );
        assert!(reserved_asn_range(3356).is_none());
    }

    #[test]
    fn test_check_asn() {
        assert_eq!(check_asn(3356), Ok(3356));
        assert_eq!(
            check_asn(65535),
            Err(BogonError::ReservedAsn {
                asn: 65535,
                reservation: AsnReservation::LastAsn,
            })
        );
    }

    #[test]
    fn test_parse_asn() {
        assert_eq!(parse_asn("13335"), Ok(13335));
        assert_eq!(parse_asn("AS13335"), Ok(13335));
        assert_eq!(parse_asn("as13335"), Ok(13335));
        assert_eq!(parse_asn("  AS4200000000 "), Ok(4_200_000_000));
        assert_eq!(parse_asn("1.10"), Ok(65546));
        assert_eq!(parse_asn("AS65535.65535"), Ok(u32::MAX));
        assert_eq!(parse_asn("0.0"), Ok(0));
        assert_eq!(parse_asn("\tAS13335\n"), Ok(13335));

        for bad in [
            "", "AS", "+65000", "-1", "4294967296", "1.65536", "1.", ".1", "1.2.3", "AS 1",
            "ASN1", "0x10", "\u{a0}AS13335", "AS13335\u{3000}",
        ] {
            assert_eq!(
                parse_asn(bad),
                Err(BogonError::InvalidAsn(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_validate_asn() {
        assert_eq!(validate_asn("AS3356"), Ok(3356));
        assert!(matches!(
            validate_asn("AS64512"),
            Err(BogonError::ReservedAsn {
                reservation: AsnReservation::PrivateUse,
                ..
            })
        ));
        assert!(matches!(
            validate_asn("bogus"),
            Err(BogonError::InvalidAsn(_))
        ));
    }

    #[test]
    fn test_reservation_serde_names() {
        assert_eq!(
            serde_json::to_string(&AsnReservation::AsTrans).unwrap(),
            "\"as-trans\""
        );
        let parsed: AsnReservation = serde_json::from_str("\"private-use\"").unwrap();
        assert_eq!(parsed, AsnReservation::PrivateUse);
    }
}
