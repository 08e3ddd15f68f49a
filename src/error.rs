//! Error types for strict classification

use crate::asn::AsnReservation;
use crate::ip::Bogon;
use std::net::IpAddr;
use thiserror::Error;

/// Errors returned by the `validate_*` and parsing entry points
///
/// The boolean classifiers never produce these; they fold every failure
/// into `false`. Use the strict variants when malformed input has to be
/// told apart from reserved input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BogonError {
    /// Text is not an IPv4 or IPv6 address literal
    #[error("Invalid IP address: {0:?}")]
    InvalidAddress(String),

    /// Text is not an ASN in asplain or asdot notation
    #[error("Invalid ASN: {0:?}")]
    InvalidAsn(String),

    /// Address parsed but falls in a bogon range
    #[error("{addr} is not publicly routable: {bogon}")]
    ReservedAddress {
        /// The rejected address
        addr: IpAddr,
        /// Why it was rejected
        bogon: Bogon,
    },

    /// ASN parsed but falls in a reserved range
    #[error("AS{asn} is not a public ASN: {reservation}")]
    ReservedAsn {
        /// The rejected ASN
        asn: u32,
        /// Which reservation it falls in
        reservation: AsnReservation,
    },
}
