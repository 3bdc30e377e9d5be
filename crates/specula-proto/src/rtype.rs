//! DNS record types.
//!
//! This module defines the RFC 1035 record and query types. The QTYPE
//! field of a question is a superset of the record types: it adds the
//! transfer and wildcard codes (AXFR, MAILB, MAILA, ANY).

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use std::fmt;

/// DNS record type.
///
/// See RFC 1035 Sections 3.2.2 and 3.2.3 for the original registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive, Serialize,
)]
#[repr(u16)]
pub enum RecordType {
    /// IPv4 host address - RFC 1035
    A = 1,

    /// Authoritative name server - RFC 1035
    NS = 2,

    /// Mail destination (obsolete, use MX) - RFC 1035
    #[deprecated(note = "Use MX instead")]
    MD = 3,

    /// Mail forwarder (obsolete, use MX) - RFC 1035
    #[deprecated(note = "Use MX instead")]
    MF = 4,

    /// Canonical name (alias) - RFC 1035
    CNAME = 5,

    /// Start of authority - RFC 1035
    SOA = 6,

    /// Mailbox domain name - RFC 1035
    MB = 7,

    /// Mail group member - RFC 1035
    MG = 8,

    /// Mail rename domain name - RFC 1035
    MR = 9,

    /// Null record - RFC 1035
    NULL = 10,

    /// Well-known services - RFC 1035
    WKS = 11,

    /// Domain name pointer - RFC 1035
    PTR = 12,

    /// Host information - RFC 1035
    HINFO = 13,

    /// Mailbox information - RFC 1035
    MINFO = 14,

    /// Mail exchange - RFC 1035
    MX = 15,

    /// Text strings - RFC 1035
    TXT = 16,

    /// Request for a zone transfer - RFC 1035 (QTYPE only)
    AXFR = 252,

    /// Request for mailbox-related records (MB, MG or MR) - RFC 1035 (QTYPE only)
    MAILB = 253,

    /// Request for mail agent records (obsolete, use MX) - RFC 1035 (QTYPE only)
    #[deprecated(note = "Use MX instead")]
    MAILA = 254,

    /// Request for all records - RFC 1035 (QTYPE only)
    ANY = 255,
}

impl RecordType {
    /// Returns the numeric value of the type.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Creates a type from its numeric value.
    #[inline]
    pub fn from_u16(value: u16) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Returns true if this code is valid only in questions (QTYPE),
    /// never in resource records.
    #[inline]
    #[allow(deprecated)]
    pub const fn is_query_only(self) -> bool {
        matches!(self, Self::AXFR | Self::MAILB | Self::MAILA | Self::ANY)
    }

    /// Returns the human-readable name of the type.
    #[inline]
    #[allow(deprecated)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::NS => "NS",
            Self::MD => "MD",
            Self::MF => "MF",
            Self::CNAME => "CNAME",
            Self::SOA => "SOA",
            Self::MB => "MB",
            Self::MG => "MG",
            Self::MR => "MR",
            Self::NULL => "NULL",
            Self::WKS => "WKS",
            Self::PTR => "PTR",
            Self::HINFO => "HINFO",
            Self::MINFO => "MINFO",
            Self::MX => "MX",
            Self::TXT => "TXT",
            Self::AXFR => "AXFR",
            Self::MAILB => "MAILB",
            Self::MAILA => "MAILA",
            Self::ANY => "ANY",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A type value that can represent both standard types and unknown values.
///
/// The type registry is open-ended; a question with an unassigned type
/// still decodes, it just carries the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    /// A known, standard type.
    Known(RecordType),
    /// An unknown type value.
    Unknown(u16),
}

impl Type {
    /// Creates a type from a u16 value.
    #[inline]
    pub fn from_u16(value: u16) -> Self {
        RecordType::from_u16(value)
            .map(Self::Known)
            .unwrap_or(Self::Unknown(value))
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        match self {
            Self::Known(t) => t.to_u16(),
            Self::Unknown(v) => v,
        }
    }

    /// Returns the standard type if known.
    #[inline]
    pub const fn as_known(self) -> Option<RecordType> {
        match self {
            Self::Known(t) => Some(t),
            Self::Unknown(_) => None,
        }
    }
}

impl From<RecordType> for Type {
    fn from(t: RecordType) -> Self {
        Self::Known(t)
    }
}

impl From<u16> for Type {
    fn from(value: u16) -> Self {
        Self::from_u16(value)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(t) => write!(f, "{t}"),
            // RFC 3597 presentation for unknown types
            Self::Unknown(v) => write!(f, "TYPE{v}"),
        }
    }
}
