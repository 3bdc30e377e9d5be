//! DNS response codes (RCODEs).
//!
//! Response codes indicate the status of a DNS operation.
//! Defined in RFC 1035 Section 4.1.1.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use std::fmt;

/// DNS response code.
///
/// The RCODE field in the DNS header indicates the status of the response.
/// See RFC 1035 Section 4.1.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize)]
#[repr(u8)]
pub enum ResponseCode {
    /// No error condition - RFC 1035
    NoError = 0,

    /// Format error - RFC 1035
    ///
    /// The name server was unable to interpret the query.
    FormErr = 1,

    /// Server failure - RFC 1035
    ///
    /// The name server was unable to process the query due to
    /// a problem with the name server.
    ServFail = 2,

    /// Name error - RFC 1035
    ///
    /// The domain name referenced in the query does not exist.
    /// Meaningful only for responses from an authoritative name server.
    NXDomain = 3,

    /// Not implemented - RFC 1035
    ///
    /// The name server does not support the requested kind of query.
    NotImp = 4,

    /// Query refused - RFC 1035
    ///
    /// The name server refuses to perform the specified operation
    /// for policy reasons.
    Refused = 5,
}

impl ResponseCode {
    /// Returns the numeric value of the response code.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Creates a response code from its numeric value.
    ///
    /// Returns `None` for unassigned values.
    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Returns true if this code indicates success.
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::NoError)
    }

    /// Returns true if this code indicates a nonexistent domain.
    #[inline]
    pub const fn is_nxdomain(self) -> bool {
        matches!(self, Self::NXDomain)
    }

    /// Returns the human-readable name of the response code.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoError => "NOERROR",
            Self::FormErr => "FORMERR",
            Self::ServFail => "SERVFAIL",
            Self::NXDomain => "NXDOMAIN",
            Self::NotImp => "NOTIMP",
            Self::Refused => "REFUSED",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for ResponseCode {
    fn default() -> Self {
        Self::NoError
    }
}

/// A response code value that can represent both assigned and unassigned
/// values.
///
/// The RCODE registry is open-ended; a header with an unassigned code
/// still decodes, it just carries the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rcode {
    /// A known, assigned response code.
    Known(ResponseCode),
    /// An unassigned response code value.
    Unknown(u8),
}

impl Rcode {
    /// Creates a response code from a raw 4-bit header value.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        ResponseCode::from_u8(value)
            .map(Self::Known)
            .unwrap_or(Self::Unknown(value))
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Known(c) => c.to_u8(),
            Self::Unknown(v) => v,
        }
    }

    /// Returns the assigned response code if known.
    #[inline]
    pub const fn as_known(self) -> Option<ResponseCode> {
        match self {
            Self::Known(c) => Some(c),
            Self::Unknown(_) => None,
        }
    }

    /// Returns true if this is the NOERROR code.
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Known(ResponseCode::NoError))
    }
}

impl From<ResponseCode> for Rcode {
    fn from(c: ResponseCode) -> Self {
        Self::Known(c)
    }
}

impl fmt::Display for Rcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(c) => write!(f, "{c}"),
            Self::Unknown(v) => write!(f, "RCODE{v}"),
        }
    }
}

impl Default for Rcode {
    fn default() -> Self {
        Self::Known(ResponseCode::NoError)
    }
}
