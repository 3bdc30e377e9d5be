//! DNS operation codes (OpCodes).
//!
//! OpCodes specify the kind of query in a DNS message header.
//! Defined in RFC 1035 Section 4.1.1.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use std::fmt;

/// DNS operation code.
///
/// The OpCode field in the DNS header specifies the kind of query.
/// See RFC 1035 Section 4.1.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize)]
#[repr(u8)]
pub enum OpCode {
    /// Standard query (QUERY) - RFC 1035
    Query = 0,

    /// Inverse query (IQUERY) - RFC 1035 (obsoleted by RFC 3425)
    ///
    /// An inverse query specifies a resource record and asks for the
    /// corresponding name. This is rarely used and officially obsolete.
    #[deprecated(note = "Obsoleted by RFC 3425")]
    InverseQuery = 1,

    /// Server status request (STATUS) - RFC 1035
    Status = 2,
}

impl OpCode {
    /// Returns the numeric value of the opcode.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Creates an opcode from its numeric value.
    ///
    /// Returns `None` for reserved or unassigned values.
    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Returns the human-readable name of the opcode.
    #[inline]
    #[allow(deprecated)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::InverseQuery => "IQUERY",
            Self::Status => "STATUS",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for OpCode {
    fn default() -> Self {
        Self::Query
    }
}

/// An opcode value that can represent both assigned and unassigned values.
///
/// The opcode registry is open-ended; a header with an unassigned opcode
/// still decodes, it just carries the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Op {
    /// A known, assigned opcode.
    Known(OpCode),
    /// An unassigned opcode value.
    Unknown(u8),
}

impl Op {
    /// Creates an opcode from a raw 4-bit header value.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        OpCode::from_u8(value)
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

    /// Returns the assigned opcode if known.
    #[inline]
    pub const fn as_known(self) -> Option<OpCode> {
        match self {
            Self::Known(c) => Some(c),
            Self::Unknown(_) => None,
        }
    }
}

impl From<OpCode> for Op {
    fn from(c: OpCode) -> Self {
        Self::Known(c)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(c) => write!(f, "{c}"),
            Self::Unknown(v) => write!(f, "OPCODE{v}"),
        }
    }
}

impl Default for Op {
    fn default() -> Self {
        Self::Known(OpCode::Query)
    }
}
