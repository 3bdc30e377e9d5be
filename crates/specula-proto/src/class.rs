//! DNS record classes.
//!
//! The class field identifies the protocol family of the resource record.
//! While multiple classes were envisioned, IN (Internet) is used almost
//! exclusively.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use std::fmt;

/// DNS record class.
///
/// The CLASS field in DNS questions and resource records identifies the
/// protocol family. See RFC 1035 Section 3.2.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize)]
#[repr(u16)]
pub enum RecordClass {
    /// Internet - RFC 1035
    ///
    /// The Internet class is used for nearly all DNS queries and records.
    IN = 1,

    /// CSNET - RFC 1035 (obsolete)
    ///
    /// Used for the CSNET network, which no longer exists.
    #[deprecated(note = "Obsolete - CSNET no longer exists")]
    CS = 2,

    /// CHAOS - RFC 1035
    ///
    /// Used for the CHAOS network. Also used by some servers for
    /// special queries like `version.bind` and `hostname.bind`.
    CH = 3,

    /// Hesiod - RFC 1035
    ///
    /// Used for the Hesiod naming system from MIT Project Athena.
    HS = 4,
}

impl RecordClass {
    /// Returns the numeric value of the class.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Creates a class from its numeric value.
    #[inline]
    pub fn from_u16(value: u16) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Returns true if this is the Internet class.
    #[inline]
    pub const fn is_internet(self) -> bool {
        matches!(self, Self::IN)
    }

    /// Returns the human-readable name of the class.
    #[inline]
    #[allow(deprecated)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IN => "IN",
            Self::CS => "CS",
            Self::CH => "CH",
            Self::HS => "HS",
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for RecordClass {
    fn default() -> Self {
        Self::IN
    }
}

/// A class value that can represent both standard classes and unknown values.
///
/// The class registry is open-ended; a question with an unassigned class
/// still decodes, it just carries the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Class {
    /// A known, standard class.
    Known(RecordClass),
    /// An unknown class value.
    Unknown(u16),
}

impl Class {
    /// Creates a class from a u16 value.
    #[inline]
    pub fn from_u16(value: u16) -> Self {
        RecordClass::from_u16(value)
            .map(Self::Known)
            .unwrap_or(Self::Unknown(value))
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        match self {
            Self::Known(c) => c.to_u16(),
            Self::Unknown(v) => v,
        }
    }

    /// Returns the standard class if known.
    #[inline]
    pub const fn as_known(self) -> Option<RecordClass> {
        match self {
            Self::Known(c) => Some(c),
            Self::Unknown(_) => None,
        }
    }

    /// Returns true if this is the Internet class.
    #[inline]
    pub const fn is_internet(self) -> bool {
        matches!(self, Self::Known(RecordClass::IN))
    }
}

impl From<RecordClass> for Class {
    fn from(c: RecordClass) -> Self {
        Self::Known(c)
    }
}

impl From<u16> for Class {
    fn from(value: u16) -> Self {
        Self::from_u16(value)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(c) => write!(f, "{c}"),
            Self::Unknown(v) => write!(f, "CLASS{v}"),
        }
    }
}

impl Default for Class {
    fn default() -> Self {
        Self::Known(RecordClass::IN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_values() {
        assert_eq!(RecordClass::IN.to_u16(), 1);
        assert_eq!(RecordClass::CH.to_u16(), 3);
        assert_eq!(RecordClass::HS.to_u16(), 4);
    }

    #[test]
    fn test_class_from_u16() {
        assert_eq!(RecordClass::from_u16(1), Some(RecordClass::IN));
        assert_eq!(RecordClass::from_u16(4), Some(RecordClass::HS));
        assert_eq!(RecordClass::from_u16(255), None);
    }

    #[test]
    fn test_class_predicates() {
        assert!(RecordClass::IN.is_internet());
        assert!(!RecordClass::CH.is_internet());
    }

    #[test]
    fn test_unknown_passthrough() {
        let c = Class::from_u16(1);
        assert!(c.is_internet());
        assert_eq!(c.as_known(), Some(RecordClass::IN));

        let c = Class::from_u16(12345);
        assert!(!c.is_internet());
        assert_eq!(c.as_known(), None);
        assert_eq!(c.to_string(), "CLASS12345");
    }
}
