//! DNS resource records.
//!
//! A resource record binds a name to typed data with a cache lifetime.
//! The decoder does not yet populate the answer, authority or additional
//! sections — this type reserves their shape so record decoding can be
//! added without changing [`crate::Message`]'s contract.

use crate::class::Class;
use crate::rtype::Type;
use serde::Serialize;
use std::fmt;

/// A DNS resource record.
///
/// Record names on the wire are usually compressed (RFC 1035 Section
/// 4.1.4), so the name is carried as raw wire bytes rather than a decoded
/// [`crate::Name`]. RDATA is likewise raw: its interpretation depends on
/// the record type and class.
///
/// # Wire Format
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// /                      NAME                     /
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      TYPE                     |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                     CLASS                     |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      TTL                      |
/// |                                               |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                   RDLENGTH                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// /                     RDATA                     /
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    /// The record's name, as raw (possibly compressed) wire bytes.
    name: Vec<u8>,

    /// The record type.
    rtype: Type,

    /// The record class.
    rclass: Class,

    /// Cache lifetime in seconds. Zero means do not cache.
    ttl: u32,

    /// Raw record data; format determined by type and class.
    rdata: Vec<u8>,
}

impl ResourceRecord {
    /// Creates a new resource record.
    pub fn new(name: Vec<u8>, rtype: Type, rclass: Class, ttl: u32, rdata: Vec<u8>) -> Self {
        Self {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
        }
    }

    /// Returns the raw name bytes.
    #[inline]
    pub fn name_wire(&self) -> &[u8] {
        &self.name
    }

    /// Returns the record type.
    #[inline]
    pub fn rtype(&self) -> Type {
        self.rtype
    }

    /// Returns the record class.
    #[inline]
    pub fn rclass(&self) -> Class {
        self.rclass
    }

    /// Returns the cache lifetime in seconds.
    #[inline]
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the raw record data.
    #[inline]
    pub fn rdata(&self) -> &[u8] {
        &self.rdata
    }

    /// Returns the length of the record data (the wire RDLENGTH field).
    #[inline]
    pub fn rdlength(&self) -> u16 {
        self.rdata.len() as u16
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} TTL {} RDLENGTH {}",
            self.rclass,
            self.rtype,
            self.ttl,
            self.rdlength()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::RecordClass;
    use crate::rtype::RecordType;

    #[test]
    fn test_record_accessors() {
        let record = ResourceRecord::new(
            vec![3, b'c', b'o', b'm', 0],
            Type::Known(RecordType::A),
            Class::Known(RecordClass::IN),
            300,
            vec![93, 184, 216, 34],
        );

        assert_eq!(record.name_wire(), &[3, b'c', b'o', b'm', 0]);
        assert_eq!(record.rtype(), Type::Known(RecordType::A));
        assert_eq!(record.rclass(), Class::Known(RecordClass::IN));
        assert_eq!(record.ttl(), 300);
        assert_eq!(record.rdata(), &[93, 184, 216, 34]);
        assert_eq!(record.rdlength(), 4);
    }
}
