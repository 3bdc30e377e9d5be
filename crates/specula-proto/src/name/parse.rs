//! DNS name parsing from wire format.
//!
//! Decodes a domain name as a label sequence: length-prefixed labels
//! terminated by a zero-length root label. Every read is bounds-checked;
//! a truncated name yields an error instead of reading past the buffer.
//!
//! Compression pointers (RFC 1035 Section 4.1.4) are not followed. A
//! label byte with the pointer marker (top two bits set) surfaces as
//! [`Error::UnsupportedCompression`] so callers can tell an unsupported
//! wire feature apart from plain bad data. Label lengths are otherwise
//! taken literally and not validated against the RFC's 63-byte cap.

use super::Name;
use crate::error::{Error, Result};
use smallvec::SmallVec;

/// Parser for reading domain names from DNS wire format.
///
/// Holds the full message buffer and decodes names at arbitrary offsets
/// within it, reporting how many bytes each name occupied.
#[derive(Debug, Clone)]
pub struct NameParser<'a> {
    /// The complete message buffer.
    message: &'a [u8],
}

impl<'a> NameParser<'a> {
    /// Creates a new name parser over the given message buffer.
    #[inline]
    pub const fn new(message: &'a [u8]) -> Self {
        Self { message }
    }

    /// Parses a domain name starting at the given offset.
    ///
    /// Returns the parsed name and the number of bytes consumed,
    /// including the terminating root label. The label bytes are copied
    /// out of the buffer into the returned [`Name`].
    pub fn parse_name(&self, offset: usize) -> Result<(Name, usize)> {
        let mut wire = SmallVec::<[u8; 64]>::new();
        let mut label_count = 0u16;
        let mut pos = offset;

        loop {
            let Some(&len_byte) = self.message.get(pos) else {
                return Err(Error::truncated(pos + 1, self.message.len()));
            };

            // Compression pointer marker (top 2 bits = 11): not followed
            if len_byte & 0xC0 == 0xC0 {
                return Err(Error::unsupported_compression(pos));
            }

            let len = len_byte as usize;

            // Root label - end of name; consumed but not emitted
            if len == 0 {
                pos += 1;
                break;
            }

            let start = pos + 1;
            let end = start + len;
            if end > self.message.len() {
                return Err(Error::truncated(end, self.message.len()));
            }

            // Copy label to output
            wire.push(len_byte);
            wire.extend_from_slice(&self.message[start..end]);
            label_count += 1;

            pos = end;
        }

        Ok((Name { wire, label_count }, pos - offset))
    }

    /// Parses a name and returns only the name (ignoring consumed bytes).
    #[inline]
    pub fn parse(&self, offset: usize) -> Result<Name> {
        self.parse_name(offset).map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_name() {
        // www.example.com in wire format
        let wire = [
            3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm',
            0,
        ];

        let parser = NameParser::new(&wire);
        let (name, consumed) = parser.parse_name(0).unwrap();

        assert_eq!(name.to_string(), "www.example.com.");
        assert_eq!(consumed, wire.len());
    }

    #[test]
    fn test_consumed_includes_terminator() {
        // example.com: 1+7 + 1+3 + 1 = 13 bytes
        let wire = [
            7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, 0xDE, 0xAD,
        ];

        let parser = NameParser::new(&wire);
        let (name, consumed) = parser.parse_name(0).unwrap();

        assert_eq!(consumed, 13);
        assert_eq!(name.wire_len(), 13);
        assert_eq!(name.label_count(), 2);
    }

    #[test]
    fn test_parse_at_offset() {
        let wire = [0xFF, 0xFF, 3, b'c', b'o', b'm', 0];
        let parser = NameParser::new(&wire);
        let (name, consumed) = parser.parse_name(2).unwrap();

        assert_eq!(name.to_string(), "com.");
        assert_eq!(consumed, 5);
    }

    #[test]
    fn test_root_name() {
        let wire = [0];
        let parser = NameParser::new(&wire);
        let (name, consumed) = parser.parse_name(0).unwrap();

        assert!(name.is_root());
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_missing_length_byte() {
        // Name runs off the end before any terminator
        let wire = [3, b'c', b'o', b'm'];
        let parser = NameParser::new(&wire);
        let result = parser.parse_name(0);

        assert_eq!(result, Err(Error::truncated(5, 4)));
    }

    #[test]
    fn test_truncated_label_payload() {
        // Declared length 7, only 3 bytes present
        let wire = [7, b'e', b'x', b'a'];
        let parser = NameParser::new(&wire);
        let result = parser.parse_name(0);

        assert_eq!(result, Err(Error::truncated(8, 4)));
    }

    #[test]
    fn test_empty_buffer() {
        let parser = NameParser::new(&[]);
        let result = parser.parse_name(0);

        assert_eq!(result, Err(Error::truncated(1, 0)));
    }

    #[test]
    fn test_compression_pointer_rejected() {
        // 0xC0 0x0C is a pointer to offset 12
        let wire = [0xC0, 0x0C];
        let parser = NameParser::new(&wire);
        let result = parser.parse_name(0);

        assert_eq!(result, Err(Error::UnsupportedCompression { offset: 0 }));

        // Pointer after a literal label is rejected at its own offset
        let wire = [3, b'w', b'w', b'w', 0xC0, 0x00];
        let parser = NameParser::new(&wire);
        let result = parser.parse_name(0);

        assert_eq!(result, Err(Error::UnsupportedCompression { offset: 4 }));
    }

    #[test]
    fn test_oversized_length_is_literal() {
        // 0x41 (65) exceeds the RFC's 63-byte label cap but is not a
        // pointer marker; it is taken as a literal length.
        let mut wire = vec![0x41];
        wire.extend_from_slice(&[b'x'; 65]);
        wire.push(0);

        let parser = NameParser::new(&wire);
        let (name, consumed) = parser.parse_name(0).unwrap();

        assert_eq!(name.label_count(), 1);
        assert_eq!(name.label(0).unwrap().len(), 65);
        assert_eq!(consumed, 67);
    }
}
