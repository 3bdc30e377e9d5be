//! DNS label handling.
//!
//! A label is a single component of a domain name.

use std::borrow::Cow;
use std::fmt;

/// A single DNS label (component of a domain name).
///
/// Labels are the individual parts of a domain name separated by dots.
/// For example, in `www.example.com`, the labels are `www`, `example` and
/// `com`. Label bytes are raw octets; DNS does not require them to be
/// ASCII, so display escapes anything unprintable.
#[derive(Clone)]
pub struct Label<'a> {
    /// The raw bytes of the label (without length prefix).
    bytes: Cow<'a, [u8]>,
}

impl<'a> Label<'a> {
    /// Creates a label from a byte slice.
    #[inline]
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes: Cow::Borrowed(bytes),
        }
    }

    /// Returns the raw bytes of the label.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the length of the label in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the label is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the label as a string, if it's valid UTF-8.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Returns the label as a string, with invalid UTF-8 replaced.
    #[inline]
    pub fn as_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Case-insensitive comparison with another label.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, other: &Label) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.bytes
            .iter()
            .zip(other.bytes.iter())
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl<'a> fmt::Display for Label<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Handle special characters that need escaping
        for &byte in self.bytes.iter() {
            if byte == b'.' || byte == b'\\' {
                write!(f, "\\{}", byte as char)?;
            } else if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                // Escape non-printable characters as \DDD
                write!(f, "\\{:03}", byte)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Debug for Label<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label(\"{}\")", self)
    }
}

impl<'a> PartialEq for Label<'a> {
    /// Case-insensitive equality per DNS semantics.
    fn eq(&self, other: &Self) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl<'a> Eq for Label<'a> {}

/// Iterator over labels in a domain name.
///
/// Walks the length-prefixed labels of an uncompressed name. The
/// terminating root label is not yielded.
pub struct LabelIter<'a> {
    /// The label bytes (length-prefixed labels, no terminator).
    wire: &'a [u8],
    /// Current position in the wire data.
    pos: usize,
}

impl<'a> LabelIter<'a> {
    /// Creates a new label iterator from label wire bytes.
    #[inline]
    pub fn new(wire: &'a [u8]) -> Self {
        Self { wire, pos: 0 }
    }
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = Label<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.wire.len() {
            return None;
        }

        let len = self.wire[self.pos] as usize;
        let start = self.pos + 1;
        let end = (start + len).min(self.wire.len());

        let label = Label::from_bytes(&self.wire[start..end]);
        self.pos = end;
        Some(label)
    }
}

impl<'a> std::iter::FusedIterator for LabelIter<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_basics() {
        let label = Label::from_bytes(b"example");
        assert_eq!(label.len(), 7);
        assert!(!label.is_empty());
        assert_eq!(label.as_str(), Some("example"));
        assert_eq!(label.to_string(), "example");
    }

    #[test]
    fn test_case_insensitive_comparison() {
        let lower = Label::from_bytes(b"example");
        let upper = Label::from_bytes(b"EXAMPLE");
        let mixed = Label::from_bytes(b"ExAmPlE");

        assert!(lower.eq_ignore_ascii_case(&upper));
        assert!(lower.eq_ignore_ascii_case(&mixed));
        assert_eq!(lower, upper);
        assert_ne!(lower, Label::from_bytes(b"other"));
    }

    #[test]
    fn test_display_escaping() {
        let label = Label::from_bytes(b"a.b");
        assert_eq!(label.to_string(), "a\\.b");

        let label = Label::from_bytes(&[0x01, b'x']);
        assert_eq!(label.to_string(), "\\001x");
    }

    #[test]
    fn test_label_iteration() {
        let wire = [7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm'];
        let labels: Vec<String> = LabelIter::new(&wire).map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["example", "com"]);
    }

    #[test]
    fn test_empty_iteration() {
        assert_eq!(LabelIter::new(&[]).count(), 0);
    }
}
