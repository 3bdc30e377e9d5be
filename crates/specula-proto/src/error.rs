//! DNS decode error types.
//!
//! The decoder has exactly two failure modes: the input ended before a
//! required read, or a name used compression pointers, which this decoder
//! does not follow. Both are terminal for the decode call that produced
//! them; there are no partial results.

use thiserror::Error;

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// DNS decode errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Buffer ended before a required field could be fully read.
    ///
    /// Raised for a short header, a missing label length byte, a label
    /// payload running past the end of the buffer, or a question with
    /// fewer than 4 bytes after its name.
    #[error("truncated input: expected at least {expected} bytes, got {actual}")]
    TruncatedInput {
        /// Minimum buffer length the read required.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// A label length byte carried the RFC 1035 compression-pointer marker
    /// (top two bits set). Pointer back-references are not followed.
    #[error("compression pointer at offset {offset} is not supported")]
    UnsupportedCompression {
        /// Byte offset of the pointer marker.
        offset: usize,
    },
}

impl Error {
    /// Creates a new `TruncatedInput` error.
    #[inline]
    pub fn truncated(expected: usize, actual: usize) -> Self {
        Self::TruncatedInput { expected, actual }
    }

    /// Creates a new `UnsupportedCompression` error.
    #[inline]
    pub fn unsupported_compression(offset: usize) -> Self {
        Self::UnsupportedCompression { offset }
    }

    /// Returns true if this error indicates malformed or truncated data
    /// (drop the datagram).
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }

    /// Returns true if this error indicates a wire feature the decoder
    /// does not implement, as opposed to bad data.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedCompression { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::truncated(12, 8);
        assert_eq!(
            err.to_string(),
            "truncated input: expected at least 12 bytes, got 8"
        );

        let err = Error::unsupported_compression(17);
        assert_eq!(
            err.to_string(),
            "compression pointer at offset 17 is not supported"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::truncated(12, 0).is_malformed());
        assert!(!Error::truncated(12, 0).is_unsupported());
        assert!(Error::unsupported_compression(0).is_unsupported());
        assert!(!Error::unsupported_compression(0).is_malformed());
    }
}
