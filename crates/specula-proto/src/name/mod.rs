//! DNS domain name representation.
//!
//! A domain name on the wire is a sequence of length-prefixed labels
//! terminated by a zero-length root label. [`Name`] owns an uncompressed
//! copy of those label bytes — decoded names never borrow from the
//! datagram they came from, so a decode's output is free of lifetime
//! coupling to the network buffer.
//!
//! Parsing from wire format lives in [`NameParser`].

mod label;
mod parse;

pub use label::{Label, LabelIter};
pub use parse::NameParser;

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// A DNS domain name.
///
/// Stores the name's labels in wire form (each label prefixed by its
/// length byte) without the terminating root label. Most names fit the
/// inline storage and never touch the heap.
///
/// # Comparison Semantics
///
/// DNS names compare case-insensitively per RFC 1035; equality here
/// compares label by label with ASCII case folding.
#[derive(Clone)]
pub struct Name {
    /// Length-prefixed label bytes, uncompressed, no terminator.
    wire: SmallVec<[u8; 64]>,
    /// Number of labels (excluding the implicit root).
    label_count: u16,
}

impl Name {
    /// Creates the root domain name (no labels).
    #[inline]
    pub const fn root() -> Self {
        Self {
            wire: SmallVec::new_const(),
            label_count: 0,
        }
    }

    /// Returns the stored label bytes (length-prefixed, no terminator).
    #[inline]
    pub fn as_wire(&self) -> &[u8] {
        self.wire.as_slice()
    }

    /// Returns the wire-format length of this name, including the
    /// terminating root label. This equals the number of bytes the name
    /// consumed when it was decoded.
    #[inline]
    pub fn wire_len(&self) -> usize {
        self.wire.len() + 1
    }

    /// Returns the number of labels in the name (excluding root).
    #[inline]
    pub const fn label_count(&self) -> usize {
        self.label_count as usize
    }

    /// Returns true if this is the root domain.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.wire.is_empty()
    }

    /// Returns an iterator over the labels in the name.
    #[inline]
    pub fn labels(&self) -> LabelIter<'_> {
        LabelIter::new(self.as_wire())
    }

    /// Returns the label at the given index (0 = leftmost label).
    pub fn label(&self, index: usize) -> Option<Label<'_>> {
        self.labels().nth(index)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, ".");
        }
        for label in self.labels() {
            write!(f, "{label}.")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name(\"{}\")", self)
    }
}

impl PartialEq for Name {
    /// Case-insensitive comparison per DNS semantics.
    fn eq(&self, other: &Self) -> bool {
        if self.label_count != other.label_count {
            return false;
        }

        self.labels()
            .zip(other.labels())
            .all(|(a, b)| a.eq_ignore_ascii_case(&b))
    }
}

impl Eq for Name {}

impl Default for Name {
    fn default() -> Self {
        Self::root()
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
