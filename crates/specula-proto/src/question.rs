//! DNS question section.
//!
//! The question section contains queries for information.
//! Each question has a domain name, query type, and query class.

use crate::class::{Class, RecordClass};
use crate::error::{Error, Result};
use crate::name::{Name, NameParser};
use crate::rtype::{RecordType, Type};
use serde::Serialize;
use std::fmt;

/// A DNS question.
///
/// Questions specify what information is being requested from the DNS.
/// A typical query has one question, though the protocol allows multiple.
///
/// # Wire Format
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// /                     QNAME                     /
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                     QTYPE                     |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                     QCLASS                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// The domain name being queried.
    pub qname: Name,

    /// The type of record being requested.
    pub qtype: Type,

    /// The class of the query (usually IN for Internet).
    pub qclass: Class,
}

impl Question {
    /// Returns the record type if known.
    #[inline]
    pub fn record_type(&self) -> Option<RecordType> {
        self.qtype.as_known()
    }

    /// Returns the record class if known.
    #[inline]
    pub fn record_class(&self) -> Option<RecordClass> {
        self.qclass.as_known()
    }

    /// Parses a question from wire format at the given offset.
    ///
    /// Returns the question and the number of bytes consumed
    /// (name length + 4 for the type and class fields).
    pub fn parse(data: &[u8], offset: usize) -> Result<(Self, usize)> {
        let parser = NameParser::new(data);
        let (qname, name_len) = parser.parse_name(offset)?;

        let fields_offset = offset + name_len;
        if fields_offset + 4 > data.len() {
            return Err(Error::truncated(fields_offset + 4, data.len()));
        }

        let qtype_value = u16::from_be_bytes([data[fields_offset], data[fields_offset + 1]]);
        let qclass_value = u16::from_be_bytes([data[fields_offset + 2], data[fields_offset + 3]]);

        Ok((
            Self {
                qname,
                qtype: Type::from_u16(qtype_value),
                qclass: Class::from_u16(qclass_value),
            },
            name_len + 4,
        ))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.qname, self.qclass, self.qtype)
    }
}

/// Cursor over the question section.
///
/// Decodes up to `count` consecutive questions, tracking the running
/// offset so the caller knows where the section ended.
#[derive(Debug)]
pub struct QuestionParser<'a> {
    /// The message data.
    data: &'a [u8],
    /// Current offset in the message.
    offset: usize,
    /// Number of questions remaining.
    remaining: u16,
}

impl<'a> QuestionParser<'a> {
    /// Creates a new question parser.
    #[inline]
    pub const fn new(data: &'a [u8], offset: usize, count: u16) -> Self {
        Self {
            data,
            offset,
            remaining: count,
        }
    }

    /// Returns the current offset.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of remaining questions.
    #[inline]
    pub const fn remaining(&self) -> u16 {
        self.remaining
    }

    /// Parses the next question.
    pub fn next(&mut self) -> Result<Option<Question>> {
        if self.remaining == 0 {
            return Ok(None);
        }

        let (question, consumed) = Question::parse(self.data, self.offset)?;
        self.offset += consumed;
        self.remaining -= 1;

        Ok(Some(question))
    }

    /// Collects all remaining questions into a vector.
    pub fn collect_all(&mut self) -> Result<Vec<Question>> {
        let mut questions = Vec::with_capacity(self.remaining as usize);
        while let Some(q) = self.next()? {
            questions.push(q);
        }
        Ok(questions)
    }
}
