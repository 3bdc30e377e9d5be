//! DNS message representation.
//!
//! A DNS message consists of a header, a question section, and three
//! resource record sections (answer, authority, additional).

use crate::error::Result;
use crate::header::{Header, HEADER_SIZE};
use crate::opcode::Op;
use crate::question::{Question, QuestionParser};
use crate::rcode::Rcode;
use crate::record::ResourceRecord;
use serde::Serialize;
use std::fmt;

/// A complete DNS message.
///
/// Decoding covers the header and the question section. The answer,
/// authority and additional sections are carried on the wire per their
/// header counts but are not decoded: the corresponding vectors stay
/// empty while the header counts report what the wire claimed. Record
/// decoding can be added here later (a record cursor mirroring
/// [`QuestionParser`], plus compressed-name support) without changing
/// the decode contract for existing callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// The message header.
    header: Header,
    /// The question section.
    questions: Vec<Question>,
    /// The answer section (not decoded).
    answers: Vec<ResourceRecord>,
    /// The authority section (not decoded).
    authority: Vec<ResourceRecord>,
    /// The additional section (not decoded).
    additional: Vec<ResourceRecord>,
}

impl Message {
    /// Parses a DNS message from wire format.
    ///
    /// Decodes the 12-byte header, then exactly `qd_count` questions.
    /// Pure and total over the input: no partial messages — any decode
    /// failure aborts the whole call — and no state carried between
    /// calls. The returned message owns all of its bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let header = Header::parse(data)?;

        let mut q_parser = QuestionParser::new(data, HEADER_SIZE, header.qd_count);
        let questions = q_parser.collect_all()?;

        Ok(Self {
            header,
            questions,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        })
    }

    /// Returns the message header.
    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the message ID.
    #[inline]
    pub fn id(&self) -> u16 {
        self.header.id
    }

    /// Returns the opcode.
    #[inline]
    pub fn opcode(&self) -> Op {
        self.header.opcode
    }

    /// Returns the response code.
    #[inline]
    pub fn rcode(&self) -> Rcode {
        self.header.rcode
    }

    /// Returns true if this is a query.
    #[inline]
    pub fn is_query(&self) -> bool {
        self.header.is_query()
    }

    /// Returns true if this is a response.
    #[inline]
    pub fn is_response(&self) -> bool {
        self.header.is_response()
    }

    /// Returns true if recursion was requested.
    #[inline]
    pub fn recursion_desired(&self) -> bool {
        self.header.recursion_desired()
    }

    /// Returns the question section.
    #[inline]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the first question if present.
    #[inline]
    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns the answer section (empty; see [`Message::parse`]).
    #[inline]
    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answers
    }

    /// Returns the authority section (empty; see [`Message::parse`]).
    #[inline]
    pub fn authority(&self) -> &[ResourceRecord] {
        &self.authority
    }

    /// Returns the additional section (empty; see [`Message::parse`]).
    #[inline]
    pub fn additional(&self) -> &[ResourceRecord] {
        &self.additional
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for q in &self.questions {
            write!(f, " ;{q}")?;
        }
        Ok(())
    }
}
