//! # Specula DNS Protocol Library
//!
//! This crate decodes raw DNS messages (RFC 1035 wire format) into owned,
//! structured values. It exists for inspection: the specula relay forwards
//! datagrams verbatim and decodes them on the side for diagnostics, so the
//! decoder has to stay safe on arbitrary, potentially truncated or hostile
//! network input.
//!
//! ## Guarantees
//!
//! - **Bounds-checked** — every buffer access is checked; malformed input
//!   yields [`Error::TruncatedInput`], never an out-of-bounds read.
//! - **Open code spaces** — unassigned opcode/rcode/type/class values decode
//!   to `Unknown(raw)` variants instead of failing.
//! - **Owned output** — label and record bytes are copied out of the input
//!   buffer; a decoded [`Message`] carries no references into the datagram.
//!
//! Name compression pointers (RFC 1035 Section 4.1.4) are not followed; a
//! pointer marker surfaces as [`Error::UnsupportedCompression`]. The answer,
//! authority and additional sections are likewise left undecoded — see
//! [`Message::parse`] for the extension point.
//!
//! ## Example
//!
//! ```rust
//! use specula_proto::Message;
//!
//! let datagram: &[u8] = &[
//!     0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//!     7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0,
//!     0x00, 0x01, 0x00, 0x01,
//! ];
//! let message = Message::parse(datagram).unwrap();
//! assert_eq!(message.id(), 0x1234);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod class;
pub mod error;
pub mod header;
pub mod message;
pub mod name;
pub mod opcode;
pub mod question;
pub mod rcode;
pub mod record;
pub mod rtype;

// Re-exports for convenience
pub use class::{Class, RecordClass};
pub use error::{Error, Result};
pub use header::{Header, HeaderFlags, HEADER_SIZE};
pub use message::Message;
pub use name::{Label, Name, NameParser};
pub use opcode::{Op, OpCode};
pub use question::{Question, QuestionParser};
pub use rcode::{Rcode, ResponseCode};
pub use record::ResourceRecord;
pub use rtype::{RecordType, Type};

/// DNS port (53)
pub const DNS_PORT: u16 = 53;

/// Largest datagram payload a UDP socket can hand us (64 KiB minus nothing;
/// receive buffers are sized to this so no inbound message is ever cut short
/// by the relay itself).
pub const MAX_DATAGRAM_SIZE: usize = 65535;
