//! Best-effort decoding of forwarded datagrams.
//!
//! The relay never looks inside the datagrams it forwards; this module
//! decodes them purely so operators can see what is passing through.
//! Decoding runs on its own task, after the forward task has already
//! been handed the bytes, and its outcome goes nowhere but the log.

use bytes::Bytes;
use specula_proto::Message;
use tracing::{debug, trace};

/// Spawns a diagnostic decode of one datagram payload.
pub fn spawn(data: Bytes) {
    tokio::spawn(async move {
        inspect(&data);
    });
}

/// Decodes a datagram payload and logs the result.
///
/// A decode failure is an observation about the datagram, not a fault:
/// it is logged at debug and otherwise ignored. Malformed input is never
/// retried and never affects the forwarding path.
pub fn inspect(data: &[u8]) {
    match Message::parse(data) {
        Ok(message) => {
            debug!(id = message.id(), summary = %message, "decoded datagram");
            if let Ok(json) = serde_json::to_string(&message) {
                trace!(%json, "decoded datagram detail");
            }
        }
        Err(e) => {
            debug!(error = %e, len = data.len(), "undecodable datagram");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: &[u8] = &[
        0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x65,
        0x78, 0x61, 0x6D, 0x70, 0x6C, 0x65, 0x03, 0x63, 0x6F, 0x6D, 0x00, 0x00, 0x01, 0x00, 0x01,
    ];

    #[test]
    fn test_inspect_never_panics() {
        // Valid, empty, truncated and garbage payloads are all fine
        inspect(QUERY);
        inspect(&[]);
        inspect(&QUERY[..7]);
        inspect(&[0xFF; 64]);
    }

    #[test]
    fn test_decoded_message_serializes() {
        let message = Message::parse(QUERY).unwrap();
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"example.com.\""));
    }
}
