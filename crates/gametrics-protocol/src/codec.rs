//! Codec trait and JSON implementation.
//!
//! A codec converts between Rust values and raw bytes. The rest of the
//! SDK never calls serde_json directly for wire traffic; it goes through
//! the [`Codec`] seam so the encoding can be swapped (or mocked) without
//! touching the dispatch or client layers.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::ProtocolError;

/// Encodes values to bytes and decodes bytes back.
///
/// `Send + Sync + 'static` because the codec is shared by concurrent
/// in-flight dispatches running on any runtime thread.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed or
    /// don't match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that speaks JSON via `serde_json`.
///
/// Object keys serialize in insertion order (serde_json's
/// `preserve_order` feature), so a parameter map round-trips without
/// reshuffling and the bodies that leave the SDK are stable enough to
/// assert against in tests and server logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Parses a response body into a generic JSON value.
    ///
    /// Empty (or whitespace-only) input is not a fault: the service
    /// answers some calls with an empty body, and the contract is that
    /// this means "no data", i.e. [`Value::Null`]. Structurally invalid
    /// non-empty input is a [`ProtocolError::Decode`].
    pub fn decode_text(&self, text: &str) -> Result<Value, ProtocolError> {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

// =========================================================================
// Tests
// =========================================================================
