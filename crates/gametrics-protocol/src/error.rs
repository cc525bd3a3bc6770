//! Error types for the protocol layer.

/// Errors that can occur while building or (de)serializing wire records.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a value into JSON bytes).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed JSON, missing fields, or the
    /// wrong shape for the expected type.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The action is invalid before it ever reaches the wire, e.g. an
    /// empty type name. Rejected prior to any network activity.
    #[error("invalid action: {0}")]
    InvalidAction(String),
}
