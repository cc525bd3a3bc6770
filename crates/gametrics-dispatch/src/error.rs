//! Error types for the dispatch layer.

use gametrics_protocol::ProtocolError;

/// Errors carried by a [`Response`](crate::Response).
///
/// None of these is ever returned as an `Err` from a dispatch call or
/// thrown across the async boundary; they ride the response so the
/// caller's completion path is the same for success and failure.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Transport-level failure: DNS, connect, TLS, or a broken stream.
    /// Not retried; the exchange is over.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The record was invalid before any network activity happened
    /// (e.g. an action with an empty type name).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The client-wide kill-switch is off. The call settled without any
    /// network activity.
    #[error("client is disabled")]
    Disabled,
}
