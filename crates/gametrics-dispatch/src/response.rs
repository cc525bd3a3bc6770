//! The [`Response`] model: what every dispatch settles with.

use gametrics_protocol::JsonCodec;
use http::StatusCode;
use serde_json::{Map, Value};

use crate::DispatchError;

/// The outcome of one completed exchange.
///
/// Built once when the exchange finishes and immutable afterwards. It
/// always carries the raw body text; the parsed JSON view is best
/// effort:
///
/// - an empty body parses to JSON `null` ("no data", not a fault),
/// - a malformed non-empty body is logged and recovered as "no parsed
///   data" while the raw text stays readable,
/// - a transport failure carries the error and nothing else.
#[derive(Debug)]
pub struct Response {
    status: Option<StatusCode>,
    raw_text: String,
    parsed: Option<Value>,
    error: Option<DispatchError>,
}

impl Response {
    /// A response for an exchange that reached the server.
    ///
    /// Parses the body eagerly under the lenient policy described above;
    /// the HTTP status is recorded as-is (a 4xx/5xx still has a
    /// readable body, it just isn't a confirmed delivery).
    pub fn completed(status: StatusCode, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let parsed = match JsonCodec.decode_text(&raw_text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "unparseable response body");
                None
            }
        };
        Self {
            status: Some(status),
            raw_text,
            parsed,
            error: None,
        }
    }

    /// A response for an exchange that never completed, or for a call
    /// that settled locally (invalid action, disabled client).
    pub fn failed(error: DispatchError) -> Self {
        Self {
            status: None,
            raw_text: String::new(),
            parsed: None,
            error: Some(error),
        }
    }

    /// A successful local settlement with no exchange behind it, e.g.
    /// flushing an empty queue.
    pub fn empty_success() -> Self {
        Self {
            status: None,
            raw_text: String::new(),
            parsed: Some(Value::Null),
            error: None,
        }
    }

    /// The raw body text, empty when nothing was received.
    pub fn text(&self) -> &str {
        &self.raw_text
    }

    /// The parsed body as a JSON object, when it is one.
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.parsed.as_ref()?.as_object()
    }

    /// The value under `key` in the parsed object.
    ///
    /// Never faults: answers `None` both when there is no parsed data
    /// and when the key is absent. Use [`Response::has_data`] to tell
    /// the two apart.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.data()?.get(key)
    }

    /// True when the body parsed to something other than `null`.
    pub fn has_data(&self) -> bool {
        self.parsed.as_ref().is_some_and(|v| !v.is_null())
    }

    /// The whole parsed body, whatever its JSON shape.
    pub fn parsed(&self) -> Option<&Value> {
        self.parsed.as_ref()
    }

    /// The HTTP status, when the exchange reached the server.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// The error, when the exchange (or the call before it) failed.
    pub fn error(&self) -> Option<&DispatchError> {
        self.error.as_ref()
    }

    /// True for a confirmed delivery: no error, and either a 2xx status
    /// or a local settlement that had nothing to deliver.
    ///
    /// This is what the client's queue-clearing logic keys on.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
            && self.status.is_none_or(|s| s.is_success())
    }
}

// =========================================================================
// Tests
// =========================================================================
