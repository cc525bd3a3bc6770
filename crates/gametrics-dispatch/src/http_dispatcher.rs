//! The [`Dispatcher`] trait and its `reqwest` implementation.
//!
//! One dispatch is one logical HTTP exchange:
//!
//! ```text
//! Pending ──(send)──→ Sent ──→ Succeeded   (status + body in Response)
//!                       │
//!                       └────→ Failed      (error in Response)
//! ```
//!
//! The dispatcher does not retry and, by default, does not time out on
//! its own: an unresponsive endpoint stalls the logical flow until the
//! caller drops the future. That preserves the SDK's long-standing
//! behavior; hosts that want a bound opt in through
//! [`HttpDispatcherBuilder::timeout`].

use std::future::Future;
use std::time::Duration;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method};

use crate::{DispatchError, Response};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// One outbound HTTP exchange, fully described.
///
/// The client layer composes these; a [`Dispatcher`] consumes them. The
/// split keeps endpoint/identity knowledge out of the transport and
/// lets tests capture exactly what would have hit the wire.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Fully composed URL, trailing slash included.
    pub url: String,
    /// Outgoing headers.
    pub headers: HeaderMap,
    /// Body text, if the method carries one.
    pub body: Option<String>,
}

impl Request {
    /// A bodyless GET.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// A POST carrying a JSON body. Sets `Content-Type: application/json`.
    pub fn post_json(url: impl Into<String>, body: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            body: Some(body.into()),
        }
    }

    /// Attaches an `Authorization` header.
    ///
    /// A value that is not a legal header (control or non-ASCII bytes in
    /// a misconfigured key) is skipped with a warning rather than
    /// failing the call; the service will reject the unauthenticated
    /// request and the caller sees that response.
    pub fn authorized(mut self, value: &str) -> Self {
        match HeaderValue::from_str(value) {
            Ok(v) => {
                self.headers.insert(AUTHORIZATION, v);
            }
            Err(_) => {
                tracing::warn!(
                    "authorization value is not a valid header; sending \
                     the request without it"
                );
            }
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Performs one asynchronous HTTP exchange.
///
/// Infallible at the signature: every outcome, including transport
/// failure, arrives as a [`Response`]. `Send + Sync + 'static` because
/// the client shares one dispatcher across concurrent in-flight calls.
///
/// The trait is the seam for tests: a mock dispatcher records the
/// [`Request`] and answers with a canned [`Response`], which exercises
/// the whole pipeline above it without a socket.
pub trait Dispatcher: Send + Sync + 'static {
    /// Sends the request and resolves exactly once with the outcome.
    fn dispatch(
        &self,
        request: Request,
    ) -> impl Future<Output = Response> + Send;
}

// ---------------------------------------------------------------------------
// HttpDispatcher
// ---------------------------------------------------------------------------

/// The production [`Dispatcher`], built on `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
}

impl HttpDispatcher {
    /// A dispatcher with default transport settings (no timeout).
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Starts configuring a dispatcher.
    pub fn builder() -> HttpDispatcherBuilder {
        HttpDispatcherBuilder::default()
    }
}

impl Default for HttpDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, request: Request) -> Response {
        let Request {
            method,
            url,
            headers,
            body,
        } = request;

        tracing::debug!(%method, %url, "dispatching");

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let http_response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(%url, error = %e, "transport failure");
                return Response::failed(DispatchError::Network(e));
            }
        };

        let status = http_response.status();
        match http_response.text().await {
            Ok(text) => {
                tracing::debug!(%url, %status, bytes = text.len(), "completed");
                Response::completed(status, text)
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "body read failed");
                Response::failed(DispatchError::Network(e))
            }
        }
    }
}

/// Configures and builds an [`HttpDispatcher`].
#[derive(Debug, Default)]
pub struct HttpDispatcherBuilder {
    timeout: Option<Duration>,
}

impl HttpDispatcherBuilder {
    /// Bounds each exchange to the given duration. Without this the
    /// dispatcher waits indefinitely, matching the historical default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the dispatcher.
    ///
    /// # Errors
    /// Returns [`DispatchError::Network`] if the underlying client
    /// cannot be constructed (e.g. no TLS backend available).
    pub fn build(self) -> Result<HttpDispatcher, DispatchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(HttpDispatcher {
            client: builder.build()?,
        })
    }
}

// =========================================================================
// Tests
// =========================================================================
