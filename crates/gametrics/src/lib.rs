//! # Gametrics
//!
//! Client SDK that relays gameplay telemetry ("actions") to the
//! Gametrics analytics service and fetches per-player statistics,
//! retention advice, and recommendations back.
//!
//! The pipeline, leaf to caller:
//!
//! ```text
//! caller → Action (identity snapshot) → ActionQueue → Dispatcher (HTTP)
//!        → JSON codec → Response → caller
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use gametrics::prelude::*;
//! use serde_json::json;
//!
//! # async fn run() {
//! let client = GametricsClient::builder()
//!     .settings(Settings::new("my-app-key").with_game_version("1.4.2"))
//!     .device(DeviceInfo {
//!         model: "Pixel 8".into(),
//!         device_type: "Handheld".into(),
//!         operating_system: "Android 15".into(),
//!         unique_id: "device-abc".into(),
//!     })
//!     .build();
//!
//! // Fire-and-observe: every call settles with a Response, errors
//! // included. Nothing is thrown across the await.
//! let response = client
//!     .send_action("start_game", json!({"game_type": "tactical"}))
//!     .await;
//!
//! if let Some(advisor) = client.get_advisor().await.value("advisor") {
//!     println!("advisor says: {advisor}");
//! }
//! # let _ = response;
//! # }
//! ```
//!
//! Batching: [`GametricsClient::queue_action`] buffers actions locally
//! and [`GametricsClient::flush_actions`] ships them as one JSON array.
//! The queue is cleared only after the service confirms delivery; a
//! failed flush leaves it intact for the caller to retry or inspect.

mod actions;
mod builder;
mod client;

pub use builder::ClientBuilder;
pub use client::GametricsClient;

// The sub-crate types a caller actually touches, at one import depth.
pub use gametrics_dispatch::{
    DispatchError, Dispatcher, HttpDispatcher, HttpDispatcherBuilder,
    Request, Response,
};
pub use gametrics_protocol::{
    Action, Codec, DeviceInfo, Identity, JsonCodec, PlayerId, ProtocolError,
};
pub use gametrics_queue::ActionQueue;
pub use gametrics_settings::{
    APP_KEY_SENTINEL, PLAYER_ID_SENTINEL, Settings, resources,
};

/// The usual imports for an integration, in one line.
pub mod prelude {
    pub use crate::{
        ClientBuilder, DeviceInfo, DispatchError, Dispatcher,
        GametricsClient, HttpDispatcher, PlayerId, Request, Response,
        Settings,
    };
}
