//! Wire protocol for the Gametrics telemetry API.
//!
//! This crate defines what actually travels between a game and the
//! analytics service:
//!
//! - **Types** ([`Action`], [`Identity`], [`PlayerId`], [`DeviceInfo`]) —
//!   the telemetry records that go on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those records are
//!   converted to and from JSON bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while building
//!   or (de)serializing a record.
//!
//! # Architecture
//!
//! The protocol layer sits between the dispatch layer (raw HTTP bodies)
//! and the client facade (queueing, endpoints). It knows nothing about
//! URLs or credentials, only about record shapes and JSON.
//!
//! ```text
//! Client (queue, endpoints) → Protocol (Action, JSON) → Dispatch (HTTP)
//! ```

mod codec;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use types::{Action, DeviceInfo, Identity, PlayerId};
