//! Core wire types for the Gametrics telemetry API.
//!
//! An [`Action`] is one telemetry event: a type name, an arbitrary JSON
//! parameter payload, and the identity of the player it belongs to. The
//! service ingests actions as JSON arrays, so every field name here is
//! part of the wire contract.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a player.
///
/// Newtype over `String`: the service accepts arbitrary opaque ids, and
/// the wrapper keeps a player id from being confused with any other
/// string (an app key, a version) in a signature.
///
/// `#[serde(transparent)]` serializes `PlayerId("abc")` as just `"abc"`,
/// which is the shape the service expects in the `player_id` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Creates a player id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Host-supplied description of the device the game is running on.
///
/// The SDK never probes the platform itself; the embedding engine knows
/// the device and hands this in once at client construction. The fields
/// are flattened into every [`Action`] as `device_model`, `device_type`,
/// and `operating_system`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Hardware model string (e.g. `"Pixel 8"`).
    pub model: String,
    /// Device category (e.g. `"Handheld"`, `"Desktop"`).
    pub device_type: String,
    /// Operating system name and version.
    pub operating_system: String,
    /// Stable device-unique identifier. Used as the player id when no
    /// explicit id has been configured.
    pub unique_id: String,
}

/// The identity snapshot stamped into an action at construction time.
///
/// An action's identity is frozen when the action is created, not when
/// it is eventually sent. A player id or game version changed while
/// actions sit in the queue must not rewrite history, so the snapshot
/// is taken once and copied into the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The resolved player id (explicit or device fallback).
    pub player_id: PlayerId,
    /// The game's version string.
    pub game_version: String,
    /// The host device description.
    pub device: DeviceInfo,
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A single telemetry event attributable to a player.
///
/// Wire shape (field names are the contract):
///
/// ```text
/// {
///   "player_id": "...",
///   "type": "start_game",
///   "parameters": { ... arbitrary JSON ... },
///   "device_model": "...",
///   "device_type": "...",
///   "operating_system": "...",
///   "version": "1.4.2",
///   "date": 1754515200
/// }
/// ```
///
/// Invariants:
/// - `kind` is non-empty; [`Action::new`] rejects an empty type before
///   the record exists.
/// - `date` is assigned at construction (Unix-UTC seconds) and never
///   mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The player this event belongs to.
    pub player_id: PlayerId,

    /// The action type name (e.g. `"start_game"`, `"gain_xp"`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Arbitrary event payload. Scalars, nested maps, and sequences all
    /// type-check uniformly as a JSON value.
    pub parameters: Value,

    /// Hardware model, copied from [`DeviceInfo`].
    pub device_model: String,

    /// Device category, copied from [`DeviceInfo`].
    pub device_type: String,

    /// OS name and version, copied from [`DeviceInfo`].
    pub operating_system: String,

    /// The game's version string. Wire name is `version`.
    #[serde(rename = "version")]
    pub game_version: String,

    /// Unix-UTC seconds at construction time.
    pub date: u64,
}

impl Action {
    /// Builds an action from a type name and a parameter payload,
    /// stamping the current timestamp and the given identity snapshot.
    ///
    /// # Errors
    /// Returns [`ProtocolError::InvalidAction`] when `kind` is empty.
    /// Validation happens here so that no half-formed action can reach
    /// the queue or the wire.
    pub fn new(
        kind: impl Into<String>,
        parameters: Value,
        identity: &Identity,
    ) -> Result<Self, ProtocolError> {
        let kind = kind.into();
        if kind.is_empty() {
            return Err(ProtocolError::InvalidAction(
                "action type must not be empty".into(),
            ));
        }

        Ok(Self {
            player_id: identity.player_id.clone(),
            kind,
            parameters,
            device_model: identity.device.model.clone(),
            device_type: identity.device.device_type.clone(),
            operating_system: identity.device.operating_system.clone(),
            game_version: identity.game_version.clone(),
            date: unix_timestamp(),
        })
    }
}

/// Current time as Unix-UTC seconds.
///
/// A clock before the epoch yields 0 rather than a panic; the service
/// treats the date as advisory and a zero is preferable to taking the
/// whole pipeline down.
fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

// =========================================================================
// Tests
// =========================================================================
