//! The [`Settings`] value and identity resolution.

use std::sync::atomic::{AtomicBool, Ordering};

use gametrics_protocol::{DeviceInfo, PlayerId};
use serde::{Deserialize, Serialize};

/// Placeholder app key shipped in a fresh configuration. Callers must
/// treat this value as "unconfigured", never as a usable credential.
pub const APP_KEY_SENTINEL: &str = "<APP_KEY>";

/// Placeholder player id meaning "fall back to the device-unique id".
pub const PLAYER_ID_SENTINEL: &str = "<DEFAULT_DEVICE_ID>";

/// Default service base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.gametrics.io";

/// Default service API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Process-wide latch so the unconfigured-credentials warning fires at
/// most once, no matter how many calls read the key.
static CREDENTIALS_WARNING: AtomicBool = AtomicBool::new(false);

/// SDK configuration: credentials, identity, endpoint roots, and the
/// two behavior flags (kill-switch and logging).
///
/// Loaded once per process and mutated only through explicit setters on
/// the client. `Serialize`/`Deserialize` so a host settings store can
/// persist it; this crate never touches disk itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Tenant-level credential identifying the game to the service.
    pub app_key: String,

    /// Explicit player id. When left at [`PLAYER_ID_SENTINEL`] or empty,
    /// identity resolution falls back to the device-unique id.
    pub player_id: String,

    /// The game's version string, stamped into every action.
    pub game_version: String,

    /// Global kill-switch. When false the client performs no network
    /// activity, but every call still settles with a response.
    pub plugin_enabled: bool,

    /// Gates the SDK's request/response debug logging.
    pub logging_enabled: bool,

    /// Service root, scheme and host (no trailing slash).
    pub base_url: String,

    /// API version path segment (e.g. `"v1"`).
    pub api_version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_key: APP_KEY_SENTINEL.to_string(),
            player_id: PLAYER_ID_SENTINEL.to_string(),
            game_version: String::new(),
            plugin_enabled: true,
            logging_enabled: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl Settings {
    /// Creates settings with the given app key and defaults elsewhere.
    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            ..Self::default()
        }
    }

    /// Sets the explicit player id.
    pub fn with_player_id(mut self, id: impl Into<String>) -> Self {
        self.player_id = id.into();
        self
    }

    /// Sets the game version string.
    pub fn with_game_version(mut self, version: impl Into<String>) -> Self {
        self.game_version = version.into();
        self
    }

    /// Overrides the service base URL (scheme and host, no trailing
    /// slash).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Overrides the API version segment.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Returns the configured app key.
    ///
    /// If the key is still the shipped placeholder this warns once per
    /// process and returns the placeholder anyway: misconfiguration is
    /// degraded mode, not a crash.
    pub fn app_key(&self) -> &str {
        if self.app_key == APP_KEY_SENTINEL
            && !CREDENTIALS_WARNING.swap(true, Ordering::Relaxed)
        {
            tracing::warn!(
                "default app key in use; telemetry will be rejected until \
                 a real key is configured"
            );
        }
        &self.app_key
    }

    /// True once a real app key has been configured.
    pub fn has_app_key(&self) -> bool {
        self.app_key != APP_KEY_SENTINEL && !self.app_key.is_empty()
    }

    /// Resolves the player identity for an outgoing call.
    ///
    /// The explicit id wins unless it is unset (the sentinel) or empty,
    /// in which case the device-unique id stands in. The fallback keeps
    /// telemetry attributable on installs that never set a player id.
    pub fn resolve_player_id(&self, device: &DeviceInfo) -> PlayerId {
        if self.player_id == PLAYER_ID_SENTINEL || self.player_id.is_empty() {
            PlayerId::new(device.unique_id.clone())
        } else {
            PlayerId::new(self.player_id.clone())
        }
    }

    /// The `Authorization` header value for service calls.
    pub fn authorization(&self) -> String {
        format!("api_key {}", self.app_key())
    }

    /// Restores the shipped placeholder credentials, leaving the flags
    /// and endpoint roots untouched.
    pub fn reset(&mut self) {
        self.app_key = APP_KEY_SENTINEL.to_string();
        self.player_id = PLAYER_ID_SENTINEL.to_string();
    }
}

// =========================================================================
// Tests
// =========================================================================
