//! Convenience senders for the well-known action types.
//!
//! These are thin wrappers over [`GametricsClient::send_action`] with
//! the type names and parameter shapes the service's models are trained
//! on. Integrations are free to ignore them and send raw actions.

use gametrics_dispatch::{Dispatcher, Response};
use serde_json::json;

use crate::GametricsClient;

impl<D: Dispatcher> GametricsClient<D> {
    /// Sends the `start_session` action. Call once per game launch;
    /// the parameters carry the configured game version.
    pub async fn start_session(&self) -> Response {
        let version = self.settings().game_version;
        self.send_action("start_session", json!({ "version": version }))
            .await
    }

    /// Sends the `start_game` action with game-specific parameters
    /// (level, mode, current XP, and so on).
    pub async fn start_game(&self, parameters: serde_json::Value) -> Response {
        self.send_action("start_game", parameters).await
    }

    /// Sends the `game_result` action when a round ends.
    pub async fn game_result(&self, parameters: serde_json::Value) -> Response {
        self.send_action("game_result", parameters).await
    }

    /// Sends a `retention_action` each time the player receives a
    /// bonus or booster (`kind` e.g. `"daily_reward"`).
    pub async fn retention(&self, kind: &str) -> Response {
        self.send_action("retention_action", json!({ "retention_type": kind }))
            .await
    }

    /// Sends a `conversion_action` each time the player completes a
    /// conversion (`kind` e.g. `"watched_ad"`, `"rated_app"`).
    pub async fn conversion(&self, kind: &str) -> Response {
        self.send_action("conversion_action", json!({ "conversion_type": kind }))
            .await
    }
}
