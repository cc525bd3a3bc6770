//! Endpoint composition.
//!
//! Every service URL has one of two shapes, and the trailing slash is
//! part of the contract:
//!
//! ```text
//! customer scope: {base}/{version}/{resource}/{app_key}/
//! player scope:   {base}/{version}/{resource}/{app_key}/{player_id}/
//! ```

use gametrics_protocol::PlayerId;

use crate::Settings;

/// Resource path segments understood by the service.
pub mod resources {
    /// Telemetry action ingestion (POST).
    pub const ACTIONS: &str = "actions";
    /// Per-player statistics (GET).
    pub const PLAYERS: &str = "players";
    /// Retention advice for a player (GET).
    pub const ADVISOR: &str = "advisor";
    /// Content/action recommendations for a player (GET).
    pub const RECOMMENDATIONS: &str = "recommendations";
}

impl Settings {
    /// Composes a customer-scoped URL for the given resource.
    pub fn customer_endpoint(&self, resource: &str) -> String {
        format!(
            "{}/{}/{}/{}/",
            self.base_url,
            self.api_version,
            resource,
            self.app_key()
        )
    }

    /// Composes a player-scoped URL for the given resource.
    pub fn player_endpoint(&self, resource: &str, player_id: &PlayerId) -> String {
        format!("{}{}/", self.customer_endpoint(resource), player_id)
    }

    /// The action-ingestion endpoint (customer scope).
    pub fn actions_endpoint(&self) -> String {
        self.customer_endpoint(resources::ACTIONS)
    }

    /// The per-player statistics endpoint.
    pub fn stats_endpoint(&self, player_id: &PlayerId) -> String {
        self.player_endpoint(resources::PLAYERS, player_id)
    }

    /// The retention-advice endpoint for a player.
    pub fn advisor_endpoint(&self, player_id: &PlayerId) -> String {
        self.player_endpoint(resources::ADVISOR, player_id)
    }

    /// The recommendations endpoint for a player.
    pub fn recommendations_endpoint(&self, player_id: &PlayerId) -> String {
        self.player_endpoint(resources::RECOMMENDATIONS, player_id)
    }
}

// =========================================================================
// Tests
// =========================================================================
