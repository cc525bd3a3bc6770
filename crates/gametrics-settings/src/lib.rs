//! Identity and endpoint configuration for the Gametrics SDK.
//!
//! This crate answers two questions for every call the client makes:
//!
//! 1. **Who is talking?** ([`Settings::app_key`],
//!    [`Settings::resolve_player_id`]) — the tenant credential and the
//!    player identity, with a device-id fallback when no player id has
//!    been configured.
//! 2. **Where to?** ([`Settings::customer_endpoint`],
//!    [`Settings::player_endpoint`] and the named getters) — the fully
//!    composed service URLs.
//!
//! Persistence is the host's concern: [`Settings`] is a plain
//! serializable value. Load it from wherever your engine keeps
//! configuration, hand it to the client once, and mutate it through the
//! client's setters afterwards.

mod endpoints;
mod settings;

pub use endpoints::resources;
pub use settings::{
    APP_KEY_SENTINEL, DEFAULT_API_VERSION, DEFAULT_BASE_URL,
    PLAYER_ID_SENTINEL, Settings,
};
