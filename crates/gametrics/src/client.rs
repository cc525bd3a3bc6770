//! The [`GametricsClient`]: queueing, dispatch, and settings access.

use std::sync::{Mutex, RwLock};

use gametrics_dispatch::{
    DispatchError, Dispatcher, HttpDispatcher, Request, Response,
};
use gametrics_protocol::{
    Action, Codec, DeviceInfo, Identity, JsonCodec, ProtocolError,
};
use gametrics_queue::ActionQueue;
use gametrics_settings::{Settings, resources};
use serde_json::Value;

use crate::ClientBuilder;

/// The telemetry client.
///
/// Owns the settings, the pending-action queue, and a [`Dispatcher`].
/// All network operations are `async fn … -> Response`: they resolve
/// exactly once, and every failure mode (invalid action, kill-switch,
/// transport error) arrives inside the [`Response`] rather than as a
/// panic or an `Err` unwinding through the caller's task.
///
/// Shared state is guarded with `std::sync` locks that are never held
/// across an `await`; identity, endpoint, and credential values are
/// snapshotted before any network activity, so concurrent in-flight
/// calls share nothing mutable.
pub struct GametricsClient<D: Dispatcher = HttpDispatcher> {
    settings: RwLock<Settings>,
    device: DeviceInfo,
    queue: Mutex<ActionQueue>,
    codec: JsonCodec,
    dispatcher: D,
}

impl GametricsClient<HttpDispatcher> {
    /// A client with the production HTTP dispatcher.
    pub fn new(settings: Settings, device: DeviceInfo) -> Self {
        Self::from_parts(settings, device, HttpDispatcher::new())
    }

    /// Starts building a client.
    pub fn builder() -> ClientBuilder<HttpDispatcher> {
        ClientBuilder::new()
    }
}

impl<D: Dispatcher> GametricsClient<D> {
    pub(crate) fn from_parts(
        settings: Settings,
        device: DeviceInfo,
        dispatcher: D,
    ) -> Self {
        Self {
            settings: RwLock::new(settings),
            device,
            queue: Mutex::new(ActionQueue::new()),
            codec: JsonCodec,
            dispatcher,
        }
    }

    // -- Sending ----------------------------------------------------------

    /// Builds an action from `kind` and `parameters` and sends it
    /// immediately as a one-element batch.
    ///
    /// The identity snapshot (player id, game version, device fields)
    /// is taken now, not at delivery. An empty `kind` settles the call
    /// with a [`DispatchError::Protocol`] error and performs no network
    /// activity.
    pub async fn send_action(&self, kind: &str, parameters: Value) -> Response {
        if !self.is_enabled() {
            return Response::failed(DispatchError::Disabled);
        }

        let action = match Action::new(kind, parameters, &self.identity()) {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!(error = %e, "rejected action");
                return Response::failed(e.into());
            }
        };

        self.post_actions(vec![action]).await
    }

    /// Builds an action and appends it to the local queue for a later
    /// [`flush_actions`](Self::flush_actions).
    ///
    /// Queueing is local and synchronous, so unlike the network
    /// operations this returns a plain `Result`. The identity snapshot
    /// is still taken here: an action queued as player A stays player
    /// A's even if the configured id changes before the flush.
    ///
    /// # Errors
    /// [`ProtocolError::InvalidAction`] when `kind` is empty; nothing
    /// is queued.
    pub fn queue_action(
        &self,
        kind: &str,
        parameters: Value,
    ) -> Result<(), ProtocolError> {
        let action = Action::new(kind, parameters, &self.identity())?;
        self.lock_queue().append(action);
        Ok(())
    }

    /// Sends every queued action as a single JSON-array POST.
    ///
    /// Clear-only-after-success: the queue is snapshotted, the batch is
    /// posted, and only a confirmed delivery removes the sent actions
    /// (exactly the snapshot, so appends racing the flush survive). On
    /// failure the queue is untouched and recoverable by the caller; no
    /// automatic retry. An empty queue settles immediately without a
    /// network call.
    pub async fn flush_actions(&self) -> Response {
        if !self.is_enabled() {
            return Response::failed(DispatchError::Disabled);
        }

        let batch = self.lock_queue().snapshot();
        if batch.is_empty() {
            return Response::empty_success();
        }

        let sent = batch.len();
        let response = self.post_actions(batch).await;

        if response.is_success() {
            self.lock_queue().remove_first(sent);
        } else {
            tracing::debug!(retained = sent, "flush not confirmed, queue kept");
        }
        response
    }

    /// Number of actions waiting in the queue. Diagnostics only.
    pub fn pending_actions(&self) -> usize {
        self.lock_queue().len()
    }

    /// Serializes `actions` as one JSON array (a single action still
    /// becomes a one-element array) and posts it to the actions
    /// endpoint.
    async fn post_actions(&self, actions: Vec<Action>) -> Response {
        let (url, auth, logging) = {
            let settings = self.read_settings();
            (
                settings.actions_endpoint(),
                settings.authorization(),
                settings.logging_enabled,
            )
        };

        let body = match self.codec.encode(&actions) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode action batch");
                return Response::failed(e.into());
            }
        };

        if logging {
            tracing::debug!(count = actions.len(), %body, "sending actions");
        }

        self.dispatcher
            .dispatch(Request::post_json(url, body).authorized(&auth))
            .await
    }

    // -- Fetching ---------------------------------------------------------

    /// Fetches the per-player statistics computed by the service.
    pub async fn get_player_stats(&self) -> Response {
        self.fetch_player_resource(resources::PLAYERS).await
    }

    /// Fetches the retention advice for the current player.
    pub async fn get_advisor(&self) -> Response {
        self.fetch_player_resource(resources::ADVISOR).await
    }

    /// Fetches content/action recommendations for the current player.
    pub async fn get_recommendations(&self) -> Response {
        self.fetch_player_resource(resources::RECOMMENDATIONS).await
    }

    async fn fetch_player_resource(&self, resource: &str) -> Response {
        if !self.is_enabled() {
            return Response::failed(DispatchError::Disabled);
        }

        let (url, auth, logging) = {
            let settings = self.read_settings();
            let player_id = settings.resolve_player_id(&self.device);
            (
                settings.player_endpoint(resource, &player_id),
                settings.authorization(),
                settings.logging_enabled,
            )
        };

        if logging {
            tracing::debug!(%url, "fetching");
        }

        self.dispatcher
            .dispatch(Request::get(url).authorized(&auth))
            .await
    }

    // -- Settings ---------------------------------------------------------

    /// A snapshot of the current settings.
    pub fn settings(&self) -> Settings {
        self.read_settings().clone()
    }

    /// The identity snapshot a new action would be stamped with.
    pub fn identity(&self) -> Identity {
        let settings = self.read_settings();
        Identity {
            player_id: settings.resolve_player_id(&self.device),
            game_version: settings.game_version.clone(),
            device: self.device.clone(),
        }
    }

    /// Re-enables the client (the kill-switch default).
    pub fn enable(&self) {
        self.set_plugin_enabled(true);
    }

    /// Disables the client: every network operation becomes a no-op
    /// that still settles with a [`DispatchError::Disabled`] response.
    /// Useful when debugging other plugins.
    pub fn disable(&self) {
        self.set_plugin_enabled(false);
    }

    /// True unless the kill-switch is off.
    pub fn is_enabled(&self) -> bool {
        self.read_settings().plugin_enabled
    }

    /// Sets the tenant app key.
    pub fn set_app_key(&self, key: impl Into<String>) {
        self.write_settings().app_key = key.into();
    }

    /// Sets the explicit player id. Actions already queued keep the
    /// identity they were created with.
    pub fn set_player_id(&self, id: impl Into<String>) {
        self.write_settings().player_id = id.into();
    }

    /// Sets the game version stamped into subsequent actions.
    pub fn set_game_version(&self, version: impl Into<String>) {
        self.write_settings().game_version = version.into();
    }

    /// Toggles the kill-switch.
    pub fn set_plugin_enabled(&self, enabled: bool) {
        self.write_settings().plugin_enabled = enabled;
    }

    /// Toggles request/response debug logging.
    pub fn set_logging_enabled(&self, enabled: bool) {
        self.write_settings().logging_enabled = enabled;
    }

    /// Restores placeholder credentials (see [`Settings::reset`]).
    pub fn reset_settings(&self) {
        self.write_settings().reset();
    }

    // -- Lock helpers -----------------------------------------------------

    fn read_settings(&self) -> std::sync::RwLockReadGuard<'_, Settings> {
        self.settings.read().expect("settings lock poisoned")
    }

    fn write_settings(&self) -> std::sync::RwLockWriteGuard<'_, Settings> {
        self.settings.write().expect("settings lock poisoned")
    }

    fn lock_queue(&self) -> std::sync::MutexGuard<'_, ActionQueue> {
        self.queue.lock().expect("queue lock poisoned")
    }
}
