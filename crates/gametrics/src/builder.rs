//! Builder for [`GametricsClient`].

use gametrics_dispatch::{Dispatcher, HttpDispatcher};
use gametrics_protocol::DeviceInfo;
use gametrics_settings::Settings;

use crate::GametricsClient;

/// Configures and constructs a [`GametricsClient`].
///
/// The client is an explicit instance: build it once at application
/// start and pass it by reference to call sites. Construction cannot
/// fail; an unconfigured app key is degraded mode (warned about on
/// first use), not a constructor error.
///
/// # Example
///
/// ```rust,no_run
/// use gametrics::prelude::*;
///
/// let client = GametricsClient::builder()
///     .settings(Settings::new("my-app-key"))
///     .device(DeviceInfo::default())
///     .build();
/// ```
pub struct ClientBuilder<D: Dispatcher = HttpDispatcher> {
    settings: Settings,
    device: DeviceInfo,
    dispatcher: D,
}

impl ClientBuilder<HttpDispatcher> {
    /// A builder with default settings, an empty device description,
    /// and the production HTTP dispatcher.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            device: DeviceInfo::default(),
            dispatcher: HttpDispatcher::new(),
        }
    }
}

impl Default for ClientBuilder<HttpDispatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dispatcher> ClientBuilder<D> {
    /// Sets the SDK configuration.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the host-supplied device description.
    pub fn device(mut self, device: DeviceInfo) -> Self {
        self.device = device;
        self
    }

    /// Swaps in a different [`Dispatcher`] (a mock in tests, or an
    /// [`HttpDispatcher`] built with a timeout).
    pub fn dispatcher<D2: Dispatcher>(self, dispatcher: D2) -> ClientBuilder<D2> {
        ClientBuilder {
            settings: self.settings,
            device: self.device,
            dispatcher,
        }
    }

    /// Builds the client.
    pub fn build(self) -> GametricsClient<D> {
        GametricsClient::from_parts(self.settings, self.device, self.dispatcher)
    }
}
