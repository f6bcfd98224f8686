//! Integration test common infrastructure.
//!
//! Builds a [`Dispatcher`] wired to a gateway that records every outbound
//! request and an in-memory panel list.

#![allow(dead_code)]

use parking_lot::Mutex;
use slirc_commands::config::Config;
use slirc_commands::gateway::{Gateway, Outbound};
use slirc_commands::handlers::Dispatcher;
use slirc_commands::view::{Line, PanelKind, PanelList, View};
use std::sync::Arc;

/// Gateway that keeps everything it is asked to send.
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<Outbound>>,
}

impl RecordingGateway {
    pub fn take(&self) -> Vec<Outbound> {
        std::mem::take(&mut *self.sent.lock())
    }

    /// Wire lines of everything sent so far, without draining.
    pub fn lines(&self) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .map(|c| c.wire_line().unwrap_or_else(|| c.to_string()))
            .collect()
    }
}

impl Gateway for RecordingGateway {
    fn send(&self, command: Outbound) {
        self.sent.lock().push(command);
    }
}

pub struct TestClient {
    pub dispatcher: Dispatcher,
    pub gateway: Arc<RecordingGateway>,
    pub view: Arc<PanelList>,
}

impl TestClient {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let gateway = Arc::new(RecordingGateway::default());
        let view = Arc::new(PanelList::new("server"));
        let dispatcher = Dispatcher::new(config, gateway.clone(), view.clone());
        Self {
            dispatcher,
            gateway,
            view,
        }
    }

    /// Open and activate a channel panel without sending anything.
    pub fn in_channel(self, channel: &str) -> Self {
        self.view.open(channel, PanelKind::Channel);
        self
    }

    pub fn in_query(self, nick: &str) -> Self {
        self.view.open(nick, PanelKind::Query);
        self
    }

    pub fn send(&mut self, line: &str) -> slirc_commands::handlers::Dispatch {
        self.dispatcher.dispatch(line)
    }

    pub fn active_lines(&self) -> Vec<Line> {
        self.view.lines(&self.view.active().name)
    }

    pub fn server_lines(&self) -> Vec<Line> {
        self.view.lines("server")
    }
}

impl TestClient {
    /// Swap in a settings store.
    pub fn with_settings(mut self, settings: slirc_commands::settings::TomlSettings) -> Self {
        self.dispatcher = self.dispatcher.with_settings(settings);
        self
    }
}
