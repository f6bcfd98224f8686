//! slirc - line-mode front end for the command interpreter.
//!
//! Reads commands from stdin, prints outbound IRC lines and panel output to
//! stdout. There is no network connection; it is a harness for trying out
//! aliases and commands.

use slirc_commands::config::Config;
use slirc_commands::gateway::ChannelGateway;
use slirc_commands::handlers::{Dispatch, Dispatcher};
use slirc_commands::settings::TomlSettings;
use slirc_commands::view::{Line, Panel, PanelKind, PanelList, Style, View};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// [`PanelList`] that also prints every line it is given.
struct TerminalView {
    panels: PanelList,
}

impl View for TerminalView {
    fn active(&self) -> Panel {
        self.panels.active()
    }

    fn server(&self) -> Panel {
        self.panels.server()
    }

    fn open(&self, name: &str, kind: PanelKind) -> Panel {
        let panel = self.panels.open(name, kind);
        println!("-- now in {}", panel.name);
        panel
    }

    fn append(&self, panel: &str, line: Line) {
        match line.style {
            Style::Privmsg => println!("[{panel}] <{}> {}", line.nick, line.text),
            Style::Action => println!("[{panel}] * {} {}", line.nick, line.text),
            Style::Status(_) => println!("[{panel}] {}", line.text),
            Style::Error => println!("[{panel}] ! {}", line.text),
        }
        self.panels.append(panel, line);
    }

    fn clear(&self, panel: &str) {
        self.panels.clear(panel);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "slirc.toml".to_string());

    let config = if Path::new(&config_path).exists() {
        Config::load(&config_path).map_err(|e| {
            error!(path = %config_path, error = %e, "Failed to load config");
            e
        })?
    } else {
        info!(path = %config_path, "No config file, using defaults");
        Config::default()
    };

    let settings = match &config.settings.path {
        Some(path) => TomlSettings::load_or_default(path)?,
        None => TomlSettings::in_memory(),
    };

    let (gateway, mut outbound) = ChannelGateway::new();
    tokio::spawn(async move {
        while let Some(command) = outbound.recv().await {
            println!(">> {command}");
        }
    });

    let view = Arc::new(TerminalView {
        panels: PanelList::new("server"),
    });

    info!(nick = %config.client.nick, prefix = %config.client.command_prefix, "Starting slirc");

    let mut dispatcher =
        Dispatcher::new(config, Arc::new(gateway), view).with_settings(settings);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if dispatcher.dispatch(&line) == Dispatch::Failed {
            debug!(input = %line, "command failed");
        }
    }

    info!("stdin closed, exiting");
    Ok(())
}
