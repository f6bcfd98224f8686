//! Command handler context and core types.
//!
//! Defines the [`Context`] passed to every handler. Everything a handler may
//! touch (session, transport, view, aliases, settings, deferred tasks and
//! configuration) is injected here by the dispatcher; handlers never reach
//! for process-wide state.

use crate::alias::AliasTable;
use crate::config::Config;
use crate::error::HandlerResult;
use crate::gateway::Gateway;
use crate::input::Args;
use crate::scheduler::Scheduler;
use crate::session::Session;
use crate::settings::SettingsStore;
use crate::view::{Line, Panel, View};
use std::sync::Arc;

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// Per-connection client state.
    pub session: &'a mut Session,
    /// Outbound transport.
    pub gateway: &'a Arc<dyn Gateway>,
    /// Display sink and panel directory.
    pub view: &'a Arc<dyn View>,
    /// User-editable alias table.
    pub aliases: &'a mut AliasTable,
    /// Settings accessor.
    pub settings: &'a mut dyn SettingsStore,
    /// Deferred follow-up work.
    pub scheduler: &'a Scheduler,
    /// Client configuration.
    pub config: &'a Config,
}

impl Context<'_> {
    /// The active panel.
    #[inline]
    pub fn active(&self) -> Panel {
        self.view.active()
    }

    #[inline]
    pub fn prefix(&self) -> char {
        self.config.client.command_prefix
    }

    /// Show a status line in the active panel.
    pub fn status(&self, key: &'static str, text: impl Into<String>) {
        self.view.append_active(Line::status(key, text));
    }

    /// Show a status line in the server panel.
    pub fn server_status(&self, key: &'static str, text: impl Into<String>) {
        self.view.append_server(Line::status(key, text));
    }
}

/// A command handler.
///
/// Handlers run synchronously on the dispatch thread. Anything slow is
/// handed to the gateway or the scheduler and not awaited.
pub trait Handler: Send + Sync {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult;
}

/// Adapter turning a closure into a [`Handler`].
pub struct FnHandler<F>(pub F);

impl<F> Handler for FnHandler<F>
where
    F: Fn(&mut Context<'_>, &mut Args<'_>) -> HandlerResult + Send + Sync,
{
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        (self.0)(ctx, args)
    }
}

/// Shared handler, as stored by the registry.
pub type BoxedHandler = Arc<dyn Handler>;
