//! Input dispatch.
//!
//! A line moves through `expand -> tokenize -> observe -> route`:
//!
//! 1. aliases are expanded with the active panel as `$channel`
//! 2. the result is tokenized into a [`CommandEvent`]
//! 3. the observer hook sees every event
//! 4. the bound handler runs, or the fallback when nothing is bound
//!
//! Faults in the observer or the handler (errors and panics alike) stop at
//! this boundary. They are logged and the dispatcher is ready for the next
//! line.

use super::context::{BoxedHandler, Context, Handler};
use super::fallback::{TraceObserver, UnknownCommandHandler};
use super::registry::Registry;
use crate::alias::AliasTable;
use crate::config::Config;
use crate::error::{AliasError, HandlerError, HandlerResult};
use crate::gateway::Gateway;
use crate::input::{self, Args, CommandEvent, Input};
use crate::scheduler::Scheduler;
use crate::session::Session;
use crate::settings::{SettingsStore, TomlSettings};
use crate::telemetry::{CommandTimer, spans};
use crate::view::{Line, View};
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// What happened to one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank input, or text with nowhere to go.
    Empty,
    /// A bound handler ran to completion.
    Handled,
    /// No binding; the fallback ran to completion.
    Unhandled,
    /// The handler or fallback failed; the fault was logged.
    Failed,
}

enum Fault {
    Error(HandlerError),
    Panic(String),
}

/// Owns the alias table, command registry and every collaborator handlers
/// are given.
pub struct Dispatcher {
    config: Config,
    registry: Registry,
    aliases: AliasTable,
    session: Session,
    settings: Box<dyn SettingsStore>,
    gateway: Arc<dyn Gateway>,
    view: Arc<dyn View>,
    scheduler: Scheduler,
    observer: BoxedHandler,
    fallback: BoxedHandler,
}

impl Dispatcher {
    /// Build a dispatcher with the built-in commands, the default aliases
    /// plus any configured ones, and in-memory settings.
    pub fn new(config: Config, gateway: Arc<dyn Gateway>, view: Arc<dyn View>) -> Self {
        let prefix = config.client.command_prefix;

        let mut aliases = AliasTable::with_defaults(prefix);
        aliases.set_max_depth(config.client.max_alias_depth);
        for (name, rule) in &config.aliases {
            if let Err(e) = aliases.set(name, rule) {
                warn!(alias = %name, error = %e, "ignoring configured alias");
            }
        }

        let session = Session::new(config.client.nick.clone())
            .with_chantypes(config.client.chantypes.clone());

        Self {
            registry: Registry::new(prefix),
            aliases,
            session,
            settings: Box::new(TomlSettings::in_memory()),
            gateway,
            view,
            scheduler: Scheduler::new(),
            observer: Arc::new(TraceObserver),
            fallback: Arc::new(UnknownCommandHandler),
            config,
        }
    }

    /// Replace the settings store.
    pub fn with_settings(mut self, settings: impl SettingsStore + 'static) -> Self {
        self.settings = Box::new(settings);
        self
    }

    /// Replace the hook that observes every command before routing.
    pub fn set_observer(&mut self, observer: impl Handler + 'static) {
        self.observer = Arc::new(observer);
    }

    /// Replace the handler for commands with no binding.
    pub fn set_fallback(&mut self, fallback: impl Handler + 'static) {
        self.fallback = Arc::new(fallback);
    }

    /// Bind a command, replacing any existing binding of that name.
    pub fn register_command(
        &mut self,
        name: &str,
        handler: impl Handler + 'static,
        description: Option<&str>,
    ) -> bool {
        self.registry.register(name, handler, description)
    }

    /// Bind a command to a closure.
    pub fn register_fn<F>(&mut self, name: &str, f: F, description: Option<&str>) -> bool
    where
        F: Fn(&mut Context<'_>, &mut Args<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.registry.register_fn(name, f, description)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Prefixed command names and descriptions for autocomplete.
    pub fn descriptions(&self) -> BTreeMap<String, String> {
        self.registry.descriptions()
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn list_aliases(&self) -> Vec<(String, String)> {
        self.aliases
            .list()
            .into_iter()
            .map(|(name, rule)| (name.to_string(), rule.to_string()))
            .collect()
    }

    pub fn set_alias(&mut self, name: &str, rule: &str) -> Result<Option<String>, AliasError> {
        self.aliases.set(name, rule)
    }

    pub fn remove_alias(&mut self, name: &str) -> Option<String> {
        self.aliases.remove(name)
    }

    /// Expand aliases in `raw` with `context_name` standing in for `$channel`.
    pub fn expand(&self, raw: &str, context_name: &str) -> String {
        self.aliases.expand(raw, context_name)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session, for the connection layer to apply confirmed nick
    /// changes.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process one line of user input.
    pub fn dispatch(&mut self, raw: &str) -> Dispatch {
        let active = self.view.active();
        let expanded = self.aliases.expand(raw, &active.name);

        let event = match input::parse(&expanded, self.config.client.command_prefix) {
            None => return Dispatch::Empty,
            Some(Input::Command(event)) => event,
            Some(Input::Text(text)) => {
                if active.is_server() || active.is_applet() {
                    self.view.append_active(Line::error(format!(
                        "Not in a channel or query; use {0}join or {0}query first",
                        self.config.client.command_prefix
                    )));
                    return Dispatch::Empty;
                }
                CommandEvent::new("msg", vec![active.name, text])
            }
        };

        self.dispatch_event(event)
    }

    /// Route an already tokenized command.
    pub fn dispatch_event(&mut self, event: CommandEvent) -> Dispatch {
        let Self {
            config,
            registry,
            aliases,
            session,
            settings,
            gateway,
            view,
            scheduler,
            observer,
            fallback,
        } = self;

        let context_name = view.active().name;
        let span = spans::command(&event.command, &context_name, event.params.len());
        let _enter = span.enter();
        let _timer = CommandTimer::new(&event.command);

        let mut ctx = Context {
            session,
            gateway: &*gateway,
            view: &*view,
            aliases,
            settings: settings.as_mut(),
            scheduler: &*scheduler,
            config: &*config,
        };

        if let Err(fault) = run(&**observer, &mut ctx, &event) {
            match fault {
                Fault::Error(e) => warn!(error = %e, "command observer failed"),
                Fault::Panic(msg) => error!(panic = %msg, "command observer panicked"),
            }
        }

        let (handler, outcome) = match registry.route(&event.command) {
            Some(handler) => (handler, Dispatch::Handled),
            None => {
                debug!(command = %event.command, "no binding, using fallback");
                (Arc::clone(fallback), Dispatch::Unhandled)
            }
        };

        match run(handler.as_ref(), &mut ctx, &event) {
            Ok(()) => outcome,
            Err(fault) => {
                report(&ctx, &event, fault);
                Dispatch::Failed
            }
        }
    }
}

/// Run `handler` with a fresh cursor, converting panics into faults.
fn run(handler: &dyn Handler, ctx: &mut Context<'_>, event: &CommandEvent) -> Result<(), Fault> {
    let mut args = Args::new(event);
    match panic::catch_unwind(AssertUnwindSafe(|| handler.handle(ctx, &mut args))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(Fault::Error(e)),
        Err(payload) => Err(Fault::Panic(panic_message(payload.as_ref()))),
    }
}

fn report(ctx: &Context<'_>, event: &CommandEvent, fault: Fault) {
    match fault {
        Fault::Error(e) => {
            warn!(command = %event.command, code = e.error_code(), error = %e, "command failed");
            if e.is_user_facing() {
                ctx.view
                    .append_active(Line::error(format!("{}{}: {}", ctx.prefix(), event.command, e)));
            }
        }
        Fault::Panic(msg) => {
            error!(command = %event.command, panic = %msg, "command handler panicked");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
