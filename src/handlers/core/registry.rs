//! Command handler registry.
//!
//! The `Registry` binds command names to handlers and descriptions and keeps
//! per-command usage counters. Built-in commands are registered from one
//! explicit list in [`Registry::new`]; later registrations under the same
//! name replace earlier ones, which is how user commands shadow built-ins.

use super::context::{BoxedHandler, Context, FnHandler, Handler};
use crate::error::HandlerResult;
use crate::handlers::{
    channel::{CycleHandler, InviteHandler, JoinHandler, KickHandler, PartHandler, TopicHandler},
    connection::{EncodingHandler, NickHandler, QuitHandler, QuoteHandler, ServerHandler},
    messaging::{ActionHandler, CtcpHandler, MsgHandler, NoticeHandler, QueryHandler},
    misc::ClearHandler,
    settings::{AliasHandler, IgnoreHandler, SaveHandler, SetHandler, UnignoreHandler},
    user_query::{WhoisHandler, WhowasHandler},
    user_status::AwayHandler,
};
use crate::input::Args;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

struct Binding {
    handler: BoxedHandler,
    description: Option<String>,
    count: AtomicU64,
}

/// Registry of command handlers.
pub struct Registry {
    prefix: char,
    bindings: HashMap<String, Binding>,
}

impl Registry {
    /// Create a registry with every built-in command registered.
    pub fn new(prefix: char) -> Self {
        let mut r = Self::empty(prefix);

        // Messaging
        r.register("msg", MsgHandler, Some("Send a message"));
        r.register("action", ActionHandler, Some("Do something physical"));
        r.register("query", QueryHandler, Some("Start a private message with someone"));
        r.register("notice", NoticeHandler, Some("Send a notice"));
        r.register("ctcp", CtcpHandler, Some("Send a CTCP command to somebody"));

        // Channels
        r.register("join", JoinHandler, Some("Join a channel"));
        r.register("part", PartHandler, Some("Leave a channel"));
        r.register("cycle", CycleHandler, Some("Leave, then re-join a channel"));
        r.register("invite", InviteHandler, Some("Invite somebody into the channel"));
        r.register("topic", TopicHandler, Some("Set the topic for this channel"));
        r.register("kick", KickHandler, Some("Kick somebody from the channel"));

        // Connection
        r.register("nick", NickHandler, Some("Change your nickname"));
        r.register("quote", QuoteHandler, Some("Send a raw command to the IRC server"));
        r.register("quit", QuitHandler, Some("Disconnect from the IRC server"));
        r.register("server", ServerHandler, Some("Connect to a new IRC network"));
        r.register("encoding", EncodingHandler, Some("Change your connection encoding"));

        // User queries and status
        r.register("whois", WhoisHandler, Some("Request information on somebody"));
        r.register(
            "whowas",
            WhowasHandler,
            Some("Request information on somebody that disconnected recently"),
        );
        r.register("away", AwayHandler, Some("Mark yourself as away"));

        // Client-local
        r.register("clear", ClearHandler, Some("Clear all messages from this window"));
        r.register("set", SetHandler, Some("Set a client setting"));
        r.register("save", SaveHandler, Some("Save the current client settings"));
        r.register("alias", AliasHandler, Some("Create an alias to an existing command"));
        r.register("ignore", IgnoreHandler, Some("Ignore messages from somebody"));
        r.register("unignore", UnignoreHandler, Some("Stop ignoring somebody"));

        r
    }

    /// Create a registry with no bindings.
    pub fn empty(prefix: char) -> Self {
        Self {
            prefix,
            bindings: HashMap::new(),
        }
    }

    /// Bind `name` to `handler`. Returns true if an earlier binding was replaced.
    pub fn register<H>(&mut self, name: &str, handler: H, description: Option<&str>) -> bool
    where
        H: Handler + 'static,
    {
        self.register_shared(name, Arc::new(handler), description)
    }

    /// Bind `name` to a closure.
    pub fn register_fn<F>(&mut self, name: &str, f: F, description: Option<&str>) -> bool
    where
        F: Fn(&mut Context<'_>, &mut Args<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.register(name, FnHandler(f), description)
    }

    /// Bind `name` to an already shared handler.
    pub fn register_shared(
        &mut self,
        name: &str,
        handler: BoxedHandler,
        description: Option<&str>,
    ) -> bool {
        let key = name.trim_start_matches(self.prefix).to_lowercase();
        let binding = Binding {
            handler,
            description: description.map(str::to_string),
            count: AtomicU64::new(0),
        };
        let replaced = self.bindings.insert(key.clone(), binding).is_some();
        if replaced {
            debug!(command = %key, "command binding replaced");
        }
        replaced
    }

    /// Handler bound to `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<BoxedHandler> {
        self.bindings
            .get(&name.to_lowercase())
            .map(|b| Arc::clone(&b.handler))
    }

    /// Look up `name` for dispatch, counting the use.
    pub(crate) fn route(&self, name: &str) -> Option<BoxedHandler> {
        let binding = self.bindings.get(&name.to_lowercase())?;
        binding.count.fetch_add(1, Ordering::Relaxed);
        Some(Arc::clone(&binding.handler))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Prefixed command name to description, for autocomplete and help.
    /// Commands registered without a description are left out.
    pub fn descriptions(&self) -> BTreeMap<String, String> {
        self.bindings
            .iter()
            .filter_map(|(name, b)| {
                b.description
                    .as_ref()
                    .map(|d| (format!("{}{}", self.prefix, name), d.clone()))
            })
            .collect()
    }

    /// Usage counts of commands used at least once, most used first.
    pub fn command_stats(&self) -> Vec<(String, u64)> {
        let mut stats: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, b)| (name.clone(), b.count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        stats
    }
}
