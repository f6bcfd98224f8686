//! JOIN command handler.

use super::common::parse_join_targets;
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use crate::view::PanelKind;
use tracing::debug;

/// `/join <channel>[,<channel>...] [key]`
///
/// Channels are joined left to right. Each gets a panel, so the last one
/// ends up active. A missing channel type gets the default one.
pub struct JoinHandler;

impl Handler for JoinHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let input = args.rest();
        let targets = parse_join_targets(&input);
        if targets.is_empty() {
            return Err(HandlerError::NeedMoreParams("join <channel>[,<channel>] [key]"));
        }

        for (name, key) in targets {
            let channel = ctx.session.channel_name(name);
            // An explicit join wins over a pending /cycle re-join.
            ctx.scheduler.cancel(&channel);
            ctx.gateway.join(&channel, key);
            ctx.view.open(&channel, PanelKind::Channel);
            debug!(channel = %channel, "join requested");
        }

        Ok(())
    }
}
