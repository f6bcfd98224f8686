//! PART command handler.

use super::common::parse_channel_list;
use crate::error::HandlerResult;
use crate::handlers::core::context::{Context, Handler};
use crate::handlers::helpers::optional_text;
use crate::input::Args;

/// `/part [<channel>[,<channel>...] [reason]]`
///
/// With no parameters the active channel is left. Names missing a channel
/// type get the first configured one, as for `/join`.
pub struct PartHandler;

impl Handler for PartHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let Some(channels) = args.next_arg() else {
            let active = ctx.active();
            if active.is_channel() {
                ctx.scheduler.cancel(&active.name);
                ctx.gateway.part(&active.name, None);
            }
            return Ok(());
        };

        let rest = args.rest();
        let reason = optional_text(&rest);
        for name in parse_channel_list(channels) {
            let channel = ctx.session.channel_name(name);
            ctx.scheduler.cancel(&channel);
            ctx.gateway.part(&channel, reason);
        }

        Ok(())
    }
}
