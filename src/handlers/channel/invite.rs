//! INVITE command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;

/// `/invite <nick>` into the active channel.
pub struct InviteHandler;

impl Handler for InviteHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let nick = args
            .next_arg()
            .ok_or(HandlerError::NeedMoreParams("invite <nick>"))?;

        let panel = ctx.active();
        if !panel.is_channel() {
            return Err(HandlerError::NotOnChannel);
        }

        ctx.gateway.raw(&format!("INVITE {nick} {}", panel.name));
        ctx.status(
            "channel_has_been_invited",
            format!("{nick} has been invited to {}", panel.name),
        );
        Ok(())
    }
}
