//! NICK command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;

/// `/nick <nick>`. The session nick changes once the server confirms.
pub struct NickHandler;

impl Handler for NickHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let nick = args
            .next_arg()
            .ok_or(HandlerError::NeedMoreParams("nick <nick>"))?;
        ctx.gateway.nick(nick);
        Ok(())
    }
}
