//! KICK command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::handlers::helpers::optional_text;
use crate::input::Args;

const USAGE: &str = "kick [channel] <nick> [reason]";

/// `/kick [channel] <nick> [reason]`
///
/// Without a leading channel name the active panel must be a channel. The
/// `/k` alias always supplies `$channel`.
pub struct KickHandler;

impl Handler for KickHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let channel = match args.peek() {
            Some(first) if ctx.session.is_channel_name(first) => {
                args.next_arg();
                first.to_string()
            }
            _ => {
                let panel = ctx.active();
                if !panel.is_channel() {
                    return Err(HandlerError::NotOnChannel);
                }
                panel.name
            }
        };

        let nick = args.next_arg().ok_or(HandlerError::NeedMoreParams(USAGE))?;
        let rest = args.rest();

        ctx.gateway.kick(&channel, nick, optional_text(&rest));
        Ok(())
    }
}
