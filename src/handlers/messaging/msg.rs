//! MSG command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use crate::view::{Line, Style};

const USAGE: &str = "msg <target> <text>";

/// `/msg <target> <text>`
///
/// Plain text typed into a channel or query arrives here too, as
/// `msg <panel> <text>`. The message is echoed into the target's panel, or
/// the server panel when there is none.
pub struct MsgHandler;

impl Handler for MsgHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let target = args.next_arg().ok_or(HandlerError::NeedMoreParams(USAGE))?;
        let text = args.rest();
        if text.is_empty() {
            return Err(HandlerError::NeedMoreParams(USAGE));
        }

        ctx.view.append(
            target,
            Line::new(ctx.session.nick.as_str(), text.as_str(), Style::Privmsg),
        );
        ctx.gateway.privmsg(target, &text);
        Ok(())
    }
}
