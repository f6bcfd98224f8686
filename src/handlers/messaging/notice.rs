//! NOTICE command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;

const USAGE: &str = "notice <target> <text>";

pub struct NoticeHandler;

impl Handler for NoticeHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let target = args.next_arg().ok_or(HandlerError::NeedMoreParams(USAGE))?;
        if args.is_empty() {
            return Err(HandlerError::NeedMoreParams(USAGE));
        }

        ctx.gateway.notice(target, &args.rest());
        Ok(())
    }
}
