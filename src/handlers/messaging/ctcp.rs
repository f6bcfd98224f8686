//! CTCP command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::handlers::helpers::optional_text;
use crate::input::Args;

const USAGE: &str = "ctcp <target> <type> [args]";

/// `/ctcp <target> <type> [args]`, e.g. `/ctcp bob version`.
pub struct CtcpHandler;

impl Handler for CtcpHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let target = args.next_arg().ok_or(HandlerError::NeedMoreParams(USAGE))?;
        let kind = args.next_arg().ok_or(HandlerError::NeedMoreParams(USAGE))?;

        let rest = args.rest();
        ctx.gateway.ctcp(target, kind, optional_text(&rest));
        Ok(())
    }
}
