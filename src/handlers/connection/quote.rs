//! QUOTE command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;

/// `/quote <line>`: send a line to the server untouched.
pub struct QuoteHandler;

impl Handler for QuoteHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        if args.is_empty() {
            return Err(HandlerError::NeedMoreParams("quote <raw line>"));
        }
        ctx.gateway.raw(&args.rest());
        Ok(())
    }
}
