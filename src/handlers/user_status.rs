//! AWAY handler.

use crate::error::HandlerResult;
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;

/// `/away [message]`. Without a message the away status is cleared.
pub struct AwayHandler;

impl Handler for AwayHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        if args.is_empty() {
            ctx.gateway.raw("AWAY");
        } else {
            ctx.gateway.raw(&format!("AWAY :{}", args.rest()));
        }
        Ok(())
    }
}
