//! Default observer and fallback handlers.

use super::context::{Context, Handler};
use crate::error::HandlerResult;
use crate::input::Args;
use tracing::trace;

/// Fallback for commands with no binding: forward the line to the server
/// verbatim and let it answer with its own error if it does not know it.
pub struct UnknownCommandHandler;

impl Handler for UnknownCommandHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let line = if args.is_empty() {
            args.command().to_string()
        } else {
            format!("{} {}", args.command(), args.rest())
        };
        ctx.gateway.raw(&line);
        Ok(())
    }
}

/// Observer run before routing for every command. Does nothing but trace.
pub struct TraceObserver;

impl Handler for TraceObserver {
    fn handle(&self, _ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        trace!(command = %args.command(), params = args.len(), "observed command");
        Ok(())
    }
}
