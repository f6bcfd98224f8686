//! QUIT command handler.

use crate::error::HandlerResult;
use crate::handlers::core::context::{Context, Handler};
use crate::handlers::helpers::optional_text;
use crate::input::Args;

pub struct QuitHandler;

impl Handler for QuitHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let rest = args.rest();
        ctx.gateway.quit(optional_text(&rest));
        Ok(())
    }
}
