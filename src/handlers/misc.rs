//! Client-local miscellany: CLEAR.

use crate::error::HandlerResult;
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;

/// `/clear`: drop the active panel's scrollback.
///
/// Server and applet panels are left alone.
pub struct ClearHandler;

impl Handler for ClearHandler {
    fn handle(&self, ctx: &mut Context<'_>, _args: &mut Args<'_>) -> HandlerResult {
        let panel = ctx.active();
        if !(panel.is_server() || panel.is_applet()) {
            ctx.view.clear(&panel.name);
        }
        Ok(())
    }
}
