//! ACTION (`/me`) command handler.

use crate::error::HandlerResult;
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use crate::view::{Line, Style};

/// `/action <text>` in the active channel or query.
pub struct ActionHandler;

impl Handler for ActionHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let panel = ctx.active();
        if panel.is_server() || panel.is_applet() {
            return Ok(());
        }

        let text = args.rest();
        ctx.view.append(
            &panel.name,
            Line::new(ctx.session.nick.as_str(), text.as_str(), Style::Action),
        );
        ctx.gateway.action(&panel.name, &text);
        Ok(())
    }
}
