//! QUERY command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use crate::view::{Line, PanelKind, Style};

/// `/query <nick> [text]`: open a private conversation, optionally
/// sending a first message.
pub struct QueryHandler;

impl Handler for QueryHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let target = args
            .next_arg()
            .ok_or(HandlerError::NeedMoreParams("query <nick> [text]"))?;

        let panel = ctx.view.open(target, PanelKind::Query);

        let text = args.rest();
        if !text.is_empty() {
            ctx.gateway.privmsg(&panel.name, &text);
            ctx.view.append(
                &panel.name,
                Line::new(ctx.session.nick.as_str(), text, Style::Privmsg),
            );
        }
        Ok(())
    }
}
