//! TOPIC command handler.

use crate::error::HandlerResult;
use crate::handlers::core::context::{Context, Handler};
use crate::handlers::helpers::optional_text;
use crate::input::Args;

/// `/topic [channel] [text]`
///
/// Without a leading channel name the active panel is used. Without text
/// the server is asked for the current topic.
pub struct TopicHandler;

impl Handler for TopicHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let Some(first) = args.peek() else {
            return Ok(());
        };

        let channel = if ctx.session.is_channel_name(first) {
            args.next_arg();
            first.to_string()
        } else {
            ctx.active().name
        };

        let text = args.rest();
        ctx.gateway.topic(&channel, optional_text(&text));
        Ok(())
    }
}
