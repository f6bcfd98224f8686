//! IGNORE and UNIGNORE handlers.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use crate::mask::UserMask;

fn parse_mask(input: &str) -> Result<UserMask, HandlerError> {
    UserMask::parse(input).map_err(|reason| HandlerError::InvalidMask {
        mask: input.to_string(),
        reason,
    })
}

/// `/ignore [mask]`: list ignored masks, or ignore a new one.
pub struct IgnoreHandler;

impl Handler for IgnoreHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let Some(input) = args.next_arg() else {
            let list = ctx.session.ignore_list();
            if list.is_empty() {
                ctx.status("ignore_none", "Not ignoring anybody");
            } else {
                ctx.status("ignore_title", "Ignoring:");
                for mask in list {
                    ctx.status("ignored_pattern", mask.to_string());
                }
            }
            return Ok(());
        };

        let mask = parse_mask(input)?;
        let text = format!("Ignoring {mask}");
        ctx.session.ignore(mask);
        ctx.status("ignore_nick", text);
        Ok(())
    }
}

/// `/unignore <mask>`
pub struct UnignoreHandler;

impl Handler for UnignoreHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let Some(input) = args.next_arg() else {
            ctx.status(
                "ignore_stop_notice",
                format!("Specify which user to stop ignoring, e.g. {}unignore bob", ctx.prefix()),
            );
            return Ok(());
        };

        let mask = parse_mask(input)?;
        ctx.session.unignore(&mask);
        ctx.status("ignore_stopped", format!("Stopped ignoring {mask}"));
        Ok(())
    }
}
