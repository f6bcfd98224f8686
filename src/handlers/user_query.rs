//! User query handlers: WHOIS, WHOWAS.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;

/// The nick parameter, or the active query's nick.
fn query_target(ctx: &Context<'_>, args: &mut Args<'_>) -> Option<String> {
    if let Some(nick) = args.next_arg() {
        return Some(nick.to_string());
    }
    let panel = ctx.active();
    panel.is_query().then_some(panel.name)
}

/// `/whois [nick]`
///
/// The nick is sent twice so the query reaches the target's own server and
/// the reply includes idle time.
pub struct WhoisHandler;

impl Handler for WhoisHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let nick = query_target(ctx, args).ok_or(HandlerError::NeedMoreParams("whois <nick>"))?;
        ctx.gateway.raw(&format!("WHOIS {nick} {nick}"));
        Ok(())
    }
}

/// `/whowas [nick]`
pub struct WhowasHandler;

impl Handler for WhowasHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let nick = query_target(ctx, args).ok_or(HandlerError::NeedMoreParams("whowas <nick>"))?;
        ctx.gateway.raw(&format!("WHOWAS {nick}"));
        Ok(())
    }
}
