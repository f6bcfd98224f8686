//! ALIAS handler.

use crate::error::HandlerResult;
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use crate::view::Line;
use tracing::debug;

/// `/alias`                 list aliases in the server panel
/// `/alias del <name>`      remove an alias
/// `/alias <name> <rule>`   add or replace an alias
pub struct AliasHandler;

impl Handler for AliasHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let (Some(first), Some(second)) = (args.get(0), args.get(1)) else {
            for (name, rule) in ctx.aliases.list() {
                ctx.view
                    .append_server(Line::status("list_aliases", format!("{name}   =>   {rule}")));
            }
            return Ok(());
        };

        if first == "del" || first == "delete" {
            if ctx.aliases.remove(second).is_some() {
                debug!(alias = %second, "alias removed");
            }
            return Ok(());
        }

        args.next_arg();
        let rule = args.rest();
        ctx.aliases.set(first, &rule)?;
        debug!(alias = %first, rule = %rule, "alias set");
        Ok(())
    }
}
