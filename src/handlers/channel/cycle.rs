//! CYCLE command handler.

use crate::error::HandlerResult;
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use crate::view::PanelKind;
use std::sync::Arc;

/// `/cycle [channel]`: part, then re-join after a short delay.
///
/// The re-join is keyed by channel in the scheduler, so cycling again, or
/// an explicit join or part of the same channel, supersedes it.
pub struct CycleHandler;

impl Handler for CycleHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let channel = match args.next_arg() {
            Some(name) => ctx.session.channel_name(name),
            None => {
                let active = ctx.active();
                if !active.is_channel() {
                    return Ok(());
                }
                active.name
            }
        };

        ctx.gateway.part(&channel, None);

        let gateway = Arc::clone(ctx.gateway);
        let view = Arc::clone(ctx.view);
        let rejoin = channel.clone();
        ctx.scheduler
            .schedule(&channel, ctx.config.client.cycle_rejoin_delay(), move || {
                gateway.join(&rejoin, None);
                view.open(&rejoin, PanelKind::Channel);
            });

        Ok(())
    }
}
