//! SET and SAVE handlers.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use crate::settings::SettingValue;

/// `/set <name> [value]`: show or change a setting.
pub struct SetHandler;

impl Handler for SetHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let name = args
            .next_arg()
            .ok_or(HandlerError::NeedMoreParams("set <name> [value]"))?;

        if !args.is_empty() {
            ctx.settings.set(name, SettingValue::parse(&args.rest()));
        }

        let text = match ctx.settings.get(name) {
            Some(value) => format!("{name} = {value}"),
            None => format!("{name} is not set"),
        };
        ctx.status("set_setting", text);
        Ok(())
    }
}

/// `/save`: persist settings.
pub struct SaveHandler;

impl Handler for SaveHandler {
    fn handle(&self, ctx: &mut Context<'_>, _args: &mut Args<'_>) -> HandlerResult {
        ctx.settings.save()?;
        ctx.status("settings_saved", "Settings have been saved");
        Ok(())
    }
}
