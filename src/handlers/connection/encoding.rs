//! ENCODING command handler.

use crate::error::HandlerResult;
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use encoding_rs::Encoding;

/// `/encoding <label>`: switch the connection's character encoding.
///
/// Labels are resolved the way browsers resolve them, so `latin1` becomes
/// `windows-1252`.
pub struct EncodingHandler;

impl Handler for EncodingHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let Some(label) = args.next_arg() else {
            ctx.status("encoding_notspecified", "Encoding not specified");
            ctx.status(
                "encoding_usage",
                format!("Usage: {}encoding <label>, e.g. utf-8", ctx.prefix()),
            );
            return Ok(());
        };

        match Encoding::for_label(label.as_bytes()) {
            Some(encoding) => {
                ctx.gateway.set_encoding(encoding.name());
                ctx.status(
                    "encoding_changed",
                    format!("Encoding changed to {}", encoding.name()),
                );
            }
            None => {
                ctx.status("encoding_invalid", format!("{label} is not a valid encoding"));
            }
        }
        Ok(())
    }
}
