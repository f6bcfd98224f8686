//! SERVER command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::gateway::{ConnectRequest, DEFAULT_PORT};
use crate::handlers::core::context::{Context, Handler};
use crate::input::Args;
use tracing::info;

/// `/server <host>[:[+]port] [password]` or `/server <host> [[+]port] [password]`
///
/// A `+` before the port asks for TLS. The current nick is reused. With a
/// restricted connection every target is refused and the bare command names
/// the allowed one.
pub struct ServerHandler;

impl Handler for ServerHandler {
    fn handle(&self, ctx: &mut Context<'_>, args: &mut Args<'_>) -> HandlerResult {
        let restricted = ctx.config.connection.restricted_target();

        let Some(first) = args.next_arg() else {
            if let Some(target) = restricted {
                ctx.status(
                    "server_restricted",
                    format!("Connections are restricted to {target}"),
                );
                return Ok(());
            }
            ctx.status(
                "server_usage",
                format!(
                    "Usage: {}server <host>[:[+]port] [password]",
                    ctx.prefix()
                ),
            );
            return Ok(());
        };

        if let Some(target) = restricted {
            return Err(HandlerError::ServerRestricted(target));
        }

        let mut request = parse_target(first, args);
        request.nick = ctx.session.nick.clone();

        ctx.status(
            "server_connecting",
            format!("Connecting to {}:{}...", request.host, request.port),
        );
        info!(host = %request.host, port = request.port, tls = request.tls, "connecting");
        ctx.gateway.connect(request);
        Ok(())
    }
}

/// Build a connect request from the host parameter and whatever follows.
fn parse_target(first: &str, args: &mut Args<'_>) -> ConnectRequest {
    let (host, port) = match first.split_once(':') {
        Some((host, port)) if !host.is_empty() => (host, Some(port)),
        _ => (first, args.next_arg()),
    };
    let password = args.next_arg().map(str::to_string);

    let (tls, port) = match port {
        Some(p) => match p.strip_prefix('+') {
            Some(p) => (true, p),
            None => (false, p),
        },
        None => (false, ""),
    };
    let port = port
        .parse::<u16>()
        .ok()
        .filter(|p| *p != 0)
        .unwrap_or(DEFAULT_PORT);

    ConnectRequest {
        host: host.to_string(),
        port,
        tls,
        nick: String::new(),
        password,
    }
}
