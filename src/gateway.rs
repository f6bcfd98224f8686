//! Transport gateway seam.
//!
//! Handlers never talk to a socket. They hand [`Outbound`] requests to a
//! [`Gateway`], which is fire-and-forget: nothing is returned and delivery
//! failures are the gateway's own concern.

use std::fmt;
use tokio::sync::mpsc;
use tracing::warn;

/// Default plaintext IRC port.
pub const DEFAULT_PORT: u16 = 6667;

/// Parameters for opening a new network connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectRequest {
    pub host: String,
    pub port: u16,
    pub tls: bool,
    pub nick: String,
    pub password: Option<String>,
}

/// A request for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Privmsg { target: String, text: String },
    Action { target: String, text: String },
    Notice { target: String, text: String },
    Join { channel: String, key: Option<String> },
    Part { channel: String, reason: Option<String> },
    Nick(String),
    Topic { channel: String, text: Option<String> },
    Kick { channel: String, nick: String, reason: Option<String> },
    Quit(Option<String>),
    Ctcp { target: String, kind: String, args: Option<String> },
    Raw(String),
    Connect(ConnectRequest),
    SetEncoding(String),
}

impl Outbound {
    /// The IRC line this request puts on the wire, if it is a protocol
    /// message at all. Connection and encoding changes are not.
    pub fn wire_line(&self) -> Option<String> {
        let line = match self {
            Self::Privmsg { target, text } => format!("PRIVMSG {target} :{text}"),
            Self::Action { target, text } => format!("PRIVMSG {target} :\x01ACTION {text}\x01"),
            Self::Notice { target, text } => format!("NOTICE {target} :{text}"),
            Self::Join { channel, key: Some(key) } => format!("JOIN {channel} {key}"),
            Self::Join { channel, key: None } => format!("JOIN {channel}"),
            Self::Part { channel, reason: Some(reason) } => format!("PART {channel} :{reason}"),
            Self::Part { channel, reason: None } => format!("PART {channel}"),
            Self::Nick(nick) => format!("NICK {nick}"),
            Self::Topic { channel, text: Some(text) } => format!("TOPIC {channel} :{text}"),
            Self::Topic { channel, text: None } => format!("TOPIC {channel}"),
            Self::Kick { channel, nick, reason: Some(reason) } => {
                format!("KICK {channel} {nick} :{reason}")
            }
            Self::Kick { channel, nick, reason: None } => format!("KICK {channel} {nick}"),
            Self::Quit(Some(message)) => format!("QUIT :{message}"),
            Self::Quit(None) => "QUIT".to_string(),
            Self::Ctcp { target, kind, args } => {
                let kind = kind.to_ascii_uppercase();
                match args {
                    Some(args) => format!("PRIVMSG {target} :\x01{kind} {args}\x01"),
                    None => format!("PRIVMSG {target} :\x01{kind}\x01"),
                }
            }
            Self::Raw(line) => line.clone(),
            Self::Connect(_) | Self::SetEncoding(_) => return None,
        };
        Some(line)
    }
}

impl fmt::Display for Outbound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.wire_line()) {
            (_, Some(line)) => f.write_str(&line),
            (Self::Connect(req), None) => write!(
                f,
                "connect {}:{}{} as {}",
                req.host,
                if req.tls { "+" } else { "" },
                req.port,
                req.nick
            ),
            (Self::SetEncoding(enc), None) => write!(f, "encoding {enc}"),
            (_, None) => Ok(()),
        }
    }
}

/// Fire-and-forget transport.
///
/// Only [`send`](Gateway::send) is required; the named helpers build the
/// matching [`Outbound`] request.
pub trait Gateway: Send + Sync {
    fn send(&self, command: Outbound);

    fn privmsg(&self, target: &str, text: &str) {
        self.send(Outbound::Privmsg {
            target: target.to_string(),
            text: text.to_string(),
        });
    }

    fn action(&self, target: &str, text: &str) {
        self.send(Outbound::Action {
            target: target.to_string(),
            text: text.to_string(),
        });
    }

    fn notice(&self, target: &str, text: &str) {
        self.send(Outbound::Notice {
            target: target.to_string(),
            text: text.to_string(),
        });
    }

    fn join(&self, channel: &str, key: Option<&str>) {
        self.send(Outbound::Join {
            channel: channel.to_string(),
            key: key.map(str::to_string),
        });
    }

    fn part(&self, channel: &str, reason: Option<&str>) {
        self.send(Outbound::Part {
            channel: channel.to_string(),
            reason: reason.map(str::to_string),
        });
    }

    fn nick(&self, nick: &str) {
        self.send(Outbound::Nick(nick.to_string()));
    }

    fn topic(&self, channel: &str, text: Option<&str>) {
        self.send(Outbound::Topic {
            channel: channel.to_string(),
            text: text.map(str::to_string),
        });
    }

    fn kick(&self, channel: &str, nick: &str, reason: Option<&str>) {
        self.send(Outbound::Kick {
            channel: channel.to_string(),
            nick: nick.to_string(),
            reason: reason.map(str::to_string),
        });
    }

    fn quit(&self, message: Option<&str>) {
        self.send(Outbound::Quit(message.map(str::to_string)));
    }

    fn ctcp(&self, target: &str, kind: &str, args: Option<&str>) {
        self.send(Outbound::Ctcp {
            target: target.to_string(),
            kind: kind.to_string(),
            args: args.map(str::to_string),
        });
    }

    fn raw(&self, line: &str) {
        self.send(Outbound::Raw(line.to_string()));
    }

    fn connect(&self, request: ConnectRequest) {
        self.send(Outbound::Connect(request));
    }

    fn set_encoding(&self, encoding: &str) {
        self.send(Outbound::SetEncoding(encoding.to_string()));
    }
}

/// Gateway that forwards every request into an unbounded tokio channel.
///
/// The receiving half belongs to whatever owns the real connection.
#[derive(Debug, Clone)]
pub struct ChannelGateway {
    tx: mpsc::UnboundedSender<Outbound>,
}

impl ChannelGateway {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Outbound>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Gateway for ChannelGateway {
    fn send(&self, command: Outbound) {
        if let Err(mpsc::error::SendError(command)) = self.tx.send(command) {
            warn!(command = %command, "gateway closed, dropping outbound command");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_lines() {
        let join = Outbound::Join { channel: "#a".into(), key: Some("k".into()) };
        assert_eq!(join.wire_line().as_deref(), Some("JOIN #a k"));

        let action = Outbound::Action { target: "#a".into(), text: "waves".into() };
        assert_eq!(action.wire_line().as_deref(), Some("PRIVMSG #a :\x01ACTION waves\x01"));

        let ctcp = Outbound::Ctcp { target: "bob".into(), kind: "version".into(), args: None };
        assert_eq!(ctcp.wire_line().as_deref(), Some("PRIVMSG bob :\x01VERSION\x01"));

        assert_eq!(Outbound::Quit(None).wire_line().as_deref(), Some("QUIT"));
        assert_eq!(Outbound::SetEncoding("utf-8".into()).wire_line(), None);
    }

    #[test]
    fn connect_display() {
        let req = ConnectRequest {
            host: "irc.example.net".into(),
            port: 6697,
            tls: true,
            nick: "alice".into(),
            password: None,
        };
        assert_eq!(
            Outbound::Connect(req).to_string(),
            "connect irc.example.net:+6697 as alice"
        );
    }

    #[tokio::test]
    async fn channel_gateway_forwards_in_order() {
        let (gateway, mut rx) = ChannelGateway::new();
        gateway.join("#a", None);
        gateway.privmsg("#a", "hi");

        assert_eq!(rx.recv().await, Some(Outbound::Join { channel: "#a".into(), key: None }));
        assert_eq!(
            rx.recv().await,
            Some(Outbound::Privmsg { target: "#a".into(), text: "hi".into() })
        );
    }

    #[test]
    fn closed_gateway_does_not_panic() {
        let (gateway, rx) = ChannelGateway::new();
        drop(rx);
        gateway.quit(Some("bye"));
    }
}
