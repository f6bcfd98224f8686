//! slirc-commands - command interpreter for the Straylight IRC client.
//!
//! Turns lines typed into the input box into outbound IRC requests and
//! local panel updates: user aliases are expanded, the result is tokenized,
//! and the command is routed to a registered handler or a raw-forwarding
//! fallback.

pub mod alias;
pub mod casemap;
pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod input;
pub mod mask;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod telemetry;
pub mod view;

pub use alias::AliasTable;
pub use config::Config;
pub use error::{AliasError, HandlerError, HandlerResult, SettingsError};
pub use gateway::{ChannelGateway, ConnectRequest, Gateway, Outbound};
pub use handlers::{Context, Dispatch, Dispatcher, Handler, Registry};
pub use input::{Args, CommandEvent};
pub use view::{Line, Panel, PanelKind, PanelList, View};
