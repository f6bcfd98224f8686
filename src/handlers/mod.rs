//! Client command handlers.
//!
//! Every built-in command is a unit struct implementing [`Handler`],
//! registered by name in [`Registry::new`]. Handlers read their arguments
//! through an [`Args`](crate::input::Args) cursor and reach the outside world
//! only through the [`Context`] they are given.

mod channel;
mod connection;
pub mod core;
mod helpers;
mod messaging;
mod misc;
mod settings;
mod user_query;
mod user_status;

pub use self::core::context::{BoxedHandler, Context, FnHandler, Handler};
pub use self::core::dispatcher::{Dispatch, Dispatcher};
pub use self::core::fallback::{TraceObserver, UnknownCommandHandler};
pub use self::core::registry::Registry;

pub use channel::{CycleHandler, InviteHandler, JoinHandler, KickHandler, PartHandler, TopicHandler};
pub use connection::{EncodingHandler, NickHandler, QuitHandler, QuoteHandler, ServerHandler};
pub use messaging::{ActionHandler, CtcpHandler, MsgHandler, NoticeHandler, QueryHandler};
pub use misc::ClearHandler;
pub use settings::{AliasHandler, IgnoreHandler, SaveHandler, SetHandler, UnignoreHandler};
pub use user_query::{WhoisHandler, WhowasHandler};
pub use user_status::AwayHandler;
