//! Connection command handlers.
//!
//! Handles NICK, QUIT, QUOTE, SERVER and ENCODING.

mod encoding;
mod nick;
mod quit;
mod quote;
mod server;

pub use encoding::EncodingHandler;
pub use nick::NickHandler;
pub use quit::QuitHandler;
pub use quote::QuoteHandler;
pub use server::ServerHandler;
