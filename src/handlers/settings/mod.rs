//! Client-local state commands.
//!
//! Handles SET, SAVE, ALIAS, IGNORE and UNIGNORE. None of these talk to the
//! server.

mod alias;
mod ignore;
mod set;

pub use alias::AliasHandler;
pub use ignore::{IgnoreHandler, UnignoreHandler};
pub use set::{SaveHandler, SetHandler};
