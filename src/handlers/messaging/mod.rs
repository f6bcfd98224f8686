//! Messaging command handlers.
//!
//! Handles MSG, QUERY, NOTICE, ACTION and CTCP.

mod action;
mod ctcp;
mod msg;
mod notice;
mod query;

pub use action::ActionHandler;
pub use ctcp::CtcpHandler;
pub use msg::MsgHandler;
pub use notice::NoticeHandler;
pub use query::QueryHandler;
