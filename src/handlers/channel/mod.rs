//! Channel command handlers.
//!
//! Handles JOIN, PART, CYCLE, TOPIC, KICK and INVITE.

mod common;
mod cycle;
mod invite;
mod join;
mod kick;
mod part;
mod topic;

pub use cycle::CycleHandler;
pub use invite::InviteHandler;
pub use join::JoinHandler;
pub use kick::KickHandler;
pub use part::PartHandler;
pub use topic::TopicHandler;
