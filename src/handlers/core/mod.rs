//! Core handler infrastructure: context, registry and dispatch.

pub mod context;
pub mod dispatcher;
pub mod fallback;
pub mod registry;
