//! Default value functions for configuration.

use crate::alias::DEFAULT_MAX_DEPTH;
use crate::gateway::DEFAULT_PORT;
use crate::session::DEFAULT_CHANTYPES;

pub fn default_nick() -> String {
    "slirc".to_string()
}

pub fn default_command_prefix() -> char {
    '/'
}

pub fn default_max_alias_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

pub fn default_cycle_rejoin_delay_ms() -> u64 {
    1000
}

pub fn default_chantypes() -> String {
    DEFAULT_CHANTYPES.to_string()
}

pub fn default_restrict_server_port() -> u16 {
    DEFAULT_PORT
}
