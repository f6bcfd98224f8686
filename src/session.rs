//! Per-connection client state visible to command handlers.

use crate::mask::UserMask;

/// Default channel type characters (ISUPPORT `CHANTYPES`).
pub const DEFAULT_CHANTYPES: &str = "#&";

#[derive(Debug, Clone)]
pub struct Session {
    /// Our current nickname.
    pub nick: String,
    chantypes: String,
    ignore_list: Vec<UserMask>,
}

impl Session {
    pub fn new(nick: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            chantypes: DEFAULT_CHANTYPES.to_string(),
            ignore_list: Vec::new(),
        }
    }

    pub fn with_chantypes(mut self, chantypes: impl Into<String>) -> Self {
        self.chantypes = chantypes.into();
        self
    }

    pub fn chantypes(&self) -> &str {
        &self.chantypes
    }

    /// Whether `name` starts with one of the channel type characters.
    pub fn is_channel_name(&self, name: &str) -> bool {
        name.chars()
            .next()
            .is_some_and(|c| self.chantypes.contains(c))
    }

    /// `name` as a channel, adding the first channel type when it has none.
    pub fn channel_name(&self, name: &str) -> String {
        if self.is_channel_name(name) {
            name.to_string()
        } else {
            let sigil = self.chantypes.chars().next().unwrap_or('#');
            format!("{sigil}{name}")
        }
    }

    pub fn ignore_list(&self) -> &[UserMask] {
        &self.ignore_list
    }

    /// Add a mask unless an identical one is already present.
    pub fn ignore(&mut self, mask: UserMask) -> bool {
        if self.ignore_list.iter().any(|m| m.same_pattern(&mask)) {
            return false;
        }
        self.ignore_list.push(mask);
        true
    }

    /// Remove every entry with the same pattern. Returns whether any was removed.
    pub fn unignore(&mut self, mask: &UserMask) -> bool {
        let before = self.ignore_list.len();
        self.ignore_list.retain(|m| !m.same_pattern(mask));
        self.ignore_list.len() != before
    }

    pub fn is_ignored(&self, hostmask: &str) -> bool {
        self.ignore_list.iter().any(|m| m.matches(hostmask))
    }
}
