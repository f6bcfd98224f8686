//! User-editable alias table and recursive expansion.
//!
//! An alias maps a prefixed name (`/j`) to a template (`/join $1+`). Input
//! whose first token names an alias is rewritten, and the result is examined
//! again so aliases may chain. Chains are capped at [`AliasTable::max_depth`]
//! steps; a longer chain is treated as a cycle and the input is left alone.

mod defaults;
mod expand;

pub use defaults::DEFAULT_ALIASES;
pub use expand::{split_head, substitute};

use crate::casemap::irc_to_lower;
use crate::error::AliasError;
use std::collections::BTreeMap;
use tracing::{trace, warn};

/// Default cap on alias chain length.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Mapping from prefixed alias name to expansion template.
#[derive(Debug, Clone)]
pub struct AliasTable {
    prefix: char,
    rules: BTreeMap<String, String>,
    max_depth: usize,
}

impl AliasTable {
    /// Create an empty table.
    pub fn new(prefix: char) -> Self {
        Self {
            prefix,
            rules: BTreeMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a table seeded with [`DEFAULT_ALIASES`].
    pub fn with_defaults(prefix: char) -> Self {
        let mut table = Self::new(prefix);
        for (name, rule) in DEFAULT_ALIASES {
            table
                .rules
                .insert(format!("{prefix}{name}"), format!("{prefix}{rule}"));
        }
        table
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, depth: usize) {
        self.max_depth = depth;
    }

    /// Canonical key for `name`: prefixed and case-folded.
    pub fn normalize_name(&self, name: &str) -> String {
        let name = name.trim();
        if name.starts_with(self.prefix) {
            irc_to_lower(name)
        } else {
            irc_to_lower(&format!("{}{}", self.prefix, name))
        }
    }

    /// Add or replace an alias, returning the rule it replaced.
    pub fn set(&mut self, name: &str, rule: &str) -> Result<Option<String>, AliasError> {
        let key = self.normalize_name(name);
        if key.len() <= self.prefix.len_utf8() {
            return Err(AliasError::EmptyName);
        }

        let (head, _) = split_head(rule);
        if irc_to_lower(head) == key {
            return Err(AliasError::SelfReference(key));
        }

        Ok(self.rules.insert(key, rule.trim().to_string()))
    }

    /// Remove an alias, with or without its prefix.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let key = self.normalize_name(name);
        self.rules.remove(&key)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.rules.get(&self.normalize_name(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All aliases ordered by name.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.rules
            .iter()
            .map(|(name, rule)| (name.as_str(), rule.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Expand `input` until its head is no longer an alias.
    ///
    /// Fails with [`AliasError::DepthExceeded`] once more than
    /// [`max_depth`](Self::max_depth) rewrites would be needed.
    pub fn try_expand(&self, input: &str, channel: &str) -> Result<String, AliasError> {
        let mut current = input.to_string();
        let mut depth = 0;

        loop {
            let (head, params) = split_head(&current);
            if !head.starts_with(self.prefix) {
                return Ok(current);
            }
            let Some(rule) = self.rules.get(&irc_to_lower(head)) else {
                return Ok(current);
            };

            if depth == self.max_depth {
                return Err(AliasError::DepthExceeded {
                    alias: head.to_string(),
                    depth,
                });
            }

            let next = substitute(rule, &params, channel);
            trace!(alias = %head, expanded = %next, depth, "alias expanded");
            current = next;
            depth += 1;
        }
    }

    /// Expand `input`, falling back to the literal input on a cycle.
    pub fn expand(&self, input: &str, channel: &str) -> String {
        match self.try_expand(input, channel) {
            Ok(expanded) => expanded,
            Err(e) => {
                warn!(input = %input, error = %e, "alias expansion aborted");
                input.to_string()
            }
        }
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::with_defaults('/')
    }
}
