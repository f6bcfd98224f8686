//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::alias::split_head;
use crate::casemap::irc_to_lower;
use thiserror::Error;

/// Upper bound accepted for `client.max_alias_depth`.
pub const MAX_ALIAS_DEPTH_LIMIT: usize = 64;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("client.nick is required")]
    MissingNick,
    #[error("client.nick must not contain whitespace: '{0}'")]
    InvalidNick(String),
    #[error("client.command_prefix must not be whitespace")]
    InvalidPrefix,
    #[error("client.max_alias_depth must be between 1 and 64, got {0}")]
    InvalidAliasDepth(usize),
    #[error("client.chantypes is required")]
    MissingChantypes,
    #[error("connection.restrict_server must not be empty")]
    EmptyRestrictServer,
    #[error("alias '{0}' must start with the command prefix and contain no whitespace")]
    InvalidAliasName(String),
    #[error("alias '{0}' expands to itself")]
    SelfReferencingAlias(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let client = &config.client;

    if client.nick.is_empty() {
        errors.push(ValidationError::MissingNick);
    } else if client.nick.contains(char::is_whitespace) {
        errors.push(ValidationError::InvalidNick(client.nick.clone()));
    }

    if client.command_prefix.is_whitespace() {
        errors.push(ValidationError::InvalidPrefix);
    }

    if client.max_alias_depth == 0 || client.max_alias_depth > MAX_ALIAS_DEPTH_LIMIT {
        errors.push(ValidationError::InvalidAliasDepth(client.max_alias_depth));
    }

    if client.chantypes.is_empty() {
        errors.push(ValidationError::MissingChantypes);
    }

    if config
        .connection
        .restrict_server
        .as_deref()
        .is_some_and(|s| s.trim().is_empty())
    {
        errors.push(ValidationError::EmptyRestrictServer);
    }

    for (name, rule) in &config.aliases {
        let valid_name = name.starts_with(client.command_prefix)
            && name.len() > client.command_prefix.len_utf8()
            && !name.contains(char::is_whitespace);
        if !valid_name {
            errors.push(ValidationError::InvalidAliasName(name.clone()));
            continue;
        }
        let (head, _) = split_head(rule);
        if irc_to_lower(head) == irc_to_lower(name) {
            errors.push(ValidationError::SelfReferencingAlias(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
