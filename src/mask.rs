//! Ignore-list hostmasks.
//!
//! A user mask is `nick!ident@host` with `*` and `?` wildcards. Partial input
//! such as `bob` or `*@example.com` is widened with `*` for the missing parts.

use crate::casemap::irc_eq;
use crate::error::MaskError;
use regex::Regex;
use std::fmt;

#[derive(Debug, Clone)]
pub struct UserMask {
    mask: String,
    matcher: Regex,
}

impl UserMask {
    /// Build a mask from user input.
    pub fn parse(input: &str) -> Result<Self, MaskError> {
        let input = input.trim();
        if input.matches('@').count() > 1 {
            return Err(MaskError::ExtraAt);
        }
        let (left, host) = match input.rsplit_once('@') {
            Some((left, host)) => (left, host),
            None => (input, ""),
        };
        let (nick, ident) = match left.split_once('!') {
            Some((_, ident)) if ident.contains('!') => return Err(MaskError::ExtraBang),
            Some((nick, ident)) => (nick, ident),
            None => (left, ""),
        };

        let mask = format!("{}!{}@{}", or_star(nick), or_star(ident), or_star(host));
        let pattern = regex::escape(&mask).replace(r"\*", ".*").replace(r"\?", ".");
        let matcher = Regex::new(&format!("(?i)^{pattern}$"))?;

        Ok(Self { mask, matcher })
    }

    pub fn as_str(&self) -> &str {
        &self.mask
    }

    /// Whether a full `nick!ident@host` matches.
    pub fn matches(&self, hostmask: &str) -> bool {
        self.matcher.is_match(hostmask)
    }

    /// Whether two masks are the same pattern.
    pub fn same_pattern(&self, other: &UserMask) -> bool {
        irc_eq(&self.mask, &other.mask)
    }
}

impl fmt::Display for UserMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mask)
    }
}

fn or_star(part: &str) -> &str {
    if part.is_empty() { "*" } else { part }
}
