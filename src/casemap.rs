//! Name folding shared by the alias table, the panel list, the scheduler and
//! the ignore list.
//!
//! Servers treat `[]\~` as the upper case of `{}|^`, so a user typing
//! `/join #Chan[1]` while `#chan{1}` is open means the same window, and a
//! pending re-join for one is cancelled by a part of the other.

/// Fold one character the way an RFC 1459 server would.
#[inline]
pub const fn irc_lower_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => c.to_ascii_lowercase(),
        _ => c,
    }
}

/// Folded form of a name, used as a map key (aliases, deferred tasks).
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(irc_lower_char).collect()
}

/// Compare two names without allocating; used for panel lookup.
pub fn irc_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .chars()
            .zip(b.chars())
            .all(|(x, y)| irc_lower_char(x) == irc_lower_char(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_and_task_keys_fold() {
        assert_eq!(irc_to_lower("/J"), "/j");
        assert_eq!(irc_to_lower("#Chan[1]"), "#chan{1}");
        assert_eq!(irc_to_lower("Away\\Nick~"), "away|nick^");
    }

    #[test]
    fn panel_names_compare_folded() {
        assert!(irc_eq("#Foo[x]", "#foo{X}"));
        assert!(irc_eq("Bob", "bob"));
        assert!(!irc_eq("#foo", "#foobar"));
        assert!(!irc_eq("#foo", "&foo"));
    }
}
