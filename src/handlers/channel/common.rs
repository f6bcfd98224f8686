//! Parsing helpers shared by the channel commands.

/// Split a comma-separated channel list, dropping empty entries.
pub fn parse_channel_list(channels: &str) -> Vec<&str> {
    channels
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split `/join` input into `(channel, key)` pairs.
///
/// The whole parameter string is split on `,` first, so both
/// `#a,#b` and `#a key, #b` are accepted.
pub fn parse_join_targets(input: &str) -> Vec<(&str, Option<&str>)> {
    input
        .split(',')
        .filter_map(|part| {
            let mut words = part.split_whitespace();
            let channel = words.next()?;
            Some((channel, words.next()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_list() {
        assert_eq!(parse_channel_list("#foo,#bar"), vec!["#foo", "#bar"]);
        assert_eq!(parse_channel_list(" #foo , ,#bar,"), vec!["#foo", "#bar"]);
        assert!(parse_channel_list("").is_empty());
    }

    #[test]
    fn join_targets() {
        assert_eq!(
            parse_join_targets("#a,#b"),
            vec![("#a", None), ("#b", None)]
        );
        assert_eq!(
            parse_join_targets("#a secret, #b"),
            vec![("#a", Some("secret")), ("#b", None)]
        );
        assert_eq!(parse_join_targets(" , "), vec![]);
    }
}
