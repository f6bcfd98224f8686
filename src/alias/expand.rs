//! Placeholder substitution for alias templates.
//!
//! Supported placeholders:
//! - `$N`: the Nth parameter (1-based), empty when absent
//! - `$N+`: parameters N..end joined by single spaces
//! - `$channel`: the active context name
//!
//! Any other `$identifier` resolves to an empty string. A `$` that is not
//! followed by a digit or a letter is copied through literally.

/// Split a line into its leading token and the remaining parameter tokens.
pub fn split_head(input: &str) -> (&str, Vec<&str>) {
    let mut tokens = input.split_whitespace();
    let head = tokens.next().unwrap_or("");
    (head, tokens.collect())
}

/// Substitute placeholders in `template`.
pub fn substitute(template: &str, params: &[&str], channel: &str) -> String {
    let mut out = String::with_capacity(template.len() + channel.len());
    let mut chars = template.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some(&(start, d)) if d.is_ascii_digit() => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    end = i + d.len_utf8();
                    chars.next();
                }
                let index: usize = template[start..end].parse().unwrap_or(usize::MAX);

                if matches!(chars.peek(), Some(&(_, '+'))) {
                    chars.next();
                    out.push_str(&rest_from(params, index));
                } else if let Some(param) = index.checked_sub(1).and_then(|i| params.get(i)) {
                    out.push_str(param);
                }
            }
            Some(&(start, l)) if l.is_ascii_alphabetic() => {
                let mut end = start;
                while let Some(&(i, l)) = chars.peek() {
                    if !(l.is_ascii_alphanumeric() || l == '_') {
                        break;
                    }
                    end = i + l.len_utf8();
                    chars.next();
                }
                if &template[start..end] == "channel" {
                    out.push_str(channel);
                }
            }
            _ => out.push('$'),
        }
    }

    out
}

/// `$N+`: everything from the Nth parameter on. `$0+` behaves like `$1+`.
fn rest_from(params: &[&str], index: usize) -> String {
    let skip = index.saturating_sub(1);
    params.iter().skip(skip).copied().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_params() {
        assert_eq!(substitute("/kick $1 $2", &["bob", "bye"], "#c"), "/kick bob bye");
        assert_eq!(substitute("/kick $2", &["bob"], "#c"), "/kick ");
        assert_eq!(substitute("$0", &["bob"], "#c"), "");
    }

    #[test]
    fn rest_params() {
        assert_eq!(substitute("/part $1+", &["#a", "see", "ya"], "#c"), "/part #a see ya");
        assert_eq!(substitute("/part $2+", &["#a", "see", "ya"], "#c"), "/part see ya");
        assert_eq!(substitute("/part $1+", &[], "#c"), "/part ");
        assert_eq!(substitute("/part $9+", &["x"], "#c"), "/part ");
    }

    #[test]
    fn channel_and_unknown_names() {
        assert_eq!(
            substitute("/quote mode $channel +o $1+", &["alice", "bob"], "#rust"),
            "/quote mode #rust +o alice bob"
        );
        assert_eq!(substitute("/msg $nobody hi", &[], "#rust"), "/msg  hi");
    }

    #[test]
    fn multi_digit_index() {
        let params: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = params.iter().map(String::as_str).collect();
        assert_eq!(substitute("$11 $12 $13", &refs, ""), "11 12 ");
    }

    #[test]
    fn literal_dollar() {
        assert_eq!(substitute("/msg $1 costs $ and $-", &["bob"], ""), "/msg bob costs $ and $-");
        assert_eq!(substitute("trailing $", &[], ""), "trailing $");
    }

    #[test]
    fn no_placeholders_ignores_input() {
        assert_eq!(substitute("/away", &["a", "b"], "#c"), "/away");
    }

    #[test]
    fn split_head_tokens() {
        assert_eq!(split_head("  /j   #a  #b "), ("/j", vec!["#a", "#b"]));
        assert_eq!(split_head(""), ("", vec![]));
    }
}
