//! Helpers shared across command handlers.

/// Trailing free text such as a part reason or topic. Blank text is treated
/// as absent.
pub fn optional_text(text: &str) -> Option<&str> {
    Some(text.trim()).filter(|t| !t.is_empty())
}
