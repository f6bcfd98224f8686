//! Input line tokenizer and the per-dispatch command event.
//!
//! Handlers read their arguments through [`Args`], a cursor over the
//! event's immutable parameter list.

/// A tokenized command line: lowercase command name without prefix, plus
/// whitespace-separated parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEvent {
    pub command: String,
    pub params: Vec<String>,
}

impl CommandEvent {
    pub fn new(command: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            command: command.into(),
            params,
        }
    }
}

/// Result of tokenizing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `/command params...`
    Command(CommandEvent),
    /// Plain text for the active conversation.
    Text(String),
}

/// Tokenize `line`.
///
/// Returns `None` for a blank line. A doubled prefix (`//text`) escapes the
/// prefix and yields plain text starting with a single prefix character.
pub fn parse(line: &str, prefix: char) -> Option<Input> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some(body) = trimmed.strip_prefix(prefix) else {
        return Some(Input::Text(trimmed.to_string()));
    };

    if body.starts_with(prefix) {
        return Some(Input::Text(body.to_string()));
    }

    let mut tokens = body.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let params = tokens.map(str::to_string).collect();
    Some(Input::Command(CommandEvent { command, params }))
}

/// Cursor over a command's parameters.
#[derive(Debug, Clone)]
pub struct Args<'a> {
    command: &'a str,
    params: &'a [String],
    pos: usize,
}

impl<'a> Args<'a> {
    pub fn new(event: &'a CommandEvent) -> Self {
        Self {
            command: &event.command,
            params: &event.params,
            pos: 0,
        }
    }

    /// The command name this event was dispatched under.
    pub fn command(&self) -> &'a str {
        self.command
    }

    /// Consume and return the next parameter.
    pub fn next_arg(&mut self) -> Option<&'a str> {
        let arg = self.params.get(self.pos)?;
        self.pos += 1;
        Some(arg)
    }

    /// Look at the next parameter without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.get(0)
    }

    /// Parameter `n` positions past the cursor.
    pub fn get(&self, n: usize) -> Option<&'a str> {
        self.params.get(self.pos + n).map(String::as_str)
    }

    /// Parameters not consumed yet.
    pub fn remaining(&self) -> &'a [String] {
        &self.params[self.pos.min(self.params.len())..]
    }

    /// Every parameter, ignoring the cursor.
    pub fn all(&self) -> &'a [String] {
        self.params
    }

    pub fn len(&self) -> usize {
        self.remaining().len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Unconsumed parameters joined by single spaces.
    pub fn rest(&self) -> String {
        self.remaining().join(" ")
    }
}
