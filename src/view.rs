//! Display sink and panel directory.
//!
//! The command layer only needs to know which conversation is active, find
//! or open panels by name, and append lines. [`PanelList`] is an in-memory
//! implementation used by the `slirc` binary and the tests.

use crate::casemap::irc_eq;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Server,
    Channel,
    Query,
    Applet,
}

/// A conversation window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub name: String,
    pub kind: PanelKind,
}

impl Panel {
    pub fn new(name: impl Into<String>, kind: PanelKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_server(&self) -> bool {
        self.kind == PanelKind::Server
    }

    pub fn is_channel(&self) -> bool {
        self.kind == PanelKind::Channel
    }

    pub fn is_query(&self) -> bool {
        self.kind == PanelKind::Query
    }

    pub fn is_applet(&self) -> bool {
        self.kind == PanelKind::Applet
    }
}

/// How a line should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Privmsg,
    Action,
    /// Local status output; the key names the kind of notice.
    Status(&'static str),
    Error,
}

/// One line of panel output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub nick: String,
    pub text: String,
    pub style: Style,
    pub at: DateTime<Utc>,
}

impl Line {
    pub fn new(nick: impl Into<String>, text: impl Into<String>, style: Style) -> Self {
        Self {
            nick: nick.into(),
            text: text.into(),
            style,
            at: Utc::now(),
        }
    }

    /// A status line with no speaker.
    pub fn status(key: &'static str, text: impl Into<String>) -> Self {
        Self::new("", text, Style::Status(key))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new("", text, Style::Error)
    }
}

/// Display sink and panel directory.
///
/// Methods take `&self` so implementations can be shared with deferred
/// tasks; they use interior locking.
pub trait View: Send + Sync {
    /// The active panel; its name is the `$channel` context.
    fn active(&self) -> Panel;

    /// The server (status) panel.
    fn server(&self) -> Panel;

    /// Find or create a panel and make it active.
    fn open(&self, name: &str, kind: PanelKind) -> Panel;

    /// Append to the named panel, or to the server panel if none matches.
    fn append(&self, panel: &str, line: Line);

    fn clear(&self, panel: &str);

    fn append_active(&self, line: Line) {
        let active = self.active();
        self.append(&active.name, line);
    }

    fn append_server(&self, line: Line) {
        let server = self.server();
        self.append(&server.name, line);
    }
}

#[derive(Debug)]
struct PanelState {
    panel: Panel,
    lines: Vec<Line>,
}

#[derive(Debug)]
struct Panels {
    list: Vec<PanelState>,
    active: usize,
}

impl Panels {
    fn position(&self, name: &str) -> Option<usize> {
        self.list.iter().position(|p| irc_eq(&p.panel.name, name))
    }
}

/// In-memory [`View`]: an ordered list of panels, the first of which is the
/// server panel.
#[derive(Debug)]
pub struct PanelList {
    inner: RwLock<Panels>,
}

impl PanelList {
    pub fn new(server_name: impl Into<String>) -> Self {
        let server = PanelState {
            panel: Panel::new(server_name, PanelKind::Server),
            lines: Vec::new(),
        };
        Self {
            inner: RwLock::new(Panels {
                list: vec![server],
                active: 0,
            }),
        }
    }

    /// Switch the active panel. Returns false when no panel matches.
    pub fn activate(&self, name: &str) -> bool {
        let mut panels = self.inner.write();
        match panels.position(name) {
            Some(idx) => {
                panels.active = idx;
                true
            }
            None => false,
        }
    }

    pub fn panels(&self) -> Vec<Panel> {
        self.inner.read().list.iter().map(|p| p.panel.clone()).collect()
    }

    pub fn lines(&self, name: &str) -> Vec<Line> {
        let panels = self.inner.read();
        panels
            .position(name)
            .map(|idx| panels.list[idx].lines.clone())
            .unwrap_or_default()
    }
}

impl View for PanelList {
    fn active(&self) -> Panel {
        let panels = self.inner.read();
        panels.list[panels.active].panel.clone()
    }

    fn server(&self) -> Panel {
        self.inner.read().list[0].panel.clone()
    }

    fn open(&self, name: &str, kind: PanelKind) -> Panel {
        let mut panels = self.inner.write();
        let idx = match panels.position(name) {
            Some(idx) => idx,
            None => {
                panels.list.push(PanelState {
                    panel: Panel::new(name, kind),
                    lines: Vec::new(),
                });
                panels.list.len() - 1
            }
        };
        panels.active = idx;
        panels.list[idx].panel.clone()
    }

    fn append(&self, panel: &str, line: Line) {
        let mut panels = self.inner.write();
        let idx = panels.position(panel).unwrap_or(0);
        panels.list[idx].lines.push(line);
    }

    fn clear(&self, panel: &str) {
        let mut panels = self.inner.write();
        if let Some(idx) = panels.position(panel) {
            panels.list[idx].lines.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_panel_is_initial_active() {
        let view = PanelList::new("irc.example.net");
        assert!(view.active().is_server());
        assert_eq!(view.server().name, "irc.example.net");
    }

    #[test]
    fn open_creates_once_and_activates() {
        let view = PanelList::new("server");
        let first = view.open("#Rust", PanelKind::Channel);
        let again = view.open("#rust", PanelKind::Channel);
        assert_eq!(first, again);
        assert_eq!(view.panels().len(), 2);
        assert_eq!(view.active().name, "#Rust");

        assert!(view.activate("server"));
        assert!(!view.activate("#missing"));
        assert!(view.active().is_server());
    }

    #[test]
    fn append_falls_back_to_server() {
        let view = PanelList::new("server");
        view.append("#nowhere", Line::status("test", "hello"));
        assert_eq!(view.lines("server").len(), 1);
        assert_eq!(view.lines("server")[0].text, "hello");
    }

    #[test]
    fn clear_empties_panel() {
        let view = PanelList::new("server");
        view.open("#a", PanelKind::Channel);
        view.append_active(Line::new("bob", "hi", Style::Privmsg));
        assert_eq!(view.lines("#a").len(), 1);
        view.clear("#a");
        assert!(view.lines("#a").is_empty());
    }
}
