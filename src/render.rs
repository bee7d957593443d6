//! Per-node painting and panel row composition.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::path::MAIN_SEPARATOR;

use crate::node::{Mode, Node};
use crate::settings::{Icons, Settings};
use crate::state::ViewState;

/// A styled byte range within a rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub group: String,
    pub begin: usize,
    pub end: usize,
}

/// Visual output for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    /// Indentation, markers, decoration and name.
    pub line: String,
    /// Quickfix count and VCS status, shown right-aligned.
    pub badge: String,
    /// Always empty here; reserved for consumers adding rich highlighting.
    pub highlights: Vec<Highlight>,
}

/// Presentation strategy, fixed for a whole render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Ascii,
    Icons,
}

impl Strategy {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.use_icons {
            Strategy::Icons
        } else {
            Strategy::Ascii
        }
    }

    pub fn cursor_glyph(self) -> char {
        match self {
            Strategy::Ascii => '>',
            Strategy::Icons => '\u{25b6}', // ▶
        }
    }

    pub fn selection_glyph(self) -> char {
        match self {
            Strategy::Ascii => '*',
            Strategy::Icons => '\u{2738}', // ✸
        }
    }
}

/// Blank of the same width as a marker glyph.
const BLANK: char = ' ';

/// Paints single nodes for one render pass.
pub struct Painter<'a> {
    strategy: Strategy,
    icons: &'a Icons,
    view: &'a ViewState,
}

impl<'a> Painter<'a> {
    pub fn new(settings: &'a Settings, view: &'a ViewState) -> Self {
        Self {
            strategy: Strategy::from_settings(settings),
            icons: &settings.icons,
            view,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn paint(&self, node: &Node, depth: usize) -> Render {
        let path = node.path.as_str();
        let view = self.view;

        let qf_count = view.qf.count(path);
        let qf_badge = if qf_count > 0 {
            format!("({})", qf_count)
        } else {
            String::new()
        };
        let status = match view.vc.status.get(path) {
            Some(code) if !code.is_empty() => format!("[{}]", code),
            _ => String::new(),
        };

        let spaces = " ".repeat((depth * 2).saturating_sub(1));
        let curr = if view.current.as_deref() == Some(path) {
            self.strategy.cursor_glyph()
        } else {
            BLANK
        };
        let select = if view.selection.contains(path) {
            self.strategy.selection_glyph()
        } else {
            BLANK
        };
        let name = escape_line_breaks(&node.name);

        let name = match self.strategy {
            Strategy::Ascii => self.decorate_ascii(node, name),
            Strategy::Icons => self.decorate_icons(node, name),
        };

        Render {
            line: format!("{spaces}{select}{curr} {name}"),
            badge: format!("{qf_badge} {status}"),
            highlights: Vec::new(),
        }
    }

    fn decorate_ascii(&self, node: &Node, mut name: String) -> String {
        if node.is_folder() {
            let decor = if self.view.index.contains(&node.path) {
                '-'
            } else {
                '+'
            };
            name = format!("{decor} {name}{MAIN_SEPARATOR}");
        }
        if node.is_link() {
            name = format!("  {name} ->");
        }
        name
    }

    fn decorate_icons(&self, node: &Node, mut name: String) -> String {
        let icons = self.icons;
        if node.is_folder() {
            let decor = if self.view.index.contains(&node.path) {
                &icons.folder_open
            } else {
                &icons.folder_closed
            };
            name = format!("{decor} {name}");
        } else {
            name = match icons.file_icon(&node.name, node.ext.as_deref()) {
                Some(icon) => format!("{icon} {name}"),
                None => format!("  {name}"),
            };
        }
        if node.mode.contains(Mode::ORPHAN_LINK) {
            name = format!("{name} {}", icons.link_broken);
        } else if node.mode.contains(Mode::LINK) {
            name = format!("{name} {}", icons.link);
        }
        name
    }
}

/// Replace embedded line breaks with a literal `\n` so a name stays on one row.
pub fn escape_line_breaks(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

const BADGE_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::ITALIC);

/// Join a render's line and badge into one panel row of `width` columns,
/// with the badge right-aligned. Rows narrower than their content keep a
/// single space before the badge.
pub fn row_line(render: &Render, width: usize) -> Line<'static> {
    let line = Span::raw(render.line.clone());
    let badge = render.badge.trim();
    if badge.is_empty() {
        return Line::from(line);
    }
    let badge = Span::styled(badge.to_string(), BADGE_STYLE);
    let gap = width.saturating_sub(line.width() + badge.width()).max(1);
    Line::from(vec![line, Span::raw(" ".repeat(gap)), badge])
}

/// Extract plain text from a `Line`.
pub fn line_to_plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
