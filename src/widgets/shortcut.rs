use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const DEFAULT_HL_COLOR: Color = Color::Indexed(130);

/// A key hint shown in the footer, e.g. `↑/↓ rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut {
    keys: Vec<Box<str>>,
    description: Box<str>,
}

impl Shortcut {
    pub fn new<K, S>(keys: K, description: &str) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        Self { keys: keys.into_iter().map(Into::into).collect(), description: description.into() }
    }

    pub fn spans(&'_ self, hl_style: Option<Style>) -> Vec<Span<'_>> {
        let hl_style = hl_style.unwrap_or(Style::default().fg(DEFAULT_HL_COLOR));
        let mut spans = Vec::with_capacity(self.keys.len() * 2 + 1);
        for (idx, key) in self.keys.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("/"));
            }
            spans.push(Span::styled(key.as_ref(), hl_style));
        }
        if !self.description.is_empty() {
            spans.push(Span::raw(format!(" {}", self.description)));
        }
        spans
    }
}

/// Renders with the default highlight color [DEFAULT_HL_COLOR].
impl<'a> From<&'a Shortcut> for Line<'a> {
    fn from(value: &'a Shortcut) -> Self {
        Line::from(value.spans(None))
    }
}
