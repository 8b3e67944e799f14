use const_format::concatcp;
use ratatui::symbols::line::{TOP_LEFT, TOP_RIGHT};
use ratatui::text::{Line, Span};

pub const TOP_TITLE_LEFT: &str = concatcp!(TOP_RIGHT, " ");
pub const TOP_TITLE_RIGHT: &str = concatcp!(" ", TOP_LEFT);

/// Wraps `spans` in the `┐ ... ┌` caps used for block titles.
pub fn top_title<'a, I>(spans: I) -> Line<'a>
where
    I: IntoIterator<Item = Span<'a>>,
{
    let mut line = Line::from(Span::raw(TOP_TITLE_LEFT));
    line.extend(spans);
    line.push_span(Span::raw(TOP_TITLE_RIGHT));
    line
}
