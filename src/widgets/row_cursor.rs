use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols::scrollbar;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

/// Focused row and the visible window over a list of `rows`, shown `height` rows at a time.
#[derive(Debug, Default)]
pub struct RowCursor {
    focused: Option<usize>,
    offset: usize,
    rows: usize,
    height: usize,
}

impl RowCursor {
    /// Fits the cursor to the current list length and viewport height.
    pub fn resize(&mut self, rows: usize, height: usize) {
        self.rows = rows;
        self.height = height;
        self.focused = rows.checked_sub(1).and_then(|last| self.focused.map(|row| row.min(last)));
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn unfocus(&mut self) {
        self.focused = None;
    }

    /// Display positions currently on screen.
    pub fn window(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.height).min(self.rows)
    }

    /// Focused row relative to the top of the window, if it is on screen.
    pub fn selected_in_view(&self) -> Option<usize> {
        let window = self.window();
        self.focused.filter(|row| window.contains(row)).map(|row| row - window.start)
    }

    fn max_offset(&self) -> usize {
        self.rows.saturating_sub(self.height)
    }

    /// Focuses `row`, clamped to the list, and scrolls just enough to show it.
    fn focus(&mut self, row: usize) {
        let Some(last) = self.rows.checked_sub(1) else {
            self.focused = None;
            return;
        };
        let row = row.min(last);
        self.focused = Some(row);
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset.saturating_add(self.height) {
            self.offset = (row + 1).saturating_sub(self.height.max(1));
        }
    }

    /// Without a focused row, moving down starts at the top of the window and moving up at the
    /// bottom.
    fn step(&mut self, delta: isize) {
        let row = match self.focused {
            Some(row) => row.saturating_add_signed(delta),
            None if delta >= 0 => self.window().start,
            None => self.window().end.saturating_sub(1),
        };
        self.focus(row);
    }

    fn scroll(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta).min(self.max_offset());
    }

    /// Returns `true` if `key` moved the cursor.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        let page = isize::try_from(self.height.max(1)).unwrap_or(isize::MAX);
        match key.code {
            KeyCode::Char('g') | KeyCode::Home => self.focus(0),
            KeyCode::Char('G') | KeyCode::End => self.focus(usize::MAX),
            KeyCode::Char('j') | KeyCode::Down => self.step(1),
            KeyCode::Char('k') | KeyCode::Up => self.step(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.step(page),
            KeyCode::PageUp => self.step(-page),
            _ => return false,
        }
        true
    }

    /// The wheel scrolls the window and leaves the focus where it is.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll(1),
            MouseEventKind::ScrollUp => self.scroll(-1),
            _ => return false,
        }
        true
    }

    /// Draws a vertical scrollbar over `area` when the rows overflow the window.
    pub fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        if self.rows <= self.height {
            return;
        }
        let mut state = ScrollbarState::new(self.max_offset())
            .position(self.offset)
            .viewport_content_length(self.height);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight).symbols(scrollbar::VERTICAL),
            area,
            &mut state,
        );
    }
}
