use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Position, Rect};
use ratatui::prelude::{Color, Line, Modifier, Span, Style, Stylize};
use ratatui::widgets::{Block, BorderType, Cell, Row, Table, TableState};
use strum::{EnumCount, IntoEnumIterator};
use tracing::debug;

use crate::action::Action;
use crate::components::Component;
use crate::components::people::{PEOPLE_COLS, People, col_def};
use crate::models::sort::{SortSpec, ToggleMode};
use crate::models::{Field, Person};
use crate::utils::columns::fit_widths;
use crate::utils::text_ui::top_title;
use crate::widgets::row_cursor::RowCursor;
use crate::widgets::shortcut::Shortcut;

const COLUMN_SPACING: u16 = 2;
/// header row + its bottom margin
const HEADER_HEIGHT: u16 = 2;

pub struct PeopleComponent {
    store: People,
    sort: SortSpec,
    toggle_mode: ToggleMode,
    /// header cell targeted by `Enter`/`s`
    header_focus: Field,

    cursor: RowCursor,
    table_state: TableState,
    /// header cell areas from the last draw, for mouse hit testing
    header_cells: Vec<(Field, Rect)>,
}

impl PeopleComponent {
    pub fn new(records: &'static [Person], toggle_mode: ToggleMode) -> Self {
        let sort = SortSpec::default();
        Self {
            store: People::new(records, sort),
            sort,
            toggle_mode,
            header_focus: sort.field,
            cursor: RowCursor::default(),
            table_state: TableState::default(),
            header_cells: Vec::with_capacity(Field::COUNT),
        }
    }

    fn toggle_sort(&mut self, field: Field) {
        self.sort.toggle(field, self.toggle_mode);
        self.header_focus = field;
        self.store.compute_view(self.sort);
        debug!(%field, dir = ?self.sort.dir, mode = %self.toggle_mode, "Sort toggled");
    }

    fn move_header_focus(&mut self, forward: bool) {
        let idx = self.header_focus.index();
        let idx = if forward { (idx + 1).min(Field::COUNT - 1) } else { idx.saturating_sub(1) };
        if let Some(field) = Field::from_index(idx) {
            self.header_focus = field;
        }
    }

    fn header_hit(&self, column: u16, row: u16) -> Option<Field> {
        let pos = Position::new(column, row);
        self.header_cells.iter().find(|(_, rect)| rect.contains(pos)).map(|(field, _)| *field)
    }

    /// Records where each header cell is drawn, given the resolved column widths.
    fn locate_header_cells(&mut self, inner: Rect, widths: &[u16]) {
        self.header_cells.clear();
        let mut x = inner.x;
        for (field, &width) in Field::iter().zip(widths) {
            self.header_cells.push((field, Rect::new(x, inner.y, width, inner.height.min(1))));
            x = x.saturating_add(width).saturating_add(COLUMN_SPACING);
        }
    }

    fn header_row(&self) -> Row<'static> {
        Field::iter()
            .map(|field| {
                let mut spans = vec![Span::raw(field.label())];
                if let Some(marker) = self.sort.marker(field) {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(marker, Style::default().fg(Color::LightCyan)));
                }
                let cell = Cell::from(Line::from(spans)).bold();
                if field == self.header_focus { cell.underlined() } else { cell }
            })
            .collect::<Row>()
            .height(1)
            .bottom_margin(HEADER_HEIGHT - 1)
    }

    fn title(&self) -> Line<'static> {
        let focused =
            self.cursor.focused().map_or_else(|| "-".to_owned(), |row| (row + 1).to_string());
        top_title([
            Span::raw("people ("),
            Span::styled(focused, Color::LightCyan),
            Span::raw("/"),
            Span::styled(self.store.len().to_string(), Color::Cyan),
            Span::raw(") sort: "),
            Span::styled(col_def(self.sort.field).title, Color::LightCyan),
            Span::raw(" "),
            Span::raw(self.sort.dir.symbol()),
        ])
    }

    /// Draws the table and returns the area of its body rows, right border included.
    fn render_table(&mut self, frame: &mut Frame, area: Rect) -> Rect {
        let block = Block::bordered().border_type(BorderType::Rounded);
        let inner = block.inner(area);

        // the same widths drive the table and the header hit areas
        let widths = fit_widths(PEOPLE_COLS, inner.width, COLUMN_SPACING);
        self.locate_header_cells(inner, &widths);

        let body = Rect {
            y: inner.y.saturating_add(HEADER_HEIGHT),
            height: inner.height.saturating_sub(HEADER_HEIGHT),
            ..area
        };
        self.cursor.resize(self.store.len(), usize::from(body.height));
        // table selection is relative to the first visible row
        *self.table_state.selected_mut() = self.cursor.selected_in_view();

        let rows = self
            .store
            .rows(self.cursor.window())
            .map(|person| Row::new(PEOPLE_COLS.iter().map(|def| (def.accessor)(person))));
        let selected_row_style = Style::default().add_modifier(Modifier::REVERSED).fg(Color::Cyan);
        let table = Table::new(rows, widths.into_iter().map(Constraint::Length))
            .block(block.title(self.title()))
            .header(self.header_row())
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(selected_row_style);

        frame.render_stateful_widget(table, area, &mut self.table_state);
        body
    }
}

impl Component for PeopleComponent {
    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new(["↑", "↓"], "rows"),
            Shortcut::new(["←", "→"], "column"),
            Shortcut::new(["s", "↵"], "sort"),
            Shortcut::new(["1-6"], "sort column"),
            Shortcut::new(["g", "G"], "jump"),
        ]
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.cursor.handle_key_event(key) {
            return Ok(None);
        }
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as u8 - b'1') as usize;
                return Ok(Field::from_index(idx).map(Action::ToggleSort));
            }
            KeyCode::Char('h') | KeyCode::Left => self.move_header_focus(false),
            KeyCode::Char('l') | KeyCode::Right => self.move_header_focus(true),
            KeyCode::Char('s') | KeyCode::Enter => {
                return Ok(Some(Action::ToggleSort(self.header_focus)));
            }
            KeyCode::Esc => self.cursor.unfocus(),
            _ => (),
        };

        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            return Ok(self.header_hit(mouse.column, mouse.row).map(Action::ToggleSort));
        }
        self.cursor.handle_mouse_event(mouse);
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::ToggleSort(field) = action {
            self.toggle_sort(field);
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let body = self.render_table(frame, area);
        // drawn over the right border, next to the body rows only
        self.cursor.render_scrollbar(frame, body);
        Ok(())
    }
}
