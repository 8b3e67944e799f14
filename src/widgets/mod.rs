pub mod row_cursor;
pub mod shortcut;
