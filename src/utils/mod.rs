pub mod columns;
pub mod text_ui;
