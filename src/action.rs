use crate::models::Field;
use crate::widgets::shortcut::Shortcut;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Quit,
    Shortcuts(Vec<Shortcut>),
    /// A header toggle control was activated.
    ToggleSort(Field),
}
