mod footer_component;
pub mod people;
mod people_component;
pub mod root_component;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::tui::Event;
use crate::widgets::shortcut::Shortcut;

/// A piece of the screen: turns input into actions, reacts to actions, draws itself.
///
/// Every hook except [`Component::draw`] defaults to doing nothing.
pub trait Component {
    /// Key hints for the footer.
    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![]
    }

    /// Gives the component a sender for actions it raises outside of event handling.
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        let _ = tx;
        Ok(())
    }

    /// Routes key and mouse events to their handlers; other events produce nothing.
    fn handle_events(&mut self, event: Event) -> Result<Option<Action>> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => Ok(None),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Applies `action`, optionally answering with a follow-up action.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
