use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::action::Action;
use crate::components::footer_component::FooterComponent;
use crate::components::people_component::PeopleComponent;
use crate::components::Component;
use crate::models::Person;
use crate::models::sort::ToggleMode;

pub struct RootComponent {
    people: PeopleComponent,
    footer: FooterComponent,
    action_tx: Option<UnboundedSender<Action>>,
}

impl RootComponent {
    pub fn new(records: &'static [Person], toggle_mode: ToggleMode) -> Self {
        Self {
            people: PeopleComponent::new(records, toggle_mode),
            footer: FooterComponent::default(),
            action_tx: None,
        }
    }

    fn send(&self, action: Action) -> Result<()> {
        match &self.action_tx {
            Some(tx) => tx.send(action)?,
            None => warn!("action handler not registered, dropping {action:?}"),
        }
        Ok(())
    }
}

impl Component for RootComponent {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        // footer shows the table's key hints
        self.send(Action::Shortcuts(self.people.shortcuts()))
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return Ok(Some(Action::Quit));
            }
            (KeyCode::Char('z'), KeyModifiers::CONTROL) => return Ok(Some(Action::Suspend)),
            _ => {}
        }
        debug!(?key, "Forwarding key event to table");
        self.people.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        self.people.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        // propagate action to all components
        if let Some(action) = self.people.update(action.clone())? {
            self.send(action)?;
        }
        if let Some(action) = self.footer.update(action)? {
            self.send(action)?;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        self.people.draw(frame, body)?;
        self.footer.draw(frame, footer)?;
        Ok(())
    }
}
