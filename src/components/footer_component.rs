use std::iter;

use anyhow::Result;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::action::Action;
use crate::components::Component;
use crate::widgets::shortcut::Shortcut;

const SEPARATOR: &str = "   ";

/// Key hints: the global quit key first, then whatever the table registered.
pub struct FooterComponent {
    shortcuts: Vec<Shortcut>,
}

fn quit_shortcut() -> Shortcut {
    Shortcut::new(["q"], "quit")
}

impl Default for FooterComponent {
    fn default() -> Self {
        Self { shortcuts: vec![quit_shortcut()] }
    }
}

impl FooterComponent {
    fn hints(&self) -> Line<'_> {
        self.shortcuts
            .iter()
            .enumerate()
            .flat_map(|(idx, shortcut)| {
                let gap = (idx > 0).then_some(Span::raw(SEPARATOR));
                gap.into_iter().chain(shortcut.spans(None))
            })
            .collect::<Line>()
            .style(Style::default().fg(Color::DarkGray))
    }
}

impl Component for FooterComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::Shortcuts(registered) = action {
            self.shortcuts = iter::once(quit_shortcut()).chain(registered).collect();
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(self.hints(), area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn rendered(footer: &mut FooterComponent) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal.draw(|frame| footer.draw(frame, frame.area()).unwrap()).unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_quit_only_by_default() {
        assert_eq!(rendered(&mut FooterComponent::default()).trim_end(), "q quit");
    }

    #[test]
    fn test_registered_shortcuts_follow_quit() {
        let mut footer = FooterComponent::default();
        footer.update(Action::Shortcuts(vec![Shortcut::new(["s"], "sort")])).unwrap();
        assert_eq!(rendered(&mut footer).trim_end(), "q quit   s sort");

        // a second registration replaces the first
        footer.update(Action::Shortcuts(vec![Shortcut::new(["g"], "jump")])).unwrap();
        assert_eq!(rendered(&mut footer).trim_end(), "q quit   g jump");
    }
}
