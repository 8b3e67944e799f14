use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info, trace};

use crate::action::Action;
use crate::cli::Args;
use crate::components::Component;
use crate::components::root_component::RootComponent;
use crate::config::Config;
use crate::models::Person;
use crate::tui::{Event, Tui};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Mode {
    #[default]
    Running,
    Suspended,
    Quitting,
}

pub struct App {
    tick_rate: f64,
    frame_rate: f64,
    root: RootComponent,
    mode: Mode,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config: &Config, args: &Args, records: &'static [Person]) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        info!(records = records.len(), toggle_mode = %config.toggle_mode, "Starting app");
        Self {
            tick_rate: args.tick_rate,
            frame_rate: args.frame_rate,
            root: RootComponent::new(records, config.toggle_mode),
            mode: Mode::default(),
            action_tx,
            action_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?.tick_rate(self.tick_rate).frame_rate(self.frame_rate);
        tui.enter()?;
        self.root.register_action_handler(self.action_tx.clone())?;

        while let Some(event) = tui.next_event().await {
            self.dispatch(event)?;
            self.drain(&mut tui.terminal)?;
            match self.mode {
                Mode::Running => {}
                Mode::Suspended => {
                    tui.suspend()?;
                    // back in the foreground
                    tui.resume()?;
                    tui.terminal.clear()?;
                    self.mode = Mode::Running;
                }
                Mode::Quitting => break,
            }
        }
        tui.exit()
    }

    /// Turns a terminal event into actions: timer and resize events map one to one, input goes
    /// through the component tree.
    fn dispatch(&mut self, event: Event) -> Result<()> {
        let action = match event {
            Event::Tick => Some(Action::Tick),
            Event::Render => Some(Action::Render),
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Error => {
                error!("Failed to read terminal event");
                None
            }
            _ => None,
        };
        if let Some(action) = action {
            self.action_tx.send(action)?;
        }
        if let Some(action) = self.root.handle_events(event)? {
            self.action_tx.send(action)?;
        }
        Ok(())
    }

    /// Applies every queued action, including the ones raised while applying.
    fn drain<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        while let Ok(action) = self.action_rx.try_recv() {
            if !matches!(action, Action::Tick | Action::Render) {
                trace!(?action, "Applying action");
            }
            match action {
                Action::Quit => self.mode = Mode::Quitting,
                Action::Suspend => self.mode = Mode::Suspended,
                Action::Resize(w, h) => {
                    terminal.resize(Rect::new(0, 0, w, h))?;
                    self.render(terminal)?;
                }
                Action::Render => self.render(terminal)?,
                _ => {}
            }
            if let Some(next) = self.root.update(action)? {
                self.action_tx.send(next)?;
            }
        }
        Ok(())
    }

    /// A component failing to draw is logged and the frame is still flushed.
    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        let mut drawn = Ok(());
        terminal.draw(|frame| drawn = self.root.draw(frame, frame.area()))?;
        if let Err(err) = drawn {
            error!("Failed to draw: {err:?}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::components::people::tests::person;

    fn app() -> App {
        let args = Args::try_parse_from(["people-tui"]).unwrap();
        let records = vec![person(2, "Bryn", "Beta"), person(1, "Ada", "Alpha")].leak();
        App::new(&Config::default(), &args, records)
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_render_action_draws_table() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        app.action_tx.send(Action::Render).unwrap();
        app.drain(&mut terminal).unwrap();

        assert!(row(&terminal, 0).contains("people (-/2)"), "{}", row(&terminal, 0));
        // border, header, header margin, then rows
        assert!(row(&terminal, 3).contains("Ada"), "{}", row(&terminal, 3));
        assert!(row(&terminal, 4).contains("Bryn"), "{}", row(&terminal, 4));
        assert_eq!(app.mode, Mode::Running);
    }

    #[test]
    fn test_render_after_sender_closed() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        app.action_tx = tx;
        app.render(&mut terminal).unwrap();
        assert!(row(&terminal, 3).contains("Ada"));
    }

    #[test]
    fn test_key_events_reach_table() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        let key = |c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        // ID twice: ascending, then descending
        app.dispatch(key('1')).unwrap();
        app.dispatch(key('1')).unwrap();
        app.dispatch(Event::Render).unwrap();
        app.drain(&mut terminal).unwrap();
        assert!(row(&terminal, 3).contains("Bryn"), "{}", row(&terminal, 3));
        assert!(row(&terminal, 1).contains("ID ↓"), "{}", row(&terminal, 1));
    }

    #[test]
    fn test_quit_and_suspend_set_mode() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        app.action_tx.send(Action::Suspend).unwrap();
        app.drain(&mut terminal).unwrap();
        assert_eq!(app.mode, Mode::Suspended);

        app.action_tx.send(Action::Quit).unwrap();
        app.drain(&mut terminal).unwrap();
        assert_eq!(app.mode, Mode::Quitting);
    }
}
