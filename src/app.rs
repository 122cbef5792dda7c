use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::ui::{install_panic_hook, SignupResult, SignupScreen, TerminalGuard};
use crate::wizard::WizardSnapshot;

/// How an interactive session ended
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The user acknowledged the confirmation step
    Completed(Box<WizardSnapshot>),
    /// The user backed out or pressed Ctrl-C
    Cancelled,
}

pub struct App {
    config: Config,
    screen: SignupScreen,
    should_quit: bool,
    outcome: Option<Outcome>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let screen = SignupScreen::new(config.wizard.default_cadence);
        tracing::info!(
            cadence = %config.wizard.default_cadence,
            "Starting sign-up session"
        );

        Self {
            config,
            screen,
            should_quit: false,
            outcome: None,
        }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        install_panic_hook();
        let mut guard = TerminalGuard::enter()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| self.screen.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let result = self.screen.handle_key(key);
                        self.handle_result(result);
                    }
                }
            }
        }

        guard.restore()?;
        Ok(self.outcome.take().unwrap_or(Outcome::Cancelled))
    }

    fn handle_result(&mut self, result: SignupResult) {
        match result {
            SignupResult::Continue => {}
            SignupResult::Cancel => {
                tracing::info!(step = %self.screen.step(), "Sign-up cancelled");
                self.outcome = Some(Outcome::Cancelled);
                self.should_quit = true;
            }
            SignupResult::Finish(snapshot) => {
                tracing::info!(
                    plan = %snapshot.selected_plan.name,
                    cadence = %snapshot.cadence,
                    total = snapshot.total,
                    "Sign-up completed"
                );
                self.outcome = Some(Outcome::Completed(snapshot));
                self.should_quit = true;
            }
        }
    }
}
