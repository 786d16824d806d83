use anyhow::Result;
use common::Mode;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::views::{MenuState, RoundView, View};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    StartRound(Mode),
    BackToMenu,
}

pub enum AppState {
    Menu(MenuState),
    Round(Box<RoundView>),
}

pub struct App {
    pub state: AppState,
    /// Fixed seed for reproducible rounds; fresh time-based seed per
    /// round when unset.
    seed_override: Option<u64>,
}

impl App {
    pub fn new(seed_override: Option<u64>) -> Self {
        Self {
            state: AppState::Menu(MenuState::new()),
            seed_override,
        }
    }

    fn next_seed(&self) -> u64 {
        self.seed_override.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match &mut self.state {
            AppState::Menu(menu) => menu.handle_input(key),
            AppState::Round(view) => view.handle_input(key),
        }
    }

    pub fn update(&mut self, dt: Duration) {
        match &mut self.state {
            AppState::Menu(menu) => menu.update(dt),
            AppState::Round(view) => view.update(dt),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match &self.state {
            AppState::Menu(menu) => menu.render(frame),
            AppState::Round(view) => view.render(frame),
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            AppCommand::StartRound(mode) => {
                let view = RoundView::new(mode, self.next_seed());
                self.state = AppState::Round(Box::new(view));
            }
            AppCommand::BackToMenu => {
                self.state = AppState::Menu(MenuState::new());
            }
            AppCommand::Quit => {
                // Handled in main loop
            }
        }
        Ok(())
    }
}
