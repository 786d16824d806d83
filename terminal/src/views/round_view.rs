use common::{Mode, RoundState, DEFAULT_TICK_INTERVAL_MS};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use tracing::info;

use super::View;
use crate::app::AppCommand;
use crate::render::arena::ArenaRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::CharDimensions;

/// Drives one round of the simulation at a fixed tick rate and draws it.
/// The pacing exists only for watchability; the core runs tick-to-tick
/// with no delay requirement of its own.
pub struct RoundView {
    pub round: RoundState,
    accumulator: f32,
    paused: bool,
}

impl RoundView {
    pub fn new(mode: Mode, seed: u64) -> Self {
        info!(?mode, seed, "starting round");
        Self {
            round: RoundState::new(mode, seed),
            accumulator: 0.0,
            paused: false,
        }
    }

    fn seconds_per_tick() -> f32 {
        DEFAULT_TICK_INTERVAL_MS as f32 / 1000.0
    }

    fn render_arena(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Arena").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let char_dims = CharDimensions::new(2, 1);
        let renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
        let char_grid = renderer.render(&self.round);

        let lines: Vec<Line> = char_grid
            .into_lines()
            .into_iter()
            .map(|row| Line::from(row.into_iter().collect::<String>()))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let (score1, score2) = self.round.scores();
        let score_line = match self.round.mode() {
            Mode::TwoPlayer => format!("Snake 1: {}  Snake 2: {}", score1, score2),
            Mode::SinglePlayer => format!("Snake 1: {}", score1),
        };

        let mut lines = vec![
            Line::from(score_line),
            Line::from(format!("Tick: {}", self.round.current_tick())),
        ];

        if let Some(outcome) = self.round.outcome() {
            lines.push(Line::styled(
                outcome.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if self.paused {
            lines.push(Line::from("Paused"));
        }

        let status = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Score").borders(Borders::ALL));
        frame.render_widget(status, area);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new("space: pause  q/esc: back to menu")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

impl View for RoundView {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::BackToMenu),
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                None
            }
            _ => None,
        }
    }

    fn update(&mut self, dt: Duration) {
        if self.paused || self.round.is_terminal() {
            return;
        }

        self.accumulator += dt.as_secs_f32();
        while self.accumulator >= Self::seconds_per_tick() {
            self.accumulator -= Self::seconds_per_tick();
            self.round.tick_forward();
            if let Some(outcome) = self.round.outcome() {
                info!(tick = self.round.current_tick(), %outcome, "round ended");
                self.accumulator = 0.0;
                break;
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(10),   // Arena
                Constraint::Length(5), // Score / outcome
                Constraint::Length(3), // Controls
            ])
            .split(frame.area());

        self.render_arena(frame, chunks[0]);
        self.render_status(frame, chunks[1]);
        self.render_controls(frame, chunks[2]);
    }
}
