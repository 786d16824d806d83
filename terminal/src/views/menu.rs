use common::Mode;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

use super::View;
use crate::app::AppCommand;

/// Mode-selection screen: 1 for a single snake, 2 for the duel, q to quit.
#[derive(Default)]
pub struct MenuState;

impl MenuState {
    pub fn new() -> Self {
        MenuState
    }
}

impl View for MenuState {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char('1') => Some(AppCommand::StartRound(Mode::SinglePlayer)),
            KeyCode::Char('2') => Some(AppCommand::StartRound(Mode::TwoPlayer)),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            _ => None,
        }
    }

    fn update(&mut self, _dt: Duration) {}

    fn render(&self, frame: &mut Frame) {
        let lines = vec![
            Line::from(""),
            Line::styled(
                "Snake AI Competition",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled("Press 1 for Single Snake Mode", Style::default().fg(Color::Green)),
            Line::styled("Press 2 for Two Snakes Mode", Style::default().fg(Color::Blue)),
            Line::styled("Press Q to Quit", Style::default().fg(Color::Red)),
        ];

        let menu = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(menu, frame.area());
    }
}
