use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{GameSession, Position, SessionState};
use crate::theme::Theme;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &GameSession, theme: &Theme, high_score: u32) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_header(session, theme, high_score);
        frame.render_widget(header, chunks[0]);

        // Centre the board horizontally
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match session.state {
            SessionState::NotStarted => {
                frame.render_widget(self.render_start_screen(theme), board_area);
            }
            SessionState::GameOver => {
                frame.render_widget(self.render_game_over(session), board_area);
            }
            SessionState::Running | SessionState::Paused => {
                frame.render_widget(self.render_board(board_area, session, theme), board_area);
            }
        }

        let controls = self.render_controls(chunks[2], theme);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board<'a>(&self, _area: Rect, session: &GameSession, theme: &Theme) -> Paragraph<'a> {
        let mut lines = Vec::new();

        for y in 0..session.config.grid_size {
            let mut spans = Vec::new();

            for x in 0..session.config.grid_size {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == session.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(theme.head)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if session.snake.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(theme.body))
                } else if pos == session.food {
                    Span::styled(
                        "● ",
                        Style::default()
                            .fg(theme.food)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = if session.state == SessionState::Paused {
            " Paused "
        } else {
            " Snake "
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(theme.accent))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_header<'a>(
        &self,
        session: &GameSession,
        theme: &Theme,
        high_score: u32,
    ) -> Paragraph<'a> {
        let text = vec![Line::from(vec![
            Span::styled(
                "NEO-SNAKE",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            Span::raw("    "),
            Span::styled("Score: ", Style::default().fg(Color::Gray)),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Gray)),
            Span::styled(
                high_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Theme: ", Style::default().fg(Color::Gray)),
            Span::styled(theme.name, Style::default().fg(theme.accent)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_screen<'a>(&self, theme: &Theme) -> Paragraph<'a> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "NEO-SNAKE",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
    }

    fn render_game_over<'a>(&self, session: &GameSession) -> Paragraph<'a> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls<'a>(&self, _area: Rect, theme: &Theme) -> Paragraph<'a> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(theme.accent)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(theme.accent)),
            Span::raw(" to steer | "),
            Span::styled("Space", Style::default().fg(theme.accent)),
            Span::raw(" start/pause | "),
            Span::styled("T", Style::default().fg(theme.accent)),
            Span::raw(" theme | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
