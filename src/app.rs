use std::io::{stderr, Stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::{interval_at, Instant, Interval};

use crate::game::{GameConfig, GameSession, SessionState};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::storage::HighScoreStore;
use crate::theme::ThemeId;

/// The interactive app: one session, one input stream, one screen.
///
/// A single `tokio::select!` loop multiplexes key events, the simulation
/// tick and the render timer; the session is only ever touched from that
/// loop, so no locking is involved anywhere.
pub struct App {
    session: GameSession,
    store: HighScoreStore,
    theme: ThemeId,
    input_handler: InputHandler,
    renderer: Renderer,
    should_quit: bool,
    rearm_tick: bool,
}

impl App {
    pub fn new(config: GameConfig, theme: ThemeId, high_score_path: PathBuf) -> Self {
        Self {
            session: GameSession::new(config),
            store: HighScoreStore::open(high_score_path),
            theme,
            input_handler: InputHandler::new(),
            renderer: Renderer::new(),
            should_quit: false,
            rearm_tick: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup on every exit path
        let result = self.run_event_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = self.tick_timer();

        // Render at 30 FPS, independent of the game speed
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval_at(Instant::now(), render_interval);

        loop {
            tokio::select! {
                // Terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Simulation tick; parked while not running so a paused or
                // finished session never sees a tick
                _ = tick_timer.tick(), if self.session.state == SessionState::Running => {
                    self.advance_session()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    let theme = self.theme.theme();
                    let high = self.store.best().max(self.session.score);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session, theme, high);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // Speed changes and pause/resume both need a fresh cadence so a
            // stale interval never drives the session
            if self.rearm_tick {
                tick_timer = self.tick_timer();
                self.rearm_tick = false;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Interval firing one full period from now at the session's speed
    fn tick_timer(&self) -> Interval {
        let period = Duration::from_millis(self.session.speed);
        interval_at(Instant::now() + period, period)
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.session.steer(direction);
                }
                KeyAction::StartOrPause => match self.session.state {
                    SessionState::NotStarted => {
                        self.session.start();
                        self.rearm_tick = true;
                    }
                    SessionState::Running | SessionState::Paused => {
                        self.session.toggle_pause();
                        if self.session.state == SessionState::Running {
                            self.rearm_tick = true;
                        }
                    }
                    SessionState::GameOver => {}
                },
                KeyAction::Restart => {
                    self.session.start();
                    self.rearm_tick = true;
                }
                KeyAction::CycleTheme => {
                    self.theme = self.theme.next();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn advance_session(&mut self) -> Result<()> {
        let outcome = self.session.tick();

        if outcome.ate_food {
            self.store
                .record(self.session.score)
                .context("Failed to persist high score")?;
            // Eating shortens the tick interval
            self.rearm_tick = true;
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
