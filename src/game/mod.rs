//! Core game logic for Snake
//!
//! Everything here is pure simulation with no I/O or rendering dependencies:
//! the direction vocabulary, the buffered steering queue, food placement, and
//! the session state machine that advances the snake one cell per tick.

pub mod config;
pub mod direction;
pub mod food;
pub mod queue;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use food::place_food;
pub use queue::MoveQueue;
pub use session::{Collision, GameSession, SessionState, TickOutcome};
pub use snake::{Position, Snake};
