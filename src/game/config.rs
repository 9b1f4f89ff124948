use serde::{Deserialize, Serialize};

/// Gameplay constants for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per food eaten
    pub food_points: u32,
    /// Tick interval at the start of a session, in milliseconds
    pub initial_speed: u64,
    /// Fastest allowed tick interval, in milliseconds
    pub min_speed: u64,
    /// How much the tick interval shrinks per food eaten, in milliseconds
    pub speed_decrement: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            food_points: 10,
            initial_speed: 150,
            min_speed: 60,
            speed_decrement: 3,
        }
    }
}

impl GameConfig {
    /// Tick interval after one more food, floored at `min_speed`.
    ///
    /// Applied incrementally per eat; equivalent to the closed form
    /// `max(min_speed, initial_speed - n * speed_decrement)` after n eats.
    pub fn next_speed(&self, speed: u64) -> u64 {
        speed.saturating_sub(self.speed_decrement).max(self.min_speed)
    }
}
