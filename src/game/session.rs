use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::direction::Direction;
use super::food::place_food;
use super::queue::MoveQueue;
use super::snake::{Position, Snake};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// What ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the grid
    Wall,
    /// Head ran into the snake's own body
    SelfCollision,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set when this tick ended the session
    pub collision: Option<Collision>,
}

/// One play-through of the game, owning all mutable simulation state.
///
/// The session is the sole mutator: a periodic timer drives [`tick`] and the
/// input layer drives [`steer`]; nothing here blocks or runs concurrently.
///
/// [`tick`]: GameSession::tick
/// [`steer`]: GameSession::steer
pub struct GameSession {
    pub config: GameConfig,
    pub state: SessionState,
    pub snake: Snake,
    pub food: Position,
    pub queue: MoveQueue,
    pub score: u32,
    /// Current tick interval in milliseconds
    pub speed: u64,
    rng: ThreadRng,
}

impl GameSession {
    /// Create a session in [`SessionState::NotStarted`], with the initial
    /// snake laid out so the board can be rendered before the first start.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = rand::thread_rng();
        let snake = Self::initial_snake(&config);
        let food = place_food(&mut rng, config.grid_size, &snake.body);
        let speed = config.initial_speed;

        Self {
            config,
            state: SessionState::NotStarted,
            snake,
            food,
            queue: MoveQueue::new(),
            score: 0,
            speed,
            rng,
        }
    }

    /// Three cells at the grid centre, heading up, body trailing below
    fn initial_snake(config: &GameConfig) -> Snake {
        let centre = (config.grid_size / 2) as i32;
        Snake::new(
            Position::new(centre, centre),
            Direction::Up,
            config.initial_snake_length,
        )
    }

    /// Reset every piece of mutable state and enter [`SessionState::Running`].
    ///
    /// Valid from any state; this is also how a finished game restarts.
    pub fn start(&mut self) {
        self.snake = Self::initial_snake(&self.config);
        self.food = place_food(&mut self.rng, self.config.grid_size, &self.snake.body);
        self.queue.clear();
        self.score = 0;
        self.speed = self.config.initial_speed;
        self.state = SessionState::Running;
    }

    /// Flip between Running and Paused; a no-op from any other state
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Running => SessionState::Paused,
            SessionState::Paused => SessionState::Running,
            other => other,
        };
    }

    /// Buffer a steering input. Game over swallows all steering; otherwise
    /// the queue applies its own reversal and capacity rules.
    pub fn steer(&mut self, direction: Direction) {
        if self.state == SessionState::GameOver {
            return;
        }
        self.queue.push(direction, self.snake.direction);
    }

    /// Advance the simulation by one cell.
    ///
    /// A no-op unless Running — the timer stop and the state transition are
    /// not atomic, so a straggling tick must not mutate a paused or finished
    /// session. On a fatal move the snake is left untouched so the final
    /// frame still shows the position that lost.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != SessionState::Running {
            return TickOutcome::default();
        }

        if let Some(direction) = self.queue.pop() {
            self.snake.direction = direction;
        }

        let new_head = self.snake.head().step(self.snake.direction);

        if !self.in_bounds(new_head) {
            self.state = SessionState::GameOver;
            return TickOutcome {
                ate_food: false,
                collision: Some(Collision::Wall),
            };
        }

        let eating = new_head == self.food;

        // The tail vacates its cell this tick unless the snake grows, so it
        // only counts for collision when eating.
        let body = &self.snake.body;
        let comparison = if eating {
            &body[..]
        } else {
            &body[..body.len() - 1]
        };

        if comparison.contains(&new_head) {
            self.state = SessionState::GameOver;
            return TickOutcome {
                ate_food: false,
                collision: Some(Collision::SelfCollision),
            };
        }

        self.snake.advance(new_head, eating);

        if eating {
            self.score += self.config.food_points;
            self.food = place_food(&mut self.rng, self.config.grid_size, &self.snake.body);
            self.speed = self.config.next_speed(self.speed);
        }

        TickOutcome {
            ate_food: eating,
            collision: None,
        }
    }

    fn in_bounds(&self, pos: Position) -> bool {
        let size = self.config.grid_size as i32;
        pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_session() -> GameSession {
        let mut session = GameSession::new(GameConfig::default());
        session.start();
        session
    }

    /// Park the food where the snake cannot reach it this tick
    fn park_food(session: &mut GameSession) {
        session.food = Position::new(0, 0);
        assert!(!session.snake.occupies(session.food));
    }

    #[test]
    fn test_new_session_is_not_started() {
        let session = GameSession::new(GameConfig::default());
        assert_eq!(session.state, SessionState::NotStarted);
        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.snake.head(), Position::new(10, 10));
        assert!(!session.snake.occupies(session.food));
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut session = GameSession::new(GameConfig::default());
        let snake = session.snake.clone();

        let outcome = session.tick();

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(session.snake, snake);
        assert_eq!(session.state, SessionState::NotStarted);
    }

    #[test]
    fn test_one_queued_direction_consumed_per_tick() {
        let mut session = running_session();
        park_food(&mut session);
        session.steer(Direction::Left);
        session.steer(Direction::Down);
        assert_eq!(session.queue.len(), 2);

        session.tick();
        assert_eq!(session.snake.direction, Direction::Left);
        assert_eq!(session.queue.len(), 1);

        park_food(&mut session);
        session.tick();
        assert_eq!(session.snake.direction, Direction::Down);
        assert!(session.queue.is_empty());
    }

    #[test]
    fn test_empty_queue_repeats_current_direction() {
        let mut session = running_session();
        park_food(&mut session);
        let head = session.snake.head();

        session.tick();

        assert_eq!(session.snake.direction, Direction::Up);
        assert_eq!(session.snake.head(), head.step(Direction::Up));
    }

    #[test]
    fn test_length_constant_without_food() {
        let mut session = running_session();
        park_food(&mut session);

        session.tick();

        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_eating_grows_scores_and_speeds_up() {
        let mut session = running_session();
        session.food = session.snake.head().step(Direction::Up);

        let outcome = session.tick();

        assert!(outcome.ate_food);
        assert_eq!(session.snake.len(), 4);
        assert_eq!(session.score, 10);
        assert_eq!(session.speed, 147);
        assert!(!session.snake.occupies(session.food));
    }

    #[test]
    fn test_scores_accumulate_per_food() {
        let mut session = running_session();

        for expected in [10, 20, 30] {
            session.food = session.snake.head().step(session.snake.direction);
            session.tick();
            assert_eq!(session.score, expected);
        }
    }

    #[test]
    fn test_wall_collision_ends_game_leaving_snake() {
        let mut session = running_session();
        session.snake = Snake::new(Position::new(0, 5), Direction::Left, 3);
        park_food(&mut session);
        let snake = session.snake.clone();

        let outcome = session.tick();

        assert_eq!(outcome.collision, Some(Collision::Wall));
        assert_eq!(session.state, SessionState::GameOver);
        assert_eq!(session.snake, snake);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut session = running_session();
        // Hook shape: the head re-enters a cell that is not the tail
        session.snake = Snake {
            body: vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
                Position::new(7, 5),
            ],
            direction: Direction::Right,
        };
        park_food(&mut session);
        let snake = session.snake.clone();

        let outcome = session.tick();

        assert_eq!(outcome.collision, Some(Collision::SelfCollision));
        assert_eq!(session.state, SessionState::GameOver);
        assert_eq!(session.snake, snake);
    }

    #[test]
    fn test_vacating_tail_is_not_a_collision() {
        let mut session = running_session();
        // Closed loop: the next head cell is the tail, which moves away
        session.snake = Snake {
            body: vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
            ],
            direction: Direction::Right,
        };
        park_food(&mut session);

        let outcome = session.tick();

        assert_eq!(outcome.collision, None);
        assert_eq!(session.state, SessionState::Running);
        assert_eq!(session.snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_tail_counts_when_eating() {
        let mut session = running_session();
        // Same loop, but the tail cell holds food: the tail stays put, so
        // stepping onto it is fatal.
        session.snake = Snake {
            body: vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
            ],
            direction: Direction::Right,
        };
        session.food = Position::new(6, 5);
        let snake = session.snake.clone();

        let outcome = session.tick();

        assert_eq!(outcome.collision, Some(Collision::SelfCollision));
        assert!(!outcome.ate_food);
        assert_eq!(session.state, SessionState::GameOver);
        assert_eq!(session.snake, snake);
    }

    #[test]
    fn test_speed_pinned_at_floor() {
        let mut session = running_session();
        session.speed = session.config.min_speed + 1;

        session.food = session.snake.head().step(session.snake.direction);
        session.tick();
        assert_eq!(session.speed, session.config.min_speed);

        session.food = session.snake.head().step(session.snake.direction);
        session.tick();
        assert_eq!(session.speed, session.config.min_speed);
    }

    #[test]
    fn test_pause_freezes_and_toggles_back() {
        let mut session = running_session();
        park_food(&mut session);
        let snake = session.snake.clone();
        let food = session.food;

        session.toggle_pause();
        assert_eq!(session.state, SessionState::Paused);

        let outcome = session.tick();
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(session.snake, snake);
        assert_eq!(session.food, food);
        assert_eq!(session.score, 0);

        session.toggle_pause();
        assert_eq!(session.state, SessionState::Running);
    }

    #[test]
    fn test_toggle_pause_ignored_outside_play() {
        let mut session = GameSession::new(GameConfig::default());
        session.toggle_pause();
        assert_eq!(session.state, SessionState::NotStarted);

        session.state = SessionState::GameOver;
        session.toggle_pause();
        assert_eq!(session.state, SessionState::GameOver);
    }

    #[test]
    fn test_steering_suppressed_after_game_over() {
        let mut session = running_session();
        session.state = SessionState::GameOver;

        session.steer(Direction::Left);

        assert!(session.queue.is_empty());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = running_session();
        session.food = session.snake.head().step(Direction::Up);
        session.tick();
        session.steer(Direction::Left);
        session.state = SessionState::GameOver;

        session.start();

        assert_eq!(session.state, SessionState::Running);
        assert_eq!(session.score, 0);
        assert_eq!(session.speed, session.config.initial_speed);
        assert!(session.queue.is_empty());
        assert_eq!(session.snake.direction, Direction::Up);
        assert_eq!(
            session.snake.body,
            vec![
                Position::new(10, 10),
                Position::new(10, 11),
                Position::new(10, 12),
            ]
        );
        assert!(!session.snake.occupies(session.food));
    }
}
