use std::collections::VecDeque;

use super::direction::Direction;

/// At most this many direction changes may be waiting between ticks
const CAPACITY: usize = 2;

/// FIFO buffer of steering inputs not yet applied to the snake.
///
/// Buffering two moves lets a quick "up then left" double-tap land on two
/// consecutive ticks instead of the second press overwriting the first.
#[derive(Debug, Default)]
pub struct MoveQueue {
    pending: VecDeque<Direction>,
}

impl MoveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a steering input.
    ///
    /// Rejected silently when the queue is full, or when `requested` would
    /// reverse the most recently queued direction (or `current`, the snake's
    /// direction, if nothing is queued) — an instant U-turn into the neck.
    pub fn push(&mut self, requested: Direction, current: Direction) {
        let reference = self.pending.back().copied().unwrap_or(current);
        if requested.is_reversal_of(reference) {
            return;
        }

        if self.pending.len() < CAPACITY {
            self.pending.push_back(requested);
        }
    }

    /// Take the oldest pending direction, if any
    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_come_out_in_arrival_order() {
        let mut queue = MoveQueue::new();
        queue.push(Direction::Left, Direction::Up);
        queue.push(Direction::Down, Direction::Up);

        assert_eq!(queue.pop(), Some(Direction::Left));
        assert_eq!(queue.pop(), Some(Direction::Down));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_reversal_of_current_direction_rejected() {
        let mut queue = MoveQueue::new();
        queue.push(Direction::Down, Direction::Up);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_reversal_of_last_queued_rejected() {
        let mut queue = MoveQueue::new();
        queue.push(Direction::Left, Direction::Up);
        // Right reverses the queued Left, even though Up is still current
        queue.push(Direction::Right, Direction::Up);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_non_reversal_after_queued_turn_accepted() {
        let mut queue = MoveQueue::new();
        queue.push(Direction::Left, Direction::Up);
        // Down reverses nothing pending; Left is the reference now
        queue.push(Direction::Down, Direction::Up);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_third_input_dropped() {
        let mut queue = MoveQueue::new();
        queue.push(Direction::Left, Direction::Up);
        queue.push(Direction::Down, Direction::Up);
        queue.push(Direction::Right, Direction::Up);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(Direction::Left));
        assert_eq!(queue.pop(), Some(Direction::Down));
    }

    #[test]
    fn test_clear_empties_queue() {
        let mut queue = MoveQueue::new();
        queue.push(Direction::Left, Direction::Up);
        queue.clear();
        assert!(queue.is_empty());
    }
}
