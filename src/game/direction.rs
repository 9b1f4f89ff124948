/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit delta (dx, dy) for this direction, y growing downward
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns true if moving from self to other would be a 180-degree turn
    pub fn is_reversal_of(&self, other: Direction) -> bool {
        let (dx, dy) = self.delta();
        let (ox, oy) = other.delta();
        dx == -ox && dy == -oy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_unit_vectors() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_reversal_detection() {
        assert!(Direction::Up.is_reversal_of(Direction::Down));
        assert!(Direction::Down.is_reversal_of(Direction::Up));
        assert!(Direction::Left.is_reversal_of(Direction::Right));
        assert!(Direction::Right.is_reversal_of(Direction::Left));

        assert!(!Direction::Up.is_reversal_of(Direction::Up));
        assert!(!Direction::Up.is_reversal_of(Direction::Left));
        assert!(!Direction::Right.is_reversal_of(Direction::Down));
    }
}
