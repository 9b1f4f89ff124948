use rand::Rng;

use super::snake::Position;

/// Pick a uniformly random free cell by rejection sampling.
///
/// Resamples until the cell misses every position in `occupied`; terminates
/// with probability 1 as long as the grid is not completely covered (the
/// snake is always far shorter than grid_size^2 cells in practice).
pub fn place_food<R: Rng>(rng: &mut R, grid_size: usize, occupied: &[Position]) -> Position {
    loop {
        let pos = Position::new(
            rng.gen_range(0..grid_size as i32),
            rng.gen_range(0..grid_size as i32),
        );

        if !occupied.contains(&pos) {
            return pos;
        }
    }
}
