//! Direction choices for the walk: never backtrack, never step off the grid.

use crate::error::GenerationError;
use crate::types::{Direction, Pos};

use super::grid::Grid;
use super::rng::WalkRng;

fn candidates(
    grid: &Grid,
    pos: Pos,
    current: Direction,
    avoid: Option<Direction>,
) -> Vec<Direction> {
    let backtrack = current.opposite();
    Direction::ALL
        .into_iter()
        .filter(|&direction| direction != backtrack && Some(direction) != avoid)
        .filter(|&direction| grid.in_bounds(pos.step(direction)))
        .collect()
}

/// Picks a new heading for a corridor. Running out of candidates means the
/// grid is too small for the walk, so it is reported as an error.
pub(super) fn random_valid_direction(
    grid: &Grid,
    pos: Pos,
    current: Direction,
    rng: &mut impl WalkRng,
) -> Result<Direction, GenerationError> {
    rng.pick(&candidates(grid, pos, current, None))
        .ok_or(GenerationError::DirectionExhausted { pos, facing: current })
}

/// Picks a heading for a new branch, also excluding `avoid`. Crowded corners
/// can leave nothing to pick, in which case the caller skips the branch.
pub(super) fn random_branch_direction(
    grid: &Grid,
    pos: Pos,
    avoid: Direction,
    current: Direction,
    rng: &mut impl WalkRng,
) -> Option<Direction> {
    rng.pick(&candidates(grid, pos, current, Some(avoid)))
}
