//! Walk cursor state and the fixed-length corridor carve shared by the main
//! walk and every branch.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::types::{Direction, Pos, TileKind};

use super::direction::random_valid_direction;
use super::grid::Grid;
use super::rng::WalkRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct WalkState {
    pub pos: Pos,
    pub facing: Direction,
    /// Rooms placed by this walk. On the main walk this also includes the
    /// rooms reserved for branches recorded along the way.
    pub room_count: u32,
}

impl WalkState {
    pub(super) fn new(pos: Pos, facing: Direction) -> Self {
        Self { pos, facing, room_count: 0 }
    }

    /// Walks a corridor of `[min_corridor_steps, max_corridor_steps)` steps,
    /// marking `Empty` cells as `Corridor`. Every step counts, including steps
    /// over cells that are already carved. Returns the number of newly marked cells.
    pub(super) fn carve_corridor(
        &mut self,
        grid: &mut Grid,
        config: &GenerationConfig,
        rng: &mut impl WalkRng,
    ) -> Result<usize, GenerationError> {
        let length = rng.range(config.min_corridor_steps, config.max_corridor_steps);
        let mut carved = 0;
        for _ in 0..length {
            if grid.get(self.pos) == TileKind::Empty {
                grid.set(TileKind::Corridor, self.pos);
                carved += 1;
            }

            if rng.chance(config.turn_chance) {
                self.facing = random_valid_direction(grid, self.pos, self.facing, rng)?;
            }
            // Checked after the turn roll, so both can fire in one step.
            if !grid.in_bounds(self.pos.step(self.facing)) {
                self.facing = random_valid_direction(grid, self.pos, self.facing, rng)?;
            }

            self.pos = self.pos.step(self.facing);
        }
        Ok(carved)
    }
}
