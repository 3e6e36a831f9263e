//! Deferred side walks recorded during the main walk.

use crate::types::{Direction, Pos};

/// Where a branch resumes and how many rooms it still owes. Recorded once on
/// the main walk and replayed unchanged after it finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchPoint {
    pub pos: Pos,
    pub facing: Direction,
    /// Zero when the main walk had no room budget left to hand out.
    pub rooms: u32,
}

impl BranchPoint {
    /// Trims `requested` so `claimed + rooms` never exceeds `desired`.
    pub(super) fn reserve(
        pos: Pos,
        facing: Direction,
        requested: u32,
        claimed: u32,
        desired: u32,
    ) -> Self {
        let rooms = if claimed.saturating_add(requested) > desired {
            desired.saturating_sub(claimed)
        } else {
            requested
        };
        Self { pos, facing, rooms }
    }
}
