//! Tuning knobs for one generated level.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted room side. Bigger rooms would be clipped to any grid
/// that fits in memory anyway.
pub const MAX_ROOM_SIZE: u32 = 1 << 16;

/// Largest accepted grid side; positions are `i32`.
pub const MAX_GRID_SIZE: u32 = i32::MAX as u32;

/// Input to a single generation run. Immutable once the run starts.
///
/// Ranges follow two conventions: corridor steps, room counts and room sizes
/// are half-open (`[min, max)`, collapsing to `min` when equal), while rooms
/// per branch is inclusive (`[min, max]`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: u32,
    pub height: u32,
    /// Per-step probability of the walk changing direction.
    pub turn_chance: f32,
    pub min_corridor_steps: u32,
    pub max_corridor_steps: u32,
    pub min_rooms: u32,
    pub max_rooms: u32,
    pub min_room_size: u32,
    pub max_room_size: u32,
    /// Skip the occupancy check so rooms may overlap or touch.
    pub overlap_rooms: bool,
    /// Probability, checked once per main-walk room attempt, of recording a branch.
    pub branch_chance: f32,
    pub min_rooms_per_branch: u32,
    pub max_rooms_per_branch: u32,
    /// Consecutive failed room placements tolerated before the run aborts.
    /// `None` retries forever, which can hang on a grid too small for its rooms.
    pub max_placement_retries: Option<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            turn_chance: 0.2,
            min_corridor_steps: 6,
            max_corridor_steps: 15,
            min_rooms: 5,
            max_rooms: 8,
            min_room_size: 3,
            max_room_size: 10,
            overlap_rooms: false,
            branch_chance: 0.2,
            min_rooms_per_branch: 1,
            max_rooms_per_branch: 3,
            max_placement_retries: None,
        }
    }
}

impl GenerationConfig {
    pub fn square(size: u32) -> Self {
        Self { width: size, height: size, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }

        let limits = [
            ("width", self.width, MAX_GRID_SIZE),
            ("height", self.height, MAX_GRID_SIZE),
            ("max_room_size", self.max_room_size, MAX_ROOM_SIZE),
        ];
        for (field, value, limit) in limits {
            if value > limit {
                return Err(ConfigError::TooLarge { field, value, limit });
            }
        }

        let ranges = [
            ("corridor_steps", self.min_corridor_steps, self.max_corridor_steps),
            ("rooms", self.min_rooms, self.max_rooms),
            ("room_size", self.min_room_size, self.max_room_size),
            ("rooms_per_branch", self.min_rooms_per_branch, self.max_rooms_per_branch),
        ];
        for (field, min, max) in ranges {
            if min > max {
                return Err(ConfigError::InvertedRange { field, min, max });
            }
        }

        for (field, value) in
            [("turn_chance", self.turn_chance), ("branch_chance", self.branch_chance)]
        {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { field, value });
            }
        }

        Ok(())
    }
}
