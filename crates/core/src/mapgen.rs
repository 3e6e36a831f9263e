//! Drunkard's-walk level generation split into coherent submodules.

mod branch;
mod direction;
mod generator;
mod grid;
mod model;
mod rng;
mod room;
mod walk;

pub use branch::BranchPoint;
pub use generator::LevelGenerator;
pub use model::{GenerationStats, LevelLayout, PlacedRoom, RoomOrigin};
pub use rng::{WalkRng, seeded_rng};
pub use room::RoomRect;

use crate::config::GenerationConfig;
use crate::error::GenerationError;

/// Generates one level. The same config and seed always produce the same layout.
pub fn generate(config: &GenerationConfig, seed: u64) -> Result<LevelLayout, GenerationError> {
    LevelGenerator::seeded(config.clone(), seed).generate()
}

pub fn generate_with_rng<R: WalkRng>(
    config: &GenerationConfig,
    rng: R,
) -> Result<LevelLayout, GenerationError> {
    LevelGenerator::with_rng(config.clone(), rng).generate()
}
