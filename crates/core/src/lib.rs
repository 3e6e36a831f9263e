pub mod config;
pub mod error;
pub mod mapgen;
pub mod types;

pub use config::{GenerationConfig, MAX_GRID_SIZE, MAX_ROOM_SIZE};
pub use error::{ConfigError, GenerationError};
pub use mapgen::{
    BranchPoint, GenerationStats, LevelGenerator, LevelLayout, PlacedRoom, RoomOrigin, RoomRect,
    WalkRng, generate, generate_with_rng,
};
pub use types::*;
