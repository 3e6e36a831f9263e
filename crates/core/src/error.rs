//! Error types for configuration validation and level generation.

use thiserror::Error;

use crate::types::{Direction, Pos};

/// A configuration that cannot produce a level. Raised before any grid exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
    #[error("{field}: minimum {min} exceeds maximum {max}")]
    InvertedRange { field: &'static str, min: u32, max: u32 },
    #[error("{field}: {value} exceeds the supported maximum of {limit}")]
    TooLarge { field: &'static str, value: u32, limit: u32 },
    #[error("{field}: probability {value} is outside [0, 1]")]
    ProbabilityOutOfRange { field: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("invalid generation config: {0}")]
    Config(#[from] ConfigError),
    /// The walk reached a cell with no forward or sideways move left inside
    /// the grid. The grid is too small for the configured step bounds.
    #[error("no valid direction from {pos} while facing {facing:?}")]
    DirectionExhausted { pos: Pos, facing: Direction },
    #[error("room placement failed {attempts} times in a row near {pos}")]
    PlacementRetriesExhausted { pos: Pos, attempts: u32 },
}
