//! Loads generation settings from TOML and layers command-line overrides on top.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use levelgen::GenerationConfig;

pub fn load_config(path: &Path) -> Result<GenerationConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&raw).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config(raw: &str) -> Result<GenerationConfig> {
    let config: GenerationConfig = toml::from_str(raw)?;
    Ok(config)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub size: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub overlap_rooms: bool,
    pub branch_chance: Option<f32>,
    pub max_placement_retries: Option<u32>,
}

impl Overrides {
    /// `width`/`height` win over `size` when both are given.
    pub fn apply(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(size) = self.size {
            config.width = size;
            config.height = size;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.overlap_rooms {
            config.overlap_rooms = true;
        }
        if let Some(chance) = self.branch_chance {
            config.branch_chance = chance;
        }
        if self.max_placement_retries.is_some() {
            config.max_placement_retries = self.max_placement_retries;
        }
        config
    }
}
