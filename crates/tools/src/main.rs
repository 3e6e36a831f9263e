use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use levelgen::{GenerationConfig, LevelGenerator};
use log::info;

mod config_file;
mod render;
mod seed;

use config_file::{Overrides, load_config};
use seed::SeedChoice;

#[derive(Parser)]
#[command(author, version, about = "Generate drunkard's-walk levels and print them", long_about = None)]
struct Args {
    /// TOML file with generation settings; missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the first level; a fresh one is generated when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Number of levels to generate from consecutive draws of the same stream
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,
    /// Square grid size
    #[arg(long)]
    size: Option<u32>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    #[arg(long)]
    overlap_rooms: bool,
    #[arg(long)]
    branch_chance: Option<f32>,
    /// Abort a level after this many consecutive failed room placements
    #[arg(long)]
    max_retries: Option<u32>,
    /// Print only the summary line for each level
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            size: self.size,
            width: self.width,
            height: self.height,
            overlap_rooms: self.overlap_rooms,
            branch_chance: self.branch_chance,
            max_placement_retries: self.max_retries,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => GenerationConfig::default(),
    };
    let config = args.overrides().apply(base);
    config.validate().context("Generation config is invalid")?;

    let seed = SeedChoice::resolve(args.seed);
    if let SeedChoice::Generated(value) = seed {
        info!("no --seed given, generated {value}");
    }
    println!("Seed: {}", seed.value());

    let mut generator = LevelGenerator::seeded(config, seed.value());
    for index in 0..args.count {
        let layout = generator
            .generate()
            .with_context(|| format!("Level {index} failed to generate"))?;
        if !args.quiet {
            print!("{}", render::render_ascii(&layout));
        }
        println!(
            "Level {index}: {} fingerprint={:016x}",
            render::summary(&layout),
            layout.fingerprint()
        );
    }

    Ok(())
}
