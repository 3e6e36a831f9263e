use anyhow::{Result, bail};
use clap::Parser;
use levelgen::{GenerationConfig, LevelLayout, TileKind, generate};

#[derive(Parser)]
#[command(author, version, about = "Generate many levels and check layout invariants", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    #[arg(short = 'n', long, default_value_t = 1000)]
    count: u64,
    #[arg(long, default_value_t = 40)]
    size: u32,
    #[arg(long)]
    overlap_rooms: bool,
    #[arg(long, default_value_t = 100_000)]
    max_retries: u32,
}

fn sweep_config(size: u32, overlap_rooms: bool, max_retries: u32) -> GenerationConfig {
    GenerationConfig {
        overlap_rooms,
        max_placement_retries: Some(max_retries),
        ..GenerationConfig::square(size)
    }
}

fn check_invariants(config: &GenerationConfig, layout: &LevelLayout) -> Result<()> {
    let (width, height) = layout.dimensions();
    if (width, height) != (config.width as usize, config.height as usize) {
        bail!("dimensions {width}x{height} differ from config");
    }

    for room in layout.rooms() {
        for pos in room.rect.cells().filter(|&pos| layout.contains(pos)) {
            if layout.tile_at(pos) != TileKind::Room {
                bail!("room {:?} lost cell {pos}", room.rect);
            }
        }
    }

    if !config.overlap_rooms {
        for (index, left) in layout.rooms().iter().enumerate() {
            for right in &layout.rooms()[index + 1..] {
                let touching = left
                    .rect
                    .expanded(1)
                    .cells()
                    .any(|pos| layout.contains(pos) && right.rect.contains(pos));
                if touching {
                    bail!("rooms {:?} and {:?} touch", left.rect, right.rect);
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = sweep_config(args.size, args.overlap_rooms, args.max_retries);

    println!(
        "Sweeping {} seeds from {} on a {}x{} grid...",
        args.count, args.seed, args.size, args.size
    );
    let mut failures = 0_u64;
    let mut total_rooms = 0_usize;
    for seed in args.seed..args.seed.saturating_add(args.count) {
        match generate(&config, seed) {
            Ok(layout) => {
                total_rooms += layout.rooms().len();
                if let Err(error) = check_invariants(&config, &layout) {
                    failures += 1;
                    println!("seed={seed}: invariant broken: {error}");
                }
            }
            Err(error) => {
                failures += 1;
                println!("seed={seed}: generation failed: {error}");
            }
        }
    }

    println!("Done: {failures} failures, {total_rooms} rooms placed");
    if failures > 0 {
        bail!("{failures} of {} seeds failed", args.count);
    }
    Ok(())
}
