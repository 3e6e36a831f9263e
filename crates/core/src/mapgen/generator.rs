//! Drunkard's-walk orchestration: one main walk that alternates corridors and
//! rooms while recording branch points, then a replay of every branch.
//!
//! Branch reservations are added to the main walk's room count the moment
//! they are recorded, so the main walk stops early and the branches place the
//! remainder afterwards.

use log::{debug, warn};
use rand_chacha::ChaCha8Rng;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::types::{Direction, Pos};

use super::branch::BranchPoint;
use super::direction::random_branch_direction;
use super::grid::Grid;
use super::model::{GenerationStats, LevelLayout, PlacedRoom, RoomOrigin};
use super::rng::{WalkRng, seeded_rng};
use super::room::{place_start_room, try_place_room};
use super::walk::WalkState;

pub struct LevelGenerator<R> {
    config: GenerationConfig,
    rng: R,
}

impl LevelGenerator<ChaCha8Rng> {
    pub fn seeded(config: GenerationConfig, seed: u64) -> Self {
        Self::with_rng(config, seeded_rng(seed))
    }
}

impl<R: WalkRng> LevelGenerator<R> {
    pub fn with_rng(config: GenerationConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Runs a full generation on a fresh grid. Repeated calls keep drawing
    /// from the same random stream, so each call yields a new level.
    pub fn generate(&mut self) -> Result<LevelLayout, GenerationError> {
        self.config.validate()?;

        let mut run = Run::new(&self.config);
        let branch_points = run.main_walk(&mut self.rng)?;
        run.replay_branches(&branch_points, &mut self.rng)?;

        Ok(LevelLayout::new(run.grid, run.rooms, branch_points, run.stats))
    }
}

/// Mutable state of one generation run.
struct Run<'a> {
    config: &'a GenerationConfig,
    grid: Grid,
    rooms: Vec<PlacedRoom>,
    stats: GenerationStats,
}

impl<'a> Run<'a> {
    fn new(config: &'a GenerationConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config.width as usize, config.height as usize),
            rooms: Vec::new(),
            stats: GenerationStats::default(),
        }
    }

    fn main_walk(&mut self, rng: &mut impl WalkRng) -> Result<Vec<BranchPoint>, GenerationError> {
        let (width, height) = self.grid.dimensions();
        let center = Pos::new((width / 2) as i32, (height / 2) as i32);
        let mut walk = WalkState::new(center, Direction::North);

        let desired = rng.range(self.config.min_rooms, self.config.max_rooms);
        self.stats.desired_rooms = desired;
        debug!("main walk from {center}, aiming for {desired} rooms");

        let start = place_start_room(&mut self.grid, walk.pos, self.config, rng);
        self.rooms.push(PlacedRoom { rect: start, origin: RoomOrigin::Start });
        walk.room_count += 1;

        let mut branch_points = Vec::new();
        let mut failures = 0;
        while walk.room_count < desired {
            self.stats.corridor_cells += walk.carve_corridor(&mut self.grid, self.config, rng)?;

            self.stats.main_room_attempts += 1;
            match try_place_room(&mut self.grid, walk.pos, self.config, rng) {
                Some(rect) => {
                    self.rooms.push(PlacedRoom { rect, origin: RoomOrigin::MainWalk });
                    self.stats.main_rooms_placed += 1;
                    walk.room_count += 1;
                    failures = 0;
                }
                None => {
                    failures += 1;
                    self.check_retries(failures, walk.pos)?;
                }
            }

            if rng.chance(self.config.branch_chance) {
                match self.reserve_branch(&mut walk, desired, rng) {
                    Some(branch) => branch_points.push(branch),
                    None => self.stats.skipped_branches += 1,
                }
            }
        }

        debug!(
            "main walk done: {} rooms placed, {} branch points recorded",
            self.stats.main_rooms_placed + 1,
            branch_points.len()
        );
        Ok(branch_points)
    }

    /// Branches head sideways from the current heading. The reserved rooms
    /// are claimed from the main walk's budget immediately.
    fn reserve_branch(
        &self,
        walk: &mut WalkState,
        desired: u32,
        rng: &mut impl WalkRng,
    ) -> Option<BranchPoint> {
        let Some(facing) =
            random_branch_direction(&self.grid, walk.pos, walk.facing, walk.facing, rng)
        else {
            warn!("no room to branch at {} while facing {:?}; skipping", walk.pos, walk.facing);
            return None;
        };

        let requested =
            rng.range_inclusive(self.config.min_rooms_per_branch, self.config.max_rooms_per_branch);
        let branch = BranchPoint::reserve(walk.pos, facing, requested, walk.room_count, desired);
        walk.room_count += branch.rooms;
        Some(branch)
    }

    fn replay_branches(
        &mut self,
        branch_points: &[BranchPoint],
        rng: &mut impl WalkRng,
    ) -> Result<(), GenerationError> {
        for (index, branch) in branch_points.iter().enumerate() {
            debug!(
                "branch {index} from {} heading {:?}, {} rooms",
                branch.pos, branch.facing, branch.rooms
            );
            let mut walk = WalkState::new(branch.pos, branch.facing);

            while walk.room_count < branch.rooms {
                // Every branch room is guaranteed: keep walking until one fits.
                let mut failures = 0;
                loop {
                    self.stats.corridor_cells +=
                        walk.carve_corridor(&mut self.grid, self.config, rng)?;
                    if let Some(rect) = try_place_room(&mut self.grid, walk.pos, self.config, rng)
                    {
                        self.rooms.push(PlacedRoom { rect, origin: RoomOrigin::Branch(index) });
                        self.stats.branch_rooms_placed += 1;
                        walk.room_count += 1;
                        break;
                    }
                    failures += 1;
                    self.check_retries(failures, walk.pos)?;
                }
            }
        }
        Ok(())
    }

    fn check_retries(&self, failures: u32, pos: Pos) -> Result<(), GenerationError> {
        match self.config.max_placement_retries {
            Some(limit) if failures > limit => {
                Err(GenerationError::PlacementRetriesExhausted { pos, attempts: failures })
            }
            _ => Ok(()),
        }
    }
}
