//! The finished level handed to collaborators: read-only tile queries plus
//! a record of how the walk produced them.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Pos, TileKind};

use super::branch::BranchPoint;
use super::grid::Grid;
use super::room::RoomRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomOrigin {
    Start,
    MainWalk,
    /// Index into [`LevelLayout::branch_points`].
    Branch(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedRoom {
    pub rect: RoomRect,
    pub origin: RoomOrigin,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub desired_rooms: u32,
    /// Room attempts after the start room, successful or not.
    pub main_room_attempts: u32,
    pub main_rooms_placed: u32,
    pub branch_rooms_placed: u32,
    /// Branch rolls that succeeded but found no direction to branch in.
    pub skipped_branches: u32,
    pub corridor_cells: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelLayout {
    grid: Grid,
    rooms: Vec<PlacedRoom>,
    branch_points: Vec<BranchPoint>,
    stats: GenerationStats,
}

impl LevelLayout {
    pub(super) fn new(
        grid: Grid,
        rooms: Vec<PlacedRoom>,
        branch_points: Vec<BranchPoint>,
        stats: GenerationStats,
    ) -> Self {
        Self { grid, rooms, branch_points, stats }
    }

    /// `(width, height)` exactly as configured.
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// `row` runs along the width and `col` along the height. Coordinates
    /// outside the grid log a warning and read as `Empty`.
    pub fn cell_at(&self, row: i32, col: i32) -> TileKind {
        self.grid.get(Pos::new(row, col))
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.grid.get(pos)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.grid.in_bounds(pos)
    }

    /// Rows of constant `y`, starting at `y = 0`.
    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        let (width, _) = self.grid.dimensions();
        self.grid.cells().chunks(width)
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.grid.cells().iter().filter(|&&tile| tile == kind).count()
    }

    /// Rooms in the order they were stamped.
    pub fn rooms(&self) -> &[PlacedRoom] {
        &self.rooms
    }

    pub fn branch_points(&self) -> &[BranchPoint] {
        &self.branch_points
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let (width, height) = self.grid.dimensions();
        let mut bytes = Vec::with_capacity(8 + width * height);
        bytes.extend((width as u32).to_le_bytes());
        bytes.extend((height as u32).to_le_bytes());
        bytes.extend(self.grid.cells().iter().map(|tile| tile.code()));
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
