//! Room rectangles, the padded occupancy check, and stamping.

use log::trace;

use crate::config::GenerationConfig;
use crate::types::{Pos, TileKind};

use super::grid::Grid;
use super::rng::WalkRng;

/// Axis-aligned room footprint. The origin may sit outside the grid when a
/// room is centered near an edge; only the in-bounds part is ever stamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoomRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl RoomRect {
    pub fn centered_at(center: Pos, width: u32, height: u32) -> Self {
        Self {
            x: center.x - (width / 2) as i32,
            y: center.y - (height / 2) as i32,
            width,
            height,
        }
    }

    pub fn expanded(self, margin: u32) -> Self {
        let pad = i32::try_from(margin).unwrap_or(i32::MAX);
        Self {
            x: self.x.saturating_sub(pad),
            y: self.y.saturating_sub(pad),
            width: self.width.saturating_add(margin.saturating_mul(2)),
            height: self.height.saturating_add(margin.saturating_mul(2)),
        }
    }

    fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= self.x
            && pos.y >= self.y
            && i64::from(pos.x) < self.right()
            && i64::from(pos.y) < self.bottom()
    }

    pub fn intersects(self, other: &Self) -> bool {
        i64::from(self.x) < other.right()
            && i64::from(other.x) < self.right()
            && i64::from(self.y) < other.bottom()
            && i64::from(other.y) < self.bottom()
    }

    /// The part of `self` inside a `width` x `height` grid. Zero-sized when
    /// the two do not overlap.
    pub fn clipped(self, width: usize, height: usize) -> Self {
        let left = self.x.max(0);
        let top = self.y.max(0);
        let right = self.right().min(width as i64);
        let bottom = self.bottom().min(height as i64);
        Self {
            x: left,
            y: top,
            width: (right - i64::from(left)).max(0) as u32,
            height: (bottom - i64::from(top)).max(0) as u32,
        }
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (0..self.width as i32).flat_map(move |dx| {
            (0..self.height as i32).map(move |dy| Pos::new(self.x + dx, self.y + dy))
        })
    }
}

/// Any `Room` cell within one cell of `rect` blocks it. Corridors never do.
fn blocked_by_room(grid: &Grid, rect: RoomRect) -> bool {
    let (width, height) = grid.dimensions();
    rect.expanded(1)
        .clipped(width, height)
        .cells()
        .any(|pos| grid.try_get(pos) == Some(TileKind::Room))
}

/// Width is drawn before height.
fn draw_room(center: Pos, config: &GenerationConfig, rng: &mut impl WalkRng) -> RoomRect {
    let width = rng.range(config.min_room_size, config.max_room_size);
    let height = rng.range(config.min_room_size, config.max_room_size);
    RoomRect::centered_at(center, width, height)
}

fn stamp(grid: &mut Grid, rect: RoomRect) {
    let (width, height) = grid.dimensions();
    for pos in rect.clipped(width, height).cells() {
        grid.set(TileKind::Room, pos);
    }
}

/// Draws a room size and stamps it centered at `center`. Returns `None`
/// without touching the grid when the occupancy check rejects it.
pub(super) fn try_place_room(
    grid: &mut Grid,
    center: Pos,
    config: &GenerationConfig,
    rng: &mut impl WalkRng,
) -> Option<RoomRect> {
    let rect = draw_room(center, config, rng);
    if !config.overlap_rooms && blocked_by_room(grid, rect) {
        trace!("room {}x{} at {center} rejected by occupancy check", rect.width, rect.height);
        return None;
    }

    stamp(grid, rect);
    trace!("room {}x{} stamped at {center}", rect.width, rect.height);
    Some(rect)
}

/// The start room skips the occupancy check.
pub(super) fn place_start_room(
    grid: &mut Grid,
    center: Pos,
    config: &GenerationConfig,
    rng: &mut impl WalkRng,
) -> RoomRect {
    let rect = draw_room(center, config, rng);
    stamp(grid, rect);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_ROOM_SIZE;
    use crate::mapgen::rng::ScriptedRng;

    fn fixed_size_config(size: u32, overlap_rooms: bool) -> GenerationConfig {
        GenerationConfig {
            min_room_size: size,
            max_room_size: size,
            overlap_rooms,
            ..GenerationConfig::default()
        }
    }

    fn room_count(grid: &Grid) -> usize {
        grid.cells().iter().filter(|&&tile| tile == TileKind::Room).count()
    }

    #[test]
    fn centering_truncates_half_extent() {
        let rect = RoomRect::centered_at(Pos::new(10, 10), 3, 4);
        assert_eq!(rect, RoomRect { x: 9, y: 8, width: 3, height: 4 });
        assert!(rect.contains(Pos::new(11, 11)));
        assert!(!rect.contains(Pos::new(12, 11)));
    }

    #[test]
    fn room_touching_another_room_is_rejected_without_mutation() {
        let mut grid = Grid::new(20, 20);
        let config = fixed_size_config(3, false);
        let mut rng = ScriptedRng::zeros();

        let first = try_place_room(&mut grid, Pos::new(5, 5), &config, &mut rng);
        assert!(first.is_some());
        let before = grid.clone();

        // Columns 7..=9 sit directly against the first room's column 6.
        let second = try_place_room(&mut grid, Pos::new(8, 5), &config, &mut rng);
        assert_eq!(second, None);
        assert_eq!(grid, before);

        // One empty column of separation is enough.
        let third = try_place_room(&mut grid, Pos::new(9, 5), &config, &mut rng);
        assert!(third.is_some());
        assert_eq!(room_count(&grid), 18);
    }

    #[test]
    fn corridors_do_not_block_rooms() {
        let mut grid = Grid::new(12, 12);
        for x in 0..12 {
            grid.set(TileKind::Corridor, Pos::new(x, 6));
        }
        let config = fixed_size_config(3, false);
        let placed =
            try_place_room(&mut grid, Pos::new(6, 7), &config, &mut ScriptedRng::zeros());
        assert!(placed.is_some());
        assert_eq!(grid.get(Pos::new(6, 6)), TileKind::Room);
        assert_eq!(grid.get(Pos::new(0, 6)), TileKind::Corridor);
    }

    #[test]
    fn overlap_mode_skips_the_check() {
        let mut grid = Grid::new(12, 12);
        let config = fixed_size_config(4, true);
        let mut rng = ScriptedRng::zeros();
        assert!(try_place_room(&mut grid, Pos::new(5, 5), &config, &mut rng).is_some());
        assert!(try_place_room(&mut grid, Pos::new(6, 6), &config, &mut rng).is_some());
        assert_eq!(room_count(&grid), 16 + 16 - 9);
    }

    #[test]
    fn rooms_at_the_edge_are_clipped_to_the_grid() {
        let mut grid = Grid::new(6, 6);
        let config = fixed_size_config(5, false);
        let rect =
            place_start_room(&mut grid, Pos::new(0, 0), &config, &mut ScriptedRng::zeros());
        assert_eq!(rect, RoomRect { x: -2, y: -2, width: 5, height: 5 });
        assert_eq!(room_count(&grid), 9);
        assert_eq!(grid.get(Pos::new(2, 2)), TileKind::Room);
        assert_eq!(grid.get(Pos::new(3, 0)), TileKind::Empty);
    }

    #[test]
    fn clipping_keeps_only_in_grid_cells() {
        let rect = RoomRect { x: -2, y: 3, width: 5, height: 9 };
        assert_eq!(rect.clipped(6, 6), RoomRect { x: 0, y: 3, width: 3, height: 3 });

        let outside = RoomRect { x: 8, y: 0, width: 2, height: 2 };
        assert_eq!(outside.clipped(6, 6).cells().count(), 0);
    }

    #[test]
    fn huge_rooms_stamp_only_the_grid() {
        let mut grid = Grid::new(7, 5);
        let config = fixed_size_config(MAX_ROOM_SIZE, false);
        let rect =
            place_start_room(&mut grid, Pos::new(3, 2), &config, &mut ScriptedRng::zeros());
        assert_eq!(rect.width, MAX_ROOM_SIZE);
        assert_eq!(room_count(&grid), 35);
        let again = try_place_room(&mut grid, Pos::new(3, 2), &config, &mut ScriptedRng::zeros());
        assert_eq!(again, None);
    }

    #[test]
    fn expansion_saturates_instead_of_overflowing() {
        let rect = RoomRect { x: i32::MIN, y: 0, width: u32::MAX, height: 1 };
        let padded = rect.expanded(1);
        assert_eq!(padded.x, i32::MIN);
        assert_eq!(padded.width, u32::MAX);
        assert_eq!(padded.height, 3);
        assert!(padded.contains(Pos::new(i32::MAX - 1, 0)));
        assert!(!padded.contains(Pos::new(i32::MAX, 0)));
    }

    #[test]
    fn padded_rectangles_detect_adjacency() {
        let left = RoomRect { x: 0, y: 0, width: 3, height: 3 };
        let touching = RoomRect { x: 3, y: 0, width: 2, height: 2 };
        let separated = RoomRect { x: 4, y: 0, width: 2, height: 2 };
        assert!(left.expanded(1).intersects(&touching));
        assert!(!left.expanded(1).intersects(&separated));
        assert!(!left.intersects(&touching));
    }
}
