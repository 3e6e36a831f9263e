//! Bounds-checked tile storage shared by every stage of a generation run.

use log::warn;

use crate::types::{Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Grid {
    width: usize,
    height: usize,
    cells: Vec<TileKind>,
}

impl Grid {
    pub(super) fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![TileKind::Empty; width * height] }
    }

    pub(super) fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub(super) fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    pub(super) fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    /// Reads without logging; `None` outside the grid.
    pub(super) fn try_get(&self, pos: Pos) -> Option<TileKind> {
        self.index(pos).map(|index| self.cells[index])
    }

    /// Out-of-bounds reads warn and yield `Empty`.
    pub(super) fn get(&self, pos: Pos) -> TileKind {
        self.try_get(pos).unwrap_or_else(|| {
            warn!("read outside the {}x{} grid at {pos}", self.width, self.height);
            TileKind::Empty
        })
    }

    /// Out-of-bounds writes warn and leave the grid untouched.
    pub(super) fn set(&mut self, value: TileKind, pos: Pos) {
        match self.index(pos) {
            Some(index) => self.cells[index] = value,
            None => {
                warn!("write of {value:?} outside the {}x{} grid at {pos}", self.width, self.height)
            }
        }
    }
}
