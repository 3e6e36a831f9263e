//! Plain-text rendering of a finished layout, north at the top.

use levelgen::{LevelLayout, TileKind};

pub fn glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Empty => '.',
        TileKind::Corridor => '+',
        TileKind::Room => '#',
    }
}

pub fn render_ascii(layout: &LevelLayout) -> String {
    let (width, height) = layout.dimensions();
    let mut out = String::with_capacity((width + 1) * height);
    let rows: Vec<&[TileKind]> = layout.rows().collect();
    for row in rows.iter().rev() {
        out.extend(row.iter().map(|&tile| glyph(tile)));
        out.push('\n');
    }
    out
}

pub fn summary(layout: &LevelLayout) -> String {
    let stats = layout.stats();
    format!(
        "rooms={} (desired {}, main {}, branch {}) branches={} skipped={} corridor_cells={}",
        layout.rooms().len(),
        stats.desired_rooms,
        stats.main_rooms_placed,
        stats.branch_rooms_placed,
        layout.branch_points().len(),
        stats.skipped_branches,
        layout.count(TileKind::Corridor),
    )
}
