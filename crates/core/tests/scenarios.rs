use levelgen::{GenerationConfig, GenerationError, RoomOrigin, TileKind, generate};

fn single_room_config() -> GenerationConfig {
    GenerationConfig {
        width: 20,
        height: 20,
        min_rooms: 1,
        max_rooms: 2,
        min_corridor_steps: 0,
        max_corridor_steps: 1,
        min_room_size: 3,
        max_room_size: 4,
        branch_chance: 0.0,
        overlap_rooms: true,
        ..GenerationConfig::default()
    }
}

#[test]
fn single_room_config_yields_one_centered_three_by_three_room() {
    for seed in [0_u64, 1, 42, 9_999, u64::MAX] {
        let layout = generate(&single_room_config(), seed).expect("config is valid");
        assert_eq!(layout.dimensions(), (20, 20));

        for row in 0..20 {
            for col in 0..20 {
                let expected = if (9..=11).contains(&row) && (9..=11).contains(&col) {
                    TileKind::Room
                } else {
                    TileKind::Empty
                };
                assert_eq!(layout.cell_at(row, col), expected, "seed={seed} at ({row}, {col})");
            }
        }
    }
}

#[test]
fn certain_branching_records_one_branch_per_main_walk_room() {
    let config = GenerationConfig {
        width: 40,
        height: 40,
        min_rooms: 6,
        max_rooms: 12,
        min_room_size: 2,
        max_room_size: 5,
        overlap_rooms: true,
        branch_chance: 1.0,
        min_rooms_per_branch: 1,
        max_rooms_per_branch: 1,
        ..GenerationConfig::default()
    };

    for seed in 0..25 {
        let layout = generate(&config, seed).expect("config is valid");
        let stats = layout.stats();
        assert_eq!(stats.skipped_branches, 0, "open grid should always offer a branch");
        assert_eq!(stats.main_room_attempts, stats.main_rooms_placed);
        assert_eq!(layout.branch_points().len() as u32, stats.main_rooms_placed, "seed={seed}");
        assert!(layout.branch_points().iter().all(|branch| branch.rooms <= 1));

        let main_rooms =
            layout.rooms().iter().filter(|room| room.origin == RoomOrigin::MainWalk).count();
        assert_eq!(main_rooms as u32, stats.main_rooms_placed);
    }
}

#[test]
fn oversized_start_room_is_clipped_to_the_grid() {
    let config = GenerationConfig {
        width: 6,
        height: 6,
        min_rooms: 1,
        max_rooms: 1,
        min_room_size: 9,
        max_room_size: 9,
        branch_chance: 0.0,
        ..GenerationConfig::default()
    };
    let layout = generate(&config, 1).expect("config is valid");

    assert_eq!(layout.dimensions(), (6, 6));
    assert_eq!(layout.count(TileKind::Room), 36);
    assert_eq!(layout.cell_at(6, 0), TileKind::Empty);
    assert_eq!(layout.cell_at(-1, 3), TileKind::Empty);
}

#[test]
fn rooms_near_an_edge_keep_their_in_grid_cells() {
    let config = GenerationConfig {
        width: 9,
        height: 30,
        min_rooms: 3,
        max_rooms: 4,
        min_room_size: 5,
        max_room_size: 8,
        overlap_rooms: true,
        branch_chance: 0.0,
        ..GenerationConfig::default()
    };
    for seed in 0..20 {
        let layout = generate(&config, seed).expect("config is valid");
        for room in layout.rooms() {
            for pos in room.rect.cells().filter(|&pos| layout.contains(pos)) {
                assert_eq!(layout.tile_at(pos), TileKind::Room, "seed={seed} {pos}");
            }
        }
    }
}

#[test]
fn inverted_config_never_produces_a_grid() {
    let config =
        GenerationConfig { min_corridor_steps: 9, max_corridor_steps: 3, ..single_room_config() };
    let error = generate(&config, 0).expect_err("inverted corridor bounds should be rejected");
    assert!(matches!(error, GenerationError::Config(_)));
    assert!(error.to_string().contains("corridor_steps"));
}
