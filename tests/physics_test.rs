use proptest::prelude::*;

use tui_miner::core::grid::Grid;
use tui_miner::core::physics::{step, StepOutcome};
use tui_miner::core::player::Player;
use tui_miner::types::{Tile, GRID_HEIGHT, GRID_WIDTH, MAX_FALL_SPEED};

/// Run until something other than a plain move happens, or give up.
fn run_until_fatal(player: &mut Player, grid: &Grid, max_ticks: usize) -> Option<StepOutcome> {
    for _ in 0..max_ticks {
        let outcome = step(player, grid);
        if outcome.is_fatal() {
            return Some(outcome);
        }
    }
    None
}

proptest! {
    #[test]
    fn empty_world_always_drops_out_the_bottom(
        x in 0.0f32..(GRID_WIDTH as f32),
        y in 0.0f32..(GRID_HEIGHT as f32 - 1.0),
        vx in -1.0f32..=1.0,
        vy in -1.0f32..=1.0,
    ) {
        let grid = Grid::new();
        let mut player = Player::at(x, y);
        player.vx = vx;
        player.vy = vy;
        player.grounded = false;
        prop_assert_eq!(run_until_fatal(&mut player, &grid, 200), Some(StepOutcome::FellOut));
    }

    #[test]
    fn grounded_player_rests_on_a_solid_tile(
        column in 0usize..GRID_WIDTH,
        floor in 2usize..GRID_HEIGHT,
        ticks in 1usize..120,
    ) {
        let mut grid = Grid::new();
        for x in 0..GRID_WIDTH {
            grid.set(x as i32, floor as i32, Tile::Stone);
        }
        let mut player = Player::at(column as f32, 0.0);
        player.grounded = false;

        for _ in 0..ticks {
            prop_assert_eq!(step(&mut player, &grid), StepOutcome::Moved);
            prop_assert!(player.vy <= MAX_FALL_SPEED);
            if player.grounded {
                let (col, row) = player.tile();
                prop_assert_eq!(player.y, player.y.floor());
                prop_assert!(grid.tile_or_air(col, row + 1).is_solid());
            }
        }
    }

    #[test]
    fn player_never_leaves_the_grid_sideways(
        vx in -2.0f32..2.0,
        ticks in 1usize..200,
    ) {
        let mut grid = Grid::new();
        for x in 0..GRID_WIDTH {
            grid.set(x as i32, 10, Tile::Dirt);
        }
        let mut player = Player::at(8.0, 9.0);
        for _ in 0..ticks {
            player.vx = vx;
            step(&mut player, &grid);
            prop_assert!(player.x >= 0.0 && player.x < GRID_WIDTH as f32);
        }
    }
}

#[test]
fn lava_pool_kills_a_falling_player() {
    let mut grid = Grid::new();
    grid.set(5, 12, Tile::Lava);
    grid.set(5, 15, Tile::Stone);
    // Lava is footing from above, so the fatal case is entering its row.
    let mut player = Player::at(5.0, 12.0);
    player.grounded = false;
    player.vy = 0.6;

    assert_eq!(step(&mut player, &grid), StepOutcome::TouchedLava);
    assert_eq!(player.y, 12.0);
}

#[test]
fn standing_on_lava_is_safe() {
    let mut grid = Grid::new();
    grid.set(3, 9, Tile::Lava);
    let mut player = Player::at(3.0, 8.0);
    for _ in 0..30 {
        assert_eq!(step(&mut player, &grid), StepOutcome::Moved);
    }
    assert!(player.grounded);
    assert_eq!(player.y, 8.0);
}

#[test]
fn void_floor_lets_the_player_through() {
    let mut grid = Grid::new();
    for x in 0..GRID_WIDTH {
        grid.set(x as i32, 6, Tile::Void);
    }
    let mut player = Player::at(4.0, 5.0);
    assert_eq!(run_until_fatal(&mut player, &grid, 200), Some(StepOutcome::FellOut));
}
