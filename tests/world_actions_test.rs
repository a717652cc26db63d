use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_miner::core::{Grid, MineOutcome, OreTotals, PlaceError, World};
use tui_miner::engine::{Phase, Session};
use tui_miner::types::{
    AimDirection8, FacingDirection4, MinerAction, Tile, MINE_ANIM_MS, PHASE_DISPLAY_MS,
};

#[test]
fn mining_reaches_three_tiles_and_no_further() {
    let mut grid = Grid::flat();
    for y in 4..7 {
        grid.set(8, y, Tile::Air);
    }
    let mut world = World::from_grid(grid.clone());
    // Spawn drops to the bottom of the shaft.
    let spawn_y = world.player().tile().1;
    assert_eq!(spawn_y, 6);

    // Stand at the top of the shaft instead.
    world.player_mut().y = 3.0;
    assert_eq!(world.mine(AimDirection8::South), MineOutcome::Nothing);
    assert_eq!(world.grid(), &grid);

    world.player_mut().y = 4.0;
    assert!(matches!(
        world.mine(AimDirection8::South),
        MineOutcome::Mined { tile: Tile::Stone, x: 8, y: 7, .. }
    ));
    assert!(world.player().is_mining());
    assert_eq!(world.player().mine_anim_ms, MINE_ANIM_MS);
}

#[test]
fn diagonal_mining_follows_the_step_vector() {
    let mut world = World::from_grid(Grid::flat());
    let outcome = world.mine(AimDirection8::SouthWest);
    assert!(matches!(
        outcome,
        MineOutcome::Mined { tile: Tile::Grass, x: 7, y: 4, .. }
    ));
    assert_eq!(world.player().facing, FacingDirection4::West);
}

#[test]
fn void_is_passed_over_by_the_ray() {
    let mut grid = Grid::flat();
    grid.set(8, 4, Tile::Void);
    let mut world = World::from_grid(grid);
    world.player_mut().y = 3.0;
    assert!(matches!(
        world.mine(AimDirection8::South),
        MineOutcome::Mined { tile: Tile::Stone, x: 8, y: 5, .. }
    ));
    assert_eq!(world.grid().get(8, 4), Some(Tile::Void));
}

#[test]
fn place_failures_leave_world_untouched() {
    let mut world = World::from_grid(Grid::flat());
    let before = world.grid().clone();

    assert_eq!(
        world.place(AimDirection8::East, Tile::Dirt),
        Err(PlaceError::EmptySlot)
    );
    assert_eq!(
        world.place(AimDirection8::East, Tile::Lava),
        Err(PlaceError::NotPlaceable)
    );

    assert_eq!(world.mine(AimDirection8::East), MineOutcome::Nothing);
    assert!(matches!(
        world.mine(AimDirection8::South),
        MineOutcome::Mined { tile: Tile::Grass, .. }
    ));
    assert_eq!(world.inventory().count(Tile::Grass), 1);

    // Buried in stone, every cell in reach is solid.
    world.player_mut().y = 5.0;
    let buried = world.grid().clone();
    assert_eq!(
        world.place(AimDirection8::South, Tile::Grass),
        Err(PlaceError::NoAirInReach)
    );
    assert_eq!(world.inventory().count(Tile::Grass), 1);
    assert_eq!(world.grid(), &buried);
    assert_ne!(world.grid(), &before);
}

#[test]
fn zero_ore_levels_never_report_victory() {
    let world = World::from_grid(Grid::flat());
    assert_eq!(world.ore_totals(), OreTotals::default());
    assert!(!world.victory_reached());
}

#[test]
fn lava_death_freezes_the_score_at_that_instant() {
    let mut grid = Grid::flat();
    grid.set(9, 4, Tile::Emerald);
    grid.set(7, 4, Tile::Diamond);
    grid.set(8, 4, Tile::Lava);
    grid.set(10, 4, Tile::Emerald);

    let mut session = Session::with_rng(2, StdRng::seed_from_u64(8));
    *session.world_mut() = World::from_grid(grid);

    session.set_cursor(Some((9.5, 4.5)));
    assert!(session.apply_action(MinerAction::Mine));
    session.set_cursor(Some((7.5, 4.5)));
    assert!(session.apply_action(MinerAction::Mine));
    assert_eq!(session.score(), 3);

    session.set_cursor(Some((8.5, 5.5)));
    assert!(session.apply_action(MinerAction::Mine));
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            remaining_ms: PHASE_DISPLAY_MS,
            score: 3
        }
    );

    for _ in 0..10 {
        session.tick(16);
        assert_eq!(session.score(), 3);
    }
}
