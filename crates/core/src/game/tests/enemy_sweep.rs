//! Enemy turn: adjacent strikes, retaliation skip and random wandering.

use super::support::*;

#[test]
fn adjacent_enemy_strikes_once_per_sweep() {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 2, x: 2 }, 10, 1)
        .enemy(Pos { y: 2, x: 1 }, 5, 3)
        .build();

    game.run_enemy_turn();

    assert_eq!(game.state().hero.hp, 7);
    assert_eq!(enemy_positions(&game), vec![Pos { y: 2, x: 1 }]);
}

#[test]
fn sweep_stops_as_soon_as_the_hero_dies() {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 2, x: 2 }, 3, 1)
        .enemy(Pos { y: 1, x: 2 }, 5, 5)
        .enemy(Pos { y: 3, x: 2 }, 5, 5)
        .build();

    game.run_enemy_turn();

    assert_eq!(game.phase(), Phase::Lost);
    assert_eq!(game.state().hero.hp, 0);
    let hits = game
        .log()
        .iter()
        .filter(|event| matches!(event, LogEvent::HeroDamaged { .. }))
        .count();
    assert_eq!(hits, 1);
    assert_eq!(game.log().last(), Some(&LogEvent::RunFinished(RunOutcome::Defeat)));
}

#[test]
fn retaliating_enemy_skips_one_sweep_then_resumes() {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 2, x: 2 }, 10, 1)
        .enemy(Pos { y: 2, x: 3 }, 5, 2)
        .build();
    for enemy in game.state.enemies.values_mut() {
        enemy.just_retaliated = true;
    }

    game.run_enemy_turn();
    assert_eq!(game.state().hero.hp, 10);
    assert!(game.state().enemies.values().all(|enemy| !enemy.just_retaliated));

    game.run_enemy_turn();
    assert_eq!(game.state().hero.hp, 8);
}

#[test]
fn wandering_only_enters_free_floor() {
    let blocked = [
        (Pos { y: 0, x: 1 }, TileKind::Wall),
        (Pos { y: 1, x: 0 }, TileKind::Sword),
        (Pos { y: 1, x: 2 }, TileKind::Potion),
    ];
    let mut arena = Arena::open(6, 6).hero(Pos { y: 4, x: 4 }, 1_000, 1);
    for (pos, tile) in blocked {
        arena = arena.tile(pos, tile);
    }
    let mut game = arena.enemy(Pos { y: 1, x: 1 }, 5, 0).enemy(Pos { y: 2, x: 1 }, 5, 0).build();

    for _ in 0..300 {
        game.run_enemy_turn();
        let positions = enemy_positions(&game);
        assert_ne!(positions[0], positions[1], "two enemies share a tile");
        for pos in &positions {
            assert_eq!(game.state().map.tile_at(*pos), TileKind::Empty, "enemy on {pos:?}");
            assert_ne!(*pos, game.state().hero.pos);
        }
    }
    for (pos, tile) in blocked {
        assert_eq!(game.state().map.tile_at(pos), tile, "wandering disturbed {pos:?}");
    }
}

#[test]
fn wandering_eventually_moves() {
    let start = Pos { y: 0, x: 0 };
    let mut game = Arena::open(9, 9)
        .hero(Pos { y: 4, x: 4 }, 10, 1)
        .enemy(start, 5, 1)
        .build();

    let mut moved = false;
    for _ in 0..50 {
        game.run_enemy_turn();
        if enemy_positions(&game)[0] != start {
            moved = true;
            break;
        }
    }
    assert!(moved, "enemy stayed put for 50 sweeps");
}

#[test]
fn boxed_in_enemy_never_moves() {
    let enemy = Pos { y: 2, x: 2 };
    let mut arena = Arena::open(5, 5).hero(Pos { y: 0, x: 0 }, 10, 1);
    for direction in Direction::ALL {
        arena = arena.tile(enemy.step(direction), TileKind::Wall);
    }
    let mut game = arena.enemy(enemy, 5, 1).build();

    for _ in 0..40 {
        game.run_enemy_turn();
    }
    assert_eq!(enemy_positions(&game), vec![enemy]);
}
