//! Hero attacks, retaliation and kill accounting.

use super::support::*;

fn count_events(game: &Game, matcher: impl Fn(&LogEvent) -> bool) -> usize {
    game.log().iter().filter(|event| matcher(event)).count()
}

#[test]
fn lethal_blow_removes_enemy_without_retaliation_and_wins() {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 1, x: 1 }, 10, 5)
        .enemy(Pos { y: 2, x: 1 }, 5, 2)
        .build();

    let outcome = game.apply_action(Action::Attack).unwrap();

    assert_eq!(outcome, TurnOutcome::Finished(RunOutcome::Victory));
    assert!(game.state().enemies.is_empty());
    assert_eq!(game.state().counters.killed, 1);
    assert_eq!(game.state().hero.hp, 10);
    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(count_events(&game, |event| matches!(event, LogEvent::EnemyRetaliated { .. })), 0);
}

#[test]
fn survivor_retaliates_once_and_sits_out_the_following_sweep() {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 2, x: 2 }, 10, 1)
        .enemy(Pos { y: 2, x: 3 }, 5, 2)
        .build();

    let outcome = game.apply_action(Action::Attack).unwrap();

    assert_eq!(outcome, TurnOutcome::Resolved);
    assert_eq!(game.state().hero.hp, 8, "retaliation only, no second hit from the sweep");
    let enemy = game.state().enemies.values().next().unwrap();
    assert_eq!(enemy.hp, 4);
    assert!(!enemy.just_retaliated, "the sweep consumes the flag");
    assert_eq!(count_events(&game, |event| matches!(event, LogEvent::HeroDamaged { .. })), 0);
}

#[test]
fn retaliation_suppression_lasts_a_single_round() {
    // Three columns wide: stepping left wraps the hero to the enemy's other side.
    let mut game = Arena::open(3, 5)
        .hero(Pos { y: 2, x: 0 }, 10, 1)
        .enemy(Pos { y: 2, x: 1 }, 9, 2)
        .tile(Pos { y: 1, x: 1 }, TileKind::Wall)
        .tile(Pos { y: 3, x: 1 }, TileKind::Wall)
        .build();

    game.apply_action(Action::Attack).unwrap();
    assert_eq!(game.state().hero.hp, 8);

    game.apply_action(Action::Move(Direction::Left)).unwrap();
    assert_eq!(game.state().hero.pos, Pos { y: 2, x: 2 });
    // Contact hit on arrival, then a regular strike in the sweep.
    assert_eq!(game.state().hero.hp, 8 - 2 - 2);
}

#[test]
fn attack_strikes_all_four_neighbours() {
    let mut game = Arena::open(7, 7)
        .hero(Pos { y: 3, x: 3 }, 10, 3)
        .enemy(Pos { y: 2, x: 3 }, 3, 1)
        .enemy(Pos { y: 4, x: 3 }, 3, 1)
        .enemy(Pos { y: 3, x: 2 }, 3, 1)
        .enemy(Pos { y: 3, x: 4 }, 3, 1)
        .enemy(Pos { y: 0, x: 0 }, 3, 1)
        .build();

    let outcome = game.apply_action(Action::Attack).unwrap();

    assert_eq!(outcome, TurnOutcome::Resolved);
    assert_eq!(game.state().counters.killed, 4);
    assert_eq!(game.state().enemies.len(), 1);
    assert_eq!(game.state().hero.hp, 10);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn attack_reaches_across_the_wrapped_edge() {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 0, x: 0 }, 10, 4)
        .enemy(Pos { y: 4, x: 0 }, 4, 1)
        .enemy(Pos { y: 2, x: 2 }, 4, 1)
        .build();

    game.apply_action(Action::Attack).unwrap();

    assert_eq!(game.state().counters.killed, 1);
    assert_eq!(game.state().enemies.len(), 1);
}

#[test]
fn no_early_exit_when_hero_falls_mid_attack() {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 2, x: 2 }, 2, 1)
        .enemy(Pos { y: 1, x: 2 }, 10, 2)
        .enemy(Pos { y: 3, x: 2 }, 10, 2)
        .build();

    let outcome = game.apply_action(Action::Attack).unwrap();

    assert_eq!(outcome, TurnOutcome::Finished(RunOutcome::Defeat));
    assert_eq!(game.state().hero.hp, 0);
    assert_eq!(count_events(&game, |event| matches!(event, LogEvent::EnemyDamaged { .. })), 2);
    assert!(game.state().enemies.values().all(|enemy| enemy.hp == 9));
}

#[test]
fn kill_and_retaliation_in_the_same_swing() {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 2, x: 2 }, 10, 3)
        .enemy(Pos { y: 1, x: 2 }, 3, 4)
        .enemy(Pos { y: 3, x: 2 }, 7, 2)
        .build();

    game.apply_action(Action::Attack).unwrap();

    assert_eq!(game.state().counters.killed, 1);
    assert_eq!(game.state().enemies.len(), 1);
    assert_eq!(game.state().hero.hp, 8);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn swinging_at_nothing_still_passes_the_turn() {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 2, x: 2 }, 10, 1)
        .enemy(Pos { y: 0, x: 0 }, 5, 1)
        .build();

    let outcome = game.apply_action(Action::Attack).unwrap();

    assert_eq!(outcome, TurnOutcome::Resolved);
    assert_eq!(game.turn(), 1);
    assert_eq!(game.state().hero.hp, 10);
}

#[test]
fn kill_count_plus_survivors_stays_at_the_starting_total() {
    let mut game = Arena::open(9, 9)
        .hero(Pos { y: 4, x: 4 }, 200, 2)
        .enemy(Pos { y: 3, x: 4 }, 6, 1)
        .enemy(Pos { y: 5, x: 4 }, 4, 1)
        .enemy(Pos { y: 0, x: 0 }, 4, 1)
        .build();
    let total = game.total_enemies();
    assert_eq!(total, 3);

    for _ in 0..6 {
        let killed_before = game.state().counters.killed;
        let alive_before = game.state().enemies.len() as u32;
        if game.apply_action(Action::Attack).is_err() {
            break;
        }
        let killed = game.state().counters.killed;
        let alive = game.state().enemies.len() as u32;
        assert_eq!(killed - killed_before, alive_before - alive);
        assert_eq!(killed + alive, total);
    }
}
