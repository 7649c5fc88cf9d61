//! Actions after the run is decided are rejected without touching the world.

use super::support::*;

fn lost_game() -> Game {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 2, x: 2 }, 1, 1)
        .enemy(Pos { y: 2, x: 3 }, 5, 4)
        .build();
    game.apply_action(Action::Attack).unwrap();
    assert_eq!(game.phase(), Phase::Lost);
    game
}

fn won_game() -> Game {
    let mut game = Arena::open(5, 5)
        .hero(Pos { y: 2, x: 2 }, 10, 9)
        .enemy(Pos { y: 2, x: 3 }, 5, 4)
        .tile(Pos { y: 1, x: 2 }, TileKind::Potion)
        .build();
    game.apply_action(Action::Attack).unwrap();
    assert_eq!(game.phase(), Phase::Won);
    game
}

fn assert_every_action_rejected(mut game: Game, phase: Phase) {
    let before = world_fingerprint(&game);
    let (turn, hash, log_len) = (game.turn(), game.snapshot_hash(), game.log().len());

    let mut actions: Vec<Action> = Direction::ALL.into_iter().map(Action::Move).collect();
    actions.push(Action::Attack);
    for action in actions {
        assert_eq!(game.apply_action(action), Err(GameError::InvalidAction { phase }));
    }

    assert_eq!(world_fingerprint(&game), before);
    assert_eq!(game.turn(), turn);
    assert_eq!(game.snapshot_hash(), hash);
    assert_eq!(game.log().len(), log_len);
}

#[test]
fn lost_run_rejects_every_action() {
    assert_every_action_rejected(lost_game(), Phase::Lost);
}

#[test]
fn won_run_rejects_every_action() {
    // Moving up would otherwise pick up the potion.
    assert_every_action_rejected(won_game(), Phase::Won);
}

#[test]
fn invalid_action_error_names_the_phase() {
    let mut game = lost_game();
    let err = game.apply_action(Action::Attack).unwrap_err();
    assert!(err.to_string().contains("Lost"), "unexpected message: {err}");
}

#[test]
fn hud_keeps_reporting_after_the_end() {
    let game = won_game();
    let hud = game.hud_stats();
    assert_eq!(hud.phase, Phase::Won);
    assert_eq!(hud.killed, 1);
    assert_eq!(hud.total_enemies, 1);
}
