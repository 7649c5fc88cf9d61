use std::collections::BTreeSet;

use anyhow::{Result, ensure};
use clap::Parser;
use game_core::{Action, Direction, Game, GameConfig, GameError, TileKind};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
    /// Number of consecutive dungeons to play, seeds counting up from --seed
    #[arg(short, long, default_value_t = 1)]
    runs: u32,
}

const ACTIONS: [Action; 6] = [
    Action::Move(Direction::Up),
    Action::Move(Direction::Down),
    Action::Move(Direction::Left),
    Action::Move(Direction::Right),
    Action::Attack,
    Action::Attack, // Bias to fight
];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn check_invariants(game: &Game) -> Result<()> {
    let state = game.state();
    let (width, height) = (state.map.width as i32, state.map.height as i32);
    let mut occupied = BTreeSet::from([state.hero.pos]);

    ensure!(state.hero.hp >= 0 && state.hero.hp <= state.hero.max_hp, "hero hp out of range");
    ensure!(state.map.tile_at(state.hero.pos) != TileKind::Wall, "hero inside wall");
    for enemy in state.enemies.values() {
        ensure!(
            (0..width).contains(&enemy.pos.x) && (0..height).contains(&enemy.pos.y),
            "enemy off grid at {:?}",
            enemy.pos
        );
        ensure!(state.map.tile_at(enemy.pos) == TileKind::Empty, "enemy on non-floor tile");
        ensure!(occupied.insert(enemy.pos), "two actors share {:?}", enemy.pos);
    }
    ensure!(
        state.counters.killed + state.enemies.len() as u32 == game.total_enemies(),
        "kill accounting drifted"
    );
    Ok(())
}

fn fuzz_run(seed: u64, max_turns: u32) -> Result<()> {
    let mut game = Game::new(seed, &GameConfig::default())?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    check_invariants(&game)?;

    for step in 0..max_turns {
        let action = choose(&mut rng, &ACTIONS);
        if game.phase().is_terminal() {
            let frozen = game.snapshot_hash();
            ensure!(
                matches!(game.apply_action(action), Err(GameError::InvalidAction { .. })),
                "terminal run accepted {action:?}"
            );
            ensure!(game.snapshot_hash() == frozen, "terminal run changed state");
            println!(
                "seed {seed}: {:?} after {} turns ({step} actions), killed {}/{}",
                game.phase(),
                game.turn(),
                game.state().counters.killed,
                game.total_enemies()
            );
            return Ok(());
        }
        game.apply_action(action)?;
        check_invariants(&game)?;
    }

    println!("seed {seed}: still playing after {max_turns} actions");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Starting fuzz harness on {} run(s) from seed {} for max {} actions...",
        args.runs, args.seed, args.turns
    );
    for offset in 0..u64::from(args.runs) {
        fuzz_run(args.seed.wrapping_add(offset), args.turns)?;
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
