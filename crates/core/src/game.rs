//! Turn engine: owns one run's state and resolves player actions into world changes.
//! Movement, combat and the enemy sweep live in focused submodules.

use std::hash::Hasher;

use log::{info, trace};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use xxhash_rust::xxh3::Xxh3;

use crate::config::GameConfig;
use crate::dice::pick;
use crate::mapgen::generate_dungeon;
use crate::state::{Actor, GameState};
use crate::types::*;

mod combat;
mod enemy_turn;
mod movement;

#[cfg(test)]
mod test_support;

pub struct Game {
    seed: u64,
    turn: u64,
    rng: ChaCha8Rng,
    config: GameConfig,
    total_enemies: u32,
    state: GameState,
    log: Vec<LogEvent>,
}

impl Game {
    /// Generates a fresh dungeon for `seed`. Nothing is returned if generation fails.
    pub fn new(seed: u64, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (map, placement) = generate_dungeon(config, &mut rng)?;

        let hero = Actor::new(placement.hero, config.hero_hp, config.hero_attack);
        let enemies = placement
            .enemies
            .into_iter()
            .map(|pos| Actor::new(pos, config.enemy_hp, config.enemy_attack));
        let mut state = GameState::new(map, hero, enemies);
        // A dungeon configured without enemies is cleared from the start.
        if state.enemies.is_empty() {
            state.phase = Phase::Won;
        }

        info!("new run seed={seed} enemies={}", config.enemy_count);
        Ok(Self::from_parts(seed, rng, config, state))
    }

    /// Wraps a hand-built state. The enemy total is taken from the state itself
    /// (`killed` plus living enemies), not from `config.enemy_count`.
    pub fn with_state(seed: u64, config: &GameConfig, state: GameState) -> Self {
        Self::from_parts(seed, ChaCha8Rng::seed_from_u64(seed), config, state)
    }

    fn from_parts(seed: u64, rng: ChaCha8Rng, config: &GameConfig, state: GameState) -> Self {
        let total_enemies = state.counters.killed + state.enemies.len() as u32;
        Self { seed, turn: 0, rng, config: config.clone(), total_enemies, state, log: Vec::new() }
    }

    pub fn apply_action(&mut self, action: Action) -> Result<TurnOutcome, GameError> {
        if self.state.phase.is_terminal() {
            return Err(GameError::InvalidAction { phase: self.state.phase });
        }

        let accepted = match action {
            Action::Move(direction) => self.resolve_move(direction),
            Action::Attack => {
                self.resolve_attack();
                true
            }
        };
        if !accepted {
            trace!("turn {} {action:?} blocked", self.turn);
            return Ok(TurnOutcome::Blocked);
        }

        if self.state.phase == Phase::Playing {
            self.run_enemy_turn();
        }
        self.turn += 1;
        trace!(
            "turn {} {action:?} -> hp={} enemies={} phase={:?}",
            self.turn,
            self.state.hero.hp,
            self.state.enemies.len(),
            self.state.phase
        );

        Ok(match self.state.phase {
            Phase::Playing => TurnOutcome::Resolved,
            Phase::Won => TurnOutcome::Finished(RunOutcome::Victory),
            Phase::Lost => TurnOutcome::Finished(RunOutcome::Defeat),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of actions that were processed (blocked moves do not count).
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn total_enemies(&self) -> u32 {
        self.total_enemies
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn hud_stats(&self) -> HudStats {
        let hero = &self.state.hero;
        HudStats {
            hp: hero.hp,
            max_hp: hero.max_hp,
            attack: hero.attack,
            potions_carried: self.state.counters.potions_carried,
            killed: self.state.counters.killed,
            total_enemies: self.total_enemies,
            phase: self.state.phase,
        }
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);

        let map = &self.state.map;
        hasher.write_usize(map.width);
        hasher.write_usize(map.height);
        for tile in &map.tiles {
            hasher.write_u8(*tile as u8);
        }

        write_actor(&mut hasher, &self.state.hero);
        for enemy in self.state.enemies.values() {
            write_actor(&mut hasher, enemy);
        }
        hasher.write_u32(self.state.counters.potions_carried);
        hasher.write_u32(self.state.counters.killed);
        hasher.write_u8(self.state.phase as u8);

        hasher.finish()
    }

    fn finish(&mut self, outcome: RunOutcome) {
        self.state.phase = match outcome {
            RunOutcome::Victory => Phase::Won,
            RunOutcome::Defeat => Phase::Lost,
        };
        self.log.push(LogEvent::RunFinished(outcome));
        info!(
            "run seed={} finished {outcome:?} after {} turns, killed {}/{}",
            self.seed,
            self.turn + 1,
            self.state.counters.killed,
            self.total_enemies
        );
    }
}

fn write_actor(hasher: &mut Xxh3, actor: &Actor) {
    hasher.write_i32(actor.pos.y);
    hasher.write_i32(actor.pos.x);
    hasher.write_i32(actor.hp);
    hasher.write_i32(actor.max_hp);
    hasher.write_i32(actor.attack);
    hasher.write_u8(u8::from(actor.just_retaliated));
}
