//! Shared fixtures for the engine test suites.
//! Builds small hand-laid arenas so tests do not depend on generated layouts.

use super::*;
use crate::state::Map;

pub(super) const ARENA_SEED: u64 = 4_242;

pub(super) struct Arena {
    map: Map,
    hero: Actor,
    enemies: Vec<Actor>,
    config: GameConfig,
}

impl Arena {
    /// All-empty grid with a 10 hp / 1 attack hero in the middle.
    pub(super) fn open(width: usize, height: usize) -> Self {
        let center = Pos { y: (height / 2) as i32, x: (width / 2) as i32 };
        Self {
            map: Map::filled(width, height, TileKind::Empty),
            hero: Actor::new(center, 10, 1),
            enemies: Vec::new(),
            config: GameConfig {
                width: width as u32,
                height: height as u32,
                ..GameConfig::default()
            },
        }
    }

    pub(super) fn hero(mut self, pos: Pos, hp: i32, attack: i32) -> Self {
        self.hero = Actor::new(pos, hp, attack);
        self
    }

    pub(super) fn hero_hp(mut self, hp: i32, max_hp: i32) -> Self {
        self.hero.hp = hp;
        self.hero.max_hp = max_hp;
        self
    }

    pub(super) fn enemy(mut self, pos: Pos, hp: i32, attack: i32) -> Self {
        self.enemies.push(Actor::new(pos, hp, attack));
        self
    }

    pub(super) fn tile(mut self, pos: Pos, tile: TileKind) -> Self {
        self.map.set_tile(pos, tile);
        self
    }

    pub(super) fn potion_heal(mut self, amount: i32) -> Self {
        self.config.potion_heal = amount;
        self
    }

    pub(super) fn weapon_bonus(mut self, amount: i32) -> Self {
        self.config.weapon_attack_bonus = amount;
        self
    }

    pub(super) fn build(self) -> Game {
        let state = GameState::new(self.map, self.hero, self.enemies);
        Game::with_state(ARENA_SEED, &self.config, state)
    }
}

/// Snapshot of everything a terminal phase must leave untouched.
pub(super) fn world_fingerprint(game: &Game) -> (Vec<TileKind>, Actor, Vec<Actor>, u32, u32) {
    let state = game.state();
    (
        state.map.tiles.clone(),
        state.hero.clone(),
        state.enemies.values().cloned().collect(),
        state.counters.potions_carried,
        state.counters.killed,
    )
}

pub(super) fn enemy_positions(game: &Game) -> Vec<Pos> {
    game.state().enemies.values().map(|enemy| enemy.pos).collect()
}
