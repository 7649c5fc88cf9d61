use slotmap::SlotMap;

use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    /// Set when an enemy counter-attacked during the hero's Attack; the next enemy
    /// sweep consumes it instead of letting the enemy strike again.
    pub just_retaliated: bool,
}

impl Actor {
    pub fn new(pos: Pos, hp: i32, attack: i32) -> Self {
        Self { pos, hp, max_hp: hp, attack, just_retaliated: false }
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.hp = self.hp.saturating_sub(damage).max(0);
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// Toroidal tile grid; every position is normalised before it is read or written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
}

impl Map {
    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    pub fn wrap(&self, pos: Pos) -> Pos {
        Pos { y: pos.y.rem_euclid(self.height as i32), x: pos.x.rem_euclid(self.width as i32) }
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_empty(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Empty
    }

    /// The four orthogonal neighbours of `pos`, wrapped, in `Direction::ALL` order.
    pub fn neighbors(&self, pos: Pos) -> [Pos; 4] {
        Direction::ALL.map(|direction| self.wrap(pos.step(direction)))
    }

    pub fn is_adjacent(&self, a: Pos, b: Pos) -> bool {
        let a = self.wrap(a);
        let b = self.wrap(b);
        a != b && self.neighbors(a).contains(&b)
    }

    pub fn count(&self, tile: TileKind) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    fn index(&self, pos: Pos) -> usize {
        let pos = self.wrap(pos);
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub potions_carried: u32,
    pub killed: u32,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub map: Map,
    pub hero: Actor,
    pub enemies: SlotMap<EntityId, Actor>,
    pub counters: Counters,
    pub phase: Phase,
}

impl GameState {
    /// Fresh state in the `Playing` phase with zeroed counters.
    pub fn new(map: Map, hero: Actor, enemies: impl IntoIterator<Item = Actor>) -> Self {
        let mut slots = SlotMap::with_key();
        for enemy in enemies {
            slots.insert(enemy);
        }
        Self { map, hero, enemies: slots, counters: Counters::default(), phase: Phase::Playing }
    }

    pub fn enemy_at(&self, pos: Pos) -> Option<EntityId> {
        let pos = self.map.wrap(pos);
        self.enemies.iter().find(|(_, enemy)| enemy.pos == pos).map(|(id, _)| id)
    }

    /// Enemies orthogonally next to `pos`, each once, in neighbour order.
    pub fn adjacent_enemies(&self, pos: Pos) -> Vec<EntityId> {
        let mut found = Vec::with_capacity(4);
        for neighbor in self.map.neighbors(pos) {
            if let Some(id) = self.enemy_at(neighbor)
                && !found.contains(&id)
            {
                found.push(id);
            }
        }
        found
    }
}
