//! Public data models for generated maps and entity placements.

use std::iter;

use crate::state::Map;
use crate::types::Pos;

use super::layout::RoomRect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    pub map: Map,
    /// Kept only so corridor carving and tests can inspect the layout.
    pub rooms: Vec<RoomRect>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub hero: Pos,
    pub weapons: Vec<Pos>,
    pub potions: Vec<Pos>,
    pub enemies: Vec<Pos>,
}

impl Placement {
    pub fn all_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        iter::once(self.hero)
            .chain(self.weapons.iter().copied())
            .chain(self.potions.iter().copied())
            .chain(self.enemies.iter().copied())
    }
}
