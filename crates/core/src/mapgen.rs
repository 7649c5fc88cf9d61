//! Procedural dungeon synthesis split into coherent submodules.

pub mod model;

mod generator;
mod layout;
mod placement;

use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::state::Map;
use crate::types::GameError;

pub use generator::MapGenerator;
pub use layout::RoomRect;
pub use model::{GeneratedMap, Placement};
pub use placement::{PLACEMENT_ATTEMPTS_PER_TILE, place_entities};

/// Carves a fresh map and places every entity on it, drawing from one stream.
pub fn generate_dungeon(
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
) -> Result<(Map, Placement), GameError> {
    let GeneratedMap { mut map, .. } = MapGenerator::new(config).generate(rng);
    let placement = place_entities(&mut map, config, rng)?;
    Ok((map, placement))
}
