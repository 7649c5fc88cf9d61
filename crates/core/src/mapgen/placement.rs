//! Rejection-sampling placement of the hero, item pickups and enemies.
//!
//! Order matters: the hero claims a tile first, items then mark their tiles
//! non-empty, and enemies last take empty tiles away from the hero and each other.
//! Every single placement has a bounded number of draws.

use log::warn;
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::dice::pick;
use crate::state::Map;
use crate::types::{GameError, PlacementTarget, Pos, TileKind};

use super::model::Placement;

/// Draw budget per placement, scaled by grid area.
pub const PLACEMENT_ATTEMPTS_PER_TILE: usize = 16;

pub fn place_entities(
    map: &mut Map,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Placement, GameError> {
    let attempts = map.width * map.height * PLACEMENT_ATTEMPTS_PER_TILE;

    let hero = sample_free_tile(map, rng, PlacementTarget::Hero, attempts, |_| false)?;

    let mut weapons = Vec::new();
    for _ in 0..config.weapon_count {
        let pos = sample_free_tile(map, rng, PlacementTarget::Weapon, attempts, |pos| pos == hero)?;
        map.set_tile(pos, TileKind::Sword);
        weapons.push(pos);
    }

    let mut potions = Vec::new();
    for _ in 0..config.potion_count {
        let pos = sample_free_tile(map, rng, PlacementTarget::Potion, attempts, |pos| pos == hero)?;
        map.set_tile(pos, TileKind::Potion);
        potions.push(pos);
    }

    let mut enemies: Vec<Pos> = Vec::new();
    for _ in 0..config.enemy_count {
        let pos = sample_free_tile(map, rng, PlacementTarget::Enemy, attempts, |pos| {
            pos == hero || enemies.contains(&pos)
        })?;
        enemies.push(pos);
    }

    Ok(Placement { hero, weapons, potions, enemies })
}

fn sample_free_tile(
    map: &Map,
    rng: &mut ChaCha8Rng,
    target: PlacementTarget,
    attempts: usize,
    is_taken: impl Fn(Pos) -> bool,
) -> Result<Pos, GameError> {
    for _ in 0..attempts {
        let pos = Pos { y: pick(rng, map.height) as i32, x: pick(rng, map.width) as i32 };
        if map.is_empty(pos) && !is_taken(pos) {
            return Ok(pos);
        }
    }
    warn!("placement of {target:?} gave up after {attempts} draws");
    Err(GameError::GenerationExhausted { target, attempts })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    fn small_config(weapons: u32, potions: u32, enemies: u32) -> GameConfig {
        GameConfig {
            width: 6,
            height: 5,
            weapon_count: weapons,
            potion_count: potions,
            enemy_count: enemies,
            ..GameConfig::default()
        }
    }

    #[test]
    fn placements_are_distinct_and_on_open_ground() {
        let config = small_config(1, 4, 6);
        let mut map = Map::filled(6, 5, TileKind::Empty);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let placement = place_entities(&mut map, &config, &mut rng).expect("room for everyone");

        let unique: BTreeSet<Pos> = placement.all_positions().collect();
        assert_eq!(unique.len(), 1 + 1 + 4 + 6);
        assert!(map.is_empty(placement.hero));
        assert!(placement.enemies.iter().all(|&pos| map.is_empty(pos)));
        assert!(placement.weapons.iter().all(|&pos| map.tile_at(pos) == TileKind::Sword));
        assert!(placement.potions.iter().all(|&pos| map.tile_at(pos) == TileKind::Potion));
    }

    #[test]
    fn walls_are_never_chosen() {
        let config = small_config(1, 1, 2);
        let mut map = Map::filled(6, 5, TileKind::Wall);
        let open = [
            Pos { y: 1, x: 1 },
            Pos { y: 1, x: 2 },
            Pos { y: 3, x: 4 },
            Pos { y: 4, x: 0 },
            Pos { y: 2, x: 5 },
        ];
        for pos in open {
            map.set_tile(pos, TileKind::Empty);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let placement = place_entities(&mut map, &config, &mut rng).expect("exactly enough room");

        for pos in placement.all_positions() {
            assert!(open.contains(&pos), "{pos:?} is not one of the carved tiles");
        }
    }

    #[test]
    fn fully_walled_grid_fails_instead_of_spinning() {
        let config = small_config(1, 1, 1);
        let mut map = Map::filled(6, 5, TileKind::Wall);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let result = place_entities(&mut map, &config, &mut rng);
        assert_eq!(
            result,
            Err(GameError::GenerationExhausted {
                target: PlacementTarget::Hero,
                attempts: 6 * 5 * PLACEMENT_ATTEMPTS_PER_TILE,
            })
        );
    }

    #[test]
    fn too_many_enemies_for_the_open_tiles_is_reported() {
        let config = small_config(0, 0, 30);
        let mut map = Map::filled(6, 5, TileKind::Empty);
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let result = place_entities(&mut map, &config, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::GenerationExhausted { target: PlacementTarget::Enemy, .. })
        ));
    }

    #[test]
    fn absurd_enemy_count_fails_cleanly_instead_of_allocating() {
        let config = small_config(0, 0, u32::MAX);
        let mut map = Map::filled(6, 5, TileKind::Empty);
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let result = place_entities(&mut map, &config, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::GenerationExhausted { target: PlacementTarget::Enemy, .. })
        ));
    }
}
