//! High-level map generation: wall fill, rooms, room-to-room corridors, full spans.

use log::debug;
use rand_chacha::ChaCha8Rng;

use crate::config::{CountRange, GameConfig};
use crate::dice::roll;
use crate::state::Map;
use crate::types::TileKind;

use super::layout::{carve_full_column, carve_full_row, carve_l_corridor, carve_room, roll_rooms};
use super::model::GeneratedMap;

pub struct MapGenerator {
    width: usize,
    height: usize,
    room_count: CountRange,
    room_size: CountRange,
    corridor_count: CountRange,
}

impl MapGenerator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            width: config.width as usize,
            height: config.height as usize,
            room_count: config.room_count,
            room_size: config.room_size,
            corridor_count: config.corridor_count,
        }
    }

    /// Expects a config that passed `GameConfig::validate`.
    pub fn generate(&self, rng: &mut ChaCha8Rng) -> GeneratedMap {
        let mut map = Map::filled(self.width, self.height, TileKind::Wall);

        let rooms = roll_rooms(rng, self.width, self.height, self.room_count, self.room_size);
        for room in &rooms {
            carve_room(&mut map, room);
        }
        for pair in rooms.windows(2) {
            carve_l_corridor(&mut map, &pair[0], &pair[1]);
        }

        let row_count =
            roll(rng, self.corridor_count.min as usize, self.corridor_count.max as usize);
        for _ in 0..row_count {
            let y = roll(rng, 0, self.height - 1);
            carve_full_row(&mut map, y as i32);
        }
        let column_count =
            roll(rng, self.corridor_count.min as usize, self.corridor_count.max as usize);
        for _ in 0..column_count {
            let x = roll(rng, 0, self.width - 1);
            carve_full_column(&mut map, x as i32);
        }

        debug!(
            "generated {}x{} dungeon: {} rooms, {} row spans, {} column spans, {} open tiles",
            self.width,
            self.height,
            rooms.len(),
            row_count,
            column_count,
            map.count(TileKind::Empty)
        );

        GeneratedMap { map, rooms }
    }
}
