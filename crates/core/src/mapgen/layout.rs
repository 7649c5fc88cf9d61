//! Room rolling and corridor carving for the base dungeon topology.

use rand_chacha::ChaCha8Rng;

use crate::config::CountRange;
use crate::dice::roll;
use crate::state::Map;
use crate::types::{Pos, TileKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl RoomRect {
    fn right(self) -> usize {
        self.x + self.width - 1
    }

    fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y + (self.height / 2)) as i32, x: (self.x + (self.width / 2)) as i32 }
    }

    pub fn contains(self, pos: Pos) -> bool {
        let px = pos.x as usize;
        let py = pos.y as usize;
        pos.x >= 0 && pos.y >= 0 && px >= self.x && px <= self.right() && py >= self.y
            && py <= self.bottom()
    }
}

/// Rolls rooms that fit inside a one-tile wall margin. Overlaps are allowed.
pub(super) fn roll_rooms(
    rng: &mut ChaCha8Rng,
    width: usize,
    height: usize,
    room_count: CountRange,
    room_size: CountRange,
) -> Vec<RoomRect> {
    let count = roll(rng, room_count.min as usize, room_count.max as usize);
    let mut rooms = Vec::with_capacity(count);
    for _ in 0..count {
        let room_width = roll(rng, room_size.min as usize, room_size.max as usize);
        let room_height = roll(rng, room_size.min as usize, room_size.max as usize);
        let x = roll(rng, 1, width - room_width - 1);
        let y = roll(rng, 1, height - room_height - 1);
        rooms.push(RoomRect { x, y, width: room_width, height: room_height });
    }
    rooms
}

pub(super) fn carve_room(map: &mut Map, room: &RoomRect) {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            map.set_tile(Pos { y: y as i32, x: x as i32 }, TileKind::Empty);
        }
    }
}

/// Horizontal leg on `from`'s centre row, then vertical leg on `to`'s centre column.
pub(super) fn carve_l_corridor(map: &mut Map, from: &RoomRect, to: &RoomRect) {
    let start = from.center();
    let end = to.center();
    carve_horizontal_run(map, start.y, start.x, end.x);
    carve_vertical_run(map, end.x, start.y, end.y);
}

pub(super) fn carve_full_row(map: &mut Map, y: i32) {
    carve_horizontal_run(map, y, 0, map.width as i32 - 1);
}

pub(super) fn carve_full_column(map: &mut Map, x: i32) {
    carve_vertical_run(map, x, 0, map.height as i32 - 1);
}

fn carve_horizontal_run(map: &mut Map, y: i32, left_x: i32, right_x: i32) {
    for x in left_x.min(right_x)..=left_x.max(right_x) {
        map.set_tile(Pos { y, x }, TileKind::Empty);
    }
}

fn carve_vertical_run(map: &mut Map, x: i32, top_y: i32, bottom_y: i32) {
    for y in top_y.min(bottom_y)..=top_y.max(bottom_y) {
        map.set_tile(Pos { y, x }, TileKind::Empty);
    }
}
