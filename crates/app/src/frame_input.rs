//! Keyboard input collection for one rendered frame.

use std::collections::VecDeque;

use app::controls::{BOUND_KEYS, events_for_keys};
use core::{InputEvent, InputSource};
use macroquad::prelude::{KeyCode, is_key_pressed};

/// Events pressed during one frame, drained by the session.
#[derive(Default)]
pub struct FrameInput {
    events: VecDeque<InputEvent>,
    pub quit: bool,
}

pub fn capture_frame_input() -> FrameInput {
    let pressed: Vec<KeyCode> = BOUND_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();
    FrameInput {
        events: events_for_keys(&pressed).into(),
        quit: pressed.contains(&KeyCode::Escape),
    }
}

impl InputSource for FrameInput {
    fn next_input(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}
