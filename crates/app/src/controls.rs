//! Keyboard bindings.

use core::InputEvent;
use macroquad::prelude::KeyCode;

pub const BOUND_KEYS: [KeyCode; 14] = [
    KeyCode::Up,
    KeyCode::W,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::Left,
    KeyCode::A,
    KeyCode::Right,
    KeyCode::D,
    KeyCode::Space,
    KeyCode::F,
    KeyCode::R,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Escape,
];

/// `None` for keys the game does not react to (Escape is handled by the window loop).
pub fn input_for_key(key: KeyCode) -> Option<InputEvent> {
    match key {
        KeyCode::Up | KeyCode::W => Some(InputEvent::MoveUp),
        KeyCode::Down | KeyCode::S => Some(InputEvent::MoveDown),
        KeyCode::Left | KeyCode::A => Some(InputEvent::MoveLeft),
        KeyCode::Right | KeyCode::D => Some(InputEvent::MoveRight),
        KeyCode::Space | KeyCode::F => Some(InputEvent::Attack),
        KeyCode::R | KeyCode::Enter | KeyCode::KpEnter => Some(InputEvent::Restart),
        _ => None,
    }
}

/// Events for the keys pressed this frame, in binding order.
pub fn events_for_keys(pressed: &[KeyCode]) -> Vec<InputEvent> {
    pressed.iter().filter_map(|key| input_for_key(*key)).collect()
}
