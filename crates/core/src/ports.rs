//! Capabilities the engine is driven through. Adapters implement these; the core
//! never talks to a window, terminal or keyboard directly.

use crate::state::GameState;
use crate::types::{Action, Direction, HudStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Attack,
    Restart,
}

impl InputEvent {
    /// Engine action for this event; `None` for session-level events.
    pub fn action(self) -> Option<Action> {
        match self {
            Self::MoveUp => Some(Action::Move(Direction::Up)),
            Self::MoveDown => Some(Action::Move(Direction::Down)),
            Self::MoveLeft => Some(Action::Move(Direction::Left)),
            Self::MoveRight => Some(Action::Move(Direction::Right)),
            Self::Attack => Some(Action::Attack),
            Self::Restart => None,
        }
    }
}

pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

pub trait InputSource {
    /// Next event, or `None` once the source is exhausted.
    fn next_input(&mut self) -> Option<InputEvent>;
}

pub trait HudReporter {
    fn update(&mut self, hud: HudStats);
}

impl<I: Iterator<Item = InputEvent>> InputSource for I {
    fn next_input(&mut self) -> Option<InputEvent> {
        self.next()
    }
}
