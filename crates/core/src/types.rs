use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::config::ConfigError;

new_key_type! {
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    /// Unwrapped neighbour; callers normalise through `Map::wrap` before any lookup.
    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Empty,
    Wall,
    Sword,
    Potion,
}

impl TileKind {
    pub fn item(self) -> Option<ItemKind> {
        match self {
            Self::Sword => Some(ItemKind::Sword),
            Self::Potion => Some(ItemKind::Potion),
            Self::Empty | Self::Wall => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Sword,
    Potion,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour order used by every adjacency scan.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    Attack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move targeted a wall or an enemy; nothing changed and enemies did not act.
    Blocked,
    Resolved,
    Finished(RunOutcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementTarget {
    Hero,
    Weapon,
    Potion,
    Enemy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidConfig(ConfigError),
    GenerationExhausted { target: PlacementTarget, attempts: usize },
    InvalidAction { phase: Phase },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(error) => write!(f, "invalid configuration: {error}"),
            Self::GenerationExhausted { target, attempts } => {
                write!(f, "no free tile for {target:?} after {attempts} attempts")
            }
            Self::InvalidAction { phase } => write!(f, "action rejected in phase {phase:?}"),
        }
    }
}

impl Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfig(error)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    MoveBlocked { target: Pos },
    ItemPickedUp { item: ItemKind, pos: Pos },
    HeroDamaged { enemy: EntityId, damage: i32, hp_left: i32 },
    EnemyDamaged { enemy: EntityId, damage: i32, hp_left: i32 },
    EnemyRetaliated { enemy: EntityId, damage: i32 },
    EnemySlain { enemy: EntityId },
    RunFinished(RunOutcome),
}

/// Values shown on the heads-up display after each state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudStats {
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub potions_carried: u32,
    pub killed: u32,
    pub total_enemies: u32,
    pub phase: Phase,
}
