pub mod config;
pub mod dice;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod ports;
pub mod replay;
pub mod session;
pub mod state;
pub mod types;

pub use config::{ConfigError, ConfigLoadError, CountRange, GameConfig};
pub use dice::derive_restart_seed;
pub use game::Game;
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use ports::{HudReporter, InputEvent, InputSource, Renderer};
pub use replay::*;
pub use session::{Session, SessionEvent};
pub use state::{Actor, Counters, GameState, Map};
pub use types::*;
