//! Headless re-execution of a recorded run.

use std::error::Error;
use std::fmt;

use log::debug;

use crate::config::GameConfig;
use crate::game::Game;
use crate::journal::{InputJournal, InputPayload};
use crate::types::{GameError, Phase};

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// The journal was recorded under a different configuration.
    ConfigMismatch { expected: u64, found: u64 },
    Generation(GameError),
    /// The engine refused this record, typically because the run had already ended.
    RejectedInput { seq: u64 },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigMismatch { expected, found } => write!(
                f,
                "journal config fingerprint {found:#018x} does not match {expected:#018x}"
            ),
            Self::Generation(e) => write!(f, "could not regenerate the run: {e}"),
            Self::RejectedInput { seq } => write!(f, "input #{seq} was rejected by the engine"),
        }
    }
}

impl Error for ReplayError {}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_phase: Phase,
    pub final_snapshot_hash: u64,
    pub turns: u64,
}

pub fn replay_to_end(
    config: &GameConfig,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    let expected = config.fingerprint();
    if journal.config_fingerprint != expected {
        return Err(ReplayError::ConfigMismatch { expected, found: journal.config_fingerprint });
    }

    let mut game = Game::new(journal.seed, config).map_err(ReplayError::Generation)?;
    for record in &journal.inputs {
        match record.payload {
            InputPayload::Action(action) => {
                game.apply_action(action)
                    .map_err(|_| ReplayError::RejectedInput { seq: record.seq })?;
            }
        }
    }

    debug!("replayed {} inputs for seed {}", journal.inputs.len(), journal.seed);
    Ok(ReplayResult {
        final_phase: game.phase(),
        final_snapshot_hash: game.snapshot_hash(),
        turns: game.turn(),
    })
}
