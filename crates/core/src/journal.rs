//! Ordered record of the actions a run accepted, enough to reproduce it.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::Action;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    /// `GameConfig::fingerprint` of the configuration the run was generated with.
    pub config_fingerprint: u64,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Action(Action),
}

impl InputJournal {
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: env!("CARGO_PKG_VERSION").to_string(),
            config_fingerprint: config.fingerprint(),
            seed,
            inputs: Vec::new(),
        }
    }

    /// Appends with the next sequence number.
    pub fn append_action(&mut self, action: Action) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload: InputPayload::Action(action) });
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
