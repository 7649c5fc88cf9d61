//! Integer tuning set fixed at engine construction.
//!
//! Every value can be overridden from a TOML file; keys that are absent keep the
//! stock dungeon defaults.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use toml::de;
use xxhash_rust::xxh3::xxh3_64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    /// Pixel size of one cell; only the desktop renderer reads it.
    pub tile_size: u32,
    pub weapon_count: u32,
    pub potion_count: u32,
    pub room_count: CountRange,
    pub room_size: CountRange,
    pub corridor_count: CountRange,
    pub enemy_count: u32,
    pub enemy_hp: i32,
    pub enemy_attack: i32,
    pub hero_hp: i32,
    pub hero_attack: i32,
    pub potion_heal: i32,
    pub weapon_attack_bonus: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 30,
            tile_size: 20,
            weapon_count: 1,
            potion_count: 8,
            room_count: CountRange::new(6, 10),
            room_size: CountRange::new(4, 8),
            corridor_count: CountRange::new(1, 3),
            enemy_count: 10,
            enemy_hp: 30,
            enemy_attack: 5,
            hero_hp: 100,
            hero_attack: 10,
            potion_heal: 25,
            weapon_attack_bonus: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDimension { width: u32, height: u32 },
    InvertedRange { field: &'static str, min: u32, max: u32 },
    RoomDoesNotFit { room_size: u32, width: u32, height: u32 },
    NonPositive { field: &'static str, value: i64 },
    Negative { field: &'static str, value: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "grid must be at least 1x1, got {width}x{height}")
            }
            Self::InvertedRange { field, min, max } => {
                write!(f, "{field}: min {min} is greater than max {max}")
            }
            Self::RoomDoesNotFit { room_size, width, height } => write!(
                f,
                "room size {room_size} plus its wall margin does not fit a {width}x{height} grid"
            ),
            Self::NonPositive { field, value } => write!(f, "{field} must be positive, got {value}"),
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug)]
pub enum ConfigLoadError {
    Io(io::Error),
    Parse(de::Error),
    Invalid(ConfigError),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(e) => write!(f, "config is not valid TOML: {e}"),
            Self::Invalid(e) => write!(f, "config rejected: {e}"),
        }
    }
}

impl Error for ConfigLoadError {}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension { width: self.width, height: self.height });
        }
        for (field, range) in [
            ("room_count", self.room_count),
            ("room_size", self.room_size),
            ("corridor_count", self.corridor_count),
        ] {
            if range.min > range.max {
                return Err(ConfigError::InvertedRange { field, min: range.min, max: range.max });
            }
        }
        if self.room_size.min == 0 {
            return Err(ConfigError::NonPositive { field: "room_size.min", value: 0 });
        }
        // Rooms sit inside a one-tile wall margin on every side.
        if self.room_count.max > 0
            && (self.room_size.max.saturating_add(2) > self.width
                || self.room_size.max.saturating_add(2) > self.height)
        {
            return Err(ConfigError::RoomDoesNotFit {
                room_size: self.room_size.max,
                width: self.width,
                height: self.height,
            });
        }
        if self.tile_size == 0 {
            return Err(ConfigError::NonPositive { field: "tile_size", value: 0 });
        }
        for (field, value) in [("hero_hp", self.hero_hp), ("enemy_hp", self.enemy_hp)] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value: i64::from(value) });
            }
        }
        for (field, value) in [
            ("hero_attack", self.hero_attack),
            ("enemy_attack", self.enemy_attack),
            ("potion_heal", self.potion_heal),
            ("weapon_attack_bonus", self.weapon_attack_bonus),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value: i64::from(value) });
            }
        }
        Ok(())
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = toml::from_str(text).map_err(ConfigLoadError::Parse)?;
        config.validate().map_err(ConfigLoadError::Invalid)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let text = fs::read_to_string(path).map_err(ConfigLoadError::Io)?;
        Self::from_toml_str(&text)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(64);
        for value in [
            self.width,
            self.height,
            self.tile_size,
            self.weapon_count,
            self.potion_count,
            self.room_count.min,
            self.room_count.max,
            self.room_size.min,
            self.room_size.max,
            self.corridor_count.min,
            self.corridor_count.max,
            self.enemy_count,
        ] {
            bytes.extend(value.to_le_bytes());
        }
        for value in [
            self.enemy_hp,
            self.enemy_attack,
            self.hero_hp,
            self.hero_attack,
            self.potion_heal,
            self.weapon_attack_bonus,
        ] {
            bytes.extend(value.to_le_bytes());
        }
        bytes
    }

    /// Stable hash of every gameplay-relevant value; journals carry it so replays
    /// under a different configuration are refused.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
