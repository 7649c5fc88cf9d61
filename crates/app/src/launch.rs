//! Command-line options for the desktop app: `--seed N` and `--config PATH`.

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use core::{GameConfig, derive_restart_seed};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    pub config_path: Option<PathBuf>,
}

impl LaunchOptions {
    /// Stock configuration when no path was given.
    pub fn load_config(&self) -> Result<GameConfig, String> {
        match &self.config_path {
            Some(path) => GameConfig::load(path).map_err(|e| format!("{}: {e}", path.display())),
            None => Ok(GameConfig::default()),
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    let entropy = (now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ u64::from(process::id());
    // Reuse the restart mixer so nearby clock readings still land far apart.
    derive_restart_seed(entropy, counter + 1)
}

/// Parses everything after the program name. Unknown arguments are rejected.
pub fn parse_launch_args(args: &[String], generated_seed: u64) -> Result<LaunchOptions, String> {
    let mut seed = None;
    let mut config_path = None;
    let mut rest = args.iter().skip(1);

    while let Some(argument) = rest.next() {
        let (flag, inline) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value.to_string())),
            None => (argument.as_str(), None),
        };
        let mut value = || inline.clone().or_else(|| rest.next().cloned());
        match flag {
            "--seed" => {
                let raw = value().ok_or("missing value for --seed")?;
                if seed.replace(parse_seed_value(&raw)?).is_some() {
                    return Err("seed provided more than once".to_string());
                }
            }
            "--config" => {
                let raw = value().ok_or("missing value for --config")?;
                if config_path.replace(PathBuf::from(raw)).is_some() {
                    return Err("config provided more than once".to_string());
                }
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(LaunchOptions {
        seed: seed.map_or(SeedChoice::Generated(generated_seed), SeedChoice::Cli),
        config_path,
    })
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}
