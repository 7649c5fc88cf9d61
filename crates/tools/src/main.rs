use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use game_core::{
    GameConfig, InputJournal, InputSource, ReplayResult, Session, SessionEvent, replay_to_end,
};
use log::info;
use serde::Serialize;

mod terminal;

use terminal::{AsciiBoard, HudLine, LineInput};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play in the terminal: w/a/s/d move, f attacks, r restarts, q quits
    Play(PlayArgs),
    /// Re-run a recorded journal and print the final state hash
    Replay(ReplayArgs),
}

#[derive(Args)]
struct PlayArgs {
    #[arg(short, long)]
    seed: Option<u64>,
    /// TOML file overriding the stock dungeon settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the journal of the last run here on exit
    #[arg(short, long)]
    record: Option<PathBuf>,
}

#[derive(Args)]
struct ReplayArgs {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ReplaySummary {
    seed: u64,
    inputs: usize,
    final_phase: String,
    turns: u64,
    snapshot_hash: String,
}

impl ReplaySummary {
    fn new(journal: &InputJournal, result: &ReplayResult) -> Self {
        Self {
            seed: journal.seed,
            inputs: journal.len(),
            final_phase: format!("{:?}", result.final_phase),
            turns: result.turns,
            snapshot_hash: format!("0x{:016x}", result.final_snapshot_hash),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            play(&args, stdin.lock(), &mut stdout.lock())
        }
        Command::Replay(args) => replay(&args),
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

fn play(args: &PlayArgs, reader: impl BufRead, out: &mut impl Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut session = Session::start(config, seed, AsciiBoard::default(), HudLine::default())
        .with_context(|| format!("Failed to generate a dungeon for seed {seed}"))?;
    writeln!(out, "seed {seed}")?;
    print_screen(&session, out)?;

    let mut input = LineInput::new(reader);
    while let Some(event) = input.next_input() {
        match session.handle(event)? {
            SessionEvent::Ignored => writeln!(out, "the run is over: r to restart, q to quit")?,
            SessionEvent::Restarted { seed } => {
                writeln!(out, "restarted with seed {seed}")?;
                print_screen(&session, out)?;
            }
            SessionEvent::Turn(_) => print_screen(&session, out)?,
        }
    }

    if let Some(path) = &args.record {
        let text = session.journal().to_json().context("Failed to serialize journal")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write journal file: {}", path.display()))?;
        info!("recorded {} inputs to {}", session.journal().len(), path.display());
    }
    Ok(())
}

fn print_screen(session: &Session<AsciiBoard, HudLine>, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", session.renderer().frame)?;
    writeln!(out, "{}", session.hud().line)?;
    out.flush()
}

fn replay(args: &ReplayArgs) -> Result<()> {
    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal =
        InputJournal::from_json(&journal_data).context("Failed to deserialize journal JSON")?;
    let config = load_config(args.config.as_deref())?;

    let result = replay_to_end(&config, &journal).map_err(|e| anyhow!("Replay failed: {e}"))?;
    let summary = ReplaySummary::new(&journal, &result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Replay complete.");
        println!("Seed: {}", summary.seed);
        println!("Turns: {}", summary.turns);
        println!("Final phase: {}", summary.final_phase);
        println!("Snapshot Hash: {}", summary.snapshot_hash);
    }
    Ok(())
}
