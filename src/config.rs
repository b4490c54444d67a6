//! Runtime configuration: environment first, then command-line flags.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::raster::REFERENCE_CELL_SIZE;
use crate::term::TERMINAL_CELL_SIZE;
use crate::types::{DEFAULT_TICK_MS, MAX_TICK_MS, MIN_TICK_MS};

pub const ENV_SEED: &str = "SPEEDWAY_SEED";
pub const ENV_TICK_MS: &str = "SPEEDWAY_TICK_MS";
pub const ENV_CELL_SIZE: &str = "SPEEDWAY_CELL_SIZE";
pub const ENV_LOG_PATH: &str = "SPEEDWAY_LOG_PATH";

pub const DEFAULT_FRAME_TICKS: u32 = 600;
pub const DEFAULT_FRAME_PATH: &str = "frame.png";

/// Log file name under the temp dir used by interactive play when
/// `SPEEDWAY_LOG_PATH` is unset. Raw mode leaves no room for stderr.
pub const DEFAULT_PLAY_LOG_FILE: &str = "speedway.log";

pub const USAGE: &str = "\
usage: speedway [--seed N] [--tick-ms N] [--cell-size N]
       speedway frame [--ticks N] [--out PATH] [--seed N] [--cell-size N]

environment: SPEEDWAY_SEED, SPEEDWAY_TICK_MS, SPEEDWAY_CELL_SIZE,
             SPEEDWAY_LOG_PATH, RUST_LOG

play logs to $TMPDIR/speedway.log unless SPEEDWAY_LOG_PATH is set";

/// Interactive terminal play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// `None` picks a random seed at startup.
    pub seed: Option<u32>,
    pub tick_ms: u32,
    pub cell_size: u32,
}

/// Headless run that saves the final frame as PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    pub seed: Option<u32>,
    pub ticks: u32,
    pub out: PathBuf,
    pub cell_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(PlayConfig),
    Frame(FrameConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub command: Command,
    pub log_path: Option<PathBuf>,
}

/// Values taken from the environment; flags override them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EnvLayer {
    seed: Option<u32>,
    tick_ms: Option<u32>,
    cell_size: Option<u32>,
    log_path: Option<PathBuf>,
}

impl EnvLayer {
    fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let parse = |key: &str| -> Result<Option<u32>> {
            match lookup(key) {
                Some(v) if !v.trim().is_empty() => parse_u32(key, v.trim()).map(Some),
                _ => Ok(None),
            }
        };
        Ok(Self {
            seed: parse(ENV_SEED)?,
            tick_ms: parse(ENV_TICK_MS)?,
            cell_size: parse(ENV_CELL_SIZE)?,
            log_path: lookup(ENV_LOG_PATH)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }
}

impl AppConfig {
    /// Resolve from the process environment and `std::env::args`.
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::resolve(&args, |key| std::env::var(key).ok())
    }

    /// Resolve from explicit arguments (program name excluded) and an
    /// environment lookup.
    pub fn resolve(args: &[String], lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = EnvLayer::load(lookup).context("reading environment")?;
        let command = parse_args(args, &env)?;
        let log_path = match (&command, env.log_path) {
            (_, Some(path)) => Some(path),
            (Command::Play(_), None) => Some(std::env::temp_dir().join(DEFAULT_PLAY_LOG_FILE)),
            _ => None,
        };
        Ok(Self { command, log_path })
    }
}

fn parse_args(args: &[String], env: &EnvLayer) -> Result<Command> {
    let frame_mode = args.first().map(String::as_str) == Some("frame");
    let flags = if frame_mode { &args[1..] } else { args };
    let ctx = if frame_mode { "frame" } else { "speedway" };

    let mut seed = env.seed;
    let mut tick_ms = env.tick_ms.unwrap_or(DEFAULT_TICK_MS);
    let mut cell_size = env.cell_size.unwrap_or(if frame_mode {
        REFERENCE_CELL_SIZE
    } else {
        TERMINAL_CELL_SIZE
    });
    let mut ticks = DEFAULT_FRAME_TICKS;
    let mut out = PathBuf::from(DEFAULT_FRAME_PATH);

    let mut i = 0usize;
    while i < flags.len() {
        let flag = flags[i].as_str();
        let mut value = || {
            i += 1;
            flags
                .get(i)
                .map(String::as_str)
                .ok_or_else(|| anyhow!("{}: missing value for {}", ctx, flag))
        };
        match flag {
            "-h" | "--help" => return Ok(Command::Help),
            "--seed" => seed = Some(parse_u32(flag, value()?)?),
            "--cell-size" => cell_size = parse_u32(flag, value()?)?,
            "--tick-ms" if !frame_mode => tick_ms = parse_u32(flag, value()?)?,
            "--ticks" if frame_mode => ticks = parse_u32(flag, value()?)?,
            "--out" if frame_mode => out = PathBuf::from(value()?),
            other => return Err(anyhow!("{}: unknown argument: {}", ctx, other)),
        }
        i += 1;
    }

    if cell_size == 0 {
        return Err(anyhow!("{}: cell size must be at least 1", ctx));
    }

    if frame_mode {
        return Ok(Command::Frame(FrameConfig {
            seed,
            ticks,
            out,
            cell_size,
        }));
    }

    if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&tick_ms) {
        return Err(anyhow!(
            "{}: tick interval {} ms outside {}..={}",
            ctx,
            tick_ms,
            MIN_TICK_MS,
            MAX_TICK_MS
        ));
    }
    Ok(Command::Play(PlayConfig {
        seed,
        tick_ms,
        cell_size,
    }))
}

fn parse_u32(name: &str, v: &str) -> Result<u32> {
    v.parse::<u32>()
        .map_err(|_| anyhow!("invalid {} value: {}", name, v))
}
