use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use chip8_core::CLOCK_SPEED;

mod run;

/// Runs a Chip-8 ROM in an SDL2 window.
///
/// The keypad is mapped to the left four columns of the keyboard (1-4, Q-R, A-F, Z-V).
/// Hold space to run unthrottled; escape quits.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Path to the ROM to load
    pub rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = CLOCK_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    pub hz: u32,

    /// Size of each Chip-8 pixel on screen
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=40))]
    pub scale: u32,

    /// Seed for the RND instruction, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// One of off, error, warn, info, debug or trace
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;
    run::run(&args)
}
