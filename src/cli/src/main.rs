#![warn(clippy::pedantic)]

mod config;
mod display;
mod repl;

use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use cube_core::CubeState;
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};

use config::CliConfig;

/// Turns, scrambles and inspects a 3x3x3 cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence and print the result
    Apply {
        /// Space separated moves, e.g. "R U R' U'"
        sequence: String,
        /// Start from this 54 character facelet string instead of solved
        #[arg(long, short)]
        state: Option<String>,
    },
    /// Scramble a solved cube with random quarter turns
    Scramble {
        /// Number of quarter turns; defaults to the configured length
        #[arg(long)]
        length: Option<usize>,
        /// Seed for the scramble; defaults to the configured seed
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Load 54 comma separated sticker values (0 to 5)
    Load {
        /// Face major, then row major, in U R F D L B order
        stickers: String,
    },
    /// Load an unfolded net from a file
    Net {
        /// Nine rows of whitespace separated values; `.` marks cells outside the cross
        file: PathBuf,
    },
    /// Turn the cube interactively
    Repl,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Apply { sequence, state } => {
            let mut cube = match state {
                Some(facelets) => CubeState::from_facelet_string(&facelets)?,
                None => CubeState::new(),
            };
            let moves = cube.apply_moves(&sequence)?;
            info!("Applied {} moves", moves.len());

            println!("{}", display::report(&cube, &config));
        }
        Commands::Scramble { length, seed } => {
            let mut cube = CubeState::new();
            let length = length.unwrap_or(config.scramble_length);
            let sequence = cube.scramble(length, &mut config.rng(seed)).to_owned();

            println!("{sequence}");
            println!("{}", display::report(&cube, &config));
        }
        Commands::Load { stickers } => {
            let mut cube = CubeState::new();
            cube.load_sticker_list(&stickers)?;

            println!("{}", display::report(&cube, &config));
        }
        Commands::Net { file } => {
            let text = fs::read_to_string(&file)
                .wrap_err_with(|| format!("Failed to read net file {}", file.display()))?;
            let grid = display::parse_net_text(&text)?;
            let cube = CubeState::from_flattened_net(&grid)?;

            println!("{}", display::report(&cube, &config));
        }
        Commands::Repl => {
            let rng = config.rng(None);
            repl::run(repl::Session::new(CubeState::new(), config, rng))?;
        }
    }

    Ok(())
}
