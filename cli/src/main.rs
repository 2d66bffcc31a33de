use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use numpath_core::*;
use numpath_protocol::{ClientMessage, encode_server, handle_line, handle_message};

use command::{Command, HELP};
use render::{render_moves, render_state};

mod command;
mod render;

/// Chain neighboring cells; the direction of each step picks the arithmetic.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: Coord,

    /// Seed for reproducible grids
    #[arg(long)]
    seed: Option<u64>,

    /// Speak line-delimited JSON on stdin/stdout instead of drawing the grid
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let config = GameConfig::new(cli.size);
    let mut engine = PlayEngine::random(config, cli.seed);
    log::info!("Starting {0}x{0} game, seed: {1:?}", config.size, cli.seed);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    if cli.json {
        run_json(&mut engine, stdin, stdout)
    } else {
        run_interactive(&mut engine, stdin, stdout)
    }
}

fn run_json<G: GridGenerator>(
    engine: &mut PlayEngine<G>,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    let greeting = handle_message(engine, ClientMessage::QueryState);
    writeln!(output, "{}", encode_server(&greeting)?)?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(output, "{}", handle_line(engine, &line)?)?;
        output.flush()?;
    }
    Ok(())
}

fn run_interactive<G: GridGenerator>(
    engine: &mut PlayEngine<G>,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    write!(output, "{}", render_state(engine.state()))?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Tap(coords)) => {
                if !engine.on_cell_tapped(coords).has_update() {
                    writeln!(output, "can't move to {} {}", coords.0, coords.1)?;
                }
                write!(output, "{}", render_state(engine.state()))?;
            }
            Ok(Command::Reset) => {
                engine.on_reset_requested();
                write!(output, "{}", render_state(engine.state()))?;
            }
            Ok(Command::Moves) => write!(output, "{}", render_moves(engine.state()))?,
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Quit) => break,
            Err(err) => writeln!(output, "{err:#}\n{HELP}")?,
        }
        output.flush()?;
    }
    Ok(())
}
