/*
cli_options.rs

Copyright 2026 Hervé Quatremain

This file is part of Mazebot.

Mazebot is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazebot is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazebot. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options and run the simulation without a display.
//!
//! The simulation is driven with a fixed frame duration (see `--fps`), the same way a display
//! loop would drive it, and the final maze is printed as text.
//!
//! # Examples
//!
//! Generate a small maze with a fixed seed, print the exploration result, the solution, and
//! some statistics:
//!
//! ```text
//! $ mazebot -c 6 -r 3 -s 42 -p --summary
//! ```
//!
//! Follow the exploration step by step, with a configuration file:
//!
//! ```text
//! $ mazebot --config maze.json --animate
//! ```

use clap::Parser;
use log::{LevelFilter, debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use mazebot::config::{COPYRIGHT_NOTICE, SimulationConfig};
use mazebot::draw;
use mazebot::errors::ErrorKind;
use mazebot::maze::direction::Position;
use mazebot::maze::path::Path;
use mazebot::simulation::{Phase, Simulation};

/// Generate a random maze and let a robot explore it.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of columns
    #[arg(short, long)]
    cols: Option<usize>,

    /// Number of rows
    #[arg(short, long)]
    rows: Option<usize>,

    /// Start cell, as X,Y (default 0,0)
    #[arg(long, value_parser = parse_position)]
    start: Option<Position>,

    /// Goal cell, as X,Y (default: bottom-right cell)
    #[arg(long, value_parser = parse_position)]
    goal: Option<Position>,

    /// Random seed. A random seed is chosen and logged when not provided
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file. Command-line options override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Time between two exploration steps, in seconds
    #[arg(long)]
    step_interval: Option<f32>,

    /// Number of walls removed per frame while generating the maze
    #[arg(long)]
    carve_per_tick: Option<usize>,

    /// Print the maze after each exploration step
    #[arg(short, long, default_value_t = false)]
    animate: bool,

    /// Draw the solution path on the final maze
    #[arg(short = 'p', long, default_value_t = false)]
    solution: bool,

    /// Print the final snapshot in JSON format instead of drawing it
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics at the end of the run
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse a cell position given as `X,Y`.
fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("`{s}` is not in the X,Y format"))?;
    let x: usize = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid column `{x}`: {e}"))?;
    let y: usize = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid row `{y}`: {e}"))?;
    Ok(Position::new(x, y))
}

/// Build the configuration from the configuration file and the command-line options.
fn build_config(args: &Args) -> Result<SimulationConfig, String> {
    let mut config: SimulationConfig = match &args.config {
        Some(path) => SimulationConfig::from_file(path)
            .map_err(|e| format!("Cannot read the configuration file {path:?}: {e}"))?,
        None => SimulationConfig::default(),
    };

    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(start) = args.start {
        config.start = start;
    }
    if args.goal.is_some() {
        config.goal = args.goal;
    }
    if let Some(interval) = args.step_interval {
        config.step_interval = interval;
    }
    if let Some(count) = args.carve_per_tick {
        config.carve_per_tick = count;
    }
    Ok(config)
}

/// Drive the simulation until it finishes, and print the frames if requested.
fn play(sim: &mut Simulation, rng: &mut StdRng, dt: f32, animate: bool) -> Result<(), ErrorKind> {
    let mut last_step: usize = 0;
    while !sim.is_finished() {
        let snapshot = sim.tick(dt, rng)?;
        if animate
            && snapshot.phase != Phase::Generating
            && snapshot.stats.exploration_steps != last_step
        {
            last_step = snapshot.stats.exploration_steps;
            println!("Step {last_step}\n{}", draw::render(&snapshot, None));
        }
    }
    Ok(())
}

/// Parse and process command-line options. Return the process exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let config: SimulationConfig = match build_config(&args) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };
    let mut sim: Simulation = match Simulation::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    debug!("Configuration: {:?}", sim.config());

    // Always use a seeded generator so that any run can be replayed
    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("Seed = {seed}");
    let mut rng: StdRng = StdRng::seed_from_u64(seed);

    let dt: f32 = 1.0 / args.fps as f32;
    if let Err(e) = play(&mut sim, &mut rng, dt, args.animate) {
        eprintln!("Error: {e}");
        return 1;
    }

    let solution: Option<Path> = if args.solution {
        match sim.solution() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    } else {
        None
    };

    if args.json {
        match serde_json::to_string_pretty(&sim.snapshot()) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    } else {
        print!("{}", draw::render(&sim.snapshot(), solution.as_ref()));
    }

    if args.summary {
        println!("\n{}", sim.stats());
    }
    0
}
