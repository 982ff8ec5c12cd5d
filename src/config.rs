/*
config.rs

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

//! Simulation configuration.
//!
//! A [`SimulationConfig`] object can be built in code or loaded from a JSON file such as:
//!
//! ```json
//! {
//!     "cols": 20,
//!     "rows": 10,
//!     "start": { "x": 0, "y": 0 },
//!     "step_interval": 0.05
//! }
//! ```
//!
//! Missing fields get their default value. A missing goal means the bottom-right cell.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ErrorKind;
use crate::maze::direction::Position;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2026 Hervé Quatremain
License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>";

/// Default number of columns (the maze is wider than tall).
pub const DEFAULT_COLS: usize = 30;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 15;

/// Default time between two exploration steps, in seconds.
/// It is slower than the display rate so that the exploration can be followed.
pub const DEFAULT_STEP_INTERVAL: f32 = 0.1;

/// Default smoothing rate of the agent display position, per second.
pub const DEFAULT_SMOOTHING_RATE: f32 = 12.0;

/// Largest number of cells in a grid.
pub const MAX_CELLS: usize = 1 << 20;

/// Longest time between two exploration steps, in seconds.
pub const MAX_STEP_INTERVAL: f32 = 60.0;

/// Simulation parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of columns.
    pub cols: usize,

    /// Number of rows.
    pub rows: usize,

    /// Cell where the maze carving and the exploration start.
    pub start: Position,

    /// Exit cell. None means the bottom-right cell.
    pub goal: Option<Position>,

    /// Number of walls removed per tick while the maze is being generated.
    pub carve_per_tick: usize,

    /// Time between two exploration steps, in seconds.
    pub step_interval: f32,

    /// Smoothing rate of the agent display position, per second.
    pub smoothing_rate: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

impl SimulationConfig {
    /// Create a [`SimulationConfig`] object for a `cols` x `rows` maze with default values for
    /// the other parameters.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            start: Position::new(0, 0),
            goal: None,
            carve_per_tick: 1,
            step_interval: DEFAULT_STEP_INTERVAL,
            smoothing_rate: DEFAULT_SMOOTHING_RATE,
        }
    }

    /// Read the configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Configuration file: {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let config: SimulationConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Exit cell.
    pub fn goal(&self) -> Position {
        self.goal.unwrap_or(Position::new(
            self.cols.saturating_sub(1),
            self.rows.saturating_sub(1),
        ))
    }

    /// Verify the configuration.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::InvalidConfiguration`] if a dimension is zero, if the grid
    /// has more than [`MAX_CELLS`] cells, if the start or the goal is outside the grid, if the
    /// start and the goal are the same cell (except in a single-cell maze, where there is no
    /// other choice), or if a timing parameter is not a positive finite number.
    /// The step interval cannot exceed [`MAX_STEP_INTERVAL`].
    pub fn validate(&self) -> Result<(), ErrorKind> {
        let invalid = |msg: String| Err(ErrorKind::InvalidConfiguration(msg));

        if self.cols == 0 || self.rows == 0 {
            return invalid(format!(
                "grid dimensions must be positive, got {}x{}",
                self.cols, self.rows
            ));
        }
        let cells: Option<usize> = self.cols.checked_mul(self.rows);
        if cells.is_none_or(|n| n > MAX_CELLS) {
            return invalid(format!(
                "a {}x{} grid exceeds {MAX_CELLS} cells",
                self.cols, self.rows
            ));
        }
        let goal: Position = self.goal();
        for (name, pos) in [("start", self.start), ("goal", goal)] {
            if pos.x >= self.cols || pos.y >= self.rows {
                return invalid(format!(
                    "{name} {pos} is outside the {}x{} grid",
                    self.cols, self.rows
                ));
            }
        }
        if self.start == goal && cells != Some(1) {
            return invalid(format!("start and goal are the same cell {goal}"));
        }
        if self.carve_per_tick == 0 {
            return invalid("carve_per_tick must be positive".to_string());
        }
        if !(self.step_interval > 0.0 && self.step_interval <= MAX_STEP_INTERVAL) {
            return invalid(format!(
                "step_interval must be in (0, {MAX_STEP_INTERVAL}] seconds, got {}",
                self.step_interval
            ));
        }
        if !(self.smoothing_rate > 0.0 && self.smoothing_rate.is_finite()) {
            return invalid(format!(
                "smoothing_rate must be a positive number, got {}",
                self.smoothing_rate
            ));
        }
        Ok(())
    }
}
