/*
errors.rs

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

//! Errors raised by the maze components.
//!
//! None of these errors is transient: every algorithm always makes progress or terminates, so
//! an error always denotes a bad configuration or a programming error in the caller.

use thiserror::Error;

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The simulation configuration is malformed (zero dimensions, start or goal outside the
    /// grid, start equal to goal).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A coordinate falls outside the grid.
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    /// A wall removal was requested between two cells that do not share a wall.
    #[error("cells ({0}, {1}) and ({2}, {3}) are not adjacent")]
    NotAdjacent(usize, usize, usize, usize),

    /// The simulation can only be reset once it has finished. Use abort instead.
    #[error("the simulation is still running")]
    NotFinished,
}
