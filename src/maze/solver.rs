/*
solver.rs

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

//! Find the path between two cells of a perfect maze.
//!
//! The solver is a depth-first search that only follows openings.
//! In a perfect maze there is exactly one path between two cells, so no heuristic is needed.
//! The search uses an explicit stack instead of recursion to support large grids.

use log::debug;

use super::direction::{Direction, Position};
use super::grid::Grid;
use super::path::Path;
use crate::errors::ErrorKind;

/// Search frame: a cell and the index in [`Direction::ALL`] of the next direction to try.
struct Frame {
    pos: Position,
    next_direction: usize,
}

/// Return the path from `entry` to `exit`.
///
/// Directions are tried in the up, right, down, left order. The returned path starts with
/// `entry` and ends with `exit`. It is empty if `exit` cannot be reached, which does not happen
/// in a maze produced by the carver. Any path may be returned for a grid with loops.
///
/// # Errors
///
/// The function returns [`ErrorKind::OutOfBounds`] if `entry` or `exit` is outside the grid.
pub fn find_path(grid: &Grid, entry: Position, exit: Position) -> Result<Path, ErrorKind> {
    grid.index(exit)?;
    let mut visited: Vec<bool> = vec![false; grid.len()];
    let mut stack: Vec<Frame> = Vec::with_capacity(grid.len());

    visited[grid.index(entry)?] = true;
    stack.push(Frame {
        pos: entry,
        next_direction: 0,
    });

    let mut iteration: usize = 0;
    while let Some(frame) = stack.last_mut() {
        let pos: Position = frame.pos;
        if pos == exit {
            break;
        }
        iteration += 1;

        let Some(&direction) = Direction::ALL.get(frame.next_direction) else {
            // All the directions have been tried: dead end
            stack.pop();
            continue;
        };
        frame.next_direction += 1;

        if grid.cell(pos)?.has_wall(direction) {
            continue;
        }
        if let Some(n) = grid.neighbor(pos, direction) {
            let i: usize = grid.index(n)?;
            if !visited[i] {
                visited[i] = true;
                stack.push(Frame {
                    pos: n,
                    next_direction: 0,
                });
            }
        }
    }

    // The stack is either empty (no path) or holds the path from the entry to the exit
    let mut path: Path = Path::new(stack.len());
    for frame in &stack {
        path.push(frame.pos);
    }
    debug!(
        "Path {entry} -> {exit}: {} cells (iterations = {iteration})",
        path.len()
    );
    Ok(path)
}
