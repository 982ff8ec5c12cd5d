/*
draw.rs

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

//! Draw simulation snapshots as text.
//!
//! Each cell is three characters wide:
//!
//! ```text
//! +---+---+---+
//! | S   .   . |
//! +---+---+   +
//! |:::|:::  R |
//! +---+---+---+
//! ```
//!
//! * `S` and `G` mark the start and the goal, `R` the agent.
//! * `o` marks the carving path while the maze is generated.
//! * `.` marks the cells the agent has entered, `*` the solution path.
//! * `:::` fills the cells nobody knows about yet: during exploration only the walls the agent
//!   has sensed are drawn.

use std::collections::HashSet;

use crate::maze::cell::Walls;
use crate::maze::direction::{Direction, Position};
use crate::maze::path::Path;
use crate::simulation::SimulationSnapshot;

/// Walls of the cell as far as the snapshot knows, or None for an unknown cell.
fn known_walls(snapshot: &SimulationSnapshot, pos: Position) -> Option<Walls> {
    match snapshot.grid {
        Some(grid) => grid.cell(pos).ok().map(|c| c.walls),
        None => snapshot.known.and_then(|k| k.walls(pos).ok().flatten()),
    }
}

/// Whether to draw a wall on the given side of the cell.
///
/// A wall is known from either of the two cells it separates. When neither cell is known, the
/// wall is drawn.
fn has_wall(snapshot: &SimulationSnapshot, pos: Position, direction: Direction) -> bool {
    if let Some(w) = known_walls(snapshot, pos) {
        return w.has(direction);
    }
    match direction.step(pos, snapshot.cols, snapshot.rows) {
        Some(n) => known_walls(snapshot, n).is_none_or(|w| w.has(direction.opposite())),
        None => true,
    }
}

/// Character to draw in the middle of the cell.
fn cell_mark(
    snapshot: &SimulationSnapshot,
    solution: Option<&Path>,
    frontier: &HashSet<Position>,
    pos: Position,
) -> char {
    if snapshot.agent.is_some_and(|a| a.position == pos) {
        return 'R';
    }
    if pos == snapshot.start {
        return 'S';
    }
    if pos == snapshot.goal {
        return 'G';
    }
    if solution.is_some_and(|p| p.contains(pos)) {
        return '*';
    }
    if frontier.contains(&pos) {
        return 'o';
    }
    if snapshot.known.is_some_and(|k| k.is_discovered(pos) == Ok(true)) {
        return '.';
    }
    ' '
}

/// Return the text representation of the snapshot, optionally with the solution path.
pub fn render(snapshot: &SimulationSnapshot, solution: Option<&Path>) -> String {
    let mut s: String = String::with_capacity((snapshot.cols * 4 + 2) * (snapshot.rows * 2 + 1));
    let frontier: HashSet<Position> = snapshot.frontier.iter().copied().collect();

    for y in 0..snapshot.rows {
        // Line above the row
        for x in 0..snapshot.cols {
            s.push('+');
            if has_wall(snapshot, Position::new(x, y), Direction::Up) {
                s.push_str("---");
            } else {
                s.push_str("   ");
            }
        }
        s.push_str("+\n");

        // The row
        for x in 0..snapshot.cols {
            let pos: Position = Position::new(x, y);
            if has_wall(snapshot, pos, Direction::Left) {
                s.push('|');
            } else {
                s.push(' ');
            }
            if known_walls(snapshot, pos).is_none() {
                s.push_str(":::");
            } else {
                s.push(' ');
                s.push(cell_mark(snapshot, solution, &frontier, pos));
                s.push(' ');
            }
        }
        if has_wall(snapshot, Position::new(snapshot.cols - 1, y), Direction::Right) {
            s.push('|');
        } else {
            s.push(' ');
        }
        s.push('\n');
    }

    // Bottom line
    for x in 0..snapshot.cols {
        s.push('+');
        if has_wall(snapshot, Position::new(x, snapshot.rows - 1), Direction::Down) {
            s.push_str("---");
        } else {
            s.push_str("   ");
        }
    }
    s.push_str("+\n");
    s
}
