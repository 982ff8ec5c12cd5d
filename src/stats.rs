/*
stats.rs

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

//! Counters collected while a simulation runs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistics for one maze.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of time-driven ticks processed before the simulation finished.
    pub ticks: usize,

    /// Number of walls removed by the generator.
    pub carves: usize,

    /// Number of exploration steps.
    pub exploration_steps: usize,

    /// Number of forward moves of the agent.
    pub moves: usize,

    /// Number of backward moves of the agent.
    pub backtracks: usize,

    /// Number of distinct cells the agent entered.
    pub cells_visited: usize,

    /// Length in moves of the unique path between the start and the goal.
    /// Set when the simulation finishes.
    pub solution_steps: Option<usize>,

    /// Whether the agent reached the goal. Set when the simulation finishes.
    pub reached_goal: Option<bool>,
}

impl RunStats {
    /// Moves made by the agent per move of the solution path.
    /// Return None until the simulation finishes.
    pub fn detour_ratio(&self) -> Option<f32> {
        match self.solution_steps {
            Some(0) => Some(1.0),
            Some(s) => Some((self.moves + self.backtracks) as f32 / s as f32),
            None => None,
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "             ticks = {}", self.ticks)?;
        writeln!(f, "     walls removed = {}", self.carves)?;
        writeln!(f, " exploration steps = {}", self.exploration_steps)?;
        writeln!(f, "             moves = {}", self.moves)?;
        writeln!(f, "        backtracks = {}", self.backtracks)?;
        writeln!(f, "     cells visited = {}", self.cells_visited)?;
        match self.solution_steps {
            Some(s) => writeln!(f, "    solution steps = {s}")?,
            None => writeln!(f, "    solution steps = -")?,
        }
        match self.detour_ratio() {
            Some(r) => writeln!(f, "      detour ratio = {r:.2}")?,
            None => writeln!(f, "      detour ratio = -")?,
        }
        match self.reached_goal {
            Some(r) => write!(f, "      reached goal = {r}"),
            None => write!(f, "      reached goal = -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detour_ratio_needs_a_solution() {
        let mut s = RunStats {
            moves: 6,
            backtracks: 2,
            ..Default::default()
        };
        assert_eq!(s.detour_ratio(), None);
        s.solution_steps = Some(4);
        assert_eq!(s.detour_ratio(), Some(2.0));
        s.solution_steps = Some(0);
        assert_eq!(s.detour_ratio(), Some(1.0));
    }

    #[test]
    fn summary_lists_every_counter() {
        let s = RunStats::default();
        let text = s.to_string();
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("reached goal = -"));
    }
}
