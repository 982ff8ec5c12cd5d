/*
cell.rs

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

//! Maze cells and their walls.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// All four walls present.
const ALL_WALLS: u8 = 0b1111;

/// Wall configuration of a cell, one bit per [`Direction`] (1=up, 2=right, 4=down, 8=left).
///
/// This is the only part of a cell the exploration agent can ever copy.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Walls(u8);

impl Default for Walls {
    fn default() -> Self {
        Self(ALL_WALLS)
    }
}

impl Walls {
    /// Wall bitmap.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether there is a wall in the given direction.
    pub fn has(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Whether there is an opening in the given direction.
    pub fn is_open(self, direction: Direction) -> bool {
        !self.has(direction)
    }

    /// Remove the wall in the given direction.
    ///
    /// Only the grid calls this method, always for both sides of a wall at once.
    pub(super) fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }

    /// Directions without a wall, in the [`Direction::ALL`] order.
    pub fn openings(self) -> impl Iterator<Item = Direction> {
        let open: u8 = !self.0 & ALL_WALLS;
        (0..4u8)
            .filter(move |i| open & (1 << i) != 0)
            .filter_map(Direction::from_repr)
    }
}

/// Cell of the maze.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Walls around the cell.
    pub walls: Walls,

    /// Whether the maze generator already carved into this cell.
    /// The flag is only meaningful during generation.
    pub(super) visited: bool,
}

impl Cell {
    /// Whether there is a wall in the given direction.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    /// Whether the maze generator reached this cell.
    pub fn is_visited(&self) -> bool {
        self.visited
    }
}
