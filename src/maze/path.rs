/*
path.rs

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

//! Path through the maze.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::direction::{Direction, Position};
use super::grid::Grid;

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells, from the entry to the exit.
    path: Vec<Position>,

    /// Stores the cells of the path.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    cells: HashSet<Position>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            cells: HashSet::with_capacity(capacity),
        }
    }

    /// Add a cell to the end of the path.
    pub fn push(&mut self, pos: Position) {
        self.path.push(pos);
        self.cells.insert(pos);
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cell, which means that the exit is not reachable.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves from the first to the last cell.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &[Position] {
        &self.path
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<Position> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Position> {
        self.path.last().copied()
    }

    /// Whether each move of the path goes to an adjacent cell through an opening of the grid.
    pub fn is_walkable(&self, grid: &Grid) -> bool {
        self.path.windows(2).all(|w| {
            match (Direction::between(w[0], w[1]), grid.cell(w[0])) {
                (Some(d), Ok(cell)) => !cell.has_wall(d),
                _ => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_lookup() {
        let mut p = Path::new(3);
        assert!(p.is_empty());
        assert_eq!(p.steps(), 0);
        p.push(Position::new(0, 0));
        p.push(Position::new(1, 0));
        assert_eq!(p.len(), 2);
        assert_eq!(p.steps(), 1);
        assert!(p.contains(Position::new(1, 0)));
        assert!(!p.contains(Position::new(1, 1)));
        assert_eq!(p.get_first(), Some(Position::new(0, 0)));
        assert_eq!(p.get_last(), Some(Position::new(1, 0)));
    }

    #[test]
    fn walls_block_the_path() {
        let mut grid = Grid::new(2, 1).unwrap();
        let mut p = Path::new(2);
        p.push(Position::new(0, 0));
        p.push(Position::new(1, 0));
        assert!(!p.is_walkable(&grid));
        grid.remove_wall(Position::new(0, 0), Position::new(1, 0))
            .unwrap();
        assert!(p.is_walkable(&grid));

        let mut jump = Path::new(2);
        jump.push(Position::new(0, 0));
        jump.push(Position::new(0, 0));
        assert!(!jump.is_walkable(&grid));
    }
}
