/*
grid.rs

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

//! Rectangular lattice of maze cells.

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Walls};
use super::direction::{Direction, Position};
use crate::config::MAX_CELLS;
use crate::errors::ErrorKind;

/// Grid of `cols` x `rows` cells, stored row by row.
///
/// The shape of the grid never changes. Walls only change through [`Grid::remove_wall`], which
/// always opens both sides of a wall together.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a [`Grid`] object with all the walls in place.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::InvalidConfiguration`] if a dimension is zero or if the
    /// grid would have more than [`MAX_CELLS`] cells.
    pub fn new(cols: usize, rows: usize) -> Result<Self, ErrorKind> {
        if cols == 0 || rows == 0 {
            return Err(ErrorKind::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {cols}x{rows}"
            )));
        }
        let len: usize = match cols.checked_mul(rows) {
            Some(n) if n <= MAX_CELLS => n,
            _ => {
                return Err(ErrorKind::InvalidConfiguration(format!(
                    "a {cols}x{rows} grid exceeds {MAX_CELLS} cells"
                )));
            }
        };
        Ok(Self {
            cols,
            rows,
            cells: vec![Cell::default(); len],
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    /// Row-major index of the position.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if the position is outside the grid.
    pub fn index(&self, pos: Position) -> Result<usize, ErrorKind> {
        if !self.contains(pos) {
            return Err(ErrorKind::OutOfBounds {
                x: pos.x,
                y: pos.y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(pos.y * self.cols + pos.x)
    }

    /// Position for a row-major index. The index must come from [`Grid::index`].
    pub fn position(&self, index: usize) -> Position {
        Position::new(index % self.cols, index / self.cols)
    }

    /// Return the cell at the given position.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if the position is outside the grid.
    pub fn cell(&self, pos: Position) -> Result<&Cell, ErrorKind> {
        let i: usize = self.index(pos)?;
        Ok(&self.cells[i])
    }

    /// Return the cells, row by row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Position of the neighbor in the given direction, or None at the border.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        direction.step(pos, self.cols, self.rows)
    }

    /// Neighbors reachable from the position through an opening, in [`Direction::ALL`] order.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if the position is outside the grid.
    pub fn open_neighbors(&self, pos: Position) -> Result<Vec<Position>, ErrorKind> {
        let walls: Walls = self.cell(pos)?.walls;
        Ok(walls
            .openings()
            .filter_map(|d| self.neighbor(pos, d))
            .collect())
    }

    /// Mark a cell as reached by the maze generator.
    pub(super) fn mark_visited(&mut self, pos: Position) -> Result<(), ErrorKind> {
        let i: usize = self.index(pos)?;
        self.cells[i].visited = true;
        Ok(())
    }

    /// Remove the wall between two adjacent cells.
    ///
    /// The direction from `a` to `b` is computed once, and both the wall of `a` facing `b` and
    /// the wall of `b` facing `a` are removed. Nothing changes when an error is returned.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if a position is outside the grid, and
    /// [`ErrorKind::NotAdjacent`] if the cells do not share a wall.
    pub fn remove_wall(&mut self, a: Position, b: Position) -> Result<Direction, ErrorKind> {
        let ia: usize = self.index(a)?;
        let ib: usize = self.index(b)?;
        let direction: Direction =
            Direction::between(a, b).ok_or(ErrorKind::NotAdjacent(a.x, a.y, b.x, b.y))?;

        self.cells[ia].walls.remove(direction);
        self.cells[ib].walls.remove(direction.opposite());
        debug!("    Wall {a}-{b} removed ({direction:?})");
        Ok(direction)
    }

    /// Number of removed walls between pairs of cells.
    pub fn passage_count(&self) -> usize {
        // Count each passage once, from its upper or left cell
        self.cells
            .iter()
            .map(|c| {
                usize::from(c.walls.is_open(Direction::Right))
                    + usize::from(c.walls.is_open(Direction::Down))
            })
            .sum()
    }

    /// Wall bitmap of each cell, row by row.
    pub fn wall_bits(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.walls.bits()).collect()
    }

    /// Print the wall bitmap.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        for row in self.cells.chunks(self.cols) {
            let s: String = row.iter().map(|c| format!("{:x}", c.walls.bits())).collect();
            debug!("{s}");
        }
    }
}
