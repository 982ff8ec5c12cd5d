/*
overlay.rs

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

//! What the agent knows about the maze.

use serde::{Deserialize, Serialize};

use crate::errors::ErrorKind;
use crate::maze::cell::Walls;
use crate::maze::direction::Position;

/// Row-major index of the position in a `cols` x `rows` overlay.
fn index(cols: usize, rows: usize, pos: Position) -> Result<usize, ErrorKind> {
    if pos.x >= cols || pos.y >= rows {
        return Err(ErrorKind::OutOfBounds {
            x: pos.x,
            y: pos.y,
            cols,
            rows,
        });
    }
    Ok(pos.y * cols + pos.x)
}

/// Agent's private copy of the maze layout.
///
/// The overlay starts empty. The walls of a cell are copied in when the agent occupies that
/// cell, and never before. Only [`Walls`] are stored, so the generator's own bookkeeping cannot
/// leak to the agent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KnownLayout {
    cols: usize,
    rows: usize,

    /// Sensed walls, row by row. None for cells the agent has not occupied yet.
    walls: Vec<Option<Walls>>,

    /// Cells revealed for display. A cell is discovered if and only if its walls are known.
    discovered: Vec<bool>,
}

impl KnownLayout {
    /// Create a [`KnownLayout`] object where nothing is known.
    ///
    /// The dimensions come from an existing grid.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            walls: vec![None; cols * rows],
            discovered: vec![false; cols * rows],
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Record the walls of the cell the agent occupies.
    pub(super) fn sense(&mut self, pos: Position, walls: Walls) -> Result<(), ErrorKind> {
        let i: usize = index(self.cols, self.rows, pos)?;
        self.walls[i] = Some(walls);
        self.discovered[i] = true;
        Ok(())
    }

    /// Sensed walls of the cell, or None if the agent has never been there.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if the position is outside the grid.
    pub fn walls(&self, pos: Position) -> Result<Option<Walls>, ErrorKind> {
        Ok(self.walls[index(self.cols, self.rows, pos)?])
    }

    /// Whether the cell has been revealed.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if the position is outside the grid.
    pub fn is_discovered(&self, pos: Position) -> Result<bool, ErrorKind> {
        Ok(self.discovered[index(self.cols, self.rows, pos)?])
    }

    /// Discovered mask, row by row.
    pub fn discovered(&self) -> &[bool] {
        &self.discovered
    }

    /// Number of discovered cells.
    pub fn discovered_count(&self) -> usize {
        self.discovered.iter().filter(|d| **d).count()
    }
}

/// Cells the agent has already entered.
///
/// This set belongs to the agent alone. It is a different type from the generator's visited
/// flags stored in the maze cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    cols: usize,
    rows: usize,
    visited: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// Create an empty [`VisitedSet`] object.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            visited: vec![false; cols * rows],
            count: 0,
        }
    }

    /// Add the cell to the set. Return false if the cell was already there.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if the position is outside the grid.
    pub fn insert(&mut self, pos: Position) -> Result<bool, ErrorKind> {
        let i: usize = index(self.cols, self.rows, pos)?;
        if self.visited[i] {
            return Ok(false);
        }
        self.visited[i] = true;
        self.count += 1;
        Ok(true)
    }

    /// Whether the cell is in the set.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if the position is outside the grid.
    pub fn contains(&self, pos: Position) -> Result<bool, ErrorKind> {
        Ok(self.visited[index(self.cols, self.rows, pos)?])
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
