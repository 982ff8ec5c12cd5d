/*
carver.rs

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

//! Carve a perfect maze with the randomized backtracking algorithm.
//!
//! The carver keeps the current carving path in a stack (the frontier). At each step it looks at
//! the cells next to the top of the stack that it has not reached yet, picks one at random,
//! removes the wall in between, and pushes it. Dead ends are popped until a cell with an
//! unreached neighbor shows up again. Each cell is reached exactly once, so the carver removes
//! `cols * rows - 1` walls and the result is a spanning tree of the grid.

use log::debug;

use super::direction::{Direction, Position};
use super::grid::Grid;
use crate::errors::ErrorKind;
use crate::random::RandomSource;

/// Passage removed by one carving step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Carve {
    pub from: Position,
    pub to: Position,
    pub direction: Direction,
}

/// Incremental maze generator.
///
/// The carver does not own the grid: the caller passes the same freshly created [`Grid`] to
/// [`MazeCarver::start`] and to every [`MazeCarver::step`].
#[derive(Debug, Clone)]
pub struct MazeCarver {
    /// Current carving path. The top of the stack is the current cell.
    stack: Vec<Position>,

    /// Number of walls removed so far.
    carved: usize,
}

impl MazeCarver {
    /// Create a [`MazeCarver`] object that carves the grid from the `origin` cell.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if `origin` is outside the grid.
    pub fn start(grid: &mut Grid, origin: Position) -> Result<Self, ErrorKind> {
        grid.mark_visited(origin)?;
        let mut stack: Vec<Position> = Vec::with_capacity(grid.len());
        stack.push(origin);
        debug!(
            "Carving a {}x{} maze from {origin}",
            grid.cols(),
            grid.rows()
        );
        Ok(Self { stack, carved: 0 })
    }

    /// Whether the frontier is empty, which means that the maze is complete.
    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    /// Current cell (top of the frontier).
    pub fn current(&self) -> Option<Position> {
        self.stack.last().copied()
    }

    /// Current carving path, from the origin to the current cell.
    pub fn frontier(&self) -> &[Position] {
        &self.stack
    }

    /// Number of walls removed so far.
    pub fn carved(&self) -> usize {
        self.carved
    }

    /// Remove one wall.
    ///
    /// Dead ends at the top of the frontier are popped first. Return the carved passage, or
    /// None when the frontier empties (the maze is complete).
    ///
    /// The random source is used once per carved passage, so carving in several batches gives
    /// the same maze as carving all at once.
    pub fn step<R: RandomSource + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<Option<Carve>, ErrorKind> {
        while let Some(&current) = self.stack.last() {
            let candidates: Vec<Position> = Self::unvisited_neighbors(grid, current)?;
            if candidates.is_empty() {
                debug!("    Back: no unvisited neighbor around {current}");
                self.stack.pop();
                continue;
            }

            let next: Position = candidates[rng.pick(candidates.len())];
            grid.mark_visited(next)?;
            let direction: Direction = grid.remove_wall(current, next)?;
            self.stack.push(next);
            self.carved += 1;
            return Ok(Some(Carve {
                from: current,
                to: next,
                direction,
            }));
        }
        Ok(None)
    }

    /// Neighbors of the cell not reached yet, in [`Direction::ALL`] order.
    fn unvisited_neighbors(grid: &Grid, pos: Position) -> Result<Vec<Position>, ErrorKind> {
        let mut neighbors: Vec<Position> = Vec::with_capacity(4);
        for d in Direction::ALL {
            if let Some(n) = grid.neighbor(pos, d)
                && !grid.cell(n)?.is_visited()
            {
                neighbors.push(n);
            }
        }
        Ok(neighbors)
    }
}

/// Generate a complete maze in one go.
///
/// # Errors
///
/// The function returns [`ErrorKind::InvalidConfiguration`] for a zero dimension, and
/// [`ErrorKind::OutOfBounds`] if `origin` is outside the grid.
pub fn generate<R: RandomSource + ?Sized>(
    cols: usize,
    rows: usize,
    origin: Position,
    rng: &mut R,
) -> Result<Grid, ErrorKind> {
    let mut grid: Grid = Grid::new(cols, rows)?;
    let mut carver: MazeCarver = MazeCarver::start(&mut grid, origin)?;
    while carver.step(&mut grid, rng)?.is_some() {}
    debug!("Maze complete: {} walls removed", carver.carved());
    grid.debug();
    Ok(grid)
}
