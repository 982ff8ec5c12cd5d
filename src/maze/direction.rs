/*
direction.rs

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

//! Cell coordinates and the four orthogonal directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Coordinates of a cell. `x` is the column and `y` the row, `(0, 0)` is the top-left cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Number of steps between the two cells when walls are ignored.
    pub fn manhattan(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orthogonal direction.
///
/// The discriminant is the bit position of the matching wall in [`super::cell::Walls`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All the directions, in the order used to list the neighbors of a cell.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Direction that faces this one.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Wall bit for this direction: 1=up, 2=right, 4=down, 8=left.
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Position of the cell next to `from` in this direction, or None when it would fall
    /// outside a `cols` x `rows` grid.
    pub fn step(self, from: Position, cols: usize, rows: usize) -> Option<Position> {
        match self {
            Direction::Up if from.y > 0 => Some(Position::new(from.x, from.y - 1)),
            Direction::Right if from.x + 1 < cols => Some(Position::new(from.x + 1, from.y)),
            Direction::Down if from.y + 1 < rows => Some(Position::new(from.x, from.y + 1)),
            Direction::Left if from.x > 0 => Some(Position::new(from.x - 1, from.y)),
            _ => None,
        }
    }

    /// Direction to go from `a` to `b`, or None if the two cells are not orthogonally adjacent.
    pub fn between(a: Position, b: Position) -> Option<Self> {
        if a.x == b.x && a.y == b.y + 1 {
            Some(Direction::Up)
        } else if a.y == b.y && a.x + 1 == b.x {
            Some(Direction::Right)
        } else if a.x == b.x && a.y + 1 == b.y {
            Some(Direction::Down)
        } else if a.y == b.y && a.x == b.x + 1 {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_matches_step() {
        let p = Position::new(1, 1);
        for d in Direction::ALL {
            let n = d.step(p, 3, 3).unwrap();
            assert_eq!(Direction::between(p, n), Some(d));
            assert_eq!(Direction::between(n, p), Some(d.opposite()));
        }
    }

    #[test]
    fn step_stops_at_borders() {
        let corner = Position::new(0, 0);
        assert_eq!(Direction::Up.step(corner, 2, 2), None);
        assert_eq!(Direction::Left.step(corner, 2, 2), None);
        let far = Position::new(1, 1);
        assert_eq!(Direction::Right.step(far, 2, 2), None);
        assert_eq!(Direction::Down.step(far, 2, 2), None);
    }

    #[test]
    fn diagonal_is_not_adjacent() {
        assert_eq!(
            Direction::between(Position::new(0, 0), Position::new(1, 1)),
            None
        );
        assert_eq!(
            Direction::between(Position::new(0, 0), Position::new(0, 0)),
            None
        );
    }

    #[test]
    fn bits_round_trip_through_repr() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_repr(d.bit().trailing_zeros() as u8), Some(d));
        }
    }
}
