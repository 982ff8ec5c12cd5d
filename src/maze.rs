/*
maze.rs

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

//! Build perfect mazes and find their solution.
//!
//! A maze is a [`grid::Grid`] of [`cell::Cell`] objects.
//! Each cell has four walls, and the only way to open a wall is
//! [`grid::Grid::remove_wall`], which opens both sides of the wall at once.
//!
//! To build a maze, create an empty grid and a [`carver::MazeCarver`] object, and call
//! [`carver::MazeCarver::step`] until it returns `None`.
//! Each step removes one wall, so a caller can animate the construction.
//! The [`carver::generate`] function does the same in one call.
//!
//! The resulting maze is perfect: there is exactly one path between any two cells.
//! [`solver::find_path`] returns that path as a [`path::Path`] object.

pub mod carver;
pub mod cell;
pub mod direction;
pub mod grid;
pub mod path;
pub mod solver;
