/*
lib.rs

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

//! Maze generation and exploration simulation.
//!
//! A [`simulation::Simulation`] object first carves a random perfect maze one wall at a time,
//! then lets an agent explore it from the start cell until it finds the goal. The agent only
//! knows the walls of the cells it has been in.

pub mod agent;
pub mod config;
pub mod draw;
pub mod errors;
pub mod maze;
pub mod random;
pub mod simulation;
pub mod stats;
