/*
agent.rs

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

//! Robot exploring a finished maze.
//!
//! The [`Agent`] does not know the maze. It only learns the walls of the cell it stands on, and
//! stores them in its [`overlay::KnownLayout`].
//! From that knowledge it moves to a random open neighbor it has not entered yet, and walks back
//! along its own stack when it reaches a dead end.
//! This is a second depth-first traversal of the maze, independent from the one that carved it,
//! so it always terminates.
//!
//! The agent does not try to find the shortest path: the random choice between several unexplored
//! openings is intended.

pub mod overlay;

use log::debug;
use serde::{Deserialize, Serialize};

use self::overlay::{KnownLayout, VisitedSet};
use crate::errors::ErrorKind;
use crate::maze::cell::Walls;
use crate::maze::direction::Position;
use crate::maze::grid::Grid;
use crate::random::RandomSource;

/// Exploration state.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AgentState {
    /// Not started yet.
    Idle,

    /// The last step entered a new cell.
    Moving,

    /// The last step went back to the previous cell of the stack.
    Backtracking,

    /// Exploration is over. `reached_goal` is false only when the stack emptied before the goal
    /// was found, which cannot happen in a perfect maze.
    Done { reached_goal: bool },
}

/// Continuous position used for display only, in cell units.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq)]
pub struct DisplayPosition {
    pub x: f32,
    pub y: f32,
}

impl From<Position> for DisplayPosition {
    fn from(pos: Position) -> Self {
        Self {
            x: pos.x as f32,
            y: pos.y as f32,
        }
    }
}

/// Exploring robot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Agent {
    /// Cell the agent stands on. It is also the movement target of the display position.
    current: Position,

    /// Exit cell.
    goal: Position,

    /// Smoothed position for display.
    display: DisplayPosition,

    /// Backtracking stack. The top of the stack is always the current cell.
    stack: Vec<Position>,

    /// Cells the agent has entered.
    visited: VisitedSet,

    /// Walls the agent has sensed.
    known: KnownLayout,

    state: AgentState,

    /// Number of exploration steps.
    steps: usize,

    /// Number of forward moves.
    moves: usize,

    /// Number of backward moves.
    backtracks: usize,
}

impl Agent {
    /// Create an [`Agent`] object standing on `start` in the given grid.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::OutOfBounds`] if `start` or `goal` is outside the grid.
    pub fn new(grid: &Grid, start: Position, goal: Position) -> Result<Self, ErrorKind> {
        grid.index(start)?;
        grid.index(goal)?;

        let mut visited: VisitedSet = VisitedSet::new(grid.cols(), grid.rows());
        visited.insert(start)?;
        let mut stack: Vec<Position> = Vec::with_capacity(grid.len());
        stack.push(start);

        Ok(Self {
            current: start,
            goal,
            display: DisplayPosition::from(start),
            stack,
            visited,
            known: KnownLayout::new(grid.cols(), grid.rows()),
            state: AgentState::Idle,
            steps: 0,
            moves: 0,
            backtracks: 0,
        })
    }

    /// Perform one exploration step and return the new state.
    ///
    /// The grid must be the one the agent was created for. It is only read to sense the walls of
    /// the cell the agent occupies.
    pub fn step<R: RandomSource + ?Sized>(
        &mut self,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<AgentState, ErrorKind> {
        if self.is_done() {
            return Ok(self.state);
        }
        self.steps += 1;

        let walls: Walls = self.sense(grid)?;
        if self.current == self.goal {
            self.finish(true);
            return Ok(self.state);
        }

        let mut candidates: Vec<Position> = Vec::with_capacity(4);
        for d in walls.openings() {
            if let Some(n) = d.step(self.current, grid.cols(), grid.rows())
                && !self.visited.contains(n)?
            {
                candidates.push(n);
            }
        }

        if candidates.is_empty() {
            self.stack.pop();
            match self.stack.last() {
                Some(&previous) => {
                    debug!("Agent: dead end at {}, back to {previous}", self.current);
                    self.current = previous;
                    self.backtracks += 1;
                    self.state = AgentState::Backtracking;
                }
                None => {
                    debug!("Agent: stack empty at {}", self.current);
                    self.finish(false);
                }
            }
            return Ok(self.state);
        }

        let next: Position = candidates[rng.pick(candidates.len())];
        debug!("Agent: {} -> {next}", self.current);
        self.visited.insert(next)?;
        self.stack.push(next);
        self.current = next;
        self.moves += 1;
        self.state = AgentState::Moving;

        // Entering a cell is occupying it
        self.sense(grid)?;
        if self.current == self.goal {
            self.finish(true);
        }
        Ok(self.state)
    }

    /// Copy the walls of the current cell into the known layout.
    fn sense(&mut self, grid: &Grid) -> Result<Walls, ErrorKind> {
        let walls: Walls = grid.cell(self.current)?.walls;
        self.known.sense(self.current, walls)?;
        Ok(walls)
    }

    fn finish(&mut self, reached_goal: bool) {
        self.state = AgentState::Done { reached_goal };
        debug!(
            "Agent done at {} (goal reached = {reached_goal}, steps = {}, backtracks = {})",
            self.current, self.steps, self.backtracks
        );
    }

    /// Move the display position toward the current cell with exponential smoothing.
    ///
    /// `dt` is the elapsed time in seconds and `rate` the smoothing rate per second.
    pub fn interpolate(&mut self, dt: f32, rate: f32) {
        if dt <= 0.0 {
            return;
        }
        let alpha: f32 = (1.0 - (-rate * dt).exp()).clamp(0.0, 1.0);
        let target: DisplayPosition = DisplayPosition::from(self.current);
        self.display.x += (target.x - self.display.x) * alpha;
        self.display.y += (target.y - self.display.y) * alpha;
    }

    /// Current state.
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Whether the exploration is over.
    pub fn is_done(&self) -> bool {
        matches!(self.state, AgentState::Done { .. })
    }

    /// Whether the agent stands on the goal.
    pub fn reached_goal(&self) -> bool {
        self.state == AgentState::Done { reached_goal: true }
    }

    /// Cell the agent stands on.
    pub fn position(&self) -> Position {
        self.current
    }

    /// Smoothed position for display.
    pub fn display_position(&self) -> DisplayPosition {
        self.display
    }

    /// Backtracking stack, from the start cell to the current cell.
    pub fn stack(&self) -> &[Position] {
        &self.stack
    }

    /// Cells the agent has entered.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// What the agent knows about the maze.
    pub fn known_layout(&self) -> &KnownLayout {
        &self.known
    }

    /// Number of exploration steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of forward moves.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Number of backward moves.
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    /// Corridor along the top row plus one dead end going down from (1, 0).
    ///
    /// ```text
    /// (0,0) - (1,0) - (2,0)
    ///           |
    ///         (1,1)
    /// ```
    fn t_maze() -> Grid {
        let mut g = Grid::new(3, 2).unwrap();
        g.remove_wall(Position::new(0, 0), Position::new(1, 0))
            .unwrap();
        g.remove_wall(Position::new(1, 0), Position::new(2, 0))
            .unwrap();
        g.remove_wall(Position::new(1, 0), Position::new(1, 1))
            .unwrap();
        g
    }

    #[test]
    fn single_cell_finishes_on_first_step() {
        let g = Grid::new(1, 1).unwrap();
        let mut a = Agent::new(&g, Position::new(0, 0), Position::new(0, 0)).unwrap();
        assert_eq!(a.state(), AgentState::Idle);
        let mut rng = ScriptedSource::new(&[]);
        assert_eq!(
            a.step(&g, &mut rng),
            Ok(AgentState::Done { reached_goal: true })
        );
        assert_eq!(a.steps(), 1);
        assert_eq!(a.known_layout().is_discovered(Position::new(0, 0)), Ok(true));
    }

    #[test]
    fn dead_end_triggers_backtracking() {
        let g = t_maze();
        let mut a = Agent::new(&g, Position::new(0, 0), Position::new(2, 0)).unwrap();
        // At (1, 0) the open unvisited neighbors are [right, down]: pick down first
        let mut rng = ScriptedSource::new(&[0, 1]);

        assert_eq!(a.step(&g, &mut rng), Ok(AgentState::Moving));
        assert_eq!(a.position(), Position::new(1, 0));
        assert_eq!(a.step(&g, &mut rng), Ok(AgentState::Moving));
        assert_eq!(a.position(), Position::new(1, 1));
        assert_eq!(a.step(&g, &mut rng), Ok(AgentState::Backtracking));
        assert_eq!(a.position(), Position::new(1, 0));
        assert_eq!(a.stack(), &[Position::new(0, 0), Position::new(1, 0)]);
        assert_eq!(
            a.step(&g, &mut rng),
            Ok(AgentState::Done { reached_goal: true })
        );
        assert_eq!(a.position(), Position::new(2, 0));
        assert_eq!(a.moves(), 3);
        assert_eq!(a.backtracks(), 1);
        assert_eq!(a.visited().len(), 4);
    }

    #[test]
    fn disconnected_goal_empties_the_stack() {
        let mut g = Grid::new(2, 2).unwrap();
        g.remove_wall(Position::new(0, 0), Position::new(1, 0))
            .unwrap();
        let mut a = Agent::new(&g, Position::new(0, 0), Position::new(1, 1)).unwrap();
        let mut rng = ScriptedSource::new(&[]);
        let mut state = AgentState::Idle;
        for _ in 0..10 {
            state = a.step(&g, &mut rng).unwrap();
        }
        assert_eq!(state, AgentState::Done { reached_goal: false });
        assert!(!a.reached_goal());
        assert!(a.stack().is_empty());
    }

    #[test]
    fn discovered_cells_are_the_occupied_cells() {
        let g = t_maze();
        let mut a = Agent::new(&g, Position::new(0, 0), Position::new(2, 0)).unwrap();
        let mut rng = ScriptedSource::new(&[0]);
        let mut occupied = vec![a.position()];
        while !a.is_done() {
            a.step(&g, &mut rng).unwrap();
            occupied.push(a.position());
        }
        for i in 0..g.len() {
            let pos = g.position(i);
            assert_eq!(
                a.known_layout().is_discovered(pos),
                Ok(occupied.contains(&pos))
            );
            if let Some(w) = a.known_layout().walls(pos).unwrap() {
                assert_eq!(w, g.cell(pos).unwrap().walls);
            }
        }
    }

    #[test]
    fn display_position_converges() {
        let g = t_maze();
        let mut a = Agent::new(&g, Position::new(0, 0), Position::new(2, 0)).unwrap();
        let mut rng = ScriptedSource::new(&[0]);
        a.step(&g, &mut rng).unwrap();
        assert_eq!(a.display_position(), DisplayPosition { x: 0.0, y: 0.0 });
        a.interpolate(0.0, 10.0);
        assert_eq!(a.display_position().x, 0.0);
        a.interpolate(0.1, 10.0);
        let x = a.display_position().x;
        assert!(x > 0.0 && x < 1.0);
        for _ in 0..100 {
            a.interpolate(0.1, 10.0);
        }
        assert!((a.display_position().x - 1.0).abs() < 1e-3);
    }

    #[test]
    fn start_outside_is_rejected() {
        let g = Grid::new(2, 2).unwrap();
        assert!(Agent::new(&g, Position::new(5, 0), Position::new(1, 1)).is_err());
        assert!(Agent::new(&g, Position::new(0, 0), Position::new(1, 2)).is_err());
    }
}
