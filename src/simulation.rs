/*
simulation.rs

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

//! Drive the maze generation and the exploration.
//!
//! The [`Simulation`] object goes through three phases:
//!
//! * [`Phase::Generating`]: each tick removes some walls with the [`MazeCarver`].
//! * [`Phase::Exploring`]: the maze is complete and read-only. The [`Agent`] performs one
//!   exploration step at a fixed interval.
//! * [`Phase::Finished`]: the agent reached the goal. Nothing changes anymore.
//!
//! A display loop calls [`Simulation::tick`] with the elapsed time of each frame.
//! Tests and batch runs call [`Simulation::advance_one_step`], which ignores time.
//! Both return a [`SimulationSnapshot`] describing what to draw.

use log::{debug, info};
use serde::Serialize;

use crate::agent::overlay::KnownLayout;
use crate::agent::{Agent, AgentState, DisplayPosition};
use crate::config::SimulationConfig;
use crate::errors::ErrorKind;
use crate::maze::carver::MazeCarver;
use crate::maze::direction::Position;
use crate::maze::grid::Grid;
use crate::maze::path::Path;
use crate::maze::solver;
use crate::random::RandomSource;
use crate::stats::RunStats;

/// Simulation phase.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Generating,
    Exploring,
    Finished,
}

/// Agent details for display.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct AgentView {
    pub position: Position,
    pub display: DisplayPosition,
    pub state: AgentState,
}

/// What to display after a step.
///
/// During generation the snapshot holds the grid being carved and the carving path. During
/// exploration it holds what the agent knows, not the grid. Once finished, it holds both.
#[derive(Serialize, Debug, Clone)]
pub struct SimulationSnapshot<'a> {
    pub phase: Phase,
    pub cols: usize,
    pub rows: usize,
    pub start: Position,
    pub goal: Position,
    pub grid: Option<&'a Grid>,
    pub frontier: &'a [Position],
    pub known: Option<&'a KnownLayout>,
    pub agent: Option<AgentView>,
    pub stats: &'a RunStats,
}

/// Maze simulation.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    phase: Phase,

    /// Maze. Only the carver modifies it, and only during [`Phase::Generating`].
    grid: Grid,

    /// Present during [`Phase::Generating`] only.
    carver: Option<MazeCarver>,

    /// Present from [`Phase::Exploring`] on.
    agent: Option<Agent>,

    /// Time accumulated since the last exploration step, in seconds.
    step_timer: f32,

    stats: RunStats,
}

impl Simulation {
    /// Create a [`Simulation`] object, ready to generate a maze.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::InvalidConfiguration`] if the configuration is not valid.
    pub fn new(config: SimulationConfig) -> Result<Self, ErrorKind> {
        config.validate()?;
        let (grid, carver) = Self::fresh_maze(&config)?;
        info!(
            "New {}x{} maze, start {}, goal {}",
            config.cols,
            config.rows,
            config.start,
            config.goal()
        );
        Ok(Self {
            config,
            phase: Phase::Generating,
            grid,
            carver: Some(carver),
            agent: None,
            step_timer: 0.0,
            stats: RunStats::default(),
        })
    }

    /// Allocate an empty grid and a carver for it.
    fn fresh_maze(config: &SimulationConfig) -> Result<(Grid, MazeCarver), ErrorKind> {
        let mut grid: Grid = Grid::new(config.cols, config.rows)?;
        let carver: MazeCarver = MazeCarver::start(&mut grid, config.start)?;
        Ok((grid, carver))
    }

    /// Perform one step of the active component, whatever the elapsed time: remove one wall, or
    /// move the agent once.
    pub fn advance_one_step<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<SimulationSnapshot<'_>, ErrorKind> {
        match self.phase {
            Phase::Generating => self.carve(1, rng)?,
            Phase::Exploring => self.explore(rng)?,
            Phase::Finished => (),
        }
        Ok(self.snapshot())
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// While generating, each tick removes [`SimulationConfig::carve_per_tick`] walls.
    /// While exploring, the agent moves once every [`SimulationConfig::step_interval`] seconds,
    /// and its display position is smoothed toward its cell at every tick.
    pub fn tick<R: RandomSource + ?Sized>(
        &mut self,
        dt: f32,
        rng: &mut R,
    ) -> Result<SimulationSnapshot<'_>, ErrorKind> {
        match self.phase {
            Phase::Generating => {
                self.stats.ticks += 1;
                self.carve(self.config.carve_per_tick, rng)?;
            }
            Phase::Exploring => {
                self.stats.ticks += 1;
                self.step_timer += dt.max(0.0);
                while self.phase == Phase::Exploring && self.step_timer >= self.config.step_interval
                {
                    self.step_timer -= self.config.step_interval;
                    self.explore(rng)?;
                }
                if let Some(agent) = self.agent.as_mut() {
                    agent.interpolate(dt, self.config.smoothing_rate);
                }
            }
            Phase::Finished => (),
        }
        Ok(self.snapshot())
    }

    /// Run the simulation until the agent finishes, and return the statistics.
    ///
    /// Generation takes `cols * rows` steps and exploration at most `2 * cols * rows` steps, so
    /// this always terminates.
    pub fn run_to_completion<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&RunStats, ErrorKind> {
        while self.phase != Phase::Finished {
            self.advance_one_step(rng)?;
        }
        Ok(&self.stats)
    }

    /// Remove up to `count` walls. Start the exploration when the maze is complete.
    fn carve<R: RandomSource + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<(), ErrorKind> {
        for _ in 0..count {
            let carved = match self.carver.as_mut() {
                Some(carver) => carver.step(&mut self.grid, rng)?,
                None => None,
            };
            if carved.is_none() {
                self.begin_exploration()?;
                break;
            }
            self.stats.carves += 1;
        }
        Ok(())
    }

    /// Drop the carver and create the agent.
    fn begin_exploration(&mut self) -> Result<(), ErrorKind> {
        self.carver = None;
        self.grid.debug();
        self.agent = Some(Agent::new(
            &self.grid,
            self.config.start,
            self.config.goal(),
        )?);
        self.phase = Phase::Exploring;
        self.step_timer = 0.0;
        info!(
            "Maze generated ({} walls removed), exploring",
            self.stats.carves
        );
        Ok(())
    }

    /// Move the agent once.
    fn explore<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<(), ErrorKind> {
        let Some(agent) = self.agent.as_mut() else {
            return Ok(());
        };
        let state: AgentState = agent.step(&self.grid, rng)?;
        self.stats.exploration_steps = agent.steps();
        self.stats.moves = agent.moves();
        self.stats.backtracks = agent.backtracks();
        self.stats.cells_visited = agent.visited().len();
        debug!("Exploration step {}: {state:?}", agent.steps());

        if let AgentState::Done { reached_goal } = state {
            self.stats.reached_goal = Some(reached_goal);
            self.stats.solution_steps =
                Some(solver::find_path(&self.grid, self.config.start, self.config.goal())?.steps());
            self.phase = Phase::Finished;
            info!(
                "Exploration finished after {} steps (goal reached = {reached_goal})",
                self.stats.exploration_steps
            );
        }
        Ok(())
    }

    /// Start over with a new maze.
    ///
    /// # Errors
    ///
    /// The method returns [`ErrorKind::NotFinished`] if the simulation is still running. Use
    /// [`Simulation::abort`] to interrupt a running simulation.
    pub fn reset(&mut self) -> Result<(), ErrorKind> {
        if self.phase != Phase::Finished {
            return Err(ErrorKind::NotFinished);
        }
        self.abort()
    }

    /// Discard everything, including a partially generated maze, and start over with a new
    /// maze.
    pub fn abort(&mut self) -> Result<(), ErrorKind> {
        let (grid, carver) = Self::fresh_maze(&self.config)?;
        self.grid = grid;
        self.carver = Some(carver);
        self.agent = None;
        self.phase = Phase::Generating;
        self.step_timer = 0.0;
        self.stats = RunStats::default();
        debug!("Simulation restarted");
        Ok(())
    }

    /// Describe the current state for display.
    pub fn snapshot(&self) -> SimulationSnapshot<'_> {
        let agent: Option<AgentView> = self.agent.as_ref().map(|a| AgentView {
            position: a.position(),
            display: a.display_position(),
            state: a.state(),
        });
        let frontier: &[Position] = match &self.carver {
            Some(c) => c.frontier(),
            None => &[],
        };

        SimulationSnapshot {
            phase: self.phase,
            cols: self.config.cols,
            rows: self.config.rows,
            start: self.config.start,
            goal: self.config.goal(),
            grid: match self.phase {
                Phase::Exploring => None,
                Phase::Generating | Phase::Finished => Some(&self.grid),
            },
            frontier,
            known: self.agent.as_ref().map(|a| a.known_layout()),
            agent,
            stats: &self.stats,
        }
    }

    /// Path between the start and the goal, or None while the maze is being generated.
    pub fn solution(&self) -> Result<Option<Path>, ErrorKind> {
        if self.phase == Phase::Generating {
            return Ok(None);
        }
        solver::find_path(&self.grid, self.config.start, self.config.goal()).map(Some)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the simulation is over.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Maze, read-only.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Exploring agent, once the maze is complete.
    pub fn agent(&self) -> Option<&Agent> {
        self.agent.as_ref()
    }

    /// Configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Statistics so far.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn invalid_configuration_is_rejected() {
        assert!(matches!(
            Simulation::new(SimulationConfig::new(0, 3)),
            Err(ErrorKind::InvalidConfiguration(_))
        ));
        let mut c = SimulationConfig::new(3, 3);
        c.goal = Some(Position::new(0, 0));
        assert!(Simulation::new(c).is_err());
        assert!(matches!(
            Simulation::new(SimulationConfig::new(usize::MAX, 2)),
            Err(ErrorKind::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn phases_follow_each_other() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sim = Simulation::new(SimulationConfig::new(4, 3)).unwrap();
        assert_eq!(sim.phase(), Phase::Generating);

        // 11 carving steps, then one step to find the empty frontier
        for _ in 0..11 {
            let snap = sim.advance_one_step(&mut rng).unwrap();
            assert_eq!(snap.phase, Phase::Generating);
            assert!(snap.grid.is_some());
            assert!(snap.agent.is_none());
        }
        let snap = sim.advance_one_step(&mut rng).unwrap();
        assert_eq!(snap.phase, Phase::Exploring);
        assert!(snap.grid.is_none());
        assert!(snap.known.is_some());
        assert!(snap.frontier.is_empty());
        assert_eq!(snap.stats.carves, 11);

        let stats = sim.run_to_completion(&mut rng).unwrap().clone();
        assert!(sim.is_finished());
        assert_eq!(stats.reached_goal, Some(true));
        assert_eq!(sim.agent().map(|a| a.position()), Some(Position::new(3, 2)));

        // Nothing changes once finished
        let before = sim.grid().clone();
        let snap = sim.advance_one_step(&mut rng).unwrap();
        assert_eq!(snap.phase, Phase::Finished);
        assert_eq!(snap.stats, &stats);
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn single_cell_finishes_immediately() {
        let mut rng = ScriptedSource::new(&[]);
        let mut sim = Simulation::new(SimulationConfig::new(1, 1)).unwrap();
        let snap = sim.advance_one_step(&mut rng).unwrap();
        assert_eq!(snap.phase, Phase::Exploring);
        assert_eq!(snap.stats.carves, 0);
        let snap = sim.advance_one_step(&mut rng).unwrap();
        assert_eq!(snap.phase, Phase::Finished);
        assert_eq!(snap.stats.exploration_steps, 1);
        assert_eq!(snap.stats.solution_steps, Some(0));
    }

    #[test]
    fn exploration_is_paced_by_step_interval() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut config = SimulationConfig::new(6, 6);
        config.carve_per_tick = 1000;
        config.step_interval = 0.25;
        let mut sim = Simulation::new(config).unwrap();

        let snap = sim.tick(0.01, &mut rng).unwrap();
        assert_eq!(snap.phase, Phase::Exploring);

        sim.tick(0.1, &mut rng).unwrap();
        sim.tick(0.1, &mut rng).unwrap();
        assert_eq!(sim.stats().exploration_steps, 0);
        sim.tick(0.1, &mut rng).unwrap();
        assert_eq!(sim.stats().exploration_steps, 1);
        // A long frame catches up
        sim.tick(0.5, &mut rng).unwrap();
        assert!(sim.stats().exploration_steps >= 2 || sim.is_finished());
    }

    #[test]
    fn reset_requires_finished_but_abort_does_not() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sim = Simulation::new(SimulationConfig::new(5, 5)).unwrap();
        sim.advance_one_step(&mut rng).unwrap();
        assert_eq!(sim.reset(), Err(ErrorKind::NotFinished));

        sim.abort().unwrap();
        assert_eq!(sim.phase(), Phase::Generating);
        assert_eq!(sim.grid().passage_count(), 0);
        assert_eq!(sim.stats(), &RunStats::default());

        sim.run_to_completion(&mut rng).unwrap();
        assert!(sim.solution().unwrap().is_some());
        sim.reset().unwrap();
        assert_eq!(sim.phase(), Phase::Generating);
        assert!(sim.agent().is_none());
        assert!(sim.solution().unwrap().is_none());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut sim = Simulation::new(SimulationConfig::new(3, 2)).unwrap();
        sim.run_to_completion(&mut rng).unwrap();
        let json = serde_json::to_value(sim.snapshot()).unwrap();
        assert_eq!(json["phase"], "Finished");
        assert_eq!(json["cols"], 3);
        assert!(json["grid"].is_object());
        assert!(json["known"].is_object());
    }
}
