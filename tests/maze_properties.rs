/*
maze_properties.rs

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

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

use mazebot::agent::Agent;
use mazebot::config::SimulationConfig;
use mazebot::maze::carver::{self, MazeCarver};
use mazebot::maze::direction::Position;
use mazebot::maze::grid::Grid;
use mazebot::maze::solver;
use mazebot::random::ScriptedSource;
use mazebot::simulation::{Phase, Simulation};

/// Number of cells reachable from the origin, each counted once.
fn reachable(grid: &Grid, origin: Position) -> usize {
    let mut seen: Vec<bool> = vec![false; grid.len()];
    let mut queue: VecDeque<Position> = VecDeque::from([origin]);
    seen[grid.index(origin).unwrap()] = true;
    let mut count: usize = 0;
    while let Some(pos) = queue.pop_front() {
        count += 1;
        for n in grid.open_neighbors(pos).unwrap() {
            let i = grid.index(n).unwrap();
            if !seen[i] {
                seen[i] = true;
                queue.push_back(n);
            }
        }
    }
    count
}

#[test]
fn generated_mazes_are_perfect() {
    for (seed, cols, rows) in [(1, 30, 15), (2, 1, 9), (3, 9, 1), (4, 2, 2), (5, 13, 7)] {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = carver::generate(cols, rows, Position::new(0, 0), &mut rng).unwrap();
        assert_eq!(grid.passage_count(), cols * rows - 1, "{cols}x{rows}");
        assert_eq!(reachable(&grid, Position::new(cols - 1, rows - 1)), cols * rows);
    }
}

#[test]
fn same_seed_gives_same_maze() {
    let a = carver::generate(12, 8, Position::new(3, 3), &mut StdRng::seed_from_u64(77)).unwrap();
    let b = carver::generate(12, 8, Position::new(3, 3), &mut StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(a.wall_bits(), b.wall_bits());
}

#[test]
fn carving_in_batches_matches_one_go() {
    let expected = carver::generate(10, 6, Position::new(0, 0), &mut StdRng::seed_from_u64(9))
        .unwrap()
        .wall_bits();

    for batch in [1, 3, 7, 100] {
        let mut config = SimulationConfig::new(10, 6);
        config.carve_per_tick = batch;
        let mut sim = Simulation::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        while sim.phase() == Phase::Generating {
            sim.tick(0.016, &mut rng).unwrap();
        }
        assert_eq!(sim.grid().wall_bits(), expected, "batch of {batch}");
    }
}

#[test]
fn scripted_three_by_three() {
    let mut rng = ScriptedSource::new(&[0, 1]);
    let grid = carver::generate(3, 3, Position::new(0, 0), &mut rng).unwrap();
    assert_eq!(grid.wall_bits(), vec![13, 3, 11, 11, 12, 2, 12, 5, 6]);

    let path = solver::find_path(&grid, Position::new(0, 0), Position::new(2, 2)).unwrap();
    assert_eq!(path.steps(), 4);
    assert_eq!(
        path.get(),
        &[
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(2, 2),
        ]
    );
}

#[test]
fn stepped_carver_reports_each_passage() {
    let mut rng = ScriptedSource::new(&[0, 1]);
    let mut grid = Grid::new(3, 3).unwrap();
    let mut carver = MazeCarver::start(&mut grid, Position::new(0, 0)).unwrap();
    let mut carves = Vec::new();
    while let Some(c) = carver.step(&mut grid, &mut rng).unwrap() {
        carves.push((c.from, c.to));
    }
    assert_eq!(carves.len(), 8);
    assert_eq!(carves[0], (Position::new(0, 0), Position::new(1, 0)));
    // Backtracked from (0, 1) to (2, 1) before the last passage
    assert_eq!(carves[7], (Position::new(2, 1), Position::new(2, 0)));
}

#[test]
fn solution_is_walkable_between_endpoints() {
    let mut rng = StdRng::seed_from_u64(21);
    let grid = carver::generate(20, 11, Position::new(0, 0), &mut rng).unwrap();
    let entry = Position::new(5, 10);
    let exit = Position::new(19, 0);
    let path = solver::find_path(&grid, entry, exit).unwrap();
    assert_eq!(path.get_first(), Some(entry));
    assert_eq!(path.get_last(), Some(exit));
    assert!(path.is_walkable(&grid));
    assert_eq!(path.len(), path.steps() + 1);
}

#[test]
fn agent_walks_through_the_solution() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = carver::generate(15, 9, Position::new(0, 0), &mut rng).unwrap();
        let start = Position::new(0, 0);
        let goal = Position::new(14, 8);
        let mut agent = Agent::new(&grid, start, goal).unwrap();

        let mut steps: usize = 0;
        while !agent.is_done() {
            agent.step(&grid, &mut rng).unwrap();
            steps += 1;
            assert!(steps <= 2 * grid.len());
        }
        assert!(agent.reached_goal());
        assert_eq!(agent.position(), goal);

        // In a perfect maze, the backtracking stack ends up being the solution
        let solution = solver::find_path(&grid, start, goal).unwrap();
        assert_eq!(agent.stack(), solution.get());
        for pos in solution.get() {
            assert_eq!(agent.visited().contains(*pos), Ok(true));
        }
    }
}

#[test]
fn full_run_fills_the_statistics() {
    let mut sim = Simulation::new(SimulationConfig::new(8, 6)).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let stats = sim.run_to_completion(&mut rng).unwrap().clone();
    assert_eq!(stats.carves, 47);
    assert_eq!(stats.reached_goal, Some(true));
    assert_eq!(stats.ticks, 0);
    let solution = sim.solution().unwrap().unwrap();
    assert_eq!(stats.solution_steps, Some(solution.steps()));
    assert!(stats.moves >= solution.steps());
    assert!(stats.cells_visited <= 48);
    assert!(stats.detour_ratio().unwrap() >= 1.0);
}

#[test]
fn single_cell_simulation() {
    let mut sim = Simulation::new(SimulationConfig::new(1, 1)).unwrap();
    let mut rng = ScriptedSource::new(&[]);
    let stats = sim.run_to_completion(&mut rng).unwrap();
    assert_eq!(stats.carves, 0);
    assert_eq!(stats.solution_steps, Some(0));
    assert_eq!(stats.reached_goal, Some(true));
    assert!(sim.is_finished());
}
