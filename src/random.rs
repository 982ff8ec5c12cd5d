/*
random.rs

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

//! Source of random choices.
//!
//! The generator and the exploration agent never own a random number generator.
//! The caller passes a [`RandomSource`] to each call instead, so that a seeded generator (or a
//! [`ScriptedSource`]) gives fully reproducible mazes and explorations.
//!
//! Every [`rand::Rng`] is a [`RandomSource`]:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use mazebot::random::RandomSource;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! assert!(rng.pick(4) < 4);
//! ```

use rand::Rng;

/// Uniform random choice among a number of candidates.
pub trait RandomSource {
    /// Return an index in `0..len`.
    ///
    /// `len` is never zero: callers only ask for a choice when there is something to choose.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Random source replaying a fixed list of choices.
///
/// The list is read in a loop. Each value is reduced modulo the number of candidates, so that a
/// script such as `[0, 1]` always selects a valid candidate.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    /// Choices to replay.
    script: Vec<usize>,

    /// Index of the next choice in [`ScriptedSource::script`].
    next: usize,
}

impl ScriptedSource {
    /// Create a [`ScriptedSource`] object.
    ///
    /// An empty script always selects the first candidate.
    pub fn new(script: &[usize]) -> Self {
        Self {
            script: script.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let choice: usize = self.script[self.next % self.script.len()];
        self.next += 1;
        choice % len
    }
}
