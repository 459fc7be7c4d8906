/*
  Gatewidth, a grid-puzzle planning engine.
  Copyright (C) 2026 The Gatewidth Authors (see AUTHORS.md file)

  Gatewidth is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Gatewidth is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Configuration for a single search run.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which of the three search strategies to run.
pub enum Algorithm {
    /// Algorithm 1: uninformed breadth-first search.
    Bfs,
    /// Algorithm 2: breadth-first search with exact duplicate pruning.
    BfsDedup,
    /// Algorithm 3: Iterative Width, IW(1..w).
    IteratedWidth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Configuration options for a search run.
pub struct EngineConfig {
    /// Which search strategy to run.
    pub algorithm: Algorithm,
    /// The largest width Algorithm 3 may attempt before giving up. `None`
    /// means "try every width up to the puzzle's piece count", the default
    /// behavior.
    pub max_width: Option<usize>,
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> EngineConfig {
        EngineConfig {
            algorithm: Algorithm::IteratedWidth,
            max_width: None,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig::new()
    }
}
