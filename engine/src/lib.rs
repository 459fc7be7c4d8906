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

//! The search engine built atop `gatewidth_base`'s grid state: successor
//! generation, duplicate/novelty pruning, the open list, and the three
//! search algorithms themselves.

pub mod apply;
pub mod combinations;
pub mod config;
pub mod error;
pub mod queue;
pub mod radix;
pub mod search;

pub use config::{Algorithm, EngineConfig};
pub use error::SearchError;
pub use search::{run, SearchStats};
