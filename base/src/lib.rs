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

//! Shared data types and useful basic definitions found across the entire
//! Gatewidth planning engine: the grid state, its cell alphabet, the state
//! encoder, and the map-loading pipeline.

// Many module elements are re-exported to make names more ergonomic to access.

pub mod bits;

pub mod cell;

pub mod background;
pub use background::Background;

pub mod direction;
pub use direction::Direction;

pub mod error;
pub use error::GateError;

pub mod grid;
pub use grid::GridState;

pub mod loader;

pub mod pack;

pub mod piece;
pub use piece::PieceId;
