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

//! Errors surfaced while loading and validating a puzzle map.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    io,
};

#[derive(Debug)]
/// The ways a map file can fail to produce a playable puzzle.
pub enum GateError {
    /// The map file could not be read from disk.
    Io(io::Error),
    /// The map's rows were not all the same width.
    RaggedRows { row: usize, expected: usize, found: usize },
    /// The map contained more movable pieces than `MAX_PIECES` allows.
    TooManyPieces(usize),
    /// A piece digit appeared more than once in the map.
    DuplicatePiece(char),
    /// The map named a piece that never appeared on the grid.
    MissingPiece(char),
    /// The map contained no rows at all.
    EmptyMap,
    /// The map's rows (or the rows themselves) left the grid with a zero
    /// dimension, e.g. a file of blank lines.
    DegenerateGrid { height: usize, width: usize },
}

impl Display for GateError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            GateError::Io(e) => write!(f, "failed to read map file: {e}"),
            GateError::RaggedRows { row, expected, found } => write!(
                f,
                "row {row} has width {found}, expected {expected} to match the first row"
            ),
            GateError::TooManyPieces(n) => {
                write!(f, "map has {n} pieces, exceeding the maximum of 10")
            }
            GateError::DuplicatePiece(c) => write!(f, "piece '{c}' appears more than once"),
            GateError::MissingPiece(c) => write!(f, "piece '{c}' never appears on the grid"),
            GateError::EmptyMap => write!(f, "map file contains no rows"),
            GateError::DegenerateGrid { height, width } => write!(
                f,
                "map has a zero dimension (height={height}, width={width}), nothing to solve"
            ),
        }
    }
}

impl Error for GateError {}

impl From<io::Error> for GateError {
    fn from(e: io::Error) -> Self {
        GateError::Io(e)
    }
}
