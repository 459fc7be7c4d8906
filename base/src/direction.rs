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

//! The four cardinal directions a piece may step in, and their textual
//! encoding in solution strings.

use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// One of the four cardinal directions a piece may be moved in. Up decreases
/// `y`, down increases `y`, left decreases `x`, right increases `x`.
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the fixed enumeration order the search engine
    /// iterates successors in.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[must_use]
    /// Parse a direction from its one-character solution-string encoding.
    /// Returns `None` for any character outside `{u, d, l, r}`.
    pub const fn from_char(c: char) -> Option<Direction> {
        match c {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    #[must_use]
    /// The one-character solution-string encoding of this direction.
    pub const fn to_char(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    #[must_use]
    /// The `(dx, dy)` unit step this direction corresponds to.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    /// The direction that, applied after this one, restores the original
    /// position (modulo blocking).
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_roundtrip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_char(d.to_char()), Some(d));
        }
    }

    #[test]
    fn unknown_char_is_none() {
        assert_eq!(Direction::from_char('x'), None);
    }

    #[test]
    fn inverse_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.inverse().inverse(), d);
        }
    }

    #[test]
    fn inverse_cancels_delta() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            let (ix, iy) = d.inverse().delta();
            assert_eq!(dx + ix, 0);
            assert_eq!(dy + iy, 0);
        }
    }
}
