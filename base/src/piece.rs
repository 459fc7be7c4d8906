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

//! Piece identities. A piece is named by a single decimal digit, `'0'..'9'`,
//! which doubles as its array index.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// The largest number of pieces a single puzzle may contain. Bounded by the
/// single-decimal-digit naming convention of the cell alphabet.
pub const MAX_PIECES: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The identity of a movable piece, `0..MAX_PIECES`.
pub struct PieceId(pub u8);

impl PieceId {
    #[must_use]
    /// Construct a `PieceId` from its decimal-digit glyph, e.g. `'3'` names
    /// piece 3. Returns `None` for any non-digit character.
    pub const fn from_char(c: char) -> Option<PieceId> {
        if c.is_ascii_digit() {
            Some(PieceId(c as u8 - b'0'))
        } else {
            None
        }
    }

    #[must_use]
    /// The decimal-digit glyph naming this piece.
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    #[must_use]
    /// This piece's index into the puzzle's per-piece coordinate arrays.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for PieceId {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_roundtrip() {
        for d in '0'..='9' {
            let p = PieceId::from_char(d).unwrap();
            assert_eq!(p.to_char(), d);
        }
    }

    #[test]
    fn non_digit_rejected() {
        assert_eq!(PieceId::from_char('a'), None);
        assert_eq!(PieceId::from_char('G'), None);
    }

    #[test]
    fn index_matches_digit_value() {
        assert_eq!(PieceId::from_char('7').unwrap().index(), 7);
    }
}
