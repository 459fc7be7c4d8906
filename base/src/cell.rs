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

//! The grid cell alphabet.
//!
//! A cell is a plain `char`; this module only supplies the predicates and
//! lookup tables that give certain characters special meaning. Ten glyphs,
//! `'G'` and `'I'..='Q'`, name unsatisfied goals ('G' is the generic goal,
//! the other nine are each tied to a specific piece by position in the
//! alphabet). A state is terminal once none of them remain on the board.

use once_cell::sync::Lazy;

use crate::piece::PieceId;

/// The generic, piece-agnostic unsatisfied goal glyph.
pub const GENERIC_GOAL: char = 'G';

/// The actor glyph tracked for informational purposes; it has no bearing on
/// move legality or the terminal predicate.
pub const PLAYER: char = '@';

/// An impassable cell.
pub const WALL: char = '#';

/// A walkable, unoccupied cell.
pub const EMPTY: char = ' ';

/// The nine piece-tied unsatisfied goal glyphs, `'I'..='Q'`, indexed by piece
/// id (`GOAL_FOR_PIECE[i]` is the glyph naming piece `i`'s goal).
static GOAL_FOR_PIECE: Lazy<[char; 9]> =
    Lazy::new(|| ['I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q']);

/// The satisfied-goal overlay for each unsatisfied-goal glyph: the lowercase
/// of the unsatisfied letter. This is the engine's own choice (see
/// `DESIGN.md`) for a convention otherwise left to the move-application
/// collaborator; nothing in the search engine inspects it.
static SATISFIED_OVERLAY: Lazy<[(char, char); 10]> = Lazy::new(|| {
    let mut table = [(GENERIC_GOAL, GENERIC_GOAL.to_ascii_lowercase()); 10];
    table[0] = (GENERIC_GOAL, GENERIC_GOAL.to_ascii_lowercase());
    for (i, &g) in GOAL_FOR_PIECE.iter().enumerate() {
        table[i + 1] = (g, g.to_ascii_lowercase());
    }
    table
});

#[must_use]
/// Whether `c` names a piece that has not yet satisfied its goal: the
/// generic `'G'` or one of the nine piece-tied markers `'I'..='Q'`.
pub fn is_unsatisfied_goal(c: char) -> bool {
    c == GENERIC_GOAL || ('I'..='Q').contains(&c)
}

#[must_use]
/// The glyph naming the unsatisfied goal tied to `piece`, e.g. piece 0 maps
/// to `'I'`.
///
/// # Panics
///
/// Panics if `piece`'s index is out of the nine-goal range; callers should
/// only use this for pieces which have a dedicated goal marker.
pub fn goal_glyph_for_piece(piece: PieceId) -> char {
    GOAL_FOR_PIECE[piece.index()]
}

#[must_use]
/// Whether background glyph `c` is a goal that `piece` may satisfy: the
/// generic `'G'`, which any piece may satisfy, or `piece`'s own tied marker.
pub fn is_goal_for(piece: PieceId, c: char) -> bool {
    c == GENERIC_GOAL || (piece.index() < GOAL_FOR_PIECE.len() && c == goal_glyph_for_piece(piece))
}

#[must_use]
/// The satisfied-goal overlay glyph for an unsatisfied goal glyph, or `None`
/// if `c` is not an unsatisfied goal glyph.
pub fn satisfied_overlay(c: char) -> Option<char> {
    SATISFIED_OVERLAY
        .iter()
        .find(|&&(unsat, _)| unsat == c)
        .map(|&(_, sat)| sat)
}

#[must_use]
/// Whether `c` is a cell a piece or the player may step into: anything
/// except a wall or another piece's digit.
pub fn is_walkable(c: char) -> bool {
    c != WALL && !c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_and_tied_goals_are_unsatisfied() {
        assert!(is_unsatisfied_goal('G'));
        assert!(is_unsatisfied_goal('I'));
        assert!(is_unsatisfied_goal('Q'));
        assert!(!is_unsatisfied_goal('R'));
        assert!(!is_unsatisfied_goal(' '));
        assert!(!is_unsatisfied_goal('0'));
    }

    #[test]
    fn goal_glyph_follows_piece_index() {
        assert_eq!(goal_glyph_for_piece(PieceId(0)), 'I');
        assert_eq!(goal_glyph_for_piece(PieceId(8)), 'Q');
    }

    #[test]
    fn is_goal_for_generic_and_tied() {
        assert!(is_goal_for(PieceId(0), 'G'));
        assert!(is_goal_for(PieceId(0), 'I'));
        assert!(!is_goal_for(PieceId(1), 'I'));
    }

    #[test]
    fn satisfied_overlay_is_lowercase() {
        assert_eq!(satisfied_overlay('G'), Some('g'));
        assert_eq!(satisfied_overlay('I'), Some('i'));
        assert_eq!(satisfied_overlay('z'), None);
    }

    #[test]
    fn walkability() {
        assert!(is_walkable(' '));
        assert!(is_walkable('G'));
        assert!(!is_walkable('#'));
        assert!(!is_walkable('3'));
    }
}
