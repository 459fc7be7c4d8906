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

//! The move applier: produces a successor state from `(state, piece,
//! direction)` and reports whether the move was accepted.

use gatewidth_base::{direction::Direction, grid::GridState, loader::move_one_step, piece::PieceId};

#[must_use]
/// Duplicate `state`, append `(piece, direction)` to its solution path, then
/// attempt the move. The solution string is appended before the move is
/// known to succeed, so a rejected child's solution is meaningless and
/// should be discarded along with the child.
pub fn apply(state: &GridState, piece: PieceId, dir: Direction) -> (GridState, bool) {
    let mut child = state.duplicate();
    child.push_move(piece, dir);
    let moved = move_one_step(&mut child, piece, dir);
    (child, moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewidth_base::background::Background;
    use std::rc::Rc;

    #[test]
    fn accepted_move_grows_solution_and_moves_piece() {
        let bg = Rc::new(Background::new(vec![vec![' ', ' ', 'G']]));
        let map = vec![vec!['0', ' ', 'G']];
        let state = GridState::new(bg, map, vec![(0, 0)], None);

        let (child, moved) = apply(&state, PieceId(0), Direction::Right);
        assert!(moved);
        assert_eq!(child.solution(), "0r");
        assert_eq!(child.piece_xy(PieceId(0)), (1, 0));
        // Parent is untouched.
        assert_eq!(state.piece_xy(PieceId(0)), (0, 0));
        assert_eq!(state.solution(), "");
    }

    #[test]
    fn rejected_move_leaves_piece_in_place() {
        let bg = Rc::new(Background::new(vec![vec![' ', '#']]));
        let map = vec![vec!['0', '#']];
        let state = GridState::new(bg, map, vec![(0, 0)], None);

        let (child, moved) = apply(&state, PieceId(0), Direction::Right);
        assert!(!moved);
        assert_eq!(child.piece_xy(PieceId(0)), (0, 0));
    }
}
