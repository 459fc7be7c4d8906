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

//! Turning a map file into a playable `GridState`, and advancing one piece
//! one step once the puzzle is running.
//!
//! `load_map` reads raw rows from disk, `validate` checks the piece
//! vocabulary, `find_player` and `find_pieces` locate the actor and each
//! piece, and `move_one_step` is the single-cell motion primitive the move
//! applier builds on.

use std::{fs, path::Path, rc::Rc};

use crate::{
    background::Background,
    cell,
    direction::Direction,
    error::GateError,
    grid::GridState,
    piece::{PieceId, MAX_PIECES},
};

#[derive(Debug, Clone)]
/// The raw, unvalidated rows read from a map file.
pub struct RawMap {
    rows: Vec<Vec<char>>,
}

impl RawMap {
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn at(&self, x: usize, y: usize) -> char {
        self.rows[y][x]
    }
}

/// Read a map file into its raw rows. Every row must be non-empty and share
/// the first row's width; a ragged or empty file is reported as a
/// [`GateError`] rather than silently padded, since a mismatched row width
/// almost always indicates a corrupted or hand-edited map.
pub fn load_map(path: impl AsRef<Path>) -> Result<RawMap, GateError> {
    let contents = fs::read_to_string(path)?;
    let rows: Vec<Vec<char>> = contents.lines().map(|line| line.chars().collect()).collect();

    if rows.is_empty() {
        return Err(GateError::EmptyMap);
    }
    let width = rows[0].len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(GateError::RaggedRows {
                row: i,
                expected: width,
                found: row.len(),
            });
        }
    }

    Ok(RawMap { rows })
}

/// Check that the raw map's piece vocabulary is well-formed: non-zero height
/// and width, at most [`MAX_PIECES`] distinct piece digits, and no digit
/// repeated.
pub fn validate(raw: &RawMap) -> Result<(), GateError> {
    if raw.height() == 0 || raw.width() == 0 {
        return Err(GateError::DegenerateGrid {
            height: raw.height(),
            width: raw.width(),
        });
    }
    let mut seen = [false; MAX_PIECES];
    for y in 0..raw.height() {
        for x in 0..raw.width() {
            let c = raw.at(x, y);
            if let Some(p) = PieceId::from_char(c) {
                if seen[p.index()] {
                    return Err(GateError::DuplicatePiece(c));
                }
                seen[p.index()] = true;
            }
        }
    }
    let num_pieces = seen.iter().filter(|&&s| s).count();
    if num_pieces > MAX_PIECES {
        return Err(GateError::TooManyPieces(num_pieces));
    }
    for (i, &present) in seen.iter().enumerate().take(num_pieces) {
        if !present {
            return Err(GateError::MissingPiece((b'0' + i as u8) as char));
        }
    }
    Ok(())
}

#[must_use]
/// Locate the actor glyph `'@'`, if the map named one.
pub fn find_player(raw: &RawMap) -> Option<(usize, usize)> {
    for y in 0..raw.height() {
        for x in 0..raw.width() {
            if raw.at(x, y) == cell::PLAYER {
                return Some((x, y));
            }
        }
    }
    None
}

/// Locate every piece, indexed by its digit. Requires `validate` to have
/// already passed; a gap in the digit sequence (e.g. pieces `0` and `2` with
/// no `1`) is reported as [`GateError::MissingPiece`].
pub fn find_pieces(raw: &RawMap) -> Result<Vec<(usize, usize)>, GateError> {
    let mut positions = vec![None; MAX_PIECES];
    let mut max_id = None;
    for y in 0..raw.height() {
        for x in 0..raw.width() {
            if let Some(p) = PieceId::from_char(raw.at(x, y)) {
                positions[p.index()] = Some((x, y));
                max_id = Some(max_id.map_or(p.index(), |m: usize| m.max(p.index())));
            }
        }
    }
    let Some(max_id) = max_id else {
        return Ok(Vec::new());
    };
    positions[..=max_id]
        .iter()
        .enumerate()
        .map(|(i, pos)| pos.ok_or(GateError::MissingPiece((b'0' + i as u8) as char)))
        .collect()
}

/// Assemble a fully-initialised [`GridState`] from a validated raw map: the
/// background is the raw grid with every piece digit and the actor glyph
/// blanked to an empty cell (the terrain beneath an occupant is assumed
/// walkable), and the overlay is the raw grid unchanged.
#[must_use]
pub fn build_initial_state(
    raw: &RawMap,
    piece_pos: Vec<(usize, usize)>,
    player_pos: Option<(usize, usize)>,
) -> GridState {
    let mut background_rows = raw.rows.clone();
    for &(x, y) in &piece_pos {
        background_rows[y][x] = cell::EMPTY;
    }
    if let Some((x, y)) = player_pos {
        background_rows[y][x] = cell::EMPTY;
    }
    let background = Rc::new(Background::new(background_rows));
    GridState::new(background, raw.rows.clone(), piece_pos, player_pos)
}

/// Run the full loading pipeline: read, validate, locate, assemble.
pub fn load(path: impl AsRef<Path>) -> Result<GridState, GateError> {
    let raw = load_map(path)?;
    validate(&raw)?;
    let player = find_player(&raw);
    let pieces = find_pieces(&raw)?;
    Ok(build_initial_state(&raw, pieces, player))
}

#[must_use]
/// Advance `piece` one cell in `dir`, mutating `state`'s overlay, piece
/// coordinates, and (if the map named one) the actor's position. Returns
/// whether the piece's coordinates actually changed: a wall, the grid
/// boundary, or another piece occupying the destination all reject the move
/// and leave `state` as it was.
///
/// The actor is modelled as following one step behind the piece it helped
/// move, occupying the cell the piece just vacated; this has no bearing on
/// move legality or the terminal predicate (see `DESIGN.md`).
pub fn move_one_step(state: &mut GridState, piece: PieceId, dir: Direction) -> bool {
    let (x, y) = state.piece_xy(piece);
    let (dx, dy) = dir.delta();
    let nx = x as i64 + i64::from(dx);
    let ny = y as i64 + i64::from(dy);
    if nx < 0 || ny < 0 || nx as usize >= state.width() || ny as usize >= state.height() {
        return false;
    }
    let (nx, ny) = (nx as usize, ny as usize);

    // The overlay glyph at the destination already reflects both a wall
    // (never overwritten, since no piece ever occupies it) and any other
    // piece currently sitting there (shown as its digit), so one walkability
    // check on the overlay covers both rejection cases at once.
    if !cell::is_walkable(state.at(nx, ny)) {
        return false;
    }

    state.set(x, y, state.background().at(x, y));

    let bg_glyph = state.background().at(nx, ny);
    let new_glyph = if cell::is_goal_for(piece, bg_glyph) {
        cell::satisfied_overlay(bg_glyph).unwrap_or_else(|| piece.to_char())
    } else {
        piece.to_char()
    };
    state.set(nx, ny, new_glyph);
    state.set_piece_xy(piece, nx, ny);

    if state.player_xy().is_some() {
        state.set_player_xy(x, y);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_from(rows: &[&str]) -> RawMap {
        RawMap {
            rows: rows.iter().map(|r| r.chars().collect()).collect(),
        }
    }

    #[test]
    fn validate_accepts_contiguous_pieces() {
        let raw = raw_from(&["0 1", "# G"]);
        assert!(validate(&raw).is_ok());
    }

    #[test]
    fn validate_rejects_blank_lines_only_map() {
        // Every row is empty, so `RaggedRows` never triggers (all rows share
        // width 0) and `load_map`'s own `rows.is_empty()` check doesn't
        // either, since there are rows, just zero-width ones.
        let raw = raw_from(&["", "", ""]);
        assert!(matches!(
            validate(&raw),
            Err(GateError::DegenerateGrid { height: 3, width: 0 })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_piece() {
        let raw = raw_from(&["00"]);
        assert!(matches!(validate(&raw), Err(GateError::DuplicatePiece('0'))));
    }

    #[test]
    fn validate_rejects_gap_in_sequence() {
        let raw = raw_from(&["0 2"]);
        assert!(matches!(validate(&raw), Err(GateError::MissingPiece('1'))));
    }

    #[test]
    fn find_pieces_orders_by_digit() {
        let raw = raw_from(&["1 0"]);
        let pieces = find_pieces(&raw).unwrap();
        assert_eq!(pieces, vec![(2, 0), (0, 0)]);
    }

    #[test]
    fn find_player_locates_actor() {
        let raw = raw_from(&[" @ "]);
        assert_eq!(find_player(&raw), Some((1, 0)));
        let raw_none = raw_from(&["   "]);
        assert_eq!(find_player(&raw_none), None);
    }

    #[test]
    fn move_rejected_by_wall() {
        let raw = raw_from(&["0#"]);
        let pieces = find_pieces(&raw).unwrap();
        let mut state = build_initial_state(&raw, pieces, None);
        assert!(!move_one_step(&mut state, PieceId(0), Direction::Right));
        assert_eq!(state.piece_xy(PieceId(0)), (0, 0));
    }

    #[test]
    fn move_rejected_by_boundary() {
        let raw = raw_from(&["0"]);
        let pieces = find_pieces(&raw).unwrap();
        let mut state = build_initial_state(&raw, pieces, None);
        assert!(!move_one_step(&mut state, PieceId(0), Direction::Up));
    }

    #[test]
    fn move_accepted_into_empty_cell() {
        let raw = raw_from(&["0  "]);
        let pieces = find_pieces(&raw).unwrap();
        let mut state = build_initial_state(&raw, pieces, None);
        assert!(move_one_step(&mut state, PieceId(0), Direction::Right));
        assert_eq!(state.piece_xy(PieceId(0)), (1, 0));
        assert_eq!(state.at(0, 0), ' ');
        assert_eq!(state.at(1, 0), '0');
    }

    #[test]
    fn move_onto_goal_satisfies_it() {
        let raw = raw_from(&["0G"]);
        let pieces = find_pieces(&raw).unwrap();
        let mut state = build_initial_state(&raw, pieces, None);
        assert!(move_one_step(&mut state, PieceId(0), Direction::Right));
        assert_eq!(state.at(1, 0), 'g');
        assert!(state.is_winning());
    }

    #[test]
    fn move_rejected_onto_other_piece() {
        let raw = raw_from(&["01"]);
        let pieces = find_pieces(&raw).unwrap();
        let mut state = build_initial_state(&raw, pieces, None);
        assert!(!move_one_step(&mut state, PieceId(0), Direction::Right));
    }
}
