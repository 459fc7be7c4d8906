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

//! The canonical state encoder: packs a state's piece-position tuple into a
//! deterministic bit string, used as the key for duplicate and novelty
//! detection. The encoding is a pure function of `(piece_x, piece_y)`; it
//! never looks at walls, goals, or the solution path.

use crate::{
    bits::{bit_get, bit_write, bits_needed, bytes_for_bits},
    grid::GridState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The bit widths used to pack one atom `(piece_id, y, x)`.
pub struct PackLayout {
    pub p_bits: u32,
    pub h_bits: u32,
    pub w_bits: u32,
}

impl PackLayout {
    #[must_use]
    /// Derive the layout for a puzzle with `num_pieces` pieces on a
    /// `height x width` grid.
    pub fn new(num_pieces: usize, height: usize, width: usize) -> PackLayout {
        PackLayout {
            p_bits: bits_needed(num_pieces),
            h_bits: bits_needed(height),
            w_bits: bits_needed(width),
        }
    }

    #[must_use]
    /// Total bits occupied by one atom: `(piece_id, y, x)`.
    pub const fn atom_bits(&self) -> usize {
        (self.p_bits + self.h_bits + self.w_bits) as usize
    }

    #[must_use]
    /// Total bits occupied by `num_pieces` atoms.
    pub const fn total_bits(&self, num_pieces: usize) -> usize {
        self.atom_bits() * num_pieces
    }
}

#[must_use]
/// The layout this state's puzzle dimensions imply.
pub fn layout_for(state: &GridState) -> PackLayout {
    PackLayout::new(state.num_pieces(), state.height(), state.width())
}

#[must_use]
/// Pack `state`'s piece positions into a deterministic byte string: for each
/// piece in id order, LSB-first little-endian fields `(id, y, x)`.
pub fn pack(state: &GridState) -> Vec<u8> {
    let layout = layout_for(state);
    let total_bits = layout.total_bits(state.num_pieces());
    let mut buf = vec![0u8; bytes_for_bits(total_bits)];

    let mut bit_idx = 0;
    for i in 0..state.num_pieces() {
        let (x, y) = state.piece_xy(crate::piece::PieceId(i as u8));
        write_field(&mut buf, &mut bit_idx, i as u64, layout.p_bits);
        write_field(&mut buf, &mut bit_idx, y as u64, layout.h_bits);
        write_field(&mut buf, &mut bit_idx, x as u64, layout.w_bits);
    }
    buf
}

fn write_field(buf: &mut [u8], bit_idx: &mut usize, value: u64, width: u32) {
    for j in 0..width {
        bit_write(buf, *bit_idx, (value >> j) & 1 == 1);
        *bit_idx += 1;
    }
}

fn read_field(buf: &[u8], bit_idx: &mut usize, width: u32) -> u64 {
    let mut value = 0u64;
    for j in 0..width {
        if bit_get(buf, *bit_idx) {
            value |= 1 << j;
        }
        *bit_idx += 1;
    }
    value
}

#[must_use]
/// Invert `pack`: recover the `(piece_id, y, x)` atoms a packed key encodes,
/// given the layout it was packed under and the number of pieces.
pub fn unpack(buf: &[u8], layout: PackLayout, num_pieces: usize) -> Vec<(usize, usize, usize)> {
    let mut bit_idx = 0;
    (0..num_pieces)
        .map(|_| {
            let id = read_field(buf, &mut bit_idx, layout.p_bits) as usize;
            let y = read_field(buf, &mut bit_idx, layout.h_bits) as usize;
            let x = read_field(buf, &mut bit_idx, layout.w_bits) as usize;
            (id, y, x)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{background::Background, piece::PieceId};
    use std::rc::Rc;

    fn state_with(pieces: Vec<(usize, usize)>, height: usize, width: usize) -> GridState {
        let bg = Rc::new(Background::new(vec![vec![' '; width]; height]));
        let map = vec![vec![' '; width]; height];
        GridState::new(bg, map, pieces, None)
    }

    #[test]
    fn pack_unpack_roundtrip() {
        let s = state_with(vec![(3, 1), (0, 2), (4, 0)], 3, 5);
        let layout = layout_for(&s);
        let packed = pack(&s);
        let atoms = unpack(&packed, layout, s.num_pieces());
        for (i, &(x, y)) in [(3, 1), (0, 2), (4, 0)].iter().enumerate() {
            assert_eq!(atoms[i], (i, y, x));
        }
    }

    #[test]
    fn pack_is_deterministic() {
        let s = state_with(vec![(1, 1)], 2, 2);
        assert_eq!(pack(&s), pack(&s));
    }

    #[test]
    fn pack_ignores_solution_path() {
        let mut s = state_with(vec![(1, 1)], 2, 2);
        let before = pack(&s);
        s.push_move(PieceId(0), crate::direction::Direction::Up);
        assert_eq!(pack(&s), before);
    }

    #[test]
    fn equal_positions_produce_equal_keys() {
        let a = state_with(vec![(2, 2), (0, 0)], 4, 4);
        let b = state_with(vec![(2, 2), (0, 0)], 4, 4);
        assert_eq!(pack(&a), pack(&b));
    }

    #[test]
    fn different_positions_produce_different_keys() {
        let a = state_with(vec![(2, 2)], 4, 4);
        let b = state_with(vec![(2, 3)], 4, 4);
        assert_ne!(pack(&a), pack(&b));
    }
}
