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

//! Bitwise trie sets over packed state keys.
//!
//! [`RadixSet`] is the exact-key mode Algorithm 2 uses for duplicate
//! detection. [`NoveltyTable`] builds on it for the `k`-subset mode Algorithm
//! 3 uses for novelty detection: one `RadixSet` per subset size, each storing
//! the concatenated atoms of every subset of piece positions seen so far.
//!
//! A pointer-per-bit trie is the right structure for the subset tables
//! specifically (many subkeys share long common prefixes), so both modes
//! share this one implementation rather than falling back to a hash set.

use std::mem::size_of;

use gatewidth_base::bits::{bit_get, bit_write, bytes_for_bits};

use crate::combinations::combinations;

#[derive(Debug, Default)]
struct Node {
    children: [Option<Box<Node>>; 2],
    present: bool,
}

#[derive(Debug, Default)]
/// A bitwise trie storing fixed-length bit strings, used to test whether an
/// exact key has been seen before.
pub struct RadixSet {
    root: Option<Box<Node>>,
    node_count: usize,
}

impl RadixSet {
    #[must_use]
    /// Construct an empty set.
    pub fn new() -> RadixSet {
        RadixSet {
            root: None,
            node_count: 0,
        }
    }

    /// Add the `nbits`-bit key to the set. Inserting the same key twice is a
    /// no-op the second time: [`RadixSet::contains`] still reports it
    /// present, and `node_count` does not grow further.
    pub fn insert(&mut self, key: &[u8], nbits: usize) {
        if self.root.is_none() {
            self.root = Some(Box::new(Node::default()));
            self.node_count += 1;
        }
        let mut node = self.root.as_mut().unwrap();
        for d in 0..nbits {
            let bit = usize::from(bit_get(key, d));
            if node.children[bit].is_none() {
                node.children[bit] = Some(Box::new(Node::default()));
                self.node_count += 1;
            }
            node = node.children[bit].as_mut().unwrap();
        }
        node.present = true;
    }

    #[must_use]
    /// Whether the `nbits`-bit key is present in the set.
    pub fn contains(&self, key: &[u8], nbits: usize) -> bool {
        let Some(mut node) = self.root.as_deref() else {
            return false;
        };
        for d in 0..nbits {
            let bit = usize::from(bit_get(key, d));
            match &node.children[bit] {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.present
    }

    #[must_use]
    /// Live bytes used by this trie's internal nodes, for reporting only.
    pub fn memory_bytes(&self) -> usize {
        self.node_count * size_of::<Node>()
    }
}

/// The `k`-subset mode of the radix set: one tree per subset size `1..=w`,
/// each keyed on the concatenation of the atoms named by a combination of
/// piece indices.
pub struct NoveltyTable {
    atom_bits: usize,
    num_pieces: usize,
    /// `trees[s - 1]` is the tree for subset size `s`.
    trees: Vec<RadixSet>,
}

impl NoveltyTable {
    #[must_use]
    /// Build tables for subset sizes `1..=max_width`, given the per-atom bit
    /// width and the puzzle's piece count.
    pub fn new(max_width: usize, atom_bits: usize, num_pieces: usize) -> NoveltyTable {
        NoveltyTable {
            atom_bits,
            num_pieces,
            trees: (0..max_width).map(|_| RadixSet::new()).collect(),
        }
    }

    fn extract_subkey(&self, key: &[u8], combo: &[usize]) -> Vec<u8> {
        let mut buf = vec![0u8; bytes_for_bits(combo.len() * self.atom_bits)];
        let mut bit_idx = 0;
        for &piece in combo {
            let base = piece * self.atom_bits;
            for j in 0..self.atom_bits {
                bit_write(&mut buf, bit_idx, bit_get(key, base + j));
                bit_idx += 1;
            }
        }
        buf
    }

    /// Insert the concatenated atoms of every `s`-combination of piece
    /// indices found in `key`, unconditionally. Called regardless of the
    /// outcome of [`NoveltyTable::contains_any_missing_combination`]: insertion
    /// must happen whether or not the candidate was novel.
    ///
    /// # Panics
    ///
    /// Panics if `s` is zero or exceeds the width this table was built for.
    pub fn insert_all_combinations(&mut self, key: &[u8], s: usize) {
        assert!(s >= 1 && s <= self.trees.len(), "subset size out of range");
        let subkey_bits = s * self.atom_bits;
        for combo in combinations(self.num_pieces, s) {
            let subkey = self.extract_subkey(key, &combo);
            self.trees[s - 1].insert(&subkey, subkey_bits);
        }
    }

    #[must_use]
    /// Whether at least one `s`-combination of atoms in `key` is absent from
    /// this table.
    ///
    /// # Panics
    ///
    /// Panics if `s` is zero or exceeds the width this table was built for.
    pub fn contains_any_missing_combination(&self, key: &[u8], s: usize) -> bool {
        assert!(s >= 1 && s <= self.trees.len(), "subset size out of range");
        let subkey_bits = s * self.atom_bits;
        combinations(self.num_pieces, s)
            .into_iter()
            .any(|combo| {
                let subkey = self.extract_subkey(key, &combo);
                !self.trees[s - 1].contains(&subkey, subkey_bits)
            })
    }

    #[must_use]
    /// Live bytes used across every subset-size tree, for reporting only.
    pub fn memory_bytes(&self) -> usize {
        self.trees.iter().map(RadixSet::memory_bytes).sum()
    }
}
