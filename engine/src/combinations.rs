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

//! `k`-combinations of piece indices, used by the novelty tables to walk
//! every subset of a given size. `num_pieces` is bounded by
//! `gatewidth_base::piece::MAX_PIECES`, so a small recursive generator is
//! appropriate; the example pack pulls in no combinatorics crate anywhere.

/// All `k`-element subsets of `0..n`, in ascending lexicographic order.
#[must_use]
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k == 0 {
        out.push(Vec::new());
        return out;
    }
    if k > n {
        return out;
    }
    let mut current = Vec::with_capacity(k);
    combine(0, n, k, &mut current, &mut out);
    out
}

fn combine(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    // Prune once there are not enough remaining elements to fill the rest of `current`.
    let remaining_needed = k - current.len();
    if n - start < remaining_needed {
        return;
    }
    for i in start..n {
        current.push(i);
        combine(i + 1, n, k, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_equals_one_lists_every_index() {
        assert_eq!(combinations(3, 1), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn k_equals_n_is_one_combination() {
        assert_eq!(combinations(3, 3), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn k_greater_than_n_is_empty() {
        assert_eq!(combinations(2, 3), Vec::<Vec<usize>>::new());
    }

    #[test]
    fn k_zero_yields_one_empty_combination() {
        assert_eq!(combinations(3, 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn count_matches_binomial_coefficient() {
        assert_eq!(combinations(5, 2).len(), 10);
        assert_eq!(combinations(6, 3).len(), 20);
    }

    #[test]
    fn combinations_are_ascending_within_each_entry() {
        for combo in combinations(5, 3) {
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
