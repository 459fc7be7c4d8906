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

//! The three search algorithms: plain BFS, BFS with exact duplicate pruning,
//! and Iterative Width. All three explore successors in the same fixed
//! order (piece `0..N`, then `{u, d, l, r}`), so the first solution found at
//! a given BFS depth is deterministic.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    time::Instant,
};

use gatewidth_base::{
    direction::Direction,
    grid::GridState,
    pack,
    piece::{PieceId, MAX_PIECES},
};

use crate::{
    apply::apply,
    config::{Algorithm, EngineConfig},
    error::SearchError,
    queue::Queue,
    radix::{NoveltyTable, RadixSet},
};

/// Checked at the top of every algorithm entry point. The loader already
/// enforces this bound (`GateError::TooManyPieces`), but the engine does not
/// trust its caller blindly: a state reaching the engine with more pieces
/// than the packing scheme supports is a programming error, not a puzzle
/// the search can simply fail to solve.
fn check_num_pieces(num_pieces: usize) -> Result<(), SearchError> {
    debug_assert!(num_pieces <= MAX_PIECES);
    if num_pieces > MAX_PIECES {
        return Err(SearchError::TooManyPieces {
            found: num_pieces,
            max: MAX_PIECES,
        });
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
/// Statistics emitted exactly once at the end of a search run, in the fixed
/// order the CLI prints them.
pub struct SearchStats {
    pub solution: String,
    pub elapsed_secs: f64,
    pub expanded: u64,
    pub generated: u64,
    pub duplicated: u64,
    pub memory_bytes: u64,
    pub num_pieces: usize,
    pub steps: usize,
    pub empty_spaces: usize,
    pub solved_by_width: usize,
    pub nodes_per_second: f64,
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "Solution path: {}", self.solution)?;
        writeln!(f, "Execution time: {}", self.elapsed_secs)?;
        writeln!(f, "Expanded nodes: {}", self.expanded)?;
        writeln!(f, "Generated nodes: {}", self.generated)?;
        writeln!(f, "Duplicated nodes: {}", self.duplicated)?;
        writeln!(f, "Auxiliary memory usage (bytes): {}", self.memory_bytes)?;
        writeln!(f, "Number of pieces in the puzzle: {}", self.num_pieces)?;
        writeln!(f, "Number of steps in solution: {}", self.steps)?;
        writeln!(f, "Number of empty spaces: {}", self.empty_spaces)?;
        writeln!(f, "Solved by IW({})", self.solved_by_width)?;
        write!(
            f,
            "Number of nodes expanded per second: {}",
            self.nodes_per_second
        )
    }
}

/// Run the search configured by `config` over `initial`.
pub fn run(initial: &GridState, config: &EngineConfig) -> Result<SearchStats, SearchError> {
    match config.algorithm {
        Algorithm::Bfs => algorithm1(initial),
        Algorithm::BfsDedup => algorithm2(initial),
        Algorithm::IteratedWidth => algorithm3(initial, config.max_width),
    }
}

fn finish_stats(
    solution_state: Option<GridState>,
    start: Instant,
    expanded: u64,
    generated: u64,
    duplicated: u64,
    memory_bytes: u64,
    num_pieces: usize,
    solved_by_width: usize,
) -> SearchStats {
    let elapsed_secs = start.elapsed().as_secs_f64();
    let (solution, empty_spaces) = match &solution_state {
        Some(s) => (s.solution().to_string(), s.empty_space_count()),
        None => (String::new(), 0),
    };
    let steps = solution.len() / 2;
    #[allow(clippy::cast_precision_loss)]
    let nodes_per_second = (expanded as f64 + 1.0) / elapsed_secs;

    SearchStats {
        solution,
        elapsed_secs,
        expanded,
        generated,
        duplicated,
        memory_bytes,
        num_pieces,
        steps,
        empty_spaces,
        solved_by_width,
        nodes_per_second,
    }
}

/// Algorithm 1: uninformed breadth-first search. No duplicate detection, so
/// `duplicated` is always zero.
pub fn algorithm1(initial: &GridState) -> Result<SearchStats, SearchError> {
    check_num_pieces(initial.num_pieces())?;
    let start = Instant::now();
    let mut queue: Queue<GridState> = Queue::new();
    queue.push(initial.duplicate());

    let mut expanded = 0u64;
    let mut generated = 0u64;
    let mut solution_state = None;

    while let Some(state) = queue.pop() {
        expanded += 1;
        if state.is_winning() {
            solution_state = Some(state);
            queue.drain();
            break;
        }
        for i in 0..state.num_pieces() {
            let piece = PieceId(i as u8);
            for dir in Direction::ALL {
                let (child, moved) = apply(&state, piece, dir);
                if !moved {
                    continue;
                }
                generated += 1;
                queue.push(child);
            }
        }
    }

    Ok(finish_stats(
        solution_state,
        start,
        expanded,
        generated,
        0,
        0,
        initial.num_pieces(),
        initial.num_pieces() + 1,
    ))
}

/// Algorithm 2: breadth-first search with exact duplicate pruning over the
/// packed state key.
pub fn algorithm2(initial: &GridState) -> Result<SearchStats, SearchError> {
    check_num_pieces(initial.num_pieces())?;
    let start = Instant::now();
    let layout = pack::layout_for(initial);
    let nbits = layout.total_bits(initial.num_pieces());

    let mut seen = RadixSet::new();
    seen.insert(&pack::pack(initial), nbits);

    let mut queue: Queue<GridState> = Queue::new();
    queue.push(initial.duplicate());

    let mut expanded = 0u64;
    // The initial state counts toward `generated` for symmetry with the
    // per-child counting below.
    let mut generated = 1u64;
    let mut duplicated = 0u64;
    let mut solution_state = None;

    while let Some(state) = queue.pop() {
        expanded += 1;
        if state.is_winning() {
            solution_state = Some(state);
            queue.drain();
            break;
        }
        for i in 0..state.num_pieces() {
            let piece = PieceId(i as u8);
            for dir in Direction::ALL {
                let (child, moved) = apply(&state, piece, dir);
                if !moved {
                    continue;
                }
                let key = pack::pack(&child);
                if seen.contains(&key, nbits) {
                    duplicated += 1;
                    continue;
                }
                seen.insert(&key, nbits);
                generated += 1;
                queue.push(child);
            }
        }
    }

    Ok(finish_stats(
        solution_state,
        start,
        expanded,
        generated,
        duplicated,
        seen.memory_bytes() as u64,
        initial.num_pieces(),
        initial.num_pieces() + 1,
    ))
}

/// Algorithm 3: Iterative Width. Runs `IW(1)`, `IW(2)`, ... up to
/// `max_width` (or the puzzle's piece count, if not capped), stopping at the
/// first width that finds a solution.
pub fn algorithm3(
    initial: &GridState,
    max_width: Option<usize>,
) -> Result<SearchStats, SearchError> {
    check_num_pieces(initial.num_pieces())?;
    let start = Instant::now();
    let num_pieces = initial.num_pieces();
    let cap = max_width.unwrap_or(num_pieces).min(num_pieces);
    let layout = pack::layout_for(initial);
    let atom_bits = layout.atom_bits();

    let mut expanded = 0u64;
    let mut generated = 0u64;
    let mut duplicated = 0u64;
    let mut memory_bytes = 0u64;
    let mut solution_state = None;
    let mut solved_by_width = 0usize;

    let mut w = 1usize;
    while w <= cap {
        let mut table = NoveltyTable::new(w, atom_bits, num_pieces);
        let initial_key = pack::pack(initial);
        for s in 1..=w {
            table.insert_all_combinations(&initial_key, s);
        }

        let mut queue: Queue<GridState> = Queue::new();
        queue.push(initial.duplicate());
        // Each width attempt re-introduces the initial state to the count.
        generated += 1;

        let mut found = false;
        while let Some(state) = queue.pop() {
            expanded += 1;
            if state.is_winning() {
                solution_state = Some(state);
                found = true;
                queue.drain();
                break;
            }
            for i in 0..state.num_pieces() {
                let piece = PieceId(i as u8);
                for dir in Direction::ALL {
                    let (child, moved) = apply(&state, piece, dir);
                    if !moved {
                        continue;
                    }
                    let key = pack::pack(&child);
                    let mut novel = false;
                    for s in 1..=w {
                        if table.contains_any_missing_combination(&key, s) {
                            novel = true;
                        }
                        table.insert_all_combinations(&key, s);
                    }
                    if novel {
                        generated += 1;
                        queue.push(child);
                    } else {
                        duplicated += 1;
                    }
                }
            }
        }
        // `queue` is empty here either way (drained above on success, or
        // exhausted by the loop itself on failure) and `table` is dropped at
        // the end of this iteration, freeing every tree before the next
        // width is attempted.

        memory_bytes = table.memory_bytes() as u64;
        solved_by_width = w;
        if found {
            break;
        }
        w += 1;
    }

    Ok(finish_stats(
        solution_state,
        start,
        expanded,
        generated,
        duplicated,
        memory_bytes,
        num_pieces,
        solved_by_width,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewidth_base::background::Background;
    use std::rc::Rc;

    fn one_row_puzzle() -> GridState {
        // "0  G" with a wall-free corridor: piece 0 at x=0, generic goal at x=3.
        let bg = Rc::new(Background::new(vec![vec![' ', ' ', ' ', 'G']]));
        let map = vec![vec!['0', ' ', ' ', 'G']];
        GridState::new(bg, map, vec![(0, 0)], None)
    }

    fn already_solved_puzzle() -> GridState {
        let bg = Rc::new(Background::new(vec![vec!['G']]));
        let map = vec![vec!['g']];
        GridState::new(bg, map, vec![], None)
    }

    fn boxed_in_puzzle() -> GridState {
        // Piece 0 is walled in on both sides and can never reach the goal
        // sealed off in the same row.
        let bg = Rc::new(Background::new(vec![vec!['#', ' ', '#', ' ', 'G', '#']]));
        let map = vec![vec!['#', '0', '#', ' ', 'G', '#']];
        GridState::new(bg, map, vec![(1, 0)], None)
    }

    #[test]
    fn algorithm1_solves_corridor() {
        let s = algorithm1(&one_row_puzzle()).unwrap();
        assert_eq!(s.solution, "0r0r0r");
        assert_eq!(s.steps, 3);
        assert_eq!(s.empty_spaces, 3);
        assert_eq!(s.duplicated, 0);
    }

    #[test]
    fn algorithm1_already_solved_needs_no_expansion_beyond_root() {
        let s = algorithm1(&already_solved_puzzle()).unwrap();
        assert_eq!(s.solution, "");
        assert_eq!(s.expanded, 1);
        assert_eq!(s.generated, 0);
        assert_eq!(s.steps, 0);
    }

    #[test]
    fn algorithm1_unsolvable_exhausts_with_empty_solution() {
        let s = algorithm1(&boxed_in_puzzle()).unwrap();
        assert_eq!(s.solution, "");
        assert_eq!(s.steps, 0);
    }

    #[test]
    fn algorithm2_matches_algorithm1_solution_length() {
        let a1 = algorithm1(&one_row_puzzle()).unwrap();
        let a2 = algorithm2(&one_row_puzzle()).unwrap();
        assert_eq!(a1.steps, a2.steps);
    }

    #[test]
    fn algorithm2_already_solved_generated_is_one() {
        let s = algorithm2(&already_solved_puzzle()).unwrap();
        assert_eq!(s.expanded, 1);
        assert_eq!(s.generated, 1);
    }

    #[test]
    fn algorithm3_solves_corridor_within_its_own_width() {
        let s = algorithm3(&one_row_puzzle(), None).unwrap();
        assert_eq!(s.steps, 3);
        assert!(s.solved_by_width >= 1);
    }

    #[test]
    fn algorithm3_zero_pieces_performs_no_search() {
        let s = algorithm3(&already_solved_puzzle(), None).unwrap();
        assert_eq!(s.expanded, 0);
        assert_eq!(s.generated, 0);
        assert_eq!(s.solved_by_width, 0);
        assert_eq!(s.solution, "");
    }

    #[test]
    fn two_independent_pieces_alg2_prunes_fewer_than_alg1_generates() {
        // Two lanes stacked with a shared wall between; each piece can slide
        // to its own goal independently, producing interleavings of the two
        // pieces' moves that converge on the same position and that
        // Algorithm 2 should catch as duplicates.
        let bg = Rc::new(Background::new(vec![
            vec![' ', ' ', 'G'],
            vec!['#', '#', '#'],
            vec![' ', ' ', 'G'],
        ]));
        let map = vec![
            vec!['0', ' ', 'G'],
            vec!['#', '#', '#'],
            vec!['1', ' ', 'G'],
        ];
        let puzzle = GridState::new(bg, map, vec![(0, 0), (0, 2)], None);

        let a1 = algorithm1(&puzzle).unwrap();
        let a2 = algorithm2(&puzzle).unwrap();
        assert_eq!(a1.steps, a2.steps);
        assert!(a2.duplicated > 0);
    }
}
