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

//! The immutable background of a puzzle: walls and goal markers, as loaded
//! from the map file, with no pieces or player overlaid.
//!
//! Every state descended from the same initial load shares one `Background`
//! by reference; none of them ever mutates it.

#[derive(Debug, PartialEq, Eq)]
/// The walls-and-goals layer underneath every piece. Shared by `Rc` across an
/// entire search: it must stay bitwise identical for every descendant of the
/// initial state.
pub struct Background {
    height: usize,
    width: usize,
    cells: Vec<Vec<char>>,
}

impl Background {
    #[must_use]
    /// Build a background from already-validated, rectangular rows.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty or its rows are not all the same length.
    pub fn new(cells: Vec<Vec<char>>) -> Background {
        assert!(!cells.is_empty(), "background must have at least one row");
        let width = cells[0].len();
        assert!(
            cells.iter().all(|row| row.len() == width),
            "background rows must share one width"
        );
        Background {
            height: cells.len(),
            width,
            cells,
        }
    }

    #[must_use]
    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    /// Number of columns in every row.
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    /// The background glyph at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` falls outside the grid.
    pub fn at(&self, x: usize, y: usize) -> char {
        self.cells[y][x]
    }

    #[must_use]
    /// Whether `(x, y)` names a wall cell.
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.at(x, y) == crate::cell::WALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_match_input() {
        let bg = Background::new(vec![vec![' ', '#'], vec!['#', ' ']]);
        assert_eq!(bg.height(), 2);
        assert_eq!(bg.width(), 2);
        assert!(bg.is_wall(1, 0));
        assert!(!bg.is_wall(0, 0));
    }

    #[test]
    #[should_panic]
    fn ragged_rows_panic() {
        Background::new(vec![vec![' ', ' '], vec![' ']]);
    }
}
