//! Accidental-duplicate detection by direct character-run comparison.

use smallvec::SmallVec;
use wordgrid_core::{Direction, DirectionSet, Grid, Position};

/// Finds occurrences of a word along grid lines.
///
/// A run counts as an occurrence if it reads the word in any scanned
/// direction. The scanned set always includes the reverse of every
/// configured direction, so a word and its reversal are both caught.
/// A run and its own reversal (palindromes, single letters) count once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuplicateChecker {
    directions: DirectionSet,
}

impl DuplicateChecker {
    /// A checker scanning `directions` and their reverses.
    pub fn new(directions: DirectionSet) -> Self {
        Self {
            directions: directions.iter().chain(directions.reversed().iter()).collect(),
        }
    }

    /// Directions actually scanned.
    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    /// Whether `letters` reads from `start` along `dir`.
    pub fn matches_at(grid: &Grid, letters: &[char], start: Position, dir: Direction) -> bool {
        let size = grid.size();
        letters.iter().enumerate().all(|(i, &ch)| {
            dir.step(start, i, size)
                .is_some_and(|pos| grid.get(pos) == Some(ch))
        })
    }

    /// Number of distinct occurrences of `letters` anywhere in `grid`.
    pub fn count(&self, grid: &Grid, letters: &[char]) -> usize {
        let Some(&first) = letters.first() else {
            return 0;
        };
        let size = grid.size();
        let span = letters.len() - 1;
        let mut seen: SmallVec<[(usize, usize); 4]> = SmallVec::new();
        for row in 0..size {
            for col in 0..size {
                let start = Position::new(row, col);
                if grid.get(start) != Some(first) {
                    continue;
                }
                for dir in self.directions.iter() {
                    if !Self::matches_at(grid, letters, start, dir) {
                        continue;
                    }
                    let Some(end) = dir.step(start, span, size) else {
                        continue;
                    };
                    let (a, b) = (start.index(size), end.index(size));
                    let key = (a.min(b), a.max(b));
                    if !seen.contains(&key) {
                        seen.push(key);
                    }
                }
            }
        }
        seen.len()
    }

    /// Whether any occurrence of `letters` passes through `cell`.
    pub fn occurs_through(&self, grid: &Grid, letters: &[char], cell: Position) -> bool {
        let Some(at_cell) = grid.get(cell) else {
            return false;
        };
        let size = grid.size();
        letters
            .iter()
            .enumerate()
            .filter(|&(_, &ch)| ch == at_cell)
            .any(|(offset, _)| {
                self.directions.iter().any(|dir| {
                    dir.opposite()
                        .step(cell, offset, size)
                        .is_some_and(|start| Self::matches_at(grid, letters, start, dir))
                })
            })
    }
}

impl Default for DuplicateChecker {
    /// Scan all eight directions.
    fn default() -> Self {
        Self::new(DirectionSet::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        let mut g = Grid::new(rows.len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch != '.' {
                    g.set(Position::new(r, c), Some(ch));
                }
            }
        }
        g
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn counts_forward_and_reversed_runs() {
        let g = grid(&["CAT..", ".....", "TAC..", ".....", "....."]);
        let checker = DuplicateChecker::default();
        assert_eq!(checker.count(&g, &chars("CAT")), 2);
    }

    #[test]
    fn restricted_directions_still_scan_reverses() {
        let g = grid(&["TAC", "...", "..."]);
        let checker = DuplicateChecker::new(DirectionSet::level(1).unwrap());
        assert_eq!(checker.count(&g, &chars("CAT")), 1);
    }

    #[test]
    fn palindromes_count_once() {
        let g = grid(&["ABA", "...", "..."]);
        assert_eq!(DuplicateChecker::default().count(&g, &chars("ABA")), 1);
    }

    #[test]
    fn single_letters_count_cells() {
        let g = grid(&["A.A", ".A.", "..."]);
        assert_eq!(DuplicateChecker::default().count(&g, &chars("A")), 3);
    }

    #[test]
    fn diagonal_occurrences_are_found() {
        let g = grid(&["D..", ".O.", "..G"]);
        let checker = DuplicateChecker::default();
        assert_eq!(checker.count(&g, &chars("DOG")), 1);
        assert_eq!(checker.count(&g, &chars("GOD")), 1);
    }

    #[test]
    fn occurs_through_checks_every_offset() {
        let g = grid(&["....", "CAT.", "....", "...."]);
        let checker = DuplicateChecker::default();
        let cat = chars("CAT");
        assert!(checker.occurs_through(&g, &cat, Position::new(1, 0)));
        assert!(checker.occurs_through(&g, &cat, Position::new(1, 1)));
        assert!(checker.occurs_through(&g, &cat, Position::new(1, 2)));
        assert!(!checker.occurs_through(&g, &cat, Position::new(1, 3)));
        assert!(!checker.occurs_through(&g, &cat, Position::new(0, 0)));
    }

    #[test]
    fn runs_cut_by_the_edge_do_not_match() {
        let g = grid(&["..C", "...", "..."]);
        assert_eq!(DuplicateChecker::default().count(&g, &chars("CAT")), 0);
    }
}
