//! Test utilities for wordgrid development.
//!
//! Provides logger setup for tests, grid builders, and assertions for the
//! invariants every generated puzzle must hold: placements spell their
//! words, nothing is duplicated, inactive cells stay empty, and crops
//! are tight.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use wordgrid_core::{BoundingBox, Grid, MaskGrid, Position, Word};
use wordgrid_gen::DuplicateChecker;

/// Route `log` output through the test harness. Safe to call repeatedly.
///
/// Respects `RUST_LOG`; defaults to warnings only.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(true)
        .format_timestamp(None)
        .try_init();
}

/// Build a grid from rows of text; `.` marks an empty cell.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let mut grid = Grid::new(rows.len());
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if ch != '.' {
                grid.set(Position::new(r, c), Some(ch));
            }
        }
    }
    grid
}

/// Letters along a word's placement.
pub fn spelled(grid: &Grid, word: &Word) -> Option<String> {
    let p = word.placement()?;
    p.cells.iter().map(|&c| grid.get(c)).collect()
}

/// Every placed word reads correctly from its start along its direction.
pub fn assert_placements_spell(grid: &Grid, words: &[&Word]) {
    for word in words.iter().filter(|w| w.is_placed()) {
        let p = word.placement().unwrap();
        assert_eq!(p.cells.first(), Some(&p.start), "{word}: first cell is not the start");
        assert_eq!(
            p.direction.step(p.start, word.len() - 1, grid.size()),
            Some(p.end()),
            "{word}: last cell is off the end"
        );
        for (i, cell) in p.cells.iter().enumerate() {
            assert_eq!(
                p.direction.step(p.start, i, grid.size()),
                Some(*cell),
                "{word}: cell {i} is off the line"
            );
        }
        assert_eq!(spelled(grid, word).as_deref(), Some(word.text()), "{word} misspelled");
    }
}

/// No placed word occurs more than once in any direction.
pub fn assert_no_duplicates(grid: &Grid, words: &[&Word]) {
    let checker = DuplicateChecker::default();
    for word in words.iter().filter(|w| w.is_placed()) {
        let count = checker.count(grid, &word.letters());
        assert_eq!(count, 1, "{word} occurs {count} times");
    }
}

/// Inactive cells hold no letter.
pub fn assert_inactive_cells_empty(grid: &Grid, mask: &MaskGrid) {
    assert_eq!(grid.size(), mask.size());
    for idx in 0..grid.cell_count() {
        let pos = Position::from_index(idx, grid.size());
        if !mask.is_active(pos) {
            assert_eq!(grid.get(pos), None, "inactive cell {pos} holds a letter");
        }
    }
}

/// No active cell lies outside `bbox`, and each edge touches one.
pub fn assert_bbox_tight(mask: &MaskGrid, bbox: &BoundingBox) {
    let active: Vec<Position> = mask.active_positions().collect();
    assert!(!active.is_empty(), "bounding box over a blank mask");
    assert!(active.iter().all(|&p| bbox.contains(p)), "active cell outside {bbox}");
    assert!(active.iter().any(|p| p.row == bbox.min_row), "top edge untouched");
    assert!(active.iter().any(|p| p.row == bbox.max_row), "bottom edge untouched");
    assert!(active.iter().any(|p| p.col == bbox.min_col), "left edge untouched");
    assert!(active.iter().any(|p| p.col == bbox.max_col), "right edge untouched");
}
