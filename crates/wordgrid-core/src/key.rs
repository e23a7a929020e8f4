//! The solution key: word → placement or unplaced marker.

use indexmap::IndexMap;

use crate::coord::{BoundingBox, Position};
use crate::direction::Direction;
use crate::word::Word;

/// Start cell and direction of a placed word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyPlacement {
    /// First letter.
    pub start: Position,
    /// Reading direction.
    pub direction: Direction,
}

/// One key row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEntry {
    /// Whether the word is a secret word.
    pub secret: bool,
    /// Placement, or `None` if the word is unplaced.
    pub placement: Option<KeyPlacement>,
}

/// Ordered mapping from word text to its key entry.
///
/// Order follows the puzzle's word set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Key {
    entries: IndexMap<String, KeyEntry>,
}

impl Key {
    /// Build a key from the current state of `words`.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let entries = words
            .into_iter()
            .map(|w| {
                let placement = w.placement().map(|p| KeyPlacement {
                    start: p.start,
                    direction: p.direction,
                });
                (
                    w.text().to_string(),
                    KeyEntry {
                        secret: w.is_secret(),
                        placement,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Entry for `word`.
    pub fn get(&self, word: &str) -> Option<&KeyEntry> {
        self.entries.get(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the key has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in word-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeyEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Words with a placement.
    pub fn placed(&self) -> impl Iterator<Item = (&str, KeyPlacement)> {
        self.iter().filter_map(|(w, e)| e.placement.map(|p| (w, p)))
    }

    /// Words without a placement.
    pub fn unplaced(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, e)| e.placement.is_none())
            .map(|(w, _)| w)
    }

    /// Re-offset every start cell by `bbox`'s top-left corner, for use
    /// alongside a cropped grid.
    ///
    /// Placements whose start lies outside the box become unplaced.
    pub fn cropped(&self, bbox: &BoundingBox) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(w, e)| {
                let placement = e.placement.and_then(|p| {
                    bbox.relative(p.start).map(|start| KeyPlacement {
                        start,
                        direction: p.direction,
                    })
                });
                (
                    w.clone(),
                    KeyEntry {
                        secret: e.secret,
                        placement,
                    },
                )
            })
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Placement;
    use smallvec::smallvec;

    fn placed(text: &str, start: Position, dir: Direction) -> Word {
        let mut w = Word::new(text, false).unwrap();
        w.place(Placement::new(start, dir, smallvec![start]));
        w
    }

    #[test]
    fn key_preserves_order_and_unplaced() {
        let a = placed("CAT", Position::new(1, 1), Direction::E);
        let b = Word::new("DOG", true).unwrap();
        let key = Key::from_words([&a, &b]);
        let names: Vec<_> = key.iter().map(|(w, _)| w).collect();
        assert_eq!(names, vec!["CAT", "DOG"]);
        assert_eq!(key.unplaced().collect::<Vec<_>>(), vec!["DOG"]);
        assert!(key.get("DOG").unwrap().secret);
    }

    #[test]
    fn cropped_offsets_start() {
        let a = placed("CAT", Position::new(3, 4), Direction::S);
        let key = Key::from_words([&a]);
        let bbox = BoundingBox {
            min_row: 2,
            min_col: 2,
            max_row: 8,
            max_col: 8,
        };
        let c = key.cropped(&bbox);
        assert_eq!(
            c.get("CAT").unwrap().placement.unwrap().start,
            Position::new(1, 2)
        );
    }
}
