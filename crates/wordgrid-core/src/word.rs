//! Words and their placements.

use std::fmt;

use smallvec::SmallVec;

use crate::coord::{BoundingBox, Position};
use crate::direction::Direction;
use crate::error::WordError;

/// Normalize raw word text: trim surrounding whitespace and upper-case.
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Split free text on commas and whitespace into normalized words.
///
/// Empty fragments are dropped; duplicates keep their first position.
pub fn split_words(input: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for w in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(normalize)
        .filter(|w| !w.is_empty())
    {
        if !out.contains(&w) {
            out.push(w);
        }
    }
    out
}

// ── WordColor ──────────────────────────────────────────────────────

/// Display colour assigned to a word. Opaque to the engine; carried
/// through for renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WordColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl WordColor {
    /// Convert from HSV with `h` in degrees and `s`, `v` in `[0, 1]`.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.rem_euclid(360.0) / 60.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_u8 = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        }
    }

    /// `#RRGGBB` string.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ── Placement ──────────────────────────────────────────────────────

/// Where a word sits in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Cell holding the first letter.
    pub start: Position,
    /// Reading direction.
    pub direction: Direction,
    /// Every occupied cell, first letter to last.
    pub cells: SmallVec<[Position; 16]>,
}

impl Placement {
    /// Build a placement from its start, direction and ordered cells.
    pub fn new(start: Position, direction: Direction, cells: SmallVec<[Position; 16]>) -> Self {
        Self {
            start,
            direction,
            cells,
        }
    }

    /// Cell holding the last letter.
    pub fn end(&self) -> Position {
        self.cells.last().copied().unwrap_or(self.start)
    }

    /// This placement re-expressed relative to `bbox`'s top-left corner.
    ///
    /// Returns `None` if any cell falls outside the box.
    pub fn relative_to(&self, bbox: &BoundingBox) -> Option<Self> {
        let cells = self
            .cells
            .iter()
            .map(|p| bbox.relative(*p))
            .collect::<Option<SmallVec<_>>>()?;
        Some(Self {
            start: bbox.relative(self.start)?,
            direction: self.direction,
            cells,
        })
    }
}

// ── Word ───────────────────────────────────────────────────────────

/// A word in the puzzle's word set.
///
/// Words persist across regenerations; only the placement is reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: String,
    secret: bool,
    color: WordColor,
    placement: Option<Placement>,
}

impl Word {
    /// Create a word from raw text.
    ///
    /// Returns `Err(WordError::Empty)` if nothing remains after trimming.
    pub fn new(text: &str, secret: bool) -> Result<Self, WordError> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self {
            text,
            secret,
            color: WordColor::default(),
            placement: None,
        })
    }

    /// Normalized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always `false`; construction rejects empty words.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Characters in reading order.
    pub fn letters(&self) -> SmallVec<[char; 16]> {
        self.text.chars().collect()
    }

    /// Whether this is a secret (bonus) word.
    pub fn is_secret(&self) -> bool {
        self.secret
    }

    /// Change the secret flag.
    pub fn set_secret(&mut self, secret: bool) {
        self.secret = secret;
    }

    /// Display colour.
    pub fn color(&self) -> WordColor {
        self.color
    }

    /// Assign a display colour.
    pub fn set_color(&mut self, color: WordColor) {
        self.color = color;
    }

    /// Current placement, if any.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Whether the word is in the grid.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Record a placement.
    pub fn place(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Forget the placement.
    pub fn clear_placement(&mut self) {
        self.placement = None;
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn new_normalizes() {
        let w = Word::new("  dog ", false).unwrap();
        assert_eq!(w.text(), "DOG");
        assert_eq!(w.len(), 3);
        assert!(!w.is_placed());
        assert_eq!(Word::new("   ", true), Err(WordError::Empty));
    }

    #[test]
    fn split_words_handles_mixed_separators() {
        assert_eq!(
            split_words("cat, dog\npig  cat,,"),
            vec!["CAT".to_string(), "DOG".into(), "PIG".into()]
        );
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(WordColor::from_hsv(0.0, 1.0, 1.0).hex(), "#FF0000");
        assert_eq!(WordColor::from_hsv(120.0, 1.0, 1.0).hex(), "#00FF00");
        assert_eq!(WordColor::from_hsv(240.0, 1.0, 1.0).hex(), "#0000FF");
        assert_eq!(WordColor::from_hsv(0.0, 0.0, 1.0).hex(), "#FFFFFF");
    }

    #[test]
    fn relative_placement_shifts_every_cell() {
        let p = Placement::new(
            Position::new(2, 3),
            Direction::E,
            smallvec![Position::new(2, 3), Position::new(2, 4)],
        );
        let bbox = BoundingBox {
            min_row: 1,
            min_col: 2,
            max_row: 5,
            max_col: 5,
        };
        let r = p.relative_to(&bbox).unwrap();
        assert_eq!(r.start, Position::new(1, 1));
        assert_eq!(r.end(), Position::new(1, 2));
    }
}
