//! Compass directions and direction sets.

use std::fmt;
use std::str::FromStr;

use crate::coord::Position;
use crate::error::ConfigError;

/// One of the eight unit compass vectors a word may run along.
///
/// Deltas are `(row, col)`: north decreases the row, east increases
/// the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Up.
    N,
    /// Up and right.
    NE,
    /// Right.
    E,
    /// Down and right.
    SE,
    /// Down.
    S,
    /// Down and left.
    SW,
    /// Left.
    W,
    /// Up and left.
    NW,
}

impl Direction {
    /// All eight directions in clockwise order starting at north.
    pub const ALL: [Direction; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// `(row, col)` step for one cell of travel.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::N => (-1, 0),
            Self::NE => (-1, 1),
            Self::E => (0, 1),
            Self::SE => (1, 1),
            Self::S => (1, 0),
            Self::SW => (1, -1),
            Self::W => (0, -1),
            Self::NW => (-1, -1),
        }
    }

    /// Short upper-case token, e.g. `"NE"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::NE => Self::SW,
            Self::E => Self::W,
            Self::SE => Self::NW,
            Self::S => Self::N,
            Self::SW => Self::NE,
            Self::W => Self::E,
            Self::NW => Self::SE,
        }
    }

    /// Whether the direction moves along both axes.
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }

    /// The cell `steps` cells away from `from`, or `None` if it leaves
    /// a `size × size` grid.
    pub fn step(self, from: Position, steps: usize, size: usize) -> Option<Position> {
        let (dr, dc) = self.delta();
        let steps = steps as isize;
        let row = from.row as isize + dr * steps;
        let col = from.col as isize + dc * steps;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| ConfigError::InvalidDirection {
                token: token.to_string(),
            })
    }
}

// ── DirectionSet ───────────────────────────────────────────────────

/// A set of permitted directions, stored as an 8-bit mask.
///
/// Iteration always follows [`Direction::ALL`] order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// No directions.
    pub const EMPTY: Self = Self(0);
    /// Every direction.
    pub const ALL: Self = Self(0xFF);

    /// Preset direction set for difficulty level `1..=8`.
    ///
    /// | Level | Directions |
    /// |-------|------------|
    /// | 1 | E, S |
    /// | 2 | NE, E, SE, S |
    /// | 3 | all eight |
    /// | 4 | all but E and S |
    /// | 5 | all but E |
    /// | 6 | NW, W, SW |
    /// | 7 | diagonals |
    /// | 8 | N, E, S, W |
    pub fn level(level: u8) -> Result<Self, ConfigError> {
        use Direction::*;
        let dirs: &[Direction] = match level {
            1 => &[E, S],
            2 => &[NE, E, SE, S],
            3 => &Direction::ALL,
            4 => &[N, NE, SE, SW, W, NW],
            5 => &[N, NE, SE, S, SW, W, NW],
            6 => &[NW, W, SW],
            7 => &[NE, SE, SW, NW],
            8 => &[N, E, S, W],
            _ => return Err(ConfigError::InvalidLevel { level }),
        };
        Ok(dirs.iter().copied().collect())
    }

    /// Add a direction.
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// Remove a direction.
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    /// Whether `dir` is permitted.
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Number of directions in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the contained directions in clockwise order from north.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// The set with every direction reversed.
    pub fn reversed(self) -> Self {
        self.iter().map(Direction::opposite).collect()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Direction::name).collect();
        f.write_str(&names.join(","))
    }
}

/// Parses either a bare difficulty level (`"3"`) or a list of direction
/// tokens separated by commas or whitespace (`"E, S,se"`).
impl FromStr for DirectionSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(level) = trimmed.parse::<u8>() {
            return Self::level(level);
        }
        let mut set = Self::EMPTY;
        for token in trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            set.insert(token.parse()?);
        }
        if set.is_empty() {
            return Err(ConfigError::EmptyDirectionSet);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn opposite_negates_delta() {
        for d in Direction::ALL {
            let (r, c) = d.delta();
            assert_eq!(d.opposite().delta(), (-r, -c));
        }
    }

    #[test]
    fn step_stops_at_edges() {
        let origin = Position::new(0, 0);
        assert_eq!(Direction::N.step(origin, 1, 5), None);
        assert_eq!(Direction::SE.step(origin, 4, 5), Some(Position::new(4, 4)));
        assert_eq!(Direction::SE.step(origin, 5, 5), None);
    }

    #[test]
    fn levels_match_preset_table() {
        let l2 = DirectionSet::level(2).unwrap();
        assert_eq!(l2.to_string(), "NE,E,SE,S");
        assert_eq!(DirectionSet::level(3).unwrap(), DirectionSet::ALL);
        assert_eq!(DirectionSet::level(7).unwrap().len(), 4);
        assert!(DirectionSet::level(7).unwrap().iter().all(Direction::is_diagonal));
        assert_eq!(
            DirectionSet::level(9),
            Err(ConfigError::InvalidLevel { level: 9 })
        );
    }

    #[test]
    fn parse_tokens_case_insensitive() {
        let set: DirectionSet = " e, S,se ".parse().unwrap();
        assert_eq!(set.to_string(), "E,SE,S");
    }

    #[test]
    fn parse_level_number() {
        let set: DirectionSet = "1".parse().unwrap();
        assert_eq!(set.to_string(), "E,S");
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert_eq!(
            "E,UP".parse::<DirectionSet>(),
            Err(ConfigError::InvalidDirection { token: "UP".into() })
        );
        assert_eq!(
            " , ".parse::<DirectionSet>(),
            Err(ConfigError::EmptyDirectionSet)
        );
    }

    proptest! {
        #[test]
        fn set_len_matches_iteration(bits in any::<u8>()) {
            let set = DirectionSet(bits);
            prop_assert_eq!(set.len(), set.iter().count());
            prop_assert_eq!(set.reversed().reversed(), set);
        }

        #[test]
        fn display_parses_back(bits in 1u8..=255) {
            let set = DirectionSet(bits);
            let parsed: DirectionSet = set.to_string().parse().unwrap();
            prop_assert_eq!(parsed, set);
        }
    }
}
