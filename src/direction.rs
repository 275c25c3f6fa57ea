use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Unit offsets in cube coordinates, indexed by direction ordinal.
const VECTORS: [Coordinate; 6] = [
    Coordinate::cube(1, 0, -1),
    Coordinate::cube(1, -1, 0),
    Coordinate::cube(0, -1, 1),
    Coordinate::cube(-1, 0, 1),
    Coordinate::cube(-1, 1, 0),
    Coordinate::cube(0, 1, -1),
];

/// Direction in a hexagonal coordinate system
///
/// Assumes flat-top hexagons. Variants run clockwise from due north.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("n")]
    North,
    #[display("ne")]
    Northeast,
    #[display("se")]
    Southeast,
    #[display("s")]
    South,
    #[display("sw")]
    Southwest,
    #[display("nw")]
    Northwest,
}

impl Direction {
    /// Iterate through all `Direction`s, clockwise from `North`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::North), |direction| {
            use Direction::*;

            match direction {
                North => Some(Northeast),
                Northeast => Some(Southeast),
                Southeast => Some(South),
                South => Some(Southwest),
                Southwest => Some(Northwest),
                Northwest => None,
            }
        })
    }

    /// Map an arbitrary integer ordinal onto a direction, wrapping modulo 6.
    ///
    /// Never fails. Uses the euclidean remainder, so negative ordinals wrap
    /// from the end: `-1` is `Northwest`.
    pub fn from_ordinal(ordinal: i32) -> Direction {
        match ordinal.rem_euclid(6) {
            0 => Direction::North,
            1 => Direction::Northeast,
            2 => Direction::Southeast,
            3 => Direction::South,
            4 => Direction::Southwest,
            _ => Direction::Northwest,
        }
    }

    /// Position of this direction in clockwise order from `North`.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The unit offset this direction steps by.
    pub fn to_coordinate(self) -> Coordinate {
        VECTORS[self.ordinal()]
    }

    /// The opposite direction.
    pub fn reverse(self) -> Direction {
        Direction::from_ordinal(self.ordinal() as i32 + 3)
    }

    /// Attempt to parse a direction from the head of the given string.
    ///
    /// Returns `(maybe_direction, unused_portion)`.
    ///
    /// Legal inputs (case sensitive): `n`, `ne`, `se`, `s`, `sw`, `nw`.
    pub fn try_parse(s: &str) -> (Option<Direction>, &str) {
        let mut chars = s.chars();
        let first = chars.next();
        let second = chars.next();
        match (first, second) {
            (Some('n'), Some('e')) => (Some(Direction::Northeast), &s[2..]),
            (Some('n'), Some('w')) => (Some(Direction::Northwest), &s[2..]),
            (Some('n'), _) => (Some(Direction::North), &s[1..]),
            (Some('s'), Some('e')) => (Some(Direction::Southeast), &s[2..]),
            (Some('s'), Some('w')) => (Some(Direction::Southwest), &s[2..]),
            (Some('s'), _) => (Some(Direction::South), &s[1..]),
            _ => (None, s),
        }
    }
}

/// Helper for parsing a line of directions.
pub struct Directions(pub Vec<Direction>);

impl FromStr for Directions {
    type Err = ParseDirectionsError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        let mut directions = Vec::with_capacity(s.len());

        while !s.is_empty() {
            let (direction, remaining) = Direction::try_parse(s);
            match direction {
                None => return Err(ParseDirectionsError),
                Some(direction) => directions.push(direction),
            }

            s = remaining;
        }

        Ok(Directions(directions))
    }
}

/// Parsing failed for a line of hex directions
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("Parsing hex direction failed")]
pub struct ParseDirectionsError;
