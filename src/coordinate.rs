use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Cube hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. [`Coordinate::new`] derives `s` and cannot
/// violate it; [`Coordinate::cube`] trusts the caller.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
)]
#[display("({q}, {r}, {s})")]
pub struct Coordinate {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl Coordinate {
    /// The origin cell.
    pub const ZERO: Coordinate = Coordinate { q: 0, r: 0, s: 0 };

    /// Construct from axial coordinates, deriving `s = -q - r`.
    ///
    /// This is the preferred constructor: the constraint holds by construction.
    pub const fn new(q: i32, r: i32) -> Coordinate {
        Coordinate { q, r, s: -q - r }
    }

    /// Construct from raw cube coordinates.
    ///
    /// The constraint `q + r + s == 0` is not checked. A value violating it
    /// produces wrong distances and direction steps downstream; upholding the
    /// constraint is the caller's responsibility.
    pub const fn cube(q: i32, r: i32, s: i32) -> Coordinate {
        Coordinate { q, r, s }
    }

    /// Component-wise sum.
    pub fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::cube(self.q + other.q, self.r + other.r, self.s + other.s)
    }

    /// Component-wise difference.
    pub fn subtract(self, other: Coordinate) -> Coordinate {
        Coordinate::cube(self.q - other.q, self.r - other.r, self.s - other.s)
    }

    /// Component-wise multiplication by a scalar.
    pub fn scale(self, factor: i32) -> Coordinate {
        Coordinate::cube(self.q * factor, self.r * factor, self.s * factor)
    }

    /// The coordinate itself, unchanged; counterpart of [`Coordinate::negate`].
    pub fn identity(self) -> Coordinate {
        self
    }

    /// Equivalent to scaling by `-1`.
    pub fn negate(self) -> Coordinate {
        self.scale(-1)
    }

    /// Number of single-cell steps between this cell and `other`.
    ///
    /// For coordinates upholding the constraint the component deltas always
    /// sum to an even number, so the division is exact.
    pub fn distance_to(self, other: Coordinate) -> i32 {
        let delta = self.subtract(other);
        (delta.q.abs() + delta.r.abs() + delta.s.abs()) / 2
    }

    /// Unit offset for an integer direction ordinal, wrapping modulo 6.
    ///
    /// Never fails; see [`Direction::from_ordinal`] for the wrapping rule.
    pub fn direction(ordinal: i32) -> Coordinate {
        Direction::from_ordinal(ordinal).to_coordinate()
    }

    /// Iterate over the six adjacent cells, clockwise from due north.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// Raw cube components, for 3d geometry consumers.
    pub fn to_cube(self) -> (i32, i32, i32) {
        (self.q, self.r, self.s)
    }

    /// Axial components, dropping the derivable `s`.
    pub fn to_axial(self) -> (i32, i32) {
        (self.q, self.r)
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, other: Coordinate) {
        *self = Coordinate::add(*self, other);
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(mut self, other: Coordinate) -> Coordinate {
        self += other;
        self
    }
}

impl SubAssign for Coordinate {
    fn sub_assign(&mut self, other: Coordinate) {
        *self = self.subtract(other);
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(mut self, other: Coordinate) -> Coordinate {
        self -= other;
        self
    }
}

impl MulAssign<i32> for Coordinate {
    fn mul_assign(&mut self, factor: i32) {
        *self = self.scale(factor);
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(mut self, factor: i32) -> Coordinate {
        self *= factor;
        self
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        self.negate()
    }
}

impl AddAssign<Direction> for Coordinate {
    fn add_assign(&mut self, direction: Direction) {
        *self = Coordinate::add(*self, direction.to_coordinate());
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(mut self, direction: Direction) -> Coordinate {
        self += direction;
        self
    }
}
