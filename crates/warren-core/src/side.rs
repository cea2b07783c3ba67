//! Cell sides.

use std::fmt;

use crate::coord::Coord;

/// One of the four sides of a grid cell.
///
/// `Up` faces decreasing Y, matching the Y-down convention of [`Coord`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Up,
    Right,
    Down,
    Left,
}

impl Side {
    /// The four sides in clockwise order starting from `Up`.
    ///
    /// Neighbor enumeration uses this order, so anything downstream that
    /// depends on insertion order (frontier tie-breaking in particular)
    /// is deterministic.
    pub const ALL: [Side; 4] = [Side::Up, Side::Right, Side::Down, Side::Left];

    /// Unit offset toward the adjacent cell on this side.
    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Side::Up => Coord::new(0, -1),
            Side::Right => Coord::new(1, 0),
            Side::Down => Coord::new(0, 1),
            Side::Left => Coord::new(-1, 0),
        }
    }

    /// The side facing the other way.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Up => Side::Down,
            Side::Right => Side::Left,
            Side::Down => Side::Up,
            Side::Left => Side::Right,
        }
    }

    /// The side of `from` that faces the orthogonally adjacent cell `to`,
    /// or `None` when the two cells are not orthogonally adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Side> {
        let d = to - from;
        match (d.x, d.y) {
            (0, -1) => Some(Side::Up),
            (1, 0) => Some(Side::Right),
            (0, 1) => Some(Side::Down),
            (-1, 0) => Some(Side::Left),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Up => "up",
            Side::Right => "right",
            Side::Down => "down",
            Side::Left => "left",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn delta_and_opposite_cancel() {
        let c = Coord::new(3, 3);
        for side in Side::ALL {
            assert_eq!(c.step(side).step(side.opposite()), c);
        }
    }

    #[test]
    fn between_adjacent_cells() {
        let c = Coord::new(2, 2);
        for side in Side::ALL {
            assert_eq!(Side::between(c, c.step(side)), Some(side));
            // Seen from the neighbor, the facing side is the opposite one.
            assert_eq!(Side::between(c.step(side), c), Some(side.opposite()));
        }
    }

    #[test]
    fn between_rejects_non_adjacent() {
        let c = Coord::new(2, 2);
        assert_eq!(Side::between(c, c), None);
        assert_eq!(Side::between(c, Coord::new(3, 3)), None);
        assert_eq!(Side::between(c, Coord::new(2, 4)), None);
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(Side::Up.to_string(), "up");
        assert_eq!(Side::Left.to_string(), "left");
    }
}
