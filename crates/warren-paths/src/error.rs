use std::fmt;

use warren_core::Coord;

/// Input precondition violations for route queries.
///
/// An unreachable goal is *not* an error: the search reports it
/// structurally, by returning a route that ends short of the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// `start` or `goal` lies outside the map.
    OutOfBounds { pos: Coord },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos } => write!(f, "position {pos} is outside the grid"),
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_position() {
        let err = PathError::OutOfBounds {
            pos: Coord::new(9, -1),
        };
        assert_eq!(err.to_string(), "position (9, -1) is outside the grid");
    }
}
