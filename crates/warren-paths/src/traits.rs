use warren_core::{Coord, Side, WallGrid};

/// Read-only view of a walled grid, as seen by the search.
///
/// Implementations promise that [`neighbors`](Self::neighbors) yields
/// only in-bounds, orthogonally adjacent coordinates, and that walls are
/// *not* filtered out there; applying the wall rule is the search's
/// job. All access goes through `&self`, so a map shared behind a plain
/// reference can serve concurrent searches on independent threads.
pub trait WallMap {
    /// Grid dimensions as (width, height).
    fn size(&self) -> Coord;

    /// Append the in-bounds orthogonal neighbors of `c` to `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);

    /// Whether the given side of the cell at `c` is walled off.
    fn has_wall(&self, c: Coord, side: Side) -> bool;

    /// Whether `c` lies inside the grid.
    fn contains(&self, c: Coord) -> bool {
        let size = self.size();
        c.x >= 0 && c.x < size.x && c.y >= 0 && c.y < size.y
    }
}

impl WallMap for WallGrid {
    fn size(&self) -> Coord {
        WallGrid::size(self)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        WallGrid::neighbors(self, c, buf);
    }

    fn has_wall(&self, c: Coord, side: Side) -> bool {
        WallGrid::has_wall(self, c, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_contains_matches_the_grid() {
        let grid = WallGrid::new(4, 2);
        for y in -1..3 {
            for x in -1..5 {
                let c = Coord::new(x, y);
                assert_eq!(WallMap::contains(&grid, c), grid.contains(c));
            }
        }
    }

    #[test]
    fn maps_are_shareable_across_threads() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<WallGrid>();
    }
}
