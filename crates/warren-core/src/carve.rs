//! Maze carving.
//!
//! Produces wall layouts for demos and test fixtures. The search engine
//! never depends on this module; it only ever reads the resulting grid.

use rand::{Rng, RngExt};

use crate::coord::Coord;
use crate::grid::WallGrid;
use crate::side::Side;

/// Depth-first maze carver operating on a [`WallGrid`].
pub struct MazeCarver<R: Rng> {
    pub rng: R,
    pub grid: WallGrid,
}

impl<R: Rng> MazeCarver<R> {
    /// Create a carver over a fully-walled grid of the given size.
    pub fn new(width: i32, height: i32, rng: R) -> Self {
        Self {
            rng,
            grid: WallGrid::walled(width, height),
        }
    }

    /// Carve a perfect maze with an iterative depth-first backtracker,
    /// starting at `start`.
    ///
    /// Opens shared edges only, so passages are two-way. Afterwards every
    /// cell is reachable from every other cell through exactly one route.
    /// Returns the number of cells carved (0 if `start` is out of
    /// bounds).
    pub fn carve_from(&mut self, start: Coord) -> usize {
        if !self.grid.contains(start) {
            return 0;
        }
        let width = self.grid.width();
        let idx = |c: Coord| (c.y * width + c.x) as usize;

        let mut seen = vec![false; (width * self.grid.height()) as usize];
        let mut stack = vec![start];
        seen[idx(start)] = true;
        let mut carved = 1usize;

        while let Some(&cur) = stack.last() {
            // Sides leading to unvisited in-bounds cells.
            let mut options = [Side::Up; 4];
            let mut n = 0;
            for side in Side::ALL {
                let next = cur.step(side);
                if self.grid.contains(next) && !seen[idx(next)] {
                    options[n] = side;
                    n += 1;
                }
            }
            if n == 0 {
                stack.pop();
                continue;
            }
            let side = options[self.rng.random_range(0..n)];
            let next = cur.step(side);
            self.grid.open_edge(cur, side);
            seen[idx(next)] = true;
            carved += 1;
            stack.push(next);
        }

        log::debug!("carved {carved} cells from {start}");
        carved
    }

    /// Open a share of the dead ends, braiding loops into a perfect
    /// maze.
    ///
    /// Each dead-end cell (exactly one open side) has probability `pct`
    /// of getting one of its interior walls knocked open. Returns the
    /// number of edges opened.
    pub fn braid(&mut self, pct: f64) -> usize {
        let mut opened = 0usize;
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let c = Coord::new(x, y);
                let open_sides = Side::ALL
                    .iter()
                    .filter(|&&s| !self.grid.has_wall(c, s))
                    .count();
                if open_sides != 1 {
                    continue;
                }
                let roll: f64 = self.rng.random();
                if roll >= pct {
                    continue;
                }
                // Walled sides with an in-bounds cell behind them.
                let mut options = [Side::Up; 4];
                let mut n = 0;
                for side in Side::ALL {
                    if self.grid.has_wall(c, side) && self.grid.contains(c.step(side)) {
                        options[n] = side;
                        n += 1;
                    }
                }
                if n == 0 {
                    continue;
                }
                self.grid.open_edge(c, options[self.rng.random_range(0..n)]);
                opened += 1;
            }
        }
        log::debug!("braided {opened} dead ends");
        opened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cells reachable from `start` under the directional wall rule.
    fn reachable(grid: &WallGrid, start: Coord) -> usize {
        let width = grid.width();
        let idx = |c: Coord| (c.y * width + c.x) as usize;
        let mut seen = vec![false; (width * grid.height()) as usize];
        let mut stack = vec![start];
        seen[idx(start)] = true;
        let mut buf = Vec::new();
        let mut count = 0;
        while let Some(cur) = stack.pop() {
            count += 1;
            buf.clear();
            grid.neighbors(cur, &mut buf);
            for &next in &buf {
                let Some(back) = Side::between(next, cur) else {
                    continue;
                };
                if grid.has_wall(next, back) || seen[idx(next)] {
                    continue;
                }
                seen[idx(next)] = true;
                stack.push(next);
            }
        }
        count
    }

    #[test]
    fn carve_reaches_every_cell() {
        let mut carver = MazeCarver::new(12, 9, rand::rng());
        let carved = carver.carve_from(Coord::new(3, 3));
        assert_eq!(carved, 12 * 9);
        assert_eq!(reachable(&carver.grid, Coord::ZERO), 12 * 9);
    }

    #[test]
    fn carve_keeps_the_border_walled() {
        let mut carver = MazeCarver::new(6, 6, rand::rng());
        carver.carve_from(Coord::ZERO);
        for x in 0..6 {
            assert!(carver.grid.has_wall(Coord::new(x, 0), Side::Up));
            assert!(carver.grid.has_wall(Coord::new(x, 5), Side::Down));
        }
        for y in 0..6 {
            assert!(carver.grid.has_wall(Coord::new(0, y), Side::Left));
            assert!(carver.grid.has_wall(Coord::new(5, y), Side::Right));
        }
    }

    #[test]
    fn carve_out_of_bounds_start_is_a_no_op() {
        let mut carver = MazeCarver::new(4, 4, rand::rng());
        assert_eq!(carver.carve_from(Coord::new(10, 10)), 0);
        assert_eq!(carver.grid, WallGrid::walled(4, 4));
    }

    #[test]
    fn braid_only_removes_walls() {
        let mut carver = MazeCarver::new(10, 10, rand::rng());
        carver.carve_from(Coord::ZERO);
        let before = wall_count(&carver.grid);
        let opened = carver.braid(1.0);
        assert!(opened > 0); // a perfect maze of this size has dead ends
        assert!(wall_count(&carver.grid) < before);
        // Still fully connected; braiding never closes anything.
        assert_eq!(reachable(&carver.grid, Coord::ZERO), 100);
    }

    fn wall_count(grid: &WallGrid) -> usize {
        let mut n = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let c = Coord::new(x, y);
                n += Side::ALL.iter().filter(|&&s| grid.has_wall(c, s)).count();
            }
        }
        n
    }
}
