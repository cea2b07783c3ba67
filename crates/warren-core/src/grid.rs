//! A rectangular grid with per-side wall flags.

use std::fmt;

use crate::coord::Coord;
use crate::side::Side;

/// Bit assigned to a side in a cell's wall mask.
const fn bit(side: Side) -> u8 {
    match side {
        Side::Up => 0b0001,
        Side::Right => 0b0010,
        Side::Down => 0b0100,
        Side::Left => 0b1000,
    }
}

const ALL_SIDES: u8 = 0b1111;

/// A rectangular grid whose cell edges may be walled off.
///
/// Each cell stores four independent wall flags, one per [`Side`]. The
/// two halves of a shared edge are distinct flags: a wall on one cell's
/// right side says nothing about its neighbor's left side, so one-sided
/// (directional) wall configurations are representable. Use
/// [`close_edge`](Self::close_edge) / [`open_edge`](Self::open_edge) to
/// mutate both halves together.
///
/// The grid is plain owned data and all read access goes through
/// `&self`, so a shared reference can serve concurrent read-only users
/// on independent threads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallGrid {
    width: i32,
    height: i32,
    /// Per-cell wall masks, row-major.
    walls: Vec<u8>,
}

impl WallGrid {
    /// Create an all-open grid (no walls anywhere).
    ///
    /// Non-positive dimensions yield an empty grid containing no
    /// coordinates.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            walls: vec![0; (w * h) as usize],
        }
    }

    /// Create a grid with every cell side walled off.
    pub fn walled(width: i32, height: i32) -> Self {
        let mut grid = Self::new(width, height);
        for mask in grid.walls.iter_mut() {
            *mask = ALL_SIDES;
        }
        grid
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a [`Coord`] (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Coord {
        Coord::new(self.width, self.height)
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.y * self.width + c.x) as usize)
    }

    /// Whether the given side of the cell at `c` is walled off.
    ///
    /// Out-of-bounds coordinates report `true`: the outside world is
    /// walled.
    pub fn has_wall(&self, c: Coord, side: Side) -> bool {
        match self.idx(c) {
            Some(i) => self.walls[i] & bit(side) != 0,
            None => true,
        }
    }

    /// Put up a wall on one side of one cell, leaving the adjacent
    /// cell's facing side untouched. No-op out of bounds.
    pub fn add_wall(&mut self, c: Coord, side: Side) {
        if let Some(i) = self.idx(c) {
            self.walls[i] |= bit(side);
        }
    }

    /// Tear down the wall on one side of one cell. No-op out of bounds.
    pub fn remove_wall(&mut self, c: Coord, side: Side) {
        if let Some(i) = self.idx(c) {
            self.walls[i] &= !bit(side);
        }
    }

    /// Wall off the shared edge between `c` and its neighbor on `side`,
    /// from both sides.
    pub fn close_edge(&mut self, c: Coord, side: Side) {
        self.add_wall(c, side);
        self.add_wall(c.step(side), side.opposite());
    }

    /// Open the shared edge between `c` and its neighbor on `side`,
    /// from both sides.
    pub fn open_edge(&mut self, c: Coord, side: Side) {
        self.remove_wall(c, side);
        self.remove_wall(c.step(side), side.opposite());
    }

    /// Wall off every side that faces out of the grid.
    pub fn wall_in_border(&mut self) {
        for x in 0..self.width {
            self.add_wall(Coord::new(x, 0), Side::Up);
            self.add_wall(Coord::new(x, self.height - 1), Side::Down);
        }
        for y in 0..self.height {
            self.add_wall(Coord::new(0, y), Side::Left);
            self.add_wall(Coord::new(self.width - 1, y), Side::Right);
        }
    }

    /// Append the in-bounds orthogonal neighbors of `c` to `buf`, in
    /// [`Side::ALL`] order.
    ///
    /// Walls are not consulted here; filtering blocked edges is the
    /// caller's concern.
    pub fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        if !self.contains(c) {
            return;
        }
        for side in Side::ALL {
            let n = c.step(side);
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Text fixtures
    // -----------------------------------------------------------------------

    /// Parse a grid from maze notation.
    ///
    /// The template is `(2w+1) × (2h+1)` characters: odd rows/columns are
    /// cells, the characters between them are edges, and the remaining
    /// positions are corners. `#` marks a walled edge, `.` or space an
    /// open one. Edges parse onto **both** adjacent cells, so the text
    /// form always describes two-sided walls.
    ///
    /// ```
    /// # use warren_core::{Coord, Side, WallGrid};
    /// let grid = WallGrid::from_text("#####\n#.#.#\n#.#.#\n#...#\n#####").unwrap();
    /// assert_eq!(grid.size(), Coord::new(2, 2));
    /// assert!(grid.has_wall(Coord::new(0, 0), Side::Right));
    /// assert!(!grid.has_wall(Coord::new(0, 1), Side::Right));
    /// ```
    pub fn from_text(s: &str) -> Result<Self, GridError> {
        let lines: Vec<Vec<char>> = s.lines().map(|l| l.chars().collect()).collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.len());
        for (i, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::RaggedTemplate { line: i });
            }
        }
        if rows < 3 || cols < 3 || rows % 2 == 0 || cols % 2 == 0 {
            return Err(GridError::BadDimensions {
                width: cols,
                height: rows,
            });
        }

        let mut grid = WallGrid::new((cols / 2) as i32, (rows / 2) as i32);
        for (r, line) in lines.iter().enumerate() {
            for (col, &ch) in line.iter().enumerate() {
                let open = match ch {
                    '.' | ' ' => true,
                    '#' => false,
                    _ => {
                        return Err(GridError::InvalidGlyph {
                            ch,
                            pos: Coord::new(col as i32, r as i32),
                        });
                    }
                };
                if open {
                    continue;
                }
                let cell = Coord::new((col / 2) as i32, (r / 2) as i32);
                match (col % 2 == 1, r % 2 == 1) {
                    // Walled edge above a cell: also the Down side of the
                    // cell one row up (no-op when that is off-grid).
                    (true, false) => {
                        grid.add_wall(cell, Side::Up);
                        grid.add_wall(cell.step(Side::Up), Side::Down);
                    }
                    // Walled edge left of a cell.
                    (false, true) => {
                        grid.add_wall(cell, Side::Left);
                        grid.add_wall(cell.step(Side::Left), Side::Right);
                    }
                    // Cells and corners carry no wall information.
                    _ => {}
                }
            }
        }
        Ok(grid)
    }

    /// Render the grid in the notation accepted by
    /// [`from_text`](Self::from_text).
    ///
    /// An edge renders walled when *either* adjacent side is walled, so
    /// one-sided walls come out two-sided; grid-boundary edges always
    /// render walled (the outside is walled).
    pub fn to_text(&self) -> String {
        let rows = 2 * self.height + 1;
        let cols = 2 * self.width + 1;
        let mut out = String::with_capacity((rows * (cols + 1)) as usize);
        for r in 0..rows {
            for col in 0..cols {
                let cell = Coord::new(col / 2, r / 2);
                let ch = match (col % 2 == 1, r % 2 == 1) {
                    (true, true) => '.',
                    (false, false) => '#',
                    (true, false) => {
                        let above = cell.step(Side::Up);
                        if self.has_wall(cell, Side::Up) || self.has_wall(above, Side::Down) {
                            '#'
                        } else {
                            '.'
                        }
                    }
                    (false, true) => {
                        let left = cell.step(Side::Left);
                        if self.has_wall(cell, Side::Left) || self.has_wall(left, Side::Right) {
                            '#'
                        } else {
                            '.'
                        }
                    }
                };
                out.push(ch);
            }
            if r < rows - 1 {
                out.push('\n');
            }
        }
        out
    }
}

/// Errors that can occur when parsing a grid template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A template line has a different width than the first line.
    RaggedTemplate { line: usize },
    /// Template dimensions are not of the `(2w+1) × (2h+1)` form.
    BadDimensions { width: usize, height: usize },
    /// A character outside the `#`/`.`/space set was found.
    InvalidGlyph { ch: char, pos: Coord },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedTemplate { line } => {
                write!(f, "grid template line {line} has a different width")
            }
            Self::BadDimensions { width, height } => {
                write!(
                    f,
                    "grid template must be (2w+1) x (2h+1) characters, got {width} x {height}"
                )
            }
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "invalid glyph {ch:?} at template position {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn wall_grid_round_trip() {
        let mut g = WallGrid::new(3, 2);
        g.close_edge(Coord::new(1, 0), Side::Down);
        g.add_wall(Coord::new(2, 1), Side::Left);
        let json = serde_json::to_string(&g).unwrap();
        let back: WallGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
