//! Carve a random maze, route across it, and print the result.

use std::process::ExitCode;

use warren_core::{Coord, MazeCarver};
use warren_paths::find_path;

const WIDTH: i32 = 16;
const HEIGHT: i32 = 10;

fn main() -> ExitCode {
    let mut carver = MazeCarver::new(WIDTH, HEIGHT, rand::rng());
    carver.carve_from(Coord::ZERO);
    carver.braid(0.15);
    let grid = carver.grid;

    let start = Coord::ZERO;
    let goal = Coord::new(WIDTH - 1, HEIGHT - 1);
    let path = match find_path(&grid, start, goal) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("maze: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Overlay the route on the text rendering: cells and the edges
    // between consecutive route cells.
    let mut rows: Vec<Vec<char>> = grid.to_text().lines().map(|l| l.chars().collect()).collect();
    for &cell in &path {
        rows[(2 * cell.y + 1) as usize][(2 * cell.x + 1) as usize] = '*';
    }
    for pair in path.windows(2) {
        let row = (pair[0].y + pair[1].y + 1) as usize;
        let col = (pair[0].x + pair[1].x + 1) as usize;
        rows[row][col] = '*';
    }
    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }

    let end = path.last().copied().unwrap_or(start);
    if end == goal {
        println!("route from {start} to {goal}: {} cells", path.len());
        ExitCode::SUCCESS
    } else {
        println!("no full route to {goal}; closest approach is {end}");
        ExitCode::FAILURE
    }
}
