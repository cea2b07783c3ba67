//! Route search for grids with walled edges.
//!
//! This crate implements best-first (A\*) pathfinding over rectangular
//! grids whose cell edges may be individually walled off:
//!
//! - [`find_path`] — shortest wall-respecting route between two cells,
//!   degrading to a closest-approach route when the goal is sealed off
//! - [`find_path_bounded`] — the same search under an expansion budget
//!
//! The engine sees the world through the [`WallMap`] trait and keeps no
//! state between calls: any type exposing sizes, neighbor enumeration,
//! and per-side wall queries can be searched, and a map shared behind
//! `&` can serve concurrent searches.
//!
//! Walls are directional. The move from one cell to the next is blocked
//! only by a wall on the side of the *destination* cell that faces back
//! toward the origin, so one-sided wall configurations behave as
//! one-way passages.

mod astar;
mod distance;
mod error;
mod frontier;
mod traits;

pub use astar::{find_path, find_path_bounded};
pub use distance::euclidean;
pub use error::PathError;
pub use traits::WallMap;
