//! Best-first route search.

use std::collections::BinaryHeap;

use warren_core::{Coord, Side};

use crate::distance::euclidean;
use crate::error::PathError;
use crate::frontier::{NO_PARENT, Node, OpenEntry};
use crate::traits::WallMap;

/// Find a route from `start` to `goal` across `map`.
///
/// Returns the cells of the route in order, `start` first. When the
/// goal is reachable, the route ends at `goal` and is a shortest path
/// under the Euclidean step metric. When it is not, the route ends at
/// the explored cell with the smallest heuristic distance to the goal:
/// a degraded result, not an error. Callers must treat a route whose
/// last cell differs from `goal` as a failed or partial pathfind.
///
/// Fails fast with [`PathError::OutOfBounds`] when either endpoint lies
/// outside the map. The map is only read; each call owns all of its
/// search state, so concurrent calls over one shared map are fine.
pub fn find_path<M: WallMap>(map: &M, start: Coord, goal: Coord) -> Result<Vec<Coord>, PathError> {
    search(map, start, goal, usize::MAX)
}

/// [`find_path`] under an expansion budget.
///
/// At most `max_pops` cells are finalized; once the budget is spent the
/// search stops and reconstructs from the best cell seen so far, exactly
/// as if the frontier had been exhausted. A budget covering the whole
/// grid behaves identically to [`find_path`].
pub fn find_path_bounded<M: WallMap>(
    map: &M,
    start: Coord,
    goal: Coord,
    max_pops: usize,
) -> Result<Vec<Coord>, PathError> {
    search(map, start, goal, max_pops)
}

fn search<M: WallMap>(
    map: &M,
    start: Coord,
    goal: Coord,
    max_pops: usize,
) -> Result<Vec<Coord>, PathError> {
    if !map.contains(start) {
        return Err(PathError::OutOfBounds { pos: start });
    }
    if !map.contains(goal) {
        return Err(PathError::OutOfBounds { pos: goal });
    }
    if start == goal {
        return Ok(vec![start]);
    }

    let size = map.size();
    let width = size.x;
    let idx = |c: Coord| (c.y * width + c.x) as usize;
    let at = |i: usize| Coord::new(i as i32 % width, i as i32 / width);

    // Per-call arena: one slot per cell, parents stored as indices.
    let mut nodes: Vec<Node> = vec![Node::default(); (size.x * size.y) as usize];
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    let start_idx = idx(start);
    let goal_idx = idx(goal);
    nodes[start_idx].g = 0.0;
    nodes[start_idx].h = euclidean(start, goal);
    open.push(OpenEntry {
        f: nodes[start_idx].h,
        seq,
        idx: start_idx,
    });

    // Best finalized cell by heuristic, for the no-path fallback.
    // Strict `<` keeps the earliest-closed cell on ties.
    let mut best_idx = start_idx;
    let mut best_h = nodes[start_idx].h;

    let mut nbuf: Vec<Coord> = Vec::with_capacity(4);
    let mut pops = 0usize;

    let found = loop {
        if pops >= max_pops {
            break false;
        }
        let Some(current) = open.pop() else {
            break false;
        };
        let ci = current.idx;
        if nodes[ci].closed {
            // Stale entry: the cell was already finalized through a
            // cheaper route.
            continue;
        }
        if ci == goal_idx {
            break true;
        }

        nodes[ci].closed = true;
        pops += 1;
        if nodes[ci].h < best_h {
            best_h = nodes[ci].h;
            best_idx = ci;
        }

        let current_pos = at(ci);
        let current_g = nodes[ci].g;

        nbuf.clear();
        map.neighbors(current_pos, &mut nbuf);

        for &next in nbuf.iter() {
            if !map.contains(next) {
                continue;
            }
            let ni = idx(next);
            if nodes[ni].closed {
                continue;
            }
            // Wall rule: inspect the side of the *neighbor* cell that
            // faces back toward the current cell.
            let Some(back) = Side::between(next, current_pos) else {
                continue;
            };
            if map.has_wall(next, back) {
                continue;
            }

            let tentative = current_g + euclidean(current_pos, next);
            if tentative < nodes[ni].g {
                nodes[ni].g = tentative;
                nodes[ni].h = euclidean(next, goal);
                nodes[ni].parent = ci;
                seq += 1;
                open.push(OpenEntry {
                    f: tentative + nodes[ni].h,
                    seq,
                    idx: ni,
                });
            }
        }
    };

    let terminal = if found { goal_idx } else { best_idx };
    Ok(reconstruct(&nodes, terminal, width))
}

/// Walk parent indices from `terminal` back to the start and return the
/// route in forward order.
///
/// The walk reads an immutable arena snapshot and is capped at the arena
/// size, so it terminates in at most N steps for N cells regardless of
/// the state of the parent relation.
fn reconstruct(nodes: &[Node], terminal: usize, width: i32) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut ci = terminal;
    while ci != NO_PARENT && path.len() <= nodes.len() {
        path.push(Coord::new(ci as i32 % width, ci as i32 / width));
        ci = nodes[ci].parent;
    }
    path.reverse();
    path
}
