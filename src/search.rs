//! Pathfinding over a wall-blocked 2D grid.
//!
//! Five strategies share one contract: `search(grid, start, finish)` runs
//! synchronously to completion over a 4-connected [`Grid`] (up, right, down,
//! left; no diagonals), skipping wall nodes entirely, and returns a
//! [`SearchResult`] — the visitation order, the reconstructed path, and an
//! ordered [`TraceEvent`] log for replay.
//!
//! - [`dijkstra`] — uniform-cost, optimal
//! - [`astar`] — Manhattan-guided, optimal
//! - [`bfs`] — level-order, optimal in the unweighted grid
//! - [`dfs`] — branch-to-exhaustion, not optimal
//! - [`greedy`] — heuristic-only best-first, not optimal
//!
//! Searches mutate node state ([`Node::distance`], [`Node::previous`],
//! [`Node::visited`]) in place. A grid carries the scratch of at most one
//! run: call [`Grid::reset`] before reusing it.
//!
//! An unreachable finish is a first-class outcome (`path_found == false`,
//! empty path), never an error. Errors are reserved for precondition
//! violations: an empty grid, or a start/finish that is out of bounds or a
//! wall.

use std::cmp::Ordering;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod greedy;
pub mod grid;

pub use grid::{Grid, Node, INFINITY};

use crate::error::{Error, Result};

/// One step of a search, recorded in strict chronological order. The trace
/// is observational only; replaying or discarding it never changes the
/// search outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A node was taken out of the frontier and finalized. `explored` is the
    /// running count of visited nodes, for progress display.
    Visit {
        node: (usize, usize),
        distance: u32,
        explored: usize,
    },
    /// A neighbor's tentative distance and back-pointer were improved.
    Update {
        node: (usize, usize),
        distance: u32,
        previous: (usize, usize),
    },
    /// The search ended. Always the final event.
    Complete { path_found: bool, explored: usize },
}

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Nodes in the order they were visited.
    pub visited_order: Vec<(usize, usize)>,
    /// Start-to-finish path, empty when the finish is unreachable.
    pub path: Vec<(usize, usize)>,
    pub path_found: bool,
    /// Number of nodes transitioned to visited.
    pub nodes_explored: usize,
    pub trace: Vec<TraceEvent>,
}

/// Manhattan distance between two grid positions: `|Δrow| + |Δcol|`.
pub fn manhattan(a: (usize, usize), b: (usize, usize)) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

/// Open-set entry for the priority-driven searches (Dijkstra, A*, Greedy).
///
/// Ordered by (key, row, col) and reversed so a `BinaryHeap` pops the lowest
/// key first; among equal keys the lowest row, then the lowest column, wins.
/// This replaces the tie-breaking the original left to sort stability with
/// an explicit, reproducible rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PriorityEntry {
    pub key: u32,
    pub row: usize,
    pub col: usize,
    pub idx: usize,
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.key, other.row, other.col).cmp(&(self.key, self.row, self.col))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Checks the shared preconditions and returns the flat arena indices of
/// start and finish.
pub(crate) fn validate_endpoints(
    grid: &Grid,
    start: (usize, usize),
    finish: (usize, usize),
) -> Result<(usize, usize)> {
    if grid.is_empty() {
        return Err(Error::invalid_input("grid has no nodes"));
    }
    for (name, (row, col)) in [("start", start), ("finish", finish)] {
        if !grid.contains(row, col) {
            return Err(Error::invalid_input(format!(
                "{} ({}, {}) is out of bounds for {}x{}",
                name,
                row,
                col,
                grid.rows(),
                grid.cols()
            )));
        }
        if grid.is_wall(row, col) {
            return Err(Error::invalid_input(format!(
                "{} ({}, {}) is a wall",
                name, row, col
            )));
        }
    }
    Ok((grid.index(start.0, start.1), grid.index(finish.0, finish.1)))
}

/// Rebuilds the start-to-finish path by following `previous` back-pointers
/// from the finish node, then reversing.
pub(crate) fn reconstruct_path(grid: &Grid, finish: usize) -> Vec<(usize, usize)> {
    let mut path = Vec::new();
    let mut current = Some(finish);
    while let Some(idx) = current {
        let node = grid.node_at(idx);
        path.push((node.row, node.col));
        current = node.previous;
    }
    path.reverse();
    path
}
