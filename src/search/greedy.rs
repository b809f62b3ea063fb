use std::collections::BinaryHeap;

use log::debug;

use crate::error::Result;
use crate::search::{
    manhattan, reconstruct_path, validate_endpoints, Grid, PriorityEntry, SearchResult, TraceEvent,
    INFINITY,
};

/// Greedy Best-First search over the grid.
///
/// Like A* but the open set is ordered purely by the Manhattan heuristic to
/// the finish, ignoring accumulated path cost — typically fast, never
/// guaranteed optimal. Each node enters the open set at most once, at first
/// discovery.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the grid
/// is empty or either endpoint is out of bounds or a wall.
pub fn search(
    grid: &mut Grid,
    start: (usize, usize),
    finish: (usize, usize),
) -> Result<SearchResult> {
    let (start_idx, finish_idx) = validate_endpoints(grid, start, finish)?;

    let mut trace = Vec::new();
    let mut visited_order = Vec::new();
    let mut explored = 0usize;
    let mut found = false;

    let start_h = manhattan(start, finish);
    {
        let node = grid.node_at_mut(start_idx);
        node.distance = 0;
        node.heuristic = start_h;
    }
    let mut open = BinaryHeap::new();
    open.push(PriorityEntry {
        key: start_h,
        row: start.0,
        col: start.1,
        idx: start_idx,
    });

    while let Some(entry) = open.pop() {
        let distance = {
            let node = grid.node_at(entry.idx);
            if node.visited {
                continue;
            }
            node.distance
        };
        grid.node_at_mut(entry.idx).visited = true;
        explored += 1;
        visited_order.push((entry.row, entry.col));
        trace.push(TraceEvent::Visit {
            node: (entry.row, entry.col),
            distance,
            explored,
        });

        if entry.idx == finish_idx {
            found = true;
            break;
        }

        for neighbor in grid.open_neighbors(entry.idx) {
            let (nrow, ncol) = {
                let node = grid.node_at(neighbor);
                // Already discovered nodes keep their first back-pointer.
                if node.visited || node.distance != INFINITY {
                    continue;
                }
                (node.row, node.col)
            };
            let heuristic = manhattan((nrow, ncol), finish);
            let node = grid.node_at_mut(neighbor);
            node.distance = distance + 1;
            node.heuristic = heuristic;
            node.previous = Some(entry.idx);
            trace.push(TraceEvent::Update {
                node: (nrow, ncol),
                distance: distance + 1,
                previous: (entry.row, entry.col),
            });
            open.push(PriorityEntry {
                key: heuristic,
                row: nrow,
                col: ncol,
                idx: neighbor,
            });
        }
    }

    trace.push(TraceEvent::Complete {
        path_found: found,
        explored,
    });
    let path = if found {
        reconstruct_path(grid, finish_idx)
    } else {
        Vec::new()
    };
    debug!(
        "greedy: explored {} of {} nodes, path length {}",
        explored,
        grid.len(),
        path.len()
    );

    Ok(SearchResult {
        visited_order,
        path,
        path_found: found,
        nodes_explored: explored,
        trace,
    })
}
