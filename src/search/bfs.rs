use std::collections::VecDeque;

use log::debug;

use crate::error::Result;
use crate::search::{reconstruct_path, validate_endpoints, Grid, SearchResult, TraceEvent};

/// Breadth-first search over the grid.
///
/// A FIFO queue explores the grid level by level, which in an unweighted
/// 4-connected grid yields a shortest path. Nodes are marked at enqueue
/// time so no node enters the queue twice; the [`TraceEvent::Visit`] for a
/// node is still emitted when it is dequeued, matching the order a viewer
/// watches the frontier expand.
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

    {
        let node = grid.node_at_mut(start_idx);
        node.distance = 0;
        node.visited = true;
    }
    let mut queue = VecDeque::new();
    queue.push_back(start_idx);

    while let Some(idx) = queue.pop_front() {
        let (row, col, distance) = {
            let node = grid.node_at(idx);
            (node.row, node.col, node.distance)
        };
        explored += 1;
        visited_order.push((row, col));
        trace.push(TraceEvent::Visit {
            node: (row, col),
            distance,
            explored,
        });

        if idx == finish_idx {
            found = true;
            break;
        }

        for neighbor in grid.open_neighbors(idx) {
            if grid.node_at(neighbor).visited {
                continue;
            }
            let node = grid.node_at_mut(neighbor);
            node.visited = true;
            node.distance = distance + 1;
            node.previous = Some(idx);
            let pos = node.pos();
            trace.push(TraceEvent::Update {
                node: pos,
                distance: distance + 1,
                previous: (row, col),
            });
            queue.push_back(neighbor);
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
        "bfs: explored {} of {} nodes, path length {}",
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
