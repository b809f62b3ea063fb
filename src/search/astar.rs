use std::collections::BinaryHeap;

use log::debug;

use crate::error::Result;
use crate::search::{
    manhattan, reconstruct_path, validate_endpoints, Grid, PriorityEntry, SearchResult, TraceEvent,
};

/// A* over the grid, guided by the Manhattan distance to the finish.
///
/// The open set is keyed by `f = g + h` where `g` is the distance from the
/// start and `h` the Manhattan heuristic (admissible on a 4-connected grid
/// with unit edges, so the found path is optimal). Nodes become closed when
/// popped; a neighbor's record is updated whenever a lower tentative `g` is
/// found. Dequeuing the finish ends the search.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the grid
/// is empty or either endpoint is out of bounds or a wall.
///
/// # Example
///
/// ```
/// use algoviz::search::{astar, dijkstra, Grid};
///
/// let mut grid = Grid::new(8, 8);
/// for col in 0..7 {
///     grid.set_wall(3, col, true);
/// }
/// let astar_result = astar::search(&mut grid, (0, 0), (7, 0)).unwrap();
/// let mut fresh = Grid::new(8, 8);
/// for col in 0..7 {
///     fresh.set_wall(3, col, true);
/// }
/// let dijkstra_result = dijkstra::search(&mut fresh, (0, 0), (7, 0)).unwrap();
/// assert_eq!(astar_result.path.len(), dijkstra_result.path.len());
/// ```
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
        node.f_score = start_h;
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
            if node.visited || entry.key > node.f_score {
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

        let tentative = distance + 1;
        for neighbor in grid.open_neighbors(entry.idx) {
            let (nrow, ncol) = {
                let node = grid.node_at(neighbor);
                if node.visited || tentative >= node.distance {
                    continue;
                }
                (node.row, node.col)
            };
            let heuristic = manhattan((nrow, ncol), finish);
            let f_score = tentative + heuristic;
            let node = grid.node_at_mut(neighbor);
            node.distance = tentative;
            node.heuristic = heuristic;
            node.f_score = f_score;
            node.previous = Some(entry.idx);
            trace.push(TraceEvent::Update {
                node: (nrow, ncol),
                distance: tentative,
                previous: (entry.row, entry.col),
            });
            open.push(PriorityEntry {
                key: f_score,
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
        "astar: explored {} of {} nodes, path length {}",
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
