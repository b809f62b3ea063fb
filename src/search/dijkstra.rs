use std::collections::BinaryHeap;

use log::debug;

use crate::error::Result;
use crate::search::{
    reconstruct_path, validate_endpoints, Grid, PriorityEntry, SearchResult, TraceEvent,
};

/// Dijkstra's algorithm over the grid, with every edge at weight 1.
///
/// The frontier is a binary min-heap keyed by tentative distance (ties:
/// lowest row, then column), with lazy deletion — stale entries are skipped
/// when popped. Popping the finish node ends the search; the finish is
/// unreachable when the heap drains first.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the grid
/// is empty or either endpoint is out of bounds or a wall.
///
/// # Example
///
/// ```
/// use algoviz::search::{dijkstra, Grid};
///
/// let mut grid = Grid::new(5, 5);
/// grid.set_wall(2, 1, true);
/// grid.set_wall(2, 2, true);
/// let result = dijkstra::search(&mut grid, (0, 0), (4, 4)).unwrap();
/// assert!(result.path_found);
/// assert_eq!(result.path.len(), 9);
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

    grid.node_at_mut(start_idx).distance = 0;
    let mut heap = BinaryHeap::new();
    heap.push(PriorityEntry {
        key: 0,
        row: start.0,
        col: start.1,
        idx: start_idx,
    });

    while let Some(entry) = heap.pop() {
        {
            let node = grid.node_at(entry.idx);
            if node.visited || entry.key > node.distance {
                continue;
            }
        }
        grid.node_at_mut(entry.idx).visited = true;
        explored += 1;
        visited_order.push((entry.row, entry.col));
        trace.push(TraceEvent::Visit {
            node: (entry.row, entry.col),
            distance: entry.key,
            explored,
        });

        if entry.idx == finish_idx {
            found = true;
            break;
        }

        let next_distance = entry.key + 1;
        for neighbor in grid.open_neighbors(entry.idx) {
            let (nrow, ncol) = {
                let node = grid.node_at(neighbor);
                if node.visited || next_distance >= node.distance {
                    continue;
                }
                (node.row, node.col)
            };
            let node = grid.node_at_mut(neighbor);
            node.distance = next_distance;
            node.previous = Some(entry.idx);
            trace.push(TraceEvent::Update {
                node: (nrow, ncol),
                distance: next_distance,
                previous: (entry.row, entry.col),
            });
            heap.push(PriorityEntry {
                key: next_distance,
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
        "dijkstra: explored {} of {} nodes, path length {}",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_line() {
        let mut grid = Grid::new(1, 6);
        let result = search(&mut grid, (0, 0), (0, 5)).unwrap();
        assert!(result.path_found);
        assert_eq!(
            result.path,
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]
        );
        assert_eq!(result.nodes_explored, 6);
    }

    #[test]
    fn test_detour_around_wall() {
        let mut grid = Grid::new(3, 3);
        grid.set_wall(0, 1, true);
        grid.set_wall(1, 1, true);
        let result = search(&mut grid, (0, 0), (0, 2)).unwrap();
        assert!(result.path_found);
        // Forced down, across the bottom row, and back up.
        assert_eq!(result.path.len(), 7);
    }

    #[test]
    fn test_unreachable_reports_not_found() {
        let mut grid = Grid::new(3, 3);
        grid.set_wall(0, 1, true);
        grid.set_wall(1, 1, true);
        grid.set_wall(2, 1, true);
        let result = search(&mut grid, (0, 0), (0, 2)).unwrap();
        assert!(!result.path_found);
        assert!(result.path.is_empty());
        assert_eq!(result.nodes_explored, 3);
    }

    #[test]
    fn test_tie_break_prefers_lowest_row_then_col() {
        // All four neighbors of the center tie at distance 1; the visit
        // after the center must be the up neighbor.
        let mut grid = Grid::new(3, 3);
        let result = search(&mut grid, (1, 1), (2, 2)).unwrap();
        assert_eq!(result.visited_order[0], (1, 1));
        assert_eq!(result.visited_order[1], (0, 1));
    }

    #[test]
    fn test_terminates_on_finish_pop() {
        // Once the finish pops, no further visits occur.
        let mut grid = Grid::new(5, 5);
        let result = search(&mut grid, (0, 0), (0, 1)).unwrap();
        assert_eq!(result.visited_order.last(), Some(&(0, 1)));
        assert!(result.nodes_explored < 25);
    }
}
