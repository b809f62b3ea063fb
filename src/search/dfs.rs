use log::debug;

use crate::error::Result;
use crate::search::{reconstruct_path, validate_endpoints, Grid, SearchResult, TraceEvent};

/// Depth-first search over the grid.
///
/// An explicit LIFO stack explores one branch to exhaustion before
/// backtracking; the found path is NOT guaranteed shortest. Nodes are
/// marked visited when popped, and neighbors are pushed in reverse order so
/// the branch explored first follows the natural up, right, down, left
/// sequence. Each stack entry carries the node it was reached from, so the
/// back-pointer is only committed for the entry that actually gets visited.
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

    let mut stack: Vec<(usize, Option<usize>)> = vec![(start_idx, None)];

    while let Some((idx, parent)) = stack.pop() {
        if grid.node_at(idx).visited {
            continue;
        }
        let distance = match parent {
            Some(parent_idx) => grid.node_at(parent_idx).distance + 1,
            None => 0,
        };
        let (row, col) = {
            let node = grid.node_at_mut(idx);
            node.visited = true;
            node.distance = distance;
            node.previous = parent;
            (node.row, node.col)
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

        for neighbor in grid.open_neighbors(idx).into_iter().rev() {
            if !grid.node_at(neighbor).visited {
                stack.push((neighbor, Some(idx)));
            }
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
        "dfs: explored {} of {} nodes, path length {}",
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
    fn test_first_branch_goes_up() {
        // From the center of an open grid, DFS heads up first.
        let mut grid = Grid::new(3, 3);
        let result = search(&mut grid, (1, 1), (2, 2)).unwrap();
        assert_eq!(result.visited_order[0], (1, 1));
        assert_eq!(result.visited_order[1], (0, 1));
    }

    #[test]
    fn test_finds_some_path() {
        let mut grid = Grid::new(4, 4);
        grid.set_wall(1, 1, true);
        grid.set_wall(1, 2, true);
        let result = search(&mut grid, (0, 0), (3, 3)).unwrap();
        assert!(result.path_found);
        assert_eq!(result.path.first(), Some(&(0, 0)));
        assert_eq!(result.path.last(), Some(&(3, 3)));
        for pair in result.path.windows(2) {
            let dr = pair[0].0.abs_diff(pair[1].0);
            let dc = pair[0].1.abs_diff(pair[1].1);
            assert_eq!(dr + dc, 1);
        }
    }

    #[test]
    fn test_path_may_exceed_shortest() {
        // In a 2-row corridor DFS snakes instead of walking straight.
        let mut grid = Grid::new(2, 5);
        let result = search(&mut grid, (0, 0), (0, 4)).unwrap();
        assert!(result.path_found);
        assert!(result.path.len() >= 5);
    }

    #[test]
    fn test_unreachable() {
        let mut grid = Grid::new(3, 3);
        grid.set_wall(0, 1, true);
        grid.set_wall(1, 1, true);
        grid.set_wall(2, 1, true);
        let result = search(&mut grid, (0, 0), (0, 2)).unwrap();
        assert!(!result.path_found);
        assert!(result.path.is_empty());
        assert_eq!(result.nodes_explored, 3);
    }
}
