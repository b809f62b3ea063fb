use log::debug;
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::maze::{random_endpoints, validate_dims, Direction, GeneratedMaze, Maze, MazeEvent};

/// Generates a maze by recursive backtracking with the thread RNG.
///
/// Depth-first carve over an explicit stack: start at a random cell, and at
/// each step pick a uniformly random unvisited neighbor of the top-of-stack
/// cell, carve through the shared wall, and push it; pop when the top cell
/// has no unvisited neighbors left. Every cell is reached, so the result is
/// a spanning tree — the style is long winding corridors with many dead
/// ends.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) when `rows`
/// or `cols` is zero.
///
/// # Example
///
/// ```
/// use algoviz::maze::backtracking;
///
/// let out = backtracking::generate(12, 12).unwrap();
/// assert_eq!(out.maze.passage_count(), 12 * 12 - 1);
/// ```
pub fn generate(rows: usize, cols: usize) -> Result<GeneratedMaze> {
    generate_with(rows, cols, &mut thread_rng())
}

/// Same as [`generate`], seeded for reproducible output.
pub fn generate_seeded(rows: usize, cols: usize, seed: u64) -> Result<GeneratedMaze> {
    generate_with(rows, cols, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// Same as [`generate`], drawing randomness from `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<GeneratedMaze> {
    validate_dims(rows, cols)?;

    let mut maze = Maze::fully_walled(rows, cols);
    let mut trace = Vec::new();
    let mut visited = vec![false; rows * cols];

    let origin = (rng.gen_range(0..rows), rng.gen_range(0..cols));
    visited[maze.index(origin.0, origin.1)] = true;
    trace.push(MazeEvent::Visit { cell: origin });
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let mut candidates: Vec<(Direction, (usize, usize))> = Vec::with_capacity(4);
        for dir in Direction::ALL {
            if let Some(next) = maze.neighbor(current, dir) {
                if !visited[maze.index(next.0, next.1)] {
                    candidates.push((dir, next));
                }
            }
        }

        match candidates.len() {
            0 => {
                stack.pop();
                trace.push(MazeEvent::Backtrack { cell: current });
            }
            n => {
                let (dir, next) = candidates[rng.gen_range(0..n)];
                maze.remove_wall(current, dir);
                visited[maze.index(next.0, next.1)] = true;
                trace.push(MazeEvent::Carve {
                    from: current,
                    to: next,
                });
                trace.push(MazeEvent::Visit { cell: next });
                stack.push(next);
            }
        }
    }

    let (start, end) = random_endpoints(rows, cols, rng);
    maze.start = start;
    maze.end = end;
    trace.push(MazeEvent::Complete);
    debug!(
        "backtracking: {}x{} maze, {} passages",
        rows,
        cols,
        maze.passage_count()
    );

    Ok(GeneratedMaze { maze, trace })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanning_tree() {
        let out = generate_seeded(15, 9, 21).unwrap();
        assert_eq!(out.maze.passage_count(), 15 * 9 - 1);
        assert_eq!(out.maze.reachable_from((7, 4)), 15 * 9);
    }

    #[test]
    fn test_every_cell_visited_exactly_once() {
        let out = generate_seeded(8, 8, 3).unwrap();
        let mut visits: Vec<(usize, usize)> = out
            .trace
            .iter()
            .filter_map(|event| match event {
                MazeEvent::Visit { cell } => Some(*cell),
                _ => None,
            })
            .collect();
        assert_eq!(visits.len(), 64);
        visits.sort_unstable();
        visits.dedup();
        assert_eq!(visits.len(), 64);
    }

    #[test]
    fn test_backtracks_match_visits() {
        // Every pushed cell is eventually popped.
        let out = generate_seeded(6, 6, 11).unwrap();
        let visits = out
            .trace
            .iter()
            .filter(|e| matches!(e, MazeEvent::Visit { .. }))
            .count();
        let backtracks = out
            .trace
            .iter()
            .filter(|e| matches!(e, MazeEvent::Backtrack { .. }))
            .count();
        assert_eq!(visits, backtracks);
    }

    #[test]
    fn test_carves_are_adjacent_cells() {
        let out = generate_seeded(7, 7, 2).unwrap();
        for event in &out.trace {
            if let MazeEvent::Carve { from, to } = event {
                let dr = from.0.abs_diff(to.0);
                let dc = from.1.abs_diff(to.1);
                assert_eq!(dr + dc, 1, "carve between {:?} and {:?}", from, to);
            }
        }
    }
}
