use log::debug;
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::maze::{random_endpoints, validate_dims, Direction, GeneratedMaze, Maze, MazeEvent};

/// Generates a maze with randomized Prim's algorithm and the thread RNG.
///
/// Growth starts from one random in-maze cell whose incident walls seed the
/// frontier. Each step removes a uniformly random wall from the frontier;
/// if the far cell is not yet in the maze, the wall is carved, the cell
/// joins, and its own incident walls enter the frontier. Walls to cells
/// already in the maze are discarded. The frontier draining empty means
/// every cell has joined.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) when `rows`
/// or `cols` is zero.
///
/// # Example
///
/// ```
/// use algoviz::maze::prim;
///
/// let out = prim::generate(10, 10).unwrap();
/// assert_eq!(out.maze.passage_count(), 99);
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
    let mut in_maze = vec![false; rows * cols];

    let origin = (rng.gen_range(0..rows), rng.gen_range(0..cols));
    in_maze[maze.index(origin.0, origin.1)] = true;
    trace.push(MazeEvent::Visit { cell: origin });

    let mut frontier: Vec<((usize, usize), Direction)> = Vec::new();
    push_incident_walls(&maze, origin, &mut frontier);

    while !frontier.is_empty() {
        let (cell, dir) = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        let far = match maze.neighbor(cell, dir) {
            Some(far) => far,
            None => continue,
        };
        if in_maze[maze.index(far.0, far.1)] {
            continue;
        }
        maze.remove_wall(cell, dir);
        in_maze[maze.index(far.0, far.1)] = true;
        trace.push(MazeEvent::Carve {
            from: cell,
            to: far,
        });
        trace.push(MazeEvent::Visit { cell: far });
        push_incident_walls(&maze, far, &mut frontier);
    }

    let (start, end) = random_endpoints(rows, cols, rng);
    maze.start = start;
    maze.end = end;
    trace.push(MazeEvent::Complete);
    debug!(
        "prim: {}x{} maze, {} passages",
        rows,
        cols,
        maze.passage_count()
    );

    Ok(GeneratedMaze { maze, trace })
}

/// Adds `cell`'s walls toward in-bounds neighbors to the frontier.
fn push_incident_walls(
    maze: &Maze,
    cell: (usize, usize),
    frontier: &mut Vec<((usize, usize), Direction)>,
) {
    for dir in Direction::ALL {
        if maze.neighbor(cell, dir).is_some() {
            frontier.push((cell, dir));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanning_tree() {
        let out = generate_seeded(13, 8, 9).unwrap();
        assert_eq!(out.maze.passage_count(), 13 * 8 - 1);
        assert_eq!(out.maze.reachable_from((12, 7)), 13 * 8);
    }

    #[test]
    fn test_visits_cover_all_cells() {
        let out = generate_seeded(9, 9, 40).unwrap();
        let mut visits: Vec<(usize, usize)> = out
            .trace
            .iter()
            .filter_map(|event| match event {
                MazeEvent::Visit { cell } => Some(*cell),
                _ => None,
            })
            .collect();
        visits.sort_unstable();
        visits.dedup();
        assert_eq!(visits.len(), 81);
    }

    #[test]
    fn test_single_row() {
        // Degenerate corridor: only one possible maze.
        let out = generate_seeded(1, 10, 6).unwrap();
        assert_eq!(out.maze.passage_count(), 9);
        for col in 0..9 {
            assert!(out.maze.connected((0, col), Direction::East));
        }
    }

    #[test]
    fn test_reproducible_under_seed() {
        let first = generate_seeded(10, 10, 123).unwrap();
        let second = generate_seeded(10, 10, 123).unwrap();
        assert_eq!(first.maze, second.maze);
    }
}
