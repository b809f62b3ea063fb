use log::debug;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::maze::{random_endpoints, validate_dims, Direction, GeneratedMaze, Maze, MazeEvent};

/// Disjoint-set forest over cell indices, with union by rank and path
/// compression. Transient: built for one generation run and discarded.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Returns `true` if the sets were disjoint and a union occurred.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        if self.rank[x_root] < self.rank[y_root] {
            self.parent[x_root] = y_root;
        } else if self.rank[x_root] > self.rank[y_root] {
            self.parent[y_root] = x_root;
        } else {
            self.parent[y_root] = x_root;
            self.rank[x_root] += 1;
        }
        true
    }
}

/// Generates a maze with randomized Kruskal's algorithm and the thread RNG.
///
/// The full list of adjacent cell pairs is shuffled uniformly, then scanned
/// once: an edge whose endpoints lie in different components is carved and
/// the components are united; an edge within one component would close a
/// cycle and is skipped. The result is a uniform-random spanning tree
/// subject to the shuffle.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) when `rows`
/// or `cols` is zero.
///
/// # Example
///
/// ```
/// use algoviz::maze::kruskal;
///
/// let out = kruskal::generate(10, 10).unwrap();
/// assert_eq!(out.maze.reachable_from(out.maze.start), 100);
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

    let mut edges: Vec<((usize, usize), Direction)> = Vec::with_capacity(2 * rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            if col + 1 < cols {
                edges.push(((row, col), Direction::East));
            }
            if row + 1 < rows {
                edges.push(((row, col), Direction::South));
            }
        }
    }
    edges.shuffle(rng);

    let mut sets = DisjointSet::new(rows * cols);
    let mut carved = 0usize;
    for (cell, dir) in edges {
        let next = match maze.neighbor(cell, dir) {
            Some(next) => next,
            None => continue,
        };
        let a = maze.index(cell.0, cell.1);
        let b = maze.index(next.0, next.1);
        if sets.union(a, b) {
            maze.remove_wall(cell, dir);
            trace.push(MazeEvent::Carve {
                from: cell,
                to: next,
            });
            carved += 1;
            if carved == rows * cols - 1 {
                break;
            }
        }
    }

    let (start, end) = random_endpoints(rows, cols, rng);
    maze.start = start;
    maze.end = end;
    trace.push(MazeEvent::Complete);
    debug!("kruskal: {}x{} maze, {} passages", rows, cols, carved);

    Ok(GeneratedMaze { maze, trace })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanning_tree() {
        let out = generate_seeded(11, 17, 5).unwrap();
        assert_eq!(out.maze.passage_count(), 11 * 17 - 1);
        assert_eq!(out.maze.reachable_from((0, 0)), 11 * 17);
    }

    #[test]
    fn test_carve_count_is_cells_minus_one() {
        let out = generate_seeded(9, 9, 77).unwrap();
        let carves = out
            .trace
            .iter()
            .filter(|e| matches!(e, MazeEvent::Carve { .. }))
            .count();
        assert_eq!(carves, 80);
    }

    #[test]
    fn test_shuffle_reproducible_under_seed() {
        let first = generate_seeded(10, 10, 31).unwrap();
        let second = generate_seeded(10, 10, 31).unwrap();
        assert_eq!(first.trace, second.trace);
    }

    #[test]
    fn test_union_find_cycle_detection() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 2));
        // All joined now; any further union closes a cycle.
        assert!(!sets.union(0, 3));
        assert_eq!(sets.find(0), sets.find(3));
    }
}
