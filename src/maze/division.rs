use log::debug;
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::maze::{validate_dims, Direction, GeneratedMaze, Maze, MazeEvent};

/// A rectangular region still to be subdivided.
#[derive(Debug, Clone, Copy)]
struct Chamber {
    row: usize,
    col: usize,
    height: usize,
    width: usize,
}

/// Generates a maze by recursive division with the thread RNG.
///
/// The grid starts fully open inside a walled boundary. An explicit work
/// stack subdivides each chamber with a straight wall pierced by exactly
/// one randomly placed gap, splitting it into two sub-chambers that are
/// pushed back for further division. The split runs across the longer axis
/// — forced once one axis exceeds twice the other, random otherwise — and
/// chambers under 2 cells in both axes are left alone. Every split keeps
/// the two halves connected through its gap, so the finished maze has
/// exactly one simple path between any two cells.
///
/// Start is the top-left cell and end the bottom-right cell, on opposite
/// corners of the perimeter.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) when `rows`
/// or `cols` is zero.
///
/// # Example
///
/// ```
/// use algoviz::maze::division;
///
/// let out = division::generate(10, 14).unwrap();
/// assert_eq!(out.maze.start, (0, 0));
/// assert_eq!(out.maze.end, (9, 13));
/// assert_eq!(out.maze.reachable_from(out.maze.start), 140);
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

    let mut maze = Maze::open_interior(rows, cols);
    let mut trace = Vec::new();

    let mut stack = vec![Chamber {
        row: 0,
        col: 0,
        height: rows,
        width: cols,
    }];

    while let Some(chamber) = stack.pop() {
        let can_split_rows = chamber.height >= 2;
        let can_split_cols = chamber.width >= 2;
        let horizontal = match (can_split_rows, can_split_cols) {
            (false, false) => continue,
            (true, false) => true,
            (false, true) => false,
            (true, true) => {
                if chamber.height > 2 * chamber.width {
                    true
                } else if chamber.width > 2 * chamber.height {
                    false
                } else {
                    rng.gen_bool(0.5)
                }
            }
        };

        if horizontal {
            // Wall between wall_row and wall_row + 1, gap at one column.
            let wall_row = chamber.row + rng.gen_range(0..chamber.height - 1);
            let gap_col = chamber.col + rng.gen_range(0..chamber.width);
            for col in chamber.col..chamber.col + chamber.width {
                if col == gap_col {
                    continue;
                }
                maze.add_wall((wall_row, col), Direction::South);
                trace.push(MazeEvent::Wall {
                    a: (wall_row, col),
                    b: (wall_row + 1, col),
                });
            }
            let upper_height = wall_row - chamber.row + 1;
            stack.push(Chamber {
                row: chamber.row,
                col: chamber.col,
                height: upper_height,
                width: chamber.width,
            });
            stack.push(Chamber {
                row: wall_row + 1,
                col: chamber.col,
                height: chamber.height - upper_height,
                width: chamber.width,
            });
        } else {
            let wall_col = chamber.col + rng.gen_range(0..chamber.width - 1);
            let gap_row = chamber.row + rng.gen_range(0..chamber.height);
            for row in chamber.row..chamber.row + chamber.height {
                if row == gap_row {
                    continue;
                }
                maze.add_wall((row, wall_col), Direction::East);
                trace.push(MazeEvent::Wall {
                    a: (row, wall_col),
                    b: (row, wall_col + 1),
                });
            }
            let left_width = wall_col - chamber.col + 1;
            stack.push(Chamber {
                row: chamber.row,
                col: chamber.col,
                height: chamber.height,
                width: left_width,
            });
            stack.push(Chamber {
                row: chamber.row,
                col: wall_col + 1,
                height: chamber.height,
                width: chamber.width - left_width,
            });
        }
    }

    maze.start = (0, 0);
    maze.end = (rows - 1, cols - 1);
    debug_assert_eq!(maze.reachable_from(maze.start), rows * cols);
    trace.push(MazeEvent::Complete);
    debug!(
        "division: {}x{} maze, {} passages",
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
    fn test_spanning_tree_by_construction() {
        let out = generate_seeded(12, 12, 4).unwrap();
        assert_eq!(out.maze.passage_count(), 12 * 12 - 1);
        assert_eq!(out.maze.reachable_from((0, 0)), 144);
    }

    #[test]
    fn test_corners_are_start_and_end() {
        let out = generate_seeded(7, 9, 2).unwrap();
        assert_eq!(out.maze.start, (0, 0));
        assert_eq!(out.maze.end, (6, 8));
        assert_eq!(out.maze.reachable_from(out.maze.start), 7 * 9);
    }

    #[test]
    fn test_single_cell_chamber_left_alone() {
        let out = generate_seeded(1, 1, 1).unwrap();
        assert_eq!(out.maze.passage_count(), 0);
        assert_eq!(out.trace, vec![MazeEvent::Complete]);
    }

    #[test]
    fn test_corridor_stays_a_single_path() {
        // A 1xN corridor splits vertically, but each candidate wall spans
        // one row and the gap lands on it, so nothing is ever blocked.
        let out = generate_seeded(1, 12, 8).unwrap();
        assert_eq!(out.maze.reachable_from((0, 0)), 12);
        assert_eq!(out.maze.passage_count(), 11);
    }

    #[test]
    fn test_elongated_chamber_splits_across_long_axis() {
        // 20x3: the first split must be horizontal. The wall events of the
        // first split run along one row with a single gap.
        let out = generate_seeded(20, 3, 13).unwrap();
        let first_wall_row = match out.trace.first() {
            Some(MazeEvent::Wall { a, .. }) => a.0,
            other => panic!("expected a wall event first, got {:?}", other),
        };
        let walls_in_row: Vec<_> = out
            .trace
            .iter()
            .take_while(|e| matches!(e, MazeEvent::Wall { a, .. } if a.0 == first_wall_row))
            .collect();
        assert_eq!(walls_in_row.len(), 2, "3 columns minus one gap");
    }

    #[test]
    fn test_reproducible_under_seed() {
        let first = generate_seeded(9, 14, 55).unwrap();
        let second = generate_seeded(9, 14, 55).unwrap();
        assert_eq!(first.maze, second.maze);
        assert_eq!(first.trace, second.trace);
    }
}
