//! Maze generation over a grid of wall-flagged cells.
//!
//! Four generators share one contract: `generate(rows, cols)` produces a
//! [`GeneratedMaze`] — the finished [`Maze`] plus an ordered [`MazeEvent`]
//! trace for replay. Every generator also comes in a
//! `generate_with(rows, cols, &mut impl Rng)` form taking the random source
//! directly, and a `generate_seeded(rows, cols, seed)` form for
//! reproducible output.
//!
//! - [`backtracking`] — depth-first carve; long winding corridors
//! - [`kruskal`] — shuffled edges joined through a disjoint-set forest
//! - [`prim`] — frontier walls picked uniformly at random
//! - [`division`] — starts open and adds dividing walls with single gaps
//!
//! The first three carve passages out of a fully walled grid and produce a
//! spanning tree over the cells: exactly one simple path between any two
//! cells. Recursive Division reaches the same invariant from the other
//! side, by construction of its chamber splits. Each generator designates a
//! `start` and `end` cell guaranteed reachable from one another.

use std::collections::VecDeque;

use rand::Rng;

pub mod backtracking;
pub mod division;
pub mod kruskal;
pub mod prim;

use crate::error::{Error, Result};

/// A cardinal direction; also names the wall on that side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// One cell's four boundary walls; `true` means the wall is present.
/// Adjacent cells are connected iff the shared wall is down on both sides,
/// and the mutators here always change both sides together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Cell {
    fn walled() -> Self {
        Cell {
            north: true,
            east: true,
            south: true,
            west: true,
        }
    }

    pub fn wall(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    fn set_wall(&mut self, dir: Direction, present: bool) {
        match dir {
            Direction::North => self.north = present,
            Direction::East => self.east = present,
            Direction::South => self.south = present,
            Direction::West => self.west = present,
        }
    }
}

/// One step of a generation run, recorded in order. Observational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeEvent {
    /// A cell joined the maze.
    Visit { cell: (usize, usize) },
    /// The wall between two adjacent cells came down.
    Carve {
        from: (usize, usize),
        to: (usize, usize),
    },
    /// The generator retreated from a dead end (Recursive Backtracking).
    Backtrack { cell: (usize, usize) },
    /// A wall went up between two adjacent cells (Recursive Division).
    Wall {
        a: (usize, usize),
        b: (usize, usize),
    },
    /// Generation finished. Always the final event.
    Complete,
}

/// A finished maze: the cell grid plus the designated start and end cells,
/// which are always reachable from one another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl Maze {
    /// All walls up; the carving generators start here.
    pub(crate) fn fully_walled(rows: usize, cols: usize) -> Self {
        Maze {
            rows,
            cols,
            cells: vec![Cell::walled(); rows * cols],
            start: (0, 0),
            end: (0, 0),
        }
    }

    /// Interior fully open, outer boundary walled; Recursive Division
    /// starts here.
    pub(crate) fn open_interior(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell {
                    north: row == 0,
                    south: row + 1 == rows,
                    west: col == 0,
                    east: col + 1 == cols,
                });
            }
        }
        Maze {
            rows,
            cols,
            cells,
            start: (0, 0),
            end: (0, 0),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// # Panics
    ///
    /// Panics if (row, col) is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    /// The adjacent cell in `dir`, or `None` at the grid edge.
    pub fn neighbor(&self, (row, col): (usize, usize), dir: Direction) -> Option<(usize, usize)> {
        match dir {
            Direction::North => row.checked_sub(1).map(|r| (r, col)),
            Direction::South => (row + 1 < self.rows).then_some((row + 1, col)),
            Direction::West => col.checked_sub(1).map(|c| (row, c)),
            Direction::East => (col + 1 < self.cols).then_some((row, col + 1)),
        }
    }

    /// Whether the cell at `pos` connects to its neighbor in `dir` (wall
    /// down and neighbor in bounds).
    pub fn connected(&self, pos: (usize, usize), dir: Direction) -> bool {
        self.neighbor(pos, dir).is_some() && !self.cell(pos.0, pos.1).wall(dir)
    }

    /// Clears the wall between `pos` and its neighbor in `dir`, on both
    /// sides.
    ///
    /// # Panics
    ///
    /// Panics if there is no neighbor in that direction.
    pub(crate) fn remove_wall(&mut self, pos: (usize, usize), dir: Direction) {
        self.set_shared_wall(pos, dir, false);
    }

    /// Raises the wall between `pos` and its neighbor in `dir`, on both
    /// sides.
    ///
    /// # Panics
    ///
    /// Panics if there is no neighbor in that direction.
    pub(crate) fn add_wall(&mut self, pos: (usize, usize), dir: Direction) {
        self.set_shared_wall(pos, dir, true);
    }

    fn set_shared_wall(&mut self, pos: (usize, usize), dir: Direction, present: bool) {
        let (nrow, ncol) = self
            .neighbor(pos, dir)
            .unwrap_or_else(|| panic!("no neighbor of {:?} to the {:?}", pos, dir));
        let idx = self.index(pos.0, pos.1);
        self.cells[idx].set_wall(dir, present);
        let nidx = self.index(nrow, ncol);
        self.cells[nidx].set_wall(dir.opposite(), present);
    }

    /// Number of cleared shared walls. A spanning tree over rows × cols
    /// cells has exactly `rows * cols - 1`.
    pub fn passage_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.connected((row, col), Direction::East) {
                    count += 1;
                }
                if self.connected((row, col), Direction::South) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of cells reachable from `from` through connected neighbors,
    /// counting `from` itself.
    pub fn reachable_from(&self, from: (usize, usize)) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut seen = vec![false; self.cells.len()];
        seen[self.index(from.0, from.1)] = true;
        let mut queue = VecDeque::new();
        queue.push_back(from);
        let mut count = 1;
        while let Some(pos) = queue.pop_front() {
            for dir in Direction::ALL {
                if !self.connected(pos, dir) {
                    continue;
                }
                let next = match self.neighbor(pos, dir) {
                    Some(next) => next,
                    None => continue,
                };
                let idx = self.index(next.0, next.1);
                if !seen[idx] {
                    seen[idx] = true;
                    count += 1;
                    queue.push_back(next);
                }
            }
        }
        count
    }
}

/// A finished generation run: the maze and its step trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub maze: Maze,
    pub trace: Vec<MazeEvent>,
}

pub(crate) fn validate_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::invalid_input(format!(
            "maze dimensions must be at least 1x1, got {}x{}",
            rows, cols
        )));
    }
    Ok(())
}

/// Picks two distinct uniformly random cells as (start, end); they coincide
/// only in a 1x1 maze.
pub(crate) fn random_endpoints<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> ((usize, usize), (usize, usize)) {
    let start = (rng.gen_range(0..rows), rng.gen_range(0..cols));
    if rows * cols == 1 {
        return (start, start);
    }
    loop {
        let end = (rng.gen_range(0..rows), rng.gen_range(0..cols));
        if end != start {
            return (start, end);
        }
    }
}
