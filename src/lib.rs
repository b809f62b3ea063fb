//! Algorithm kernels with step traces for interactive visualizations.
//!
//! Three independent suites, each a family of pure, synchronous functions:
//!
//! - [`compression`] — lossless codecs (run-length, Huffman, LZW)
//! - [`search`] — pathfinding over a wall-blocked 2D grid (Dijkstra, A*,
//!   BFS, DFS, Greedy Best-First)
//! - [`maze`] — maze generation (Recursive Backtracking, Kruskal's, Prim's,
//!   Recursive Division)
//!
//! Every search and generation call returns its result together with an
//! ordered trace of the intermediate steps, so a caller can replay the run
//! one event at a time. The trace is purely observational: computing it
//! never changes the outcome, and playback pacing is entirely the caller's
//! concern.

pub mod compression;
pub mod error;
pub mod maze;
pub mod search;

pub use error::{Error, Result};
