//! # maze_pathfinding
//!
//! Generates [perfect mazes](https://en.wikipedia.org/wiki/Maze_generation_algorithm) on a square
//! grid using a stack-based variant of randomized Prim's algorithm, and solves them with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) under the Manhattan heuristic.
//!
//! The [Grid] is handed from stage to stage by value: [MazeGenerator::generate] returns the carved
//! grid, and [GridSolver::solve] consumes it and returns it annotated inside a [Solution].
//!
//! ```
//! use maze_pathfinding::{AstarSolver, Grid, GridSolver, MazeGenerator};
//!
//! let grid = MazeGenerator::from_seed(7).generate(Grid::new(11).unwrap());
//! let solution = AstarSolver::new().solve(grid);
//! assert!(solution.is_found());
//! println!("{}", solution.grid());
//! ```
mod astar;
pub mod error;
pub mod generator;
pub mod grid;
pub mod render;
pub mod solver;

pub use crate::error::GridError;
pub use crate::generator::MazeGenerator;
pub use crate::grid::{CellState, Coordinate, Grid};
pub use crate::render::Glyphs;
pub use crate::solver::{
    astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, Marking, Solution, SolverConfig,
};

/// Smallest valid side length: a border of walls around a single candidate cell.
pub const MIN_SIZE: usize = 3;
/// Distance between carving candidates; the cell in between is the wall that gets knocked down.
pub const CARVE_STRIDE: usize = 2;
/// Distance covered by a single move during search.
pub const STEP_STRIDE: usize = 1;
/// Cost of a single move during search.
pub const STEP_COST: u32 = 1;
pub const DEFAULT_SIZE: usize = 21;

const N_SMALLVEC_SIZE: usize = 4;

/// Generates a maze of the given size from a seed and solves it with [AstarSolver].
pub fn generate_and_solve(size: usize, seed: u64) -> Result<Solution, GridError> {
    let grid = MazeGenerator::from_seed(seed).generate(Grid::new(size)?);
    Ok(AstarSolver::new().solve(grid))
}
