//! Grid maze solving with five interchangeable search strategies.
//!
//! ```
//! use maze_solver::algorithms::Algorithm;
//! use maze_solver::grid::Grid;
//! use maze_solver::MazeSolver;
//!
//! let grid = Grid::parse("S.#\n..#\n#.E").unwrap();
//! let (start, goal) = grid.endpoints().unwrap();
//! let outcome = Algorithm::Bfs.solver().solve(&grid, start, goal).unwrap();
//! assert_eq!(outcome.path.len(), 5);
//! ```

pub mod algorithms;
pub mod comparison;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod results;
pub mod statistics;

pub use algorithms::common::{MazeSolver, SolveOutcome};
pub use algorithms::Algorithm;
pub use error::{GridError, SolveError, StoreError};
pub use grid::{Cell, Grid, Position, Role};
