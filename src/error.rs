use crate::grid::{Position, Role};
use std::fmt;
use thiserror::Error;

/// Errors raised while building or editing a [`Grid`](crate::grid::Grid).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("a {rows}x{cols} grid has more cells than fit in memory")]
    TooLarge { rows: usize, cols: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    Malformed {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown maze symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("more than one {role:?} cell (second one at {position})")]
    DuplicateRole { role: Role, position: Position },

    #[error("position {position} is outside a {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
}

/// Which of the two endpoints a [`SolveError::InvalidEndpoint`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointProblem {
    OutOfBounds,
    Wall,
}

impl fmt::Display for EndpointProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointProblem::OutOfBounds => write!(f, "is outside the grid"),
            EndpointProblem::Wall => write!(f, "is a wall"),
        }
    }
}

/// Errors a solver reports before starting a search.
///
/// An unreachable goal is not one of them: that comes back as an
/// `Ok` outcome with an empty path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("{which} cell {position} {reason}")]
    InvalidEndpoint {
        which: Endpoint,
        position: Position,
        reason: EndpointProblem,
    },

    #[error("grid has no {0:?} cell")]
    MissingEndpoint(Role),

    #[error("unknown algorithm '{0}', expected one of: bfs, dfs, recursive, recursive_complete, recursive_backtracking, all")]
    UnknownAlgorithm(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("result store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed result line {line:?}")]
    Parse { line: String },
}
