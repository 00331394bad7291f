pub mod bfs;
pub mod common;
pub mod dfs;
pub mod recursive;
pub mod recursive_backtracking;
pub mod recursive_complete;

use crate::error::SolveError;
use bfs::Bfs;
use common::MazeSolver;
use dfs::Dfs;
use recursive::Recursive;
use recursive_backtracking::RecursiveBacktracking;
use recursive_complete::RecursiveComplete;
use std::fmt;
use std::str::FromStr;

/// The fixed set of search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Recursive,
    RecursiveComplete,
    RecursiveBacktracking,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Recursive,
        Algorithm::RecursiveComplete,
        Algorithm::RecursiveBacktracking,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Recursive => "recursive",
            Algorithm::RecursiveComplete => "recursive_complete",
            Algorithm::RecursiveBacktracking => "recursive_backtracking",
        }
    }

    /// A fresh solver for this strategy.
    pub fn solver(self) -> Box<dyn MazeSolver> {
        match self {
            Algorithm::Bfs => Box::new(Bfs::new()),
            Algorithm::Dfs => Box::new(Dfs::new()),
            Algorithm::Recursive => Box::new(Recursive::new()),
            Algorithm::RecursiveComplete => Box::new(RecursiveComplete::new()),
            Algorithm::RecursiveBacktracking => Box::new(RecursiveBacktracking::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| SolveError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.solver().name(), algorithm.name());
        }
    }

    #[test]
    fn parsing_is_lenient_about_case_and_separators() {
        assert_eq!("BFS".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!(
            "Recursive-Backtracking".parse::<Algorithm>().unwrap(),
            Algorithm::RecursiveBacktracking
        );
        assert_eq!(
            "recursive complete".parse::<Algorithm>().unwrap(),
            Algorithm::RecursiveComplete
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "a_star".parse::<Algorithm>(),
            Err(SolveError::UnknownAlgorithm("a_star".to_string()))
        );
    }
}
