use crate::algorithms::common::{
    depth_first_probe, validate_endpoints, Frame, MazeSolver, SolveOutcome, VisitLog,
    DOWN_UP_RIGHT_LEFT,
};
use crate::error::SolveError;
use crate::grid::{Grid, Position};
use log::debug;

/// Depth-first search, expanding neighbors down, up, right, left.
///
/// Any route it finds is accepted; there is no shortest-path guarantee.
/// The route is read straight off the explicit stack, so no parent map is
/// needed.
#[derive(Default)]
pub struct Dfs {
    visited: VisitLog,
    stack: Vec<Frame>,
}

impl Dfs {
    pub fn new() -> Self {
        Dfs::default()
    }
}

impl MazeSolver for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn solve(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<SolveOutcome, SolveError> {
        let (start, goal) = validate_endpoints(grid, start, goal)?;
        self.visited.clear();
        self.stack.clear();

        let found = depth_first_probe(
            grid,
            start,
            goal,
            &DOWN_UP_RIGHT_LEFT,
            &mut self.visited,
            &mut self.stack,
        );
        let path = if found {
            self.stack.iter().map(|frame| frame.cell).collect()
        } else {
            Vec::new()
        };

        debug!(
            "dfs: visited {} cells, path {} cells",
            self.visited.len(),
            path.len()
        );
        Ok(SolveOutcome {
            visited: self.visited.snapshot(),
            path,
        })
    }
}
