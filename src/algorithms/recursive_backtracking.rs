use crate::algorithms::common::{
    depth_first_probe, validate_endpoints, Frame, MazeSolver, SolveOutcome, VisitLog,
    DOWN_RIGHT_UP_LEFT,
};
use crate::error::SolveError;
use crate::grid::{Grid, Position};
use log::debug;

/// Four-direction probe with backtracking.
///
/// A cell joins the path when it is entered and leaves it again once all four
/// of its directions fail. The visited set is never rolled back, so no cell is
/// explored twice and the search is linear in the grid size.
#[derive(Default)]
pub struct RecursiveBacktracking {
    visited: VisitLog,
    // the in-progress path; popping a frame is the backtrack
    stack: Vec<Frame>,
}

impl RecursiveBacktracking {
    pub fn new() -> Self {
        RecursiveBacktracking::default()
    }
}

impl MazeSolver for RecursiveBacktracking {
    fn name(&self) -> &'static str {
        "recursive_backtracking"
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

        depth_first_probe(
            grid,
            start,
            goal,
            &DOWN_RIGHT_UP_LEFT,
            &mut self.visited,
            &mut self.stack,
        );
        // a failed probe unwinds every frame, leaving the path empty
        let path = self.stack.iter().map(|frame| frame.cell).collect::<Vec<_>>();

        debug!(
            "recursive_backtracking: visited {} cells, path {} cells",
            self.visited.len(),
            path.len()
        );
        Ok(SolveOutcome {
            visited: self.visited.snapshot(),
            path,
        })
    }
}
