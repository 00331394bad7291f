use crate::algorithms::common::{
    depth_first_probe, validate_endpoints, Frame, MazeSolver, SolveOutcome, VisitLog, DOWN_RIGHT,
};
use crate::error::SolveError;
use crate::grid::{Grid, Position};
use log::debug;

/// Naive probe that only ever moves down or right.
///
/// Mazes that need an up or left move are never solved. That limitation is
/// the point of this strategy and is relied on by the comparison tests.
/// Cells are entered in the order a recursive down-then-right walk would
/// enter them, but the walk runs on an explicit frame stack.
#[derive(Default)]
pub struct Recursive {
    visited: VisitLog,
    stack: Vec<Frame>,
}

impl Recursive {
    pub fn new() -> Self {
        Recursive::default()
    }
}

impl MazeSolver for Recursive {
    fn name(&self) -> &'static str {
        "recursive"
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
            &DOWN_RIGHT,
            &mut self.visited,
            &mut self.stack,
        );
        let path = if found {
            self.stack.iter().map(|frame| frame.cell).collect()
        } else {
            Vec::new()
        };

        debug!(
            "recursive: visited {} cells, path {} cells",
            self.visited.len(),
            path.len()
        );
        Ok(SolveOutcome {
            visited: self.visited.snapshot(),
            path,
        })
    }
}
