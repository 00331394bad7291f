use crate::algorithms::common::{
    next_unvisited, validate_endpoints, Frame, MazeSolver, SolveOutcome, VisitLog,
    DOWN_RIGHT_UP_LEFT,
};
use crate::error::SolveError;
use crate::grid::{Cell, Grid, Position};
use log::debug;

/// Four-direction probe that keeps every cell it enters in the path.
///
/// Cells are appended on entry and never removed, and the goal is appended a
/// second time when it is reached. The resulting path runs from start to goal
/// but also contains every dead end explored on the way. When the goal is not
/// reached the path is empty.
#[derive(Default)]
pub struct RecursiveComplete {
    visited: VisitLog,
    stack: Vec<Frame>,
    trail: Vec<Cell>,
}

impl RecursiveComplete {
    pub fn new() -> Self {
        RecursiveComplete::default()
    }

    /// Enters `cell`; true if it is the goal.
    fn enter(&mut self, cell: Cell, goal: Cell) -> bool {
        self.visited.insert(cell);
        self.trail.push(cell);
        if cell == goal {
            self.trail.push(cell);
            return true;
        }
        self.stack.push(Frame::new(cell));
        false
    }

    fn probe(&mut self, grid: &Grid, start: Cell, goal: Cell) -> bool {
        if self.enter(start, goal) {
            return true;
        }

        while let Some(frame) = self.stack.last_mut() {
            match next_unvisited(grid, frame, &DOWN_RIGHT_UP_LEFT, &self.visited) {
                Some(next) => {
                    if self.enter(next, goal) {
                        return true;
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        false
    }
}

impl MazeSolver for RecursiveComplete {
    fn name(&self) -> &'static str {
        "recursive_complete"
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
        self.trail.clear();

        if !self.probe(grid, start, goal) {
            self.trail.clear();
        }

        debug!(
            "recursive_complete: visited {} cells, path {} cells",
            self.visited.len(),
            self.trail.len()
        );
        Ok(SolveOutcome {
            visited: self.visited.snapshot(),
            path: self.trail.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(text: &str) -> SolveOutcome {
        let grid = Grid::parse(text).unwrap();
        let (start, goal) = grid.endpoints().unwrap();
        RecursiveComplete::new().solve(&grid, start, goal).unwrap()
    }

    fn positions(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    #[test]
    fn straight_route_ends_with_a_repeated_goal() {
        let outcome = solve("S\n.\nE");
        assert_eq!(
            outcome.path_positions(),
            positions(&[(0, 0), (1, 0), (2, 0), (2, 0)])
        );
    }

    #[test]
    fn dead_ends_remain_in_the_path() {
        let outcome = solve("S.E\n.##\n.##");
        assert_eq!(
            outcome.path_positions(),
            positions(&[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2), (0, 2)])
        );
        assert_eq!(
            outcome.visited_positions(),
            positions(&[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)])
        );
    }

    #[test]
    fn moves_up_and_left_when_needed() {
        let outcome = solve("E.#\n#.#\nS..");
        let path = outcome.path_positions();
        assert_eq!(path.first(), Some(&Position::new(2, 0)));
        assert_eq!(path.last(), Some(&Position::new(0, 0)));
    }

    #[test]
    fn path_is_empty_when_goal_is_unreachable() {
        let outcome = solve("S.\n##\nE.");
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.visited.len(), 2);
    }

    #[test]
    fn start_on_goal_is_recorded_twice() {
        let grid = Grid::parse("S.").unwrap();
        let start = grid.start().unwrap();
        let outcome = RecursiveComplete::new().solve(&grid, start, start).unwrap();
        assert_eq!(outcome.path, vec![Cell::new(0, 0), Cell::new(0, 0)]);
    }
}
