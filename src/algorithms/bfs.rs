use crate::algorithms::common::{validate_endpoints, MazeSolver, SolveOutcome, DOWN_UP_RIGHT_LEFT};
use crate::error::SolveError;
use crate::grid::{Cell, Grid, Position};
use log::debug;
use pathfinding::matrix::Matrix;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Level-order search. Always returns a path with the fewest cells.
///
/// Neighbors are expanded down, up, right, left; that order decides which of
/// several equally short routes wins.
#[derive(Default)]
pub struct Bfs {
    queue: VecDeque<Cell>,
    parents: FxHashMap<Position, Cell>,
}

impl Bfs {
    pub fn new() -> Self {
        Bfs::default()
    }

    fn reconstruct(&self, start: Cell, goal: Cell) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut current = goal;
        while let Some(parent) = self.parents.get(&current.pos) {
            path.push(current);
            current = *parent;
        }

        if current == start {
            path.push(current);
            path.reverse();
            path
        } else {
            Vec::new()
        }
    }
}

impl MazeSolver for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<SolveOutcome, SolveError> {
        let (start, goal) = validate_endpoints(grid, start, goal)?;

        self.queue.clear();
        self.parents.clear();
        let mut seen = Matrix::new(grid.rows(), grid.cols(), false);
        let mut visited = Vec::new();

        self.queue.push_back(start);
        seen[(start.pos.row, start.pos.col)] = true;

        while let Some(cell) = self.queue.pop_front() {
            visited.push(cell);
            if cell == goal {
                break;
            }

            for dir in DOWN_UP_RIGHT_LEFT {
                let Some(next) = grid.step(cell.pos, dir).and_then(|pos| grid.cell(pos)) else {
                    continue;
                };
                if !seen[(next.pos.row, next.pos.col)] && next.role.is_passable() {
                    seen[(next.pos.row, next.pos.col)] = true;
                    self.parents.insert(next.pos, cell);
                    self.queue.push_back(next);
                }
            }
        }

        let path = self.reconstruct(start, goal);
        debug!(
            "bfs: visited {} cells, path {} cells",
            visited.len(),
            path.len()
        );
        Ok(SolveOutcome { visited, path })
    }
}
