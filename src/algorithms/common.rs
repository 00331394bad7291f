use crate::error::{Endpoint, EndpointProblem, SolveError};
use crate::grid::{Cell, Grid, Position, Role};
use rustc_hash::FxHashSet;

/// A `(drow, dcol)` step.
pub type Direction = (isize, isize);

pub const DOWN: Direction = (1, 0);
pub const UP: Direction = (-1, 0);
pub const RIGHT: Direction = (0, 1);
pub const LEFT: Direction = (0, -1);

/// Neighbor order used by BFS and DFS.
pub const DOWN_UP_RIGHT_LEFT: [Direction; 4] = [DOWN, UP, RIGHT, LEFT];
/// Neighbor order used by the four-direction recursive probes.
pub const DOWN_RIGHT_UP_LEFT: [Direction; 4] = [DOWN, RIGHT, UP, LEFT];
/// The plain recursive probe only ever looks down and right.
pub const DOWN_RIGHT: [Direction; 2] = [DOWN, RIGHT];

/// What a solver saw and what it found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Every cell examined, in the order the strategy examined it.
    pub visited: Vec<Cell>,
    /// Start to goal inclusive, or empty when the goal is unreachable.
    pub path: Vec<Cell>,
}

impl SolveOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn visited_positions(&self) -> Vec<Position> {
        self.visited.iter().map(|cell| cell.pos).collect()
    }

    pub fn path_positions(&self) -> Vec<Position> {
        self.path.iter().map(|cell| cell.pos).collect()
    }
}

pub trait MazeSolver {
    /// Stable identifier, also used as the result-store key.
    fn name(&self) -> &'static str;

    /// Searches `grid` from `start` to `goal`.
    ///
    /// The grid is only read. Endpoints outside the grid or on a wall are
    /// rejected before any traversal; an unreachable goal is reported as an
    /// outcome with an empty path, never as an error.
    fn solve(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<SolveOutcome, SolveError>;
}

/// Resolves both endpoints against the grid's own storage.
pub fn validate_endpoints(
    grid: &Grid,
    start: Position,
    goal: Position,
) -> Result<(Cell, Cell), SolveError> {
    Ok((
        resolve(grid, start, Endpoint::Start)?,
        resolve(grid, goal, Endpoint::Goal)?,
    ))
}

fn resolve(grid: &Grid, position: Position, which: Endpoint) -> Result<Cell, SolveError> {
    let cell = grid.cell(position).ok_or(SolveError::InvalidEndpoint {
        which,
        position,
        reason: EndpointProblem::OutOfBounds,
    })?;
    if cell.role == Role::Wall {
        return Err(SolveError::InvalidEndpoint {
            which,
            position,
            reason: EndpointProblem::Wall,
        });
    }
    Ok(cell)
}

/// Insertion-ordered visited set shared by the depth-first strategies.
#[derive(Debug, Default)]
pub struct VisitLog {
    seen: FxHashSet<Position>,
    order: Vec<Cell>,
}

impl VisitLog {
    pub fn clear(&mut self) {
        self.seen.clear();
        self.order.clear();
    }

    /// Records `cell`; false if it had already been recorded.
    pub fn insert(&mut self, cell: Cell) -> bool {
        if self.seen.insert(cell.pos) {
            self.order.push(cell);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.seen.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn snapshot(&self) -> Vec<Cell> {
        self.order.clone()
    }
}

/// One level of an explicit-stack depth-first probe: the cell being expanded
/// and the index of the next direction to try from it.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub cell: Cell,
    pub next_dir: usize,
}

impl Frame {
    pub fn new(cell: Cell) -> Self {
        Frame { cell, next_dir: 0 }
    }
}

/// The next cell a probe should enter from `frame`, advancing its direction
/// cursor past blocked or already visited neighbors. `None` once every
/// direction has been tried.
pub fn next_unvisited(
    grid: &Grid,
    frame: &mut Frame,
    order: &[Direction],
    visited: &VisitLog,
) -> Option<Cell> {
    while frame.next_dir < order.len() {
        let dir = order[frame.next_dir];
        frame.next_dir += 1;
        if let Some(cell) = grid
            .step(frame.cell.pos, dir)
            .and_then(|pos| grid.cell(pos))
            .filter(|cell| cell.role.is_passable() && !visited.contains(cell.pos))
        {
            return Some(cell);
        }
    }
    None
}

/// Depth-first probe from `start` with an explicit stack, visiting cells in
/// exactly the order the recursive form would.
///
/// Entering a cell marks it visited and pushes its frame; a frame with no
/// directions left is popped, so on success `stack` holds the route from
/// `start` to `goal`. Popped cells stay in `visited`.
pub fn depth_first_probe(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    order: &[Direction],
    visited: &mut VisitLog,
    stack: &mut Vec<Frame>,
) -> bool {
    visited.insert(start);
    stack.push(Frame::new(start));
    if start == goal {
        return true;
    }

    while let Some(frame) = stack.last_mut() {
        match next_unvisited(grid, frame, order, visited) {
            Some(next) => {
                visited.insert(next);
                stack.push(Frame::new(next));
                if next == goal {
                    return true;
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    false
}
