use crate::algorithms::common::DOWN_UP_RIGHT_LEFT;
use crate::error::{GridError, SolveError};
use pathfinding::matrix::Matrix;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance, the length of any shortest 4-directional route.
    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Path,
}

impl Role {
    pub fn symbol(self) -> char {
        match self {
            Role::Empty => '.',
            Role::Wall => '#',
            Role::Start => 'S',
            Role::End => 'E',
            Role::Path => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Role> {
        match symbol {
            '.' | ' ' => Some(Role::Empty),
            '#' => Some(Role::Wall),
            'S' => Some(Role::Start),
            'E' => Some(Role::End),
            '*' => Some(Role::Path),
            _ => None,
        }
    }

    pub fn is_passable(self) -> bool {
        self != Role::Wall
    }
}

/// A grid position together with the role it held when the value was taken.
///
/// Equality and hashing look at the position only. Two `Cell`s at the same
/// coordinates are the same cell even if their roles differ, so sets and maps
/// keyed on `Cell` stay valid while the grid is edited between solves.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub pos: Position,
    pub role: Role,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell {
            pos: Position::new(row, col),
            role: Role::Empty,
        }
    }

    pub fn with_role(pos: Position, role: Role) -> Self {
        Cell { pos, role }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl From<Cell> for Position {
    fn from(cell: Cell) -> Self {
        cell.pos
    }
}

/// Rectangular maze. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Matrix<Role>,
}

impl Grid {
    /// An all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if rows.checked_mul(cols).is_none() {
            return Err(GridError::TooLarge { rows, cols });
        }
        Ok(Grid {
            cells: Matrix::new(rows, cols, Role::Empty),
        })
    }

    /// Builds a grid from explicit rows, rejecting ragged input and duplicate
    /// start/end cells.
    pub fn from_rows(rows: Vec<Vec<Role>>) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        let mut grid = Grid::new(rows.len(), expected)?;
        let mut start_seen = false;
        let mut end_seen = false;

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != expected {
                return Err(GridError::Malformed {
                    row: r,
                    expected,
                    found: row.len(),
                });
            }
            for (c, role) in row.into_iter().enumerate() {
                let seen = match role {
                    Role::Start => Some(&mut start_seen),
                    Role::End => Some(&mut end_seen),
                    _ => None,
                };
                if let Some(seen) = seen {
                    if *seen {
                        return Err(GridError::DuplicateRole {
                            role,
                            position: Position::new(r, c),
                        });
                    }
                    *seen = true;
                }
                grid.cells[(r, c)] = role;
            }
        }

        Ok(grid)
    }

    /// Parses the text maze format: one line per row, `.` empty, `#` wall,
    /// `S` start, `E` end, `*` path. Trailing blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .trim_end_matches(['\n', '\r'])
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        let mut rows = Vec::with_capacity(lines.len());
        for (r, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, symbol) in line.chars().enumerate() {
                let role = Role::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    symbol,
                    row: r,
                    col: c,
                })?;
                row.push(role);
            }
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    /// Random maze: start in the top-left quadrant, end in the bottom-right
    /// quadrant, and up to `num_walls` walls that never cover either endpoint.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        num_walls: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        if rows.max(cols) < 2 {
            return Err(GridError::Empty);
        }

        let start = Position::new(
            rng.gen_range(0..(rows / 2).max(1)),
            rng.gen_range(0..(cols / 2).max(1)),
        );
        let mut goal = Position::new(rng.gen_range(rows / 2..rows), rng.gen_range(cols / 2..cols));
        if goal == start {
            goal = Position::new(rows - 1, cols - 1);
        }

        grid.cells[(start.row, start.col)] = Role::Start;
        grid.cells[(goal.row, goal.col)] = Role::End;

        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < num_walls && attempts < num_walls.saturating_mul(3) {
            let pos = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
            if grid.cells[(pos.row, pos.col)] == Role::Empty {
                grid.cells[(pos.row, pos.col)] = Role::Wall;
                walls_placed += 1;
            }
            attempts += 1;
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.cells.rows
    }

    pub fn cols(&self) -> usize {
        self.cells.columns
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn role(&self, pos: Position) -> Option<Role> {
        self.cells.get((pos.row, pos.col)).copied()
    }

    /// The grid's own cell at `pos`, with its current role.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.role(pos).map(|role| Cell::with_role(pos, role))
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, pos: Position) -> bool {
        self.role(pos).is_some_and(Role::is_passable)
    }

    /// The in-bounds position one step from `pos` in direction `(drow, dcol)`.
    pub fn step(&self, pos: Position, (drow, dcol): (isize, isize)) -> Option<Position> {
        let row = pos.row.checked_add_signed(drow)?;
        let col = pos.col.checked_add_signed(dcol)?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Open neighbors in down, up, right, left order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        DOWN_UP_RIGHT_LEFT
            .into_iter()
            .filter_map(|dir| self.step(pos, dir))
            .filter(|next| self.is_open(*next))
            .collect()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols()).map(move |col| Position::new(row, col)))
    }

    pub fn find(&self, role: Role) -> Option<Position> {
        self.positions().find(|pos| self.role(*pos) == Some(role))
    }

    pub fn count(&self, role: Role) -> usize {
        self.positions().filter(|pos| self.role(*pos) == Some(role)).count()
    }

    pub fn start(&self) -> Option<Position> {
        self.find(Role::Start)
    }

    pub fn end(&self) -> Option<Position> {
        self.find(Role::End)
    }

    /// The start and end positions, failing if either is missing.
    pub fn endpoints(&self) -> Result<(Position, Position), SolveError> {
        let start = self.start().ok_or(SolveError::MissingEndpoint(Role::Start))?;
        let end = self.end().ok_or(SolveError::MissingEndpoint(Role::End))?;
        Ok((start, end))
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position: pos,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Sets one cell's role. `Start` and `End` go through [`Grid::set_start`]
    /// and [`Grid::set_end`], so the grid never holds two of either.
    pub fn set_role(&mut self, pos: Position, role: Role) -> Result<(), GridError> {
        match role {
            Role::Start | Role::End => self.move_unique_role(pos, role),
            _ => {
                self.check_bounds(pos)?;
                self.cells[(pos.row, pos.col)] = role;
                Ok(())
            }
        }
    }

    /// Moves the start to `pos`; the previous start becomes empty.
    pub fn set_start(&mut self, pos: Position) -> Result<(), GridError> {
        self.move_unique_role(pos, Role::Start)
    }

    /// Moves the end to `pos`; the previous end becomes empty.
    pub fn set_end(&mut self, pos: Position) -> Result<(), GridError> {
        self.move_unique_role(pos, Role::End)
    }

    fn move_unique_role(&mut self, pos: Position, role: Role) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        if let Some(previous) = self.find(role) {
            self.cells[(previous.row, previous.col)] = Role::Empty;
        }
        self.cells[(pos.row, pos.col)] = role;
        Ok(())
    }

    /// Flips an empty cell to a wall and back. Other roles are left alone.
    /// Returns the role the cell ends up with.
    pub fn toggle_wall(&mut self, pos: Position) -> Result<Role, GridError> {
        self.check_bounds(pos)?;
        let cell = &mut self.cells[(pos.row, pos.col)];
        *cell = match *cell {
            Role::Empty => Role::Wall,
            Role::Wall => Role::Empty,
            other => other,
        };
        Ok(*cell)
    }

    /// Marks the given cells as `Path`, skipping start, end and walls.
    pub fn mark_path(&mut self, path: &[Cell]) {
        for cell in path {
            if let Some(role) = self.cells.get_mut((cell.pos.row, cell.pos.col)) {
                if *role == Role::Empty {
                    *role = Role::Path;
                }
            }
        }
    }

    /// Turns every `Path` cell back into `Empty`.
    pub fn clear_path_marks(&mut self) {
        for pos in self.positions().collect::<Vec<_>>() {
            if self.cells[(pos.row, pos.col)] == Role::Path {
                self.cells[(pos.row, pos.col)] = Role::Empty;
            }
        }
    }

    /// Text form of the grid, the inverse of [`Grid::parse`].
    pub fn render(&self) -> String {
        self.render_overlay(&FxHashSet::default(), &FxHashSet::default())
    }

    /// Renders the grid with explored cells drawn as `o` and route cells as `*`.
    /// Start and end keep their own symbols.
    pub fn render_overlay(
        &self,
        visited: &FxHashSet<Position>,
        path: &FxHashSet<Position>,
    ) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let pos = Position::new(row, col);
                let role = self.cells[(row, col)];
                let symbol = match role {
                    Role::Start | Role::End | Role::Wall => role.symbol(),
                    _ if path.contains(&pos) => Role::Path.symbol(),
                    _ if visited.contains(&pos) => 'o',
                    _ => role.symbol(),
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
