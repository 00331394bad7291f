//! Cross-strategy properties: every solver against the same grids.

use std::collections::HashSet;

use maze_solver::algorithms::Algorithm;
use maze_solver::comparison::optimal_path_length;
use maze_solver::error::{Endpoint, EndpointProblem, SolveError};
use maze_solver::grid::{Cell, Grid, Position, Role};
use maze_solver::SolveOutcome;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn solve(algorithm: Algorithm, grid: &Grid) -> SolveOutcome {
    let (start, goal) = grid.endpoints().unwrap();
    algorithm.solver().solve(grid, start, goal).unwrap()
}

fn open_grid(rows: usize, cols: usize, start: Position, goal: Position) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    grid.set_start(start).unwrap();
    grid.set_end(goal).unwrap();
    grid
}

/// Seeded random mazes with a reachable goal.
fn connected_mazes() -> Vec<Grid> {
    (0..60)
        .map(|seed| Grid::random(9, 11, 30, &mut StdRng::seed_from_u64(seed)).unwrap())
        .filter(|grid| {
            let (start, goal) = grid.endpoints().unwrap();
            optimal_path_length(grid, start, goal).is_some()
        })
        .collect()
}

fn assert_route(path: &[Cell], grid: &Grid, label: &str) {
    let (start, goal) = grid.endpoints().unwrap();
    assert_eq!(path.first().map(|c| c.pos), Some(start), "{label}: path must begin at start");
    assert_eq!(path.last().map(|c| c.pos), Some(goal), "{label}: path must end at goal");
    for pair in path.windows(2) {
        assert!(
            pair[0].pos.is_adjacent(&pair[1].pos),
            "{label}: {} and {} are not adjacent",
            pair[0].pos,
            pair[1].pos
        );
    }
    for cell in path {
        assert_ne!(grid.role(cell.pos), Some(Role::Wall), "{label}: path crosses a wall");
    }
}

#[test]
fn bfs_on_open_grids_is_manhattan_plus_one() {
    for (rows, cols) in [(1, 6), (4, 4), (5, 7), (8, 3)] {
        for start in [Position::new(0, 0), Position::new(rows / 2, cols - 1)] {
            let goal = Position::new(rows - 1, cols / 2);
            if goal == start {
                continue;
            }
            let grid = open_grid(rows, cols, start, goal);
            let outcome = solve(Algorithm::Bfs, &grid);
            assert_eq!(outcome.path.len(), start.manhattan(&goal) + 1);
        }
    }
}

#[test]
fn found_paths_connect_start_to_goal() {
    let mazes = connected_mazes();
    assert!(mazes.len() > 10, "too few connected mazes to be meaningful");

    for grid in &mazes {
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::RecursiveBacktracking] {
            let outcome = solve(algorithm, grid);
            assert_route(&outcome.path, grid, algorithm.name());
        }

        // only solvable by down/right moves, so a miss is allowed
        let recursive = solve(Algorithm::Recursive, grid);
        if recursive.found() {
            assert_route(&recursive.path, grid, "recursive");
        }

        let complete = solve(Algorithm::RecursiveComplete, grid);
        let (start, goal) = grid.endpoints().unwrap();
        assert_eq!(complete.path.first().map(|c| c.pos), Some(start));
        assert_eq!(complete.path.last().map(|c| c.pos), Some(goal));
    }
}

#[test]
fn bfs_is_never_beaten() {
    for grid in connected_mazes() {
        let (start, goal) = grid.endpoints().unwrap();
        let shortest = solve(Algorithm::Bfs, &grid).path.len();
        assert_eq!(Some(shortest), optimal_path_length(&grid, start, goal));

        for algorithm in Algorithm::ALL {
            let outcome = solve(algorithm, &grid);
            if outcome.found() {
                assert!(
                    shortest <= outcome.path.len(),
                    "{} found a shorter path than bfs",
                    algorithm
                );
            }
        }
    }
}

#[test]
fn backtracking_never_repeats_cells() {
    for grid in connected_mazes() {
        let outcome = solve(Algorithm::RecursiveBacktracking, &grid);
        let visited: HashSet<_> = outcome.visited.iter().collect();
        let path: HashSet<_> = outcome.path.iter().collect();
        assert_eq!(visited.len(), outcome.visited.len());
        assert_eq!(path.len(), outcome.path.len());
    }
}

#[test]
fn complete_path_repeats_goal_but_never_crosses_walls() {
    for grid in connected_mazes() {
        let outcome = solve(Algorithm::RecursiveComplete, &grid);
        let goal = grid.end().unwrap();
        let n = outcome.path.len();
        assert!(n >= 2);
        assert_eq!(outcome.path[n - 1].pos, goal);
        assert_eq!(outcome.path[n - 2].pos, goal);
        assert!(outcome
            .path
            .iter()
            .all(|cell| grid.role(cell.pos) != Some(Role::Wall)));
    }
}

#[test]
fn solving_is_deterministic_and_read_only() {
    for grid in connected_mazes().into_iter().take(10) {
        let before = grid.clone();
        for algorithm in Algorithm::ALL {
            let first = solve(algorithm, &grid);
            let second = solve(algorithm, &grid);
            assert_eq!(first.visited, second.visited, "{algorithm} visited differs");
            assert_eq!(first.path, second.path, "{algorithm} path differs");

            // same instance, reused
            let (start, goal) = grid.endpoints().unwrap();
            let mut solver = algorithm.solver();
            let a = solver.solve(&grid, start, goal).unwrap();
            let b = solver.solve(&grid, start, goal).unwrap();
            assert_eq!(a, b);
        }
        assert_eq!(grid, before);
    }
}

#[test]
fn five_by_five_open_grid() {
    let grid = open_grid(5, 5, Position::new(0, 0), Position::new(4, 4));

    assert_eq!(solve(Algorithm::Bfs, &grid).path.len(), 9);
    assert!(solve(Algorithm::Dfs, &grid).path.len() >= 9);
    assert!(solve(Algorithm::RecursiveBacktracking, &grid).path.len() >= 9);
    // down-then-right reaches the corner directly
    assert_eq!(solve(Algorithm::Recursive, &grid).path.len(), 9);
}

#[test]
fn solid_wall_row_separates_start_from_goal() {
    let grid = Grid::parse(
        "\
S....
.....
#####
.....
....E",
    )
    .unwrap();
    let start_side: HashSet<Position> = (0..2)
        .flat_map(|row| (0..5).map(move |col| Position::new(row, col)))
        .collect();

    for algorithm in Algorithm::ALL {
        let outcome = solve(algorithm, &grid);
        assert!(outcome.path.is_empty(), "{algorithm} found a path through a wall");
    }

    for algorithm in [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::RecursiveComplete,
        Algorithm::RecursiveBacktracking,
    ] {
        let outcome = solve(algorithm, &grid);
        let visited: HashSet<Position> = outcome.visited_positions().into_iter().collect();
        assert_eq!(visited, start_side, "{algorithm} visited set");
        assert_eq!(outcome.visited.len(), start_side.len());
    }
}

#[test]
fn wall_start_is_rejected_by_every_strategy() {
    let grid = Grid::parse("#..\n...\n..E").unwrap();
    let start = Position::new(0, 0);
    let goal = grid.end().unwrap();

    for algorithm in Algorithm::ALL {
        let err = algorithm.solver().solve(&grid, start, goal).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidEndpoint {
                which: Endpoint::Start,
                position: start,
                reason: EndpointProblem::Wall,
            }
        );
    }
}

#[test]
fn out_of_bounds_goal_is_rejected() {
    let grid = Grid::parse("S..\n...").unwrap();
    let start = grid.start().unwrap();
    for algorithm in Algorithm::ALL {
        let err = algorithm
            .solver()
            .solve(&grid, start, Position::new(2, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidEndpoint {
                which: Endpoint::Goal,
                reason: EndpointProblem::OutOfBounds,
                ..
            }
        ));
    }
}

#[test]
fn plain_recursive_misses_routes_that_need_an_upward_move() {
    let grid = Grid::parse(
        "\
...E
.###
....
S#..",
    )
    .unwrap();

    let bfs = solve(Algorithm::Bfs, &grid);
    assert!(bfs.found());

    let recursive = solve(Algorithm::Recursive, &grid);
    assert!(recursive.path.is_empty());
}

#[test]
fn roles_on_caller_cells_are_ignored() {
    // Start and goal given as positions taken from cells with stale roles.
    let grid = Grid::parse("S.\n.E").unwrap();
    let stale_start = Cell::with_role(Position::new(0, 0), Role::Wall);
    let stale_goal = Cell::with_role(Position::new(1, 1), Role::Empty);

    for algorithm in Algorithm::ALL {
        let outcome = algorithm
            .solver()
            .solve(&grid, stale_start.into(), stale_goal.into())
            .unwrap();
        assert_eq!(outcome.visited[0].role, Role::Start);
    }
}

#[test]
fn every_strategy_walks_a_long_corridor() {
    let cols = 100_000;
    let grid = open_grid(1, cols, Position::new(0, 0), Position::new(0, cols - 1));
    for algorithm in Algorithm::ALL {
        let outcome = solve(algorithm, &grid);
        let expected = if algorithm == Algorithm::RecursiveComplete {
            cols + 1
        } else {
            cols
        };
        assert_eq!(outcome.path.len(), expected, "{algorithm}");
    }
}
