use crate::algorithms::common::SolveOutcome;
use crate::algorithms::Algorithm;
use crate::error::SolveError;
use crate::grid::{Grid, Position};
use crate::statistics::{AlgorithmRunSummary, Statistics};
use log::{debug, info};
use pathfinding::prelude::bfs;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub outcome: SolveOutcome,
    pub elapsed: Duration,
    pub statistics: Statistics,
}

impl AlgorithmResult {
    pub fn success(&self) -> bool {
        self.outcome.found()
    }

    pub fn summary(&self) -> Option<AlgorithmRunSummary> {
        AlgorithmRunSummary::from_outcome(self.algorithm.name(), &self.outcome, self.elapsed)
    }
}

/// Shortest route length in cells, computed independently of the crate's own
/// solvers. `None` when the goal cannot be reached.
pub fn optimal_path_length(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
    if !grid.is_open(start) || !grid.is_open(goal) {
        return None;
    }
    bfs(&start, |p| grid.neighbors(*p), |p| *p == goal).map(|path| path.len())
}

/// Times one solve of `algorithm` on `grid`.
pub fn run_algorithm(
    grid: &Grid,
    algorithm: Algorithm,
    start: Position,
    goal: Position,
) -> Result<AlgorithmResult, SolveError> {
    let optimal = optimal_path_length(grid, start, goal);
    run_with_optimal(grid, algorithm, start, goal, optimal)
}

fn run_with_optimal(
    grid: &Grid,
    algorithm: Algorithm,
    start: Position,
    goal: Position,
    optimal: Option<usize>,
) -> Result<AlgorithmResult, SolveError> {
    let mut solver = algorithm.solver();

    let solve_start = Instant::now();
    let outcome = solver.solve(grid, start, goal)?;
    let elapsed = solve_start.elapsed();

    debug!(
        "{}: {} visited, {} on path, {:.2?}",
        algorithm,
        outcome.visited.len(),
        outcome.path.len(),
        elapsed
    );

    let statistics = Statistics::new(&outcome, optimal);
    Ok(AlgorithmResult {
        algorithm,
        outcome,
        elapsed,
        statistics,
    })
}

/// Runs every strategy against the grid's own start and end cells.
pub fn run_all_algorithms(grid: &Grid) -> Result<Vec<AlgorithmResult>, SolveError> {
    let (start, goal) = grid.endpoints()?;
    let optimal = optimal_path_length(grid, start, goal);

    info!(
        "Running comparison of {} algorithms on a {}x{} grid, start {}, goal {}",
        Algorithm::ALL.len(),
        grid.rows(),
        grid.cols(),
        start,
        goal
    );

    Algorithm::ALL
        .into_iter()
        .map(|algorithm| run_with_optimal(grid, algorithm, start, goal, optimal))
        .collect()
}

/// Print comparison results in a table
pub fn print_comparison_results(results: &[AlgorithmResult]) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<24} {:<8} {:<8} {:<8} {:<8} {:<12} {:<12}",
        "Algorithm", "Success", "Visited", "Path", "Optimal", "Efficiency", "Time"
    );
    println!("{}", "-".repeat(84));

    for result in results {
        let success_str = if result.success() { "✓" } else { "✗" };
        let optimal_str = result
            .statistics
            .optimal_path_length
            .map_or_else(|| "-".to_string(), |optimal| optimal.to_string());
        let efficiency_str = if result.statistics.route_efficiency > 0.0 {
            format!("{:.3}", result.statistics.route_efficiency)
        } else {
            "-".to_string()
        };

        println!(
            "{:<24} {:<8} {:<8} {:<8} {:<8} {:<12} {:<12}",
            result.algorithm.name(),
            success_str,
            result.statistics.visited_cells,
            result.statistics.path_length,
            optimal_str,
            efficiency_str,
            format!("{:.2?}", result.elapsed)
        );
    }
    println!();

    let successful: Vec<_> = results.iter().filter(|r| r.success()).collect();
    if successful.is_empty() {
        println!("No algorithm reached the goal.");
        return;
    }

    println!("=== PERFORMANCE ANALYSIS ===");
    if let Some(shortest) = successful.iter().min_by_key(|r| r.statistics.path_length) {
        println!(
            "Shortest path: {} ({} cells)",
            shortest.algorithm, shortest.statistics.path_length
        );
    }
    if let Some(fewest) = successful.iter().min_by_key(|r| r.statistics.visited_cells) {
        println!(
            "Fewest cells explored: {} ({} cells)",
            fewest.algorithm, fewest.statistics.visited_cells
        );
    }
    if let Some(fastest) = successful.iter().min_by_key(|r| r.elapsed) {
        println!("Fastest: {} ({:.2?})", fastest.algorithm, fastest.elapsed);
    }
    let failed: Vec<_> = results
        .iter()
        .filter(|r| !r.success())
        .map(|r| r.algorithm.name())
        .collect();
    if !failed.is_empty() {
        println!("No path found by: {}", failed.join(", "));
    }
}
