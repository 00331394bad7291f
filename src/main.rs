use anyhow::{bail, Context};
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use std::thread;
use std::time::Duration;

use maze_solver::algorithms::common::SolveOutcome;
use maze_solver::algorithms::Algorithm;
use maze_solver::comparison::{print_comparison_results, run_algorithm, run_all_algorithms};
use maze_solver::config::Config;
use maze_solver::grid::Grid;
use maze_solver::logging::init_logger;
use maze_solver::results::{CsvResultStore, ResultStore};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logger(config.debug);

    let mut store = CsvResultStore::new(&config.results_file);
    if config.clear_results {
        store.clear()?;
        info!("Cleared {}", store.path().display());
        return Ok(());
    }
    if config.show_results {
        print_stored_results(&store)?;
        return Ok(());
    }

    let grid = load_grid(&config)?;
    let (start, goal) = grid.endpoints()?;

    if !config.no_visualization {
        println!("Legend: S=Start, E=End, #=Wall, o=Visited, *=Path, .=Empty");
        println!("{}", grid);
    }

    let results = if config.algorithm.eq_ignore_ascii_case("all") {
        let results = run_all_algorithms(&grid)?;
        print_comparison_results(&results);
        results
    } else {
        let algorithm: Algorithm = config.algorithm.parse()?;
        let result = run_algorithm(&grid, algorithm, start, goal)?;

        println!("\n=== {} ===", algorithm);
        println!("{}", result.statistics);
        println!("Solve time: {:.2?}", result.elapsed);

        if config.animate {
            replay(&grid, &result.outcome, Duration::from_millis(config.delay_ms));
        } else if !config.no_visualization {
            println!("{}", overlay(&grid, &result.outcome, usize::MAX, usize::MAX));
        }
        if !result.success() {
            println!("No path found by {}.", algorithm);
        }
        vec![result]
    };

    for result in &results {
        if let Some(summary) = result.summary() {
            if let Err(e) = store.save(&summary) {
                warn!("Could not record {} result: {}", result.algorithm, e);
            }
        }
    }

    Ok(())
}

fn load_grid(config: &Config) -> anyhow::Result<Grid> {
    if let Some(path) = &config.maze {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading maze file {}", path.display()))?;
        let grid = Grid::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
        info!("Loaded {}x{} maze from {}", grid.rows(), grid.cols(), path.display());
        return Ok(grid);
    }

    if config.rows.max(config.cols) < 2 {
        bail!("a random maze needs at least two cells");
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = Grid::random(config.rows, config.cols, config.walls, &mut rng)?;
    info!(
        "Generated {}x{} maze with {} walls (seed {})",
        config.rows,
        config.cols,
        config.walls,
        seed
    );
    Ok(grid)
}

fn print_stored_results(store: &CsvResultStore) -> anyhow::Result<()> {
    let rows = store.find_all()?;
    if rows.is_empty() {
        println!("No results stored in {}.", store.path().display());
        return Ok(());
    }

    println!("{:<24} {:<8} {:<12}", "Algorithm", "Path", "Time");
    println!("{}", "-".repeat(44));
    for row in rows {
        println!(
            "{:<24} {:<8} {:<12}",
            row.algorithm_name,
            row.path_length,
            format!("{:.2?}", row.elapsed())
        );
    }
    Ok(())
}

/// The grid with the first `visited` explored cells and first `path` route
/// cells drawn over it.
fn overlay(grid: &Grid, outcome: &SolveOutcome, visited: usize, path: usize) -> String {
    let visited: FxHashSet<_> = outcome.visited.iter().take(visited).map(|c| c.pos).collect();
    let path: FxHashSet<_> = outcome.path.iter().take(path).map(|c| c.pos).collect();
    grid.render_overlay(&visited, &path)
}

fn replay(grid: &Grid, outcome: &SolveOutcome, delay: Duration) {
    for shown in 1..=outcome.visited.len() {
        clear_screen();
        println!("Exploring: {}/{}", shown, outcome.visited.len());
        println!("{}", overlay(grid, outcome, shown, 0));
        thread::sleep(delay);
    }
    for shown in 1..=outcome.path.len() {
        clear_screen();
        println!("Path: {}/{}", shown, outcome.path.len());
        println!("{}", overlay(grid, outcome, usize::MAX, shown));
        thread::sleep(delay);
    }
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}
