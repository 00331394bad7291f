use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Solve grid mazes with five search strategies", long_about = None)]
pub struct Config {
    /// Text maze to load (`.` empty, `#` wall, `S` start, `E` end)
    #[arg(long)]
    pub maze: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    #[arg(long, default_value_t = 10)]
    pub cols: usize,

    #[arg(long, default_value_t = 20)]
    pub walls: usize,

    /// Seed for the random maze; a fresh one is drawn when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// bfs, dfs, recursive, recursive_complete, recursive_backtracking or all
    #[arg(long, default_value = "all")]
    pub algorithm: String,

    #[arg(long, default_value = "results.csv")]
    pub results_file: PathBuf,

    /// Print the stored results and exit
    #[arg(long, default_value_t = false)]
    pub show_results: bool,

    /// Empty the results file and exit
    #[arg(long, default_value_t = false)]
    pub clear_results: bool,

    /// Replay visited cells and then the path, one step at a time
    #[arg(long, default_value_t = false)]
    pub animate: bool,

    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
