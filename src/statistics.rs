use crate::algorithms::common::SolveOutcome;
use crate::error::StoreError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// One successful run, as handed to the result store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmRunSummary {
    pub algorithm_name: String,
    pub path_length: usize,
    pub elapsed_nanos: u64,
}

impl AlgorithmRunSummary {
    /// `None` when the outcome has no path: failed runs are not recorded.
    pub fn from_outcome(name: &str, outcome: &SolveOutcome, elapsed: Duration) -> Option<Self> {
        if outcome.path.is_empty() {
            return None;
        }
        Some(AlgorithmRunSummary {
            algorithm_name: name.to_string(),
            path_length: outcome.path.len(),
            elapsed_nanos: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        })
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos)
    }
}

impl fmt::Display for AlgorithmRunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.algorithm_name, self.path_length, self.elapsed_nanos
        )
    }
}

impl FromStr for AlgorithmRunSummary {
    type Err = StoreError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || StoreError::Parse {
            line: line.to_string(),
        };
        let parts: Vec<&str> = line.trim().split(',').collect();
        let [name, path_length, elapsed_nanos] = parts.as_slice() else {
            return Err(malformed());
        };
        if name.is_empty() {
            return Err(malformed());
        }

        Ok(AlgorithmRunSummary {
            algorithm_name: name.to_string(),
            path_length: path_length.trim().parse().map_err(|_| malformed())?,
            elapsed_nanos: elapsed_nanos.trim().parse().map_err(|_| malformed())?,
        })
    }
}

/// Per-run figures shown in the comparison table.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub visited_cells: usize,
    pub path_length: usize,
    pub optimal_path_length: Option<usize>,
    pub route_efficiency: f64,
}

impl Statistics {
    pub fn new(outcome: &SolveOutcome, optimal_path_length: Option<usize>) -> Self {
        let mut stats = Statistics {
            visited_cells: outcome.visited.len(),
            path_length: outcome.path.len(),
            optimal_path_length,
            route_efficiency: 0.0,
        };
        stats.calculate_efficiency();
        stats
    }

    /// Path length relative to the optimal one; 1.0 means optimal.
    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match self.optimal_path_length {
            Some(optimal) if optimal > 0 && self.path_length > 0 => {
                self.path_length as f64 / optimal as f64
            }
            _ => 0.0,
        };
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visited Cells: {}", self.visited_cells)?;
        writeln!(f, "Path Length: {}", self.path_length)?;
        match self.optimal_path_length {
            Some(optimal) => writeln!(f, "Optimal Path Length: {}", optimal)?,
            None => writeln!(f, "Optimal Path Length: unreachable")?,
        }
        if self.route_efficiency > 0.0 {
            writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
        }
        Ok(())
    }
}
