use crate::error::StoreError;
use crate::statistics::AlgorithmRunSummary;
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Where completed run summaries end up. Keeps at most one row per algorithm.
pub trait ResultStore {
    /// Replaces the row with the same algorithm name (ignoring case) or
    /// appends a new one.
    fn save(&mut self, summary: &AlgorithmRunSummary) -> Result<(), StoreError>;

    fn find_all(&self) -> Result<Vec<AlgorithmRunSummary>, StoreError>;

    fn clear(&mut self) -> Result<(), StoreError>;
}

/// `name,path_length,elapsed_nanos` lines in a plain text file.
pub struct CsvResultStore {
    path: PathBuf,
}

impl CsvResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvResultStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the rows are staged in before replacing the store.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Writes every row to the staging file, then renames it over the store,
    /// so a failed write leaves the previous contents in place.
    fn write_all(&self, rows: &[AlgorithmRunSummary]) -> Result<(), StoreError> {
        let staging = self.staging_path();
        let written = (|| -> std::io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&staging)?;
            for row in rows {
                writeln!(file, "{}", row)?;
            }
            file.sync_all()?;
            fs::rename(&staging, &self.path)
        })();

        if written.is_err() {
            let _ = fs::remove_file(&staging);
        }
        written.map_err(StoreError::from)
    }
}

impl ResultStore for CsvResultStore {
    fn save(&mut self, summary: &AlgorithmRunSummary) -> Result<(), StoreError> {
        let mut rows = self.find_all()?;
        match rows
            .iter_mut()
            .find(|row| row.algorithm_name.eq_ignore_ascii_case(&summary.algorithm_name))
        {
            Some(existing) => *existing = summary.clone(),
            None => rows.push(summary.clone()),
        }

        self.write_all(&rows)?;
        debug!("Saved {} to {}", summary, self.path.display());
        Ok(())
    }

    /// A missing file reads as empty; unparseable lines are skipped.
    fn find_all(&self) -> Result<Vec<AlgorithmRunSummary>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut rows = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<AlgorithmRunSummary>() {
                Ok(row) => rows.push(row),
                Err(e) => warn!("Skipping result row in {}: {}", self.path.display(), e),
            }
        }
        Ok(rows)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        fs::write(&self.path, "")?;
        Ok(())
    }
}
