//! CSV output of trial series
//!
//! For a series label `<label>` three files are written in the function's
//! result directory, each with the sampled iteration numbers as header:
//! - `<label>_raw.csv`: one row per trial
//! - `<label>_avg.csv`: a single row of means
//! - `<label>_var.csv`: a single row of unbiased variances

use std::path::{Path, PathBuf};

use log::info;
use ndarray::Array1;
use swarmbench_env::ensure_dir;

use crate::error::{BenchError, Result};
use crate::stats::TrialMatrix;

/// Paths of the three files written for one series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesFiles {
    pub raw: PathBuf,
    pub avg: PathBuf,
    pub var: PathBuf,
}

impl SeriesFiles {
    pub fn new(dir: &Path, label: &str) -> Self {
        Self {
            raw: dir.join(format!("{}_raw.csv", label)),
            avg: dir.join(format!("{}_avg.csv", label)),
            var: dir.join(format!("{}_var.csv", label)),
        }
    }
}

/// `<results>/<function name>`, created if needed
pub fn function_results_dir(results_dir: &Path, function_name: &str) -> Result<PathBuf> {
    Ok(ensure_dir(&results_dir.join(function_name))?)
}

fn header(iterations: &[usize]) -> Vec<String> {
    iterations.iter().map(|i| i.to_string()).collect()
}

fn write_rows<I>(path: &Path, iterations: &[usize], rows: I) -> Result<()>
where
    I: IntoIterator<Item = Array1<f64>>,
{
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(header(iterations))?;
    for row in rows {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the raw, average and variance files of `matrix` under `dir`
pub fn write_series(dir: &Path, label: &str, matrix: &TrialMatrix) -> Result<SeriesFiles> {
    let files = SeriesFiles::new(dir, label);
    let iterations = matrix.iterations();
    write_rows(&files.raw, iterations, matrix.values().rows().into_iter().map(|r| r.to_owned()))?;
    write_rows(&files.avg, iterations, [matrix.average_at_time()])?;
    write_rows(&files.var, iterations, [matrix.variance_at_time()])?;
    info!("wrote {} trials of {} to {}", matrix.num_trials(), label, dir.display());
    Ok(files)
}

/// Read a series file back as (header iterations, rows)
pub fn read_series(path: &Path) -> Result<(Vec<usize>, Vec<Vec<f64>>)> {
    let invalid = |reason: String| BenchError::InvalidSeriesFile { path: path.to_path_buf(), reason };
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let iterations = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().parse::<usize>().map_err(|e| invalid(format!("header '{}': {}", h, e))))
        .collect::<Result<Vec<usize>>>()?;
    let mut rows = Vec::new();
    for record in rdr.records() {
        let row = record?
            .iter()
            .map(|v| v.trim().parse::<f64>().map_err(|e| invalid(format!("value '{}': {}", v, e))))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok((iterations, rows))
}
