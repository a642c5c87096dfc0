//! Tuned control parameter files
//!
//! A tuned file holds one comma separated line of control parameters and
//! lives at `<params>/<algo>/<function name>_<algo>.tuned`.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use swarmbench_env::{TUNED_EXTENSION, ensure_dir};
use swarmbench_optim::Algorithm;

use crate::error::{BenchError, Result};

/// Location of the tuned file of `algorithm` on `function_name`
pub fn tuned_path(params_dir: &Path, algorithm: Algorithm, function_name: &str) -> PathBuf {
    let algo = algorithm.tag();
    params_dir
        .join(algo)
        .join(format!("{}_{}.{}", function_name, algo, TUNED_EXTENSION))
}

/// Parse a comma separated parameter line
pub fn parse_tuned(path: &Path, content: &str) -> Result<Vec<f64>> {
    let line = content.lines().map(str::trim).find(|l| !l.is_empty()).ok_or_else(|| {
        BenchError::InvalidTunedFile { path: path.to_path_buf(), reason: "empty file".into() }
    })?;
    line.split(',')
        .map(|field| {
            let field = field.trim();
            field.parse::<f64>().map_err(|e| BenchError::InvalidTunedFile {
                path: path.to_path_buf(),
                reason: format!("'{}': {}", field, e),
            })
        })
        .collect()
}

pub fn read_tuned(path: &Path) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path)?;
    parse_tuned(path, &content)
}

/// Write `values` as one comma separated line, creating parent directories
pub fn write_tuned(path: &Path, values: &[f64]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let line = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
    fs::write(path, &line)?;
    info!("tuned parameters [{}] written to {}", line, path.display());
    Ok(())
}

/// Tuned parameters of `algorithm` on `function_name`, if a file exists
pub fn load_tuned(
    params_dir: &Path,
    algorithm: Algorithm,
    function_name: &str,
) -> Result<Option<Vec<f64>>> {
    let path = tuned_path(params_dir, algorithm, function_name);
    if !path.exists() {
        return Ok(None);
    }
    read_tuned(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuned_path_layout() {
        let p = tuned_path(Path::new("/data/params"), Algorithm::De, "salomon");
        assert_eq!(p, Path::new("/data/params/de/salomon_de.tuned"));
    }

    #[test]
    fn test_parse_tuned() {
        let p = Path::new("x.tuned");
        assert_eq!(parse_tuned(p, "0.6, 1.2,1.3\n").unwrap(), vec![0.6, 1.2, 1.3]);
        assert!(matches!(parse_tuned(p, ""), Err(BenchError::InvalidTunedFile { .. })));
        assert!(matches!(parse_tuned(p, "0.5,abc"), Err(BenchError::InvalidTunedFile { .. })));
    }
}
