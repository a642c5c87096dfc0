//! Environment variable utilities for swarmbench
//!
//! This module provides utilities for handling environment variables,
//! particularly the SWARMBENCH_DIR variable that points to the project root.

use crate::constants::{DATA_GENERATED, PARAMS, PLOTS, RESULTS, SWARMBENCH_DIR};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "SWARMBENCH_DIR environment variable is not set. Please set it to the swarmbench project root directory (e.g., export SWARMBENCH_DIR=/path/to/swarmbench)"
    )]
    SwarmbenchDirNotSet,

    #[error("SWARMBENCH_DIR points to a non-existent directory: {0}")]
    SwarmbenchDirNotFound(PathBuf),

    #[error("Failed to create directory {path}: {source}")]
    DirCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Get the SWARMBENCH_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - SWARMBENCH_DIR is not set
/// - SWARMBENCH_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use swarmbench_env::env_utils::get_swarmbench_dir;
///
/// let root = get_swarmbench_dir()?;
/// println!("swarmbench directory: {}", root.display());
/// # Ok::<(), swarmbench_env::env_utils::EnvError>(())
/// ```
pub fn get_swarmbench_dir() -> Result<PathBuf, EnvError> {
    let root = env::var(SWARMBENCH_DIR).map_err(|_| EnvError::SwarmbenchDirNotSet)?;

    let path = PathBuf::from(root);

    if !path.exists() {
        return Err(EnvError::SwarmbenchDirNotFound(path));
    }

    Ok(path)
}

/// Create `path` and its parents if needed
pub fn ensure_dir(path: &Path) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .map_err(|source| EnvError::DirCreationFailed { path: path.to_path_buf(), source })?;
    }
    Ok(path.to_path_buf())
}

/// Get the path to the data_generated directory, creating it if necessary
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    ensure_dir(&get_swarmbench_dir()?.join(DATA_GENERATED))
}

/// Data directory to write into: `explicit` when given, else data_generated
/// (the resolved root is logged through [`check_swarmbench_env`])
///
/// # Example
///
/// ```no_run
/// use swarmbench_env::env_utils::resolve_data_dir;
///
/// let data_dir = resolve_data_dir(None)?;
/// println!("Data directory: {}", data_dir.display());
/// # Ok::<(), swarmbench_env::env_utils::EnvError>(())
/// ```
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, EnvError> {
    match explicit {
        Some(dir) => ensure_dir(dir),
        None => check_swarmbench_env(),
    }
}

/// `<data>/results`, created if needed
pub fn results_dir(data_dir: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(&data_dir.join(RESULTS))
}

/// `<data>/params`, created if needed
pub fn params_dir(data_dir: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(&data_dir.join(PARAMS))
}

/// `<data>/plots`, created if needed
pub fn plots_dir(data_dir: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(&data_dir.join(PLOTS))
}

/// Check if SWARMBENCH_DIR is properly configured and log where data goes
///
/// # Example
///
/// ```no_run
/// use swarmbench_env::env_utils::check_swarmbench_env;
///
/// if let Err(e) = check_swarmbench_env() {
///     eprintln!("Environment setup error: {}", e);
///     std::process::exit(1);
/// }
/// ```
pub fn check_swarmbench_env() -> Result<PathBuf, EnvError> {
    let root = get_swarmbench_dir()?;
    let data_generated = get_data_generated_dir()?;

    log::info!("SWARMBENCH_DIR: {}", root.display());
    log::info!("Data directory: {}", data_generated.display());

    Ok(data_generated)
}
