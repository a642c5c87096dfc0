use std::path::PathBuf;

use swarmbench_env::EnvError;
use swarmbench_optim::OptimError;
use swarmbench_testfunctions::CatalogError;
use thiserror::Error;

/// Errors raised by the trial driver
#[derive(Error, Debug)]
pub enum BenchError {
    #[error(transparent)]
    Optim(#[from] OptimError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tuned parameter file {path}: {reason}")]
    InvalidTunedFile { path: PathBuf, reason: String },

    #[error("invalid series file {path}: {reason}")]
    InvalidSeriesFile { path: PathBuf, reason: String },

    #[error("unknown function: {0}")]
    UnknownFunction(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
