//! Trial driver for the swarmbench optimizers
//!
//! Runs repeated trials of PSO, DE and BB-BC on the test function catalog,
//! aggregates them per sampled iteration, writes convergence CSV files and
//! tuned parameter files, and plots the results.
//!
//! ```no_run
//! use swarmbench::{make_rng, resolve_function, run_trials};
//! use swarmbench_optim::{Algorithm, RunConfigBuilder};
//!
//! let config = RunConfigBuilder::new().dimension(2).iterations(100).trials(5).build();
//! let function = resolve_function("ackley")?;
//! let matrix = run_trials(Algorithm::Pso, &function, &config, None, &mut make_rng(Some(1)))?;
//! println!("{:?}", matrix.average_at_time());
//! # Ok::<(), swarmbench::BenchError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod params;
pub mod plot;
pub mod report;
pub mod stats;
pub mod trials;
pub mod tune;

pub use commands::{SeriesSummary, execute, run_benchmark, tune_functions};
pub use error::{BenchError, Result};
pub use params::{load_tuned, read_tuned, tuned_path, write_tuned};
pub use plot::{ConvergenceSeries, convergence_plot, write_convergence_plot};
pub use report::{SeriesFiles, read_series, write_series};
pub use stats::TrialMatrix;
pub use trials::{make_rng, resolve_function, run_trial, run_trials, series_label};
pub use tune::{TuneConfig, TuneOutcome, grid, tune};
