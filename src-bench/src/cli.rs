//! swarmbench - Benchmarking population based metaheuristics
//! Command-line interface definitions for the swarmbench binary
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use swarmbench_env::resolve_data_dir;
use swarmbench_optim::{Algorithm, BigBangSchedule, RunConfig};
use swarmbench_testfunctions::{ObjectiveFunction, standard_catalog};

use crate::error::Result;
use crate::trials::resolve_function;

/// Benchmark PSO, DE and BB-BC on single objective test functions.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run repeated trials and write convergence CSV files
    Run(RunArgs),
    /// Grid search the control parameters of one algorithm
    Tune(TuneArgs),
    /// Plot convergence from previously written CSV files
    Plot(PlotArgs),
    /// List the test functions
    List,
}

/// Arguments shared by `run` and `tune`.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Test functions, by id or name, comma separated; `all` selects the catalog.
    #[arg(short, long, value_delimiter = ',', default_value = "all")]
    pub function: Vec<String>,

    /// JSON run configuration; fields left out keep their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for results, params and plots.
    /// Defaults to $SWARMBENCH_DIR/data_generated.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Seed for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Population size.
    #[arg(short, long)]
    pub particles: Option<usize>,

    /// Dimension of the search space.
    #[arg(short, long)]
    pub dimension: Option<usize>,

    /// Iterations per trial.
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Record the best value every N iterations.
    #[arg(short, long)]
    pub granularity: Option<usize>,

    /// Explosion schedule of BB-BC (geometric or quadratic).
    #[arg(long)]
    pub schedule: Option<BigBangSchedule>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Algorithms to run, comma separated.
    #[arg(short, long, value_delimiter = ',', default_value = "pso,de,bbbc")]
    pub algorithms: Vec<Algorithm>,

    /// Independent trials per algorithm.
    #[arg(short, long)]
    pub trials: Option<usize>,

    /// Use tuned parameter files when they exist.
    #[arg(long, default_value_t = false)]
    pub tuned: bool,

    /// Also write an HTML convergence plot per function.
    #[arg(long, default_value_t = false)]
    pub plot: bool,

    /// Do not write CSV files, only log the final statistics.
    #[arg(long, default_value_t = false)]
    pub no_record: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TuneArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Algorithm to tune.
    #[arg(short, long)]
    pub algorithm: Algorithm,

    /// Grid points per unit interval.
    #[arg(long, default_value_t = 15)]
    pub steps: usize,

    /// Runs averaged for each grid setting.
    #[arg(long, default_value_t = 3)]
    pub simulations: usize,
}

#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// Test functions, by id or name, comma separated; `all` selects the catalog.
    #[arg(short, long, value_delimiter = ',', default_value = "all")]
    pub function: Vec<String>,

    /// Series labels to plot, comma separated.
    #[arg(short, long, value_delimiter = ',', default_value = "pso,de,bbbc_geometric")]
    pub labels: Vec<String>,

    /// Directory holding results and plots.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Resolve function arguments; `all` expands to the whole catalog
pub fn resolve_functions(names: &[String]) -> Result<Vec<Arc<dyn ObjectiveFunction>>> {
    if names.iter().any(|n| n.eq_ignore_ascii_case("all")) {
        return Ok(standard_catalog().iter().cloned().collect());
    }
    names.iter().map(|n| resolve_function(n)).collect()
}

/// Data directory for an optional `--output-dir`
pub fn data_dir(output_dir: Option<&Path>) -> Result<PathBuf> {
    Ok(resolve_data_dir(output_dir)?)
}

impl CommonArgs {
    /// Configuration file (if any) with command line overrides applied
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str::<RunConfig>(&fs::read_to_string(path)?)?,
            None => RunConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(v) = self.particles {
            config.particles = v;
        }
        if let Some(v) = self.dimension {
            config.dimension = v;
        }
        if let Some(v) = self.iterations {
            config.iterations = v;
        }
        if let Some(v) = self.granularity {
            config.granularity = v;
        }
        if let Some(schedule) = self.schedule {
            config.bbbc.schedule = schedule;
        }
        config.validate()?;
        Ok(config)
    }
}

impl RunArgs {
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut config = self.common.run_config()?;
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if self.no_record {
            config.record = false;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["swarmbench", "run"]).unwrap();
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.algorithms, Algorithm::ALL.to_vec());
                assert_eq!(args.common.function, vec!["all"]);
                assert_eq!(args.run_config().unwrap(), RunConfig::default());
                assert!(!args.tuned && !args.plot);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_run_overrides() {
        let cli = Cli::try_parse_from([
            "swarmbench", "run", "-f", "ackley,3", "-a", "de,bb", "-d", "2", "-i", "50", "-t", "2",
            "--schedule", "quadratic", "--seed", "4", "--no-record",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else { panic!("expected run") };
        assert_eq!(args.algorithms, vec![Algorithm::De, Algorithm::BbBc]);
        let cfg = args.run_config().unwrap();
        assert_eq!((cfg.dimension, cfg.iterations, cfg.trials), (2, 50, 2));
        assert_eq!(cfg.bbbc.schedule, BigBangSchedule::Quadratic);
        assert_eq!(cfg.seed, Some(4));
        assert!(!cfg.record);
        let names: Vec<String> =
            resolve_functions(&args.common.function).unwrap().iter().map(|f| f.name().to_string()).collect();
        assert_eq!(names, vec!["ackley", "rastrigin"]);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["swarmbench", "run", "-a", "cmaes"]).is_err());
        assert!(Cli::try_parse_from(["swarmbench", "tune"]).is_err());
        let cli = Cli::try_parse_from(["swarmbench", "run", "-g", "0"]).unwrap();
        let Command::Run(args) = cli.command else { panic!("expected run") };
        assert!(args.run_config().is_err());
    }

    #[test]
    fn test_all_functions() {
        assert_eq!(resolve_functions(&["all".to_string()]).unwrap().len(), 10);
    }
}
