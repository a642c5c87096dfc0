//! Implementation of the `run`, `tune`, `plot` and `list` subcommands

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use swarmbench_env::{params_dir, plots_dir, results_dir};
use swarmbench_optim::{Algorithm, RunConfig};
use swarmbench_testfunctions::{ObjectiveFunction, standard_catalog};

use crate::cli::{Cli, Command, PlotArgs, RunArgs, TuneArgs, data_dir, resolve_functions};
use crate::error::Result;
use crate::params::{load_tuned, tuned_path, write_tuned};
use crate::plot::{ConvergenceSeries, write_convergence_plot};
use crate::report::{SeriesFiles, function_results_dir, write_series};
use crate::stats::mean_std;
use crate::trials::{make_rng, run_trials, series_label};
use crate::tune::{TuneConfig, TuneOutcome, tune};

/// Final statistics of one algorithm on one function
#[derive(Debug, Clone)]
pub struct SeriesSummary {
    pub function: String,
    pub label: String,
    pub final_mean: f64,
    pub final_std: f64,
    /// Written CSV files, when recording is on
    pub files: Option<SeriesFiles>,
}

pub fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Run(args) => run_command(args).map(|_| ()),
        Command::Tune(args) => tune_command(args).map(|_| ()),
        Command::Plot(args) => plot_command(args),
        Command::List => {
            for line in function_table() {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

pub fn run_command(args: &RunArgs) -> Result<Vec<SeriesSummary>> {
    let config = args.run_config()?;
    let functions = resolve_functions(&args.common.function)?;
    let data = data_dir(args.common.output_dir.as_deref())?;
    run_benchmark(&functions, &args.algorithms, &config, &data, args.tuned, args.plot)
}

/// Run every algorithm on every function, writing results under `data`
pub fn run_benchmark(
    functions: &[Arc<dyn ObjectiveFunction>],
    algorithms: &[Algorithm],
    config: &RunConfig,
    data: &Path,
    tuned: bool,
    plot: bool,
) -> Result<Vec<SeriesSummary>> {
    let mut rng = make_rng(config.seed);
    let mut summaries = Vec::new();

    for function in functions {
        let mut series = Vec::with_capacity(algorithms.len());
        for &algorithm in algorithms {
            let params = if tuned {
                let found = load_tuned(&params_dir(data)?, algorithm, function.name())?;
                if found.is_none() {
                    warn!("no tuned {} parameters for {}, using the configured ones", algorithm, function.name());
                }
                found
            } else {
                None
            };

            let label = series_label(algorithm, config);
            let matrix = run_trials(algorithm, function, config, params.as_deref(), &mut rng)?;
            let (final_mean, final_std) = mean_std(&matrix.final_values().to_vec());
            info!("{} {}: final best {:e} ± {:e}", function.name(), label, final_mean, final_std);

            let files = if config.record {
                let dir = function_results_dir(&results_dir(data)?, function.name())?;
                Some(write_series(&dir, &label, &matrix)?)
            } else {
                None
            };
            series.push(ConvergenceSeries::from_matrix(&label, &matrix));
            summaries.push(SeriesSummary {
                function: function.name().to_string(),
                label,
                final_mean,
                final_std,
                files,
            });
        }
        if plot {
            write_convergence_plot(&plots_dir(data)?, function.name(), &series)?;
        }
    }
    Ok(summaries)
}

pub fn tune_command(args: &TuneArgs) -> Result<Vec<TuneOutcome>> {
    let config = args.common.run_config()?;
    let functions = resolve_functions(&args.common.function)?;
    let data = data_dir(args.common.output_dir.as_deref())?;
    let tune_config = TuneConfig { steps: args.steps, simulations: args.simulations };
    tune_functions(&functions, args.algorithm, &config, &tune_config, &data)
}

/// Tune `algorithm` on each function and write the winners as tuned files
pub fn tune_functions(
    functions: &[Arc<dyn ObjectiveFunction>],
    algorithm: Algorithm,
    config: &RunConfig,
    tune_config: &TuneConfig,
    data: &Path,
) -> Result<Vec<TuneOutcome>> {
    let mut rng = make_rng(config.seed);
    let params = params_dir(data)?;
    let mut outcomes = Vec::with_capacity(functions.len());
    for function in functions {
        let outcome = tune(algorithm, function, config, tune_config, &mut rng)?;
        write_tuned(&tuned_path(&params, algorithm, function.name()), &outcome.params.to_vec())?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

pub fn plot_command(args: &PlotArgs) -> Result<()> {
    let functions = resolve_functions(&args.function)?;
    let data = data_dir(args.output_dir.as_deref())?;
    let results = results_dir(&data)?;
    let plots = plots_dir(&data)?;
    for function in &functions {
        let dir = results.join(function.name());
        let mut series = Vec::new();
        for label in &args.labels {
            if !SeriesFiles::new(&dir, label).avg.exists() {
                warn!("no {} results for {} in {}", label, function.name(), dir.display());
                continue;
            }
            series.push(ConvergenceSeries::from_files(&dir, label)?);
        }
        if series.is_empty() {
            continue;
        }
        write_convergence_plot(&plots, function.name(), &series)?;
    }
    Ok(())
}

/// One line per catalog function: id, name, domain and description
pub fn function_table() -> Vec<String> {
    standard_catalog()
        .iter()
        .map(|f| {
            let domain = f.domain();
            format!(
                "{:>3}  {:<16} [{}, {}]  {}{}",
                f.id(),
                f.name(),
                domain.low,
                domain.high,
                f.description(),
                if f.multimodal() { " (multimodal)" } else { "" }
            )
        })
        .collect()
}
