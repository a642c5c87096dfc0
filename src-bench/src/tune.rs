//! Grid search over control parameters
//!
//! Every setting on an algorithm's grid is run `simulations` times for
//! `config.iterations` iterations; the setting with the lowest mean final
//! best value wins. Runs are sequential.

use std::sync::Arc;

use log::{debug, info};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use swarmbench_optim::{Algorithm, AnyOptimizer, OptimError, Optimizer, PsoParams, RunConfig};
use swarmbench_testfunctions::ObjectiveFunction;
use swarmbench_vector::Vector;

use crate::error::Result;
use crate::stats::mean_std;
use crate::trials::with_control_params;

/// Upper bound of the BB-BC `k` sweep
const K_BOUND: f64 = 0.1;

/// Grid resolution and repetitions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuneConfig {
    /// Grid points per unit interval
    pub steps: usize,
    /// Runs averaged per setting
    pub simulations: usize,
}

impl Default for TuneConfig {
    fn default() -> Self {
        Self { steps: 15, simulations: 3 }
    }
}

/// Winning setting of a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct TuneOutcome {
    pub params: Vector,
    /// Mean final best value of the winning setting
    pub score: f64,
    /// Number of settings run
    pub evaluated: usize,
}

/// Candidate settings for `algorithm`, in sweep order.
///
/// - PSO: `w` in `[0, 1)`, `c1` and `c2` in `[0, 2)`, each with `steps`
///   points, kept only inside the stability region
/// - DE: `F` in `(0, 1]` and `CR` in `[0, 1)`, step `1 / (2 steps)`
/// - BB-BC: `k` in `(0, 0.1)`, step `0.1 / (6 steps)`
pub fn grid(algorithm: Algorithm, steps: usize) -> Vec<Vec<f64>> {
    let steps = steps.max(1);
    let g = steps as f64;
    match algorithm {
        Algorithm::Pso => {
            let mut settings = Vec::new();
            for i in 0..steps {
                for j in 0..steps {
                    for l in 0..steps {
                        let params = PsoParams {
                            w: i as f64 / g,
                            c1: 2.0 * j as f64 / g,
                            c2: 2.0 * l as f64 / g,
                        };
                        if params.is_stable() {
                            settings.push(params.to_vec());
                        }
                    }
                }
            }
            settings
        }
        Algorithm::De => {
            let n = 2 * steps;
            let mut settings = Vec::with_capacity(n * n);
            for i in 1..=n {
                for j in 0..n {
                    settings.push(vec![i as f64 / n as f64, j as f64 / n as f64]);
                }
            }
            settings
        }
        Algorithm::BbBc => {
            let n = 6 * steps;
            (1..n).map(|i| vec![K_BOUND * i as f64 / n as f64]).collect()
        }
    }
}

/// Final best value of one uninstrumented run
fn simulate(
    algorithm: Algorithm,
    function: &Arc<dyn ObjectiveFunction>,
    config: &RunConfig,
    rng: &mut StdRng,
) -> Result<f64> {
    let mut optimizer = AnyOptimizer::build(algorithm, config, function.clone(), rng)?;
    for iteration in 0..config.iterations {
        optimizer.do_iteration(iteration, rng)?;
    }
    Ok(optimizer.best_value())
}

/// Sweep the grid of `algorithm` on `function` and return the best setting
pub fn tune(
    algorithm: Algorithm,
    function: &Arc<dyn ObjectiveFunction>,
    config: &RunConfig,
    tune_config: &TuneConfig,
    rng: &mut StdRng,
) -> Result<TuneOutcome> {
    config.validate()?;
    let settings = grid(algorithm, tune_config.steps);
    let total = settings.len();
    info!("tuning {} on {}: {} settings x {} runs", algorithm, function.name(), total, tune_config.simulations);

    let mut best: Option<TuneOutcome> = None;
    for (n, params) in settings.into_iter().enumerate() {
        let run_config = with_control_params(algorithm, config, &params)?;
        let mut results = Vec::with_capacity(tune_config.simulations);
        for _ in 0..tune_config.simulations.max(1) {
            results.push(simulate(algorithm, function, &run_config, rng)?);
        }
        let (score, std) = mean_std(&results);
        debug!("{} {}/{}: {:?} -> {:e} (std {:e})", function.name(), n + 1, total, params, score, std);

        let improves = match &best {
            Some(b) => score < b.score,
            None => score.is_finite(),
        };
        if improves {
            let params = Vector::from_vec(params);
            match &best {
                Some(b) => info!("{}: found {} which yields {:e} < {:e}", function.name(), params, score, b.score),
                None => info!("{}: starting from {} which yields {:e}", function.name(), params, score),
            }
            best = Some(TuneOutcome { params, score, evaluated: 0 });
        }
    }

    let mut outcome = best.ok_or_else(|| {
        OptimError::InvalidConfig(format!("no setting of {} gave a finite result", algorithm))
    })?;
    outcome.evaluated = total;
    info!("best setting for {} on {}: {}", algorithm, function.name(), outcome.params);
    Ok(outcome)
}
