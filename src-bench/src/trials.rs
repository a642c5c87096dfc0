//! Repeated independent trials of one algorithm on one function

use std::sync::Arc;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use swarmbench_optim::{
    Algorithm, AnyOptimizer, ConvergenceRecorder, DeParams, PsoParams, RunConfig,
    run_recorded,
};
use swarmbench_testfunctions::{ObjectiveFunction, standard_catalog};

use crate::error::{BenchError, Result};
use crate::stats::TrialMatrix;

/// Seeded generator when `seed` is set, entropy seeded otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Resolve a function from its numeric id or its name
pub fn resolve_function(spec: &str) -> Result<Arc<dyn ObjectiveFunction>> {
    let catalog = standard_catalog();
    if let Ok(id) = spec.trim().parse::<u8>() {
        return Ok(catalog.get(id)?.clone());
    }
    catalog
        .by_name(spec.trim())
        .cloned()
        .ok_or_else(|| BenchError::UnknownFunction(spec.to_string()))
}

/// File label of an algorithm's series; BB-BC carries its schedule
pub fn series_label(algorithm: Algorithm, config: &RunConfig) -> String {
    match algorithm {
        Algorithm::BbBc => format!("{}_{}", algorithm.tag(), config.bbbc.schedule),
        _ => algorithm.tag().to_string(),
    }
}

/// Copy of `config` with `algorithm`'s control parameters replaced by `params`
pub fn with_control_params(
    algorithm: Algorithm,
    config: &RunConfig,
    params: &[f64],
) -> Result<RunConfig> {
    let mut config = config.clone();
    match algorithm {
        Algorithm::Pso => config.pso = PsoParams::from_slice(params)?,
        Algorithm::De => config.de = DeParams::from_slice(params)?,
        Algorithm::BbBc => config.bbbc = config.bbbc.with_slice(params)?,
    }
    Ok(config)
}

/// One trial: build the optimizer, run it and return the sampled best values
pub fn run_trial(
    algorithm: Algorithm,
    function: &Arc<dyn ObjectiveFunction>,
    config: &RunConfig,
    rng: &mut StdRng,
) -> Result<ConvergenceRecorder> {
    let mut optimizer = AnyOptimizer::build(algorithm, config, function.clone(), rng)?;
    let mut recorder = ConvergenceRecorder::new(config.granularity);
    run_recorded(&mut optimizer, config.iterations, &mut recorder, rng)?;
    Ok(recorder)
}

/// Run `config.trials` independent trials one after the other.
///
/// `params` overrides the algorithm's control parameters from `config`.
pub fn run_trials(
    algorithm: Algorithm,
    function: &Arc<dyn ObjectiveFunction>,
    config: &RunConfig,
    params: Option<&[f64]>,
    rng: &mut StdRng,
) -> Result<TrialMatrix> {
    config.validate()?;
    let config = match params {
        Some(params) => with_control_params(algorithm, config, params)?,
        None => config.clone(),
    };
    debug!(
        "{} on {}: params {:?}, {} particles, dimension {}",
        series_label(algorithm, &config),
        function.name(),
        algorithm.control_params(&config),
        config.particles,
        config.dimension
    );

    let iterations: Vec<usize> = (0..=config.iterations).step_by(config.granularity).collect();
    let mut matrix = TrialMatrix::new(iterations);
    for trial in 0..config.trials {
        let recorder = run_trial(algorithm, function, &config, rng)?;
        let values = recorder.values();
        info!(
            "{} {} trial {}/{}: best {:e}",
            function.name(),
            series_label(algorithm, &config),
            trial + 1,
            config.trials,
            values.last().copied().unwrap_or(f64::NAN)
        );
        if !matrix.push_trial(&values) {
            return Err(swarmbench_optim::OptimError::InvalidConfig(format!(
                "trial recorded {} samples, expected {}",
                values.len(),
                matrix.num_samples()
            ))
            .into());
        }
    }
    Ok(matrix)
}
