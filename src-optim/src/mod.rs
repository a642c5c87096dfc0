//! Population based metaheuristics for box bounded minimization
//!
//! Three optimizers share one driving interface ([`Optimizer`]):
//! - inertia weight particle swarm optimization ([`Swarm`])
//! - DE/rand/1/bin differential evolution with an elitist best ([`DePopulation`])
//! - big bang big crunch around an inverse fitness center of mass ([`BbBcPopulation`])
//!
//! Each optimizer is built against one catalog function and is advanced one
//! iteration at a time by the caller. Every random draw goes through an
//! `rng: &mut R` argument, so seeded runs are reproducible.

use ndarray::Array1;

pub mod big_bang_big_crunch;
pub mod config;
pub mod crossover_binomial;
pub mod differential_evolution;
pub mod distinct_indices;
pub mod error;
pub mod optimizer;
pub mod particle;
pub mod recorder;
pub mod run_recorded;
pub mod swarm;

pub use big_bang_big_crunch::{BbBcPopulation, SENTINEL_MASS, center_of_mass, mass};
pub use config::{BbBcParams, BigBangSchedule, DeParams, PsoParams, RunConfig, RunConfigBuilder};
pub use differential_evolution::{DePopulation, MIN_DE_POPULATION};
pub use error::{OptimError, Result};
pub use optimizer::{Algorithm, AnyOptimizer, Optimizer};
pub use particle::Particle;
pub use recorder::{ConvergenceRecord, ConvergenceRecorder};
pub use run_recorded::run_recorded;
pub use swarm::Swarm;

/// Index and value of the smallest entry, the earliest one on ties
pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val < best_v {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

/// Reject empty populations, populations below `min_size` and empty search spaces
pub(crate) fn validate_shape(size: usize, dim: usize, min_size: usize) -> Result<()> {
	if size == 0 || size < min_size {
		return Err(OptimError::InvalidConfig(format!(
			"population size {} is below the minimum of {}",
			size,
			min_size.max(1)
		)));
	}
	if dim == 0 {
		return Err(OptimError::InvalidConfig("dimension must be positive".into()));
	}
	Ok(())
}
