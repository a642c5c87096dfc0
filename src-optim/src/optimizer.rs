//! Common driving interface over the three population optimizers

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;
use swarmbench_testfunctions::ObjectiveFunction;
use swarmbench_vector::Vector;

use crate::big_bang_big_crunch::BbBcPopulation;
use crate::config::RunConfig;
use crate::differential_evolution::DePopulation;
use crate::error::Result;
use crate::swarm::Swarm;

/// An optimizer advanced one step at a time by an external loop
pub trait Optimizer {
	fn name(&self) -> &'static str;

	/// Advance by one step. Only BB-BC uses `iteration`, to place itself on its
	/// explosion schedule.
	fn do_iteration<R: Rng + ?Sized>(&mut self, iteration: usize, rng: &mut R) -> Result<()>;

	/// Current best candidate
	fn best_vector(&self) -> &Vector;

	/// Objective value of [`best_vector`](Optimizer::best_vector)
	fn best_value(&self) -> f64;
}

impl Optimizer for Swarm {
	fn name(&self) -> &'static str {
		"pso"
	}
	fn do_iteration<R: Rng + ?Sized>(&mut self, _iteration: usize, rng: &mut R) -> Result<()> {
		self.do_update(rng)
	}
	fn best_vector(&self) -> &Vector {
		self.global_best_vector()
	}
	fn best_value(&self) -> f64 {
		self.global_best_value()
	}
}

impl Optimizer for DePopulation {
	fn name(&self) -> &'static str {
		"de"
	}
	fn do_iteration<R: Rng + ?Sized>(&mut self, _iteration: usize, rng: &mut R) -> Result<()> {
		DePopulation::do_iteration(self, rng)
	}
	fn best_vector(&self) -> &Vector {
		self.best()
	}
	fn best_value(&self) -> f64 {
		DePopulation::best_value(self)
	}
}

impl Optimizer for BbBcPopulation {
	fn name(&self) -> &'static str {
		"bbbc"
	}
	fn do_iteration<R: Rng + ?Sized>(&mut self, iteration: usize, rng: &mut R) -> Result<()> {
		BbBcPopulation::do_iteration(self, iteration, rng)
	}
	fn best_vector(&self) -> &Vector {
		self.centroid()
	}
	fn best_value(&self) -> f64 {
		self.centroid_value()
	}
}

/// Which optimizer to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	Pso,
	De,
	BbBc,
}

impl Algorithm {
	pub const ALL: [Algorithm; 3] = [Algorithm::Pso, Algorithm::De, Algorithm::BbBc];

	/// Lowercase tag used in file names
	pub fn tag(&self) -> &'static str {
		match self {
			Algorithm::Pso => "pso",
			Algorithm::De => "de",
			Algorithm::BbBc => "bbbc",
		}
	}

	/// Control parameters of this algorithm taken from `config`
	pub fn control_params(&self, config: &RunConfig) -> Vec<f64> {
		match self {
			Algorithm::Pso => config.pso.to_vec(),
			Algorithm::De => config.de.to_vec(),
			Algorithm::BbBc => config.bbbc.to_vec(),
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.tag())
	}
}

impl FromStr for Algorithm {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let t = s.to_lowercase();
		match t.as_str() {
			"pso" | "swarm" | "particle-swarm" => Ok(Algorithm::Pso),
			"de" | "rand1bin" | "differential-evolution" => Ok(Algorithm::De),
			"bbbc" | "bb" | "bb-bc" | "bb_bc" | "big-bang" => Ok(Algorithm::BbBc),
			_ => Err(format!("unknown algorithm: {}", s)),
		}
	}
}

/// Any of the three optimizers behind one concrete type
#[derive(Debug, Clone)]
pub enum AnyOptimizer {
	Pso(Swarm),
	De(DePopulation),
	BbBc(BbBcPopulation),
}

impl AnyOptimizer {
	/// Build `algorithm` with the population, dimension and parameters of `config`
	pub fn build<R: Rng + ?Sized>(
		algorithm: Algorithm,
		config: &RunConfig,
		function: Arc<dyn ObjectiveFunction>,
		rng: &mut R,
	) -> Result<Self> {
		let (size, dim) = (config.particles, config.dimension);
		Ok(match algorithm {
			Algorithm::Pso => AnyOptimizer::Pso(Swarm::with_function(config.pso, size, dim, function, rng)?),
			Algorithm::De => AnyOptimizer::De(DePopulation::with_function(config.de, size, dim, function, rng)?),
			Algorithm::BbBc => AnyOptimizer::BbBc(BbBcPopulation::with_function(
				config.bbbc,
				size,
				dim,
				config.iterations,
				function,
				rng,
			)?),
		})
	}

	pub fn algorithm(&self) -> Algorithm {
		match self {
			AnyOptimizer::Pso(_) => Algorithm::Pso,
			AnyOptimizer::De(_) => Algorithm::De,
			AnyOptimizer::BbBc(_) => Algorithm::BbBc,
		}
	}
}

impl Optimizer for AnyOptimizer {
	fn name(&self) -> &'static str {
		match self {
			AnyOptimizer::Pso(o) => o.name(),
			AnyOptimizer::De(o) => o.name(),
			AnyOptimizer::BbBc(o) => o.name(),
		}
	}
	fn do_iteration<R: Rng + ?Sized>(&mut self, iteration: usize, rng: &mut R) -> Result<()> {
		match self {
			AnyOptimizer::Pso(o) => Optimizer::do_iteration(o, iteration, rng),
			AnyOptimizer::De(o) => Optimizer::do_iteration(o, iteration, rng),
			AnyOptimizer::BbBc(o) => Optimizer::do_iteration(o, iteration, rng),
		}
	}
	fn best_vector(&self) -> &Vector {
		match self {
			AnyOptimizer::Pso(o) => o.best_vector(),
			AnyOptimizer::De(o) => o.best_vector(),
			AnyOptimizer::BbBc(o) => o.best_vector(),
		}
	}
	fn best_value(&self) -> f64 {
		match self {
			AnyOptimizer::Pso(o) => Optimizer::best_value(o),
			AnyOptimizer::De(o) => Optimizer::best_value(o),
			AnyOptimizer::BbBc(o) => Optimizer::best_value(o),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::RunConfigBuilder;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use swarmbench_testfunctions::lookup;

	#[test]
	fn test_algorithm_parsing() {
		assert_eq!("PSO".parse::<Algorithm>(), Ok(Algorithm::Pso));
		assert_eq!("de".parse::<Algorithm>(), Ok(Algorithm::De));
		assert_eq!("bb-bc".parse::<Algorithm>(), Ok(Algorithm::BbBc));
		assert!("cmaes".parse::<Algorithm>().is_err());
		for a in Algorithm::ALL {
			assert_eq!(a.tag().parse::<Algorithm>(), Ok(a));
		}
	}

	#[test]
	fn test_build_each_algorithm() {
		let cfg = RunConfigBuilder::new().particles(8).dimension(3).iterations(10).build();
		let mut rng = StdRng::seed_from_u64(41);
		for a in Algorithm::ALL {
			let mut opt = AnyOptimizer::build(a, &cfg, lookup(1).unwrap(), &mut rng).unwrap();
			assert_eq!(opt.algorithm(), a);
			assert_eq!(opt.name(), a.tag());
			assert_eq!(opt.best_vector().len(), 3);
			opt.do_iteration(0, &mut rng).unwrap();
			assert!(opt.best_value().is_finite());
		}
	}

	#[test]
	fn test_control_params_follow_config() {
		let cfg = RunConfig::default();
		assert_eq!(Algorithm::Pso.control_params(&cfg), vec![0.7, 1.4, 1.4]);
		assert_eq!(Algorithm::De.control_params(&cfg), vec![0.5, 0.5]);
		assert_eq!(Algorithm::BbBc.control_params(&cfg), vec![0.005, 0.25]);
	}
}
