//! Run configuration and per-algorithm control parameters
//!
//! Everything an optimizer or a trial driver needs is carried in these values;
//! nothing is read from global state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OptimError, Result};

fn check_len(algorithm: &'static str, values: &[f64], expected: usize) -> Result<()> {
	if values.len() != expected {
		return Err(OptimError::ControlParams { algorithm, expected, got: values.len() });
	}
	Ok(())
}

/// Inertia weight PSO parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsoParams {
	/// Inertia weight
	pub w: f64,
	/// Cognitive (personal best) acceleration
	pub c1: f64,
	/// Social (global best) acceleration
	pub c2: f64,
}

impl Default for PsoParams {
	fn default() -> Self {
		Self { w: 0.7, c1: 1.4, c2: 1.4 }
	}
}

impl PsoParams {
	/// From the `[w, c1, c2]` control parameter sequence
	pub fn from_slice(values: &[f64]) -> Result<Self> {
		check_len("pso", values, 3)?;
		Ok(Self { w: values[0], c1: values[1], c2: values[2] })
	}

	pub fn to_vec(&self) -> Vec<f64> {
		vec![self.w, self.c1, self.c2]
	}

	/// Poli's order-1 and order-2 stability region: `c1 + c2 < 24 (1 - w^2) / (7 - 5 w)`
	pub fn is_stable(&self) -> bool {
		let w = self.w;
		if w.abs() >= 1.0 {
			return false;
		}
		self.c1 + self.c2 < 24.0 * (1.0 - w * w) / (7.0 - 5.0 * w)
	}
}

/// DE/rand/1/bin parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeParams {
	/// Differential weight
	pub f: f64,
	/// Crossover continuation probability
	pub cr: f64,
}

impl Default for DeParams {
	fn default() -> Self {
		Self { f: 0.5, cr: 0.5 }
	}
}

impl DeParams {
	/// From the `[F, CR]` control parameter sequence
	pub fn from_slice(values: &[f64]) -> Result<Self> {
		check_len("de", values, 2)?;
		Ok(Self { f: values[0], cr: values[1] })
	}

	pub fn to_vec(&self) -> Vec<f64> {
		vec![self.f, self.cr]
	}
}

/// How the big bang explosion radius shrinks over a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BigBangSchedule {
	/// `k^p - k`
	#[default]
	Geometric,
	/// `(1 - p)^2`
	Quadratic,
}

impl BigBangSchedule {
	/// Explosion factor at run proportion `p` in `[0, 1]`
	pub fn explosion_factor(&self, k: f64, p: f64) -> f64 {
		match self {
			BigBangSchedule::Geometric => k.powf(p) - k,
			BigBangSchedule::Quadratic => (1.0 - p).powi(2),
		}
	}
}

impl fmt::Display for BigBangSchedule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BigBangSchedule::Geometric => write!(f, "geometric"),
			BigBangSchedule::Quadratic => write!(f, "quadratic"),
		}
	}
}

impl FromStr for BigBangSchedule {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"geometric" | "geo" | "orig" | "original" => Ok(BigBangSchedule::Geometric),
			"quadratic" | "quad" | "mod" | "modified" => Ok(BigBangSchedule::Quadratic),
			_ => Err(format!("unknown big bang schedule: {}", s)),
		}
	}
}

/// Big bang big crunch parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BbBcParams {
	/// Base of the geometric explosion schedule
	pub k: f64,
	/// Fraction of the domain width used as the explosion radius
	pub width_factor: f64,
	pub schedule: BigBangSchedule,
}

impl Default for BbBcParams {
	fn default() -> Self {
		Self { k: 0.005, width_factor: 0.25, schedule: BigBangSchedule::Geometric }
	}
}

impl BbBcParams {
	/// From `[k]` or `[k, width_factor]`; the schedule keeps its default
	pub fn from_slice(values: &[f64]) -> Result<Self> {
		Self::default().with_slice(values)
	}

	/// Copy with the fields carried by `[k]` or `[k, width_factor]` replaced
	pub fn with_slice(&self, values: &[f64]) -> Result<Self> {
		let mut params = *self;
		match values {
			[k] => params.k = *k,
			[k, width] => {
				params.k = *k;
				params.width_factor = *width;
			}
			_ => return Err(OptimError::ControlParams { algorithm: "bbbc", expected: 2, got: values.len() }),
		}
		Ok(params)
	}

	pub fn to_vec(&self) -> Vec<f64> {
		vec![self.k, self.width_factor]
	}
}

/// Settings shared by every trial of a benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
	/// Population size for every algorithm
	pub particles: usize,
	/// Dimension of the search space
	pub dimension: usize,
	/// Iterations per trial; the run loop performs `iterations + 1` steps
	pub iterations: usize,
	/// Record the best value every `granularity` iterations
	pub granularity: usize,
	/// Independent trials per algorithm
	pub trials: usize,
	/// Write recorded series to disk
	pub record: bool,
	/// Seed for reproducible runs, entropy seeded when absent
	pub seed: Option<u64>,
	pub pso: PsoParams,
	pub de: DeParams,
	pub bbbc: BbBcParams,
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			particles: 30,
			dimension: 10,
			iterations: 5000,
			granularity: 5,
			trials: 20,
			record: true,
			seed: None,
			pso: PsoParams::default(),
			de: DeParams::default(),
			bbbc: BbBcParams::default(),
		}
	}
}

impl RunConfig {
	pub fn validate(&self) -> Result<()> {
		let checks = [
			("particles", self.particles),
			("dimension", self.dimension),
			("iterations", self.iterations),
			("granularity", self.granularity),
			("trials", self.trials),
		];
		for (name, value) in checks {
			if value == 0 {
				return Err(OptimError::InvalidConfig(format!("{} must be positive", name)));
			}
		}
		Ok(())
	}

	/// Number of recorded samples per trial, iteration 0 included
	pub fn samples(&self) -> usize {
		self.iterations / self.granularity.max(1) + 1
	}
}

/// Fluent builder for `RunConfig`
#[derive(Debug, Default)]
pub struct RunConfigBuilder {
	cfg: RunConfig,
}

impl RunConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: RunConfig::default() }
	}
	pub fn particles(mut self, v: usize) -> Self {
		self.cfg.particles = v;
		self
	}
	pub fn dimension(mut self, v: usize) -> Self {
		self.cfg.dimension = v;
		self
	}
	pub fn iterations(mut self, v: usize) -> Self {
		self.cfg.iterations = v;
		self
	}
	pub fn granularity(mut self, v: usize) -> Self {
		self.cfg.granularity = v;
		self
	}
	pub fn trials(mut self, v: usize) -> Self {
		self.cfg.trials = v;
		self
	}
	pub fn record(mut self, v: bool) -> Self {
		self.cfg.record = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn pso(mut self, v: PsoParams) -> Self {
		self.cfg.pso = v;
		self
	}
	pub fn de(mut self, v: DeParams) -> Self {
		self.cfg.de = v;
		self
	}
	pub fn bbbc(mut self, v: BbBcParams) -> Self {
		self.cfg.bbbc = v;
		self
	}
	pub fn schedule(mut self, v: BigBangSchedule) -> Self {
		self.cfg.bbbc.schedule = v;
		self
	}
	pub fn build(self) -> RunConfig {
		self.cfg
	}
}
