//! DE/rand/1/bin population with an elitist best-ever memory

use std::sync::Arc;

use log::{debug, trace};
use ndarray::Array1;
use rand::Rng;
use swarmbench_testfunctions::{Domain, ObjectiveFunction, lookup};
use swarmbench_vector::Vector;

use crate::config::DeParams;
use crate::crossover_binomial::binomial_crossover;
use crate::distinct_indices::distinct_indices;
use crate::error::Result;
use crate::{argmin, validate_shape};

/// Smallest population the rand/1 mutation can draw three distinct parents from
pub const MIN_DE_POPULATION: usize = 3;

#[derive(Debug, Clone)]
pub struct DePopulation {
	params: DeParams,
	function: Arc<dyn ObjectiveFunction>,
	domain: Domain,
	members: Vec<Vector>,
	energies: Vec<f64>,
	best: Vector,
	best_value: f64,
}

impl DePopulation {
	/// Population on a standard catalog function
	pub fn new<R: Rng + ?Sized>(
		params: DeParams,
		size: usize,
		dim: usize,
		function_id: u8,
		rng: &mut R,
	) -> Result<Self> {
		Self::with_function(params, size, dim, lookup(function_id)?, rng)
	}

	/// Population from the raw `[F, CR]` sequence
	pub fn from_control_params<R: Rng + ?Sized>(
		control: &[f64],
		size: usize,
		dim: usize,
		function_id: u8,
		rng: &mut R,
	) -> Result<Self> {
		Self::new(DeParams::from_slice(control)?, size, dim, function_id, rng)
	}

	pub fn with_function<R: Rng + ?Sized>(
		params: DeParams,
		size: usize,
		dim: usize,
		function: Arc<dyn ObjectiveFunction>,
		rng: &mut R,
	) -> Result<Self> {
		validate_shape(size, dim, MIN_DE_POPULATION)?;
		let domain = function.domain();
		let members = (0..size)
			.map(|_| domain.random_vector(dim, rng))
			.collect::<swarmbench_vector::Result<Vec<_>>>()?;
		let energies = members
			.iter()
			.map(|m| function.evaluate(m))
			.collect::<swarmbench_vector::Result<Vec<_>>>()?;
		let (best_index, best_value) = argmin(&Array1::from_vec(energies.clone()));
		debug!(
			"de: {} members in dimension {} on {} with F={} CR={}",
			size,
			dim,
			function.name(),
			params.f,
			params.cr
		);
		Ok(Self {
			params,
			function,
			domain,
			best: members[best_index].duplicate(),
			best_value,
			members,
			energies,
		})
	}

	/// One sweep over the population
	///
	/// Members are replaced in place, so a later member's parents may already
	/// be this sweep's offspring.
	pub fn do_iteration<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
		let size = self.members.len();
		for m in 0..size {
			let idxs = distinct_indices(3, size, rng)?;
			let trial = binomial_crossover(
				&self.members[m],
				&self.members[idxs[0]],
				&self.members[idxs[1]],
				&self.members[idxs[2]],
				self.params.f,
				self.params.cr,
				&self.domain,
				rng,
			)?;
			let trial_value = self.function.evaluate(&trial)?;
			if trial_value < self.energies[m] {
				self.energies[m] = trial_value;
				self.members[m] = trial.duplicate();
			}
			if trial_value < self.best_value {
				self.best_value = trial_value;
				self.best = trial;
			}
		}
		trace!("de: best {:e}", self.best_value);
		Ok(())
	}

	pub fn members(&self) -> &[Vector] {
		&self.members
	}

	/// Cached objective value of each member
	pub fn energies(&self) -> &[f64] {
		&self.energies
	}

	pub fn params(&self) -> &DeParams {
		&self.params
	}

	pub fn function(&self) -> &Arc<dyn ObjectiveFunction> {
		&self.function
	}

	/// Best vector ever produced, possibly no longer in the population
	pub fn best(&self) -> &Vector {
		&self.best
	}

	pub fn best_value(&self) -> f64 {
		self.best_value
	}
}
