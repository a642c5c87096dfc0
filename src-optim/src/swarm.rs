//! Inertia weight particle swarm optimization

use std::sync::Arc;

use log::{debug, trace};
use ndarray::Array1;
use rand::Rng;
use swarmbench_testfunctions::{ObjectiveFunction, lookup};
use swarmbench_vector::Vector;

use crate::config::PsoParams;
use crate::error::Result;
use crate::particle::Particle;
use crate::{argmin, validate_shape};

/// A PSO swarm and its global best
#[derive(Debug, Clone)]
pub struct Swarm {
	params: PsoParams,
	function: Arc<dyn ObjectiveFunction>,
	particles: Vec<Particle>,
	global_best: Vector,
	global_best_value: f64,
}

impl Swarm {
	/// Swarm on a standard catalog function
	pub fn new<R: Rng + ?Sized>(
		params: PsoParams,
		size: usize,
		dim: usize,
		function_id: u8,
		rng: &mut R,
	) -> Result<Self> {
		Self::with_function(params, size, dim, lookup(function_id)?, rng)
	}

	/// Swarm from the raw `[w, c1, c2]` sequence
	pub fn from_control_params<R: Rng + ?Sized>(
		control: &[f64],
		size: usize,
		dim: usize,
		function_id: u8,
		rng: &mut R,
	) -> Result<Self> {
		Self::new(PsoParams::from_slice(control)?, size, dim, function_id, rng)
	}

	pub fn with_function<R: Rng + ?Sized>(
		params: PsoParams,
		size: usize,
		dim: usize,
		function: Arc<dyn ObjectiveFunction>,
		rng: &mut R,
	) -> Result<Self> {
		validate_shape(size, dim, 1)?;
		let particles = (0..size)
			.map(|_| Particle::new(function.as_ref(), dim, rng))
			.collect::<Result<Vec<_>>>()?;
		debug!(
			"pso: {} particles in dimension {} on {} with w={} c1={} c2={}",
			size,
			dim,
			function.name(),
			params.w,
			params.c1,
			params.c2
		);
		let mut swarm = Self {
			params,
			function,
			particles,
			global_best: Vector::new(dim),
			global_best_value: f64::INFINITY,
		};
		swarm.refresh_global_best();
		Ok(swarm)
	}

	/// Move every particle once against this sweep's global best, then refresh it
	pub fn do_update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
		let global_best = &self.global_best;
		for particle in self.particles.iter_mut() {
			particle.update(&self.params, global_best, self.function.as_ref(), rng)?;
		}
		self.refresh_global_best();
		trace!("pso: global best {:e}", self.global_best_value);
		Ok(())
	}

	/// Best personal best over the swarm, earliest particle on ties
	fn refresh_global_best(&mut self) {
		let values = Array1::from_iter(self.particles.iter().map(|p| p.best_value));
		let (index, value) = argmin(&values);
		self.global_best = self.particles[index].best_position.duplicate();
		self.global_best_value = value;
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn params(&self) -> &PsoParams {
		&self.params
	}

	pub fn function(&self) -> &Arc<dyn ObjectiveFunction> {
		&self.function
	}

	pub fn global_best_vector(&self) -> &Vector {
		&self.global_best
	}

	pub fn global_best_value(&self) -> f64 {
		self.global_best_value
	}
}
