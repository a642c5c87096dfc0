use rand::Rng;
use swarmbench_testfunctions::ObjectiveFunction;
use swarmbench_vector::Vector;

use crate::config::PsoParams;
use crate::error::Result;

/// One member of a PSO swarm
///
/// The swarm-wide global best is not copied into the particle: it is lent to
/// [`Particle::update`] by the owning swarm for the duration of a sweep.
#[derive(Debug, Clone)]
pub struct Particle {
	pub position: Vector,
	pub velocity: Vector,
	pub best_position: Vector,
	pub best_value: f64,
}

impl Particle {
	/// Random in-domain position, zero velocity, personal best at the start point
	pub fn new<R: Rng + ?Sized>(
		function: &dyn ObjectiveFunction,
		dim: usize,
		rng: &mut R,
	) -> Result<Self> {
		let position = function.domain().random_vector(dim, rng)?;
		let best_value = function.evaluate(&position)?;
		Ok(Self {
			best_position: position.duplicate(),
			velocity: Vector::new(dim),
			position,
			best_value,
		})
	}

	/// `c1 r1 (pbest - x) + w v + c2 r2 (gbest - x)` with fresh uniform `r1`, `r2`
	pub fn update_velocity<R: Rng + ?Sized>(
		&mut self,
		params: &PsoParams,
		global_best: &Vector,
		rng: &mut R,
	) -> Result<()> {
		let dim = self.position.len();
		let r1 = Vector::standard_uniform(dim, rng);
		let r2 = Vector::standard_uniform(dim, rng);
		let cognitive = r1.scale(params.c1).prod(&self.best_position.sub(&self.position)?)?;
		let social = r2.scale(params.c2).prod(&global_best.sub(&self.position)?)?;
		self.velocity = cognitive.add(&self.velocity.scale(params.w))?.add(&social)?;
		Ok(())
	}

	/// Move along the current velocity. The position itself is never clamped, but
	/// the personal best only moves to strictly better in-domain points.
	/// Returns whether the personal best changed.
	pub fn update_position(&mut self, function: &dyn ObjectiveFunction) -> Result<bool> {
		self.position = self.position.add(&self.velocity)?;
		let value = function.evaluate(&self.position)?;
		if value < self.best_value && function.in_domain(&self.position) {
			self.best_value = value;
			self.best_position = self.position.duplicate();
			return Ok(true);
		}
		Ok(false)
	}

	pub fn update<R: Rng + ?Sized>(
		&mut self,
		params: &PsoParams,
		global_best: &Vector,
		function: &dyn ObjectiveFunction,
		rng: &mut R,
	) -> Result<bool> {
		self.update_velocity(params, global_best, rng)?;
		self.update_position(function)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use swarmbench_testfunctions::{Elliptic, Mishra1};

	#[test]
	fn test_new_particle_starts_at_rest() {
		let mut rng = StdRng::seed_from_u64(1);
		let p = Particle::new(&Elliptic, 4, &mut rng).unwrap();
		assert_eq!(p.velocity, Vector::new(4));
		assert_eq!(p.best_position, p.position);
		assert!(Elliptic.in_domain(&p.position));
		assert_eq!(p.best_value, Elliptic.evaluate(&p.position).unwrap());
	}

	#[test]
	fn test_zero_coefficients_keep_inertia_only() {
		let mut rng = StdRng::seed_from_u64(2);
		let mut p = Particle::new(&Elliptic, 3, &mut rng).unwrap();
		p.velocity = Vector::from_vec(vec![1.0, -2.0, 0.5]);
		let params = PsoParams { w: 0.5, c1: 0.0, c2: 0.0 };
		let gbest = p.position.duplicate();
		p.update_velocity(&params, &gbest, &mut rng).unwrap();
		assert_eq!(p.velocity.to_vec(), vec![0.5, -1.0, 0.25]);
	}

	#[test]
	fn test_out_of_domain_improvement_is_rejected() {
		// Mishra1 lives on [0, 1]; moving to the upper corner and beyond keeps improving
		let mut p = Particle {
			position: Vector::from_vec(vec![0.5, 0.5]),
			velocity: Vector::from_vec(vec![1.0, 0.0]),
			best_position: Vector::from_vec(vec![0.5, 0.5]),
			best_value: Mishra1.evaluate(&Vector::from_vec(vec![0.5, 0.5])).unwrap(),
		};
		let before = p.best_value;
		assert!(Mishra1.evaluate(&Vector::from_vec(vec![1.5, 0.5])).unwrap() < before);
		assert!(!p.update_position(&Mishra1).unwrap());
		assert_eq!(p.best_value, before);
		assert_eq!(p.position.to_vec(), vec![1.5, 0.5]);
	}

	#[test]
	fn test_dimension_mismatch_propagates() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut p = Particle::new(&Elliptic, 3, &mut rng).unwrap();
		let wrong = Vector::new(2);
		assert!(p.update(&PsoParams::default(), &wrong, &Elliptic, &mut rng).is_err());
	}
}
