//! Big bang big crunch: collapse to a fitness weighted center of mass, then
//! re-explode around it with a shrinking radius.

use std::sync::Arc;

use log::{debug, trace, warn};
use rand::Rng;
use swarmbench_testfunctions::{Domain, ObjectiveFunction, lookup};
use swarmbench_vector::Vector;

use crate::config::BbBcParams;
use crate::error::{OptimError, Result};
use crate::validate_shape;

/// Mass given to members whose objective value is exactly 0
pub const SENTINEL_MASS: f64 = f64::MAX;

/// Inverse objective value, [`SENTINEL_MASS`] for an exact zero
pub fn mass(value: f64) -> f64 {
	if value == 0.0 { SENTINEL_MASS } else { 1.0 / value }
}

/// `sum(m_i x_i) / sum(m_i)` over members whose mass is finite and not the sentinel
///
/// Sentinel members are left out of both sums instead of pulling the result
/// onto themselves; this is an approximation of the infinite mass limit.
/// The total mass saturates at `f64::MAX` instead of overflowing.
/// Returns `None` when no member has a usable mass.
pub fn center_of_mass(members: &[Vector], values: &[f64]) -> Result<Option<Vector>> {
	let Some(first) = members.first() else {
		return Ok(None);
	};
	let mut weighted = Vector::new(first.len());
	let mut total = 0.0;
	let mut contributors = 0;
	for (member, &value) in members.iter().zip(values) {
		let m = mass(value);
		if m == SENTINEL_MASS || !m.is_finite() {
			continue;
		}
		weighted = weighted.add(&member.scale(m))?;
		total = if total > f64::MAX - m { f64::MAX } else { total + m };
		contributors += 1;
	}
	if contributors == 0 {
		return Ok(None);
	}
	Ok(Some(weighted.scale(1.0 / total)))
}

#[derive(Debug, Clone)]
pub struct BbBcPopulation {
	params: BbBcParams,
	total_iterations: usize,
	function: Arc<dyn ObjectiveFunction>,
	domain: Domain,
	members: Vec<Vector>,
	values: Vec<f64>,
	centroid: Vector,
	centroid_value: f64,
}

impl BbBcPopulation {
	/// Population on a standard catalog function; `total_iterations` sets the
	/// pace of the explosion schedule
	pub fn new<R: Rng + ?Sized>(
		params: BbBcParams,
		size: usize,
		dim: usize,
		total_iterations: usize,
		function_id: u8,
		rng: &mut R,
	) -> Result<Self> {
		Self::with_function(params, size, dim, total_iterations, lookup(function_id)?, rng)
	}

	/// Population from the raw `[k]` or `[k, width_factor]` sequence
	pub fn from_control_params<R: Rng + ?Sized>(
		control: &[f64],
		size: usize,
		dim: usize,
		total_iterations: usize,
		function_id: u8,
		rng: &mut R,
	) -> Result<Self> {
		let params = BbBcParams::from_slice(control)?;
		Self::new(params, size, dim, total_iterations, function_id, rng)
	}

	pub fn with_function<R: Rng + ?Sized>(
		params: BbBcParams,
		size: usize,
		dim: usize,
		total_iterations: usize,
		function: Arc<dyn ObjectiveFunction>,
		rng: &mut R,
	) -> Result<Self> {
		validate_shape(size, dim, 1)?;
		if total_iterations == 0 {
			return Err(OptimError::InvalidConfig("total iterations must be positive".into()));
		}
		let domain = function.domain();
		let members = (0..size)
			.map(|_| domain.random_vector(dim, rng))
			.collect::<swarmbench_vector::Result<Vec<_>>>()?;
		debug!(
			"bbbc: {} members in dimension {} on {} with k={} width factor={} schedule={}",
			size,
			dim,
			function.name(),
			params.k,
			params.width_factor,
			params.schedule
		);
		let mut population = Self {
			params,
			total_iterations,
			function,
			domain,
			members,
			values: Vec::new(),
			centroid: Vector::new(dim),
			centroid_value: f64::NAN,
		};
		// the first centroid is accepted whatever its value
		let candidate = population.crunch_candidate()?;
		population.centroid_value = population.function.evaluate(&candidate)?;
		population.centroid = candidate;
		Ok(population)
	}

	/// `iteration / total_iterations`, clamped to `[0, 1]`
	pub fn proportion(&self, iteration: usize) -> f64 {
		(iteration as f64 / self.total_iterations as f64).clamp(0.0, 1.0)
	}

	/// Replace every member by `centroid + N(0, 1) * width * width_factor * explosion(p)`
	///
	/// Exploded members are not clamped to the domain.
	pub fn do_big_bang<R: Rng + ?Sized>(&mut self, proportion: f64, rng: &mut R) -> Result<()> {
		let factor = self.params.schedule.explosion_factor(self.params.k, proportion);
		let radius = self.domain.width() * self.params.width_factor * factor;
		let dim = self.centroid.len();
		for member in self.members.iter_mut() {
			*member = Vector::standard_normal(dim, rng).scale(radius).add(&self.centroid)?;
		}
		Ok(())
	}

	/// Recompute the center of mass and keep it only if it is strictly better
	/// than the current centroid. Returns whether it was accepted.
	pub fn do_big_crunch(&mut self) -> Result<bool> {
		let candidate = self.crunch_candidate()?;
		let value = self.function.evaluate(&candidate)?;
		let accept =
			candidate.is_finite() && (value < self.centroid_value || self.centroid_value.is_nan());
		if accept {
			self.centroid = candidate;
			self.centroid_value = value;
		}
		Ok(accept)
	}

	/// Big bang at this iteration's proportion, then big crunch
	pub fn do_iteration<R: Rng + ?Sized>(&mut self, iteration: usize, rng: &mut R) -> Result<()> {
		self.do_big_bang(self.proportion(iteration), rng)?;
		self.do_big_crunch()?;
		trace!("bbbc: centroid value {:e}", self.centroid_value);
		Ok(())
	}

	/// Clamped center of mass of the current members, evaluating them first
	fn crunch_candidate(&mut self) -> Result<Vector> {
		self.values = self
			.members
			.iter()
			.map(|m| self.function.evaluate(m))
			.collect::<swarmbench_vector::Result<Vec<_>>>()?;
		let raw = match center_of_mass(&self.members, &self.values)? {
			Some(center) => center,
			None => {
				// every member sits on a zero of the objective
				warn!("bbbc: no finite mass member, crunching onto the first member");
				self.members[0].duplicate()
			}
		};
		Ok(self.domain.clamp(&raw))
	}

	pub fn members(&self) -> &[Vector] {
		&self.members
	}

	/// Objective values of the members at the last crunch
	pub fn values(&self) -> &[f64] {
		&self.values
	}

	pub fn params(&self) -> &BbBcParams {
		&self.params
	}

	pub fn function(&self) -> &Arc<dyn ObjectiveFunction> {
		&self.function
	}

	pub fn total_iterations(&self) -> usize {
		self.total_iterations
	}

	pub fn centroid(&self) -> &Vector {
		&self.centroid
	}

	/// Cached objective value of the centroid
	pub fn centroid_value(&self) -> f64 {
		self.centroid_value
	}

	/// Objective value of the centroid recomputed through the function
	pub fn evaluate_centroid(&self) -> Result<f64> {
		Ok(self.function.evaluate(&self.centroid)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::BigBangSchedule;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_mass() {
		assert_eq!(mass(0.0), SENTINEL_MASS);
		assert_eq!(mass(4.0), 0.25);
	}

	#[test]
	fn test_center_of_mass_weights_by_inverse_value() {
		let members = vec![Vector::from_vec(vec![0.0, 0.0]), Vector::from_vec(vec![3.0, 3.0])];
		// masses 1 and 0.5
		let center = center_of_mass(&members, &[1.0, 2.0]).unwrap().unwrap();
		assert!((center.at(0).unwrap() - 1.0).abs() < 1e-12);
		assert!((center.at(1).unwrap() - 1.0).abs() < 1e-12);
	}

	#[test]
	fn test_center_of_mass_skips_sentinels() {
		let members = vec![
			Vector::from_vec(vec![4.0]),
			Vector::from_vec(vec![-1.0]),
			Vector::from_vec(vec![2.0]),
		];
		let center = center_of_mass(&members, &[0.0, 1.0, 1.0]).unwrap().unwrap();
		assert_eq!(center.to_vec(), vec![0.5]);
		assert_eq!(center_of_mass(&members, &[0.0, 0.0, 0.0]).unwrap(), None);
		let center = center_of_mass(&members, &[f64::NAN, 2.0, 0.0]).unwrap().unwrap();
		assert_eq!(center.to_vec(), vec![-1.0]);
	}

	#[test]
	fn test_total_mass_saturates() {
		let members = vec![Vector::from_vec(vec![0.5]), Vector::from_vec(vec![0.5])];
		let tiny = 1.0 / (f64::MAX * 0.75);
		let center = center_of_mass(&members, &[tiny, tiny]).unwrap().unwrap();
		assert!(center.is_finite());
		assert!(center.at(0).unwrap() > 0.0);
	}

	#[test]
	fn test_quadratic_schedule_runs() {
		let mut rng = StdRng::seed_from_u64(31);
		let params = BbBcParams { schedule: BigBangSchedule::Quadratic, ..BbBcParams::default() };
		let mut pop = BbBcPopulation::new(params, 10, 3, 20, 1, &mut rng).unwrap();
		for i in 0..=20 {
			pop.do_iteration(i, &mut rng).unwrap();
			assert!(pop.function().in_domain(pop.centroid()));
		}
	}

	#[test]
	fn test_last_iteration_collapses_geometric_bang() {
		let mut rng = StdRng::seed_from_u64(32);
		let mut pop = BbBcPopulation::new(BbBcParams::default(), 8, 2, 10, 3, &mut rng).unwrap();
		pop.do_big_bang(pop.proportion(10), &mut rng).unwrap();
		for member in pop.members() {
			for (a, b) in member.iter().zip(pop.centroid().iter()) {
				assert!((a - b).abs() < 1e-9);
			}
		}
		assert_eq!(pop.proportion(25), 1.0);
	}

	#[test]
	fn test_zero_total_iterations_is_rejected() {
		let mut rng = StdRng::seed_from_u64(33);
		assert!(BbBcPopulation::new(BbBcParams::default(), 8, 2, 0, 3, &mut rng).is_err());
	}
}
