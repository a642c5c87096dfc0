use rand::Rng;
use swarmbench_testfunctions::Domain;
use swarmbench_vector::Vector;

use crate::error::Result;

/// Cyclic binomial crossover of `target` with the rand/1 mutant `a + f (b - c)`
///
/// Starts at a random coordinate and keeps writing consecutive coordinates
/// (wrapping around) while a uniform draw stays below `cr`, at most once per
/// coordinate. A mutant value outside the open domain interval is replaced
/// by a uniform draw from the domain.
#[allow(clippy::too_many_arguments)]
pub(crate) fn binomial_crossover<R: Rng + ?Sized>(
	target: &Vector,
	a: &Vector,
	b: &Vector,
	c: &Vector,
	f: f64,
	cr: f64,
	domain: &Domain,
	rng: &mut R,
) -> Result<Vector> {
	let dim = target.len();
	let mut trial = target.duplicate();
	if dim == 0 {
		return Ok(trial);
	}
	let mut n = rng.random_range(0..dim);
	let mut changed = 0;
	loop {
		let mutant = a.at(n)? + f * (b.at(n)? - c.at(n)?);
		let value = if domain.strictly_contains(mutant) { mutant } else { domain.sample(rng) };
		trial.edit(n, value)?;
		n = (n + 1) % dim;
		changed += 1;
		let carry_on = rng.random::<f64>() < cr;
		if !carry_on || changed >= dim {
			break;
		}
	}
	Ok(trial)
}
