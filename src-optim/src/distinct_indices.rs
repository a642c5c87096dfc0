use rand::Rng;

use crate::error::{OptimError, Result};

/// Draw `k` pairwise distinct indices from `0..pool`
///
/// All `k` are redrawn together until no two coincide, so every ordered
/// k-tuple of distinct indices is equally likely. Indices are not filtered
/// against the member being updated.
pub fn distinct_indices<R: Rng + ?Sized>(k: usize, pool: usize, rng: &mut R) -> Result<Vec<usize>> {
	if k > pool {
		return Err(OptimError::InvalidConfig(format!(
			"cannot draw {} distinct indices from a pool of {}",
			k, pool
		)));
	}
	loop {
		let idxs: Vec<usize> = (0..k).map(|_| rng.random_range(0..pool)).collect();
		let distinct = idxs.iter().enumerate().all(|(i, a)| idxs[..i].iter().all(|b| a != b));
		if distinct {
			return Ok(idxs);
		}
	}
}
