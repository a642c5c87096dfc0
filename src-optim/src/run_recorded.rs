//! Fixed length run loop with convergence recording

use log::trace;
use rand::Rng;

use crate::error::Result;
use crate::optimizer::Optimizer;
use crate::recorder::ConvergenceRecorder;

/// Drive `optimizer` through iterations `0..=iterations`, sampling its best
/// value into `recorder` after every step. Returns the final best value.
pub fn run_recorded<O, R>(
	optimizer: &mut O,
	iterations: usize,
	recorder: &mut ConvergenceRecorder,
	rng: &mut R,
) -> Result<f64>
where
	O: Optimizer,
	R: Rng + ?Sized,
{
	for iteration in 0..=iterations {
		optimizer.do_iteration(iteration, rng)?;
		if recorder.record(iteration, optimizer.best_value()) {
			trace!("{} iteration {}: {:e}", optimizer.name(), iteration, optimizer.best_value());
		}
	}
	Ok(optimizer.best_value())
}
