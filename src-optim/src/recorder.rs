//! Best-value sampling at a fixed iteration granularity

/// Samples an optimizer's best value every `granularity` iterations
#[derive(Debug, Clone)]
pub struct ConvergenceRecorder {
	granularity: usize,
	records: Vec<ConvergenceRecord>,
	best_value: Option<f64>,
}

/// A single sampled iteration
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceRecord {
	pub iteration: usize,
	pub best_value: f64,
	/// Whether this sample beats every earlier one
	pub is_improvement: bool,
}

impl ConvergenceRecorder {
	/// A granularity of 0 is treated as 1
	pub fn new(granularity: usize) -> Self {
		Self { granularity: granularity.max(1), records: Vec::new(), best_value: None }
	}

	pub fn granularity(&self) -> usize {
		self.granularity
	}

	/// Keep `best_value` if `iteration` falls on the sampling grid.
	/// Returns whether a record was stored.
	pub fn record(&mut self, iteration: usize, best_value: f64) -> bool {
		if iteration % self.granularity != 0 {
			return false;
		}
		let is_improvement = match self.best_value {
			Some(best) => best_value < best,
			None => true,
		};
		if is_improvement {
			self.best_value = Some(best_value);
		}
		self.records.push(ConvergenceRecord { iteration, best_value, is_improvement });
		true
	}

	pub fn records(&self) -> &[ConvergenceRecord] {
		&self.records
	}

	/// Sampled best values in iteration order
	pub fn values(&self) -> Vec<f64> {
		self.records.iter().map(|r| r.best_value).collect()
	}

	/// Sampled iteration numbers
	pub fn iterations(&self) -> Vec<usize> {
		self.records.iter().map(|r| r.iteration).collect()
	}

	pub fn num_records(&self) -> usize {
		self.records.len()
	}

	pub fn last(&self) -> Option<&ConvergenceRecord> {
		self.records.last()
	}

	pub fn clear(&mut self) {
		self.records.clear();
		self.best_value = None;
	}
}
