//! Statistics across repeated trials
//!
//! Each trial yields one best-value series sampled on the same iteration
//! grid. The series are stacked into a matrix with one row per trial, and
//! the statistics below are taken column by column ("at time" t).

use ndarray::{Array1, Array2, Axis};

/// Best-value series of repeated trials, rows are trials
#[derive(Debug, Clone, PartialEq)]
pub struct TrialMatrix {
    iterations: Vec<usize>,
    values: Array2<f64>,
}

impl TrialMatrix {
    /// An empty matrix sampled at `iterations`
    pub fn new(iterations: Vec<usize>) -> Self {
        let columns = iterations.len();
        Self { iterations, values: Array2::zeros((0, columns)) }
    }

    /// Append the series of one trial; returns false if its length does not
    /// match the sampling grid
    pub fn push_trial(&mut self, series: &[f64]) -> bool {
        if series.len() != self.iterations.len() {
            return false;
        }
        self.values.push_row(ndarray::ArrayView1::from(series)).is_ok()
    }

    /// Sampled iteration numbers, one per column
    pub fn iterations(&self) -> &[usize] {
        &self.iterations
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn num_trials(&self) -> usize {
        self.values.nrows()
    }

    pub fn num_samples(&self) -> usize {
        self.iterations.len()
    }

    /// Mean best value at each sampled iteration
    pub fn average_at_time(&self) -> Array1<f64> {
        average_at_time(&self.values)
    }

    /// Unbiased variance at each sampled iteration
    pub fn variance_at_time(&self) -> Array1<f64> {
        variance_at_time(&self.values)
    }

    pub fn std_at_time(&self) -> Array1<f64> {
        self.variance_at_time().mapv(f64::sqrt)
    }

    /// Final best value of each trial
    pub fn final_values(&self) -> Array1<f64> {
        match self.values.ncols() {
            0 => Array1::zeros(self.values.nrows()),
            n => self.values.column(n - 1).to_owned(),
        }
    }
}

/// Column means; zeros when there are no rows
pub fn average_at_time(values: &Array2<f64>) -> Array1<f64> {
    values
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(values.ncols()))
}

/// Column variances with the n-1 denominator; zeros with fewer than two rows
pub fn variance_at_time(values: &Array2<f64>) -> Array1<f64> {
    if values.nrows() < 2 {
        return Array1::zeros(values.ncols());
    }
    values.var_axis(Axis(0), 1.0)
}

/// Mean and sample standard deviation of a slice, std 0 for a single value
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() == 1 {
        return (mean, 0.0);
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_column_statistics() {
        let values = array![[4.0, 2.0, 1.0], [2.0, 2.0, 0.0], [0.0, 2.0, 2.0]];
        assert_eq!(average_at_time(&values), array![2.0, 2.0, 1.0]);
        assert_eq!(variance_at_time(&values), array![4.0, 0.0, 1.0]);
    }

    #[test]
    fn test_single_trial_has_zero_variance() {
        let mut m = TrialMatrix::new(vec![0, 5, 10]);
        assert!(m.push_trial(&[3.0, 2.0, 1.0]));
        assert_eq!(m.variance_at_time(), array![0.0, 0.0, 0.0]);
        assert_eq!(m.average_at_time(), array![3.0, 2.0, 1.0]);
        assert_eq!(m.final_values(), array![1.0]);
    }

    #[test]
    fn test_push_trial_checks_length() {
        let mut m = TrialMatrix::new(vec![0, 1]);
        assert!(!m.push_trial(&[1.0]));
        assert!(m.push_trial(&[1.0, 0.5]));
        assert!(m.push_trial(&[3.0, 1.5]));
        assert_eq!(m.num_trials(), 2);
        assert_eq!(m.num_samples(), 2);
        assert_eq!(m.std_at_time(), array![2f64.sqrt(), 0.5f64.sqrt()]);
    }

    #[test]
    fn test_mean_std() {
        assert_eq!(mean_std(&[]), (0.0, 0.0));
        assert_eq!(mean_std(&[2.0]), (2.0, 0.0));
        let (m, s) = mean_std(&[1.0, 3.0]);
        assert_eq!(m, 2.0);
        assert!((s - 2f64.sqrt()).abs() < 1e-12);
    }
}
