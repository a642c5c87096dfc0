//! Axis-aligned search domain shared by every dimension of a test function

use rand::Rng;
use swarmbench_vector::Vector;

/// Interval `[low, high]` applied to each coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub low: f64,
    pub high: f64,
}

impl Domain {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// `low <= value <= high`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// `low < value < high`
    pub fn strictly_contains(&self, value: f64) -> bool {
        value > self.low && value < self.high
    }

    /// True iff every coordinate of `x` lies in the interval
    pub fn contains_all(&self, x: &Vector) -> bool {
        x.iter().all(|&v| self.contains(v))
    }

    /// Pin every coordinate outside the interval to the nearest bound ("sticky walls")
    pub fn clamp(&self, x: &Vector) -> Vector {
        let (low, high) = (self.low, self.high);
        x.map(|v| {
            if v < low {
                low
            } else if v > high {
                high
            } else {
                v
            }
        })
    }

    /// A single uniform draw from the interval
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.low + rng.random::<f64>() * self.width()
    }

    /// A point with every coordinate drawn uniformly from the interval
    pub fn random_vector<R: Rng + ?Sized>(
        &self,
        dim: usize,
        rng: &mut R,
    ) -> swarmbench_vector::Result<Vector> {
        Vector::random_uniform(self.low, self.high, dim, rng)
    }

    /// The `[low, high]` pair as a 2-element vector
    pub fn to_vector(&self) -> Vector {
        Vector::from_vec(vec![self.low, self.high])
    }
}
