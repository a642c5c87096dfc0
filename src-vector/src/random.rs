//! Randomized vector construction
//!
//! The random source is always passed in by the caller so runs can be seeded.

use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{Result, VectorError};
use crate::vector::Vector;

impl Vector {
    /// Each entry independently uniform on `[low, high]`, fails if `high < low`
    pub fn random_uniform<R: Rng + ?Sized>(
        low: f64,
        high: f64,
        len: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if high < low {
            return Err(VectorError::InvalidDomainArgument(format!(
                "upper bound {} precedes lower bound {}",
                high, low
            )));
        }
        let width = high - low;
        Ok(Self::from_array(Array1::from_shape_fn(len, |_| width * rng.random::<f64>() + low)))
    }

    /// Each entry uniform on `[0, 1)`
    pub fn standard_uniform<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self::from_array(Array1::from_shape_fn(len, |_| rng.random::<f64>()))
    }

    /// Each entry drawn from N(0, 1)
    pub fn standard_normal<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self::from_array(Array1::from_shape_fn(len, |_| {
            let z: f64 = StandardNormal.sample(rng);
            z
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_uniform_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let v = Vector::random_uniform(-5.12, 5.12, 500, &mut rng).unwrap();
        assert_eq!(v.len(), 500);
        assert!(v.iter().all(|&x| (-5.12..=5.12).contains(&x)));
    }

    #[test]
    fn test_random_uniform_degenerate_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let v = Vector::random_uniform(2.0, 2.0, 4, &mut rng).unwrap();
        assert_eq!(v.to_vec(), vec![2.0; 4]);
    }

    #[test]
    fn test_random_uniform_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = Vector::random_uniform(1.0, 0.0, 3, &mut rng).unwrap_err();
        assert!(matches!(err, VectorError::InvalidDomainArgument(_)));
    }

    #[test]
    fn test_standard_uniform_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let v = Vector::standard_uniform(1000, &mut rng);
        assert!(v.iter().all(|&x| (0.0..1.0).contains(&x)));
        let mean = v.average().unwrap();
        assert!((mean - 0.5).abs() < 0.05, "mean = {}", mean);
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut rng = StdRng::seed_from_u64(13);
        let v = Vector::standard_normal(5000, &mut rng);
        let mean = v.average().unwrap();
        let var = v.shift(-mean).pow(2).average().unwrap();
        assert!(mean.abs() < 0.05, "mean = {}", mean);
        assert!((var - 1.0).abs() < 0.1, "var = {}", var);
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let a = Vector::standard_normal(8, &mut StdRng::seed_from_u64(99));
        let b = Vector::standard_normal(8, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
