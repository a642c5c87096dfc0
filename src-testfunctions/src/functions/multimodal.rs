//! Multimodal test functions
//!
//! These functions have multiple local minima and are used to test the global
//! search capabilities and exploration of optimization algorithms.

use std::f64::consts::{E, PI};

use swarmbench_vector::{Result, Vector, VectorError};

use crate::catalog::ObjectiveFunction;
use crate::domain::Domain;

/// Ackley function with a = 20, b = 0.2, c = 2 pi
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn ackley(x: &Vector) -> Result<f64> {
    let (a, b, c) = (20.0, 0.2, 2.0 * PI);
    let first = -a * (-b * x.pow(2).average()?.sqrt()).exp();
    let second = x.scale(c).cos().average()?.exp();
    Ok(first - second + a + E)
}

/// Rastrigin function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Vector) -> Result<f64> {
    let a = 10.0;
    let terms = x.pow(2).sub(&x.scale(2.0 * PI).cos().scale(a))?;
    Ok(a * x.len() as f64 + terms.sum()?)
}

/// Step function - plateaus of width one around every integer square
/// f(x) = sum floor(x_i^2)
/// Global minimum: f(x) = 0 for every x in (-1, 1)^n
/// Bounds: x_i in [-100, 100]
pub fn step(x: &Vector) -> Result<f64> {
    x.pow(2).floor().sum()
}

/// Cosine mixture function
/// f(x) = -0.1 sum cos(5 pi x_i) + sum x_i^2 + 1
/// Global minimum: f(x) = 1 - 0.1 n at x = (0, 0, ..., 0), so 0 in dimension 10
/// Bounds: x_i in [-1, 1]
pub fn cosine_mixture(x: &Vector) -> Result<f64> {
    Ok(-0.1 * x.scale(5.0 * PI).cos().sum()? + x.pow(2).sum()? + 1.0)
}

/// Salomon function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn salomon(x: &Vector) -> Result<f64> {
    let norm = x.pow(2).sum()?.sqrt();
    Ok(1.0 - (2.0 * PI * norm).cos() + 0.1 * norm)
}

/// Mishra 1 function
/// f(x) = (1 + g)^g - 2 with g = n - sum_{i < n-1} x_i
/// Global minimum: f(x) = 0 at x = (1, ..., 1, x_n), x_n free
/// Bounds: x_i in [0, 1]
pub fn mishra1(x: &Vector) -> Result<f64> {
    let n = x.len();
    let head = match n {
        0 => return Err(VectorError::IndexOutOfRange { index: 0, len: 0 }),
        1 => 0.0,
        _ => x.sum_range(0, n - 2)?,
    };
    let g = n as f64 - head;
    Ok((1.0 + g).powf(g) - 2.0)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ackley;

impl ObjectiveFunction for Ackley {
    fn id(&self) -> u8 {
        2
    }
    fn name(&self) -> &str {
        "ackley"
    }
    fn description(&self) -> &str {
        "N-dimensional multimodal function with a deep central funnel"
    }
    fn multimodal(&self) -> bool {
        true
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        ackley(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(-5.0, 5.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Rastrigin;

impl ObjectiveFunction for Rastrigin {
    fn id(&self) -> u8 {
        3
    }
    fn name(&self) -> &str {
        "rastrigin"
    }
    fn description(&self) -> &str {
        "N-dimensional highly multimodal function"
    }
    fn multimodal(&self) -> bool {
        true
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        rastrigin(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(-5.12, 5.12)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Step;

impl ObjectiveFunction for Step {
    fn id(&self) -> u8 {
        4
    }
    fn name(&self) -> &str {
        "step"
    }
    fn description(&self) -> &str {
        "N-dimensional discontinuous plateau function"
    }
    fn multimodal(&self) -> bool {
        true
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        step(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(-100.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CosineMixture;

impl ObjectiveFunction for CosineMixture {
    fn id(&self) -> u8 {
        5
    }
    fn name(&self) -> &str {
        "cosine_mixture"
    }
    fn description(&self) -> &str {
        "N-dimensional quadratic bowl with cosine ripples"
    }
    fn multimodal(&self) -> bool {
        true
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        cosine_mixture(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(-1.0, 1.0)
    }
    fn minimum(&self, dim: usize) -> f64 {
        1.0 - 0.1 * dim as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Salomon;

impl ObjectiveFunction for Salomon {
    fn id(&self) -> u8 {
        8
    }
    fn name(&self) -> &str {
        "salomon"
    }
    fn description(&self) -> &str {
        "N-dimensional function with concentric ripples"
    }
    fn multimodal(&self) -> bool {
        true
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        salomon(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(-100.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Mishra1;

impl ObjectiveFunction for Mishra1 {
    fn id(&self) -> u8 {
        10
    }
    fn name(&self) -> &str {
        "mishra1"
    }
    fn description(&self) -> &str {
        "N-dimensional function on the unit cube, minimum at the upper corner"
    }
    fn multimodal(&self) -> bool {
        true
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        mishra1(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(0.0, 1.0)
    }
    fn minimizer(&self, dim: usize) -> Vector {
        Vector::new(dim).shift(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(data: &[f64]) -> Vector {
        Vector::from_vec(data.to_vec())
    }

    #[test]
    fn test_origin_values() {
        let origin = Vector::new(4);
        assert!(ackley(&origin).unwrap().abs() < 1e-12);
        assert!(rastrigin(&origin).unwrap().abs() < 1e-12);
        assert_eq!(step(&origin).unwrap(), 0.0);
        assert_eq!(salomon(&origin).unwrap(), 0.0);
        assert!((cosine_mixture(&origin).unwrap() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_rastrigin_on_integer_lattice() {
        // cos(2 pi) = 1 cancels the 10n offset
        assert!((rastrigin(&v(&[1.0, 1.0])).unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_plateaus() {
        assert_eq!(step(&v(&[1.5, -0.9])).unwrap(), 2.0);
        assert_eq!(step(&v(&[0.99, -0.99, 0.5])).unwrap(), 0.0);
    }

    #[test]
    fn test_salomon_integer_norm() {
        assert!((salomon(&v(&[3.0, 4.0])).unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_mishra1() {
        assert!(mishra1(&v(&[1.0, 1.0, 0.3])).unwrap().abs() < 1e-12);
        assert!(mishra1(&v(&[0.7])).unwrap().abs() < 1e-12);
        let expected = 2.5f64.powf(1.5) - 2.0;
        assert!((mishra1(&v(&[0.5, 0.3])).unwrap() - expected).abs() < 1e-12);
        assert!(mishra1(&Vector::new(0)).is_err());
    }

    #[test]
    fn test_empty_vector_fails() {
        let empty = Vector::new(0);
        assert!(ackley(&empty).is_err());
        assert!(rastrigin(&empty).is_err());
        assert!(salomon(&empty).is_err());
    }
}
