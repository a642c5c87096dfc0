//! Unimodal test functions
//!
//! A single basin around the global minimum: these measure how fast an
//! optimizer exploits a region rather than how well it explores.

use swarmbench_vector::{Result, Vector};

use crate::catalog::ObjectiveFunction;
use crate::domain::Domain;

/// Sum over the entries after the first, 0 when there are none
pub(crate) fn tail_sum(x: &Vector) -> Result<f64> {
    if x.len() < 2 { Ok(0.0) } else { x.sum_from(1) }
}

/// Elliptic (weighted sphere) function
/// f(x) = sum_i i * x_i^2, i starting at 1
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn elliptic(x: &Vector) -> Result<f64> {
    Vector::ascending(x.len()).prod(&x.pow(2))?.sum()
}

/// Quartic function, noise free
/// f(x) = sum_i i * x_i^4
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1.28, 1.28]
pub fn quartic(x: &Vector) -> Result<f64> {
    Vector::ascending(x.len()).prod(&x.pow(4))?.sum()
}

/// Zakharov function
/// f(x) = sum x_i^2 + (sum 0.5 i x_i)^2 + (sum 0.5 i x_i)^4
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 10]
pub fn zakharov(x: &Vector) -> Result<f64> {
    let weighted = Vector::ascending(x.len()).scale(0.5).prod(x)?.sum()?;
    Ok(x.pow(2).sum()? + weighted.powi(2) + weighted.powi(4))
}

/// Bent Cigar function - one gentle direction, all others scaled by 1e6
/// f(x) = x_1^2 + 1e6 * sum_{i>=2} x_i^2
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn bent_cigar(x: &Vector) -> Result<f64> {
    Ok(x.at(0)?.powi(2) + 1_000_000.0 * tail_sum(&x.pow(2))?)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Elliptic;

impl ObjectiveFunction for Elliptic {
    fn id(&self) -> u8 {
        1
    }
    fn name(&self) -> &str {
        "elliptic"
    }
    fn description(&self) -> &str {
        "N-dimensional axis weighted quadratic bowl"
    }
    fn multimodal(&self) -> bool {
        false
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        elliptic(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(-5.0, 5.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Quartic;

impl ObjectiveFunction for Quartic {
    fn id(&self) -> u8 {
        6
    }
    fn name(&self) -> &str {
        "quartic"
    }
    fn description(&self) -> &str {
        "N-dimensional weighted fourth power bowl, flat near the optimum"
    }
    fn multimodal(&self) -> bool {
        false
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        quartic(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(-1.28, 1.28)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Zakharov;

impl ObjectiveFunction for Zakharov {
    fn id(&self) -> u8 {
        7
    }
    fn name(&self) -> &str {
        "zakharov"
    }
    fn description(&self) -> &str {
        "N-dimensional plate shaped function"
    }
    fn multimodal(&self) -> bool {
        false
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        zakharov(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(-5.0, 10.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BentCigar;

impl ObjectiveFunction for BentCigar {
    fn id(&self) -> u8 {
        9
    }
    fn name(&self) -> &str {
        "bent_cigar"
    }
    fn description(&self) -> &str {
        "N-dimensional ill-conditioned ridge"
    }
    fn multimodal(&self) -> bool {
        false
    }
    fn evaluate(&self, x: &Vector) -> Result<f64> {
        bent_cigar(x)
    }
    fn domain(&self) -> Domain {
        Domain::new(-100.0, 100.0)
    }
}
