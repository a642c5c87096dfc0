//! Optimization test functions library
//!
//! Ten single-objective minimization benchmarks, dispatched by integer id
//! through a [`Catalog`]. Functions are organized by category:
//!
//! - **Unimodal**: elliptic, quartic, zakharov, bent cigar
//! - **Multimodal**: ackley, rastrigin, step, cosine mixture, salomon, mishra 1
//!
//! # Example
//!
//! ```rust
//! use swarmbench_testfunctions::*;
//! use swarmbench_vector::Vector;
//!
//! let x = Vector::new(3);
//! assert_eq!(evaluate(&x, 1).unwrap(), 0.0);
//! assert!(in_domain(&x, 1).unwrap());
//!
//! let domain = get_domain(3).unwrap();
//! assert_eq!((domain.low, domain.high), (-5.12, 5.12));
//! ```

use std::collections::HashMap;

pub mod catalog;
pub mod domain;
pub mod error;
pub mod functions;

pub use catalog::{
    Catalog, ObjectiveFunction, evaluate, function_name, get_domain, in_domain, lookup,
    standard_catalog,
};
pub use domain::Domain;
pub use error::{CatalogError, Result};
pub use functions::*;

/// Metadata for a test function
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    pub id: u8,
    pub name: String,
    /// Bounds shared by every dimension (min, max)
    pub bounds: (f64, f64),
    /// Global minimizer and minimum in the dimension the metadata was built for
    pub global_minimum: (Vec<f64>, f64),
    pub description: String,
    pub multimodal: bool,
}

impl FunctionMetadata {
    pub fn from_function(function: &dyn ObjectiveFunction, dim: usize) -> Self {
        let domain = function.domain();
        Self {
            id: function.id(),
            name: function.name().to_string(),
            bounds: (domain.low, domain.high),
            global_minimum: (function.minimizer(dim).to_vec(), function.minimum(dim)),
            description: function.description().to_string(),
            multimodal: function.multimodal(),
        }
    }
}

/// Metadata of every standard function in dimension `dim`, keyed by name
pub fn get_function_metadata(dim: usize) -> HashMap<String, FunctionMetadata> {
    standard_catalog()
        .iter()
        .map(|f| (f.name().to_string(), FunctionMetadata::from_function(f.as_ref(), dim)))
        .collect()
}
