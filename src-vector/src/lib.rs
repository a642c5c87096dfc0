//! Real vector algebra for population based optimizers
//!
//! [`Vector`] is a fixed-length, value-like wrapper around an `ndarray::Array1<f64>`.
//! Every arithmetic operation returns a new vector; binary operations check
//! that both operands have the same length and report a [`VectorError`]
//! instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use swarmbench_vector::Vector;
//!
//! let u = Vector::from_vec(vec![1.0, 2.0, 3.0]);
//! let v = Vector::ascending(3);
//! let w = u.add(&v)?.scale(0.5);
//! assert_eq!(w.sum()?, 6.0);
//! # Ok::<(), swarmbench_vector::VectorError>(())
//! ```

pub mod error;
pub mod random;
pub mod vector;

pub use error::{Result, VectorError};
pub use vector::Vector;
