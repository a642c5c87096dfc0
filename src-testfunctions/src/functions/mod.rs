//! Test function implementations organized by category
//!
//! - `unimodal`: single basin functions (elliptic, quartic, zakharov, bent cigar)
//! - `multimodal`: many local minima (ackley, rastrigin, step, cosine mixture, salomon, mishra 1)

pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use multimodal::*;
pub use unimodal::*;
