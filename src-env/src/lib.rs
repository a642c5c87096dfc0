//! Environment utilities for swarmbench
//!
//! Locates the project root through `SWARMBENCH_DIR` and the directories that
//! generated results, tuned parameters and plots are written to.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
