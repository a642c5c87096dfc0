use swarmbench_testfunctions::CatalogError;
use swarmbench_vector::VectorError;
use thiserror::Error;

/// Errors raised while building or driving an optimizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimError {
	#[error(transparent)]
	Catalog(#[from] CatalogError),

	#[error(transparent)]
	Vector(#[from] VectorError),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("{algorithm} expects {expected} control parameters, got {got}")]
	ControlParams { algorithm: &'static str, expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, OptimError>;
