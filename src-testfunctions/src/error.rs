use swarmbench_vector::VectorError;
use thiserror::Error;

/// Errors raised by the function catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("function id {0} not recognized")]
    UnrecognizedFunctionId(u8),

    #[error("function id {0} is already registered")]
    DuplicateFunctionId(u8),

    #[error(transparent)]
    Vector(#[from] VectorError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
