//! Printer error type.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrintError {
    #[error("tree depth exceeds configured limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}
