use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FareError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
