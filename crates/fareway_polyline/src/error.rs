use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedInput {
    #[error("byte {byte:#04x} at index {index} is outside the polyline alphabet")]
    InvalidByte { index: usize, byte: u8 },

    #[error("value starting at index {start} is not terminated")]
    Truncated { start: usize },

    #[error("value starting at index {start} does not fit in 64 bits")]
    Overflow { start: usize },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolylineError {
    #[error("Malformed polyline: {0}")]
    MalformedInput(#[from] MalformedInput),

    #[error("Unsupported precision {0}")]
    InvalidPrecision(u32),

    #[error("Coordinate at index {index} is not finite")]
    InvalidCoordinate { index: usize },
}
