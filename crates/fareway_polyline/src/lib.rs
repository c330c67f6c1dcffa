mod coordinate;
mod decoder;
mod encoder;
mod error;

pub use coordinate::{Coordinate, RouteGeometry};
pub use decoder::{decode, decode_with_precision};
pub use encoder::{encode, encode_with_precision};
pub use error::{MalformedInput, PolylineError};

/// Precision used by the standard encoding (coordinates scaled by 1e5).
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest precision accepted, beyond this the fixed point values stop fitting comfortably in i64.
pub const MAX_PRECISION: u32 = 10;

pub(crate) fn precision_factor(precision: u32) -> Result<f64, PolylineError> {
    if precision > MAX_PRECISION {
        return Err(PolylineError::InvalidPrecision(precision));
    }

    Ok(10_f64.powi(precision as i32))
}
