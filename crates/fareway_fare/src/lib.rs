mod error;
mod estimator;
pub mod pricing;
mod quote;
mod ride;

pub use error::FareError;
pub use estimator::estimate;
pub use quote::FareQuote;
pub use ride::{RideConfiguration, RideType};
