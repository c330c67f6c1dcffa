pub mod distance;
pub mod error;
pub mod meters;
pub mod osrm;
pub mod route;

pub use error::RoutingError;
pub use meters::Meters;
pub use route::{Route, quote_route};
