use fareway_fare::FareError;
use fareway_polyline::PolylineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("API error: {code} - {message}")]
    Api { code: String, message: String },

    #[error("No route found")]
    NoRoute,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid route geometry: {0}")]
    Polyline(#[from] PolylineError),

    #[error(transparent)]
    Fare(#[from] FareError),
}
