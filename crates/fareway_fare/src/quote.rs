use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::FareError, pricing::round_to_cents};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FareQuote {
    pub distance_km: f64,
    pub amount: f64,
}

impl FareQuote {
    /// Amount in the currency's minor unit, as payment processors expect it.
    pub fn amount_minor_units(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }

    /// Total paid when `passengers` seats are booked at this per-seat price.
    pub fn total_for_passengers(&self, passengers: u32) -> Result<f64, FareError> {
        if passengers == 0 {
            return Err(FareError::InvalidInput(String::from(
                "at least one passenger is required",
            )));
        }

        Ok(round_to_cents(self.amount * f64::from(passengers)))
    }
}

impl Display for FareQuote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2} for {:.2} km", self.amount, self.distance_km)
    }
}
