use crate::{
    error::FareError,
    pricing::{SHARED_RIDE_DISCOUNT, pricing, round_to_cents},
    quote::FareQuote,
    ride::RideConfiguration,
};

/// Prices a ride of `distance_km` kilometers.
///
/// The fare is `base_fare + distance_km * cost_per_km` for the ride type,
/// discounted for shared rides and rounded half away from zero to cents.
pub fn estimate(distance_km: f64, config: RideConfiguration) -> Result<FareQuote, FareError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(FareError::InvalidInput(format!(
            "distance must be a finite, non-negative number of kilometers, got {distance_km}"
        )));
    }

    let pricing = pricing(config.ride_type);
    let raw_fare = pricing.base_fare + distance_km * pricing.cost_per_km;

    let discount = if config.is_shared {
        SHARED_RIDE_DISCOUNT
    } else {
        1.0
    };

    let amount = round_to_cents(raw_fare * discount);

    if !amount.is_finite() {
        return Err(FareError::InvalidInput(format!(
            "distance {distance_km} km is too large to price"
        )));
    }

    Ok(FareQuote {
        distance_km,
        amount,
    })
}
