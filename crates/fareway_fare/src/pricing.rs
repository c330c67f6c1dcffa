use crate::ride::RideType;

/// Multiplier applied to shared rides (30% off).
pub const SHARED_RIDE_DISCOUNT: f64 = 0.70;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pricing {
    pub base_fare: f64,
    pub cost_per_km: f64,
}

const ECONOMY: Pricing = Pricing {
    base_fare: 5.0,
    cost_per_km: 2.0,
};

const PREMIUM: Pricing = Pricing {
    base_fare: 10.0,
    cost_per_km: 3.0,
};

pub fn pricing(ride_type: RideType) -> Pricing {
    match ride_type {
        RideType::Economy => ECONOMY,
        RideType::Premium => PREMIUM,
    }
}

/// Rounds half away from zero to two decimals.
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
