use clap::Args;
use fareway_fare::{RideConfiguration, RideType};

use crate::parsers;

#[derive(Args)]
pub struct RideArgs {
    /// Service tier: economy or premium
    #[arg(short, long, value_parser = parsers::parse_ride_type, default_value = "economy")]
    ride_type: RideType,

    /// Share the ride with other passengers (30% off)
    #[arg(short, long)]
    shared: bool,
}

impl RideArgs {
    pub fn configuration(&self) -> RideConfiguration {
        RideConfiguration::new(self.ride_type, self.shared)
    }
}
