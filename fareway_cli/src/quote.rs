use clap::Args;
use comfy_table::Table;
use fareway_fare::{FareQuote, RideConfiguration, estimate};

use crate::ride::RideArgs;

#[derive(Args)]
pub struct QuoteArgs {
    /// Route distance in kilometers
    #[arg(short = 'k', long, allow_hyphen_values = true)]
    distance_km: f64,

    #[command(flatten)]
    ride: RideArgs,

    /// Seats booked on a shared ride, the quote is per seat
    #[arg(short, long)]
    passengers: Option<u32>,
}

pub fn quote_table(quote: &FareQuote, config: &RideConfiguration) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ride", "shared", "distance (km)", "fare"]);
    table.add_row(vec![
        config.ride_type.to_string(),
        config.is_shared.to_string(),
        format!("{:.2}", quote.distance_km),
        format!("{:.2}", quote.amount),
    ]);

    table
}

pub fn run(args: QuoteArgs) -> Result<(), anyhow::Error> {
    let config = args.ride.configuration();
    let quote = estimate(args.distance_km, config)?;

    println!("{}", quote_table(&quote, &config));

    if let Some(passengers) = args.passengers {
        let total = quote.total_for_passengers(passengers)?;
        println!("Total for {passengers} passenger(s): {total:.2}");
    }

    Ok(())
}
