use clap::Args;
use fareway_fare::FareQuote;
use fareway_polyline::{Coordinate, DEFAULT_PRECISION, decode_with_precision};
use fareway_routing::{
    Route,
    osrm::{OsrmRouteClient, OsrmRouteClientParams},
    quote_route,
};
use tracing::info;

use crate::{parsers, quote::quote_table, ride::RideArgs};

#[derive(Args)]
pub struct RouteArgs {
    /// Encoded route geometry to measure locally
    #[arg(long, conflicts_with_all = ["from", "to"])]
    polyline: Option<String>,

    /// Precision of --polyline
    #[arg(long, default_value_t = DEFAULT_PRECISION, requires = "polyline")]
    precision: u32,

    /// Pickup as "lat,lng", fetched from the OSRM server
    #[arg(long, value_parser = parsers::parse_coordinate, requires = "to")]
    from: Option<Coordinate>,

    /// Destination as "lat,lng"
    #[arg(long, value_parser = parsers::parse_coordinate, requires = "from")]
    to: Option<Coordinate>,

    #[command(flatten)]
    ride: RideArgs,
}

async fn resolve_route(args: &RouteArgs) -> Result<Route, anyhow::Error> {
    match (&args.polyline, &args.from, &args.to) {
        (Some(polyline), _, _) => {
            let geometry = decode_with_precision(polyline, args.precision)?;
            Ok(Route::from_geometry(geometry))
        }
        (None, Some(from), Some(to)) => {
            let params = OsrmRouteClientParams::from_env()?;
            info!("Fetching {} route from {}", params.geometry, params.osrm_url);

            let client = OsrmRouteClient::new(params);
            Ok(client.fetch_route(from, to).await?)
        }
        _ => Err(anyhow::anyhow!(
            "Either --polyline or both --from and --to are required"
        )),
    }
}

fn print_route(route: &Route, quote: &FareQuote, args: &RouteArgs) {
    info!(
        "Route has {} points over {}",
        route.geometry.len(),
        route.distance
    );

    if let Some(duration) = route.duration {
        info!("Estimated duration {:#}", duration);
    }

    println!("{}", quote_table(quote, &args.ride.configuration()));
}

pub async fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let route = resolve_route(&args).await?;
    let quote = quote_route(&route, args.ride.configuration())?;

    print_route(&route, &quote, &args);

    Ok(())
}
