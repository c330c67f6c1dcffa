use clap::Args;
use comfy_table::Table;
use fareway_polyline::{DEFAULT_PRECISION, RouteGeometry, decode_with_precision};
use tracing::info;

#[derive(Args)]
pub struct DecodeArgs {
    /// The encoded polyline
    polyline: String,

    /// Number of decimal digits the polyline was encoded with (6 for polyline6)
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,
}

fn coordinates_table(geometry: &RouteGeometry) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "lat", "lng"]);

    for (i, point) in geometry.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            point.lat.to_string(),
            point.lng.to_string(),
        ]);
    }

    table
}

pub fn run(args: DecodeArgs) -> Result<(), anyhow::Error> {
    let geometry = decode_with_precision(&args.polyline, args.precision)?;

    info!("Decoded {} points", geometry.len());
    println!("{}", coordinates_table(&geometry));

    Ok(())
}
