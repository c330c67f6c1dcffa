use fareway_fare::RideType;
use fareway_polyline::Coordinate;

/// Parses `"lat,lng"` in decimal degrees.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected a coordinate as \"lat,lng\""))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("Invalid latitude '{}'", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("Invalid longitude '{}'", lng.trim()))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Latitude {lat} is out of range"));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("Longitude {lng} is out of range"));
    }

    Ok(Coordinate::new(lat, lng))
}

pub fn parse_ride_type(input: &str) -> Result<RideType, String> {
    input.parse::<RideType>().map_err(|err| err.to_string())
}
