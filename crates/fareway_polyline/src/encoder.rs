use crate::{
    DEFAULT_PRECISION,
    coordinate::Coordinate,
    decoder::{CHUNK_MASK, CHUNK_OFFSET, CONTINUATION_BIT},
    error::PolylineError,
    precision_factor,
};

// Keeps deltas between two points inside i64.
const MAX_FIXED_POINT: f64 = (i64::MAX / 4) as f64;

fn push_value(value: i64, out: &mut String) {
    let mut value = if value < 0 {
        !((value as u64) << 1)
    } else {
        (value as u64) << 1
    };

    while value >= CONTINUATION_BIT {
        out.push(char::from(
            ((CONTINUATION_BIT | (value & CHUNK_MASK)) as u8) + CHUNK_OFFSET,
        ));
        value >>= 5;
    }

    out.push(char::from(value as u8 + CHUNK_OFFSET));
}

/// Encodes points using the standard 1e5 precision.
pub fn encode<'a, I>(points: I) -> Result<String, PolylineError>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    encode_with_precision(points, DEFAULT_PRECISION)
}

pub fn encode_with_precision<'a, I>(points: I, precision: u32) -> Result<String, PolylineError>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let factor = precision_factor(precision)?;

    let mut out = String::new();
    let mut previous_lat: i64 = 0;
    let mut previous_lng: i64 = 0;

    for (index, point) in points.into_iter().enumerate() {
        // f64::round is half away from zero
        let lat = (point.lat * factor).round();
        let lng = (point.lng * factor).round();

        if !point.is_finite() || lat.abs() > MAX_FIXED_POINT || lng.abs() > MAX_FIXED_POINT {
            return Err(PolylineError::InvalidCoordinate { index });
        }

        let lat = lat as i64;
        let lng = lng as i64;

        push_value(lat - previous_lat, &mut out);
        push_value(lng - previous_lng, &mut out);

        previous_lat = lat;
        previous_lng = lng;
    }

    Ok(out)
}
