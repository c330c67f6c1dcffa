use crate::{
    DEFAULT_PRECISION, precision_factor,
    coordinate::{Coordinate, RouteGeometry},
    error::{MalformedInput, PolylineError},
};

pub(crate) const CHUNK_OFFSET: u8 = 63;
pub(crate) const CONTINUATION_BIT: u64 = 0x20;
pub(crate) const CHUNK_MASK: u64 = 0x1f;
const CHUNK_BITS: u32 = 5;
const LAST_BYTE: u8 = 126;

struct Cursor<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl Cursor<'_> {
    fn is_done(&self) -> bool {
        self.index >= self.bytes.len()
    }

    /// Reads one zigzag encoded value and returns it with the index it started at.
    fn next_delta(&mut self) -> Result<(i64, usize), MalformedInput> {
        let start = self.index;
        let mut value: u64 = 0;
        let mut shift: u32 = 0;

        loop {
            let Some(&byte) = self.bytes.get(self.index) else {
                return Err(MalformedInput::Truncated { start });
            };

            if !(CHUNK_OFFSET..=LAST_BYTE).contains(&byte) {
                return Err(MalformedInput::InvalidByte {
                    index: self.index,
                    byte,
                });
            }
            self.index += 1;

            let chunk = u64::from(byte - CHUNK_OFFSET);
            let bits = chunk & CHUNK_MASK;

            if shift >= u64::BITS
                || (shift > u64::BITS - CHUNK_BITS && bits >> (u64::BITS - shift) != 0)
            {
                return Err(MalformedInput::Overflow { start });
            }

            value |= bits << shift;
            shift += CHUNK_BITS;

            if chunk & CONTINUATION_BIT == 0 {
                break;
            }
        }

        let delta = if value & 1 == 1 {
            !((value >> 1) as i64)
        } else {
            (value >> 1) as i64
        };

        Ok((delta, start))
    }
}

/// Decodes a polyline using the standard 1e5 precision.
pub fn decode(encoded: &str) -> Result<RouteGeometry, PolylineError> {
    decode_with_precision(encoded, DEFAULT_PRECISION)
}

pub fn decode_with_precision(encoded: &str, precision: u32) -> Result<RouteGeometry, PolylineError> {
    let factor = precision_factor(precision)?;

    let mut cursor = Cursor {
        bytes: encoded.as_bytes(),
        index: 0,
    };

    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut points = Vec::with_capacity(encoded.len() / 4);

    while !cursor.is_done() {
        let (delta, start) = cursor.next_delta()?;
        lat = lat
            .checked_add(delta)
            .ok_or(MalformedInput::Overflow { start })?;

        let (delta, start) = cursor.next_delta()?;
        lng = lng
            .checked_add(delta)
            .ok_or(MalformedInput::Overflow { start })?;

        points.push(Coordinate {
            lat: lat as f64 / factor,
            lng: lng as f64 / factor,
        });
    }

    Ok(RouteGeometry::new(points))
}
