use fareway_polyline::RouteGeometry;
use geo::{Distance, Haversine};

use crate::meters::Meters;

/// Length of the path along the surface of the earth, segment by segment.
pub fn route_length(geometry: &RouteGeometry) -> Meters {
    geometry
        .points()
        .windows(2)
        .map(|segment| {
            let from: geo::Point = segment[0].into();
            let to: geo::Point = segment[1].into();
            Meters::new(Haversine.distance(from, to))
        })
        .sum()
}
