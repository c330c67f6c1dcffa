use fareway_fare::{FareQuote, RideConfiguration, estimate};
use fareway_polyline::RouteGeometry;
use jiff::SignedDuration;

use crate::{distance::route_length, error::RoutingError, meters::Meters};

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub distance: Meters,
    pub duration: Option<SignedDuration>,
    pub geometry: RouteGeometry,
}

impl Route {
    /// Builds a route for a geometry the provider did not measure.
    pub fn from_geometry(geometry: RouteGeometry) -> Self {
        Self {
            distance: route_length(&geometry),
            duration: None,
            geometry,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance.to_kilometers()
    }
}

pub fn quote_route(route: &Route, config: RideConfiguration) -> Result<FareQuote, RoutingError> {
    Ok(estimate(route.distance_km(), config)?)
}

#[cfg(test)]
mod tests {
    use fareway_fare::RideType;
    use fareway_polyline::Coordinate;

    use super::*;

    #[test]
    fn should_quote_provider_distance() {
        let route = Route {
            distance: Meters::new(10_000.0),
            duration: Some(SignedDuration::from_mins(15)),
            geometry: RouteGeometry::default(),
        };

        let quote = quote_route(&route, RideConfiguration::new(RideType::Economy, false)).unwrap();

        assert_eq!(quote.distance_km, 10.0);
        assert_eq!(quote.amount, 25.0);
    }

    #[test]
    fn should_measure_geometry_when_distance_is_missing() {
        let route = Route::from_geometry(
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)].into(),
        );

        assert!((route.distance_km() - 111.195).abs() < 0.02);
        assert_eq!(route.duration, None);
    }

    #[test]
    fn empty_route_costs_base_fare() {
        let route = Route::from_geometry(RouteGeometry::default());
        let quote = quote_route(&route, RideConfiguration::new(RideType::Premium, true)).unwrap();

        assert_eq!(quote.amount, 7.0);
    }
}
