use std::{fmt::Display, str::FromStr};

use fareway_polyline::{Coordinate, decode_with_precision};
use jiff::SignedDuration;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{error::RoutingError, meters::Meters, route::Route};

pub const OSRM_URL_ENV_VAR: &str = "FAREWAY_OSRM_URL";
pub const OSRM_PROFILE_ENV_VAR: &str = "FAREWAY_OSRM_PROFILE";
pub const OSRM_GEOMETRY_ENV_VAR: &str = "FAREWAY_OSRM_GEOMETRY";

pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_OSRM_PROFILE: &str = "driving";

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/";

/// Geometry encodings the route service can answer with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OsrmGeometry {
    #[default]
    Polyline,
    Polyline6,
}

impl OsrmGeometry {
    pub fn precision(&self) -> u32 {
        match self {
            OsrmGeometry::Polyline => 5,
            OsrmGeometry::Polyline6 => 6,
        }
    }
}

impl Display for OsrmGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OsrmGeometry::Polyline => "polyline",
                OsrmGeometry::Polyline6 => "polyline6",
            }
        )
    }
}

impl FromStr for OsrmGeometry {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "polyline" => Ok(OsrmGeometry::Polyline),
            "polyline6" => Ok(OsrmGeometry::Polyline6),
            other => Err(RoutingError::InvalidInput(format!(
                "unsupported geometry encoding '{other}'"
            ))),
        }
    }
}

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    /// Meters
    distance: Option<f64>,

    /// Seconds
    duration: Option<f64>,

    geometry: String,
}

/// Parses the body of a `route` service response into a [`Route`].
///
/// Only the first route is kept, its geometry is decoded with `geometry`'s precision.
pub fn parse_route_response(body: &str, geometry: OsrmGeometry) -> Result<Route, RoutingError> {
    let response: OsrmRouteResponse = serde_json::from_str(body)?;

    if response.code != "Ok" {
        return Err(RoutingError::Api {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(RoutingError::NoRoute)?;

    let decoded = decode_with_precision(&route.geometry, geometry.precision())?;

    let duration = match route.duration {
        Some(seconds) if seconds >= 0.0 => Some(
            SignedDuration::try_from_secs_f64(seconds).map_err(|err| {
                RoutingError::InvalidResponse(format!(
                    "route duration {seconds} is not a valid duration: {err}"
                ))
            })?,
        ),
        Some(seconds) => {
            return Err(RoutingError::InvalidResponse(format!(
                "route duration {seconds} is not a valid duration"
            )));
        }
        None => None,
    };

    match route.distance {
        Some(distance) if distance.is_finite() && distance >= 0.0 => Ok(Route {
            distance: Meters::new(distance),
            duration,
            geometry: decoded,
        }),
        Some(distance) => Err(RoutingError::InvalidResponse(format!(
            "route distance {distance} is not a valid length"
        ))),
        None => Ok(Route {
            duration,
            ..Route::from_geometry(decoded)
        }),
    }
}

pub struct OsrmRouteClientParams {
    pub osrm_url: String,
    pub profile: String,
    pub geometry: OsrmGeometry,
}

impl OsrmRouteClientParams {
    /// Reads the server, profile and geometry encoding from the environment,
    /// falling back to the public demo server.
    pub fn from_env() -> Result<Self, RoutingError> {
        let geometry = match std::env::var(OSRM_GEOMETRY_ENV_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => OsrmGeometry::default(),
        };

        Ok(Self {
            osrm_url: std::env::var(OSRM_URL_ENV_VAR)
                .unwrap_or_else(|_| String::from(DEFAULT_OSRM_URL)),
            profile: std::env::var(OSRM_PROFILE_ENV_VAR)
                .unwrap_or_else(|_| String::from(DEFAULT_OSRM_PROFILE)),
            geometry,
        })
    }
}

pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

fn validate_endpoints(origin: &Coordinate, destination: &Coordinate) -> Result<(), RoutingError> {
    if !origin.is_finite() || !destination.is_finite() {
        return Err(RoutingError::InvalidInput(String::from(
            "route endpoints must be finite coordinates",
        )));
    }

    Ok(())
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    fn route_url(&self, origin: &Coordinate, destination: &Coordinate) -> String {
        let mut url = self.params.osrm_url.trim_end_matches('/').to_string();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(&self.params.profile);
        url.push('/');
        url.push_str(&format!(
            "{},{};{},{}",
            origin.lng, origin.lat, destination.lng, destination.lat
        ));

        url
    }

    #[instrument(skip(self))]
    pub async fn fetch_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<Route, RoutingError> {
        validate_endpoints(origin, destination)?;

        let geometries = self.params.geometry.to_string();
        let response = self
            .client
            .get(self.route_url(origin, destination))
            .query(&[
                ("overview", "full"),
                ("geometries", geometries.as_str()),
                ("steps", "false"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("OsrmRouteClient: received {} bytes ({})", body.len(), status);

        match parse_route_response(&body, self.params.geometry) {
            // OSRM reports most failures as JSON with a 4xx status, keep its code when it does
            Err(RoutingError::Deserialize(_)) if !status.is_success() => Err(RoutingError::Api {
                code: status.as_u16().to_string(),
                message: body,
            }),
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_RESPONSE: &str = r#"{
        "code": "Ok",
        "routes": [
            {
                "geometry": "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
                "legs": [],
                "distance": 12345.6,
                "duration": 900.5,
                "weight_name": "routability",
                "weight": 900.5
            }
        ],
        "waypoints": []
    }"#;

    #[test]
    fn should_parse_first_route() {
        let route = parse_route_response(OK_RESPONSE, OsrmGeometry::Polyline).unwrap();

        assert_eq!(route.distance, Meters::new(12345.6));
        assert_eq!(route.duration, Some(SignedDuration::from_millis(900_500)));
        assert_eq!(route.geometry.len(), 3);
        assert_eq!(route.geometry.start(), Some(&Coordinate::new(38.5, -120.2)));
    }

    #[test]
    fn should_measure_geometry_without_distance() {
        let body = r#"{ "code": "Ok", "routes": [{ "geometry": "???_ibE", "duration": 60.0 }] }"#;
        let route = parse_route_response(body, OsrmGeometry::Polyline).unwrap();

        assert!((route.distance_km() - 111.195).abs() < 0.02);
        assert_eq!(route.duration, Some(SignedDuration::from_secs(60)));
    }

    #[test]
    fn should_surface_api_errors() {
        let body = r#"{ "code": "NoSegment", "message": "Could not find a matching segment" }"#;

        match parse_route_response(body, OsrmGeometry::Polyline) {
            Err(RoutingError::Api { code, message }) => {
                assert_eq!(code, "NoSegment");
                assert_eq!(message, "Could not find a matching segment");
            }
            _ => panic!("expected an api error"),
        }
    }

    #[test]
    fn should_fail_without_routes() {
        let body = r#"{ "code": "Ok", "routes": [] }"#;

        assert!(matches!(
            parse_route_response(body, OsrmGeometry::Polyline),
            Err(RoutingError::NoRoute)
        ));
    }

    #[test]
    fn should_reject_malformed_geometry() {
        let body = r#"{ "code": "Ok", "routes": [{ "geometry": "_p~iF", "distance": 10.0 }] }"#;

        assert!(matches!(
            parse_route_response(body, OsrmGeometry::Polyline),
            Err(RoutingError::Polyline(_))
        ));
    }

    #[test]
    fn should_reject_negative_distance() {
        let body = r#"{ "code": "Ok", "routes": [{ "geometry": "", "distance": -3.0 }] }"#;

        assert!(matches!(
            parse_route_response(body, OsrmGeometry::Polyline),
            Err(RoutingError::InvalidResponse(_))
        ));
    }

    #[test]
    fn should_reject_duration_out_of_range() {
        let body = r#"{ "code": "Ok", "routes": [{ "geometry": "", "distance": 10.0, "duration": 1e300 }] }"#;

        assert!(matches!(
            parse_route_response(body, OsrmGeometry::Polyline),
            Err(RoutingError::InvalidResponse(_))
        ));
    }

    #[test]
    fn should_reject_non_finite_endpoints() {
        let origin = Coordinate::new(f64::NAN, 4.35);
        let destination = Coordinate::new(51.05, 3.72);

        assert!(matches!(
            validate_endpoints(&origin, &destination),
            Err(RoutingError::InvalidInput(_))
        ));
        assert!(validate_endpoints(&destination, &destination).is_ok());
    }

    #[test]
    fn should_parse_geometry_encoding() {
        assert_eq!("polyline".parse::<OsrmGeometry>().unwrap(), OsrmGeometry::Polyline);
        assert_eq!("polyline6".parse::<OsrmGeometry>().unwrap(), OsrmGeometry::Polyline6);
        assert!(matches!(
            "geojson".parse::<OsrmGeometry>(),
            Err(RoutingError::InvalidInput(_))
        ));
    }

    #[test]
    fn should_decode_polyline6_routes() {
        let body = r#"{ "code": "Ok", "routes": [{ "geometry": "_izlhA~rlgdF", "distance": 0.0 }] }"#;
        let route = parse_route_response(body, OsrmGeometry::Polyline6).unwrap();

        assert_eq!(route.geometry.start(), Some(&Coordinate::new(38.5, -120.2)));
    }

    #[test]
    fn should_reject_unexpected_shapes() {
        assert!(matches!(
            parse_route_response(r#"{ "routes": "nope" }"#, OsrmGeometry::Polyline),
            Err(RoutingError::Deserialize(_))
        ));
    }

    #[test]
    fn should_build_route_url_with_lng_lat_order() {
        let client = OsrmRouteClient::new(OsrmRouteClientParams {
            osrm_url: String::from("http://localhost:5000/"),
            profile: String::from("driving"),
            geometry: OsrmGeometry::Polyline6,
        });

        let url = client.route_url(
            &Coordinate::new(50.85, 4.35),
            &Coordinate::new(51.05, 3.72),
        );

        assert_eq!(
            url,
            "http://localhost:5000/route/v1/driving/4.35,50.85;3.72,51.05"
        );
    }
}
