use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<Coordinate> for geo_types::Coord<f64> {
    fn from(value: Coordinate) -> Self {
        geo_types::Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coordinate> for geo_types::Point<f64> {
    fn from(value: Coordinate) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

/// Ordered path, the first point is where the route starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteGeometry(Vec<Coordinate>);

impl RouteGeometry {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn start(&self) -> Option<&Coordinate> {
        self.0.first()
    }

    pub fn end(&self) -> Option<&Coordinate> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.0.iter()
    }
}

impl From<Vec<Coordinate>> for RouteGeometry {
    fn from(points: Vec<Coordinate>) -> Self {
        Self(points)
    }
}

impl<'a> IntoIterator for &'a RouteGeometry {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<&RouteGeometry> for geo_types::LineString<f64> {
    fn from(geometry: &RouteGeometry) -> Self {
        geometry
            .iter()
            .map(|&point| geo_types::Coord::from(point))
            .collect()
    }
}
