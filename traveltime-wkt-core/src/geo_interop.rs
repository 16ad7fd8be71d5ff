//! Conversions into `geo` types.
//!
//! `geo` stores `x = longitude` and `y = latitude`, so every conversion swaps
//! the axes back from the model's `lat`/`lng` order.

use geo::Coord;

use crate::{
    Coordinate, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            x: coordinate.lng(),
            y: coordinate.lat(),
        }
    }
}

impl From<&Point> for geo::Point<f64> {
    fn from(point: &Point) -> Self {
        Self(point.coordinate().into())
    }
}

impl From<&LineString> for geo::LineString<f64> {
    fn from(line: &LineString) -> Self {
        line.points()
            .iter()
            .map(|point| Coord::from(point.coordinate()))
            .collect()
    }
}

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        Self::new(
            polygon.exterior().into(),
            polygon.interiors().iter().map(Into::into).collect(),
        )
    }
}

impl From<&MultiPoint> for geo::MultiPoint<f64> {
    fn from(multi: &MultiPoint) -> Self {
        Self::new(multi.points().iter().map(Into::into).collect())
    }
}

impl From<&MultiLineString> for geo::MultiLineString<f64> {
    fn from(multi: &MultiLineString) -> Self {
        Self::new(multi.line_strings().iter().map(Into::into).collect())
    }
}

impl From<&MultiPolygon> for geo::MultiPolygon<f64> {
    fn from(multi: &MultiPolygon) -> Self {
        Self::new(multi.polygons().iter().map(Into::into).collect())
    }
}

/// Convert any model geometry into the matching `geo` variant.
///
/// # Examples
/// ```
/// use traveltime_wkt_core::parse_wkt;
///
/// # fn main() -> Result<(), traveltime_wkt_core::ParseError> {
/// let geometry = parse_wkt("POINT (-0.1 51.5)")?;
/// let converted = geo::Geometry::from(&geometry);
/// assert_eq!(converted, geo::Geometry::Point(geo::point!(x: -0.1, y: 51.5)));
/// # Ok(())
/// # }
/// ```
impl From<&Geometry> for geo::Geometry<f64> {
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(point) => Self::Point(point.into()),
            Geometry::LineString(line) => Self::LineString(line.into()),
            Geometry::Polygon(polygon) => Self::Polygon(polygon.into()),
            Geometry::MultiPoint(multi) => Self::MultiPoint(multi.into()),
            Geometry::MultiLineString(multi) => Self::MultiLineString(multi.into()),
            Geometry::MultiPolygon(multi) => Self::MultiPolygon(multi.into()),
        }
    }
}
