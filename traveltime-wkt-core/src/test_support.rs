//! Test-only geometry builders used by unit and behaviour tests.
//!
//! Coordinates are given as `(lat, lng)` tuples. The builders panic on
//! invalid input, so only feed them literal fixtures.

use crate::{Coordinate, LineString, Point, Polygon};

/// Build a point, panicking if the coordinate is out of range.
pub fn point(lat: f64, lng: f64) -> Point {
    let coordinate = Coordinate::new(lat, lng)
        .unwrap_or_else(|err| panic!("fixture coordinate ({lat}, {lng}) is invalid: {err}"));
    Point::new(coordinate)
}

/// Build a line string from `(lat, lng)` pairs.
pub fn line(coordinates: &[(f64, f64)]) -> LineString {
    let points = coordinates.iter().map(|&(lat, lng)| point(lat, lng)).collect();
    LineString::new(points).unwrap_or_else(|err| panic!("fixture line is invalid: {err}"))
}

/// A closed 2x2 square with its corner at the origin and no holes.
pub fn square() -> Polygon {
    Polygon::new(
        line(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]),
        Vec::new(),
    )
}
