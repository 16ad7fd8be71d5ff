//! Facade crate for the travel-time WKT toolkit.
//!
//! This crate re-exports the geometry model and WKT parser, and the response
//! envelope behind the `serde` feature.

#![forbid(unsafe_code)]

pub use traveltime_wkt_core::{
    Coordinate, Geometry, GeometryError, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, ParseError, ParseErrorKind, Point, Polygon, PrettyPrint, parse_wkt,
};

#[cfg(feature = "serde")]
pub use traveltime_wkt_core::{TimeMapWktProperties, TimeMapWktResponse, TimeMapWktResult};
