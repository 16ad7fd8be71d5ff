//! WKT geometry parsing for travel-time API responses.
//!
//! The travel-time service can describe reachable areas as WKT. This crate
//! turns that text into a small, validated geometry model and renders it back
//! as indented, human-readable text:
//!
//! ```
//! use traveltime_wkt_core::{PrettyPrint, parse_wkt};
//!
//! # fn main() -> Result<(), traveltime_wkt_core::ParseError> {
//! let geometry = parse_wkt("LINESTRING(0 0, 1 1)")?;
//! assert_eq!(
//!     geometry.pretty_print(0),
//!     "LINE STRING:\n\tPOINT: 0.0, 0.0\n\tPOINT: 1.0, 1.0\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Coordinates are stored latitude first. WKT and `geo` both put longitude
//! first; [`parse_wkt`] and the `geo` conversions swap the axes.
#![forbid(unsafe_code)]

mod coordinate;
mod error;
pub mod geo_interop;
pub mod geometry;
pub mod parser;
#[cfg(feature = "serde")]
pub mod response;
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_support;

pub use coordinate::{Coordinate, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use error::GeometryError;
pub use geometry::{
    Geometry, GeometryType, LineString, MIN_LINE_STRING_POINTS, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, PrettyPrint,
};
pub use parser::{ParseError, ParseErrorKind, parse_wkt};
#[cfg(feature = "serde")]
pub use response::{TimeMapWktProperties, TimeMapWktResponse, TimeMapWktResult};
