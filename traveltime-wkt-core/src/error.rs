use thiserror::Error;

/// Errors raised while constructing geometry values.
///
/// These mirror the validation a caller would hit when building geometries
/// by hand; [`crate::parse_wkt`] surfaces them unchanged through
/// [`crate::ParseError::Geometry`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A line string or ring was given fewer than two points.
    #[error("LineString must have at least 2 coordinates.")]
    TooFewPoints {
        /// Number of points that were supplied.
        found: usize,
    },
    /// Latitude fell outside `[-90, 90]` or was not a number.
    #[error("latitude {lat} must be between -90 and 90")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        lat: f64,
    },
    /// Longitude fell outside `[-180, 180]` or was not a number.
    #[error("longitude {lng} must be between -180 and 180")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        lng: f64,
    },
}
