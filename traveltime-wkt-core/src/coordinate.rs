//! Latitude/longitude pairs.
//!
//! Coordinates are WGS84 with the latitude first. This is the reverse of the
//! `x = longitude`, `y = latitude` order used by WKT and the `geo` crate.

use crate::GeometryError;

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A validated latitude/longitude pair.
///
/// # Examples
/// ```
/// use traveltime_wkt_core::Coordinate;
///
/// # fn main() -> Result<(), traveltime_wkt_core::GeometryError> {
/// let coordinate = Coordinate::new(51.5, -0.1)?;
/// assert_eq!(coordinate.lat(), 51.5);
/// assert_eq!(coordinate.lng(), -0.1);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Validate both axes and construct a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::LatitudeOutOfRange`] or
    /// [`GeometryError::LongitudeOutOfRange`] when an axis is outside its
    /// range. `NaN` is never in range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeometryError> {
        if !LATITUDE_RANGE.contains(&lat) {
            return Err(GeometryError::LatitudeOutOfRange { lat });
        }
        if !LONGITUDE_RANGE.contains(&lng) {
            return Err(GeometryError::LongitudeOutOfRange { lng });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

/// Unvalidated wire form; deserialisation funnels through [`Coordinate::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GeometryError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}
