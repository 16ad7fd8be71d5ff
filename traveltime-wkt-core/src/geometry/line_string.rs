use crate::GeometryError;

use super::{GeometryType, Point};
use super::pretty::{PrettyPrint, push_line};

/// Minimum number of points a line string may hold.
pub const MIN_LINE_STRING_POINTS: usize = 2;

/// An ordered sequence of at least two points.
///
/// Also used for polygon rings.
///
/// # Examples
/// ```
/// use traveltime_wkt_core::{Coordinate, GeometryError, LineString, Point};
///
/// # fn main() -> Result<(), GeometryError> {
/// let a = Point::new(Coordinate::new(0.0, 0.0)?);
/// let b = Point::new(Coordinate::new(1.0, 1.0)?);
/// let line = LineString::new(vec![a, b])?;
/// assert_eq!(line.points().len(), 2);
///
/// let err = LineString::new(vec![a]).unwrap_err();
/// assert_eq!(err.to_string(), "LineString must have at least 2 coordinates.");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLineString"))]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Validate the point count and construct a [`LineString`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] when fewer than two points are
    /// supplied.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < MIN_LINE_STRING_POINTS {
            return Err(GeometryError::TooFewPoints {
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Always [`GeometryType::LineString`].
    #[must_use]
    pub const fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }
}

impl PrettyPrint for LineString {
    fn write_pretty(&self, out: &mut String, indent_level: usize) {
        push_line(out, indent_level, "LINE STRING:");
        for point in &self.points {
            point.write_pretty(out, indent_level + 1);
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLineString {
    points: Vec<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLineString> for LineString {
    type Error = GeometryError;

    fn try_from(raw: RawLineString) -> Result<Self, Self::Error> {
        Self::new(raw.points)
    }
}
