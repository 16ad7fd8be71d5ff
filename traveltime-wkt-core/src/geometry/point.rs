use crate::Coordinate;

use super::GeometryType;
use super::pretty::{PrettyPrint, format_float, push_line};

/// A single position.
///
/// # Examples
/// ```
/// use traveltime_wkt_core::{Coordinate, Point};
///
/// # fn main() -> Result<(), traveltime_wkt_core::GeometryError> {
/// let point = Point::new(Coordinate::new(51.5, -0.1)?);
/// assert_eq!(point.coordinate().lat(), 51.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coordinate: Coordinate,
}

impl Point {
    /// Wrap a coordinate as a point.
    #[must_use]
    pub const fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }

    /// The point's position.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Always [`GeometryType::Point`].
    #[must_use]
    pub const fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }
}

impl PrettyPrint for Point {
    fn write_pretty(&self, out: &mut String, indent_level: usize) {
        let line = format!(
            "POINT: {}, {}",
            format_float(self.coordinate.lat()),
            format_float(self.coordinate.lng())
        );
        push_line(out, indent_level, &line);
    }
}
