//! The geometry model: six immutable geometry kinds behind one enum.
//!
//! Values are built either by [`crate::parse_wkt`] or directly by callers.
//! Each nested geometry is owned by its parent and nothing is mutable after
//! construction.

mod line_string;
mod multi;
mod point;
mod polygon;
mod pretty;

use std::fmt;
use std::str::FromStr;

pub use line_string::{LineString, MIN_LINE_STRING_POINTS};
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;
pub use pretty::PrettyPrint;

use crate::ParseError;

/// Discriminant naming each supported geometry kind.
///
/// # Examples
/// ```
/// use traveltime_wkt_core::GeometryType;
///
/// assert_eq!(GeometryType::LineString.as_str(), "LINESTRING");
/// assert_eq!(GeometryType::MultiPolygon.to_string(), "MULTIPOLYGON");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum GeometryType {
    /// A single position.
    Point,
    /// A polyline of two or more positions.
    LineString,
    /// A ring with optional holes.
    Polygon,
    /// Several points.
    MultiPoint,
    /// Several polylines.
    MultiLineString,
    /// Several polygons.
    MultiPolygon,
}

impl GeometryType {
    /// Every supported kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Point,
        Self::LineString,
        Self::Polygon,
        Self::MultiPoint,
        Self::MultiLineString,
        Self::MultiPolygon,
    ];

    /// Return the upper-case WKT keyword for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any supported geometry.
///
/// # Examples
/// ```
/// use traveltime_wkt_core::{Geometry, GeometryType, PrettyPrint};
///
/// # fn main() -> Result<(), traveltime_wkt_core::ParseError> {
/// let geometry: Geometry = "MULTIPOINT(0 0, 1 1)".parse()?;
/// assert_eq!(geometry.geometry_type(), GeometryType::MultiPoint);
/// assert_eq!(
///     geometry.pretty_print(0),
///     "MULTIPOINT:\n\tPOINT: 0.0, 0.0\n\tPOINT: 1.0, 1.0\n"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// See [`Point`].
    #[cfg_attr(feature = "serde", serde(rename = "POINT"))]
    Point(Point),
    /// See [`LineString`].
    #[cfg_attr(feature = "serde", serde(rename = "LINESTRING"))]
    LineString(LineString),
    /// See [`Polygon`].
    #[cfg_attr(feature = "serde", serde(rename = "POLYGON"))]
    Polygon(Polygon),
    /// See [`MultiPoint`].
    #[cfg_attr(feature = "serde", serde(rename = "MULTIPOINT"))]
    MultiPoint(MultiPoint),
    /// See [`MultiLineString`].
    #[cfg_attr(feature = "serde", serde(rename = "MULTILINESTRING"))]
    MultiLineString(MultiLineString),
    /// See [`MultiPolygon`].
    #[cfg_attr(feature = "serde", serde(rename = "MULTIPOLYGON"))]
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// The kind of this geometry.
    #[must_use]
    pub const fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(point) => point.geometry_type(),
            Self::LineString(line) => line.geometry_type(),
            Self::Polygon(polygon) => polygon.geometry_type(),
            Self::MultiPoint(multi) => multi.geometry_type(),
            Self::MultiLineString(multi) => multi.geometry_type(),
            Self::MultiPolygon(multi) => multi.geometry_type(),
        }
    }
}

impl PrettyPrint for Geometry {
    fn write_pretty(&self, out: &mut String, indent_level: usize) {
        match self {
            Self::Point(point) => point.write_pretty(out, indent_level),
            Self::LineString(line) => line.write_pretty(out, indent_level),
            Self::Polygon(polygon) => polygon.write_pretty(out, indent_level),
            Self::MultiPoint(multi) => multi.write_pretty(out, indent_level),
            Self::MultiLineString(multi) => multi.write_pretty(out, indent_level),
            Self::MultiPolygon(multi) => multi.write_pretty(out, indent_level),
        }
    }
}

/// Renders [`PrettyPrint::pretty_print`] at indent level zero.
impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_print(0))
    }
}

impl FromStr for Geometry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_wkt(s)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon
);
