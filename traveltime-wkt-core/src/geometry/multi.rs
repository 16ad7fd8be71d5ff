//! Multi-part geometries.
//!
//! None of these validate their member count: an empty collection is a valid
//! value when built directly. [`crate::parse_wkt`] rejects empty collections
//! before they get here.

use super::pretty::{PrettyPrint, push_line};
use super::{GeometryType, LineString, Point, Polygon};

macro_rules! multi_geometry {
    (
        $(#[$meta:meta])*
        $name:ident, $member:ty, $field:ident, $tag:ident, $label:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $field: Vec<$member>,
        }

        impl $name {
            #[doc = concat!("Construct a [`", stringify!($name), "`] from its members.")]
            #[must_use]
            pub const fn new($field: Vec<$member>) -> Self {
                Self { $field }
            }

            /// Members in order.
            #[must_use]
            pub fn $field(&self) -> &[$member] {
                &self.$field
            }

            #[doc = concat!("Always [`GeometryType::", stringify!($tag), "`].")]
            #[must_use]
            pub const fn geometry_type(&self) -> GeometryType {
                GeometryType::$tag
            }
        }

        impl PrettyPrint for $name {
            fn write_pretty(&self, out: &mut String, indent_level: usize) {
                push_line(out, indent_level, $label);
                for member in &self.$field {
                    member.write_pretty(out, indent_level + 1);
                }
            }
        }
    };
}

multi_geometry!(
    /// An ordered collection of points.
    MultiPoint,
    Point,
    points,
    MultiPoint,
    "MULTIPOINT:"
);

multi_geometry!(
    /// An ordered collection of line strings.
    MultiLineString,
    LineString,
    line_strings,
    MultiLineString,
    "MULTILINESTRING:"
);

multi_geometry!(
    /// An ordered collection of polygons.
    MultiPolygon,
    Polygon,
    polygons,
    MultiPolygon,
    "MULTIPOLYGON:"
);
