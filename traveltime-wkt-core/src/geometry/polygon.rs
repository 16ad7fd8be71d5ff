use super::{GeometryType, LineString};
use super::pretty::{PrettyPrint, push_line};

/// An exterior ring with zero or more interior rings (holes).
///
/// A polygon without holes and one built from an absent hole list are the
/// same value: `interiors` is simply empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    exterior: LineString,
    #[cfg_attr(feature = "serde", serde(default))]
    interiors: Vec<LineString>,
}

impl Polygon {
    /// Construct a polygon from its outer ring and holes.
    #[must_use]
    pub const fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// The outer ring.
    #[must_use]
    pub const fn exterior(&self) -> &LineString {
        &self.exterior
    }

    /// Holes in insertion order.
    #[must_use]
    pub fn interiors(&self) -> &[LineString] {
        &self.interiors
    }

    /// Always [`GeometryType::Polygon`].
    #[must_use]
    pub const fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }
}

impl PrettyPrint for Polygon {
    fn write_pretty(&self, out: &mut String, indent_level: usize) {
        push_line(out, indent_level, "POLYGON:");
        push_line(out, indent_level + 1, "EXTERIOR:");
        self.exterior.write_pretty(out, indent_level + 2);
        if self.interiors.is_empty() {
            return;
        }
        push_line(out, indent_level + 1, "INTERIORS:");
        for ring in &self.interiors {
            ring.write_pretty(out, indent_level + 2);
        }
    }
}
