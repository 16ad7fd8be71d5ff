//! Parse WKT text into the geometry model.
//!
//! Grammar-level parsing is delegated to the `wkt` crate. This module walks
//! the parsed value through the `geo-traits` accessors, rejects empty and
//! unsupported geometries, and rebuilds the result as a [`Geometry`] with the
//! axes swapped from WKT's `x y` (longitude, latitude) into `lat`/`lng`.

mod error;

use std::str::FromStr;

use geo_traits::{
    CoordTrait, Dimensions, GeometryCollectionTrait, GeometryTrait,
    GeometryType as RawGeometryType, LineStringTrait, MultiLineStringTrait, MultiPointTrait,
    MultiPolygonTrait, PointTrait, PolygonTrait,
};
use log::debug;

pub use error::{ParseError, ParseErrorKind};

use crate::{
    Coordinate, Geometry, GeometryError, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Parse a WKT string into a [`Geometry`].
///
/// WKT coordinates are read as `x y` (longitude then latitude) and stored as
/// `lat = y`, `lng = x`. Z and M ordinates are discarded.
///
/// # Errors
///
/// - [`ParseError::InvalidWktString`] when `text` is not WKT.
/// - [`ParseError::NullGeometry`] when the geometry is empty.
/// - [`ParseError::InvalidGeometryType`] for kinds other than the six
///   supported ones.
/// - [`ParseError::Geometry`] when a line or ring has fewer than two points
///   or a coordinate is out of range.
///
/// # Examples
/// ```
/// use traveltime_wkt_core::{Coordinate, Geometry, Point, parse_wkt};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let geometry = parse_wkt("POINT (-0.1 51.5)")?;
/// assert_eq!(
///     geometry,
///     Geometry::Point(Point::new(Coordinate::new(51.5, -0.1)?))
/// );
/// # Ok(())
/// # }
/// ```
pub fn parse_wkt(text: &str) -> Result<Geometry, ParseError> {
    let parsed = wkt::Wkt::<f64>::from_str(text).map_err(|err| {
        debug!("rejecting malformed WKT {text:?}: {err}");
        ParseError::InvalidWktString {
            wkt: text.to_owned(),
            message: err.to_string(),
        }
    })?;

    if is_empty(&parsed) {
        debug!("rejecting empty WKT geometry {text:?}");
        return Err(ParseError::NullGeometry);
    }

    let geometry_type = resolve_type(&parsed)?;
    if !matches!(parsed.dim(), Dimensions::Xy) {
        debug!(
            "dropping extra ordinates from {geometry_type} ({:?})",
            parsed.dim()
        );
    }
    build(geometry_type, &parsed)
}

/// Report whether the geometry holds no coordinates at all.
///
/// Multi-geometries and collections are empty when every member is empty, so
/// `MULTILINESTRING (EMPTY)` counts as empty just like `LINESTRING EMPTY`.
fn is_empty<G: GeometryTrait<T = f64>>(geometry: &G) -> bool {
    match geometry.as_type() {
        RawGeometryType::Point(point) => point.coord().is_none(),
        RawGeometryType::LineString(line) => line.num_coords() == 0,
        RawGeometryType::Polygon(polygon) => polygon_is_empty(polygon),
        RawGeometryType::MultiPoint(multi) => multi.points().all(|point| point.coord().is_none()),
        RawGeometryType::MultiLineString(multi) => {
            multi.line_strings().all(|line| line.num_coords() == 0)
        }
        RawGeometryType::MultiPolygon(multi) => {
            multi.polygons().all(|polygon| polygon_is_empty(&polygon))
        }
        RawGeometryType::GeometryCollection(collection) => {
            collection.geometries().all(|member| is_empty(&member))
        }
        RawGeometryType::Rect(_) | RawGeometryType::Triangle(_) | RawGeometryType::Line(_) => {
            false
        }
    }
}

fn polygon_is_empty<P: PolygonTrait<T = f64>>(polygon: &P) -> bool {
    polygon
        .exterior()
        .is_none_or(|ring| ring.num_coords() == 0)
}

/// Map the parsed geometry's runtime type onto a supported [`GeometryType`].
fn resolve_type<G: GeometryTrait<T = f64>>(geometry: &G) -> Result<GeometryType, ParseError> {
    let unsupported = match geometry.as_type() {
        RawGeometryType::Point(_) => return Ok(GeometryType::Point),
        RawGeometryType::LineString(_) => return Ok(GeometryType::LineString),
        RawGeometryType::Polygon(_) => return Ok(GeometryType::Polygon),
        RawGeometryType::MultiPoint(_) => return Ok(GeometryType::MultiPoint),
        RawGeometryType::MultiLineString(_) => return Ok(GeometryType::MultiLineString),
        RawGeometryType::MultiPolygon(_) => return Ok(GeometryType::MultiPolygon),
        RawGeometryType::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        RawGeometryType::Rect(_) => "RECT",
        RawGeometryType::Triangle(_) => "TRIANGLE",
        RawGeometryType::Line(_) => "LINE",
    };
    debug!("rejecting unsupported geometry type {unsupported}");
    Err(ParseError::InvalidGeometryType {
        geometry_type: unsupported.to_owned(),
    })
}

/// Build the model value for a geometry whose type has been resolved.
fn build<G: GeometryTrait<T = f64>>(
    geometry_type: GeometryType,
    geometry: &G,
) -> Result<Geometry, ParseError> {
    let geometry = match (geometry_type, geometry.as_type()) {
        (GeometryType::Point, RawGeometryType::Point(point)) => {
            Geometry::Point(build_point(point)?)
        }
        (GeometryType::LineString, RawGeometryType::LineString(line)) => {
            Geometry::LineString(build_line_string(line)?)
        }
        (GeometryType::Polygon, RawGeometryType::Polygon(polygon)) => {
            Geometry::Polygon(build_polygon(polygon)?)
        }
        (GeometryType::MultiPoint, RawGeometryType::MultiPoint(multi)) => {
            let points = multi
                .points()
                .map(|point| build_point(&point))
                .collect::<Result<_, _>>()?;
            Geometry::MultiPoint(MultiPoint::new(points))
        }
        (GeometryType::MultiLineString, RawGeometryType::MultiLineString(multi)) => {
            let lines = multi
                .line_strings()
                .map(|line| build_line_string(&line))
                .collect::<Result<_, _>>()?;
            Geometry::MultiLineString(MultiLineString::new(lines))
        }
        (GeometryType::MultiPolygon, RawGeometryType::MultiPolygon(multi)) => {
            let polygons = multi
                .polygons()
                .map(|polygon| build_polygon(&polygon))
                .collect::<Result<_, _>>()?;
            Geometry::MultiPolygon(MultiPolygon::new(polygons))
        }
        (unhandled, _) => {
            return Err(ParseError::InvalidFunction {
                geometry_type: unhandled.to_string(),
            });
        }
    };
    Ok(geometry)
}

/// Swap WKT's `x`/`y` into latitude/longitude and validate the ranges.
fn coordinate<C: CoordTrait<T = f64>>(coord: &C) -> Result<Coordinate, GeometryError> {
    Coordinate::new(coord.y(), coord.x())
}

/// Empty member points (`MULTIPOINT (EMPTY, 1 1)`) have nothing to wrap, so
/// they are reported as [`ParseError::NullGeometry`].
fn build_point<P: PointTrait<T = f64>>(point: &P) -> Result<Point, ParseError> {
    let coord = point.coord().ok_or(ParseError::NullGeometry)?;
    Ok(Point::new(coordinate(&coord)?))
}

/// Empty member lines (`MULTILINESTRING ((0 0, 1 1), EMPTY)`) are reported
/// as [`ParseError::NullGeometry`] rather than as too short.
fn build_line_string<L: LineStringTrait<T = f64>>(line: &L) -> Result<LineString, ParseError> {
    if line.num_coords() == 0 {
        return Err(ParseError::NullGeometry);
    }
    let points = line
        .coords()
        .map(|coord| coordinate(&coord).map(Point::new))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LineString::new(points)?)
}

fn build_polygon<P: PolygonTrait<T = f64>>(polygon: &P) -> Result<Polygon, ParseError> {
    let ring = polygon.exterior().ok_or(ParseError::NullGeometry)?;
    let exterior = build_line_string(&ring)?;
    let interiors = polygon
        .interiors()
        .map(|ring| build_line_string(&ring))
        .collect::<Result<_, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrettyPrint;
    use crate::test_support::{line, point, square};
    use rstest::rstest;

    #[rstest]
    fn parses_origin_point() {
        assert_eq!(
            parse_wkt("POINT (0 0)"),
            Ok(Geometry::Point(point(0.0, 0.0)))
        );
    }

    #[rstest]
    fn swaps_axes_into_lat_lng() {
        let geometry = parse_wkt("POINT (20 10)").expect("valid point");
        assert_eq!(geometry, Geometry::Point(point(10.0, 20.0)));
        assert_eq!(geometry.pretty_print(0), "POINT: 10.0, 20.0\n");
    }

    #[rstest]
    fn parses_line_string_in_order() {
        assert_eq!(
            parse_wkt("LINESTRING(0 0, 1 1, 2 2)"),
            Ok(Geometry::LineString(line(&[
                (0.0, 0.0),
                (1.0, 1.0),
                (2.0, 2.0)
            ])))
        );
    }

    #[rstest]
    fn parses_closed_polygon_without_holes() {
        let geometry = parse_wkt("POLYGON((0 0, 0 2, 2 2, 2 0, 0 0))").expect("valid polygon");
        assert_eq!(geometry, Geometry::Polygon(square()));
        let Geometry::Polygon(polygon) = geometry else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.exterior().points().len(), 5);
        assert!(polygon.interiors().is_empty());
    }

    #[rstest]
    fn parses_polygon_holes_in_order() {
        let geometry = parse_wkt(
            "POLYGON((0 0, 10 0, 10 10, 0 10, 0 0), (1 1, 2 1, 2 2, 1 1), (5 5, 6 5, 6 6, 5 5))",
        )
        .expect("valid polygon");
        let Geometry::Polygon(polygon) = geometry else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.interiors().len(), 2);
        assert_eq!(
            polygon.interiors()[0],
            line(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (1.0, 1.0)])
        );
        assert_eq!(polygon.interiors()[1].points()[1], point(5.0, 6.0));
    }

    #[rstest]
    fn parses_multi_point() {
        assert_eq!(
            parse_wkt("MULTIPOINT(0 0, 1 1)"),
            Ok(Geometry::MultiPoint(MultiPoint::new(vec![
                point(0.0, 0.0),
                point(1.0, 1.0)
            ])))
        );
    }

    #[rstest]
    fn parses_multi_line_string() {
        assert_eq!(
            parse_wkt("MULTILINESTRING((0 0, 1 1), (2 2, 3 4))"),
            Ok(Geometry::MultiLineString(MultiLineString::new(vec![
                line(&[(0.0, 0.0), (1.0, 1.0)]),
                line(&[(2.0, 2.0), (4.0, 3.0)]),
            ])))
        );
    }

    #[rstest]
    fn parses_multi_polygon() {
        let geometry = parse_wkt(
            "MULTIPOLYGON(((0 0, 0 2, 2 2, 2 0, 0 0)), ((0 0, 0 2, 2 2, 2 0, 0 0)))",
        )
        .expect("valid multipolygon");
        assert_eq!(
            geometry,
            Geometry::MultiPolygon(MultiPolygon::new(vec![square(), square()]))
        );
    }

    #[rstest]
    #[case("INVALIDWKTSTRING", ParseErrorKind::InvalidWktString)]
    #[case("POINT (1)", ParseErrorKind::InvalidWktString)]
    #[case("", ParseErrorKind::InvalidWktString)]
    #[case("POINT EMPTY", ParseErrorKind::NullGeometry)]
    #[case("LINESTRING EMPTY", ParseErrorKind::NullGeometry)]
    #[case("POLYGON EMPTY", ParseErrorKind::NullGeometry)]
    #[case("MULTIPOLYGON EMPTY", ParseErrorKind::NullGeometry)]
    #[case("GEOMETRYCOLLECTION EMPTY", ParseErrorKind::NullGeometry)]
    #[case("MULTILINESTRING(EMPTY)", ParseErrorKind::NullGeometry)]
    #[case("MULTIPOLYGON(EMPTY, EMPTY)", ParseErrorKind::NullGeometry)]
    #[case(
        "GEOMETRYCOLLECTION(POINT EMPTY, LINESTRING EMPTY)",
        ParseErrorKind::NullGeometry
    )]
    #[case("MULTILINESTRING((0 0, 1 1), EMPTY)", ParseErrorKind::NullGeometry)]
    #[case(
        "GEOMETRYCOLLECTION(POINT(2 3),LINESTRING(2 3, 3 4))",
        ParseErrorKind::InvalidGeometryType
    )]
    #[case("LINESTRING(0 0)", ParseErrorKind::Geometry)]
    #[case("POINT (0 95)", ParseErrorKind::Geometry)]
    #[case("POINT (200 0)", ParseErrorKind::Geometry)]
    fn classifies_failures(#[case] text: &str, #[case] expected: ParseErrorKind) {
        let err = parse_wkt(text).expect_err("input should be rejected");
        assert_eq!(err.kind(), expected, "unexpected error for {text:?}: {err}");
    }

    #[rstest]
    fn invalid_string_carries_input() {
        let err = parse_wkt("INVALIDWKTSTRING").expect_err("not WKT");
        match err {
            ParseError::InvalidWktString { wkt, .. } => assert_eq!(wkt, "INVALIDWKTSTRING"),
            other => panic!("expected InvalidWktString, found {other:?}"),
        }
    }

    #[rstest]
    fn unsupported_type_names_the_kind() {
        let err = parse_wkt("GEOMETRYCOLLECTION(POINT(2 3))").expect_err("unsupported");
        assert_eq!(
            err,
            ParseError::InvalidGeometryType {
                geometry_type: "GEOMETRYCOLLECTION".to_owned()
            }
        );
    }

    #[rstest]
    fn short_ring_reports_line_string_invariant() {
        let err = parse_wkt("MULTILINESTRING((0 0, 1 1), (2 2))").expect_err("short member");
        assert_eq!(err, ParseError::Geometry(GeometryError::TooFewPoints { found: 1 }));
        assert_eq!(err.to_string(), "LineString must have at least 2 coordinates.");
    }

    #[rstest]
    fn ignores_z_ordinate() {
        assert_eq!(
            parse_wkt("POINT Z (1 2 3)"),
            Ok(Geometry::Point(point(2.0, 1.0)))
        );
    }

    #[rstest]
    fn mismatched_dispatch_reports_invalid_function() {
        let parsed = wkt::Wkt::<f64>::from_str("POINT (1 2)").expect("valid WKT");
        let err = build(GeometryType::Polygon, &parsed).expect_err("no builder for the pair");
        assert_eq!(err.kind(), ParseErrorKind::InvalidFunction);
    }

    #[rstest]
    fn parses_concurrently() {
        let handles: Vec<_> = (0_u8..4)
            .map(|i| std::thread::spawn(move || (i, parse_wkt(&format!("POINT ({i} {i})")))))
            .collect();
        for handle in handles {
            let (i, geometry) = handle.join().expect("thread should not panic");
            let expected = f64::from(i);
            assert_eq!(geometry, Ok(Geometry::Point(point(expected, expected))));
        }
    }
}
