//! Behavioural tests for [`parse_wkt`] and pretty printing.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use traveltime_wkt_core::test_support::{line, point};
use traveltime_wkt_core::{Geometry, ParseError, ParseErrorKind, PrettyPrint, parse_wkt};

/// World state shared between the steps of one scenario.
#[derive(Debug, Default)]
struct ParseWorld {
    text: RefCell<Option<String>>,
    result: RefCell<Option<Result<Geometry, ParseError>>>,
    renderings: RefCell<Vec<String>>,
}

#[fixture]
fn world() -> ParseWorld {
    ParseWorld::default()
}

impl ParseWorld {
    fn geometry(&self) -> Geometry {
        let borrowed = self.result.borrow();
        match borrowed.as_ref().expect("text should have been parsed") {
            Ok(geometry) => geometry.clone(),
            Err(err) => panic!("expected a geometry, got {err:?}"),
        }
    }

    fn error_kind(&self) -> ParseErrorKind {
        let borrowed = self.result.borrow();
        match borrowed.as_ref().expect("text should have been parsed") {
            Ok(geometry) => panic!("expected an error, got {geometry:?}"),
            Err(err) => err.kind(),
        }
    }
}

// --- Given steps ---

#[given("the WKT text {text}")]
fn given_text(world: &ParseWorld, text: String) {
    // Gherkin keeps the surrounding quotes.
    let clean = text.trim_matches('"');
    world.text.replace(Some(clean.to_owned()));
}

// --- When steps ---

#[when("the text is parsed")]
fn when_parsed(world: &ParseWorld) {
    let borrowed = world.text.borrow();
    let text = borrowed.as_ref().expect("WKT text should be set");
    world.result.replace(Some(parse_wkt(text)));
}

#[when("the geometry is pretty printed twice")]
fn when_pretty_printed_twice(world: &ParseWorld) {
    let geometry = world.geometry();
    let mut renderings = world.renderings.borrow_mut();
    renderings.push(geometry.pretty_print(0));
    renderings.push(geometry.pretty_print(0));
}

// --- Then steps ---

#[then("the geometry is a point at the origin")]
fn then_origin(world: &ParseWorld) {
    assert_eq!(world.geometry(), Geometry::Point(point(0.0, 0.0)));
}

#[then("the geometry is a line string through three diagonal points")]
fn then_diagonal_line(world: &ParseWorld) {
    let expected = line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(world.geometry(), Geometry::LineString(expected));
}

#[then("the geometry is a polygon with a five point exterior and no holes")]
fn then_closed_polygon(world: &ParseWorld) {
    let Geometry::Polygon(polygon) = world.geometry() else {
        panic!("expected a polygon");
    };
    let exterior = polygon.exterior().points();
    assert_eq!(exterior.len(), 5);
    assert_eq!(exterior.first(), exterior.last(), "ring should be closed");
    assert_eq!(exterior.get(1), Some(&point(2.0, 0.0)));
    assert!(polygon.interiors().is_empty());
}

#[then("the geometry is a multipoint of two points")]
fn then_multipoint(world: &ParseWorld) {
    let Geometry::MultiPoint(multi) = world.geometry() else {
        panic!("expected a multipoint");
    };
    assert_eq!(multi.points(), [point(0.0, 0.0), point(1.0, 1.0)]);
}

#[then("the point has latitude 51.5072 and longitude -0.1276")]
fn then_london(world: &ParseWorld) {
    assert_eq!(world.geometry(), Geometry::Point(point(51.5072, -0.1276)));
}

#[then("an invalid WKT string error is returned")]
fn then_invalid_string(world: &ParseWorld) {
    assert_eq!(world.error_kind(), ParseErrorKind::InvalidWktString);
}

#[then("a null geometry error is returned")]
fn then_null_geometry(world: &ParseWorld) {
    assert_eq!(world.error_kind(), ParseErrorKind::NullGeometry);
}

#[then("an invalid geometry type error is returned")]
fn then_invalid_type(world: &ParseWorld) {
    assert_eq!(world.error_kind(), ParseErrorKind::InvalidGeometryType);
}

#[then("a line string invariant error is returned")]
fn then_line_string_invariant(world: &ParseWorld) {
    assert_eq!(world.error_kind(), ParseErrorKind::Geometry);
}

#[then("both renderings are identical")]
fn then_renderings_match(world: &ParseWorld) {
    let renderings = world.renderings.borrow();
    assert_eq!(renderings.len(), 2);
    assert_eq!(renderings.first(), renderings.last());
}

#[then("the rendering lists the exterior before the interiors")]
fn then_exterior_first(world: &ParseWorld) {
    let renderings = world.renderings.borrow();
    let rendering = renderings.first().expect("geometry should be rendered");
    assert_eq!(
        rendering,
        "POLYGON:\n\tEXTERIOR:\n\t\tLINE STRING:\n\t\t\tPOINT: 10.0, 20.0\n\t\t\tPOINT: 30.0, 40.0\n\t\t\tPOINT: 10.0, 20.0\n\tINTERIORS:\n\t\tLINE STRING:\n\t\t\tPOINT: 10.0, 20.0\n\t\t\tPOINT: 30.0, 40.0\n\t\t\tPOINT: 10.0, 20.0\n"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $index:literal) => {
        #[scenario(path = "tests/features/parse_wkt.feature", index = $index)]
        fn $fn_name(world: ParseWorld) {
            let _ = world;
        }
    };
}

register_scenario!(parsing_a_point, 0);
register_scenario!(parsing_a_line_string, 1);
register_scenario!(parsing_a_closed_polygon, 2);
register_scenario!(parsing_a_multipoint, 3);
register_scenario!(swapping_longitude_and_latitude, 4);
register_scenario!(rejecting_text_that_is_not_wkt, 5);
register_scenario!(rejecting_an_empty_geometry, 6);
register_scenario!(rejecting_a_geometry_collection, 7);
register_scenario!(rejecting_a_single_coordinate_line, 8);
register_scenario!(pretty_printing_is_repeatable, 9);
