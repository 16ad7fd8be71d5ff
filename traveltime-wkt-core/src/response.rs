//! Deserialisation types for the time-map WKT response.
//!
//! The time-map endpoint can return isochrone shapes as WKT strings instead of
//! nested JSON coordinates. Each `shape` string is parsed with
//! [`crate::parse_wkt`] while the envelope is deserialised, so a malformed
//! shape fails the whole response.
//!
//! Transport is the caller's concern: hand the response body to
//! [`TimeMapWktResponse::from_json`] or to any `serde` deserialiser.

use serde::{Deserialize, Deserializer};

use crate::{Geometry, parse_wkt};

/// Time-map WKT response body.
///
/// # Examples
/// ```
/// use traveltime_wkt_core::{GeometryType, TimeMapWktResponse};
///
/// # fn main() -> Result<(), serde_json::Error> {
/// let body = r#"{
///     "results": [{
///         "search_id": "london",
///         "shape": "MULTIPOLYGON(((-0.1 51.5, -0.2 51.5, -0.2 51.6, -0.1 51.5)))"
///     }]
/// }"#;
/// let response = TimeMapWktResponse::from_json(body)?;
/// assert_eq!(response.results[0].search_id, "london");
/// assert_eq!(
///     response.results[0].shape.geometry_type(),
///     GeometryType::MultiPolygon
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeMapWktResponse {
    /// One entry per search in the request.
    pub results: Vec<TimeMapWktResult>,
}

/// Shape reachable for a single search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeMapWktResult {
    /// Identifier echoed from the request.
    pub search_id: String,
    /// Reachable area, parsed from WKT.
    #[serde(deserialize_with = "deserialize_wkt")]
    pub shape: Geometry,
    /// Optional per-search properties requested by the caller.
    #[serde(default)]
    pub properties: Option<TimeMapWktProperties>,
}

/// Properties attached to a [`TimeMapWktResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimeMapWktProperties {
    /// Whether the shape could only be reached on foot.
    #[serde(default)]
    pub is_only_walking: Option<bool>,
}

impl TimeMapWktResponse {
    /// Deserialise a response body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body is not valid JSON, does not
    /// match the schema, or contains a shape [`parse_wkt`] rejects.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Deserialise a WKT string field into a [`Geometry`].
///
/// Usable on any field via `#[serde(deserialize_with = "...")]`.
///
/// # Errors
///
/// Fails when the value is not a string or [`parse_wkt`] rejects it.
pub fn deserialize_wkt<'de, D>(deserializer: D) -> Result<Geometry, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_wkt(&text).map_err(serde::de::Error::custom)
}
