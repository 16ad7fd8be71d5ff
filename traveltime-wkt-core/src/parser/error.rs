use thiserror::Error;

use crate::GeometryError;

/// Errors from [`crate::parse_wkt`].
///
/// Each variant is a distinct failure mode; branch on the variant (or on
/// [`ParseError::kind`]) rather than on the message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The text is not valid WKT.
    #[error("invalid WKT string {wkt:?}: {message}")]
    InvalidWktString {
        /// The rejected input.
        wkt: String,
        /// Grammar error reported by the WKT reader.
        message: String,
    },
    /// The text parsed but describes an empty geometry, such as `POINT EMPTY`.
    #[error("WKT geometry is empty")]
    NullGeometry,
    /// The geometry kind is valid WKT but not one of the six supported kinds.
    #[error("unsupported geometry type {geometry_type}")]
    InvalidGeometryType {
        /// WKT keyword of the rejected kind, e.g. `GEOMETRYCOLLECTION`.
        geometry_type: String,
    },
    /// A supported kind reached dispatch without a matching builder.
    ///
    /// Indicates a bug in this crate rather than bad input.
    #[error("no builder is registered for geometry type {geometry_type}")]
    InvalidFunction {
        /// WKT keyword of the unhandled kind.
        geometry_type: String,
    },
    /// A parsed value violated a geometry invariant.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Fieldless mirror of [`ParseError`] for control flow and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// See [`ParseError::InvalidWktString`].
    InvalidWktString,
    /// See [`ParseError::NullGeometry`].
    NullGeometry,
    /// See [`ParseError::InvalidGeometryType`].
    InvalidGeometryType,
    /// See [`ParseError::InvalidFunction`].
    InvalidFunction,
    /// See [`ParseError::Geometry`].
    Geometry,
}

impl ParseError {
    /// Return the kind of this error.
    ///
    /// # Examples
    /// ```
    /// use traveltime_wkt_core::{ParseErrorKind, parse_wkt};
    ///
    /// let err = parse_wkt("POINT EMPTY").unwrap_err();
    /// assert_eq!(err.kind(), ParseErrorKind::NullGeometry);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::InvalidWktString { .. } => ParseErrorKind::InvalidWktString,
            Self::NullGeometry => ParseErrorKind::NullGeometry,
            Self::InvalidGeometryType { .. } => ParseErrorKind::InvalidGeometryType,
            Self::InvalidFunction { .. } => ParseErrorKind::InvalidFunction,
            Self::Geometry(_) => ParseErrorKind::Geometry,
        }
    }
}
