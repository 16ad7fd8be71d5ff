//! Indented, human-readable rendering of geometries.

/// Render a geometry as indented text, one tab per nesting level.
///
/// Implementers only provide [`PrettyPrint::write_pretty`]; nested values are
/// rendered by calling it on children with `indent_level + 1`.
///
/// # Examples
/// ```
/// use traveltime_wkt_core::{Coordinate, Point, PrettyPrint};
///
/// # fn main() -> Result<(), traveltime_wkt_core::GeometryError> {
/// let point = Point::new(Coordinate::new(10.0, 20.0)?);
/// assert_eq!(point.pretty_print(0), "POINT: 10.0, 20.0\n");
/// assert_eq!(point.pretty_print(1), "\tPOINT: 10.0, 20.0\n");
/// # Ok(())
/// # }
/// ```
pub trait PrettyPrint {
    /// Append the rendering of `self` to `out`, starting at `indent_level`.
    fn write_pretty(&self, out: &mut String, indent_level: usize);

    /// Return the rendering of `self` starting at `indent_level`.
    fn pretty_print(&self, indent_level: usize) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, indent_level);
        out
    }
}

/// Append a single tab-indented line terminated by `\n`.
pub(crate) fn push_line(out: &mut String, indent_level: usize, text: &str) {
    out.extend(std::iter::repeat_n('\t', indent_level));
    out.push_str(text);
    out.push('\n');
}

/// Format a float so whole numbers keep a trailing `.0`.
///
/// Exponents are signed and padded to two digits: `1e-05`, `1e+20`.
pub(crate) fn format_float(value: f64) -> String {
    let repr = format!("{value:?}");
    repr.split_once('e').map_or_else(
        || repr.clone(),
        |(mantissa, exponent)| {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, "10.0")]
    #[case(-0.5, "-0.5")]
    #[case(51.507_351, "51.507351")]
    #[case(0.000_01, "1e-05")]
    #[case(-0.000_015, "-1.5e-05")]
    #[case(1.0e20, "1e+20")]
    fn floats_keep_decimal_point(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_float(value), expected);
    }

    #[rstest]
    fn lines_are_tab_indented() {
        let mut out = String::new();
        push_line(&mut out, 0, "A:");
        push_line(&mut out, 2, "B");
        assert_eq!(out, "A:\n\t\tB\n");
    }
}
