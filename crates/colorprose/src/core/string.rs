use crate::core::{from_24bit, oklch_to_oklab, srgb_to_oklab};
use crate::error::ColorFormatError;
use crate::Float;

/// Parse `#rgb` or `#rrggbb` into three bytes.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    let width = match digits.len() {
        3 => 1,
        6 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    let mut bytes = [0; 3];
    for (index, byte) in bytes.iter_mut().enumerate() {
        let hex = digits
            .get(index * width..(index + 1) * width)
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(hex, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        *byte = if width == 1 { n * 17 } else { n };
    }

    Ok(bytes)
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a subset of valid CSS color formats. This function recognizes only the
/// `oklab()` and `oklch()` functions with space-separated coordinates and an
/// optional alpha after a slash. Coordinates must not have units including `%`.
/// The result always is in Oklab.
fn parse_css(s: &str) -> Result<([Float; 3], Float), ColorFormatError> {
    // Munge CSS function name
    let (is_polar, rest) = s
        .strip_prefix("oklab")
        .map(|r| (false, r))
        .or_else(|| s.strip_prefix("oklch").map(|r| (true, r)))
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    #[inline]
    fn parse_coordinate(s: Option<&str>) -> Result<Float, ColorFormatError> {
        s.ok_or(ColorFormatError::MissingCoordinate)
            .and_then(|t| t.parse().map_err(|_| ColorFormatError::MalformedFloat))
    }

    // Split off alpha, then munge coordinates. Iterator eats all leading or
    // trailing white space.
    let (body, alpha) = match body.split_once('/') {
        Some((body, alpha)) => (body, Some(alpha.trim())),
        None => (body, None),
    };

    let mut iter = body.split_whitespace();
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    let alpha = match alpha {
        Some(a) if a.is_empty() => return Err(ColorFormatError::MissingCoordinate),
        Some(a) => a.parse().map_err(|_| ColorFormatError::MalformedFloat)?,
        None => 1.0,
    };

    let coordinates = if is_polar {
        oklch_to_oklab(&[c1, c2, c3])
    } else {
        [c1, c2, c3]
    };

    Ok((coordinates, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into Oklab coordinates and alpha.
///
/// This function recognizes the three and six digit hashed hexadecimal formats
/// for sRGB colors as well as the modern syntax for the `oklab()` and `oklch()`
/// CSS functions with space-separated arguments and optional alpha. Before
/// trying to parse either of these formats, this function trims leading and
/// trailing white space and converts ASCII letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<([Float; 3], Float), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let [r, g, b] = parse_hashed(s)?;
        Ok((srgb_to_oklab(&from_24bit(r, g, b)), 1.0))
    } else {
        parse_css(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the Oklab coordinates and alpha as a string.
///
/// This function formats the given cooordinates as a CSS color with the
/// `oklab()` function and space-separated arguments. Alpha is included only if
/// it is not one. It respects the formatter's precision, defaulting to 5
/// digits past the decimal.
pub(crate) fn format(
    coordinates: &[Float; 3],
    alpha: Float,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    fn write_number(
        n: Float,
        factor: Float,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        // CSS mandates NO trailing zeros whatsoever. But formatting floats
        // with a precision produces trailing zeros. Rounding avoids them, for
        // the most part. If fractional part is zero, we do need an explicit
        // precision---of zero!
        let n = if n.is_nan() { 0.0 } else { n };
        let n = (n * factor).round() / factor;
        let n = if n == -0.0 { 0.0 } else { n };
        if n == n.trunc() {
            f.write_fmt(format_args!("{:.0}", n))
        } else {
            f.write_fmt(format_args!("{}", n))
        }
    }

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);

    f.write_str("oklab(")?;
    for (index, coordinate) in coordinates.iter().enumerate() {
        write_number(*coordinate, factor, f)?;
        if index < 2 {
            f.write_str(" ")?;
        }
    }

    if alpha != 1.0 {
        f.write_str(" / ")?;
        write_number(alpha, factor, f)?;
    }

    f.write_str(")")
}

// ====================================================================================================================
