#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two coordinate arrays are the same.
///
/// Each coordinate is normalized with [`to_eq_bits`] before comparison, so
/// not-a-numbers equal zero and the least significant digits do not matter.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($cs1:expr , $cs2:expr $(,)?) => {
        let (cs1, cs2): (&[$crate::Float; 3], &[$crate::Float; 3]) = ($cs1, $cs2);
        let bits1 = cs1.map($crate::to_eq_bits);
        let bits2 = cs2.map($crate::to_eq_bits);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

/// Test macro for asserting the equality of colors.
///
/// This macro tests the color objects for equality using the `Eq` trait. The
/// implementation, in turn, normalizes the coordinates by zeroing out
/// not-a-numbers, clamping them to their valid ranges, reducing resolution,
/// and dropping the sign of negative zeros before comparing the resulting bit
/// strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2) = ($c1, $c2);
        assert_eq!(
            c1,
            c2,
            "colors differ:\n{:?} / {:?}\n{:?} / {:?}",
            c1.as_ref(),
            c1.alpha(),
            c2.as_ref(),
            c2.alpha()
        );
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// The largest magnitude of the a/b coordinates.
///
/// In practice, colors in sRGB and Display P3 stay well within `-0.4..=0.4`.
/// The bound is a little looser so that enriching a color has some room to
/// grow before hitting the limit.
pub(crate) const AB_LIMIT: Float = 0.5;

/// Normalize the Oklab coordinates.
///
/// This function ensures that coordinates are well-formed. In particular, it
/// replaces not-a-number coordinates with zero, limits lightness to `0..=1`, and
/// limits a/b to `-0.5..=0.5`.
#[inline]
pub(crate) fn normalize(coordinates: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = coordinates.map(|c| if c.is_nan() { 0.0 } else { c });
    [
        l.clamp(0.0, 1.0),
        a.clamp(-AB_LIMIT, AB_LIMIT),
        b.clamp(-AB_LIMIT, AB_LIMIT),
    ]
}

/// Normalize the alpha, i.e., zero out not-a-number and clamp to `0..=1`.
#[inline]
pub(crate) fn normalize_alpha(alpha: Float) -> Float {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    normalize(coordinates).map(to_eq_bits)
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the two floats are close enough to be considered equal.
/// <i class=python-only>Python only!</i>
///
/// This function relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Scale factor for rounding before comparison, i.e., 12 or 4 significant
/// digits after the decimal depending on [`Float`].
#[cfg(feature = "f64")]
const ROUNDING_FACTOR: Float = 1e12;
#[cfg(not(feature = "f64"))]
const ROUNDING_FACTOR: Float = 1e4;

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the chroma and hue are gray-ish.
///
/// This function treats the chroma and hue as gray-ish if either the hue is
/// not-a-number or the chroma is smaller than or equal to the given threshold.
#[inline]
pub(crate) fn is_achromatic_chroma_hue(chroma: Float, hue: Float, threshold: Float) -> bool {
    hue.is_nan() || chroma <= threshold
}

#[cfg(test)]
mod test {
    use super::{normalize, normalize_alpha, to_eq_bits, to_eq_coordinates};
    use crate::Float;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(&[Float::NAN, 0.7, -0.9]),
            [0.0, 0.5, -0.5]
        );
        assert_eq!(normalize(&[1.3, 0.1, -0.2]), [1.0, 0.1, -0.2]);
        assert_eq!(normalize_alpha(Float::NAN), 0.0);
        assert_eq!(normalize_alpha(1.5), 1.0);
    }

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(
            to_eq_coordinates(&[0.5, 0.1, -0.1]),
            to_eq_coordinates(&[0.5 + 1e-15, 0.1, -0.1 - 1e-15])
        );
        assert_ne!(to_eq_bits(0.5), to_eq_bits(0.5001));
    }
}
