use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    delta_e_ok, distance_squared, format, from_24bit, in_gamut, is_achromatic_chroma_hue,
    normalize, normalize_alpha, oklab_to_oklch, oklab_to_srgb, parse, srgb_to_oklab, to_24bit,
    to_eq_bits, to_eq_coordinates, to_gamut, Mean,
};
use crate::Float;

/// A color in Oklab with alpha.
///
/// Every color object has three Oklab coordinates, i.e., lightness L and the
/// two chroma axes a and b, plus an alpha channel for opacity.
///
/// # Normalization
///
/// Colors are always normalized. Constructors and operations alike replace
/// not-a-number coordinates with zero, limit lightness and alpha to `0..=1`,
/// and limit a and b to `-0.5..=0.5`. Colors do *not* automatically stay
/// within the sRGB gamut, however. Only [`Color::to_gamut`] maps them back
/// into that gamut.
///
/// # Equality Testing and Hashing
///
/// Equality testing and hashing do not compare coordinates directly but rather
/// reduce their resolution first. Colors whose coordinates differ only in the
/// least significant digits hence are equal and also have equal hashes. That
/// matters for colors that result from several conversions between color
/// spaces, since each conversion accumulates floating point error.
///
/// # The Neutral Color
///
/// The [default color](Color::default) has all zero coordinates and also zero
/// alpha. It is the result of describing a color in words that name no known
/// color and of mixing zero colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "colorprose")
)]
#[derive(Copy, Clone)]
pub struct Color {
    coordinates: [Float; 3],
    alpha: Float,
}

/// The chroma at or below which a color counts as achromatic.
pub const ACHROMATIC_THRESHOLD: Float = 0.01;

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    // The following constructors come in pairs, once for pyffi and once without
    // pyffi, since #[new] and #[staticmethod] do not work with #[cfg_attr()].

    /// Instantiate a new color with the given Oklab coordinates and alpha.
    ///
    /// ```
    /// # use colorprose::Color;
    /// let pink = Color::new([0.7, 0.2, 0.01], 1.0);
    /// assert_eq!(pink.as_ref(), &[0.7, 0.2, 0.01]);
    ///
    /// let bogus = Color::new([1.5, f64::NAN, -0.9], 3.0);
    /// assert_eq!(bogus.as_ref(), &[1.0, 0.0, -0.5]);
    /// assert_eq!(bogus.alpha(), 1.0);
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (coordinates, alpha = 1.0))]
    #[inline]
    pub fn new(coordinates: [Float; 3], alpha: Float) -> Self {
        Self {
            coordinates: normalize(&coordinates),
            alpha: normalize_alpha(alpha),
        }
    }

    /// Instantiate a new color with the given Oklab coordinates and alpha.
    ///
    /// ```
    /// # use colorprose::Color;
    /// let pink = Color::new([0.7, 0.2, 0.01], 1.0);
    /// assert_eq!(pink.as_ref(), &[0.7, 0.2, 0.01]);
    ///
    /// let bogus = Color::new([1.5, f64::NAN, -0.9], 3.0);
    /// assert_eq!(bogus.as_ref(), &[1.0, 0.0, -0.5]);
    /// assert_eq!(bogus.alpha(), 1.0);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn new(coordinates: [Float; 3], alpha: Float) -> Self {
        Self {
            coordinates: normalize(&coordinates),
            alpha: normalize_alpha(alpha),
        }
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as `Color`'s [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, crate::error::ColorFormatError> {
        Color::from_str(s)
    }

    /// Instantiate a new, opaque color from sRGB coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(srgb_to_oklab(&[r, g, b]), 1.0)
    }

    /// Instantiate a new, opaque color from Oklab coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklab(l: Float, a: Float, b: Float) -> Self {
        Self::new([l, a, b], 1.0)
    }

    /// Mix the colors. <i class=python-only>Python only!</i>
    ///
    /// See [`Color::mix`].
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "mix")]
    pub fn py_mix(colors: Vec<Color>) -> Self {
        Self::mix(&colors)
    }

    /// Instantiate a new, opaque color from 24-bit sRGB coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::Color;
    /// let red = Color::from_24bit(0xff, 0, 0);
    /// assert_eq!(red.to_hex_format(), "#ff0000");
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(srgb_to_oklab(&from_24bit(r, g, b)), 1.0)
    }

    /// Instantiate a new, opaque color from 24-bit sRGB coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::Color;
    /// let red = Color::from_24bit(0xff, 0, 0);
    /// assert_eq!(red.to_hex_format(), "#ff0000");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(srgb_to_oklab(&from_24bit(r, g, b)), 1.0)
    }

    /// Access the coordinates. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the lightness L.
    #[inline]
    pub fn lightness(&self) -> Float {
        self.coordinates[0]
    }

    /// Access the a coordinate, i.e., the green/red axis.
    #[inline]
    pub fn a(&self) -> Float {
        self.coordinates[1]
    }

    /// Access the b coordinate, i.e., the blue/yellow axis.
    #[inline]
    pub fn b(&self) -> Float {
        self.coordinates[2]
    }

    /// Access the alpha channel.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Determine whether this color is the neutral default color.
    #[inline]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Get this color's chroma, i.e., its distance from the neutral axis.
    #[inline]
    pub fn chroma(&self) -> Float {
        self.a().hypot(self.b())
    }

    /// Get this color's hue in degrees `0..360`.
    ///
    /// If both a and b are very close to zero, the hue is not-a-number.
    #[inline]
    pub fn hue(&self) -> Float {
        oklab_to_oklch(&self.coordinates)[2]
    }

    /// Determine whether this color is achromatic, i.e., a gray.
    ///
    /// ```
    /// # use colorprose::Color;
    /// assert!(Color::from_24bit(0x80, 0x80, 0x80).is_achromatic());
    /// assert!(!Color::from_24bit(0x80, 0x80, 0xa0).is_achromatic());
    /// ```
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        let [_, chroma, hue] = oklab_to_oklch(&self.coordinates);
        is_achromatic_chroma_hue(chroma, hue, ACHROMATIC_THRESHOLD)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is within the sRGB gamut.
    #[inline]
    pub fn in_gamut(&self) -> bool {
        in_gamut(&oklab_to_srgb(&self.coordinates))
    }

    /// Map this color into the sRGB gamut.
    ///
    /// This method uses the [CSS Color 4
    /// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping),
    /// which reduces chroma until the color is in gamut or the clipped color
    /// is within a just noticeable difference. Alpha is unchanged.
    ///
    /// ```
    /// # use colorprose::Color;
    /// let loud = Color::oklab(0.7, 0.4, 0.2);
    /// assert!(!loud.in_gamut());
    /// assert!(loud.to_gamut().in_gamut());
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_gamut(&self) -> Self {
        Self::new(to_gamut(&self.coordinates), self.alpha)
    }

    /// Lighten this color by the given amount.
    ///
    /// The amount is clamped to `0..=1` and moves lightness that fraction of
    /// the way towards one.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten(&self, amount: Float) -> Self {
        let amount = normalize_alpha(amount);
        let [l, a, b] = self.coordinates;
        Self::new([l + (1.0 - l) * amount, a, b], self.alpha)
    }

    /// Darken this color by the given amount.
    ///
    /// The amount is clamped to `0..=1` and moves lightness that fraction of
    /// the way towards zero.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken(&self, amount: Float) -> Self {
        let amount = normalize_alpha(amount);
        let [l, a, b] = self.coordinates;
        Self::new([l * (1.0 - amount), a, b], self.alpha)
    }

    /// Enrich this color by the given amount.
    ///
    /// This method scales a and b by `1 + amount`, with negative amounts
    /// treated as zero. The result may very well be out of gamut.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn enrich(&self, amount: Float) -> Self {
        let factor = 1.0 + amount.max(0.0);
        let [l, a, b] = self.coordinates;
        Self::new([l, a * factor, b * factor], self.alpha)
    }

    /// Dullen this color by the given amount.
    ///
    /// This method scales a and b by `1 - amount`, with the amount clamped to
    /// `0..=1`. Dullening by one produces a gray of the same lightness.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn dullen(&self, amount: Float) -> Self {
        let factor = 1.0 - normalize_alpha(amount);
        let [l, a, b] = self.coordinates;
        Self::new([l, a * factor, b * factor], self.alpha)
    }

    /// Replace this color's alpha.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self::new(self.coordinates, alpha)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the squared Euclidian distance between the two colors' Oklab
    /// coordinates, ignoring alpha.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> Float {
        distance_squared(&self.coordinates, &other.coordinates)
    }

    /// Compute Delta-E OK, i.e., the Euclidian distance between the two
    /// colors' Oklab coordinates, ignoring alpha.
    #[inline]
    pub fn distance(&self, other: &Self) -> Float {
        delta_e_ok(&self.coordinates, &other.coordinates)
    }

    /// Convert this color to 24-bit sRGB.
    ///
    /// This method gamut maps the color before converting each coordinate to
    /// a `u8`.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&oklab_to_srgb(&to_gamut(&self.coordinates)))
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal notation.
    ///
    /// Like [`Color::to_24bit`], this method gamut maps the color first.
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its CSS string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Use separate block, so that methods are not exposed to Python.
// Use cfg(), so that methods are not documented again.
#[cfg(not(feature = "pyffi"))]
impl Color {
    /// Instantiate a new, opaque color from sRGB coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::Color;
    /// let fire_brick = Color::srgb(177.0/255.0, 31.0/255.0, 36.0/255.0);
    /// assert_eq!(fire_brick, Color::from_24bit(177, 31, 36));
    /// ```
    pub fn srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(srgb_to_oklab(&[r.into(), g.into(), b.into()]), 1.0)
    }

    /// Instantiate a new, opaque color from Oklab coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::Color;
    /// let sky = Color::oklab(0.78, -0.1, -0.1);
    /// assert_eq!(sky.lightness(), 0.78);
    /// ```
    pub fn oklab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new([l.into(), a.into(), b.into()], 1.0)
    }
}

// Use separate block, so that methods are not exposed to Python.
// Do not use cfg(), so that methods are documented.
impl Color {
    /// Mix the colors by averaging each channel, alpha included. <i
    /// class=rust-only>Rust only!</i>
    ///
    /// Mixing no colors at all yields the neutral default color.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::Color;
    /// let colors = [Color::oklab(0.2, 0.1, 0), Color::oklab(0.6, -0.1, 0.2)];
    /// assert_eq!(Color::mix(&colors), Color::oklab(0.4, 0, 0.1));
    /// assert_eq!(Color::mix(&[]), Color::default());
    /// ```
    pub fn mix<'c, C>(colors: C) -> Self
    where
        C: IntoIterator<Item = &'c Color>,
    {
        let mut mean = Mean::<4>::default();
        for color in colors {
            let [l, a, b] = color.coordinates;
            mean.push([l, a, b, color.alpha]);
        }

        match mean.get() {
            Some([l, a, b, alpha]) => Self::new([l, a, b], alpha),
            None => Self::default(),
        }
    }
}

impl Default for Color {
    /// Create an instance of the neutral color.
    ///
    /// All coordinates and also alpha are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::Color;
    /// let default = Color::default();
    /// assert_eq!(default.as_ref(), &[0.0, 0.0, 0.0]);
    /// assert_eq!(default.alpha(), 0.0);
    /// ```
    #[inline]
    fn default() -> Self {
        Self {
            coordinates: [0.0, 0.0, 0.0],
            alpha: 0.0,
        }
    }
}

impl FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    ///
    /// This method recognizes the *hashed notation* for sRGB colors with three
    /// or six hexadecimal digits, e.g., `#123` or `#cafe00`. The three digit
    /// version is a short form of the six digit version with every digit
    /// repeated.
    ///
    /// This method also recognizes the `oklab()` and `oklch()` CSS functions
    /// with space-separated, unitless coordinates, optionally followed by a
    /// slash and alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::Color;
    /// # use colorprose::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy, Color::from_24bit(0x01, 0x14, 0x80));
    ///
    /// let ghost: Color = str::parse("oklab(0.9 0 0 / 0.5)")?;
    /// assert_eq!(ghost.alpha(), 0.5);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(coordinates, alpha)| Self::new(coordinates, alpha))
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let [n1, n2, n3] = to_eq_coordinates(&self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
        to_eq_bits(self.alpha).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Both equality testing and hashing replace not-a-numbers with zero,
    /// round away the least significant digits, and replace negative zero with
    /// positive zero before comparing bit strings. As a result, equal colors
    /// are guaranteed to have equal hashes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::{Color, Float};
    /// let delta = 2.0 * (10.0 as Float).powi(-(Float::DIGITS as i32));
    /// assert_eq!(
    ///     Color::oklab(Float::NAN, 4.0 * delta, 0.12 + delta),
    ///     Color::oklab(0,          5.0 * delta, 0.12        )
    /// );
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.coordinates == other.coordinates && self.alpha == other.alpha {
            return true;
        }

        to_eq_coordinates(&self.coordinates) == to_eq_coordinates(&other.coordinates)
            && to_eq_bits(self.alpha) == to_eq_bits(other.alpha)
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color([{}, {}, {}], {})",
            c1, c2, c3, self.alpha
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color with the `oklab()` CSS function and
    /// space-separated coordinates. Alpha is included only if it is not one.
    /// The method respects the formatter's precision, defaulting to 5 digits
    /// past the decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorprose::Color;
    /// let sky = Color::oklab(0.78, -0.1, -0.1);
    /// assert_eq!(format!("{}", sky), "oklab(0.78 -0.1 -0.1)");
    /// assert_eq!(format!("{:.1}", sky.with_alpha(0.25)), "oklab(0.8 -0.1 -0.1 / 0.3)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(&self.coordinates, self.alpha, f)
    }
}

// ====================================================================================================================
