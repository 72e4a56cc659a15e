//! Utility module with colorprose's errors.
//!
//! Color descriptions never fail. Errors only arise when parsing color strings
//! and when assembling custom palettes.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Like the corresponding Python exception, the enumeration uses unit
/// variants without associated state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `oklab`, or `oklch`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `oklab 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `oklab(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is missing a coordinate. For example, `oklab(0.5)`
    /// is missing the second and third coordinate, whereas `oklab(0.5 0 0 /)`
    /// is missing its alpha.
    MissingCoordinate,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A color format that has a malformed floating point number as
    /// coordinate. For example, `oklab(1.0 0..1 0.0)` has a malformed second
    /// coordinate.
    MalformedFloat,

    /// A color format with more than three coordinates. For example,
    /// `oklab(1 2 3 4)` has one coordinate too many.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color format should start with `#`, `oklab()`, or `oklch()`")
            }
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be floating point numbers but are not")
            }
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates but has more")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The kinds of errors while assembling a palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteErrorKind {
    /// A name that is empty or contains characters other than ASCII letters.
    /// Descriptions split on such characters, so the name could never be
    /// looked up.
    InvalidName(String),
    /// A name that already is a color or alias.
    DuplicateName(String),
    /// An alias for a color that does not exist.
    UnknownAliasTarget(String),
    /// A line of a palette listing that is neither entry nor alias.
    MalformedLine(usize),
    /// A line of a palette listing with an unparseable color.
    ParseColor(usize),
}

/// An error while assembling a palette.
#[derive(Debug)]
pub struct PaletteError {
    kind: PaletteErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PaletteError {
    /// Create a new palette error without underlying cause.
    pub fn new(kind: PaletteErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new palette error with underlying cause.
    pub fn with_source(
        kind: PaletteErrorKind,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            kind,
            source: Some(source),
        }
    }

    /// Get this error's kind.
    pub fn kind(&self) -> &PaletteErrorKind {
        &self.kind
    }
}

impl From<PaletteError> for std::io::Error {
    fn from(value: PaletteError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use PaletteErrorKind::*;

        match self.kind {
            InvalidName(ref name) => f.write_fmt(format_args!(
                "color name {:?} should consist of ASCII letters only",
                name
            )),
            DuplicateName(ref name) => {
                f.write_fmt(format_args!("color name {:?} is already in use", name))
            }
            UnknownAliasTarget(ref name) => {
                f.write_fmt(format_args!("alias target {:?} is not a color", name))
            }
            MalformedLine(line) => f.write_fmt(format_args!(
                "line {} should be `name color` or `alias = name`",
                line
            )),
            ParseColor(line) => f.write_fmt(format_args!("could not parse color on line {}", line)),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as _)
    }
}

#[cfg(feature = "pyffi")]
impl From<PaletteError> for PyErr {
    fn from(value: PaletteError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
