//! Utility module with harmony's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. The
/// ranges used by this crate include:
///
///   * `0..=255` for the channels of a [`ColorValue`](crate::ColorValue);
///   * `1..=21` for the order of a Hilbert curve;
///   * `0..=2ⁿ-1` for the coordinates of a point on a Hilbert curve of order n;
///   * `0..=2³ⁿ-1` for the index of a point on a Hilbert curve of order n.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: u64,
    pub expected: std::ops::RangeInclusive<u64>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<u64>>(value: V, expected: std::ops::RangeInclusive<u64>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
///
/// Harmony recognizes two color notations, the hashed hexadecimal notation
/// `#0f8fb3` or `#0f8` and the parenthesized decimal notation `(15, 143,
/// 179)`. Both may be followed by a label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color that does not start with `#` or `(`.
    UnknownFormat,

    /// A hashed color with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A hashed color with a malformed hexadecimal digit. For example, `#efg`
    /// has a malformed third channel.
    MalformedHex,

    /// A parenthesized color without the closing parenthesis. For example,
    /// `(1, 2, 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A parenthesized color that is missing a channel. For example, `(1, 2)`
    /// is missing the third channel, whereas `(1, , 3)` is missing the second
    /// channel.
    MissingChannel,

    /// A parenthesized color with more than three channels. For example, `(1,
    /// 2, 3, 4)` has one channel too many.
    TooManyChannels,

    /// A parenthesized color with a channel that is not a decimal integer. For
    /// example, `(1, 2.5, 3)` has a malformed second channel.
    MalformedInteger,

    /// A parenthesized color with a channel that does not fit into `0..=255`.
    OutOfRange(OutOfBoundsError),
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str("color should start with `#` or `(`"),
            UnexpectedCharacters => {
                f.write_str("hashed color should have 3 or 6 hexadecimal digits")
            }
            MalformedHex => f.write_str("hashed color should contain hexadecimal digits only"),
            NoClosingParenthesis => {
                f.write_str("parenthesized color should include a closing parenthesis but has none")
            }
            MissingChannel => {
                f.write_str("parenthesized color should have 3 channels but is missing one")
            }
            TooManyChannels => {
                f.write_str("parenthesized color should have 3 channels but has more")
            }
            MalformedInteger => {
                f.write_str("parenthesized color channels should be decimal integers but are not")
            }
            OutOfRange(error) => write!(f, "color channel {}", error),
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

/// An unknown name for one of harmony's closed sets of choices.
///
/// Algorithms, directions, and output formats are all selected by name. This
/// error names the offending value as well as the valid choices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownNameError {
    kind: &'static str,
    value: String,
    expected: &'static [&'static str],
}

impl UnknownNameError {
    /// Create a new unknown name error.
    pub fn new<S: Into<String>>(
        kind: &'static str,
        value: S,
        expected: &'static [&'static str],
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }

    /// Get the kind of choice, e.g., `algorithm`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Get the offending value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the valid names.
    pub fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

impl std::fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown {} `{}`, expected one of {}",
            self.kind,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for UnknownNameError {}

#[cfg(feature = "pyffi")]
impl From<UnknownNameError> for PyErr {
    fn from(value: UnknownNameError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The kinds of errors while reading or writing a palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteErrorKind {
    /// The palette could not be read.
    Read,
    /// The color on the given, 1-based line could not be parsed.
    ParseLine(usize),
    /// The palette could not be written.
    Write,
    /// The palette format cannot represent a palette without colors.
    EmptyPalette,
    /// The palette has more colors or longer names than the format can
    /// represent.
    TooLarge,
}

/// An error while reading or writing a palette.
#[derive(Debug)]
pub struct PaletteError {
    kind: PaletteErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PaletteError {
    /// Create a new palette error.
    pub fn new(kind: PaletteErrorKind, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self {
            kind,
            source: Some(source),
        }
    }

    /// Create a new palette error without an underlying cause.
    pub fn from_kind(kind: PaletteErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Get this error's kind.
    pub fn kind(&self) -> PaletteErrorKind {
        self.kind
    }

    /// Get the color format error causing this error, if any.
    pub fn format_error(&self) -> Option<&ColorFormatError> {
        self.source
            .as_deref()
            .and_then(|e| e.downcast_ref::<ColorFormatError>())
    }
}

impl From<PaletteError> for std::io::Error {
    fn from(value: PaletteError) -> Self {
        std::io::Error::other(value)
    }
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PaletteErrorKind::Read => f.write_str("could not read palette"),
            PaletteErrorKind::ParseLine(line) => {
                write!(f, "could not parse color on line {}", line)
            }
            PaletteErrorKind::Write => f.write_str("could not write palette"),
            PaletteErrorKind::EmptyPalette => {
                f.write_str("palette format requires at least one color")
            }
            PaletteErrorKind::TooLarge => f.write_str("palette is too large for format"),
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
        let message = std::error::Error::source(&value).map_or_else(
            || value.to_string(),
            |source| format!("{}: {}", value, source),
        );
        PyValueError::new_err(message)
    }
}

// ====================================================================================================================
