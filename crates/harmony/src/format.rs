//! Rendering colors as text.

use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::UnknownNameError;
use crate::{ColorValue, Notation};

const FORMAT_NAMES: [&str; 3] = ["input", "rgb", "hexcode"];

/// The notation for writing colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "harmony")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// The notation each color was read in.
    #[default]
    Input,
    /// The parenthesized decimal notation `(15, 143, 179)`.
    Rgb,
    /// The hashed hexadecimal notation `#0f8fb3`.
    Hexcode,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl OutputFormat {
    /// Parse the output format name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<OutputFormat, UnknownNameError> {
        OutputFormat::from_str(s)
    }

    /// Get this output format's name.
    pub const fn name(&self) -> &'static str {
        FORMAT_NAMES[*self as usize]
    }

    /// Resolve the notation for the given color.
    pub const fn notation_for(&self, color: &ColorValue) -> Notation {
        match self {
            Self::Input => color.notation(),
            Self::Rgb => Notation::Rgb,
            Self::Hexcode => Notation::Hexcode,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::Input),
            "rgb" => Ok(Self::Rgb),
            "hexcode" => Ok(Self::Hexcode),
            _ => Err(UnknownNameError::new("format", s, &FORMAT_NAMES)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Render the color in the given format.
///
/// The color's label, if not empty, follows the color after a single space.
///
/// ```
/// # use harmony::{render, ColorValue, Notation, OutputFormat};
/// let orange = ColorValue::new(201, 118, 6, "Orange".into(), Notation::Rgb);
/// assert_eq!(render(&orange, OutputFormat::Input), "(201, 118, 6) Orange");
/// assert_eq!(render(&orange, OutputFormat::Hexcode), "#c97606 Orange");
///
/// let unnamed = ColorValue::new(201, 118, 6, String::new(), Notation::Hexcode);
/// assert_eq!(render(&unnamed, OutputFormat::Input), "#c97606");
/// assert_eq!(render(&unnamed, OutputFormat::Rgb), "(201, 118, 6)");
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn render(color: &ColorValue, format: OutputFormat) -> String {
    let mut line = format.notation_for(color).format(color.channels());
    if !color.label().is_empty() {
        line.push(' ');
        line.push_str(color.label());
    }
    line
}

// ====================================================================================================================
