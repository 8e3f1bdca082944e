use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    format_hashed, format_parenthesized, from_24bit, hsl_to_rgb, hsv_to_rgb, luminosity, parse,
    rgb_to_hsl, rgb_to_hsv, to_24bit,
};
use crate::error::ColorFormatError;
use crate::Float;

/// The notation a color was written in.
///
/// Harmony preserves a color's notation so that it can write the color back
/// the same way it was read.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "harmony")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Notation {
    /// The parenthesized decimal notation `(15, 143, 179)`.
    #[default]
    Rgb,
    /// The hashed hexadecimal notation `#0f8fb3`.
    Hexcode,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Notation {
    /// Format the channels in this notation.
    pub fn format(&self, channels: [u8; 3]) -> String {
        match self {
            Self::Rgb => format_parenthesized(&channels),
            Self::Hexcode => format_hashed(&channels),
        }
    }
}

// ====================================================================================================================

/// A color in the HSV color space.
#[cfg_attr(feature = "pyffi", pyclass(get_all, frozen, module = "harmony"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    /// The hue in degrees `0..360`.
    pub hue: Float,
    /// The saturation `0..=1`.
    pub saturation: Float,
    /// The value `0..=1`.
    pub value: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsv {
    /// Convert this color back to 24-bit RGB, rounding each channel.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&hsv_to_rgb(&[self.hue, self.saturation, self.value]))
    }
}

/// A color in the HSL color space.
#[cfg_attr(feature = "pyffi", pyclass(get_all, frozen, module = "harmony"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    /// The hue in degrees `0..360`.
    pub hue: Float,
    /// The saturation `0..=1`.
    pub saturation: Float,
    /// The lightness `0..=1`.
    pub lightness: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsl {
    /// Convert this color back to 24-bit RGB, rounding each channel.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&hsl_to_rgb(&[self.hue, self.saturation, self.lightness]))
    }
}

// ====================================================================================================================

/// A labelled 24-bit color.
///
/// A color value comprises the three 8-bit channels of an RGB color, a
/// possibly empty label, and the notation the color was written in. RGB is the
/// single source of truth: The HSV and HSL forms as well as the luminosity are
/// computed on demand and never stored. Once created, a color value cannot be
/// modified.
///
/// Color values implement [`FromStr`], which accepts one line of a palette:
///
/// ```
/// # use harmony::error::ColorFormatError;
/// # use harmony::{ColorValue, Notation};
/// let blue: ColorValue = "#0f8fb3 Light Blue".parse()?;
/// assert_eq!(blue.channels(), [15, 143, 179]);
/// assert_eq!(blue.label(), "Light Blue");
/// assert_eq!(blue.notation(), Notation::Hexcode);
/// assert_eq!(blue.to_string(), "#0f8fb3 Light Blue");
///
/// let green: ColorValue = "#0f8".parse()?;
/// assert_eq!(green.channels(), [0x00, 0xff, 0x88]);
/// assert_eq!(green.label(), "");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "harmony"))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorValue {
    channels: [u8; 3],
    label: String,
    notation: Notation,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorValue {
    // #[new] does not compose with #[cfg_attr()], hence the pair of
    // constructors.

    /// Instantiate a new color value.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (red, green, blue, label = String::new(), notation = Notation::Rgb))]
    pub fn new(red: u8, green: u8, blue: u8, label: String, notation: Notation) -> Self {
        Self {
            channels: [red, green, blue],
            label,
            notation,
        }
    }

    /// Instantiate a new color value.
    ///
    /// ```
    /// # use harmony::{ColorValue, Notation};
    /// let orange = ColorValue::new(201, 118, 6, "Orange".into(), Notation::Rgb);
    /// assert_eq!(orange.to_string(), "(201, 118, 6) Orange");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, label: String, notation: Notation) -> Self {
        Self {
            channels: [red, green, blue],
            label,
            notation,
        }
    }

    /// Parse a color value from one line of a palette. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as [`ColorValue as
    /// FromStr`](struct.ColorValue.html#impl-FromStr-for-ColorValue).
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<ColorValue, ColorFormatError> {
        ColorValue::from_str(s)
    }

    /// Get the red channel.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.channels[0]
    }

    /// Get the green channel.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.channels[1]
    }

    /// Get the blue channel.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.channels[2]
    }

    /// Get all three channels.
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        self.channels
    }

    /// Get the label, which may be empty.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the notation this color was written in.
    #[inline]
    pub const fn notation(&self) -> Notation {
        self.notation
    }

    /// Convert this color to HSV.
    ///
    /// Achromatic colors, i.e., grays, have hue 0.
    ///
    /// ```
    /// # use harmony::{ColorValue, Notation};
    /// let red = ColorValue::new(255, 0, 0, String::new(), Notation::Rgb);
    /// let hsv = red.hsv();
    /// assert_eq!((hsv.hue, hsv.saturation, hsv.value), (0.0, 1.0, 1.0));
    /// ```
    pub fn hsv(&self) -> Hsv {
        let [hue, saturation, value] = rgb_to_hsv(&self.coordinates());
        Hsv {
            hue,
            saturation,
            value,
        }
    }

    /// Convert this color to HSL.
    ///
    /// Achromatic colors, i.e., grays, have hue 0.
    pub fn hsl(&self) -> Hsl {
        let [hue, saturation, lightness] = rgb_to_hsl(&self.coordinates());
        Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    /// Compute this color's luminosity.
    ///
    /// The luminosity weighs the normalized red, green, and blue channels
    /// with 0.299, 0.587, and 0.114, respectively. It ranges `0..=1`.
    pub fn luminosity(&self) -> Float {
        luminosity(&self.coordinates())
    }

    /// Format this color in hashed hexadecimal notation with six lowercase
    /// digits. The label is not included.
    pub fn to_hexcode(&self) -> String {
        format_hashed(&self.channels)
    }

    /// Format this color in parenthesized decimal notation. The label is not
    /// included.
    pub fn to_rgb(&self) -> String {
        format_parenthesized(&self.channels)
    }

    /// Convert this color value to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color value to its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorValue {
    /// Get the channels as unit-range floating point coordinates.
    #[inline]
    fn coordinates(&self) -> [Float; 3] {
        let [r, g, b] = self.channels;
        from_24bit(r, g, b)
    }
}

impl AsRef<[u8; 3]> for ColorValue {
    fn as_ref(&self) -> &[u8; 3] {
        &self.channels
    }
}

impl FromStr for ColorValue {
    type Err = ColorFormatError;

    /// Parse one line of a palette.
    ///
    /// The line must start with a hashed hexadecimal color or a parenthesized
    /// decimal color, optionally followed by a label. Leading and trailing
    /// white space is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ([red, green, blue], notation, label) = parse(s)?;
        Ok(Self {
            channels: [red, green, blue],
            label: label.to_owned(),
            notation,
        })
    }
}

impl std::fmt::Display for ColorValue {
    /// Format this color value in its own notation, followed by its label
    /// if the label is not empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.notation.format(self.channels))?;
        if !self.label.is_empty() {
            write!(f, " {}", self.label)?;
        }
        Ok(())
    }
}

// ====================================================================================================================
