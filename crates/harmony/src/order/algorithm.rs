use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::key::{step_bucket, SortKey};
use crate::core::hilbert_index_24bit;
use crate::error::UnknownNameError;
use crate::{ColorValue, Float};

const ALGORITHM_NAMES: [&str; 7] = [
    "rgb",
    "hsv",
    "hsl",
    "luminosity",
    "step",
    "step-alternated",
    "hillbert",
];

const ALGORITHMS: [Algorithm; 7] = [
    Algorithm::Rgb,
    Algorithm::Hsv,
    Algorithm::Hsl,
    Algorithm::Luminosity,
    Algorithm::Step,
    Algorithm::StepAlternated,
    Algorithm::Hillbert,
];

/// An algorithm for ordering colors.
///
/// Each algorithm derives a [`SortKey`] from a color. Algorithms are selected
/// by name, with [`Algorithm as
/// FromStr`](enum.Algorithm.html#impl-FromStr-for-Algorithm) rejecting unknown
/// names:
///
/// ```
/// # use harmony::order::Algorithm;
/// assert_eq!("step-alternated".parse(), Ok(Algorithm::StepAlternated));
/// assert_eq!(Algorithm::Hillbert.name(), "hillbert");
///
/// let error = "bogus".parse::<Algorithm>().unwrap_err();
/// assert!(error.to_string().contains("rgb, hsv, hsl, luminosity"));
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "harmony")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Order by red, then green, then blue.
    Rgb,
    /// Order by hue, then saturation, then value.
    Hsv,
    /// Order by hue, then saturation, then lightness.
    Hsl,
    /// Order by luminosity.
    Luminosity,
    /// Order by hue bucket, then luminosity, then value.
    Step,
    /// Order by hue bucket, then luminosity, then value, with luminosity and
    /// value descending in every other bucket.
    StepAlternated,
    /// Order by position along the 3D Hilbert curve through the RGB cube.
    #[default]
    Hillbert,
}

#[cfg(not(feature = "pyffi"))]
impl Algorithm {
    /// Get an iterator over all algorithms.
    pub fn all() -> impl Iterator<Item = Algorithm> {
        ALGORITHMS.into_iter()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Algorithm {
    /// Get a list with all algorithms. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn all() -> Vec<Algorithm> {
        ALGORITHMS.to_vec()
    }

    /// Parse the algorithm name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Algorithm, UnknownNameError> {
        Algorithm::from_str(s)
    }

    /// Get this algorithm's name.
    pub const fn name(&self) -> &'static str {
        ALGORITHM_NAMES[*self as usize]
    }

    /// Get this algorithm's name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> &'static str {
        self.name()
    }
}

impl Algorithm {
    /// Derive this algorithm's sort key for the given color.
    pub fn key(&self, color: &ColorValue) -> SortKey {
        match self {
            Self::Rgb => SortKey::Triple(color.channels().map(Float::from)),
            Self::Hsv => {
                let hsv = color.hsv();
                SortKey::Triple([hsv.hue, hsv.saturation, hsv.value])
            }
            Self::Hsl => {
                let hsl = color.hsl();
                SortKey::Triple([hsl.hue, hsl.saturation, hsl.lightness])
            }
            Self::Luminosity => SortKey::Scalar(color.luminosity()),
            Self::Step => step_key(color, false),
            Self::StepAlternated => step_key(color, true),
            Self::Hillbert => SortKey::Index(hilbert_index_24bit(color.as_ref())),
        }
    }
}

/// Derive the step key. When alternating, odd buckets order luminosity and
/// value in descending order.
fn step_key(color: &ColorValue, alternate: bool) -> SortKey {
    let hsv = color.hsv();
    let bucket = step_bucket(hsv.hue);
    let mut luminosity = color.luminosity();
    let mut value = hsv.value;

    if alternate && bucket % 2 == 1 {
        luminosity = 1.0 - luminosity;
        value = 1.0 - value;
    }

    SortKey::Triple([Float::from(bucket), luminosity, value])
}

impl FromStr for Algorithm {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALGORITHM_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| ALGORITHMS[index])
            .ok_or_else(|| UnknownNameError::new("algorithm", s, &ALGORITHM_NAMES))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
