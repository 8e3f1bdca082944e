use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::Algorithm;
use crate::error::UnknownNameError;
use crate::ColorValue;

const DIRECTION_NAMES: [&str; 2] = ["forward", "backward"];

/// The direction of an ordering.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "harmony")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending keys.
    #[default]
    Forward,
    /// Descending keys, i.e., the reverse of forward.
    Backward,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Direction {
    /// Parse the direction name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Direction, UnknownNameError> {
        Direction::from_str(s)
    }

    /// Get this direction's name.
    pub const fn name(&self) -> &'static str {
        DIRECTION_NAMES[*self as usize]
    }
}

impl FromStr for Direction {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "backward" => Ok(Self::Backward),
            _ => Err(UnknownNameError::new("direction", s, &DIRECTION_NAMES)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// Order the colors with the given algorithm and direction.
///
/// This function derives one key per color and sorts the colors by ascending
/// key. The sort is stable, i.e., colors with equal keys retain their relative
/// order. For [`Direction::Backward`], this function reverses the sorted
/// colors. Hence, the backward ordering always is the exact reverse of the
/// forward ordering, including for colors with equal keys.
///
/// This function returns a new vector and leaves the given colors unchanged.
///
/// ```
/// # use harmony::error::ColorFormatError;
/// # use harmony::ColorValue;
/// use harmony::order::{order, Algorithm, Direction};
///
/// let colors = [
///     "(49, 6, 210) Dark Blue".parse::<ColorValue>()?,
///     "(15, 143, 179) Light Blue".parse()?,
///     "(201, 118, 6) Orange".parse()?,
/// ];
///
/// let ordered = order(&colors, Algorithm::Hillbert, Direction::Backward);
/// let labels: Vec<_> = ordered.iter().map(|c| c.label()).collect();
/// assert_eq!(labels, ["Orange", "Light Blue", "Dark Blue"]);
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn order(colors: &[ColorValue], algorithm: Algorithm, direction: Direction) -> Vec<ColorValue> {
    let mut keyed: Vec<_> = colors
        .iter()
        .map(|color| (algorithm.key(color), color))
        .collect();

    // Must be a stable sort.
    keyed.sort_by_key(|(key, _)| *key);

    let mut ordered: Vec<ColorValue> = keyed.into_iter().map(|(_, color)| color.clone()).collect();
    if direction == Direction::Backward {
        ordered.reverse();
    }

    tracing::debug!(
        count = ordered.len(),
        algorithm = algorithm.name(),
        direction = direction.name(),
        "ordered colors"
    );
    ordered
}

/// Order the colors with the given algorithm and direction. <i
/// class=python-only>Python only!</i>
///
/// This function exposes [`order`] to Python.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "order", signature = (colors, algorithm = Algorithm::Hillbert, direction = Direction::Forward))]
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn py_order(
    colors: Vec<ColorValue>,
    algorithm: Algorithm,
    direction: Direction,
) -> Vec<ColorValue> {
    order(&colors, algorithm, direction)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{order, Direction};
    use crate::error::{ColorFormatError, UnknownNameError};
    use crate::order::Algorithm;
    use crate::{ColorValue, Notation};

    fn rgb(red: u8, green: u8, blue: u8, label: &str) -> ColorValue {
        ColorValue::new(red, green, blue, label.to_owned(), Notation::Rgb)
    }

    fn labels(colors: &[ColorValue]) -> Vec<&str> {
        colors.iter().map(|c| c.label()).collect()
    }

    fn sample_palette() -> Vec<ColorValue> {
        vec![
            rgb(235, 61, 52, "red"),
            rgb(75, 214, 47, "green"),
            rgb(212, 104, 4, "orange"),
            rgb(49, 6, 210, "dark blue"),
            rgb(15, 143, 179, "light blue"),
            rgb(201, 118, 6, "amber"),
            rgb(128, 128, 128, "gray"),
            rgb(0, 0, 0, "black"),
            rgb(255, 255, 255, "white"),
            rgb(128, 128, 128, "gray again"),
        ]
    }

    #[test]
    fn test_direction_names() -> Result<(), UnknownNameError> {
        assert_eq!("forward".parse::<Direction>()?, Direction::Forward);
        assert_eq!("backward".parse::<Direction>()?, Direction::Backward);
        assert_eq!(Direction::Backward.to_string(), "backward");

        let error = "upward".parse::<Direction>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown direction `upward`, expected one of forward, backward"
        );
        Ok(())
    }

    #[test]
    fn test_scenario() -> Result<(), ColorFormatError> {
        let colors = [
            "(49, 6, 210) Dark Blue".parse::<ColorValue>()?,
            "(15, 143, 179) Light Blue".parse()?,
            "(201, 118, 6) Orange".parse()?,
        ];

        let ordered = order(&colors, Algorithm::Hillbert, Direction::Backward);
        let lines: Vec<_> = ordered.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "(201, 118, 6) Orange",
                "(15, 143, 179) Light Blue",
                "(49, 6, 210) Dark Blue"
            ]
        );

        let ordered = order(&colors, Algorithm::Hillbert, Direction::Forward);
        assert_eq!(labels(&ordered), ["Dark Blue", "Light Blue", "Orange"]);
        Ok(())
    }

    #[test]
    fn test_first_two() {
        let colors = [
            ColorValue::new(235, 61, 52, "red".into(), Notation::Hexcode),
            rgb(75, 214, 47, "green"),
            ColorValue::new(212, 104, 4, "orange".into(), Notation::Hexcode),
        ];

        for (algorithm, expected) in [
            (Algorithm::Rgb, ["green", "orange"]),
            (Algorithm::Hsv, ["red", "orange"]),
            (Algorithm::Hsl, ["red", "orange"]),
            (Algorithm::Luminosity, ["red", "orange"]),
            (Algorithm::Step, ["red", "orange"]),
            (Algorithm::StepAlternated, ["red", "orange"]),
            (Algorithm::Hillbert, ["green", "orange"]),
        ] {
            let ordered = order(&colors, algorithm, Direction::Forward);
            assert_eq!(labels(&ordered[..2]), expected, "{}", algorithm);
        }

        let ordered = order(&colors, Algorithm::Hillbert, Direction::Backward);
        assert_eq!(labels(&ordered[..2]), ["red", "orange"]);
    }

    #[test]
    fn test_determinism_and_symmetry() {
        let colors = sample_palette();
        let original = colors.clone();

        for algorithm in Algorithm::all() {
            let forward = order(&colors, algorithm, Direction::Forward);
            assert_eq!(forward, order(&colors, algorithm, Direction::Forward));
            assert_eq!(forward.len(), colors.len());

            let mut backward = order(&colors, algorithm, Direction::Backward);
            backward.reverse();
            assert_eq!(forward, backward, "{}", algorithm);
        }

        assert_eq!(colors, original);
    }

    #[test]
    fn test_stability() {
        let colors = [
            rgb(10, 20, 30, "first"),
            rgb(200, 0, 0, "other"),
            rgb(10, 20, 30, "second"),
            rgb(10, 20, 30, "third"),
        ];

        for algorithm in Algorithm::all() {
            let ordered = order(&colors, algorithm, Direction::Forward);
            let twins: Vec<_> = labels(&ordered)
                .into_iter()
                .filter(|l| *l != "other")
                .collect();
            assert_eq!(twins, ["first", "second", "third"], "{}", algorithm);
        }
    }

    #[test]
    fn test_steps() {
        let colors = [
            // Hue 50°, bucket 1, bright
            rgb(255, 213, 0, "yellow"),
            // Hue 10°, bucket 0, bright
            rgb(255, 43, 0, "red"),
            // Hue 80°, bucket 1, dark
            rgb(85, 128, 0, "olive"),
            // Hue 40°, bucket 0, dark
            rgb(128, 85, 0, "brown"),
        ];

        let ordered = order(&colors, Algorithm::Step, Direction::Forward);
        assert_eq!(labels(&ordered), ["brown", "red", "olive", "yellow"]);

        let ordered = order(&colors, Algorithm::StepAlternated, Direction::Forward);
        assert_eq!(labels(&ordered), ["brown", "red", "yellow", "olive"]);
    }

    #[test]
    fn test_empty() {
        assert!(order(&[], Algorithm::Hillbert, Direction::Backward).is_empty());
    }
}
