//! # Harmony
//!
//! Harmony reorders color palettes. It reads a list of colors from a text
//! file, sorts them along one of several perceptual or geometric orderings,
//! and writes them back out, either as text in a notation of your choosing,
//! as an Adobe Swatch Exchange file, or as an Apple color list.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature to also cover Python integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Harmony's main abstractions are:
//!
//!   * [`ColorValue`] is a **labelled 24-bit color** that also remembers the
//!     [`Notation`] it was written in. Its methods compute the color's
//!     [`Hsv`] and [`Hsl`] forms as well as its luminosity on demand.
//!   * [`order::Algorithm`] enumerates the **orderings**, i.e., `rgb`, `hsv`,
//!     `hsl`, `luminosity`, `step`, `step-alternated`, and `hillbert`. Each
//!     algorithm derives an [`order::SortKey`] from a color.
//!   * [`order::order`] **reorders** a list of colors by algorithm and
//!     [`order::Direction`].
//!   * [`render`] **writes** a color in an [`OutputFormat`].
//!   * [`palette`] **reads and writes** palette files.
//!
//! The `hillbert` ordering places colors along a three-dimensional Hilbert
//! curve through the RGB cube. Since the curve never jumps, colors that are
//! close on the curve are close in the cube as well. The [`hilbert`] module
//! exposes the curve for any order between 1 and 21.
//!
//!
//! ## 2. One, Two, Three: Ordered!
//!
//! Reordering a palette takes three steps. First, parse the palette:
//!
//! ```
//! # use harmony::error::PaletteError;
//! # use harmony::palette::parse_palette;
//! let colors = parse_palette(
//!     "(49, 6, 210) Dark Blue\n(15, 143, 179) Light Blue\n(201, 118, 6) Orange\n"
//! )?;
//! # Ok::<(), PaletteError>(())
//! ```
//!
//! Second, order the colors:
//!
//! ```
//! # use harmony::error::PaletteError;
//! # use harmony::palette::parse_palette;
//! # use harmony::order::{order, Algorithm, Direction};
//! # let colors = parse_palette(
//! #     "(49, 6, 210) Dark Blue\n(15, 143, 179) Light Blue\n(201, 118, 6) Orange\n"
//! # )?;
//! let ordered = order(&colors, Algorithm::Hillbert, Direction::Backward);
//! # Ok::<(), PaletteError>(())
//! ```
//!
//! Third, render the colors:
//!
//! ```
//! # use harmony::error::PaletteError;
//! # use harmony::palette::parse_palette;
//! # use harmony::order::{order, Algorithm, Direction};
//! # use harmony::{render, OutputFormat};
//! # let colors = parse_palette(
//! #     "(49, 6, 210) Dark Blue\n(15, 143, 179) Light Blue\n(201, 118, 6) Orange\n"
//! # )?;
//! # let ordered = order(&colors, Algorithm::Hillbert, Direction::Backward);
//! let lines: Vec<_> = ordered
//!     .iter()
//!     .map(|color| render(color, OutputFormat::Input))
//!     .collect();
//! assert_eq!(lines, [
//!     "(201, 118, 6) Orange",
//!     "(15, 143, 179) Light Blue",
//!     "(49, 6, 210) Dark Blue",
//! ]);
//! # Ok::<(), PaletteError>(())
//! ```
//!
//! The `harmony` command line tool does the same, writing the result next to
//! the input file:
//!
//! ```text
//! $ harmony sort colors.txt --algorithm hillbert --direction backward
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Harmony supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`cli`** controls the `harmony` command line tool and its
//!     dependencies. This feature is enabled by default.
//!   - **`pyffi`** controls harmony's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Harmony emits [tracing](https://docs.rs/tracing) events while reading,
//! ordering, and writing palettes. They are only recorded if the application
//! installs a subscriber, as the command line tool does.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod format;
mod object;
pub mod order;
pub mod palette;
pub mod settings;
mod util;

pub mod hilbert {
    //! The three-dimensional Hilbert curve through the RGB cube.
    //!
    //! A Hilbert curve of order n visits every point of the cube `[0, 2ⁿ)³`
    //! exactly once, moving by one unit along one axis with every step.
    //! [`hilbert_index`] determines a point's distance along the curve and
    //! [`hilbert_point`] the point at a distance. 24-bit colors use order
    //! [`HILBERT_ORDER`], i.e., 8.
    pub use crate::core::{hilbert_index, hilbert_point, HILBERT_ORDER, MAX_HILBERT_ORDER};
}

#[doc(hidden)]
pub use core::to_eq_bits;

pub use format::{render, OutputFormat};
pub use object::{ColorValue, Hsl, Hsv, Notation};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn harmony(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ColorValue>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<Hsv>()?;
    m.add_class::<Notation>()?;
    m.add_class::<OutputFormat>()?;
    m.add_class::<order::Algorithm>()?;
    m.add_class::<order::Direction>()?;

    m.add_function(wrap_pyfunction!(hilbert::hilbert_index, m)?)?;
    m.add_function(wrap_pyfunction!(hilbert::hilbert_point, m)?)?;
    m.add_function(wrap_pyfunction!(order::py_order, m)?)?;
    m.add_function(wrap_pyfunction!(palette::parse_palette, m)?)?;
    m.add_function(wrap_pyfunction!(render, m)?)?;

    m.add("HILBERT_ORDER", hilbert::HILBERT_ORDER)?;
    Ok(())
}
