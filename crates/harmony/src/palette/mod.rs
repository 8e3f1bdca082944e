//! Reading and writing palettes.
//!
//! A palette is a text file with one color per line. Each line holds either a
//! hashed hexadecimal color such as `#0f8fb3` or `#0f8` or a parenthesized
//! decimal color such as `(15, 143, 179)`, optionally followed by a label.
//! Blank lines are ignored. [`read_palette`] and [`parse_palette`] turn such
//! text into [`ColorValue`](crate::ColorValue)s.
//!
//! Once ordered, a palette can be written as text again with a [`TextWriter`],
//! as an Adobe Swatch Exchange file with an [`AseWriter`], or as an Apple
//! color list with a [`ClrWriter`]. The names of the files written by the
//! `harmony` command line tool are determined by [`sorted_path`] and
//! [`converted_path`].

mod ase;
mod clr;
mod path;
mod reader;
mod writer;

pub use ase::{AseWriter, ASE_EXTENSION};
pub use clr::{ClrWriter, CLR_EXTENSION};
pub use path::{converted_path, sorted_path};
pub use reader::{parse_palette, read_palette};
pub use writer::{PaletteWriter, TextWriter};
