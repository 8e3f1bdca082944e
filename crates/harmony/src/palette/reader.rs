use std::path::Path;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{PaletteError, PaletteErrorKind};
use crate::ColorValue;

/// Parse the text of a palette.
///
/// Each non-blank line must hold exactly one color, optionally followed by a
/// label. If any line fails to parse, this function returns a palette error
/// with the 1-based line number, wrapping the underlying color format error.
///
/// ```
/// # use harmony::error::{PaletteError, PaletteErrorKind};
/// # use harmony::palette::parse_palette;
/// let colors = parse_palette("#0f8 Mint\n\n(201, 118, 6) Orange\n")?;
/// assert_eq!(colors.len(), 2);
/// assert_eq!(colors[0].channels(), [0x00, 0xff, 0x88]);
/// assert_eq!(colors[1].label(), "Orange");
///
/// let error = parse_palette("#0f8\n(256, 0, 0)\n").unwrap_err();
/// assert_eq!(error.kind(), PaletteErrorKind::ParseLine(2));
/// # Ok::<(), PaletteError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn parse_palette(text: &str) -> Result<Vec<ColorValue>, PaletteError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut colors = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            tracing::trace!(line = index + 1, "skipping blank line");
            continue;
        }

        let color = line.parse::<ColorValue>().map_err(|error| {
            PaletteError::new(PaletteErrorKind::ParseLine(index + 1), Box::new(error))
        })?;
        colors.push(color);
    }

    tracing::debug!(count = colors.len(), "parsed palette");
    Ok(colors)
}

/// Read the palette at the given path.
///
/// This function reads the file as UTF-8 text and parses it with
/// [`parse_palette`]. I/O errors become palette errors of kind
/// [`PaletteErrorKind::Read`].
pub fn read_palette<P: AsRef<Path>>(path: P) -> Result<Vec<ColorValue>, PaletteError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading palette");

    let text = std::fs::read_to_string(path)
        .map_err(|error| PaletteError::new(PaletteErrorKind::Read, Box::new(error)))?;
    parse_palette(&text)
}

// ====================================================================================================================
