use std::path::Path;

use crate::error::{PaletteError, PaletteErrorKind};
use crate::{render, ColorValue, OutputFormat};

/// A writer for palettes.
///
/// Implementations only encode colors as bytes. Writing those bytes to a file
/// is the same for all of them.
pub trait PaletteWriter {
    /// Encode the colors. This method fails if the format cannot represent
    /// the colors, e.g., because there are none or too many.
    fn encode(&self, colors: &[ColorValue]) -> Result<Vec<u8>, PaletteError>;

    /// Encode the colors and write them to the file at the given path,
    /// replacing any existing file. If encoding fails, this method leaves the
    /// file system untouched. I/O errors become palette errors of kind
    /// [`PaletteErrorKind::Write`].
    fn write<P: AsRef<Path>>(&self, path: P, colors: &[ColorValue]) -> Result<(), PaletteError> {
        let path = path.as_ref();
        let bytes = self.encode(colors)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "writing palette");

        std::fs::write(path, bytes)
            .map_err(|error| PaletteError::new(PaletteErrorKind::Write, Box::new(error)))
    }
}

/// A writer for palettes in text format.
///
/// The text writer renders each color on its own line in the given output
/// format. Every line, including the last one, is terminated by a newline.
///
/// ```
/// # use harmony::palette::TextWriter;
/// # use harmony::{ColorValue, Notation, OutputFormat};
/// let colors = [
///     ColorValue::new(0, 255, 136, "Mint".into(), Notation::Hexcode),
///     ColorValue::new(201, 118, 6, String::new(), Notation::Rgb),
/// ];
///
/// let writer = TextWriter::new(OutputFormat::Input);
/// assert_eq!(writer.to_text(&colors), "#00ff88 Mint\n(201, 118, 6)\n");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextWriter {
    format: OutputFormat,
}

impl TextWriter {
    /// Create a new text writer for the given output format.
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Get this writer's output format.
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render the colors as text.
    pub fn to_text(&self, colors: &[ColorValue]) -> String {
        let mut text = String::new();
        for color in colors {
            text.push_str(&render(color, self.format));
            text.push('\n');
        }
        text
    }
}

impl PaletteWriter for TextWriter {
    fn encode(&self, colors: &[ColorValue]) -> Result<Vec<u8>, PaletteError> {
        Ok(self.to_text(colors).into_bytes())
    }
}

// ====================================================================================================================
