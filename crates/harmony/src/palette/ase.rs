//! Adobe Swatch Exchange files.
//!
//! An ASE file starts with the `ASEF` signature, version 1.0, and the number
//! of blocks. Each block starts with its 16-bit type and 32-bit length, not
//! counting type and length. A palette is a group start block with the
//! palette's name, one color entry block per color, and a group end block.
//! Names are written as UTF-16 with a 16-bit length in code units, including
//! the terminating NUL. All numbers are big-endian.

use super::PaletteWriter;
use crate::error::{PaletteError, PaletteErrorKind};
use crate::ColorValue;

/// The extension of Adobe Swatch Exchange files.
pub const ASE_EXTENSION: &str = "ase";

const SIGNATURE: &[u8; 4] = b"ASEF";
const VERSION: [u16; 2] = [1, 0];
const GROUP_START: u16 = 0xc001;
const GROUP_END: u16 = 0xc002;
const COLOR_ENTRY: u16 = 0x0001;
const RGB_MODEL: &[u8; 4] = b"RGB ";
const NORMAL_COLOR: u16 = 2;

/// A writer for palettes in Adobe Swatch Exchange format.
///
/// The writer places all colors into a single group named after the palette.
/// Each color's label becomes the name of its swatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AseWriter {
    palette_name: String,
}

impl AseWriter {
    /// The palette name used by the `harmony` command line tool by default.
    pub const DEFAULT_PALETTE_NAME: &'static str = "Harmony";

    /// Create a new ASE writer for a palette with the given name.
    pub fn new<S: Into<String>>(palette_name: S) -> Self {
        Self {
            palette_name: palette_name.into(),
        }
    }

    /// Get the palette's name.
    pub fn palette_name(&self) -> &str {
        &self.palette_name
    }
}

impl Default for AseWriter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PALETTE_NAME)
    }
}

/// The most UTF-16 code units of a name, not counting the terminating NUL.
const MAX_NAME_UNITS: usize = u16::MAX as usize - 1;

/// Encode the name as length-prefixed, NUL-terminated UTF-16.
///
/// Names longer than [`MAX_NAME_UNITS`] are truncated, without splitting a
/// surrogate pair.
fn encode_name(name: &str) -> Vec<u8> {
    let mut units: Vec<u16> = name.encode_utf16().collect();
    if MAX_NAME_UNITS < units.len() {
        units.truncate(MAX_NAME_UNITS);
        if units.last().is_some_and(|unit| (0xd800..0xdc00).contains(unit)) {
            units.pop();
        }
    }
    units.push(0);

    let mut bytes = Vec::with_capacity(2 + 2 * units.len());
    // At most u16::MAX units by construction.
    bytes.extend_from_slice(&(units.len() as u16).to_be_bytes());
    for unit in units {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

/// Append a block with the given type and body.
fn push_block(buffer: &mut Vec<u8>, kind: u16, body: &[u8]) -> Result<(), PaletteError> {
    let length =
        u32::try_from(body.len()).map_err(|_| PaletteError::from_kind(PaletteErrorKind::TooLarge))?;
    buffer.extend_from_slice(&kind.to_be_bytes());
    buffer.extend_from_slice(&length.to_be_bytes());
    buffer.extend_from_slice(body);
    Ok(())
}

impl PaletteWriter for AseWriter {
    fn encode(&self, colors: &[ColorValue]) -> Result<Vec<u8>, PaletteError> {
        // One block per color plus the group's start and end.
        let block_count = u32::try_from(colors.len())
            .ok()
            .and_then(|count| count.checked_add(2))
            .ok_or_else(|| PaletteError::from_kind(PaletteErrorKind::TooLarge))?;

        let mut buffer = Vec::new();
        buffer.extend_from_slice(SIGNATURE);
        for part in VERSION {
            buffer.extend_from_slice(&part.to_be_bytes());
        }
        buffer.extend_from_slice(&block_count.to_be_bytes());

        push_block(&mut buffer, GROUP_START, &encode_name(&self.palette_name))?;

        for color in colors {
            let mut body = encode_name(color.label());
            body.extend_from_slice(RGB_MODEL);
            for channel in color.channels() {
                body.extend_from_slice(&(f32::from(channel) / 255.0).to_be_bytes());
            }
            body.extend_from_slice(&NORMAL_COLOR.to_be_bytes());

            tracing::trace!(color = %color, bytes = body.len(), "encoded swatch");
            push_block(&mut buffer, COLOR_ENTRY, &body)?;
        }

        push_block(&mut buffer, GROUP_END, &[])?;
        Ok(buffer)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{encode_name, AseWriter, MAX_NAME_UNITS};
    use crate::error::PaletteError;
    use crate::palette::PaletteWriter;
    use crate::{ColorValue, Notation};

    #[test]
    fn test_encode_name() {
        assert_eq!(encode_name(""), [0, 1, 0, 0]);
        assert_eq!(encode_name("Ab"), [0, 3, 0, 0x41, 0, 0x62, 0, 0]);
        // Outside the basic multilingual plane, a character takes two units.
        assert_eq!(
            encode_name("\u{1F3A8}"),
            [0, 3, 0xd8, 0x3c, 0xdf, 0xa8, 0, 0]
        );
    }

    #[test]
    fn test_encode_long_name() {
        let bytes = encode_name(&"a".repeat(70_000));
        assert_eq!(&bytes[..2], &u16::MAX.to_be_bytes());
        assert_eq!(bytes.len(), 2 + 2 * usize::from(u16::MAX));
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0x61, 0, 0]);

        // The cut falls between the two halves of the last character.
        let mut name = "a".repeat(MAX_NAME_UNITS - 1);
        name.push('\u{1F3A8}');
        let bytes = encode_name(&name);
        assert_eq!(&bytes[..2], &(u16::MAX - 1).to_be_bytes());
        assert_eq!(bytes.len(), 2 + 2 * usize::from(u16::MAX - 1));
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0x61, 0, 0]);
    }

    #[test]
    fn test_encode() -> Result<(), PaletteError> {
        let colors = [
            ColorValue::new(255, 0, 0, "R".into(), Notation::Rgb),
            ColorValue::new(0, 0, 255, String::new(), Notation::Hexcode),
        ];
        let bytes = AseWriter::new("P").encode(&colors)?;

        let mut expected: Vec<u8> = Vec::new();
        // Header with 2 colors + 2 group blocks
        expected.extend_from_slice(b"ASEF\x00\x01\x00\x00\x00\x00\x00\x04");
        // Group start with name "P"
        expected.extend_from_slice(b"\xc0\x01\x00\x00\x00\x06\x00\x02\x00P\x00\x00");
        // Color entry "R": name 6 + model 4 + channels 12 + type 2
        expected.extend_from_slice(b"\x00\x01\x00\x00\x00\x18\x00\x02\x00R\x00\x00RGB ");
        expected.extend_from_slice(&1.0_f32.to_be_bytes());
        expected.extend_from_slice(&0.0_f32.to_be_bytes());
        expected.extend_from_slice(&0.0_f32.to_be_bytes());
        expected.extend_from_slice(b"\x00\x02");
        // Color entry without name: name 4 + model 4 + channels 12 + type 2
        expected.extend_from_slice(b"\x00\x01\x00\x00\x00\x16\x00\x01\x00\x00RGB ");
        expected.extend_from_slice(&0.0_f32.to_be_bytes());
        expected.extend_from_slice(&0.0_f32.to_be_bytes());
        expected.extend_from_slice(&1.0_f32.to_be_bytes());
        expected.extend_from_slice(b"\x00\x02");
        // Group end
        expected.extend_from_slice(b"\xc0\x02\x00\x00\x00\x00");

        assert_eq!(bytes, expected);
        Ok(())
    }

    #[test]
    fn test_empty_palette() -> Result<(), PaletteError> {
        let bytes = AseWriter::default().encode(&[])?;
        assert_eq!(&bytes[..12], b"ASEF\x00\x01\x00\x00\x00\x00\x00\x02");
        // Header, group start with "Harmony", group end
        assert_eq!(bytes.len(), 12 + 6 + 2 + 16 + 6);
        Ok(())
    }
}
