//! Apple color list files.
//!
//! A `.clr` file is an archived `NSColorList` in the typed stream format. The
//! archive has a fixed shape: a signature, the number of colors, and then one
//! entry per color, holding the color's RGBA components and its name. The
//! first entry also declares the `NSColor` and `NSString` classes, which later
//! entries refer back to by reference.
//!
//! Integers that fit into a signed byte are written as that byte. Larger
//! counts are escaped with `0x81` and written as little-endian `u16`. Color
//! components of 0 and 1 are written as integer bytes, all others are escaped
//! with `0x83` and written as little-endian `f32`.

use super::PaletteWriter;
use crate::error::{PaletteError, PaletteErrorKind};
use crate::ColorValue;

/// The extension of Apple color list files.
pub const CLR_EXTENSION: &str = "clr";

const SIGNATURE: &[u8] = b"\x04\x0bstreamtyped\x81\xe8\x03\x84\x01\x69\x01";
const COUNT_PREFIX: &[u8] = b"\x84\x02\x40\x69\x85";
const FIRST_ENTRY_PREFIX: &[u8] = b"\x84\x02\x40\x40";
const COMPONENTS_PREFIX: &[u8] = b"\x85\x84\x01\x63\x01\x84\x04\x66\x66\x66\x66";
const NAME_PREFIX: &[u8] = b"\x01\x94\x84\x01\x2b";
const NEXT_ENTRY_PREFIX: &[u8] = b"\x94\x84\x93\x97\x01\x98";
const NEXT_NAME_PREFIX: &[u8] = b"\x84\x96\x9a";

const CLASS: &[u8] = b"\x84\x84\x84";
const SUPERCLASS: &[u8] = b"\x84\x84";
const NUL: u8 = 0x00;
const INTEGER_16: u8 = 0x81;
const FLOAT: u8 = 0x83;
const END_OF_DATA: u8 = 0x86;

/// The longest name in bytes.
const MAX_NAME_BYTES: usize = u8::MAX as usize;

/// A writer for palettes in Apple color list format.
///
/// Each color's label becomes the name of its entry. The format cannot
/// represent an empty palette or one with more than 65,535 colors; encoding
/// such a palette fails with a palette error of kind
/// [`PaletteErrorKind::EmptyPalette`] or [`PaletteErrorKind::TooLarge`].
///
/// ```
/// # use harmony::error::PaletteErrorKind;
/// # use harmony::palette::{ClrWriter, PaletteWriter};
/// let error = ClrWriter.encode(&[]).unwrap_err();
/// assert_eq!(error.kind(), PaletteErrorKind::EmptyPalette);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClrWriter;

/// Encode the number of colors.
fn encode_count(buffer: &mut Vec<u8>, count: usize) -> Result<(), PaletteError> {
    buffer.extend_from_slice(COUNT_PREFIX);
    if let Ok(count) = i8::try_from(count) {
        buffer.push(count as u8);
    } else {
        let count =
            u16::try_from(count).map_err(|_| PaletteError::from_kind(PaletteErrorKind::TooLarge))?;
        buffer.push(INTEGER_16);
        buffer.extend_from_slice(&count.to_le_bytes());
    }
    Ok(())
}

/// Encode a class declaration.
fn encode_class(buffer: &mut Vec<u8>, name: &[u8]) {
    buffer.extend_from_slice(CLASS);
    // Class names are short constants.
    buffer.push(name.len() as u8);
    buffer.extend_from_slice(name);
}

/// Encode the channels as RGBA components with full opacity.
fn encode_components(buffer: &mut Vec<u8>, channels: [u8; 3]) {
    for channel in channels {
        match channel {
            0 => buffer.push(0),
            u8::MAX => buffer.push(1),
            _ => {
                buffer.push(FLOAT);
                buffer.extend_from_slice(&(f32::from(channel) / 255.0).to_le_bytes());
            }
        }
    }
    buffer.push(1);
    buffer.push(END_OF_DATA);
}

/// Encode the name as length-prefixed UTF-8. Names longer than 255 bytes are
/// truncated at the last character boundary that fits.
fn encode_name(buffer: &mut Vec<u8>, name: &str) {
    let mut end = name.len().min(MAX_NAME_BYTES);
    while !name.is_char_boundary(end) {
        end -= 1;
    }

    // At most 255 bytes by construction.
    buffer.push(end as u8);
    buffer.extend_from_slice(&name.as_bytes()[..end]);
    buffer.push(END_OF_DATA);
}

impl PaletteWriter for ClrWriter {
    fn encode(&self, colors: &[ColorValue]) -> Result<Vec<u8>, PaletteError> {
        let Some((first, rest)) = colors.split_first() else {
            return Err(PaletteError::from_kind(PaletteErrorKind::EmptyPalette));
        };

        let mut buffer = Vec::from(SIGNATURE);
        encode_count(&mut buffer, colors.len())?;

        buffer.extend_from_slice(FIRST_ENTRY_PREFIX);
        encode_class(&mut buffer, b"NSColor");
        buffer.push(NUL);
        buffer.extend_from_slice(SUPERCLASS);
        buffer.push(8);
        buffer.extend_from_slice(b"NSObject");
        buffer.push(NUL);
        buffer.extend_from_slice(COMPONENTS_PREFIX);
        encode_components(&mut buffer, first.channels());
        encode_class(&mut buffer, b"NSString");
        buffer.extend_from_slice(NAME_PREFIX);
        encode_name(&mut buffer, first.label());

        for color in rest {
            buffer.extend_from_slice(NEXT_ENTRY_PREFIX);
            encode_components(&mut buffer, color.channels());
            buffer.extend_from_slice(NEXT_NAME_PREFIX);
            encode_name(&mut buffer, color.label());
        }

        tracing::trace!(count = colors.len(), bytes = buffer.len(), "encoded color list");
        Ok(buffer)
    }
}

// ====================================================================================================================
