use crate::error::{ColorFormatError, OutOfBoundsError};
use crate::Notation;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three channels as unsigned bytes. It transparently
/// handles single-digit channels by duplicating the nibble.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_channel(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            // from_str_radix() also accepts a leading plus sign.
            return Err(ColorFormatError::MalformedHex);
        }
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_channel(s, 0)?;
    let c2 = parse_channel(s, 1)?;
    let c3 = parse_channel(s, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a 24-bit color in parenthesized decimal format. The channels must be
/// decimal integers separated by commas. White space around channels is
/// ignored.
fn parse_parenthesized(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let body = s
        .strip_prefix('(')
        .ok_or(ColorFormatError::UnknownFormat)?
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;

    fn parse_channel(s: Option<&str>) -> Result<u8, ColorFormatError> {
        let t = s
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ColorFormatError::MissingChannel)?;
        if !t.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ColorFormatError::MalformedInteger);
        }

        // Only digits left, so parsing fails on overflow only.
        let n = t.parse::<u64>().unwrap_or(u64::MAX);
        u8::try_from(n).map_err(|_| ColorFormatError::OutOfRange(OutOfBoundsError::new(n, 0..=255)))
    }

    let mut iter = body.split(',');
    let c1 = parse_channel(iter.next())?;
    let c2 = parse_channel(iter.next())?;
    let c3 = parse_channel(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyChannels);
    }

    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse one line of a palette.
///
/// This function trims leading and trailing white space before recognizing
/// either the hashed hexadecimal or the parenthesized decimal format. A hashed
/// color ends at the first white space, a parenthesized color at the closing
/// parenthesis. Whatever follows, trimmed, is the color's label. If
/// successful, this function returns the three channels, the notation, and the
/// label.
pub(crate) fn parse(s: &str) -> Result<([u8; 3], Notation, &str), ColorFormatError> {
    let s = s.trim();

    if s.starts_with('#') {
        let (token, label) = s.split_at(s.find(char::is_whitespace).unwrap_or(s.len()));
        Ok((parse_hashed(token)?, Notation::Hexcode, label.trim()))
    } else if s.starts_with('(') {
        let end = s.find(')').ok_or(ColorFormatError::NoClosingParenthesis)?;
        let (token, label) = s.split_at(end + 1);
        Ok((parse_parenthesized(token)?, Notation::Rgb, label.trim()))
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the channels in hashed hexadecimal notation with six lowercase digits.
pub(crate) fn format_hashed(channels: &[u8; 3]) -> String {
    let [r, g, b] = *channels;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Format the channels in parenthesized decimal notation.
pub(crate) fn format_parenthesized(channels: &[u8; 3]) -> String {
    let [r, g, b] = *channels;
    format!("({}, {}, {})", r, g, b)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        format_hashed, format_parenthesized, parse, parse_hashed, parse_parenthesized,
        ColorFormatError,
    };
    use crate::error::OutOfBoundsError;
    use crate::Notation;

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#0f8")?, [0x00_u8, 0xff, 0x88]);
        assert_eq!(parse_hashed("#0F8FB3")?, [0x0f_u8, 0x8f, 0xb3]);
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#\u{1F4A9}00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#00g"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#+f0000"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_parse_parenthesized() -> Result<(), ColorFormatError> {
        assert_eq!(parse_parenthesized("(15, 143, 179)")?, [15_u8, 143, 179]);
        assert_eq!(parse_parenthesized("(  0,255 ,7 )")?, [0_u8, 255, 7]);
        assert_eq!(
            parse_parenthesized("(1, 2, 3"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse_parenthesized("(1, 2)"),
            Err(ColorFormatError::MissingChannel)
        );
        assert_eq!(
            parse_parenthesized("(1, , 3)"),
            Err(ColorFormatError::MissingChannel)
        );
        assert_eq!(
            parse_parenthesized("(1, 2, 3, 4)"),
            Err(ColorFormatError::TooManyChannels)
        );
        assert_eq!(
            parse_parenthesized("(1, 2.5, 3)"),
            Err(ColorFormatError::MalformedInteger)
        );
        assert_eq!(
            parse_parenthesized("(1, -2, 3)"),
            Err(ColorFormatError::MalformedInteger)
        );
        assert_eq!(
            parse_parenthesized("(256, 0, 0)"),
            Err(ColorFormatError::OutOfRange(OutOfBoundsError::new(
                256_u16,
                0..=255
            )))
        );

        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(
            parse("  #0f8   Light   Green  ")?,
            ([0_u8, 255, 136], Notation::Hexcode, "Light   Green")
        );
        assert_eq!(parse("#eb3d34")?, ([235_u8, 61, 52], Notation::Hexcode, ""));
        assert_eq!(
            parse("(49, 6, 210) Dark Blue")?,
            ([49_u8, 6, 210], Notation::Rgb, "Dark Blue")
        );
        assert_eq!(parse("(1,2,3)")?, ([1_u8, 2, 3], Notation::Rgb, ""));
        assert_eq!(
            parse("#0f8Light"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse("rgb(1, 2, 3)"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse("(1, 2, 3 Label"),
            Err(ColorFormatError::NoClosingParenthesis)
        );

        Ok(())
    }

    #[test]
    fn test_format() {
        assert_eq!(format_hashed(&[0, 255, 136]), "#00ff88");
        assert_eq!(format_hashed(&[0xeb, 0x3d, 0x34]), "#eb3d34");
        assert_eq!(format_parenthesized(&[201, 118, 6]), "(201, 118, 6)");
    }
}
