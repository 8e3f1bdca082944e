use crate::Float;

/// Convert the given 24-bit RGB channels to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [
        Float::from(r) / 255.0,
        Float::from(g) / 255.0,
        Float::from(b) / 255.0,
    ]
}

/// Convert the RGB coordinates to 24-bit representation.
///
/// This function assumes that coordinates range `0..=1`. Even if that is not
/// the case, the conversion clamps them to the range `0x00..=0xff` before
/// rounding.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    let [r, g, b] = *coordinates;
    [convert(r), convert(g), convert(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the hue in degrees `0..360` for the given RGB coordinates, their
/// maximum, and their chroma. Achromatic colors have hue 0.
fn hue(value: &[Float; 3], max: Float, chroma: Float) -> Float {
    if chroma == 0.0 {
        return 0.0;
    }

    let [r, g, b] = *value;
    let sector = if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let degrees = 60.0 * sector;
    // rem_euclid() may round up to the modulus itself.
    if 360.0 <= degrees {
        degrees - 360.0
    } else {
        degrees
    }
}

/// Determine the maximum and minimum coordinate.
#[inline]
fn max_min(value: &[Float; 3]) -> (Float, Float) {
    let [r, g, b] = *value;
    (r.max(g).max(b), r.min(g).min(b))
}

/// Convert coordinates from RGB to HSV.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let (max, min) = max_min(value);
    let chroma = max - min;
    let saturation = if max == 0.0 { 0.0 } else { chroma / max };

    [hue(value, max, chroma), saturation, max]
}

/// Convert coordinates from RGB to HSL.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let (max, min) = max_min(value);
    let chroma = max - min;
    let lightness = (max + min) / 2.0;
    let saturation = if chroma == 0.0 {
        0.0
    } else {
        // Rounding errors may push saturation of very light colors past 1.
        (chroma / (1.0 - lightness.mul_add(2.0, -1.0).abs())).min(1.0)
    };

    [hue(value, max, chroma), saturation, lightness]
}

// --------------------------------------------------------------------------------------------------------------------

/// Distribute chroma across the RGB coordinates for the given hue. The
/// result still needs to be offset by the lightness match.
fn hue_to_rgb(hue: Float, chroma: Float) -> [Float; 3] {
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());

    match sector as u8 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    }
}

/// Convert coordinates from HSV to RGB.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let chroma = v * s;
    let offset = v - chroma;
    let [r, g, b] = hue_to_rgb(h, chroma);

    [r + offset, g + offset, b + offset]
}

/// Convert coordinates from HSL to RGB.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let chroma = (1.0 - l.mul_add(2.0, -1.0).abs()) * s;
    let offset = chroma.mul_add(-0.5, l);
    let [r, g, b] = hue_to_rgb(h, chroma);

    [r + offset, g + offset, b + offset]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the luminosity of the RGB coordinates, weighing red, green, and
/// blue with 0.299, 0.587, and 0.114, respectively.
#[inline]
pub(crate) fn luminosity(value: &[Float; 3]) -> Float {
    let [r, g, b] = *value;
    r.mul_add(0.299, g.mul_add(0.587, 0.114 * b))
}

// ====================================================================================================================
