mod conversion;
mod equality;
mod hilbert;
mod string;

// conversion
pub(crate) use conversion::{
    from_24bit, hsl_to_rgb, hsv_to_rgb, luminosity, rgb_to_hsl, rgb_to_hsv, to_24bit,
};

// equality
pub use equality::to_eq_bits;

// hilbert
pub(crate) use hilbert::hilbert_index_24bit;
pub use hilbert::{hilbert_index, hilbert_point, HILBERT_ORDER, MAX_HILBERT_ORDER};

// string
pub(crate) use string::{format_hashed, format_parenthesized, parse};
