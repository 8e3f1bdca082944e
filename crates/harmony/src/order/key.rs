use std::cmp::Ordering;

use crate::Float;

/// The number of hue buckets for the step algorithms.
pub const STEP_BUCKETS: u8 = 8;

/// Determine the step bucket for the given hue in degrees.
///
/// The buckets evenly divide the hue circle into [`STEP_BUCKETS`] arcs of
/// 45°, with bucket 0 covering `0..45`, bucket 1 covering `45..90`, and so on.
/// Hues outside `0..360` are clamped to the first or last bucket.
///
/// ```
/// # use harmony::order::step_bucket;
/// assert_eq!(step_bucket(10.0), 0);
/// assert_eq!(step_bucket(44.9), 0);
/// assert_eq!(step_bucket(45.0), 1);
/// assert_eq!(step_bucket(359.9), 7);
/// ```
pub fn step_bucket(hue: Float) -> u8 {
    let width = 360.0 / Float::from(STEP_BUCKETS);
    // Float to int casts saturate, so negative hues end up in bucket 0.
    ((hue / width).floor() as u8).min(STEP_BUCKETS - 1)
}

/// A key for sorting colors.
///
/// Sort keys are totally ordered. Floating point components are compared with
/// [`Float::total_cmp`] and triples lexicographically. Keys of different
/// variants never meet when ordering colors with the same algorithm; they are
/// ordered by variant nonetheless, indices before scalars before triples.
#[derive(Copy, Clone, Debug)]
pub enum SortKey {
    /// An integer key, e.g., a Hilbert index.
    Index(u64),
    /// A floating point key, e.g., the luminosity.
    Scalar(Float),
    /// Three floating point keys, e.g., HSV coordinates.
    Triple([Float; 3]),
}

impl SortKey {
    const fn rank(&self) -> u8 {
        match self {
            Self::Index(_) => 0,
            Self::Scalar(_) => 1,
            Self::Triple(_) => 2,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Index(n1), Self::Index(n2)) => n1.cmp(n2),
            (Self::Scalar(f1), Self::Scalar(f2)) => f1.total_cmp(f2),
            (Self::Triple(fs1), Self::Triple(fs2)) => fs1
                .iter()
                .zip(fs2)
                .map(|(f1, f2)| f1.total_cmp(f2))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

// ====================================================================================================================
