//! The three-dimensional Hilbert curve.
//!
//! A Hilbert curve of order n visits every point of the cube `[0, 2ⁿ)³`
//! exactly once, moving by one unit along one axis with every step. Its index,
//! i.e., the distance along the curve, ranges `0..2³ⁿ`. The implementation
//! follows John Skilling's "Programming the Hilbert curve" (AIP Conference
//! Proceedings 707, 2004), which transforms the coordinates in place, one bit
//! level at a time, into the so-called transpose of the index. Interleaving
//! the transpose's bits then yields the index proper.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::OutOfBoundsError;

/// The order of the Hilbert curve covering 24-bit RGB colors.
pub const HILBERT_ORDER: u32 = 8;

/// The largest supported order. With three bits per order, larger orders would
/// overflow the 64-bit index.
pub const MAX_HILBERT_ORDER: u32 = 21;

const DIMENSIONS: usize = 3;

fn check_order(order: u32) -> Result<(), OutOfBoundsError> {
    if (1..=MAX_HILBERT_ORDER).contains(&order) {
        Ok(())
    } else {
        Err(OutOfBoundsError::new(order, 1..=u64::from(MAX_HILBERT_ORDER)))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Transform coordinates into the transpose of their Hilbert index.
///
/// Starting with the most significant bit level, each level's bits select
/// one of eight sub-cubes. The lower bits of all axes are then inverted or
/// exchanged with the first axis so that the traversal of the sub-cube starts
/// where the traversal of the previous sub-cube ended. Finally, Gray encoding
/// turns the reflected coordinates into the transpose.
fn axes_to_transpose(axes: &mut [u32; DIMENSIONS], order: u32) {
    let top = 1_u32 << (order - 1);

    // Exchange or invert lower bits, most significant level first
    let mut level = top;
    while 1 < level {
        let lower = level - 1;
        for axis in 0..DIMENSIONS {
            if axes[axis] & level != 0 {
                axes[0] ^= lower;
            } else {
                let swap = (axes[0] ^ axes[axis]) & lower;
                axes[0] ^= swap;
                axes[axis] ^= swap;
            }
        }
        level >>= 1;
    }

    // Gray encode
    for axis in 1..DIMENSIONS {
        axes[axis] ^= axes[axis - 1];
    }
    let mut flip = 0;
    level = top;
    while 1 < level {
        if axes[DIMENSIONS - 1] & level != 0 {
            flip ^= level - 1;
        }
        level >>= 1;
    }
    for axis in axes.iter_mut() {
        *axis ^= flip;
    }
}

/// Transform the transpose of a Hilbert index back into coordinates. This
/// function undoes [`axes_to_transpose`] step by step in reverse order.
fn transpose_to_axes(axes: &mut [u32; DIMENSIONS], order: u32) {
    let end = 2_u32 << (order - 1);

    // Gray decode
    let flip = axes[DIMENSIONS - 1] >> 1;
    for axis in (1..DIMENSIONS).rev() {
        axes[axis] ^= axes[axis - 1];
    }
    axes[0] ^= flip;

    // Undo excess work
    let mut level = 2_u32;
    while level != end {
        let lower = level - 1;
        for axis in (0..DIMENSIONS).rev() {
            if axes[axis] & level != 0 {
                axes[0] ^= lower;
            } else {
                let swap = (axes[0] ^ axes[axis]) & lower;
                axes[0] ^= swap;
                axes[axis] ^= swap;
            }
        }
        level <<= 1;
    }
}

/// Interleave the transpose's bits, most significant level first and the
/// first axis first within each level.
fn interleave(axes: &[u32; DIMENSIONS], order: u32) -> u64 {
    let mut index = 0_u64;
    for bit in (0..order).rev() {
        for axis in axes {
            index = (index << 1) | u64::from((axis >> bit) & 1);
        }
    }
    index
}

/// Split the index's bits into the transpose. This is the inverse of
/// [`interleave`].
fn deinterleave(index: u64, order: u32) -> [u32; DIMENSIONS] {
    let mut axes = [0_u32; DIMENSIONS];
    for bit in 0..order {
        for (position, axis) in axes.iter_mut().enumerate() {
            let shift = DIMENSIONS as u32 * bit + (DIMENSIONS - 1 - position) as u32;
            *axis |= (((index >> shift) & 1) as u32) << bit;
        }
    }
    axes
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the index of a 24-bit color on the Hilbert curve of order 8.
///
/// Since channels are bytes, they always fit into the curve's cube and this
/// function cannot fail.
pub(crate) fn hilbert_index_24bit(channels: &[u8; 3]) -> u64 {
    let mut axes = channels.map(u32::from);
    axes_to_transpose(&mut axes, HILBERT_ORDER);
    interleave(&axes, HILBERT_ORDER)
}

/// Determine the index of the point on the Hilbert curve of the given order.
///
/// The order must range `1..=21` and each coordinate `0..2ⁿ`, where n is the
/// order. Otherwise, this function returns an out-of-bounds error naming the
/// offending value and its valid range. The index ranges `0..2³ⁿ`.
///
/// # Examples
///
/// ```
/// # use harmony::error::OutOfBoundsError;
/// use harmony::hilbert::{hilbert_index, HILBERT_ORDER};
///
/// assert_eq!(hilbert_index([0, 0, 0], HILBERT_ORDER)?, 0);
/// assert_eq!(hilbert_index([255, 0, 0], HILBERT_ORDER)?, (1 << 24) - 1);
/// assert_eq!(hilbert_index([49, 6, 210], HILBERT_ORDER)?, 2_590_067);
/// assert!(hilbert_index([256, 0, 0], HILBERT_ORDER).is_err());
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hilbert_index(point: [u32; 3], order: u32) -> Result<u64, OutOfBoundsError> {
    check_order(order)?;

    let limit = (1_u32 << order) - 1;
    if let Some(&coordinate) = point.iter().find(|&&c| limit < c) {
        return Err(OutOfBoundsError::new(coordinate, 0..=u64::from(limit)));
    }

    let mut axes = point;
    axes_to_transpose(&mut axes, order);
    Ok(interleave(&axes, order))
}

/// Determine the point with the given index on the Hilbert curve of the given
/// order.
///
/// This function is the inverse of [`hilbert_index`]. The order must range
/// `1..=21` and the index `0..2³ⁿ`, where n is the order. Otherwise, this
/// function returns an out-of-bounds error.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hilbert_point(index: u64, order: u32) -> Result<[u32; 3], OutOfBoundsError> {
    check_order(order)?;

    let limit = (1_u64 << (3 * order)) - 1;
    if limit < index {
        return Err(OutOfBoundsError::new(index, 0..=limit));
    }

    let mut axes = deinterleave(index, order);
    transpose_to_axes(&mut axes, order);
    Ok(axes)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Uniform};

    use super::{
        hilbert_index, hilbert_index_24bit, hilbert_point, HILBERT_ORDER, MAX_HILBERT_ORDER,
    };
    use crate::error::OutOfBoundsError;

    fn manhattan(p1: &[u32; 3], p2: &[u32; 3]) -> u32 {
        p1.iter().zip(p2).map(|(c1, c2)| c1.abs_diff(*c2)).sum()
    }

    #[test]
    fn test_origin() -> Result<(), OutOfBoundsError> {
        for order in 1..=MAX_HILBERT_ORDER {
            assert_eq!(hilbert_index([0, 0, 0], order)?, 0);
            assert_eq!(hilbert_point(0, order)?, [0, 0, 0]);
        }
        Ok(())
    }

    #[test]
    fn test_known_indices() -> Result<(), OutOfBoundsError> {
        assert_eq!(hilbert_index([1, 0, 0], 1)?, 7);
        assert_eq!(hilbert_index([0, 1, 0], 1)?, 3);
        assert_eq!(hilbert_index([0, 0, 1], 1)?, 1);
        assert_eq!(hilbert_index([1, 1, 1], 1)?, 5);

        assert_eq!(hilbert_index([49, 6, 210], HILBERT_ORDER)?, 2_590_067);
        assert_eq!(hilbert_index([15, 143, 179], HILBERT_ORDER)?, 4_453_533);
        assert_eq!(hilbert_index([201, 118, 6], HILBERT_ORDER)?, 16_293_527);
        assert_eq!(hilbert_index([235, 61, 52], HILBERT_ORDER)?, 16_624_824);
        assert_eq!(hilbert_index([75, 214, 47], HILBERT_ORDER)?, 7_575_852);
        assert_eq!(hilbert_index([212, 104, 4], HILBERT_ORDER)?, 16_298_786);

        // The boundary coordinate 2ⁿ-1 is part of the cube.
        assert_eq!(hilbert_index([255, 255, 255], HILBERT_ORDER)?, 11_983_725);
        assert_eq!(hilbert_index([255, 0, 0], HILBERT_ORDER)?, (1 << 24) - 1);
        assert_eq!(hilbert_point(1, HILBERT_ORDER)?, [0, 1, 0]);

        assert_eq!(hilbert_index_24bit(&[49, 6, 210]), 2_590_067);
        Ok(())
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            hilbert_index([256, 0, 0], HILBERT_ORDER),
            Err(OutOfBoundsError::new(256_u32, 0..=255))
        );
        assert_eq!(
            hilbert_index([0, 0, 2], 1),
            Err(OutOfBoundsError::new(2_u32, 0..=1))
        );
        assert_eq!(
            hilbert_index([0, 0, 0], 0),
            Err(OutOfBoundsError::new(0_u32, 1..=21))
        );
        assert_eq!(
            hilbert_index([0, 0, 0], 22),
            Err(OutOfBoundsError::new(22_u32, 1..=21))
        );
        assert_eq!(
            hilbert_point(1 << 24, HILBERT_ORDER),
            Err(OutOfBoundsError::new(1_u64 << 24, 0..=(1 << 24) - 1))
        );
        assert!(hilbert_point(0, 0).is_err());
    }

    #[test]
    fn test_bijective_and_continuous() -> Result<(), OutOfBoundsError> {
        for order in [1, 2, 3] {
            let size = 1_u64 << (3 * order);
            let mut seen = HashSet::new();
            let mut previous: Option<[u32; 3]> = None;

            for index in 0..size {
                let point = hilbert_point(index, order)?;
                assert!(seen.insert(point), "{:?} visited twice", point);
                assert_eq!(hilbert_index(point, order)?, index);

                if let Some(previous) = previous {
                    assert_eq!(
                        manhattan(&previous, &point),
                        1,
                        "index {} jumps from {:?} to {:?}",
                        index,
                        previous,
                        point
                    );
                }
                previous = Some(point);
            }

            assert_eq!(seen.len() as u64, size);
        }
        Ok(())
    }

    #[test]
    fn test_sampled_round_trip() -> Result<(), OutOfBoundsError> {
        let mut rng = StdRng::seed_from_u64(8);

        for order in [HILBERT_ORDER, 13, MAX_HILBERT_ORDER] {
            let coordinates = Uniform::new_inclusive(0, (1_u32 << order) - 1).unwrap();
            let mut indices = HashSet::new();
            let mut points = HashSet::new();

            for _ in 0..2_000 {
                let point = [
                    coordinates.sample(&mut rng),
                    coordinates.sample(&mut rng),
                    coordinates.sample(&mut rng),
                ];
                let index = hilbert_index(point, order)?;
                assert_eq!(hilbert_point(index, order)?, point);

                // Distinct points have distinct indices.
                if points.insert(point) {
                    assert!(indices.insert(index));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_continuity_at_order_8() -> Result<(), OutOfBoundsError> {
        let mut previous = hilbert_point(0, HILBERT_ORDER)?;
        for index in 1..(1_u64 << 15) {
            let point = hilbert_point(index, HILBERT_ORDER)?;
            assert_eq!(manhattan(&previous, &point), 1);
            previous = point;
        }
        Ok(())
    }

    #[test]
    fn test_locality() -> Result<(), OutOfBoundsError> {
        // Compare index distances between lattice neighbors for the Hilbert
        // curve and for packed RGB.
        let mut rng = StdRng::seed_from_u64(1);
        let channels = Uniform::new_inclusive(0_u32, 254).unwrap();
        let axes = Uniform::new(0_usize, 3).unwrap();
        let packed = |p: &[u32; 3]| u64::from((p[0] << 16) | (p[1] << 8) | p[2]);

        let trials = 20_000;
        let mut hilbert_near = 0;
        let mut packed_near = 0;

        for _ in 0..trials {
            let point = [
                channels.sample(&mut rng),
                channels.sample(&mut rng),
                channels.sample(&mut rng),
            ];
            let mut neighbor = point;
            neighbor[axes.sample(&mut rng)] += 1;

            let h1 = hilbert_index(point, HILBERT_ORDER)?;
            let h2 = hilbert_index(neighbor, HILBERT_ORDER)?;
            if h1.abs_diff(h2) <= 64 {
                hilbert_near += 1;
            }
            if packed(&point).abs_diff(packed(&neighbor)) <= 64 {
                packed_near += 1;
            }
        }

        let hilbert_ratio = hilbert_near as f64 / trials as f64;
        let packed_ratio = packed_near as f64 / trials as f64;
        assert!(0.7 < hilbert_ratio, "hilbert ratio {}", hilbert_ratio);
        assert!(
            packed_ratio + 0.3 < hilbert_ratio,
            "hilbert ratio {} vs packed ratio {}",
            hilbert_ratio,
            packed_ratio
        );
        Ok(())
    }
}
