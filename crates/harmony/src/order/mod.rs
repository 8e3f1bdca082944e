//! Ordering colors.
//!
//! This module provides the [`Algorithm`]s for deriving [`SortKey`]s from
//! colors and the [`order`] function for reordering a list of colors by such
//! keys in either [`Direction`].

mod algorithm;
mod engine;
mod key;

pub use algorithm::Algorithm;
#[cfg(feature = "pyffi")]
pub(crate) use engine::py_order;
pub use engine::{order, Direction};
pub use key::{step_bucket, SortKey, STEP_BUCKETS};
