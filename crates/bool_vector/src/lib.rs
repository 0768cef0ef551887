//! Fixed-width boolean vectors packed into byte segments.
//!
//! This crate provides [`BoolVector`], a compact boolean-array value type
//! for component-wise comparison masks and other per-lane flags. Bits are
//! stored eight to a byte, so bulk logical operations run one segment at a
//! time instead of one bool at a time.
//!
//! # Example
//!
//! ```
//! use bool_vector::{segment_count, BoolVector};
//!
//! let mut mask = BoolVector::<19, { segment_count(19) }>::new();
//! mask.set(5, true);
//!
//! assert!(mask.get(5));
//! assert!(mask.any());
//! assert!(!mask.all());
//! ```

pub mod vector;

// Re-export primary types
pub use crate::vector::{
    segment_count,
    BoolVector,
    BoolVector2, BoolVector3, BoolVector4,
};
