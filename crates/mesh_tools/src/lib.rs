//! CPU-side mesh data utilities.
//!
//! Currently provides index buffer compression: repacking 32-bit vertex
//! indices at the narrowest integer width that still holds every value,
//! ready for upload to a rendering backend.
//!
//! # Example
//!
//! ```
//! use mesh_tools::{compress_indices, IndexType};
//!
//! let compressed = compress_indices(&[0, 1, 2, 2, 1, 3]).unwrap();
//! assert_eq!(compressed.index_type, IndexType::U8);
//! assert_eq!(compressed.data, vec![0, 1, 2, 2, 1, 3]);
//! ```

pub mod compress;

// Re-export primary types
pub use crate::compress::{compress_indices, CompressError, CompressedIndices, IndexType};
