//! Index buffer compression.
//!
//! Mesh indices arrive as `u32` regardless of mesh size. Most meshes never
//! need the full range, so before upload the sequence is repacked at the
//! narrowest of the three widths an index buffer can use (8, 16 or 32 bits),
//! chosen from the maximum value present. Ordering is preserved: index
//! buffers reference vertex positions by position.

use bytemuck::Pod;
use thiserror::Error;

/// Integer width of a single encoded index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    /// 8-bit unsigned indices.
    U8,
    /// 16-bit unsigned indices.
    U16,
    /// 32-bit unsigned indices.
    U32,
}

impl IndexType {
    /// Byte size of one encoded index.
    #[inline]
    pub const fn size_bytes(self) -> usize {
        match self {
            IndexType::U8 => 1,
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Error from [`compress_indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompressError {
    /// The input sequence was empty, so there is no maximum to size against.
    #[error("cannot compress an empty index sequence")]
    EmptyIndices,
}

/// An index sequence repacked at a fixed element width.
///
/// `data` holds `count` values of `index_type.size_bytes()` bytes each,
/// native-endian, in input order. The buffer is owned by the caller and can
/// be handed to a rendering backend as-is; `count` and `index_type` must be
/// communicated alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedIndices {
    /// Number of encoded index values.
    pub count: usize,
    /// Width of each encoded value.
    pub index_type: IndexType,
    /// Tightly packed index data, `count * size_bytes` long.
    pub data: Vec<u8>,
}

impl CompressedIndices {
    /// Total byte length of the packed data.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.count * self.index_type.size_bytes()
    }

    /// Widen the packed values back to `u32`, in order.
    pub fn decode(&self) -> Vec<u32> {
        match self.index_type {
            IndexType::U8 => self.data.iter().map(|&b| u32::from(b)).collect(),
            IndexType::U16 => self
                .data
                .chunks_exact(2)
                .map(|c| u32::from(u16::from_ne_bytes([c[0], c[1]])))
                .collect(),
            IndexType::U32 => self
                .data
                .chunks_exact(4)
                .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        }
    }
}

/// Integer log base 256: the number of whole bytes above the lowest needed
/// to represent `value`. `255 -> 0`, `256 -> 1`, `65536 -> 2`.
#[inline]
const fn log256(value: u32) -> u32 {
    if value == 0 {
        0
    } else {
        (31 - value.leading_zeros()) / 8
    }
}

/// Repack `indices` at width `T`, narrowing each value with `narrow`.
fn pack<T: Pod>(
    indices: &[u32],
    index_type: IndexType,
    narrow: impl Fn(u32) -> T,
) -> CompressedIndices {
    let mut data = Vec::with_capacity(indices.len() * index_type.size_bytes());
    for &index in indices {
        data.extend_from_slice(bytemuck::bytes_of(&narrow(index)));
    }

    CompressedIndices {
        count: indices.len(),
        index_type,
        data,
    }
}

/// Compress an index sequence to the narrowest width that holds its maximum.
///
/// Returns [`CompressError::EmptyIndices`] for an empty input; values are
/// never altered, only narrowed, so decoding at the reported width
/// reproduces the input exactly.
///
/// # Example
///
/// ```
/// use mesh_tools::{compress_indices, IndexType};
///
/// let compressed = compress_indices(&[100, 300, 200]).unwrap();
/// assert_eq!(compressed.index_type, IndexType::U16);
/// assert_eq!(compressed.decode(), vec![100, 300, 200]);
/// ```
pub fn compress_indices(indices: &[u32]) -> Result<CompressedIndices, CompressError> {
    let max = *indices.iter().max().ok_or(CompressError::EmptyIndices)?;

    Ok(match log256(max) {
        0 => pack(indices, IndexType::U8, |index| index as u8),
        1 => pack(indices, IndexType::U16, |index| index as u16),
        2 | 3 => pack(indices, IndexType::U32, |index| index),
        // log256 of a u32 is at most 3.
        _ => unreachable!("no index type able to address {} vertices", max),
    })
}
