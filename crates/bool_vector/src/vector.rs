//! The [`BoolVector`] value type.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use bytemuck::{Pod, Zeroable};

/// Number of byte segments needed to store `bits` booleans.
///
/// Use this to spell the second const parameter of [`BoolVector`]:
///
/// ```
/// use bool_vector::{segment_count, BoolVector};
///
/// let v = BoolVector::<19, { segment_count(19) }>::new();
/// assert!(v.none());
/// ```
#[inline(always)]
pub const fn segment_count(bits: usize) -> usize {
    (bits + 7) / 8
}

/// Vector of `SIZE` boolean values packed into `SEGMENTS` bytes.
///
/// `SEGMENTS` must equal [`segment_count`]`(SIZE)`; the constructors enforce
/// this at compile time. Bit `i` lives at bit `i % 8` of segment `i / 8`.
///
/// Bits past `SIZE - 1` in the last segment are don't-care: they may hold
/// arbitrary values after [`from_segments`](Self::from_segments) and after
/// whole-storage logical operations, but they never affect equality or the
/// [`all`](Self::all) / [`none`](Self::none) / [`any`](Self::any) predicates.
/// This keeps the per-segment loops branch-free; only the observable
/// comparisons pay for masking.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct BoolVector<const SIZE: usize, const SEGMENTS: usize> {
    data: [u8; SEGMENTS],
}

/// Two-component boolean vector.
pub type BoolVector2 = BoolVector<2, 1>;
/// Three-component boolean vector.
pub type BoolVector3 = BoolVector<3, 1>;
/// Four-component boolean vector.
pub type BoolVector4 = BoolVector<4, 1>;

// A `BoolVector` is one flat byte array, so it can be memcpy'd into
// GPU-visible buffers with `bytemuck::bytes_of`.
unsafe impl<const SIZE: usize, const SEGMENTS: usize> Zeroable for BoolVector<SIZE, SEGMENTS> {}
unsafe impl<const SIZE: usize, const SEGMENTS: usize> Pod for BoolVector<SIZE, SEGMENTS> {}

impl<const SIZE: usize, const SEGMENTS: usize> BoolVector<SIZE, SEGMENTS> {
    /// Bit count.
    pub const SIZE: usize = SIZE;
    /// Storage size in bytes.
    pub const DATA_SIZE: usize = SEGMENTS;

    const FULL_SEGMENT_MASK: u8 = 0xff;
    /// Low `SIZE % 8` bits of the last segment. Zero when `SIZE % 8 == 0`,
    /// in which case every use site is guarded by `SIZE % 8 != 0` and the
    /// mask is never applied.
    const LAST_SEGMENT_MASK: u8 = (1u8 << (SIZE % 8)) - 1;

    // Evaluated once per instantiated size; rejects mismatched parameters
    // at compile time.
    const VALID: () = assert!(
        SIZE != 0 && SEGMENTS == segment_count(SIZE),
        "SEGMENTS must equal segment_count(SIZE), and SIZE must be nonzero"
    );

    /// Construct a zero-filled boolean vector.
    #[inline]
    pub fn new() -> Self {
        let () = Self::VALID;
        Self { data: [0; SEGMENTS] }
    }

    /// Construct a boolean vector from raw segment values.
    ///
    /// Segments are stored verbatim; don't-care bits in the last segment
    /// keep whatever the caller passed.
    #[inline]
    pub fn from_segments(segments: [u8; SEGMENTS]) -> Self {
        let () = Self::VALID;
        Self { data: segments }
    }

    /// Construct a boolean vector with one value for all bits.
    #[inline]
    pub fn filled(value: bool) -> Self {
        let () = Self::VALID;
        Self {
            data: [if value { Self::FULL_SEGMENT_MASK } else { 0 }; SEGMENTS],
        }
    }

    /// Raw segment data.
    #[inline]
    pub fn data(&self) -> &[u8; SEGMENTS] {
        &self.data
    }

    /// Mutable raw segment data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8; SEGMENTS] {
        &mut self.data
    }

    /// Bit at given position.
    ///
    /// # Panics
    /// Debug panics if `i >= SIZE`.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        debug_assert!(i < SIZE, "bit index out of bounds");
        (self.data[i / 8] >> (i % 8)) & 1 != 0
    }

    /// Set or clear the bit at given position.
    ///
    /// # Panics
    /// Debug panics if `i >= SIZE`.
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) {
        debug_assert!(i < SIZE, "bit index out of bounds");
        if value {
            self.data[i / 8] |= 1 << (i % 8);
        } else {
            self.data[i / 8] &= !(1 << (i % 8));
        }
    }

    /// Whether all bits are set.
    pub fn all(&self) -> bool {
        // Check all full segments
        for i in 0..SIZE / 8 {
            if self.data[i] != Self::FULL_SEGMENT_MASK {
                return false;
            }
        }

        // Check last segment
        if SIZE % 8 != 0
            && self.data[SEGMENTS - 1] & Self::LAST_SEGMENT_MASK != Self::LAST_SEGMENT_MASK
        {
            return false;
        }

        true
    }

    /// Whether no bits are set.
    pub fn none(&self) -> bool {
        // Check all full segments
        for i in 0..SIZE / 8 {
            if self.data[i] != 0 {
                return false;
            }
        }

        // Check last segment
        if SIZE % 8 != 0 && self.data[SEGMENTS - 1] & Self::LAST_SEGMENT_MASK != 0 {
            return false;
        }

        true
    }

    /// Whether any bit is set.
    #[inline]
    pub fn any(&self) -> bool {
        !self.none()
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> Default for BoolVector<SIZE, SEGMENTS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> PartialEq for BoolVector<SIZE, SEGMENTS> {
    fn eq(&self, other: &Self) -> bool {
        for i in 0..SIZE / 8 {
            if self.data[i] != other.data[i] {
                return false;
            }
        }

        // Compare the last segment on meaningful bits only
        if SIZE % 8 != 0
            && self.data[SEGMENTS - 1] & Self::LAST_SEGMENT_MASK
                != other.data[SEGMENTS - 1] & Self::LAST_SEGMENT_MASK
        {
            return false;
        }

        true
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> Eq for BoolVector<SIZE, SEGMENTS> {}

impl<const SIZE: usize, const SEGMENTS: usize> Not for BoolVector<SIZE, SEGMENTS> {
    type Output = Self;

    /// Bitwise inversion over the whole storage, don't-care bits included.
    fn not(mut self) -> Self {
        for segment in &mut self.data {
            *segment = !*segment;
        }
        self
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> BitAndAssign for BoolVector<SIZE, SEGMENTS> {
    fn bitand_assign(&mut self, other: Self) {
        for i in 0..SEGMENTS {
            self.data[i] &= other.data[i];
        }
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> BitAnd for BoolVector<SIZE, SEGMENTS> {
    type Output = Self;

    fn bitand(mut self, other: Self) -> Self {
        self &= other;
        self
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> BitOrAssign for BoolVector<SIZE, SEGMENTS> {
    fn bitor_assign(&mut self, other: Self) {
        for i in 0..SEGMENTS {
            self.data[i] |= other.data[i];
        }
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> BitOr for BoolVector<SIZE, SEGMENTS> {
    type Output = Self;

    fn bitor(mut self, other: Self) -> Self {
        self |= other;
        self
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> BitXorAssign for BoolVector<SIZE, SEGMENTS> {
    fn bitxor_assign(&mut self, other: Self) {
        for i in 0..SEGMENTS {
            self.data[i] ^= other.data[i];
        }
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> BitXor for BoolVector<SIZE, SEGMENTS> {
    type Output = Self;

    fn bitxor(mut self, other: Self) -> Self {
        self ^= other;
        self
    }
}

impl<const SIZE: usize, const SEGMENTS: usize> fmt::Debug for BoolVector<SIZE, SEGMENTS> {
    /// Renders meaningful bits as `0`/`1` grouped by 8, e.g.
    /// `BoolVector(10000000 1)`. Diagnostic form only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoolVector(")?;
        for i in 0..SIZE {
            if i != 0 && i % 8 == 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", if self.get(i) { '1' } else { '0' })?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Vec19 = BoolVector<19, { segment_count(19) }>;
    type Vec16 = BoolVector<16, { segment_count(16) }>;
    type Vec3 = BoolVector<3, 1>;

    #[test]
    fn segment_count_values() {
        assert_eq!(segment_count(1), 1);
        assert_eq!(segment_count(8), 1);
        assert_eq!(segment_count(9), 2);
        assert_eq!(segment_count(19), 3);
        assert_eq!(segment_count(64), 8);
    }

    #[test]
    fn new_is_zero_filled() {
        let v = Vec19::new();
        assert!(v.none());
        for i in 0..19 {
            assert!(!v.get(i));
        }
    }

    #[test]
    fn set_get_leaves_other_bits_alone() {
        let mut v = Vec19::new();
        v.set(11, true);

        assert!(v.get(11));
        for i in 0..19 {
            if i != 11 {
                assert!(!v.get(i), "bit {} should be unset", i);
            }
        }
    }

    #[test]
    fn set_clears_bits_too() {
        let mut v = Vec19::filled(true);
        v.set(11, false);

        assert!(!v.get(11));
        assert!(!v.all());

        v.set(11, true);
        assert!(v.all());
    }

    #[test]
    fn from_segments_stored_verbatim() {
        let v = Vec19::from_segments([0xff, 0x00, 0b101]);
        assert!(v.get(0));
        assert!(v.get(7));
        assert!(!v.get(8));
        assert!(v.get(16));
        assert!(!v.get(17));
        assert!(v.get(18));
        assert_eq!(v.data(), &[0xff, 0x00, 0b101]);
    }

    #[test]
    fn equality_is_reflexive() {
        let v = Vec19::from_segments([0xab, 0xcd, 0x02]);
        assert_eq!(v, v);
    }

    #[test]
    fn equality_ignores_tail_padding() {
        // SIZE = 3, so the top five bits of the only segment are don't-care.
        let a = Vec3::from_segments([0b0000_0101]);
        let b = Vec3::from_segments([0b1111_0101]);
        assert_eq!(a, b);

        let c = Vec3::from_segments([0b0000_0100]);
        assert_ne!(a, c);
    }

    #[test]
    fn equality_checks_full_segments() {
        let a = Vec19::from_segments([0xff, 0x00, 0x00]);
        let b = Vec19::from_segments([0xff, 0x01, 0x00]);
        assert_ne!(a, b);
    }

    #[test]
    fn double_negation_is_identity() {
        let v = Vec19::from_segments([0xa5, 0x3c, 0x01]);
        assert_eq!(!!v, v);
    }

    #[test]
    fn all_none_any_on_partial_segment() {
        assert!(Vec19::filled(true).all());
        assert!(Vec19::filled(false).none());
        assert!(!Vec19::filled(false).any());

        let mut v = Vec19::new();
        v.set(18, true);
        assert!(v.any());
        assert!(!v.all());
        assert!(!v.none());

        // Don't-care tail bits alone must not register as "any".
        let padded = Vec3::from_segments([0b1111_1000]);
        assert!(padded.none());
        assert!(!padded.any());
    }

    #[test]
    fn all_none_on_exact_segment_boundary() {
        assert!(Vec16::filled(true).all());
        assert!(Vec16::filled(false).none());

        let mut v = Vec16::new();
        for i in 0..16 {
            v.set(i, true);
        }
        assert!(v.all());

        v.set(15, false);
        assert!(!v.all());
        assert!(v.any());
    }

    #[test]
    fn all_ignores_tail_padding() {
        // Meaningful bits all set, tail bits clear.
        let v = Vec3::from_segments([0b0000_0111]);
        assert!(v.all());
    }

    #[test]
    fn single_bit_vector() {
        let mut v = BoolVector::<1, 1>::new();
        assert!(v.none());
        v.set(0, true);
        assert!(v.all());
        assert!(v.get(0));
    }

    #[test]
    fn and_or_commute() {
        let a = Vec19::from_segments([0xa5, 0x3c, 0x01]);
        let b = Vec19::from_segments([0x0f, 0xf0, 0x06]);
        assert_eq!(a & b, b & a);
        assert_eq!(a | b, b | a);
        assert_eq!(a ^ b, b ^ a);
    }

    #[test]
    fn and_or_xor_associate() {
        let a = Vec19::from_segments([0xa5, 0x3c, 0x01]);
        let b = Vec19::from_segments([0x0f, 0xf0, 0x06]);
        let c = Vec19::from_segments([0x33, 0x55, 0x05]);
        assert_eq!((a & b) & c, a & (b & c));
        assert_eq!((a | b) | c, a | (b | c));
        assert_eq!((a ^ b) ^ c, a ^ (b ^ c));
    }

    #[test]
    fn xor_with_self_is_none() {
        let a = Vec19::from_segments([0xa5, 0x3c, 0x01]);
        assert!((a ^ a).none());
    }

    #[test]
    fn assign_forms_match_binary_forms() {
        let a = Vec19::from_segments([0xa5, 0x3c, 0x01]);
        let b = Vec19::from_segments([0x0f, 0xf0, 0x06]);

        let mut c = a;
        c &= b;
        assert_eq!(c, a & b);

        let mut c = a;
        c |= b;
        assert_eq!(c, a | b);

        let mut c = a;
        c ^= b;
        assert_eq!(c, a ^ b);
    }

    #[test]
    fn logic_operates_on_meaningful_bits() {
        let mut a = Vec19::new();
        let mut b = Vec19::new();
        a.set(2, true);
        a.set(10, true);
        b.set(10, true);
        b.set(18, true);

        let and = a & b;
        assert!(and.get(10));
        assert!(!and.get(2));
        assert!(!and.get(18));

        let or = a | b;
        assert!(or.get(2) && or.get(10) && or.get(18));

        let xor = a ^ b;
        assert!(xor.get(2) && !xor.get(10) && xor.get(18));
    }

    #[test]
    fn not_sets_every_meaningful_bit_of_zero() {
        let v = !Vec19::new();
        assert!(v.all());
    }

    #[test]
    fn debug_format_groups_by_eight() {
        let mut v = BoolVector::<9, 2>::new();
        v.set(0, true);
        v.set(8, true);
        assert_eq!(format!("{:?}", v), "BoolVector(10000000 1)");

        let v = Vec3::from_segments([0b1111_0101]);
        assert_eq!(format!("{:?}", v), "BoolVector(101)");
    }

    #[test]
    fn pod_view_matches_segments() {
        let v = Vec16::from_segments([0xab, 0xcd]);
        assert_eq!(bytemuck::bytes_of(&v), &[0xab, 0xcd]);

        let zeroed: Vec16 = bytemuck::Zeroable::zeroed();
        assert!(zeroed.none());
    }

    #[test]
    fn component_aliases() {
        let mut v = BoolVector3::new();
        v.set(0, true);
        v.set(2, true);
        assert!(v.get(0) && !v.get(1) && v.get(2));
        assert_eq!(BoolVector2::SIZE, 2);
        assert_eq!(BoolVector4::DATA_SIZE, 1);
    }
}
