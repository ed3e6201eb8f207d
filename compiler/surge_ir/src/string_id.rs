//! Interned string identifier.

use std::fmt;

/// Handle to a string owned by a [`StringInterner`](crate::StringInterner).
///
/// Layout: shard index in the top 4 bits, local index in the low 28 bits.
/// The raw value 0 is reserved for [`StringId::NONE`] and never names a string.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct StringId(u32);

impl StringId {
    /// "No string" sentinel.
    pub const NONE: StringId = StringId(0);

    /// Largest local index a shard can hold.
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    pub(crate) const SHARD_BITS: u32 = 4;

    pub(crate) const NUM_SHARDS: usize = 1 << Self::SHARD_BITS;

    #[inline]
    pub(crate) const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < Self::NUM_SHARDS as u32);
        debug_assert!(local <= Self::MAX_LOCAL);
        StringId((shard << (32 - Self::SHARD_BITS)) | local)
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 >> (32 - Self::SHARD_BITS)) as usize
    }

    #[inline]
    pub(crate) const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "StringId({}:{})", self.shard(), self.local())
        } else {
            write!(f, "StringId(NONE)")
        }
    }
}
