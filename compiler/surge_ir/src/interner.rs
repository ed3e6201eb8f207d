//! Sharded, thread-safe string interner.
//!
//! Parsers running on different threads share one interner. Each shard is
//! guarded by its own `RwLock`, so lookups of already-interned strings only
//! take a read lock and writers for different shards never contend.

use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use crate::StringId;

/// Error when a shard runs out of local indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    ShardFull { shard: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::ShardFull { shard } => write!(
                f,
                "interner shard {shard} is full ({} strings)",
                StringId::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct Shard {
    map: FxHashMap<&'static str, u32>,
    /// Index 0 of shard 0 is a placeholder backing `StringId::NONE`.
    strings: Vec<&'static str>,
}

impl Shard {
    fn new(reserve_none: bool) -> Self {
        let mut strings = Vec::with_capacity(128);
        if reserve_none {
            strings.push("");
        }
        Shard {
            map: FxHashMap::default(),
            strings,
        }
    }
}

/// Maps equal strings to equal [`StringId`]s. Strings live for the rest of the
/// process, which lets [`lookup`](Self::lookup) hand out `&'static str`.
pub struct StringInterner {
    shards: [RwLock<Shard>; StringId::NUM_SHARDS],
    len: AtomicUsize,
}

impl StringInterner {
    pub fn new() -> Self {
        StringInterner {
            shards: std::array::from_fn(|i| RwLock::new(Shard::new(i == 0))),
            len: AtomicUsize::new(0),
        }
    }

    #[inline]
    fn shard_of(s: &str) -> usize {
        let hash = BuildHasherDefault::<FxHasher>::default().hash_one(s);
        // Top bits of FxHash are the best mixed.
        (hash >> (64 - StringId::SHARD_BITS)) as usize
    }

    /// Intern `s`, failing only when its shard is full.
    pub fn try_intern(&self, s: &str) -> Result<StringId, InternError> {
        let shard_idx = Self::shard_of(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard index is below NUM_SHARDS"
        )]
        let shard_tag = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        if let Some(&local) = shard.read().map.get(s) {
            return Ok(StringId::new(shard_tag, local));
        }

        let mut guard = shard.write();
        // Another writer may have won the race between the two locks.
        if let Some(&local) = guard.map.get(s) {
            return Ok(StringId::new(shard_tag, local));
        }
        let local = u32::try_from(guard.strings.len())
            .ok()
            .filter(|&local| local <= StringId::MAX_LOCAL)
            .ok_or(InternError::ShardFull { shard: shard_idx })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        self.len.fetch_add(1, Ordering::Relaxed);
        Ok(StringId::new(shard_tag, local))
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics when the shard holding `s` is full; see [`try_intern`](Self::try_intern).
    #[inline]
    pub fn intern(&self, s: &str) -> StringId {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// String behind `id`, or `None` for [`StringId::NONE`] and ids this
    /// interner never produced.
    pub fn lookup(&self, id: StringId) -> Option<&'static str> {
        if !id.is_valid() {
            return None;
        }
        self.shards
            .get(id.shard())?
            .read()
            .strings
            .get(id.local())
            .copied()
    }

    /// String behind `id` at call sites that hold a valid id by construction.
    ///
    /// # Panics
    /// Panics on [`StringId::NONE`] or a foreign id.
    #[track_caller]
    pub fn must_lookup(&self, id: StringId) -> &'static str {
        self.lookup(id)
            .unwrap_or_else(|| panic!("{id:?} was not produced by this interner"))
    }

    /// Number of distinct strings interned.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
