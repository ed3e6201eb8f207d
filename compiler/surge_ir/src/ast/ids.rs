//! Typed node identifiers.
//!
//! Ids are 1-based indices into their arena; raw value 0 is the `NONE`
//! sentinel. Optional children are modelled as `Option<Id>` in payloads, so
//! `NONE` only appears at API boundaries that need a plain integer.

macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const NONE: Self = Self(0);

            /// Id of the arena slot at `index`.
            #[inline]
            pub(crate) fn from_index(index: usize) -> Self {
                match u32::try_from(index + 1) {
                    Ok(raw) => Self(raw),
                    Err(_) => panic!(concat!(stringify!($name), " arena exceeded u32::MAX entries")),
                }
            }

            /// Arena slot. Must not be called on `NONE`.
            #[inline]
            pub const fn index(self) -> usize {
                debug_assert!(self.0 != 0);
                (self.0 - 1) as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != 0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($name), "::NONE"))
                }
            }
        }
    )* };
}

define_id!(
    /// Top-level item.
    ItemId,
    /// Statement.
    StmtId,
    /// Expression.
    ExprId,
    /// Type expression.
    TypeId,
    /// Parsed file node.
    FileNodeId,
);
