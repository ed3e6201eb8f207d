//! Contiguous runs of auxiliary nodes.
//!
//! Variadic children (arguments, parameters, fields, arms …) are appended to
//! an auxiliary arena in one go and referenced by `{start, len}`.

macro_rules! define_range {
    ($($name:ident),* $(,)?) => { $(
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub const fn to_range(&self) -> ::std::ops::Range<usize> {
                self.start as usize..(self.start + self.len) as usize
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.start + self.len)
            }
        }
    )* };
}

define_range!(
    ExprRange,
    StmtRange,
    TypeRange,
    AttrRange,
    FnParamRange,
    TypeParamRange,
    TypeParamBoundRange,
    PathSegmentRange,
    FnTypeParamRange,
    FieldInitRange,
    MapEntryRange,
    CompareArmRange,
    SelectArmRange,
    ImportPairRange,
    StructFieldRange,
    UnionMemberRange,
    EnumVariantRange,
    ContractMemberRange,
    ExternMemberRange,
);
