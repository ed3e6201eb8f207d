//! Type expression nodes.

use crate::{Span, StringId};

use super::{ExprId, FnTypeParamRange, PathSegmentRange, TypeId, TypeRange, TypeUnaryOp};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeExpr {
    pub kind: TypeKind,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArrayKind {
    /// `T[]`
    Slice,
    /// `T[N]`
    Sized,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    /// `a::b<T>::C`
    Path(PathSegmentRange),
    Unary {
        op: TypeUnaryOp,
        inner: TypeId,
    },
    /// `const_length` is filled when the length is an integer literal.
    Array {
        elem: TypeId,
        kind: ArrayKind,
        length: Option<ExprId>,
        const_length: Option<u64>,
    },
    Tuple(TypeRange),
    Fn {
        params: FnTypeParamRange,
        ret: TypeId,
    },
    /// `T?`
    Optional(TypeId),
    /// `T!` or `T!E`
    Errorable {
        inner: TypeId,
        error: Option<TypeId>,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PathSegment {
    pub name: StringId,
    pub generics: TypeRange,
    pub span: Span,
}

/// Parameter of a function type: `T` or `...T`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FnTypeParam {
    pub ty: TypeId,
    pub variadic: bool,
}
