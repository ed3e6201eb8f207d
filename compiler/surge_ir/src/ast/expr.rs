//! Expression nodes.

use crate::{Span, StringId};

use super::{
    AttrRange, BinaryOp, CompareArmRange, ExprId, ExprRange, FieldInitRange, MapEntryRange,
    SelectArmRange, StmtRange, TypeId, TypeRange, UnaryOp,
};

/// Expression header stored in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Literal families.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Int,
    Uint,
    Float,
    String,
    True,
    False,
    Nothing,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Ident(StringId),
    /// `value` is the literal text; string literals drop their quotes but
    /// keep escapes unprocessed.
    Literal {
        kind: LiteralKind,
        value: StringId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Ternary {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    /// `callee(args)`, or `callee::<type_args>(args)`.
    Call {
        callee: ExprId,
        args: ExprRange,
        type_args: TypeRange,
    },
    Index {
        target: ExprId,
        index: ExprId,
    },
    /// `target.member`, or `target::member` when `path` is set.
    Member {
        target: ExprId,
        member: StringId,
        path: bool,
    },
    /// `value to T` / `value: T`. `raw` holds a target written as a literal
    /// expression rather than a type.
    Cast {
        value: ExprId,
        ty: Option<TypeId>,
        raw: Option<ExprId>,
    },
    /// `value is T`.
    Is {
        value: ExprId,
        ty: TypeId,
    },
    Tuple(ExprRange),
    Group(ExprId),
    Array(ExprRange),
    RangeLit {
        start: Option<ExprId>,
        end: Option<ExprId>,
        inclusive: bool,
    },
    /// `...expr`
    Spread(ExprId),
    Struct {
        ty: Option<TypeId>,
        fields: FieldInitRange,
        positional: bool,
    },
    Map(MapEntryRange),
    Block(StmtRange),
    Compare {
        subject: ExprId,
        arms: CompareArmRange,
    },
    Select(SelectArmRange),
    Race(SelectArmRange),
    ParallelMap {
        iter: ExprId,
        args: ExprRange,
        body: ExprId,
    },
    ParallelReduce {
        iter: ExprId,
        init: ExprId,
        args: ExprRange,
        body: ExprId,
    },
    /// `@attrs async { … }`; `body` is a `Block` expression.
    Async {
        body: ExprId,
        attrs: AttrRange,
    },
    Spawn {
        target: ExprId,
        attrs: AttrRange,
    },
    /// `blocking { … }`; `body` is a `Block` expression.
    Blocking {
        body: ExprId,
    },
}

/// Field of a struct literal. Positional fields have no name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldInit {
    pub name: Option<StringId>,
    pub value: ExprId,
    pub span: Span,
}

/// `key => value` in a map literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MapEntry {
    pub key: ExprId,
    pub value: ExprId,
    pub span: Span,
}

/// Arm of a `compare` expression. `finally` arms have no pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CompareArm {
    pub pattern: Option<ExprId>,
    pub is_finally: bool,
    pub guard: Option<ExprId>,
    pub result: ExprId,
    pub span: Span,
}

/// Arm of a `select` or `race`. `default` arms have no awaited expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SelectArm {
    pub await_expr: Option<ExprId>,
    pub is_default: bool,
    pub result: ExprId,
    pub span: Span,
}
