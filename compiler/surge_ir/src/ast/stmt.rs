//! Statement nodes.

use crate::{Span, StringId};

use super::{ExprId, StmtId, StmtRange, TypeId};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

/// `[mut] name (: T)? (= value)?`, shared by `let`/`const` items and statements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Binding {
    pub name: StringId,
    pub name_span: Span,
    pub mutable: bool,
    pub ty: Option<TypeId>,
    pub value: Option<ExprId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Block(StmtRange),
    Expr {
        expr: ExprId,
        missing_semicolon: bool,
    },
    Let(Binding),
    Const(Binding),
    Return(Option<ExprId>),
    /// `else_branch` is a `Block` or a nested `If`.
    If {
        cond: ExprId,
        then_block: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    ForClassic {
        init: Option<StmtId>,
        cond: Option<ExprId>,
        post: Option<ExprId>,
        body: StmtId,
    },
    ForIn {
        name: StringId,
        name_span: Span,
        ty: Option<TypeId>,
        iter: ExprId,
        body: StmtId,
    },
    Break,
    Continue,
    /// `@drop expr;`
    Drop(ExprId),
    /// `signal name (: T)? = value;`
    Signal {
        name: StringId,
        name_span: Span,
        ty: Option<TypeId>,
        value: ExprId,
    },
}
