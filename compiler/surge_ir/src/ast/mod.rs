//! Arena-based AST.
//!
//! Nodes are `{kind, span}` headers addressed by typed ids; variadic children
//! live in auxiliary arenas addressed by ranges. Everything is owned by one
//! [`AstArena`].

mod arena;
mod attr;
mod expr;
mod ids;
mod item;
mod operators;
mod ranges;
mod stmt;
mod ty;

pub use arena::AstArena;
pub use attr::{AstFile, Attr, DirectiveBlock, DirectiveLine, Pragma, PragmaEntry, PragmaFlags};
pub use expr::{CompareArm, Expr, ExprKind, FieldInit, LiteralKind, MapEntry, SelectArm};
pub use ids::{ExprId, FileNodeId, ItemId, StmtId, TypeId};
pub use item::{
    ContractItem, ContractMember, ContractMemberKind, EnumVariant, ExternItem, ExternMember,
    ExternMemberKind, FnItem, FnParam, FnSig, ImportItem, ImportOne, ImportPair, ImportSegment,
    ImportSegmentKind, Item, ItemKind, ItemTag, ModifierFlags, StructField, TagItem, TypeBody,
    TypeDeclKind, TypeItem, TypeParam, TypeParamBound, UnionMember, UnionMemberKind, Visibility,
};
pub use operators::{BinaryOp, TypeUnaryOp, UnaryOp, TERNARY_PRECEDENCE};
pub use ranges::{
    AttrRange, CompareArmRange, ContractMemberRange, EnumVariantRange, ExprRange,
    ExternMemberRange, FieldInitRange, FnParamRange, FnTypeParamRange, ImportPairRange,
    MapEntryRange, PathSegmentRange, SelectArmRange, StmtRange, StructFieldRange,
    TypeParamBoundRange, TypeParamRange, TypeRange, UnionMemberRange,
};
pub use stmt::{Binding, Stmt, StmtKind};
pub use ty::{ArrayKind, FnTypeParam, PathSegment, TypeExpr, TypeKind};
