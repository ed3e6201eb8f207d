//! Top-level items and their auxiliary payloads.

use bitflags::bitflags;

use crate::{Span, StringId};

use super::{
    AttrRange, Binding, ContractMemberRange, EnumVariantRange, ExprId, ExternMemberRange,
    FnParamRange, ImportPairRange, StmtId, StructFieldRange, TypeId, TypeParamBoundRange,
    TypeParamRange, TypeRange, UnionMemberRange,
};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

bitflags! {
    /// Modifiers collected before an item head.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ModifierFlags: u8 {
        const PUBLIC = 1 << 0;
        const ASYNC = 1 << 1;
    }
}

impl ModifierFlags {
    pub fn visibility(self) -> Visibility {
        if self.contains(ModifierFlags::PUBLIC) {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

/// Item header stored in the arena.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Item {
    pub kind: ItemKind,
    /// Covers attributes, modifiers, keyword, name, body and terminator.
    pub span: Span,
    pub keyword_span: Span,
    pub visibility: Visibility,
    pub attrs: AttrRange,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ItemKind {
    Import(ImportItem),
    Let(Binding),
    Const(Binding),
    Fn(FnItem),
    Type(TypeItem),
    Contract(ContractItem),
    Tag(TagItem),
    Extern(ExternItem),
}

/// Discriminant of [`ItemKind`] without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ItemTag {
    Import,
    Let,
    Const,
    Fn,
    Type,
    Contract,
    Tag,
    Extern,
}

impl ItemKind {
    pub fn tag(&self) -> ItemTag {
        match self {
            ItemKind::Import(_) => ItemTag::Import,
            ItemKind::Let(_) => ItemTag::Let,
            ItemKind::Const(_) => ItemTag::Const,
            ItemKind::Fn(_) => ItemTag::Fn,
            ItemKind::Type(_) => ItemTag::Type,
            ItemKind::Contract(_) => ItemTag::Contract,
            ItemKind::Tag(_) => ItemTag::Tag,
            ItemKind::Extern(_) => ItemTag::Extern,
        }
    }
}

// Import

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ImportSegmentKind {
    Name(StringId),
    /// `.`
    Current,
    /// `..`
    Parent,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImportSegment {
    pub kind: ImportSegmentKind,
    pub span: Span,
}

/// `::name (as alias)?`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImportOne {
    pub name: StringId,
    pub alias: Option<StringId>,
    pub span: Span,
}

/// One entry of `::{ … }`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImportPair {
    pub name: StringId,
    pub alias: Option<StringId>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ImportItem {
    pub path: Vec<ImportSegment>,
    /// `import a/b as c;`
    pub module_alias: Option<StringId>,
    pub one: Option<ImportOne>,
    /// `Some` whenever a `::{ … }` group was written, even an empty one.
    pub group: Option<ImportPairRange>,
}

// Functions

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParamBound {
    pub name: StringId,
    pub type_args: TypeRange,
    pub span: Span,
}

/// `T: A + B<T>` or `const N: int`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParam {
    pub name: StringId,
    pub is_const: bool,
    /// Declared type of a `const` parameter.
    pub const_type: Option<TypeId>,
    pub bounds: TypeParamBoundRange,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FnParam {
    pub name: StringId,
    pub ty: TypeId,
    pub default: Option<ExprId>,
    pub variadic: bool,
    pub attrs: AttrRange,
    pub span: Span,
}

/// Signature shared by fn items, contract methods and extern methods.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FnSig {
    pub name: StringId,
    pub name_span: Span,
    pub type_params: TypeParamRange,
    pub params: FnParamRange,
    /// Always present; an omitted return type is the path `nothing`.
    pub return_type: TypeId,
    pub modifiers: ModifierFlags,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FnItem {
    pub sig: FnSig,
    /// `Block` statement, absent for `fn f();`.
    pub body: Option<StmtId>,
}

// Types

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructField {
    pub name: StringId,
    pub ty: TypeId,
    pub default: Option<ExprId>,
    pub attrs: AttrRange,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnionMemberKind {
    Type,
    Tag,
}

/// `Type`, `nothing`, or a tag constructor `Name(T, …)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnionMember {
    pub kind: UnionMemberKind,
    pub ty: Option<TypeId>,
    pub tag: Option<StringId>,
    pub tag_args: TypeRange,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumVariant {
    pub name: StringId,
    pub value: Option<ExprId>,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeDeclKind {
    Alias,
    Struct,
    Union,
    Enum,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeBody {
    Alias(TypeId),
    Struct {
        base: Option<TypeId>,
        fields: StructFieldRange,
    },
    Union(UnionMemberRange),
    Enum {
        base: Option<TypeId>,
        variants: EnumVariantRange,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeItem {
    pub name: StringId,
    pub name_span: Span,
    pub type_params: TypeParamRange,
    pub body: TypeBody,
}

impl TypeItem {
    pub fn decl_kind(&self) -> TypeDeclKind {
        match self.body {
            TypeBody::Alias(_) => TypeDeclKind::Alias,
            TypeBody::Struct { .. } => TypeDeclKind::Struct,
            TypeBody::Union(_) => TypeDeclKind::Union,
            TypeBody::Enum { .. } => TypeDeclKind::Enum,
        }
    }
}

// Contracts, tags, extern blocks

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ContractMemberKind {
    Field {
        name: StringId,
        ty: TypeId,
    },
    Fn(FnSig),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContractMember {
    pub kind: ContractMemberKind,
    pub attrs: AttrRange,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContractItem {
    pub name: StringId,
    pub name_span: Span,
    pub type_params: TypeParamRange,
    pub members: ContractMemberRange,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TagItem {
    pub name: StringId,
    pub name_span: Span,
    pub type_params: TypeParamRange,
    pub payload: TypeRange,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExternMemberKind {
    Fn { sig: FnSig, body: Option<StmtId> },
    Field { name: StringId, ty: TypeId },
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExternMember {
    pub kind: ExternMemberKind,
    pub attrs: AttrRange,
    pub visibility: Visibility,
    pub span: Span,
}

/// `extern<Target> { … }`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExternItem {
    pub target: TypeId,
    pub members: ExternMemberRange,
}
