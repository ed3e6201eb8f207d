//! Append-only node storage.
//!
//! One [`AstArena`] holds every node of every file parsed into it. Node
//! constructors write the payload and hand out the id in a single step, so
//! no id ever refers to an unwritten slot. Variadic children are pushed in
//! bulk into auxiliary vectors and referenced by range.

use crate::{Span, StringId};

use super::{
    Attr, AttrRange, AstFile, Binding, CompareArm, CompareArmRange, ContractItem, ContractMember,
    ContractMemberRange, EnumVariant, EnumVariantRange, Expr, ExprId, ExprKind, ExprRange,
    ExternItem, ExternMember, ExternMemberRange, FieldInit, FieldInitRange, FileNodeId, FnItem,
    FnParam, FnParamRange, FnTypeParam, FnTypeParamRange, ImportItem, ImportPair,
    ImportPairRange, Item, ItemId, ItemKind, MapEntry, MapEntryRange, PathSegment,
    PathSegmentRange, SelectArm, SelectArmRange, Stmt, StmtId, StmtKind, StmtRange,
    StructField, StructFieldRange, TagItem, TypeExpr, TypeId, TypeItem, TypeKind, TypeParam,
    TypeParamBound, TypeParamBoundRange, TypeParamRange, TypeRange, UnionMember,
    UnionMemberRange, Visibility,
};

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("AST arena exceeded u32::MAX entries"))
}

/// Generates a bulk allocator and a slice accessor per auxiliary list.
macro_rules! aux_lists {
    ($($field:ident: $elem:ty => $range:ident, $alloc:ident, $get:ident;)*) => {
        impl AstArena {
            $(
                /// Append `items` contiguously and return their range.
                pub fn $alloc(&mut self, items: impl IntoIterator<Item = $elem>) -> $range {
                    let start = to_u32(self.$field.len());
                    self.$field.extend(items);
                    $range::new(start, to_u32(self.$field.len()) - start)
                }

                #[inline]
                pub fn $get(&self, range: $range) -> &[$elem] {
                    &self.$field[range.to_range()]
                }
            )*
        }
    };
}

/// Storage for files, items, statements, expressions, types and their
/// auxiliary lists.
#[derive(Debug, Default)]
pub struct AstArena {
    files: Vec<AstFile>,
    items: Vec<Item>,
    stmts: Vec<Stmt>,
    exprs: Vec<Expr>,
    types: Vec<TypeExpr>,

    expr_lists: Vec<ExprId>,
    stmt_lists: Vec<StmtId>,
    type_lists: Vec<TypeId>,
    attrs: Vec<Attr>,
    fn_params: Vec<FnParam>,
    type_params: Vec<TypeParam>,
    type_param_bounds: Vec<TypeParamBound>,
    path_segments: Vec<PathSegment>,
    fn_type_params: Vec<FnTypeParam>,
    field_inits: Vec<FieldInit>,
    map_entries: Vec<MapEntry>,
    compare_arms: Vec<CompareArm>,
    select_arms: Vec<SelectArm>,
    import_pairs: Vec<ImportPair>,
    struct_fields: Vec<StructField>,
    union_members: Vec<UnionMember>,
    enum_variants: Vec<EnumVariant>,
    contract_members: Vec<ContractMember>,
    extern_members: Vec<ExternMember>,
}

impl AstArena {
    pub fn new() -> Self {
        AstArena::default()
    }

    // Constructors

    pub fn new_file(&mut self, file: AstFile) -> FileNodeId {
        self.files.push(file);
        FileNodeId::from_index(self.files.len() - 1)
    }

    pub fn new_item(
        &mut self,
        kind: ItemKind,
        span: Span,
        keyword_span: Span,
        visibility: Visibility,
        attrs: AttrRange,
    ) -> ItemId {
        self.items.push(Item {
            kind,
            span,
            keyword_span,
            visibility,
            attrs,
        });
        ItemId::from_index(self.items.len() - 1)
    }

    pub fn new_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.stmts.push(Stmt { kind, span });
        StmtId::from_index(self.stmts.len() - 1)
    }

    pub fn new_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.exprs.push(Expr { kind, span });
        ExprId::from_index(self.exprs.len() - 1)
    }

    pub fn new_type(&mut self, kind: TypeKind, span: Span) -> TypeId {
        self.types.push(TypeExpr { kind, span });
        TypeId::from_index(self.types.len() - 1)
    }

    /// Single-segment path type without generics, e.g. `nothing`.
    pub fn new_simple_path_type(&mut self, name: StringId, span: Span) -> TypeId {
        let segments = self.alloc_path_segments([PathSegment {
            name,
            generics: TypeRange::EMPTY,
            span,
        }]);
        self.new_type(TypeKind::Path(segments), span)
    }

    // Headers

    #[track_caller]
    pub fn file(&self, id: FileNodeId) -> &AstFile {
        &self.files[id.index()]
    }

    #[track_caller]
    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    #[track_caller]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[track_caller]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[track_caller]
    pub fn ty(&self, id: TypeId) -> &TypeExpr {
        &self.types[id.index()]
    }

    /// Same as [`expr`](Self::expr) but tolerates `NONE` and foreign ids.
    pub fn get_expr(&self, id: ExprId) -> Option<&Expr> {
        id.is_valid().then(|| self.exprs.get(id.index())).flatten()
    }

    // Item downcasts

    pub fn import_item(&self, id: ItemId) -> Option<&ImportItem> {
        match &self.item(id).kind {
            ItemKind::Import(item) => Some(item),
            _ => None,
        }
    }

    pub fn let_item(&self, id: ItemId) -> Option<&Binding> {
        match &self.item(id).kind {
            ItemKind::Let(binding) => Some(binding),
            _ => None,
        }
    }

    pub fn const_item(&self, id: ItemId) -> Option<&Binding> {
        match &self.item(id).kind {
            ItemKind::Const(binding) => Some(binding),
            _ => None,
        }
    }

    pub fn fn_item(&self, id: ItemId) -> Option<&FnItem> {
        match &self.item(id).kind {
            ItemKind::Fn(item) => Some(item),
            _ => None,
        }
    }

    pub fn type_item(&self, id: ItemId) -> Option<&TypeItem> {
        match &self.item(id).kind {
            ItemKind::Type(item) => Some(item),
            _ => None,
        }
    }

    pub fn contract_item(&self, id: ItemId) -> Option<&ContractItem> {
        match &self.item(id).kind {
            ItemKind::Contract(item) => Some(item),
            _ => None,
        }
    }

    pub fn tag_item(&self, id: ItemId) -> Option<&TagItem> {
        match &self.item(id).kind {
            ItemKind::Tag(item) => Some(item),
            _ => None,
        }
    }

    pub fn extern_item(&self, id: ItemId) -> Option<&ExternItem> {
        match &self.item(id).kind {
            ItemKind::Extern(item) => Some(item),
            _ => None,
        }
    }

    /// Statements of a `Block` statement.
    pub fn block_stmts(&self, id: StmtId) -> Option<&[StmtId]> {
        match self.stmt(id).kind {
            StmtKind::Block(range) => Some(self.stmt_list(range)),
            _ => None,
        }
    }
}

aux_lists! {
    expr_lists: ExprId => ExprRange, alloc_exprs, expr_list;
    stmt_lists: StmtId => StmtRange, alloc_stmts, stmt_list;
    type_lists: TypeId => TypeRange, alloc_types, type_list;
    attrs: Attr => AttrRange, alloc_attrs, attrs;
    fn_params: FnParam => FnParamRange, alloc_fn_params, fn_params;
    type_params: TypeParam => TypeParamRange, alloc_type_params, type_params;
    type_param_bounds: TypeParamBound => TypeParamBoundRange, alloc_type_param_bounds, type_param_bounds;
    path_segments: PathSegment => PathSegmentRange, alloc_path_segments, path_segments;
    fn_type_params: FnTypeParam => FnTypeParamRange, alloc_fn_type_params, fn_type_params;
    field_inits: FieldInit => FieldInitRange, alloc_field_inits, field_inits;
    map_entries: MapEntry => MapEntryRange, alloc_map_entries, map_entries;
    compare_arms: CompareArm => CompareArmRange, alloc_compare_arms, compare_arms;
    select_arms: SelectArm => SelectArmRange, alloc_select_arms, select_arms;
    import_pairs: ImportPair => ImportPairRange, alloc_import_pairs, import_pairs;
    struct_fields: StructField => StructFieldRange, alloc_struct_fields, struct_fields;
    union_members: UnionMember => UnionMemberRange, alloc_union_members, union_members;
    enum_variants: EnumVariant => EnumVariantRange, alloc_enum_variants, enum_variants;
    contract_members: ContractMember => ContractMemberRange, alloc_contract_members, contract_members;
    extern_members: ExternMember => ExternMemberRange, alloc_extern_members, extern_members;
}

#[cfg(test)]
mod tests;
