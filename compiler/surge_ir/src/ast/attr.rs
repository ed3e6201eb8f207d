//! Attributes, pragmas, directive blocks and the file node.

use bitflags::bitflags;

use crate::{FileId, Span, StringId};

use super::{ExprRange, ItemId};

/// `@name(args…)`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attr {
    pub name: StringId,
    pub name_span: Span,
    pub args: ExprRange,
    /// Whether a parenthesised argument list was written, even `()`.
    pub has_parens: bool,
    pub span: Span,
}

bitflags! {
    /// Known pragma flags.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct PragmaFlags: u8 {
        const DIRECTIVE = 1 << 0;
        const NO_STD = 1 << 1;
        const STRICT = 1 << 2;
        const UNSAFE = 1 << 3;
    }
}

impl PragmaFlags {
    /// Flag named `name`, if known.
    pub fn from_pragma_name(name: &str) -> Option<Self> {
        match name {
            "directive" => Some(PragmaFlags::DIRECTIVE),
            "no_std" => Some(PragmaFlags::NO_STD),
            "strict" => Some(PragmaFlags::STRICT),
            "unsafe" => Some(PragmaFlags::UNSAFE),
            _ => None,
        }
    }
}

/// One `flag` or `flag(…)` of a pragma.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PragmaEntry {
    pub name: StringId,
    /// Source text of the entry, including any argument list.
    pub raw: StringId,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Pragma {
    pub flags: PragmaFlags,
    pub entries: Vec<PragmaEntry>,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DirectiveLine {
    pub text: StringId,
    pub span: Span,
}

/// `/// Namespace:` followed by `/// Namespace.…` lines.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DirectiveBlock {
    pub namespace: StringId,
    pub lines: Vec<DirectiveLine>,
    pub span: Span,
    /// Item the block documents, filled once that item is parsed.
    pub owner: Option<ItemId>,
}

/// Parsed file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AstFile {
    pub file: FileId,
    pub span: Span,
    /// Items in source order.
    pub items: Vec<ItemId>,
    pub pragma: Option<Pragma>,
    pub directives: Vec<DirectiveBlock>,
}
