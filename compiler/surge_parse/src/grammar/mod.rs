//! Grammar productions, as `impl Parser` blocks split by syntactic area.

mod attr;
mod directive;
mod expr;
mod item;
mod modifiers;
mod stmt;
mod ty;

pub(crate) use attr::ParsedAttrs;
pub(crate) use modifiers::Modifiers;
