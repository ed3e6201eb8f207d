//! Surge IR - shared front-end data structures.
//!
//! - [`Span`] / [`FileId`] / [`FileSet`]: addressable source ranges
//! - [`StringInterner`] / [`StringId`]: interned identifiers and literal text
//! - [`Token`] / [`TokenKind`] / [`Trivia`]: the lexer/parser contract
//! - [`ast`]: arena-allocated items, statements, expressions and types
//!
//! # Design
//!
//! - Intern everything: strings become `StringId(u32)`.
//! - Flatten everything: no `Box<Expr>`, children are `ExprId(u32)` indices.
//! - Every node carries a file-scoped [`Span`].

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod source;
mod span;
mod string_id;
mod token;

pub use interner::{InternError, StringInterner};
pub use source::{FileSet, SourceError, SourceFile};
pub use span::{FileId, Span, SpanError};
pub use string_id::StringId;
pub use token::{Token, TokenKind, Trivia, TriviaKind};
