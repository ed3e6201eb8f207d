//! Modifier pre-pass: the `pub` / `async` run in front of an item head.

use surge_diagnostic::ErrorCode;
use surge_ir::ast::ModifierFlags;
use surge_ir::{Span, TokenKind};

use crate::Parser;

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Modifiers {
    pub flags: ModifierFlags,
    pub span: Option<Span>,
    pub pub_span: Option<Span>,
    pub async_span: Option<Span>,
}

impl Modifiers {
    pub(crate) fn is_empty(&self) -> bool {
        self.span.is_none()
    }
}

/// Tokens a modifier run may be followed by.
fn continues_modifiers(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Pub
            | TokenKind::Async
            | TokenKind::Extern
            | TokenKind::Fn
            | TokenKind::Let
            | TokenKind::Const
            | TokenKind::Type
            | TokenKind::Enum
            | TokenKind::Contract
            | TokenKind::Tag
            | TokenKind::Import
    )
}

impl Parser<'_> {
    /// Consume `pub | async | extern | Ident` tokens in front of a head
    /// keyword. Only `pub` and `async` end up in the flags; everything else
    /// is reported and dropped.
    pub(crate) fn parse_modifiers(&mut self) -> Modifiers {
        let mut mods = Modifiers::default();
        loop {
            let kind = self.peek_kind();
            let next = self.peek_nth_kind(1);
            let span = self.peek_span();
            match kind {
                TokenKind::Pub | TokenKind::Async => {
                    let (flag, slot) = if kind == TokenKind::Pub {
                        (ModifierFlags::PUBLIC, &mut mods.pub_span)
                    } else {
                        (ModifierFlags::ASYNC, &mut mods.async_span)
                    };
                    if mods.flags.contains(flag) {
                        self.bump();
                        self.report_with_delete(
                            ErrorCode::SynUnexpectedToken,
                            span,
                            format!("duplicate modifier `{}`", self.slice(span)),
                            "remove the duplicate",
                        );
                    } else {
                        self.bump();
                        mods.flags |= flag;
                        *slot = Some(span);
                    }
                }
                // `extern<…>` is an extern block, not a modifier.
                TokenKind::Extern if next != TokenKind::Lt => {
                    self.bump();
                    self.report_with_delete(
                        ErrorCode::SynUnexpectedToken,
                        span,
                        "`extern` cannot be used as a modifier",
                        "remove `extern`",
                    );
                }
                TokenKind::Ident if continues_modifiers(next) => {
                    self.bump();
                    let name = self.slice(span);
                    self.report_with_delete(
                        ErrorCode::SynUnexpectedModifier,
                        span,
                        format!("`{name}` is not a modifier; declare it via an attribute"),
                        "remove the modifier",
                    );
                }
                _ => break,
            }
            mods.span = Some(mods.span.map_or(span, |s| s.cover(span)));
        }
        mods
    }

    /// Keep only the `allowed` flags, reporting the rest.
    pub(crate) fn check_modifiers(
        &mut self,
        mods: Modifiers,
        allowed: ModifierFlags,
        item: &str,
    ) -> ModifierFlags {
        if let Some(span) = mods.async_span {
            if !allowed.contains(ModifierFlags::ASYNC) {
                self.report_with_delete(
                    ErrorCode::SynAsyncNotAllowed,
                    span,
                    format!("`async` is not allowed on {item}"),
                    "remove `async`",
                );
            }
        }
        if let Some(span) = mods.pub_span {
            if !allowed.contains(ModifierFlags::PUBLIC) {
                self.report_with_delete(
                    ErrorCode::SynModifierNotAllowed,
                    span,
                    format!("`pub` is not allowed on {item}"),
                    "remove `pub`",
                );
            }
        }
        mods.flags & allowed
    }
}
