//! Error recovery.
//!
//! Every recovery routine takes an explicit stop set. Stop tokens are left
//! in place, except that the top-level and statement resyncs drop the `;`
//! that ends the broken construct.

#[cfg(test)]
mod tests;

use surge_ir::TokenKind;
use tracing::debug;

use crate::Parser;

/// A set of token kinds with O(1) membership. Token discriminants are
/// below 128, so one `u128` covers them all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        TokenSet(self.0 | (1u128 << kind.index()))
    }

    #[must_use]
    pub const fn union(self, other: TokenSet) -> Self {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1u128 << kind.index()) != 0
    }

    pub const fn from_kinds(kinds: &[TokenKind]) -> Self {
        let mut set = TokenSet::EMPTY;
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }
}

/// Where the top-level loop can pick up again.
pub const TOP_LEVEL_SYNC: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Semicolon,
    TokenKind::Fn,
    TokenKind::Let,
    TokenKind::Const,
    TokenKind::Import,
    TokenKind::Type,
    TokenKind::Tag,
    TokenKind::Contract,
    TokenKind::Extern,
    TokenKind::Enum,
    TokenKind::Async,
    TokenKind::Pub,
    TokenKind::Eof,
]);

/// Tokens that begin a statement inside a block.
pub const STMT_START: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Let,
    TokenKind::Const,
    TokenKind::Return,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::Break,
    TokenKind::Continue,
    TokenKind::Signal,
    TokenKind::Fn,
    TokenKind::Type,
    TokenKind::Pub,
]);

/// Statement keywords that make a `{` primary a block rather than a
/// struct or map literal.
pub const BLOCK_START: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Let,
    TokenKind::Const,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::Return,
    TokenKind::Break,
    TokenKind::Continue,
    TokenKind::Compare,
    TokenKind::Select,
    TokenKind::Race,
    TokenKind::Signal,
    TokenKind::LBrace,
]);

/// Separators and closers inside compare/select arm lists.
pub const ARM_SYNC: TokenSet =
    TokenSet::from_kinds(&[TokenKind::Semicolon, TokenKind::RBrace, TokenKind::Eof]);

/// Separators and closers inside delimited lists.
pub const LIST_SYNC: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Comma,
    TokenKind::RParen,
    TokenKind::RBracket,
    TokenKind::RBrace,
    TokenKind::Semicolon,
    TokenKind::Eof,
]);

impl Parser<'_> {
    /// Skip to the next top-level boundary, consuming a `;` found there.
    ///
    /// `since` is the stream position where the failed item started; if
    /// nothing was consumed since then, one token is force-advanced.
    pub(crate) fn resync_top(&mut self, since: u32) {
        let from = self.last_span();
        self.skip_until(TOP_LEVEL_SYNC);
        if self.at(TokenKind::Semicolon) {
            self.bump();
        }
        if self.stream.position() == since && !self.at(TokenKind::Eof) {
            self.bump();
        }
        debug!(from = ?from, to = ?self.last_span(), "resync top");
    }

    /// Skip until a token in `stop` (not consumed) or end of input.
    pub(crate) fn resync_until(&mut self, stop: TokenSet) {
        self.skip_until(stop.with(TokenKind::Eof));
    }

    /// Skip the rest of a broken statement: up to and including a `;`, or up
    /// to a statement starter or a `}` at nesting depth zero.
    pub(crate) fn resync_statement(&mut self) {
        let from = self.last_span();
        let mut depth = 0u32;
        loop {
            let kind = self.peek_kind();
            match kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon if depth == 0 => {
                    self.bump();
                    break;
                }
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket if depth == 0 => break,
                _ if depth == 0 && STMT_START.contains(kind) => break,
                TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => depth -= 1,
                _ => {}
            }
            self.bump();
        }
        debug!(from = ?from, to = ?self.last_span(), "resync statement");
    }

    /// Skip a whole declaration that is not allowed here: up to and
    /// including a `;` at depth zero, or through the `}` that closes its
    /// first brace group.
    pub(crate) fn skip_declaration(&mut self) {
        let mut depth = 0u32;
        loop {
            match self.peek_kind() {
                TokenKind::Eof => break,
                TokenKind::Semicolon if depth == 0 => {
                    self.bump();
                    break;
                }
                TokenKind::RBrace if depth == 0 => break,
                TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        break;
                    }
                }
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
        }
    }

    fn skip_until(&mut self, stop: TokenSet) {
        while !stop.contains(self.peek_kind()) && !self.at(TokenKind::Eof) {
            self.bump();
        }
    }
}
