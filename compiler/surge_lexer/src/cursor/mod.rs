//! Byte cursor over a window of the source buffer.
//!
//! The cursor reads bytes in `[pos, end)`. Reading at or past `end` yields
//! `0`, so scanning loops terminate without explicit bounds checks. Interior
//! NUL bytes are told apart from the end of the window by [`Cursor::is_eof`].

#[cfg(test)]
mod tests;

pub(crate) struct Cursor<'src> {
    bytes: &'src [u8],
    pos: u32,
    end: u32,
}

impl<'src> Cursor<'src> {
    /// Cursor over `bytes[start..end]`; `end` is clamped to the buffer.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files are capped at u32::MAX bytes by the file set"
    )]
    pub(crate) fn new(bytes: &'src [u8], start: u32, end: u32) -> Self {
        let end = end.min(bytes.len() as u32);
        Cursor {
            bytes,
            pos: start.min(end),
            end,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.peek(0)
    }

    #[inline]
    pub(crate) fn peek(&self, n: u32) -> u8 {
        let at = self.pos.saturating_add(n);
        if at < self.end {
            self.bytes[at as usize]
        } else {
            0
        }
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_n(1);
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.end);
    }

    /// Advance while `pred` holds for the current byte.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past one UTF-8 character.
    pub(crate) fn advance_char(&mut self) {
        let width = match self.current() {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.advance_n(width);
    }

    fn remaining(&self) -> &'src [u8] {
        &self.bytes[self.pos as usize..self.end as usize]
    }

    /// Advance to the next `\n` (not consumed) or to the end of the window.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by the window length, which fits in u32"
    )]
    pub(crate) fn eat_until_newline(&mut self) {
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.end,
        }
        // A `\r` directly before the newline belongs to the line break.
        if self.pos < self.end && self.pos > 0 && self.bytes[self.pos as usize - 1] == b'\r' {
            self.pos -= 1;
        }
    }

    /// Advance past the closing `*/` of a block comment whose opener has
    /// already been consumed. Returns `false` when the window ends first.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by the window length, which fits in u32"
    )]
    pub(crate) fn eat_block_comment_body(&mut self) -> bool {
        match memchr::memmem::find(self.remaining(), b"*/") {
            Some(offset) => {
                self.pos += offset as u32 + 2;
                true
            }
            None => {
                self.pos = self.end;
                false
            }
        }
    }

    /// Advance to the next `"` or `\`, returning the byte found, or `None`
    /// when the window ends first.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by the window length, which fits in u32"
    )]
    pub(crate) fn skip_to_string_delim(&mut self) -> Option<u8> {
        match memchr::memchr2(b'"', b'\\', self.remaining()) {
            Some(offset) => {
                self.pos += offset as u32;
                Some(self.current())
            }
            None => {
                self.pos = self.end;
                None
            }
        }
    }

    /// Like [`Cursor::skip_to_string_delim`] but also stops at braces, for
    /// the literal parts of f-strings.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by the window length, which fits in u32"
    )]
    pub(crate) fn skip_to_fstring_delim(&mut self) -> Option<u8> {
        let rest = self.remaining();
        let quote = memchr::memchr2(b'"', b'\\', rest);
        let brace = memchr::memchr2(b'{', b'}', rest);
        let offset = match (quote, brace) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };
        match offset {
            Some(offset) => {
                self.pos += offset as u32;
                Some(self.current())
            }
            None => {
                self.pos = self.end;
                None
            }
        }
    }
}
