//! File-scoped source spans.
//!
//! A [`Span`] names a byte range inside one registered file. Every AST node,
//! token, note and fix-it edit carries one, so consumers can resolve any
//! reported location back to source text through the [`FileSet`](crate::FileSet).

use std::fmt;

/// Identifier of a file registered in a [`FileSet`](crate::FileSet).
///
/// `FileId::NONE` is reserved and never handed out by the file set.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct FileId(u32);

impl FileId {
    /// Reserved "no file" sentinel.
    pub const NONE: FileId = FileId(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        FileId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "FileId({})", self.0)
        } else {
            write!(f, "FileId(NONE)")
        }
    }
}

/// Error when building a span from a `usize` range that does not fit in `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Start offset exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// End offset exceeds `u32::MAX`.
    EndTooLarge(usize),
    /// End lies before start.
    Inverted { start: usize, end: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => write!(f, "span start {v} exceeds u32::MAX"),
            SpanError::EndTooLarge(v) => write!(f, "span end {v} exceeds u32::MAX"),
            SpanError::Inverted { start, end } => {
                write!(f, "span end {end} lies before start {start}")
            }
        }
    }
}

impl std::error::Error for SpanError {}

/// Byte range `[start, end)` inside one file.
///
/// Layout: 12 bytes (`file`, `start`, `end` as `u32`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub file: FileId,
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span attached to no file, used before a file is known.
    pub const DUMMY: Span = Span {
        file: FileId::NONE,
        start: 0,
        end: 0,
    };

    #[inline]
    pub const fn new(file: FileId, start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Span { file, start, end }
    }

    /// Build a span from a `usize` byte range.
    pub fn try_from_range(
        file: FileId,
        range: std::ops::Range<usize>,
    ) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        if end < start {
            return Err(SpanError::Inverted {
                start: range.start,
                end: range.end,
            });
        }
        Ok(Span { file, start, end })
    }

    /// Empty span at `offset`.
    #[inline]
    pub const fn point(file: FileId, offset: u32) -> Self {
        Span {
            file,
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Smallest span enclosing both `self` and `other`.
    ///
    /// Spans from different files do not combine; `self` is returned as is.
    #[inline]
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        if self.file != other.file {
            return self;
        }
        Span {
            file: self.file,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Zero-width span at the start boundary.
    #[inline]
    #[must_use]
    pub const fn zero_at_start(self) -> Span {
        Span::point(self.file, self.start)
    }

    /// Zero-width span at the end boundary. Insertion fix-its anchor here.
    #[inline]
    #[must_use]
    pub const fn zero_at_end(self) -> Span {
        Span::point(self.file, self.end)
    }

    /// Grow the end by `by` bytes.
    #[inline]
    #[must_use]
    pub const fn extend_right(self, by: u32) -> Span {
        Span {
            file: self.file,
            start: self.start,
            end: self.end.saturating_add(by),
        }
    }

    /// Move the start left by `by` bytes, clamped at offset 0.
    #[inline]
    #[must_use]
    pub const fn shift_left(self, by: u32) -> Span {
        Span {
            file: self.file,
            start: self.start.saturating_sub(by),
            end: self.end,
        }
    }

    /// Whether `offset` falls inside `[start, end)`.
    #[inline]
    pub const fn contains(self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Whether `other` lies entirely within `self` (same file, nested range).
    #[inline]
    pub fn contains_span(self, other: Span) -> bool {
        self.file == other.file && self.start <= other.start && other.end <= self.end
    }

    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.file.0, self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 12);
}

#[cfg(test)]
mod tests {
    use super::*;

    const F: FileId = FileId::from_raw(1);

    #[test]
    fn test_cover_is_smallest_enclosing() {
        let a = Span::new(F, 10, 20);
        let b = Span::new(F, 15, 30);
        assert_eq!(a.cover(b), Span::new(F, 10, 30));
        assert_eq!(b.cover(a), Span::new(F, 10, 30));
    }

    #[test]
    fn test_cover_ignores_other_file() {
        let a = Span::new(F, 10, 20);
        let b = Span::new(FileId::from_raw(2), 0, 50);
        assert_eq!(a.cover(b), a);
    }

    #[test]
    fn test_zero_width_boundaries() {
        let s = Span::new(F, 4, 9);
        assert_eq!(s.zero_at_start(), Span::point(F, 4));
        assert_eq!(s.zero_at_end(), Span::point(F, 9));
        assert!(s.zero_at_end().is_empty());
    }

    #[test]
    fn test_extend_and_shift() {
        let s = Span::new(F, 4, 9);
        assert_eq!(s.extend_right(3), Span::new(F, 4, 12));
        assert_eq!(s.shift_left(2), Span::new(F, 2, 9));
        assert_eq!(s.shift_left(100), Span::new(F, 0, 9));
    }

    #[test]
    fn test_contains_span() {
        let outer = Span::new(F, 0, 10);
        assert!(outer.contains_span(Span::new(F, 0, 10)));
        assert!(outer.contains_span(Span::point(F, 10)));
        assert!(!outer.contains_span(Span::new(F, 5, 11)));
        assert!(!outer.contains_span(Span::new(FileId::from_raw(2), 1, 2)));
        assert!(outer.contains(9));
        assert!(!outer.contains(10));
    }

    #[test]
    fn test_try_from_range() {
        assert_eq!(Span::try_from_range(F, 1..3), Ok(Span::new(F, 1, 3)));
        assert!(matches!(
            Span::try_from_range(F, 3..1),
            Err(SpanError::Inverted { .. })
        ));
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            Span::try_from_range(F, 0..(u32::MAX as usize + 1)),
            Err(SpanError::EndTooLarge(_))
        ));
    }

    #[test]
    fn test_file_id_sentinel() {
        assert!(!FileId::NONE.is_valid());
        assert!(F.is_valid());
        assert_eq!(format!("{:?}", FileId::NONE), "FileId(NONE)");
    }
}
