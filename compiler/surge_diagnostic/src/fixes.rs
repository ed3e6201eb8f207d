//! Fix-it suggestions and their application.
//!
//! Edits are positional (byte spans), not tree-based, so a suggestion stays
//! valid across a re-parse of unchanged text. [`apply_edits`] is what
//! `fmt --check`-style consumers and the round-trip tests use to check that
//! a preferred fix actually repairs the source.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use surge_ir::Span;

use crate::ErrorCode;

/// How eagerly a client may apply a suggestion without asking.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum Applicability {
    /// Always correct, e.g. inserting a missing `;`.
    AlwaysSafe,
    /// Correct for the common case; may be wrong for unusual code.
    #[default]
    SafeWithHeuristics,
    /// Changes meaning or needs a choice from the user.
    ManualReview,
}

impl Applicability {
    pub const fn as_str(self) -> &'static str {
        match self {
            Applicability::AlwaysSafe => "AlwaysSafe",
            Applicability::SafeWithHeuristics => "SafeWithHeuristics",
            Applicability::ManualReview => "ManualReview",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FixKind {
    #[default]
    QuickFix,
    Refactor,
    Cleanup,
}

impl FixKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FixKind::QuickFix => "QuickFix",
            FixKind::Refactor => "Refactor",
            FixKind::Cleanup => "Cleanup",
        }
    }
}

/// One positional edit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TextEdit {
    /// Insert `text` at the zero-width span `at`.
    Insert { at: Span, text: String },
    Delete { span: Span },
    Replace { span: Span, text: String },
    DeleteMany { spans: Vec<Span> },
}

impl TextEdit {
    /// First span the edit touches.
    pub fn anchor(&self) -> Option<Span> {
        match self {
            TextEdit::Insert { at: span, .. }
            | TextEdit::Delete { span }
            | TextEdit::Replace { span, .. } => Some(*span),
            TextEdit::DeleteMany { spans } => spans.first().copied(),
        }
    }

    fn push_replacements<'a>(&'a self, out: &mut Vec<(Span, &'a str)>) {
        match self {
            TextEdit::Insert { at, text } => out.push((*at, text)),
            TextEdit::Delete { span } => out.push((*span, "")),
            TextEdit::Replace { span, text } => out.push((*span, text)),
            TextEdit::DeleteMany { spans } => out.extend(spans.iter().map(|&s| (s, ""))),
        }
    }
}

/// Stable suggestion id derived from `(code, anchor span)`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct FixId(u64);

impl FixId {
    pub const NONE: FixId = FixId(0);

    pub fn new(code: ErrorCode, anchor: Span) -> Self {
        let mut hasher = FxHasher::default();
        code.as_str().hash(&mut hasher);
        anchor.file.raw().hash(&mut hasher);
        anchor.start.hash(&mut hasher);
        anchor.end.hash(&mut hasher);
        // Keep 0 free for NONE.
        FixId(hasher.finish() | 1)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A machine-applicable edit set attached to a diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FixSuggestion {
    /// Assigned when the suggestion is attached to a diagnostic.
    pub id: FixId,
    pub label: String,
    pub kind: FixKind,
    pub applicability: Applicability,
    pub preferred: bool,
    pub edits: Vec<TextEdit>,
}

impl FixSuggestion {
    pub fn new(label: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        FixSuggestion {
            id: FixId::NONE,
            label: label.into(),
            kind: FixKind::default(),
            applicability: Applicability::default(),
            preferred: false,
            edits,
        }
    }

    /// Insert `text` at `at`, which should be zero-width.
    pub fn insert(label: impl Into<String>, at: Span, text: impl Into<String>) -> Self {
        Self::new(
            label,
            vec![TextEdit::Insert {
                at,
                text: text.into(),
            }],
        )
    }

    pub fn delete(label: impl Into<String>, span: Span) -> Self {
        Self::new(label, vec![TextEdit::Delete { span }])
    }

    pub fn replace(label: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self::new(
            label,
            vec![TextEdit::Replace {
                span,
                text: text.into(),
            }],
        )
    }

    pub fn delete_many(label: impl Into<String>, spans: Vec<Span>) -> Self {
        Self::new(label, vec![TextEdit::DeleteMany { spans }])
    }

    #[must_use]
    pub fn with_applicability(mut self, applicability: Applicability) -> Self {
        self.applicability = applicability;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: FixKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn preferred(mut self) -> Self {
        self.preferred = true;
        self
    }

    pub fn anchor(&self) -> Option<Span> {
        self.edits.iter().find_map(TextEdit::anchor)
    }

    /// Apply this suggestion's edits to `source`.
    pub fn apply(&self, source: &str) -> Result<String, FixApplyError> {
        apply_edits(source, &self.edits)
    }
}

/// Error when a set of edits cannot be applied.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum FixApplyError {
    OutOfBounds { span: Span, len: usize },
    Overlap { first: Span, second: Span },
    NotCharBoundary { span: Span },
}

impl fmt::Display for FixApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixApplyError::OutOfBounds { span, len } => {
                write!(f, "edit at {span} is outside the {len}-byte source")
            }
            FixApplyError::Overlap { first, second } => {
                write!(f, "edits at {first} and {second} overlap")
            }
            FixApplyError::NotCharBoundary { span } => {
                write!(f, "edit at {span} splits a UTF-8 character")
            }
        }
    }
}

impl std::error::Error for FixApplyError {}

/// Apply `edits` to `source`. Edits may come in any order; they must not
/// overlap, though several insertions may share a position (applied in order).
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> Result<String, FixApplyError> {
    let mut replacements = Vec::with_capacity(edits.len());
    for edit in edits {
        edit.push_replacements(&mut replacements);
    }
    // Stable sort keeps same-position insertions in their given order.
    replacements.sort_by_key(|(span, _)| (span.start, span.end));

    for (span, _) in &replacements {
        if span.end as usize > source.len() {
            return Err(FixApplyError::OutOfBounds {
                span: *span,
                len: source.len(),
            });
        }
        if !source.is_char_boundary(span.start as usize) || !source.is_char_boundary(span.end as usize)
        {
            return Err(FixApplyError::NotCharBoundary { span: *span });
        }
    }
    for pair in replacements.windows(2) {
        let (first, second) = (pair[0].0, pair[1].0);
        if second.start < first.end {
            return Err(FixApplyError::Overlap { first, second });
        }
    }

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for (span, text) in replacements {
        out.push_str(&source[cursor..span.start as usize]);
        out.push_str(text);
        cursor = span.end as usize;
    }
    out.push_str(&source[cursor..]);
    Ok(out)
}
