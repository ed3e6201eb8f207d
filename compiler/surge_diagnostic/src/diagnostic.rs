//! The [`Diagnostic`] record.

use std::fmt;

use surge_ir::Span;

use crate::{ErrorCode, FixId, FixSuggestion};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Secondary location with an explanation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Note {
    pub span: Span,
    pub text: String,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub primary_span: Span,
    pub message: String,
    pub notes: Vec<Note>,
    pub fixes: Vec<FixSuggestion>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, severity: Severity, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity,
            primary_span: span,
            message: message.into(),
            notes: Vec::new(),
            fixes: Vec::new(),
        }
    }

    /// Diagnostic at the code's default severity.
    pub fn from_code(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self::new(code, code.default_severity(), span, message)
    }

    pub fn error(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Error, span, message)
    }

    pub fn warning(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Warning, span, message)
    }

    pub fn info(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Info, span, message)
    }

    pub fn with_note(mut self, span: Span, text: impl Into<String>) -> Self {
        self.notes.push(Note {
            span,
            text: text.into(),
        });
        self
    }

    /// Attach a suggestion, stamping its id from this diagnostic's code and
    /// the suggestion's anchor.
    pub fn with_fix(mut self, mut fix: FixSuggestion) -> Self {
        if fix.id == FixId::NONE {
            fix.id = FixId::new(self.code, fix.anchor().unwrap_or(self.primary_span));
        }
        self.fixes.push(fix);
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// First suggestion marked preferred, else the first suggestion.
    pub fn preferred_fix(&self) -> Option<&FixSuggestion> {
        self.fixes
            .iter()
            .find(|fix| fix.preferred)
            .or_else(|| self.fixes.first())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} at {}",
            self.severity, self.code, self.message, self.primary_span
        )
    }
}
