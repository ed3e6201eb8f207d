//! Ordered collection of diagnostics with an error cap.

use surge_ir::Span;

use crate::{Diagnostic, ErrorCode, FixSuggestion, Severity};

/// Diagnostics of one parse, in discovery order.
///
/// Once `max_errors` errors have been accepted, every further report is
/// dropped silently (warnings and infos included). A cap of 0 means
/// unlimited.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    max_errors: usize,
    dropped: usize,
}

impl DiagnosticBag {
    pub fn new(max_errors: usize) -> Self {
        DiagnosticBag {
            max_errors,
            ..DiagnosticBag::default()
        }
    }

    pub fn unlimited() -> Self {
        Self::new(0)
    }

    /// Whether the error cap has been reached.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.max_errors > 0 && self.error_count >= self.max_errors
    }

    /// Push a finished diagnostic. Returns `false` when it was dropped.
    pub fn report(&mut self, diagnostic: Diagnostic) -> bool {
        if self.is_full() {
            self.dropped += 1;
            return false;
        }
        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    /// Start a diagnostic that can be augmented before [`DiagnosticBuilder::emit`].
    pub fn build(
        &mut self,
        code: ErrorCode,
        severity: Severity,
        span: Span,
        message: impl Into<String>,
    ) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            bag: self,
            diagnostic: Diagnostic::new(code, severity, span, message),
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Reports dropped because of the cap.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Diagnostics carrying `code`.
    pub fn with_code(&self, code: ErrorCode) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

/// A diagnostic under construction, bound to the bag it will be pushed into.
#[must_use = "call `emit()` to report the diagnostic"]
pub struct DiagnosticBuilder<'bag> {
    bag: &'bag mut DiagnosticBag,
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder<'_> {
    pub fn note(mut self, span: Span, text: impl Into<String>) -> Self {
        self.diagnostic = self.diagnostic.with_note(span, text);
        self
    }

    pub fn fix(mut self, fix: FixSuggestion) -> Self {
        self.diagnostic = self.diagnostic.with_fix(fix);
        self
    }

    /// Push into the bag. Returns `false` when the cap dropped it.
    pub fn emit(self) -> bool {
        self.bag.report(self.diagnostic)
    }
}
