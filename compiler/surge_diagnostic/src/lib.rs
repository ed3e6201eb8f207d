//! Surge diagnostics.
//!
//! A [`Diagnostic`] carries a stable [`ErrorCode`], a [`Severity`], a primary
//! span, notes and zero or more [`FixSuggestion`]s made of positional
//! [`TextEdit`]s. The parser pushes diagnostics into a [`DiagnosticBag`],
//! which keeps discovery order and enforces the `max_errors` cap.

mod bag;
mod diagnostic;
pub mod emitter;
mod error_code;
mod fixes;

pub use bag::{DiagnosticBag, DiagnosticBuilder};
pub use diagnostic::{Diagnostic, Note, Severity};
pub use error_code::ErrorCode;
pub use fixes::{apply_edits, Applicability, FixApplyError, FixId, FixKind, FixSuggestion, TextEdit};
