//! Diagnostic output.
//!
//! - [`TextEmitter`]: `path:line:col: severity[Code]: message` lines with
//!   the offending source line, notes and fix labels.
//! - [`JsonEmitter`]: one JSON object per diagnostic, fix-its included, for
//!   editors and `fmt --check`-style tools.

mod json;
mod text;

pub use json::JsonEmitter;
pub use text::{render, TextEmitter};

use surge_ir::{FileSet, Span};

use crate::Diagnostic;

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Write any trailer and flush.
    fn finish(&mut self);
}

/// `path:line:col` of the span start, or the raw span when the file is unknown.
pub(crate) fn location(files: &FileSet, span: Span) -> String {
    match files.get(span.file) {
        Some(file) => {
            let (line, col) = file.line_col(span.start);
            format!("{}:{line}:{col}", file.path())
        }
        None => format!("<unknown>:{span}"),
    }
}

pub(crate) fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
