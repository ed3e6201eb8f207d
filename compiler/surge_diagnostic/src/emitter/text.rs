use std::io::Write;

use surge_ir::FileSet;

use crate::{Diagnostic, Severity};

use super::{location, DiagnosticEmitter};

/// Render one diagnostic as plain text.
pub fn render(diagnostic: &Diagnostic, files: &FileSet) -> String {
    let mut out = format!(
        "{}: {}[{}]: {}\n",
        location(files, diagnostic.primary_span),
        diagnostic.severity,
        diagnostic.code,
        diagnostic.message
    );
    if let Some(file) = files.get(diagnostic.primary_span.file) {
        let (line, col) = file.line_col(diagnostic.primary_span.start);
        if let Some(text) = file.line_text(line) {
            let width = diagnostic.primary_span.len().max(1) as usize;
            let gutter = line.to_string();
            out.push_str(&format!("{gutter} | {text}\n"));
            out.push_str(&format!(
                "{} | {}{}\n",
                " ".repeat(gutter.len()),
                " ".repeat(col as usize - 1),
                "^".repeat(width.min(text.len().saturating_sub(col as usize - 1)).max(1))
            ));
        }
    }
    for note in &diagnostic.notes {
        out.push_str(&format!("  note: {} ({})\n", note.text, location(files, note.span)));
    }
    for fix in &diagnostic.fixes {
        let marker = if fix.preferred { " (preferred)" } else { "" };
        out.push_str(&format!(
            "  fix: {} [{}]{marker}\n",
            fix.label,
            fix.applicability.as_str()
        ));
    }
    out
}

/// Plain-text emitter with an error/warning summary.
pub struct TextEmitter<'a, W: Write> {
    writer: W,
    files: &'a FileSet,
    errors: usize,
    warnings: usize,
}

impl<'a, W: Write> TextEmitter<'a, W> {
    pub fn new(writer: W, files: &'a FileSet) -> Self {
        TextEmitter {
            writer,
            files,
            errors: 0,
            warnings: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for TextEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => {}
        }
        let _ = write!(self.writer, "{}", render(diagnostic, self.files));
    }

    fn finish(&mut self) {
        if self.errors + self.warnings > 0 {
            let _ = writeln!(
                self.writer,
                "{} error(s), {} warning(s)",
                self.errors, self.warnings
            );
        }
        let _ = self.writer.flush();
    }
}
