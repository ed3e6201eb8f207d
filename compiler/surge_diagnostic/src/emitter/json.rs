use std::io::Write;

use surge_ir::{FileSet, Span};

use crate::{Diagnostic, TextEdit};

use super::{escape_json, DiagnosticEmitter};

/// Emits a JSON array of diagnostics. Spans are written as byte offsets plus
/// the one-based line/column of their start.
pub struct JsonEmitter<'a, W: Write> {
    writer: W,
    files: &'a FileSet,
    count: usize,
}

impl<'a, W: Write> JsonEmitter<'a, W> {
    pub fn new(writer: W, files: &'a FileSet) -> Self {
        JsonEmitter {
            writer,
            files,
            count: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn span_json(&self, span: Span) -> String {
        let (line, col) = self
            .files
            .get(span.file)
            .map_or((0, 0), |file| file.line_col(span.start));
        format!(
            "{{\"file\":{},\"start\":{},\"end\":{},\"line\":{line},\"column\":{col}}}",
            span.file.raw(),
            span.start,
            span.end
        )
    }

    fn edit_json(&self, edit: &TextEdit) -> String {
        match edit {
            TextEdit::Insert { at, text } => format!(
                "{{\"kind\":\"Insert\",\"span\":{},\"text\":\"{}\"}}",
                self.span_json(*at),
                escape_json(text)
            ),
            TextEdit::Delete { span } => {
                format!("{{\"kind\":\"Delete\",\"span\":{}}}", self.span_json(*span))
            }
            TextEdit::Replace { span, text } => format!(
                "{{\"kind\":\"Replace\",\"span\":{},\"text\":\"{}\"}}",
                self.span_json(*span),
                escape_json(text)
            ),
            TextEdit::DeleteMany { spans } => {
                let spans: Vec<String> = spans.iter().map(|s| self.span_json(*s)).collect();
                format!("{{\"kind\":\"DeleteMany\",\"spans\":[{}]}}", spans.join(","))
            }
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let notes: Vec<String> = diagnostic
            .notes
            .iter()
            .map(|note| {
                format!(
                    "{{\"span\":{},\"text\":\"{}\"}}",
                    self.span_json(note.span),
                    escape_json(&note.text)
                )
            })
            .collect();
        let fixes: Vec<String> = diagnostic
            .fixes
            .iter()
            .map(|fix| {
                let edits: Vec<String> = fix.edits.iter().map(|e| self.edit_json(e)).collect();
                format!(
                    "{{\"id\":\"{:016x}\",\"label\":\"{}\",\"kind\":\"{}\",\"applicability\":\"{}\",\"preferred\":{},\"edits\":[{}]}}",
                    fix.id.raw(),
                    escape_json(&fix.label),
                    fix.kind.as_str(),
                    fix.applicability.as_str(),
                    fix.preferred,
                    edits.join(",")
                )
            })
            .collect();
        let separator = if self.count == 0 { "[" } else { "," };
        let _ = writeln!(
            self.writer,
            "{separator}{{\"code\":\"{}\",\"number\":\"{}\",\"severity\":\"{}\",\"message\":\"{}\",\"span\":{},\"notes\":[{}],\"fixes\":[{}]}}",
            diagnostic.code.as_str(),
            diagnostic.code.number(),
            diagnostic.severity,
            escape_json(&diagnostic.message),
            self.span_json(diagnostic.primary_span),
            notes.join(","),
            fixes.join(",")
        );
        self.count += 1;
    }

    fn finish(&mut self) {
        let closing = if self.count == 0 { "[]" } else { "]" };
        let _ = writeln!(self.writer, "{closing}");
        let _ = self.writer.flush();
    }
}
