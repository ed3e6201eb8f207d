//! Source registry.
//!
//! The [`FileSet`] owns the text of every file taking part in a build and
//! hands out [`FileId`]s. Spans resolve back to text through it.

use std::fmt;

use crate::{FileId, Span};

/// One registered source file.
pub struct SourceFile {
    id: FileId,
    path: String,
    content: String,
    /// Byte offset of the first character of every line.
    line_starts: Vec<u32>,
}

impl SourceFile {
    fn new(id: FileId, path: String, content: String) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                // Offsets are bounded by the u32 check in `FileSet::add_virtual`.
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "file length checked against u32::MAX on registration"
                )]
                line_starts.push(offset as u32 + 1);
            }
        }
        SourceFile {
            id,
            path,
            content,
            line_starts,
        }
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length of the file in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "file length checked against u32::MAX on registration"
        )]
        let len = self.content.len() as u32;
        len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Span covering the whole file.
    #[inline]
    pub fn full_span(&self) -> Span {
        Span::new(self.id, 0, self.len())
    }

    /// Text under `span`, or `None` when it belongs to another file, is out of
    /// bounds, or splits a UTF-8 sequence.
    pub fn slice(&self, span: Span) -> Option<&str> {
        if span.file != self.id {
            return None;
        }
        self.content.get(span.to_range())
    }

    /// Raw bytes from `offset` to the end of the file.
    pub fn bytes_from(&self, offset: u32) -> &[u8] {
        self.content
            .as_bytes()
            .get(offset as usize..)
            .unwrap_or_default()
    }

    /// One-based `(line, column)` of a byte offset. Columns count bytes.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        #[expect(
            clippy::cast_possible_truncation,
            reason = "line count is bounded by file length, which fits u32"
        )]
        let line_no = line as u32 + 1;
        (line_no, offset - line_start + 1)
    }

    /// Text of the one-based line `line`, without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let idx = usize::try_from(line.checked_sub(1)?).ok()?;
        let start = *self.line_starts.get(idx)? as usize;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.content.len(), |&next| next as usize);
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("len", &self.content.len())
            .finish_non_exhaustive()
    }
}

/// Error when registering a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The file is larger than a span can address.
    TooLarge { path: String, len: usize },
    /// More files than `FileId` can number.
    TooManyFiles,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::TooLarge { path, len } => {
                write!(f, "source file `{path}` is {len} bytes, spans address at most 4 GiB")
            }
            SourceError::TooManyFiles => write!(f, "file set is full"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Registry of source files.
#[derive(Debug, Default)]
pub struct FileSet {
    files: Vec<SourceFile>,
}

impl FileSet {
    pub fn new() -> Self {
        FileSet::default()
    }

    /// Register in-memory content under `path`.
    pub fn add_virtual(
        &mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<FileId, SourceError> {
        let path = path.into();
        let content = content.into();
        if u32::try_from(content.len()).is_err() {
            return Err(SourceError::TooLarge {
                len: content.len(),
                path,
            });
        }
        // Ids are 1-based so that 0 stays the sentinel.
        let raw = u32::try_from(self.files.len() + 1).map_err(|_| SourceError::TooManyFiles)?;
        let id = FileId::from_raw(raw);
        self.files.push(SourceFile::new(id, path, content));
        Ok(id)
    }

    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        let idx = usize::try_from(id.raw().checked_sub(1)?).ok()?;
        self.files.get(idx)
    }

    /// Text under `span`, resolved through its file.
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.get(span.file)?.slice(span)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests;
