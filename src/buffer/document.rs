// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Line-indexed text model consumed by the partition scanner and auto-indent.
//!
//! Offsets are byte offsets into UTF-8 text. Line numbers are 0-based. Every
//! offset in `[0, len]` belongs to exactly one line; a document ending in a line
//! delimiter has a trailing empty line.

use thiserror::Error;

use crate::edit::TextEdit;

/// Failure of an offset or line computation against a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The offset is past the end of the text or splits a character.
    #[error("offset {offset} is out of range for a document of length {length}")]
    OffsetOutOfRange { offset: usize, length: usize },
    /// The line does not exist.
    #[error("line {line} is out of range for a document of {line_count} lines")]
    LineOutOfRange { line: usize, line_count: usize },
}

/// Result of a document query.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Text with a line index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    /// Start offset of every line; always begins with 0.
    line_starts: Vec<usize>,
}

impl Document {
    /// Line delimiters recognized by the document, longest first.
    pub const LEGAL_LINE_DELIMITERS: [&'static str; 3] = ["\r\n", "\n", "\r"];

    /// Creates a document holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = compute_line_starts(&text);
        Self { text, line_starts }
    }

    /// Returns the whole text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the document holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the character starting at `offset`.
    pub fn char_at(&self, offset: usize) -> DocumentResult<char> {
        self.check_offset(offset)?;
        self.text[offset..].chars().next().ok_or(DocumentError::OffsetOutOfRange {
            offset,
            length: self.len(),
        })
    }

    /// Returns the text of `[offset, offset + length)`.
    pub fn get(&self, offset: usize, length: usize) -> DocumentResult<&str> {
        let end = offset.checked_add(length).ok_or(DocumentError::OffsetOutOfRange {
            offset,
            length: self.len(),
        })?;
        self.check_offset(offset)?;
        self.check_offset(end)?;
        Ok(&self.text[offset..end])
    }

    /// Returns the number of lines. Never zero.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the line containing `offset`. `offset == len()` maps to the last line.
    pub fn line_of_offset(&self, offset: usize) -> DocumentResult<usize> {
        self.check_offset(offset)?;
        Ok(match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        })
    }

    /// Returns the offset of the first character of `line`.
    pub fn line_offset(&self, line: usize) -> DocumentResult<usize> {
        self.line_starts.get(line).copied().ok_or(DocumentError::LineOutOfRange {
            line,
            line_count: self.line_count(),
        })
    }

    /// Returns the length of `line` including its delimiter, if any.
    pub fn line_length(&self, line: usize) -> DocumentResult<usize> {
        let start = self.line_offset(line)?;
        let end = self.line_starts.get(line + 1).copied().unwrap_or(self.len());
        Ok(end - start)
    }

    /// Returns the delimiter terminating `line`, or `None` for the last line.
    pub fn line_delimiter(&self, line: usize) -> DocumentResult<Option<&'static str>> {
        let start = self.line_offset(line)?;
        let end = start + self.line_length(line)?;
        let line_text = &self.text[start..end];
        Ok(Self::LEGAL_LINE_DELIMITERS
            .into_iter()
            .find(|delimiter| line_text.ends_with(delimiter)))
    }

    /// Returns the offset just past the last character of `line`, excluding its delimiter.
    pub fn line_content_end(&self, line: usize) -> DocumentResult<usize> {
        let start = self.line_offset(line)?;
        let delimiter_len = self.line_delimiter(line)?.map_or(0, str::len);
        Ok(start + self.line_length(line)? - delimiter_len)
    }

    /// Replaces `[offset, offset + length)` with `text` and rebuilds the line index.
    pub fn replace(&mut self, offset: usize, length: usize, text: &str) -> DocumentResult<()> {
        self.get(offset, length)?;
        self.text.replace_range(offset..offset + length, text);
        self.line_starts = compute_line_starts(&self.text);
        Ok(())
    }

    /// Applies a [`TextEdit`] produced by the edit strategies.
    pub fn apply(&mut self, edit: &TextEdit) -> DocumentResult<()> {
        self.replace(edit.offset, edit.length, &edit.text)
    }

    fn check_offset(&self, offset: usize) -> DocumentResult<()> {
        if offset <= self.len() && self.text.is_char_boundary(offset) {
            Ok(())
        } else {
            Err(DocumentError::OffsetOutOfRange { offset, length: self.len() })
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

fn compute_line_starts(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut starts = vec![0];
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\r' if bytes.get(pos + 1) == Some(&b'\n') => {
                pos += 2;
                starts.push(pos);
            }
            b'\r' | b'\n' => {
                pos += 1;
                starts.push(pos);
            }
            _ => pos += 1,
        }
    }
    starts
}
