// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Brace-aware automatic indentation.
//!
//! Two insertions are customized:
//!
//! * a line delimiter: the new line copies the indentation of the current line,
//!   plus one level when the text before the cursor opens more braces than it
//!   closes. Directly before a `}` the new line instead takes the indentation
//!   of the line holding the matching `{`.
//! * a `}` typed as the first non-blank character of a line: the line is
//!   re-indented to the line holding the matching `{`.
//!
//! Braces are only counted inside code partitions and outside quoted literals.
//! Any offset failure leaves the insertion untouched.

use tracing::debug;

use crate::buffer::{Document, DocumentError, DocumentResult};
use crate::config::EditorConfig;
use crate::edit::text_edit::{EditIntent, TextEdit};
use crate::syntax::partition::Partitioning;

/// Computes the edits for line-delimiter and closing-brace insertions.
#[derive(Debug, Clone, Default)]
pub struct AutoIndentStrategy {
    config: EditorConfig,
}

impl AutoIndentStrategy {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Customizes a raw host command replacing `[offset, offset + length)` with `text`.
    pub fn customize_command(
        &self,
        document: &Document,
        offset: usize,
        length: usize,
        text: &str,
    ) -> TextEdit {
        match EditIntent::from_command(offset, length, text) {
            Some(intent) => self.customize(document, &intent),
            None => TextEdit::new(offset, length, text),
        }
    }

    /// Customizes one pending insertion.
    pub fn customize(&self, document: &Document, intent: &EditIntent) -> TextEdit {
        match intent {
            EditIntent::Newline { offset, text } => self.on_insert_text(document, *offset, text),
            EditIntent::CloseBrace { offset } => self.on_insert_close_brace(document, *offset),
        }
    }

    /// Returns the edit for inserting `text`, which ends in a line delimiter, at `offset`.
    pub fn on_insert_text(&self, document: &Document, offset: usize, text: &str) -> TextEdit {
        if document.is_empty() {
            return TextEdit::insert(offset, text);
        }
        let partitioning = Partitioning::new(document);
        match self.indent_after_newline(document, &partitioning, offset, text) {
            Ok(text) => TextEdit::insert(offset, text),
            Err(err) => {
                debug!(offset, %err, "newline indentation skipped");
                TextEdit::insert(offset, text)
            }
        }
    }

    /// Returns the edit for typing `}` at `offset`.
    pub fn on_insert_close_brace(&self, document: &Document, offset: usize) -> TextEdit {
        if document.is_empty() {
            return TextEdit::insert(offset, "}");
        }
        let partitioning = Partitioning::new(document);
        match self.indent_close_brace(document, &partitioning, offset) {
            Ok(Some(edit)) => edit,
            Ok(None) => TextEdit::insert(offset, "}"),
            Err(err) => {
                debug!(offset, %err, "closing brace indentation skipped");
                TextEdit::insert(offset, "}")
            }
        }
    }

    fn indent_after_newline(
        &self,
        document: &Document,
        partitioning: &Partitioning,
        offset: usize,
        text: &str,
    ) -> DocumentResult<String> {
        let line = document.line_of_offset(clamp_to_last_char(document, offset))?;
        let mut buf = String::from(text);

        if offset < document.len() && document.char_at(offset)? == '}' {
            let indent_line =
                find_matching_open_brace(document, partitioning, line, offset, 0)?.unwrap_or(line);
            buf.push_str(indent_of_line(document, indent_line)?);
        } else {
            let start = document.line_offset(line)?;
            let white_end = find_end_of_whitespace(document, start, offset)?;
            buf.push_str(document.get(start, white_end - start)?);
            if nesting_delta(document, partitioning, start, offset, true)? > 0 {
                buf.push_str(&self.config.indent_unit());
            }
        }
        Ok(buf)
    }

    fn indent_close_brace(
        &self,
        document: &Document,
        partitioning: &Partitioning,
        offset: usize,
    ) -> DocumentResult<Option<TextEdit>> {
        let line = document.line_of_offset(clamp_to_last_char(document, offset))?;
        let start = document.line_offset(line)?;
        let white_end = find_end_of_whitespace(document, start, offset)?;

        // Only re-indent when nothing but blanks precede the brace.
        if white_end != offset {
            return Ok(None);
        }
        match find_matching_open_brace(document, partitioning, line, offset, 1)? {
            Some(indent_line) if indent_line != line => {
                let mut text = indent_of_line(document, indent_line)?.to_owned();
                text.push_str(document.get(white_end, offset - white_end)?);
                text.push('}');
                Ok(Some(TextEdit::new(start, offset - start, text)))
            }
            _ => Ok(None),
        }
    }
}

/// Inserting at the very end is attributed to the line of the last character.
fn clamp_to_last_char(document: &Document, offset: usize) -> usize {
    if offset == document.len() {
        let mut pos = offset.saturating_sub(1);
        while !document.text().is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    } else {
        offset
    }
}

/// Finds the line holding the `{` that encloses the text of `line` up to `line_end`.
///
/// `bias` counts closing braces about to be inserted that are not yet in the
/// document. Returns `None` when the count never recovers.
pub fn find_matching_open_brace(
    document: &Document,
    partitioning: &Partitioning,
    line: usize,
    line_end: usize,
    bias: isize,
) -> DocumentResult<Option<usize>> {
    let mut line = line;
    let line_start = document.line_offset(line)?;
    let mut count = nesting_delta(document, partitioning, line_start, line_end, false)? - bias;

    while count < 0 {
        if line == 0 {
            return Ok(None);
        }
        line -= 1;
        let start = document.line_offset(line)?;
        let end = document.line_content_end(line)?;
        count += nesting_delta(document, partitioning, start, end, false)?;
    }
    Ok(Some(line))
}

/// Returns the net number of `{` over `}` in `[start, end)`.
///
/// Comment partitions and quoted literals are skipped; a backslash inside a
/// literal escapes the next character. With `skip_leading_close`, closing
/// braces are ignored until the first opening brace.
pub fn nesting_delta(
    document: &Document,
    partitioning: &Partitioning,
    start: usize,
    end: usize,
    skip_leading_close: bool,
) -> DocumentResult<isize> {
    if start > end || end > document.len() {
        return Err(DocumentError::OffsetOutOfRange {
            offset: end.max(start),
            length: document.len(),
        });
    }

    let bytes = document.text().as_bytes();
    let mut skip_leading_close = skip_leading_close;
    let mut count = 0;
    let mut pos = start;
    let mut partition = partitioning.partition_at(pos)?;
    if !partition.kind.is_code() {
        pos = partition.end;
    }

    while pos < end {
        if pos >= partition.end {
            partition = partitioning.partition_at(pos)?;
            if !partition.kind.is_code() {
                pos = partition.end;
                continue;
            }
        }

        let ch = bytes[pos];
        pos += 1;
        match ch {
            b'{' => {
                count += 1;
                skip_leading_close = false;
            }
            b'}' if !skip_leading_close => count -= 1,
            b'"' | b'\'' => pos = literal_end(bytes, pos, end, ch),
            _ => {}
        }
    }
    Ok(count)
}

/// Offset past the closing `quote` of a literal whose body starts at `pos`, or `end`.
fn literal_end(bytes: &[u8], mut pos: usize, end: usize, quote: u8) -> usize {
    while pos < end {
        let ch = bytes[pos];
        pos += 1;
        if ch == b'\\' {
            pos += 1;
        } else if ch == quote {
            return pos;
        }
    }
    end
}

/// Returns the offset of the first character in `[start, end)` that is not a
/// space or tab, or `end`.
pub fn find_end_of_whitespace(
    document: &Document,
    start: usize,
    end: usize,
) -> DocumentResult<usize> {
    let length = end.checked_sub(start).ok_or(DocumentError::OffsetOutOfRange {
        offset: start,
        length: document.len(),
    })?;
    let text = document.get(start, length)?;
    Ok(start + text.len() - text.trim_start_matches([' ', '\t']).len())
}

/// Returns the leading blanks of `line`.
pub fn indent_of_line(document: &Document, line: usize) -> DocumentResult<&str> {
    let start = document.line_offset(line)?;
    let end = document.line_content_end(line)?;
    let white_end = find_end_of_whitespace(document, start, end)?;
    document.get(start, white_end - start)
}
