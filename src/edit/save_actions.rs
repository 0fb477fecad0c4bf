// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Edits applied when a Tart document is saved.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::buffer::{Document, DocumentResult};
use crate::config::EditorConfig;
use crate::edit::text_edit::TextEdit;

/// Spaces and tabs before any line delimiter or the end of the text.
static TRAILING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)[\t ]+$").expect("trailing whitespace pattern is valid"));

/// Deletions of the blanks ending each line, in document order.
pub fn trailing_whitespace_edits(document: &Document) -> Vec<TextEdit> {
    TRAILING_WHITESPACE
        .find_iter(document.text())
        .map(|m| TextEdit::delete(m.start(), m.len()))
        .collect()
}

/// The insertion terminating the last line, if it is not terminated yet.
///
/// Uses the delimiter of the first line so files keep their line ending style.
pub fn final_newline_edit(document: &Document) -> Option<TextEdit> {
    let text = document.text();
    if text.is_empty()
        || Document::LEGAL_LINE_DELIMITERS
            .iter()
            .any(|delimiter| text.ends_with(delimiter))
    {
        return None;
    }
    let delimiter = document.line_delimiter(0).ok().flatten().unwrap_or("\n");
    Some(TextEdit::insert(document.len(), delimiter))
}

/// Returns the save-time edits enabled in `config`, sorted by descending
/// offset so they can be applied one after another.
pub fn edits_on_save(document: &Document, config: &EditorConfig) -> Vec<TextEdit> {
    let mut edits = Vec::new();
    if config.remove_trailing_whitespace {
        edits.extend(trailing_whitespace_edits(document));
    }
    if config.ensure_newline_at_eof {
        edits.extend(final_newline_edit(document));
    }
    edits.sort_by(|a, b| b.offset.cmp(&a.offset));
    debug!(count = edits.len(), "save actions computed");
    edits
}

/// Applies the save-time edits to `document`.
pub fn apply_save_actions(document: &mut Document, config: &EditorConfig) -> DocumentResult<usize> {
    let edits = edits_on_save(document, config);
    for edit in &edits {
        document.apply(edit)?;
    }
    Ok(edits.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_whitespace() {
        let doc = Document::new("a  \nb\t\r\n  \nc ");
        let edits = trailing_whitespace_edits(&doc);
        assert_eq!(
            edits,
            vec![
                TextEdit::delete(1, 2),
                TextEdit::delete(5, 1),
                TextEdit::delete(8, 2),
                TextEdit::delete(12, 1),
            ]
        );
    }

    #[test]
    fn test_final_newline() {
        assert_eq!(final_newline_edit(&Document::new("")), None);
        assert_eq!(final_newline_edit(&Document::new("x\n")), None);
        assert_eq!(final_newline_edit(&Document::new("x")), Some(TextEdit::insert(1, "\n")));
        assert_eq!(
            final_newline_edit(&Document::new("x\r\ny")),
            Some(TextEdit::insert(4, "\r\n"))
        );
    }

    #[test]
    fn test_apply_save_actions() {
        let mut doc = Document::new("def f() {  \n  x;\t\n}  ");
        let applied = apply_save_actions(&mut doc, &EditorConfig::default()).unwrap();
        assert_eq!(applied, 4);
        assert_eq!(doc.text(), "def f() {\n  x;\n}\n");
    }

    #[test]
    fn test_disabled_save_actions() {
        let mut doc = Document::new("x  ");
        let applied = apply_save_actions(&mut doc, &EditorConfig::without_save_actions()).unwrap();
        assert_eq!(applied, 0);
        assert_eq!(doc.text(), "x  ");
    }
}
