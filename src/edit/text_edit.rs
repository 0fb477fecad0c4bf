// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Edits exchanged with the host editor.

use crate::buffer::Document;

/// Replacement of `[offset, offset + length)` with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextEdit {
    pub offset: usize,
    pub length: usize,
    pub text: String,
}

impl TextEdit {
    pub fn new(offset: usize, length: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            length,
            text: text.into(),
        }
    }

    /// A pure insertion at `offset`.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::new(offset, 0, text)
    }

    /// A pure deletion of `[offset, offset + length)`.
    pub fn delete(offset: usize, length: usize) -> Self {
        Self::new(offset, length, String::new())
    }

    /// Offset just past the replaced range.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn is_insert(&self) -> bool {
        self.length == 0
    }
}

/// A pending insertion that triggers automatic indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    /// Text ending in a line delimiter is inserted at `offset`.
    Newline { offset: usize, text: String },
    /// A single `}` is inserted at `offset`.
    CloseBrace { offset: usize },
}

impl EditIntent {
    /// Classifies a host command replacing `[offset, offset + length)` with
    /// `text`. Returns `None` when no indentation rule applies.
    pub fn from_command(offset: usize, length: usize, text: &str) -> Option<Self> {
        if length != 0 {
            return None;
        }
        if ends_with_delimiter(text) {
            Some(EditIntent::Newline {
                offset,
                text: text.to_owned(),
            })
        } else if text == "}" {
            Some(EditIntent::CloseBrace { offset })
        } else {
            None
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            EditIntent::Newline { offset, .. } | EditIntent::CloseBrace { offset } => *offset,
        }
    }

    /// The edit the host performs when no indentation is applied.
    pub fn default_edit(&self) -> TextEdit {
        match self {
            EditIntent::Newline { offset, text } => TextEdit::insert(*offset, text.clone()),
            EditIntent::CloseBrace { offset } => TextEdit::insert(*offset, "}"),
        }
    }
}

fn ends_with_delimiter(text: &str) -> bool {
    Document::LEGAL_LINE_DELIMITERS
        .iter()
        .any(|delimiter| text.ends_with(delimiter))
}
