// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Editor support for the Tart language.
//!
//! * [`syntax`] splits a document into comment and code partitions and
//!   tokenizes the code partitions.
//! * [`edit`] computes brace-aware indentation for typed newlines and closing
//!   braces, plus the edits applied on save.
//! * [`buffer`] holds the document model and the damage computation used for
//!   incremental re-highlighting.

pub mod buffer;
pub mod config;
pub mod edit;
pub mod syntax;

pub use buffer::{Document, DocumentError, DocumentResult};
pub use config::EditorConfig;
pub use edit::{AutoIndentStrategy, EditIntent, TextEdit};
pub use syntax::{Partition, PartitionKind, Partitioning, Token, TokenCategory};

/// Splits `document` into its comment and code partitions.
pub fn classify_partitions(document: &Document) -> Partitioning {
    Partitioning::new(document)
}

/// Returns the edit for inserting `text`, ending in a line delimiter, at `offset`.
pub fn on_insert_text(document: &Document, offset: usize, text: &str) -> TextEdit {
    AutoIndentStrategy::default().on_insert_text(document, offset, text)
}

/// Returns the edit for typing `}` at `offset`.
pub fn on_insert_close_brace(document: &Document, offset: usize) -> TextEdit {
    AutoIndentStrategy::default().on_insert_close_brace(document, offset)
}
