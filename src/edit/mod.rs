// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Edit customization: automatic indentation and save actions.

pub mod auto_indent;
pub mod save_actions;
pub mod text_edit;

pub use auto_indent::{
    AutoIndentStrategy, find_end_of_whitespace, find_matching_open_brace, indent_of_line,
    nesting_delta,
};
pub use save_actions::{apply_save_actions, edits_on_save};
pub use text_edit::{EditIntent, TextEdit};
