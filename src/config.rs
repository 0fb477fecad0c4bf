// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Editing preferences for Tart sources.

/// Configuration consumed by the auto-indent strategy and the save actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Spaces added after a line that opens a block
    pub indent_width: usize,
    /// Whether saving strips spaces and tabs at the end of lines
    pub remove_trailing_whitespace: bool,
    /// Whether saving terminates the last line
    pub ensure_newline_at_eof: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorConfig {
    /// Creates the default configuration: two-space indentation, both save actions on.
    pub fn new() -> Self {
        Self {
            indent_width: 2,
            remove_trailing_whitespace: true,
            ensure_newline_at_eof: true,
        }
    }

    /// Creates a configuration with both save actions disabled.
    pub fn without_save_actions() -> Self {
        Self {
            remove_trailing_whitespace: false,
            ensure_newline_at_eof: false,
            ..Self::new()
        }
    }

    /// Sets the indentation width.
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Returns the text inserted for one extra level of indentation.
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}
