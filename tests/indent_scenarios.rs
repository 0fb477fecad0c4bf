// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! End-to-end editing scenarios through the crate's entry points.

use tart_edit::edit::apply_save_actions;
use tart_edit::{
    AutoIndentStrategy, Document, EditIntent, EditorConfig, PartitionKind, TextEdit,
    classify_partitions, on_insert_close_brace, on_insert_text,
};

/// Applies `edit` to `text` and returns the result.
fn apply(text: &str, edit: &TextEdit) -> String {
    let mut document = Document::new(text);
    document.apply(edit).unwrap();
    document.text().to_string()
}

#[test]
fn test_enter_before_close_brace_uses_opener_indent() {
    let document = Document::new("if (x) {\n}");
    let edit = on_insert_text(&document, 9, "\n");
    assert_eq!(edit, TextEdit::insert(9, "\n"));
    assert_eq!(apply(document.text(), &edit), "if (x) {\n\n}");
}

#[test]
fn test_enter_after_open_brace_adds_one_level() {
    let document = Document::new("class A {\n  def f() {\n  }\n}");
    let offset = "class A {\n  def f() {".len();
    let edit = on_insert_text(&document, offset, "\n");
    assert_eq!(edit, TextEdit::insert(offset, "\n    "));
}

#[test]
fn test_enter_keeps_crlf_delimiter() {
    let document = Document::new("  while true {\r\n  }");
    let edit = on_insert_text(&document, 14, "\r\n");
    assert_eq!(edit, TextEdit::insert(14, "\r\n    "));
}

#[test]
fn test_enter_inside_comment_does_not_indent() {
    let document = Document::new("  // open {");
    let edit = on_insert_text(&document, document.len(), "\n");
    assert_eq!(edit, TextEdit::insert(document.len(), "\n  "));
}

#[test]
fn test_typed_close_brace_aligns_with_opener() {
    let text = "    if (x) {\n        foo();\n        ";
    let document = Document::new(text);
    let line_start = "    if (x) {\n        foo();\n".len();
    let edit = on_insert_close_brace(&document, text.len());
    assert_eq!(edit, TextEdit::new(line_start, 8, "    }"));
    assert_eq!(apply(text, &edit), "    if (x) {\n        foo();\n    }");
}

#[test]
fn test_typed_close_brace_skips_closed_blocks() {
    let text = "def f() {\n  if x {\n    g();\n  }\n      ";
    let document = Document::new(text);
    let edit = on_insert_close_brace(&document, text.len());
    assert_eq!(apply(text, &edit), "def f() {\n  if x {\n    g();\n  }\n}");
}

#[test]
fn test_typed_close_brace_ignores_braces_in_strings() {
    let text = "def f() {\n  let s = \"{\";\n    ";
    let document = Document::new(text);
    let edit = on_insert_close_brace(&document, text.len());
    assert_eq!(apply(text, &edit), "def f() {\n  let s = \"{\";\n}");
}

#[test]
fn test_host_commands_are_dispatched() {
    let strategy = AutoIndentStrategy::default();
    let document = Document::new("def f() {\n    ");

    assert_eq!(
        EditIntent::from_command(document.len(), 0, "}"),
        Some(EditIntent::CloseBrace { offset: document.len() })
    );
    assert_eq!(
        strategy.customize_command(&document, document.len(), 0, "}"),
        TextEdit::new(10, 4, "}")
    );
    // Replacing a selection is never customized.
    assert_eq!(
        strategy.customize_command(&document, 0, 3, "\n"),
        TextEdit::new(0, 3, "\n")
    );
}

#[test]
fn test_partitions_drive_indentation_and_save() {
    let mut document = Document::new("/** Doc { */\ndef f() {   \n  return 1;\n}");
    let kinds = classify_partitions(&document)
        .partitions()
        .iter()
        .map(|partition| partition.kind)
        .collect::<Vec<_>>();
    assert_eq!(kinds, vec![PartitionKind::DocBlockComment, PartitionKind::Code]);

    let applied = apply_save_actions(&mut document, &EditorConfig::default()).unwrap();
    assert_eq!(applied, 2);
    assert_eq!(document.text(), "/** Doc { */\ndef f() {\n  return 1;\n}\n");
}
