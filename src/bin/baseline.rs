// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Performance baseline for partitioning, highlighting and auto-indent.
//!
//! Runs the pipeline over generated Tart sources of increasing size, prints a
//! report and exits non-zero when an operation exceeds its time budget.
//! Set `RUST_LOG=tart_edit=debug` to see the library's diagnostics.

use std::process::ExitCode;
use std::time::Instant;

use tart_edit::edit::AutoIndentStrategy;
use tart_edit::syntax::{Highlighter, run_baseline_test};
use tart_edit::{Document, EditorConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    println!("=== Tart Editor Support Performance Baseline ===\n");

    let sizes = [1_000, 8_000, 50_000, 200_000, 1_200_000];
    info!(documents = sizes.len(), "running baseline");

    let start_time = Instant::now();
    let measurement = run_baseline_test(&sizes);
    let total_time = start_time.elapsed();

    println!("Baseline test completed in {:.2}s\n", total_time.as_secs_f64());
    println!("{}", measurement.generate_report());

    let (meets_requirements, issues) = measurement.meets_requirements();

    println!("\n=== Line Length Performance ===");
    test_line_lengths();

    println!("\n=== Auto-Indent Scenarios ===");
    test_auto_indent();

    if meets_requirements {
        println!("\nAll performance requirements met.");
        ExitCode::SUCCESS
    } else {
        println!("\nPerformance issues detected:");
        for issue in &issues {
            println!("  - {issue}");
        }
        ExitCode::FAILURE
    }
}

fn test_line_lengths() {
    let mut highlighter = Highlighter::new();
    let extra_long_line = "x + ".repeat(250);
    let lines = [
        "def main() {",
        "public static def combine(first:String, second:Optional[int32], rest:String[]) -> Result[String] {",
        "let veryLongVariableNameForLongLines = someCall().andThen(fn (r) { return r.map(fn (x) { return x.toString(); }); });",
        &extra_long_line,
    ];

    for line in lines {
        let document = Document::new(line);
        let start = Instant::now();
        let spans = highlighter.highlight_document(&document);
        println!(
            "  Line {} chars: {} spans in {}μs",
            line.len(),
            spans.len(),
            start.elapsed().as_micros()
        );
    }
    let metrics = highlighter.metrics();
    println!(
        "  {} passes, {} spans, max pass {:?}",
        metrics.passes, metrics.spans_generated, metrics.max_pass_time
    );
}

fn test_auto_indent() {
    let strategy = AutoIndentStrategy::new(EditorConfig::default());
    let cases = [
        ("newline after `{`", "  if x {", None),
        ("newline after `} else {`", "  } else {", None),
        ("newline before `}`", "def f() {\n}", Some(10)),
        ("`}` on a blank line", "  if x {\n      y();\n      ", None),
    ];

    for (name, text, offset) in cases {
        let document = Document::new(text);
        let offset = offset.unwrap_or(document.len());
        let edit = if name.starts_with('`') {
            strategy.on_insert_close_brace(&document, offset)
        } else {
            strategy.on_insert_text(&document, offset, "\n")
        };
        println!("  {name}: {edit:?}");
    }
}
