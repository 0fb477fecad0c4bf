// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Performance baseline measurement for the scanners and the auto-indent strategy.
//!
//! Timings are grouped by document size so regressions on large files are not
//! hidden by fast small ones.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::{Duration, Instant};

use crate::buffer::Document;
use crate::edit::AutoIndentStrategy;
use crate::syntax::{Highlighter, Partitioning};

/// Document size categories for performance measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentSizeCategory {
    /// Documents under 10KB
    Small,
    /// Documents 10KB - 100KB
    Medium,
    /// Documents 100KB - 1MB
    Large,
    /// Documents over 1MB
    ExtraLarge,
}

impl DocumentSizeCategory {
    /// Determines the size category for a document length in bytes.
    pub fn from_bytes(bytes: usize) -> Self {
        match bytes {
            0..=10_240 => DocumentSizeCategory::Small,
            10_241..=102_400 => DocumentSizeCategory::Medium,
            102_401..=1_048_576 => DocumentSizeCategory::Large,
            _ => DocumentSizeCategory::ExtraLarge,
        }
    }

    /// Returns the human-readable name of the size category.
    pub fn name(&self) -> &'static str {
        match self {
            DocumentSizeCategory::Small => "Small (< 10KB)",
            DocumentSizeCategory::Medium => "Medium (10KB - 100KB)",
            DocumentSizeCategory::Large => "Large (100KB - 1MB)",
            DocumentSizeCategory::ExtraLarge => "Extra Large (> 1MB)",
        }
    }
}

/// Operation being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Classify,
    Highlight,
    Indent,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Classify => "partition classification",
            Operation::Highlight => "full highlighting",
            Operation::Indent => "newline indentation",
        }
    }

    /// Upper bound for one operation on a document of the given size.
    pub fn budget(&self, category: DocumentSizeCategory) -> Duration {
        let base = match self {
            Operation::Classify => Duration::from_millis(5),
            Operation::Highlight => Duration::from_millis(20),
            Operation::Indent => Duration::from_millis(10),
        };
        match category {
            DocumentSizeCategory::Small => base,
            DocumentSizeCategory::Medium => base * 10,
            DocumentSizeCategory::Large => base * 100,
            DocumentSizeCategory::ExtraLarge => base * 1000,
        }
    }
}

/// Collected timings keyed by operation and document size.
#[derive(Debug, Default)]
pub struct PerformanceMeasurement {
    samples: BTreeMap<(Operation, DocumentSizeCategory), Vec<Duration>>,
    tokens_generated: usize,
}

impl PerformanceMeasurement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one timing.
    pub fn record(&mut self, operation: Operation, document_len: usize, duration: Duration) {
        self.samples
            .entry((operation, DocumentSizeCategory::from_bytes(document_len)))
            .or_default()
            .push(duration);
    }

    /// Times classification, highlighting and a newline at the end of `document`.
    pub fn measure_document(&mut self, document: &Document) {
        let len = document.len();

        let start = Instant::now();
        let partitioning = Partitioning::new(document);
        self.record(Operation::Classify, len, start.elapsed());

        let start = Instant::now();
        let spans = Highlighter::new()
            .highlight(document, &partitioning, 0..len)
            .unwrap_or_default();
        self.record(Operation::Highlight, len, start.elapsed());
        self.tokens_generated += spans.len();

        let start = Instant::now();
        AutoIndentStrategy::default().on_insert_text(document, len, "\n");
        self.record(Operation::Indent, len, start.elapsed());
    }

    /// Average duration of `operation` on documents of `category`.
    pub fn average(&self, operation: Operation, category: DocumentSizeCategory) -> Option<Duration> {
        let times = self.samples.get(&(operation, category))?;
        if times.is_empty() {
            return None;
        }
        Some(times.iter().sum::<Duration>() / times.len() as u32)
    }

    pub fn tokens_generated(&self) -> usize {
        self.tokens_generated
    }

    /// Checks every average against its budget and lists the violations.
    pub fn meets_requirements(&self) -> (bool, Vec<String>) {
        let mut issues = Vec::new();
        for &(operation, category) in self.samples.keys() {
            if let Some(avg) = self.average(operation, category) {
                let budget = operation.budget(category);
                if avg > budget {
                    issues.push(format!(
                        "{} on {} documents averaged {:?} (budget {:?})",
                        operation.name(),
                        category.name(),
                        avg,
                        budget
                    ));
                }
            }
        }
        (issues.is_empty(), issues)
    }

    /// Generates a performance report.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Performance Baseline Report ===\n\n");
        for (&(operation, category), times) in &self.samples {
            if let Some(avg) = self.average(operation, category) {
                let max = times.iter().max().copied().unwrap_or_default();
                let _ = writeln!(
                    report,
                    "{:<26} {:<22} samples: {:>3}  avg: {:>10.3?}  max: {:>10.3?}",
                    operation.name(),
                    category.name(),
                    times.len(),
                    avg,
                    max
                );
            }
        }
        let _ = writeln!(report, "\nTokens generated: {}", self.tokens_generated);
        report
    }
}

/// Builds a Tart source of roughly `target_len` bytes by repeating a sample.
pub fn sample_source(target_len: usize) -> String {
    const SAMPLE: &str = r#"/** A counter that can be shared between tasks. */
public class Counter {
  private var count:int = 0;
  private let mask:uint = 0xFFFF_0000;

  // Adds `delta` and returns the new value.
  @Synchronized
  def add(delta:int) -> int {
    if delta < 0 and not allowNegative {
      throw ArgumentError("negative delta: \"" ++ delta ++ "\"");
    }
    count += delta;
    return count;
  }
}

"#;
    let mut source = String::with_capacity(target_len + SAMPLE.len());
    while source.len() < target_len {
        source.push_str(SAMPLE);
    }
    source
}

/// Measures documents of the given sizes.
pub fn run_baseline_test(sizes: &[usize]) -> PerformanceMeasurement {
    let mut measurement = PerformanceMeasurement::new();
    for &size in sizes {
        let document = Document::new(sample_source(size));
        measurement.measure_document(&document);
    }
    measurement
}
