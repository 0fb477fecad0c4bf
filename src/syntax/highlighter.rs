// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Presentation spans for a document range.
//!
//! Comment partitions become a single span tagged with their partition kind.
//! Code partitions are tokenized from their own start, so the spans reported
//! for any range bounded by partition edges equal the spans of the whole
//! document restricted to that range.

use std::ops::Range;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::buffer::{Document, DocumentResult};
use crate::syntax::partition::{PartitionKind, Partitioning};
use crate::syntax::scanner::{TokenCategory, tokenize};

/// What a span should be painted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Comment(PartitionKind),
    Token(TokenCategory),
}

impl HighlightKind {
    /// Returns the presentation tag of the span.
    pub fn name(self) -> &'static str {
        match self {
            HighlightKind::Comment(kind) => kind.name(),
            HighlightKind::Token(category) => category.name(),
        }
    }
}

/// A highlighted `[start, end)` byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightSpan {
    pub kind: HighlightKind,
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    pub fn new(kind: HighlightKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Performance metrics for highlighting passes.
#[derive(Debug, Clone, Default)]
pub struct HighlightingMetrics {
    /// Total time spent highlighting
    pub total_time: Duration,
    /// Number of highlight passes
    pub passes: usize,
    /// Number of spans produced
    pub spans_generated: usize,
    /// Maximum time for a single pass
    pub max_pass_time: Duration,
}

impl HighlightingMetrics {
    /// Updates metrics with a new highlighting pass.
    pub fn record_pass(&mut self, duration: Duration, span_count: usize) {
        self.total_time += duration;
        self.passes += 1;
        self.spans_generated += span_count;
        if duration > self.max_pass_time {
            self.max_pass_time = duration;
        }
    }

    /// Average time per pass.
    pub fn avg_pass_time(&self) -> Duration {
        if self.passes == 0 {
            Duration::ZERO
        } else {
            self.total_time / self.passes as u32
        }
    }

    /// Resets all metrics to zero.
    pub fn reset(&mut self) {
        *self = Default::default();
    }
}

/// Produces presentation spans and keeps metrics about the work done.
#[derive(Debug, Default)]
pub struct Highlighter {
    metrics: HighlightingMetrics,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the spans intersecting `range`, clipped to it, in document order.
    pub fn highlight(
        &mut self,
        document: &Document,
        partitioning: &Partitioning,
        range: Range<usize>,
    ) -> DocumentResult<Vec<HighlightSpan>> {
        let start_time = Instant::now();
        let mut spans = Vec::new();

        for partition in partitioning.overlapping(range.clone())? {
            if partition.is_empty() {
                continue;
            }
            if partition.kind.is_comment() {
                let (start, end) = (partition.start.max(range.start), partition.end.min(range.end));
                if start < end {
                    spans.push(HighlightSpan::new(HighlightKind::Comment(partition.kind), start, end));
                }
                continue;
            }
            spans.extend(
                tokenize(document, &partition)
                    .skip_while(|token| token.end <= range.start)
                    .take_while(|token| token.start < range.end)
                    .map(|token| {
                        HighlightSpan::new(
                            HighlightKind::Token(token.category),
                            token.start.max(range.start),
                            token.end.min(range.end),
                        )
                    }),
            );
        }

        let duration = start_time.elapsed();
        self.metrics.record_pass(duration, spans.len());
        trace!(?range, spans = spans.len(), ?duration, "highlighted range");
        Ok(spans)
    }

    /// Highlights the whole document.
    pub fn highlight_document(&mut self, document: &Document) -> Vec<HighlightSpan> {
        let partitioning = Partitioning::new(document);
        self.highlight(document, &partitioning, 0..document.len())
            .unwrap_or_default()
    }

    pub fn metrics(&self) -> &HighlightingMetrics {
        &self.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(document: &Document, spans: &[HighlightSpan]) -> Vec<(String, &'static str)> {
        spans
            .iter()
            .map(|s| (document.text()[s.range()].to_string(), s.kind.name()))
            .collect()
    }

    #[test]
    fn test_highlight_document() {
        let doc = Document::new("/// Doc\ndef f() -> int { return 0x1F; } // done");
        let spans = Highlighter::new().highlight_document(&doc);
        assert_eq!(
            names(&doc, &spans),
            vec![
                ("/// Doc\n".to_string(), "doc_line_comment"),
                ("def".to_string(), "declaration_keyword"),
                ("f".to_string(), "identifier"),
                ("(".to_string(), "operator"),
                (")".to_string(), "operator"),
                ("->".to_string(), "operator"),
                ("int".to_string(), "builtin_type"),
                ("{".to_string(), "operator"),
                ("return".to_string(), "statement_keyword"),
                ("0x1F".to_string(), "hex_literal"),
                (";".to_string(), "operator"),
                ("}".to_string(), "operator"),
                ("// done".to_string(), "line_comment"),
            ]
        );
    }

    #[test]
    fn test_highlight_range_clips_spans() {
        let doc = Document::new("let name = /* c */ 1");
        let partitioning = Partitioning::new(&doc);
        let mut highlighter = Highlighter::new();
        let spans = highlighter.highlight(&doc, &partitioning, 6..14).unwrap();
        assert_eq!(
            names(&doc, &spans),
            vec![
                ("me".to_string(), "identifier"),
                ("=".to_string(), "operator"),
                ("/* ".to_string(), "block_comment"),
            ]
        );
        assert!(highlighter.highlight(&doc, &partitioning, 0..99).is_err());
    }

    #[test]
    fn test_highlighting_metrics() {
        let mut metrics = HighlightingMetrics::default();
        metrics.record_pass(Duration::from_millis(10), 5);
        metrics.record_pass(Duration::from_millis(20), 3);
        assert_eq!(metrics.passes, 2);
        assert_eq!(metrics.spans_generated, 8);
        assert_eq!(metrics.max_pass_time, Duration::from_millis(20));
        assert_eq!(metrics.avg_pass_time(), Duration::from_millis(15));
        metrics.reset();
        assert_eq!(metrics.passes, 0);
    }

    #[test]
    fn test_highlighter_records_passes() {
        let mut highlighter = Highlighter::new();
        highlighter.highlight_document(&Document::new("a b"));
        highlighter.highlight_document(&Document::new("c"));
        assert_eq!(highlighter.metrics().passes, 2);
        assert_eq!(highlighter.metrics().spans_generated, 3);
    }
}
