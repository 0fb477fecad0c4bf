// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Syntax support for Tart sources.
//!
//! The document is first split into comment and code partitions. Code
//! partitions are then tokenized on demand, which keeps re-highlighting local
//! to the partitions touched by an edit.

pub mod highlighter;
pub mod language;
pub mod partition;
pub mod performance;
pub mod scanner;


pub use highlighter::{HighlightKind, HighlightSpan, Highlighter, HighlightingMetrics};
pub use language::{TART_EXTENSION, is_tart_source, keyword_category};
pub use partition::{Partition, PartitionKind, Partitioning, classify};
pub use performance::{
    DocumentSizeCategory, Operation, PerformanceMeasurement, run_baseline_test, sample_source,
};
pub use scanner::{Token, TokenCategory, TokenScanner, tokenize, tokenize_str};
