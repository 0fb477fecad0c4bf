// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Partitioning of Tart source into code and comment regions.
//!
//! Comment delimiters are matched in priority order at every position of the
//! code region: `/**`, `/*`, `///`, `//`. A comment runs to its end delimiter
//! (block) or through the end of its line (line comments, delimiter included);
//! an unterminated block comment runs to the end of the text. Everything else
//! is [`PartitionKind::Code`].

use std::ops::Range;

use crate::buffer::{Document, DocumentError, DocumentResult};

/// Kind of a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKind {
    /// Source code, the only kind the token scanner and auto-indent look into.
    Code,
    /// `// ...`
    LineComment,
    /// `/// ...`
    DocLineComment,
    /// `/* ... */`
    BlockComment,
    /// `/** ... */`
    DocBlockComment,
}

impl PartitionKind {
    /// Returns a stable tag hosts can key presentation attributes on.
    pub fn name(self) -> &'static str {
        match self {
            PartitionKind::Code => "code",
            PartitionKind::LineComment => "line_comment",
            PartitionKind::DocLineComment => "doc_line_comment",
            PartitionKind::BlockComment => "block_comment",
            PartitionKind::DocBlockComment => "doc_block_comment",
        }
    }

    pub fn is_code(self) -> bool {
        self == PartitionKind::Code
    }

    pub fn is_comment(self) -> bool {
        !self.is_code()
    }

    pub fn is_doc_comment(self) -> bool {
        matches!(self, PartitionKind::DocLineComment | PartitionKind::DocBlockComment)
    }
}

/// A half-open `[start, end)` region of uniform kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    pub kind: PartitionKind,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn new(kind: PartitionKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "partition range must be ordered");
        Self { kind, start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Splits `text` into ordered partitions tiling `[0, text.len())`.
///
/// Empty text yields no partitions.
pub fn classify(text: &str) -> Vec<Partition> {
    let bytes = text.as_bytes();
    let mut partitions = Vec::new();
    let mut code_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match match_comment(bytes, pos) {
            Some((kind, end)) => {
                if code_start < pos {
                    partitions.push(Partition::new(PartitionKind::Code, code_start, pos));
                }
                partitions.push(Partition::new(kind, pos, end));
                pos = end;
                code_start = end;
            }
            None => pos += 1,
        }
    }

    if code_start < bytes.len() {
        partitions.push(Partition::new(PartitionKind::Code, code_start, bytes.len()));
    }
    partitions
}

/// Tries the comment rules at `pos` and returns the matched kind and end offset.
fn match_comment(bytes: &[u8], pos: usize) -> Option<(PartitionKind, usize)> {
    let rest = &bytes[pos..];
    if !rest.starts_with(b"/") {
        return None;
    }
    if rest.starts_with(b"/**") {
        Some((PartitionKind::DocBlockComment, block_end(bytes, pos + 3)))
    } else if rest.starts_with(b"/*") {
        Some((PartitionKind::BlockComment, block_end(bytes, pos + 2)))
    } else if rest.starts_with(b"///") {
        Some((PartitionKind::DocLineComment, line_end(bytes, pos + 3)))
    } else if rest.starts_with(b"//") {
        Some((PartitionKind::LineComment, line_end(bytes, pos + 2)))
    } else {
        None
    }
}

/// Offset past the first `*/` at or after `from`, or the end of the text.
fn block_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .windows(2)
        .position(|pair| pair == b"*/")
        .map_or(bytes.len(), |index| from + index + 2)
}

/// Offset past the first line delimiter at or after `from`, or the end of the text.
fn line_end(bytes: &[u8], from: usize) -> usize {
    let mut pos = from;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\r' if bytes.get(pos + 1) == Some(&b'\n') => return pos + 2,
            b'\r' | b'\n' => return pos + 1,
            _ => pos += 1,
        }
    }
    bytes.len()
}

/// The partitions of one document snapshot, with offset lookups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partitioning {
    partitions: Vec<Partition>,
    length: usize,
}

impl Partitioning {
    /// Classifies the text of `document`.
    pub fn new(document: &Document) -> Self {
        Self::from_text(document.text())
    }

    /// Classifies `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            partitions: classify(text),
            length: text.len(),
        }
    }

    /// Returns the partitions in document order.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Returns the length of the classified text.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the partition containing `offset`.
    ///
    /// The end offset belongs to the last partition; an empty text reports an
    /// empty code partition at 0.
    pub fn partition_at(&self, offset: usize) -> DocumentResult<Partition> {
        if offset > self.length {
            return Err(DocumentError::OffsetOutOfRange { offset, length: self.length });
        }
        let index = self.partitions.partition_point(|p| p.end <= offset);
        Ok(self
            .partitions
            .get(index)
            .or_else(|| self.partitions.last())
            .copied()
            .unwrap_or(Partition::new(PartitionKind::Code, 0, 0)))
    }

    /// Returns the partitions intersecting `range`. An empty range reports the
    /// partition containing its start.
    pub fn overlapping(&self, range: Range<usize>) -> DocumentResult<Vec<Partition>> {
        if range.start > range.end || range.end > self.length {
            return Err(DocumentError::OffsetOutOfRange {
                offset: range.end.max(range.start),
                length: self.length,
            });
        }
        if range.is_empty() {
            return Ok(vec![self.partition_at(range.start)?]);
        }
        let first = self.partitions.partition_point(|p| p.end <= range.start);
        Ok(self.partitions[first..]
            .iter()
            .take_while(|p| p.start < range.end)
            .copied()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(PartitionKind, &str)> {
        classify(text)
            .into_iter()
            .map(|p| (p.kind, &text[p.range()]))
            .collect()
    }

    #[test]
    fn test_doc_block_takes_priority() {
        assert_eq!(kinds("/** x */"), vec![(PartitionKind::DocBlockComment, "/** x */")]);
    }

    #[test]
    fn test_all_comment_kinds() {
        let text = "a /* b */ c /** d */ e // f\ng /// h\ni";
        assert_eq!(
            kinds(text),
            vec![
                (PartitionKind::Code, "a "),
                (PartitionKind::BlockComment, "/* b */"),
                (PartitionKind::Code, " c "),
                (PartitionKind::DocBlockComment, "/** d */"),
                (PartitionKind::Code, " e "),
                (PartitionKind::LineComment, "// f\n"),
                (PartitionKind::Code, "g "),
                (PartitionKind::DocLineComment, "/// h\n"),
                (PartitionKind::Code, "i"),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_runs_to_end() {
        assert_eq!(
            kinds("x /* never\nclosed {"),
            vec![
                (PartitionKind::Code, "x "),
                (PartitionKind::BlockComment, "/* never\nclosed {"),
            ]
        );
    }

    #[test]
    fn test_no_nesting_and_no_escapes() {
        assert_eq!(
            kinds("/* a /* b \\*/ c */"),
            vec![
                (PartitionKind::BlockComment, "/* a /* b \\*/"),
                (PartitionKind::Code, " c */"),
            ]
        );
    }

    #[test]
    fn test_doc_block_end_search_starts_after_opener() {
        assert_eq!(
            kinds("/**/ x = 1; */ y"),
            vec![
                (PartitionKind::DocBlockComment, "/**/ x = 1; */"),
                (PartitionKind::Code, " y"),
            ]
        );
        assert_eq!(kinds("/**/x"), vec![(PartitionKind::DocBlockComment, "/**/x")]);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(PartitionKind::DocLineComment.is_doc_comment());
        assert!(PartitionKind::DocBlockComment.is_doc_comment());
        assert!(!PartitionKind::BlockComment.is_doc_comment());
        assert!(!PartitionKind::Code.is_doc_comment());
        assert!(PartitionKind::LineComment.is_comment());

        let partition = Partition::new(PartitionKind::Code, 2, 5);
        assert!(partition.contains(2));
        assert!(partition.contains(4));
        assert!(!partition.contains(5));
        assert!(!partition.contains(1));
    }

    #[test]
    fn test_line_comment_includes_crlf() {
        assert_eq!(
            kinds("// a\r\nb"),
            vec![(PartitionKind::LineComment, "// a\r\n"), (PartitionKind::Code, "b")]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(classify("").is_empty());
        let partitioning = Partitioning::from_text("");
        assert_eq!(
            partitioning.partition_at(0),
            Ok(Partition::new(PartitionKind::Code, 0, 0))
        );
    }

    #[test]
    fn test_partition_at() {
        let partitioning = Partitioning::from_text("ab/*c*/d");
        assert_eq!(partitioning.partition_at(0).unwrap().kind, PartitionKind::Code);
        assert_eq!(partitioning.partition_at(2).unwrap().kind, PartitionKind::BlockComment);
        assert_eq!(partitioning.partition_at(6).unwrap().kind, PartitionKind::BlockComment);
        assert_eq!(partitioning.partition_at(7).unwrap().kind, PartitionKind::Code);
        assert_eq!(partitioning.partition_at(8).unwrap().kind, PartitionKind::Code);
        assert!(partitioning.partition_at(9).is_err());
    }

    #[test]
    fn test_overlapping() {
        let partitioning = Partitioning::from_text("ab/*c*/d");
        let found = partitioning.overlapping(1..3).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].kind, PartitionKind::BlockComment);
        assert_eq!(partitioning.overlapping(3..3).unwrap().len(), 1);
        assert_eq!(partitioning.overlapping(0..8).unwrap().len(), 3);
        assert!(partitioning.overlapping(0..9).is_err());
    }
}
