// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Damage computation for incremental re-highlighting.
//!
//! After an edit the presentation layer only needs to repaint the region whose
//! partitions or tokens may have changed. Since the token scanner restarts at
//! partition boundaries, that region ends at the first partition boundary after
//! the edit where the old and new partitionings agree again.

use std::ops::Range;

use crate::buffer::{Document, DocumentResult};
use crate::edit::TextEdit;
use crate::syntax::Partitioning;

/// Description of an applied edit, in offsets of the document before the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChange {
    /// Where the change starts
    pub offset: usize,
    /// Number of bytes removed
    pub removed: usize,
    /// Number of bytes inserted
    pub inserted: usize,
}

/// Type of text change that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChangeType {
    Insert,
    Delete,
    Replace,
}

impl TextChange {
    pub fn new(offset: usize, removed: usize, inserted: usize) -> Self {
        Self {
            offset,
            removed,
            inserted,
        }
    }

    /// Creates a change for an insertion.
    pub fn insert(offset: usize, inserted: usize) -> Self {
        Self::new(offset, 0, inserted)
    }

    /// Creates a change for a deletion.
    pub fn delete(offset: usize, removed: usize) -> Self {
        Self::new(offset, removed, 0)
    }

    pub fn change_type(&self) -> TextChangeType {
        match (self.removed, self.inserted) {
            (0, _) => TextChangeType::Insert,
            (_, 0) => TextChangeType::Delete,
            _ => TextChangeType::Replace,
        }
    }

    /// Net change of the document length.
    pub fn length_delta(&self) -> isize {
        self.inserted as isize - self.removed as isize
    }

    /// End of the changed text in the edited document.
    pub fn new_end(&self) -> usize {
        self.offset + self.inserted
    }
}

impl From<&TextEdit> for TextChange {
    fn from(edit: &TextEdit) -> Self {
        Self::new(edit.offset, edit.length, edit.text.len())
    }
}

/// Returns the range of the edited `document` whose presentation must be repaired.
///
/// `old` and `new` are the partitionings before and after the change. The range
/// starts at the beginning of the first changed line and ends at the later of
/// the end of the last changed line and the first re-synchronized partition
/// boundary, or at the end of the document.
pub fn damage_region(
    old: &Partitioning,
    new: &Partitioning,
    document: &Document,
    change: &TextChange,
) -> DocumentResult<Range<usize>> {
    let first_line = document.line_of_offset(change.offset)?;
    let last_line = document.line_of_offset(change.new_end())?;
    let start = document.line_offset(first_line)?;
    let line_end = document.line_content_end(last_line)?;

    let delta = change.length_delta();
    let old_change_end = change.offset + change.removed;
    let resync = new
        .partitions()
        .iter()
        .filter(|p| p.start >= change.new_end())
        .find(|p| {
            let old_start = p.start as isize - delta;
            old_start >= old_change_end as isize
                && old
                    .partition_at(old_start as usize)
                    .is_ok_and(|q| q.start as isize == old_start && q.kind == p.kind)
        })
        .map_or(document.len(), |p| p.start);

    Ok(start..line_end.max(resync).min(document.len()))
}
