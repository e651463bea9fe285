//! Ordered accumulation of tags across files.

use crate::tag::Tag;

/// Append-only sequence of tags shared across every file in a run.
///
/// The collector is an explicit context value threaded through
/// extraction rather than global state. Its accumulate/flush lifecycle
/// is enforced by ownership: [`TagCollector::into_sorted`] consumes the
/// collector, so appending after the flush does not compile.
#[derive(Debug, Default)]
pub struct TagCollector {
    tags: Vec<Tag>,
}

impl TagCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one tag. Duplicates are kept; two files defining the same
    /// name both appear in the output.
    pub fn append(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Consume the collector and return its tags ordered by their full
    /// rendered form (byte-wise over the tab-joined line, not field by
    /// field). Relative order of byte-identical renderings is
    /// unspecified.
    pub fn into_sorted(self) -> Vec<Tag> {
        let mut tags = self.tags;
        tags.sort_by_cached_key(|tag| tag.render());
        tags
    }
}
