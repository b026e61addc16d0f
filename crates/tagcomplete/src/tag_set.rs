//! The ordered set of committed tags.
//!
//! Tags are identified by position, not by text: the same text may appear
//! more than once. The set only changes through [`TagSet::add`] (append) and
//! [`TagSet::remove_at`] (delete at a position, shifting later tags down).

use tagcomplete_core::Signal;
use tagcomplete_core::logging::targets;

use crate::error::TagError;

/// Ordered, insertion-ordered collection of committed tags.
///
/// # Signals
///
/// - `changed(Vec<String>)`: Emitted with the post-mutation snapshot after
///   every successful add or remove.
#[derive(Debug, Default)]
pub struct TagSet {
    tags: Vec<String>,
    changed: Signal<Vec<String>>,
}

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the changed signal.
    pub fn changed(&self) -> &Signal<Vec<String>> {
        &self.changed
    }

    /// Append a tag. Always succeeds.
    ///
    /// The text is stored exactly as given: no trimming and no dedup.
    pub fn add(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(target: targets::TAGS, tag = %text, position = self.tags.len(), "adding tag");
        self.tags.push(text);
        self.changed.emit(self.to_list());
    }

    /// Remove the tag at `index`, returning its text.
    ///
    /// Fails with [`TagError::OutOfRange`] if `index >= len()`; the set is
    /// left untouched in that case.
    pub fn remove_at(&mut self, index: usize) -> Result<String, TagError> {
        if index >= self.tags.len() {
            tracing::warn!(
                target: targets::TAGS,
                index,
                len = self.tags.len(),
                "rejected tag removal"
            );
            return Err(TagError::out_of_range(index, self.tags.len()));
        }

        let removed = self.tags.remove(index);
        tracing::debug!(target: targets::TAGS, tag = %removed, index, "removed tag");
        self.changed.emit(self.to_list());
        Ok(removed)
    }

    /// Snapshot of the tags, in order.
    pub fn to_list(&self) -> Vec<String> {
        self.tags.clone()
    }

    /// Borrow the tags as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// The tag at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tags.get(index).map(String::as_str)
    }

    /// Iterate over the tags in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
