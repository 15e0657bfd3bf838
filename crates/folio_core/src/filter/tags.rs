//! Tag filter engine for the work grid.
//!
//! # Responsibility
//! - Hold the multi-select tag selection and its pill/card/dropdown edits.
//! - Derive the projects whose tags intersect the selection (logical OR).
//! - Derive the available tag list shown as pills.
//!
//! # Invariants
//! - Selected tags are trimmed, non-empty and unique; insertion order is kept.
//! - Matching is exact and case-sensitive, the same as tag display.
//! - Each item appears at most once in a derived view, in collection order.

use crate::filter::{EmptyState, FilterOutcome};
use crate::model::item::DisplayItem;
use std::collections::BTreeSet;

/// Empty state shown when no project carries any selected tag.
pub const NO_MATCHING_PROJECTS: EmptyState = EmptyState {
    title: "No projects found for selected tags",
    detail: None,
};

/// User-controlled set of active tags. Empty means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    tags: Vec<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection, dropping blank values and duplicates.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for tag in tags {
            if let Some(value) = normalize_tag(tag.as_ref()) {
                if !selection.contains(value) {
                    selection.tags.push(value.to_string());
                }
            }
        }
        selection
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value == tag)
    }

    /// Selected tags in the order they were picked.
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Single-select pill click.
    ///
    /// Replaces the selection with `tag`, or clears it when `tag` is already
    /// the sole selected tag. Returns whether the selection changed.
    pub fn select_tag(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };
        if self.tags.len() == 1 && self.tags[0] == tag {
            self.tags.clear();
            return true;
        }
        self.replace_with(Self::from_tags([tag]))
    }

    /// Multi-select toggle. Returns whether the selection changed.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };
        if let Some(position) = self.tags.iter().position(|value| value == tag) {
            self.tags.remove(position);
        } else {
            self.tags.push(tag.to_string());
        }
        true
    }

    /// Replaces the whole selection. Returns whether the selection changed.
    pub fn set_tags<I, S>(&mut self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.replace_with(Self::from_tags(tags))
    }

    /// Resets to "All". Returns whether the selection changed.
    pub fn clear(&mut self) -> bool {
        if self.tags.is_empty() {
            return false;
        }
        self.tags.clear();
        true
    }

    /// Order-insensitive comparison.
    pub fn same_tags(&self, other: &TagSelection) -> bool {
        self.len() == other.len() && self.iter().all(|tag| other.contains(tag))
    }

    /// Whether an item carrying `labels` passes this selection.
    pub fn matches(&self, labels: &[String]) -> bool {
        self.is_empty() || labels.iter().any(|label| self.contains(label))
    }

    fn replace_with(&mut self, next: TagSelection) -> bool {
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}

/// Items matching `selection`, in collection order.
///
/// Returns every item when the selection is empty.
pub fn filter_items<'a, T: DisplayItem>(items: &'a [T], selection: &TagSelection) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selection.matches(item.labels()))
        .collect()
}

/// Same as [`filter_items`] but wrapped with the work grid empty state.
pub fn filter_outcome<'a, T: DisplayItem>(
    items: &'a [T],
    selection: &TagSelection,
) -> FilterOutcome<'a, T> {
    FilterOutcome::from_items(filter_items(items, selection), NO_MATCHING_PROJECTS)
}

/// Deduplicated, sorted union of every item's tags.
pub fn available_tags<T: DisplayItem>(items: &[T]) -> Vec<String> {
    let mut unique = BTreeSet::new();
    for item in items {
        for label in item.labels() {
            if let Some(value) = normalize_tag(label) {
                unique.insert(value.to_string());
            }
        }
    }
    unique.into_iter().collect()
}

fn normalize_tag(tag: &str) -> Option<&str> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
