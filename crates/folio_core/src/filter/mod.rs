//! Client-side listing filters.
//!
//! # Responsibility
//! - Derive filtered views of static listings from user-controlled state.
//! - Report empty results as an explicit empty state, never as an error.
//!
//! # Invariants
//! - A derived view is a pure function of (filter state, collection).
//! - An empty filter state yields the full collection.

pub mod category;
pub mod query;
pub mod tags;

/// Message block rendered when a filter matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub detail: Option<&'static str>,
}

/// Result of applying a filter to a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome<'a, T> {
    /// At least one item matched, in collection order.
    Matches(Vec<&'a T>),
    /// Nothing matched; the presentation layer shows this message instead.
    Empty(EmptyState),
}

impl<'a, T> FilterOutcome<'a, T> {
    /// Wraps matched items, switching to `empty` when there are none.
    pub fn from_items(items: Vec<&'a T>, empty: EmptyState) -> Self {
        if items.is_empty() {
            Self::Empty(empty)
        } else {
            Self::Matches(items)
        }
    }

    /// Matched items; empty slice for the empty state.
    pub fn items(&self) -> &[&'a T] {
        match self {
            Self::Matches(items) => items.as_slice(),
            Self::Empty(_) => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        match self {
            Self::Matches(_) => None,
            Self::Empty(state) => Some(*state),
        }
    }
}
