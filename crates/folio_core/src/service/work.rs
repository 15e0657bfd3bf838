//! Work grid page state.
//!
//! # Responsibility
//! - Own the tag selection for one mounted work page.
//! - Seed the selection from the URL on mount and write changes back through
//!   a debounced in-place URL replace.
//! - Derive the pill bar and grid view for the presentation layer.
//!
//! # Invariants
//! - At most one URL write is pending; each selection change supersedes it.
//! - Unmounting (or dropping) the page cancels any pending write.
//! - A write is skipped when the encoded query equals the current URL.

use crate::filter::query::{decode_tags, encode_query};
use crate::filter::tags::{available_tags, filter_outcome, TagSelection};
use crate::filter::FilterOutcome;
use crate::model::project::Project;
use crate::sync::debounce::Debouncer;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Sink for in-place URL query replacement (no navigation, no history entry,
/// no scroll).
pub trait UrlWriter {
    /// Replaces the current query string. `query` is `""` or `?`-prefixed.
    fn replace(&mut self, query: &str);
}

/// Records every replacement; used by hosts without a browser URL bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingUrlWriter {
    pub writes: Vec<String>,
}

impl UrlWriter for RecordingUrlWriter {
    fn replace(&mut self, query: &str) {
        self.writes.push(query.to_string());
    }
}

/// One filter pill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPill<'a> {
    pub label: &'a str,
    pub active: bool,
}

/// Everything the work page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkView<'a> {
    /// State of the leading "All" pill.
    pub all_active: bool,
    pub pills: Vec<TagPill<'a>>,
    pub selected: Vec<&'a str>,
    pub outcome: FilterOutcome<'a, Project>,
}

/// Mounted work page.
pub struct WorkPage<'a, W: UrlWriter> {
    projects: &'a [Project],
    available_tags: Vec<String>,
    selection: TagSelection,
    current_query: String,
    url_sync: Debouncer<String>,
    writer: W,
}

impl<'a, W: UrlWriter> WorkPage<'a, W> {
    /// Mounts the page, reading the initial selection from `initial_query`.
    ///
    /// Malformed query content yields the empty selection. The mounted query
    /// is kept in encoded form so that returning to the mounted selection
    /// does not rewrite an equivalent URL.
    pub fn mount(
        projects: &'a [Project],
        initial_query: &str,
        writer: W,
        url_debounce: Duration,
    ) -> Self {
        let selection = decode_tags(initial_query);
        let current_query = encode_query(initial_query, &selection);
        info!(
            "event=work_mount module=service status=ok projects={} seeded_tags={}",
            projects.len(),
            selection.len()
        );
        Self {
            projects,
            available_tags: available_tags(projects),
            selection,
            current_query,
            url_sync: Debouncer::new(url_debounce),
            writer,
        }
    }

    pub fn selection(&self) -> &TagSelection {
        &self.selection
    }

    pub fn available_tags(&self) -> &[String] {
        &self.available_tags
    }

    /// Desktop pill click: single-select with toggle back to "All".
    pub fn select_tag(&mut self, tag: &str, now: Instant) {
        let changed = self.selection.select_tag(tag);
        self.after_change(changed, now);
    }

    /// Dropdown checkbox click: independent multi-select toggle.
    pub fn toggle_tag(&mut self, tag: &str, now: Instant) {
        let changed = self.selection.toggle_tag(tag);
        self.after_change(changed, now);
    }

    /// Dropdown "Apply" with the full chosen set.
    pub fn set_tags<I, S>(&mut self, tags: I, now: Instant)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let changed = self.selection.set_tags(tags);
        self.after_change(changed, now);
    }

    /// Tag clicked on a project card: filter by exactly that tag.
    pub fn project_tag_clicked(&mut self, tag: &str, now: Instant) {
        self.set_tags([tag], now);
    }

    /// "All" pill or "Clear all".
    pub fn clear_selection(&mut self, now: Instant) {
        let changed = self.selection.clear();
        self.after_change(changed, now);
    }

    /// Projects matching the current selection.
    pub fn filtered(&self) -> FilterOutcome<'a, Project> {
        filter_outcome(self.projects, &self.selection)
    }

    pub fn view(&self) -> WorkView<'_> {
        WorkView {
            all_active: self.selection.is_empty(),
            pills: self
                .available_tags
                .iter()
                .map(|tag| TagPill {
                    label: tag.as_str(),
                    active: self.selection.contains(tag),
                })
                .collect(),
            selected: self.selection.iter().collect(),
            outcome: self.filtered(),
        }
    }

    /// Whether a URL write is waiting for its quiet period.
    pub fn has_pending_url_write(&self) -> bool {
        self.url_sync.is_pending()
    }

    /// Encoded query the page last wrote, or the encoded mount query.
    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    /// Event-loop tick: performs the pending URL write once it is due.
    ///
    /// Returns `true` when the URL was replaced.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(query) = self.url_sync.poll(now) else {
            return false;
        };
        self.write_query(query)
    }

    /// Tears the page down, dropping any pending URL write.
    pub fn unmount(&mut self) {
        if self.url_sync.cancel().is_some() {
            debug!("event=work_unmount module=service status=ok pending_write=cancelled");
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn after_change(&mut self, changed: bool, now: Instant) {
        if !changed {
            return;
        }
        let query = encode_query(&self.current_query, &self.selection);
        debug!(
            "event=work_filter module=service status=ok selected={} query={}",
            self.selection.len(),
            query
        );
        self.url_sync.schedule(query, now);
    }

    fn write_query(&mut self, query: String) -> bool {
        if query == self.current_query {
            return false;
        }
        self.writer.replace(&query);
        self.current_query = query;
        true
    }
}

impl<W: UrlWriter> Drop for WorkPage<'_, W> {
    fn drop(&mut self) {
        self.unmount();
    }
}
