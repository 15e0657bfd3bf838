//! Category filter for the creations gallery.
//!
//! # Responsibility
//! - Hold the single selected category (or "all").
//! - Derive the gallery items and per-category tab counts.
//! - Drive the cosmetic cross-fade flag raised on category switches.
//!
//! # Invariants
//! - `All` yields the whole collection; any other id yields exactly the items
//!   of that category, in collection order.
//! - Tab counts are computed once and the per-category counts sum to the
//!   collection size.
//! - Re-selecting the active category leaves state untouched.

use crate::filter::{EmptyState, FilterOutcome};
use crate::model::creation::{CreationCategory, CreationItem};
use crate::sync::debounce::Debouncer;
use log::debug;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Empty state shown for a category without items.
pub const NO_CREATIONS: EmptyState = EmptyState {
    title: "No creations yet",
    detail: Some("This category is waiting for creative work. Check back soon for new additions!"),
};

/// Gallery tab id: the aggregate view or one concrete category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryId {
    #[default]
    All,
    Category(CreationCategory),
}

impl CategoryId {
    pub const ALL_ID: &'static str = "all";

    /// Parses a tab id. Unknown or blank values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        CreationCategory::parse(value).map_or(Self::All, Self::Category)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => Self::ALL_ID,
            Self::Category(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(category) => category.label(),
        }
    }

    /// Whether an item of `category` is visible under this tab.
    pub fn includes(self, category: CreationCategory) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CreationCategory> for CategoryId {
    fn from(value: CreationCategory) -> Self {
        Self::Category(value)
    }
}

/// Tab metadata rendered by the category bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub id: CategoryId,
    pub label: &'static str,
    pub count: usize,
}

/// Counts items per tab: `All` first, then every category in tab order.
pub fn count_by_category(items: &[CreationItem]) -> Vec<CategoryMeta> {
    let mut metas = Vec::with_capacity(CreationCategory::ALL.len() + 1);
    metas.push(CategoryMeta {
        id: CategoryId::All,
        label: CategoryId::All.label(),
        count: items.len(),
    });
    for category in CreationCategory::ALL {
        metas.push(CategoryMeta {
            id: CategoryId::Category(category),
            label: category.label(),
            count: items.iter().filter(|item| item.category == category).count(),
        });
    }
    metas
}

/// Items visible under `id`, in collection order.
pub fn items_for_category(items: &[CreationItem], id: CategoryId) -> Vec<&CreationItem> {
    items.iter().filter(|item| id.includes(item.category)).collect()
}

/// Selection state for the creations gallery.
#[derive(Debug)]
pub struct CategoryFilter<'a> {
    items: &'a [CreationItem],
    categories: Vec<CategoryMeta>,
    selected: CategoryId,
    transition: Debouncer<()>,
}

impl<'a> CategoryFilter<'a> {
    /// Creates a filter showing `All`.
    pub fn new(items: &'a [CreationItem], transition: Duration) -> Self {
        Self {
            items,
            categories: count_by_category(items),
            selected: CategoryId::All,
            transition: Debouncer::new(transition),
        }
    }

    pub fn selected(&self) -> CategoryId {
        self.selected
    }

    /// Tab metadata with counts.
    pub fn categories(&self) -> &[CategoryMeta] {
        &self.categories
    }

    /// Switches the active tab and raises the transition flag.
    ///
    /// Returns `false` and changes nothing when `id` is already active.
    pub fn select_category(&mut self, id: CategoryId, now: Instant) -> bool {
        if self.selected == id {
            return false;
        }
        debug!(
            "event=category_select module=filter status=ok from={} to={}",
            self.selected, id
        );
        self.selected = id;
        self.transition.schedule((), now);
        true
    }

    /// Lowers the transition flag once its deadline has passed.
    ///
    /// Returns `true` when the flag was lowered by this call.
    pub fn settle(&mut self, now: Instant) -> bool {
        self.transition.poll(now).is_some()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_pending()
    }

    pub fn transition_deadline(&self) -> Option<Instant> {
        self.transition.due_at()
    }

    /// Drops any pending transition.
    pub fn cancel_transition(&mut self) {
        self.transition.cancel();
    }

    /// Items visible under `id`, independent of the current selection.
    pub fn items_for_category(&self, id: CategoryId) -> Vec<&'a CreationItem> {
        items_for_category(self.items, id)
    }

    /// Items visible under the current selection, with the empty state.
    pub fn visible(&self) -> FilterOutcome<'a, CreationItem> {
        FilterOutcome::from_items(self.items_for_category(self.selected), NO_CREATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::{count_by_category, CategoryFilter, CategoryId};
    use crate::model::creation::{CreationCategory, CreationItem};
    use std::time::{Duration, Instant};

    fn creation(id: &str, category: CreationCategory) -> CreationItem {
        CreationItem {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            category,
            technology: Vec::new(),
            thumbnail: format!("/{id}.png"),
            href: None,
            code_sandbox_url: None,
        }
    }

    fn gallery() -> Vec<CreationItem> {
        vec![
            creation("a1", CreationCategory::Animations),
            creation("r1", CreationCategory::Arts),
            creation("a2", CreationCategory::Animations),
            creation("o1", CreationCategory::Other),
        ]
    }

    #[test]
    fn parse_falls_back_to_all() {
        assert_eq!(CategoryId::parse("arts"), CategoryId::Category(CreationCategory::Arts));
        assert_eq!(CategoryId::parse("all"), CategoryId::All);
        assert_eq!(CategoryId::parse("<script>"), CategoryId::All);
        assert_eq!(CategoryId::All.to_string(), "all");
    }

    #[test]
    fn counts_sum_to_collection_size() {
        let items = gallery();
        let metas = count_by_category(&items);
        assert_eq!(metas[0].count, 4);
        let per_category: usize = metas.iter().skip(1).map(|meta| meta.count).sum();
        assert_eq!(per_category, items.len());
        assert_eq!(metas[4].label, "Other");
    }

    #[test]
    fn empty_category_reports_empty_state() {
        let items = gallery();
        let mut filter = CategoryFilter::new(&items, Duration::from_millis(150));
        filter.select_category(CreationCategory::Graphic.into(), Instant::now());
        let visible = filter.visible();
        assert!(visible.is_empty());
        assert_eq!(visible.empty_state().map(|state| state.title), Some("No creations yet"));
    }

    #[test]
    fn selection_keeps_collection_order() {
        let items = gallery();
        let filter = CategoryFilter::new(&items, Duration::from_millis(150));
        let ids: Vec<&str> = filter
            .items_for_category(CreationCategory::Animations.into())
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[test]
    fn transition_flag_settles_after_delay() {
        let items = gallery();
        let start = Instant::now();
        let mut filter = CategoryFilter::new(&items, Duration::from_millis(150));

        assert!(filter.select_category(CreationCategory::Arts.into(), start));
        assert!(filter.is_transitioning());
        assert!(!filter.settle(start + Duration::from_millis(100)));
        assert!(filter.settle(start + Duration::from_millis(150)));
        assert!(!filter.is_transitioning());
    }
}
