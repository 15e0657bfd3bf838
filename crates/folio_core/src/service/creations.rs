//! Creations gallery page state.
//!
//! # Responsibility
//! - Own the category filter for one mounted creations page.
//! - Derive the tab bar and gallery view.
//!
//! # Invariants
//! - Unmounting drops any pending cross-fade.

use crate::filter::category::{CategoryFilter, CategoryId, CategoryMeta};
use crate::filter::FilterOutcome;
use crate::model::creation::CreationItem;
use log::info;
use std::time::{Duration, Instant};

/// Number of technology badges shown per gallery card.
pub const CARD_TECH_BADGES: usize = 3;

/// One category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTab {
    pub meta: CategoryMeta,
    pub active: bool,
}

/// Everything the creations page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationsView<'a> {
    pub tabs: Vec<CategoryTab>,
    pub selected: CategoryId,
    /// Drives the cosmetic dimming while the gallery cross-fades.
    pub transitioning: bool,
    pub outcome: FilterOutcome<'a, CreationItem>,
}

/// Mounted creations page.
pub struct CreationsPage<'a> {
    filter: CategoryFilter<'a>,
}

impl<'a> CreationsPage<'a> {
    pub fn mount(creations: &'a [CreationItem], transition: Duration) -> Self {
        info!(
            "event=creations_mount module=service status=ok creations={}",
            creations.len()
        );
        Self {
            filter: CategoryFilter::new(creations, transition),
        }
    }

    /// Tab click.
    pub fn select_category(&mut self, id: CategoryId, now: Instant) -> bool {
        self.filter.select_category(id, now)
    }

    /// Event-loop tick: ends the cross-fade once due.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.filter.settle(now)
    }

    pub fn filter(&self) -> &CategoryFilter<'a> {
        &self.filter
    }

    pub fn view(&self) -> CreationsView<'a> {
        let selected = self.filter.selected();
        CreationsView {
            tabs: self
                .filter
                .categories()
                .iter()
                .map(|meta| CategoryTab {
                    meta: *meta,
                    active: meta.id == selected,
                })
                .collect(),
            selected,
            transitioning: self.filter.is_transitioning(),
            outcome: self.filter.visible(),
        }
    }

    pub fn unmount(&mut self) {
        self.filter.cancel_transition();
    }
}

impl Drop for CreationsPage<'_> {
    fn drop(&mut self) {
        self.unmount();
    }
}
