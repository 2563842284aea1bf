use std::collections::BTreeSet;

use tracing::trace;

use crate::filter::{self, UserFilter};
use crate::join::{Catalog, JoinedRecord};

/// The filters currently applied to the catalog. Every field starts out
/// unrestricted.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct FilterCriteria {
    pub user: UserFilter,
    /// Titles of the selected categories. Empty means every category.
    pub categories: BTreeSet<String>,
    /// The search text, already trimmed and lower-cased.
    pub search: String,
}

/// A user interaction that changes the filter criteria.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FilterEvent {
    /// Show products of every user.
    SelectAllUsers,
    /// Show only products owned by the user with this name.
    SelectUser(String),
    /// Add the category with this title to the selection, or remove it if it
    /// is already selected.
    ToggleCategory(String),
    /// Show products of every category.
    SelectAllCategories,
    /// The raw contents of the search box.
    Search(String),
    ClearSearch,
    ResetAll,
}

/// Normalizes raw search box input into the form the filter expects.
pub fn normalize_search(input: &str) -> String {
    input.trim().to_lowercase()
}

impl FilterEvent {
    /// The text the search box should hold after this event, or `None` if the
    /// event leaves the box alone. Leading whitespace and case are normalized
    /// right away; trailing whitespace is kept so that words can still be
    /// typed. The result always normalizes to the search text the event
    /// produces.
    pub fn search_box_text(&self) -> Option<String> {
        match self {
            FilterEvent::Search(input) => Some(input.trim_start().to_lowercase()),
            FilterEvent::ClearSearch | FilterEvent::ResetAll => Some(String::new()),
            _ => None,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the event to the criteria. Returns whether anything changed;
    /// when it returns false the visible set does not need recomputing.
    pub fn apply(&mut self, event: FilterEvent) -> bool {
        trace!(?event, "applying filter event");
        match event {
            FilterEvent::SelectAllUsers => self.select_user(UserFilter::All),
            FilterEvent::SelectUser(name) => self.select_user(UserFilter::Named(name)),
            FilterEvent::ToggleCategory(title) => {
                if !self.categories.remove(&title) {
                    self.categories.insert(title);
                }
                true
            }
            FilterEvent::SelectAllCategories => {
                if self.categories.is_empty() {
                    false
                } else {
                    self.categories.clear();
                    true
                }
            }
            FilterEvent::Search(input) => {
                let search = normalize_search(&input);
                if self.search == search {
                    false
                } else {
                    self.search = search;
                    true
                }
            }
            FilterEvent::ClearSearch => {
                if self.search.is_empty() {
                    false
                } else {
                    self.search.clear();
                    true
                }
            }
            FilterEvent::ResetAll => {
                if self.is_default() {
                    false
                } else {
                    *self = Self::default();
                    true
                }
            }
        }
    }

    fn select_user(&mut self, user: UserFilter) -> bool {
        // selecting the active user does nothing
        if self.user == user {
            return false;
        }
        self.user = user;
        true
    }

    /// Derives the visible records of the catalog under these criteria.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a JoinedRecord> {
        let visible = filter::filter(catalog.records(), &self.user, &self.categories, &self.search);
        trace!(visible = visible.len(), total = catalog.records().len(), "recomputed visible set");
        visible
    }
}
