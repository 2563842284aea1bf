//! The presentation model of the catalog page.
//!
//! Everything here is derived from a [`Catalog`] and the current
//! [`FilterCriteria`]; nothing is stored between renders. Frontends render a
//! [`CatalogView`] as-is and turn clicks into [`FilterEvent`]s.
//!
//! [`FilterEvent`]: crate::state::FilterEvent

use crate::data::{ProductId, Sex};
use crate::join::{Catalog, JoinedRecord};
use crate::state::FilterCriteria;

pub const PAGE_TITLE: &str = "Product Categories";
pub const FILTERS_HEADING: &str = "Filters";
pub const ALL_LABEL: &str = "All";
pub const SEARCH_PLACEHOLDER: &str = "Search";
pub const RESET_ALL_LABEL: &str = "Reset all filters";
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

/// Stable identifiers that automated UI tests select elements by. Frontends
/// put these in the `data-cy` attribute.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum TestId {
    FilterAllUsers,
    FilterUser,
    SearchField,
    ClearButton,
    AllCategories,
    Category,
    ResetAllButton,
    NoMatchingMessage,
    ProductTable,
    SortIcon,
    Product,
    ProductId,
    ProductName,
    ProductCategory,
    ProductUser,
}

impl TestId {
    pub const fn as_str(self) -> &'static str {
        match self {
            TestId::FilterAllUsers => "FilterAllUsers",
            TestId::FilterUser => "FilterUser",
            TestId::SearchField => "SearchField",
            TestId::ClearButton => "ClearButton",
            TestId::AllCategories => "AllCategories",
            TestId::Category => "Category",
            TestId::ResetAllButton => "ResetAllButton",
            TestId::NoMatchingMessage => "NoMatchingMessage",
            TestId::ProductTable => "ProductTable",
            TestId::SortIcon => "SortIcon",
            TestId::Product => "Product",
            TestId::ProductId => "ProductId",
            TestId::ProductName => "ProductName",
            TestId::ProductCategory => "ProductCategory",
            TestId::ProductUser => "ProductUser",
        }
    }
}

/// The icon shown next to a column title.
///
/// Sort icons are decoration only. Clicking them does nothing and no variant
/// ever changes the order of the rows, which is always product order.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum SortIcon {
    Unsorted,
    Descending,
    Ascending,
}

impl SortIcon {
    pub const fn class(self) -> &'static str {
        match self {
            SortIcon::Unsorted => "fas fa-sort",
            SortIcon::Descending => "fas fa-sort-down",
            SortIcon::Ascending => "fas fa-sort-up",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Column {
    pub title: &'static str,
    pub sort_icon: SortIcon,
}

pub const COLUMNS: [Column; 4] = [
    Column { title: "ID", sort_icon: SortIcon::Unsorted },
    Column { title: "Product", sort_icon: SortIcon::Descending },
    Column { title: "Category", sort_icon: SortIcon::Ascending },
    Column { title: "User", sort_icon: SortIcon::Unsorted },
];

/// A tab in the user filter.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UserTab {
    pub name: String,
    pub active: bool,
}

impl UserTab {
    pub fn class(&self) -> &'static str {
        if self.active {
            "is-active"
        } else {
            ""
        }
    }
}

/// A toggle button in the category filter.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CategoryButton {
    pub title: String,
    pub selected: bool,
}

impl CategoryButton {
    pub fn class(&self) -> &'static str {
        if self.selected {
            "button mr-2 my-1 is-info"
        } else {
            "button mr-2 my-1"
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    /// "{icon} - {title}"
    pub category: String,
    pub user: String,
    pub user_class: &'static str,
}

impl From<&JoinedRecord> for ProductRow {
    fn from(record: &JoinedRecord) -> Self {
        let JoinedRecord { product, category, user } = record;
        Self {
            id: product.id,
            name: product.name.clone(),
            category: format!("{} - {}", category.icon, category.title),
            user: user.name.clone(),
            user_class: match user.sex {
                Sex::Male => "has-text-link",
                Sex::Female => "has-text-danger",
            },
        }
    }
}

/// What goes in the table box: either the table or the no-matches message.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TableBody {
    NoMatches,
    Rows(Vec<ProductRow>),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CatalogView {
    pub all_users_active: bool,
    /// One tab per user, in table order.
    pub users: Vec<UserTab>,
    pub all_categories_active: bool,
    /// One button per category, in table order.
    pub categories: Vec<CategoryButton>,
    pub body: TableBody,
}

impl CatalogView {
    pub fn derive(catalog: &Catalog, criteria: &FilterCriteria) -> Self {
        let users = catalog
            .users()
            .iter()
            .map(|user| UserTab { name: user.name.clone(), active: criteria.user.is_named(&user.name) })
            .collect();
        let categories = catalog
            .categories()
            .iter()
            .map(|category| CategoryButton {
                title: category.title.clone(),
                selected: criteria.categories.contains(&category.title),
            })
            .collect();

        let visible = criteria.visible(catalog);
        let body = if visible.is_empty() {
            TableBody::NoMatches
        } else {
            TableBody::Rows(visible.into_iter().map(ProductRow::from).collect())
        };

        Self {
            all_users_active: criteria.user.is_all(),
            users,
            all_categories_active: criteria.categories.is_empty(),
            categories,
            body,
        }
    }

    pub fn all_users_class(&self) -> &'static str {
        if self.all_users_active {
            "is-active"
        } else {
            ""
        }
    }

    pub fn all_categories_class(&self) -> &'static str {
        if self.all_categories_active {
            "button mr-6 is-success"
        } else {
            "button mr-6"
        }
    }

    #[cfg(test)]
    fn rows(&self) -> &[ProductRow] {
        match &self.body {
            TableBody::NoMatches => &[],
            TableBody::Rows(rows) => rows,
        }
    }
}
