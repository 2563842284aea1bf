use std::collections::BTreeSet;
use std::fmt;

use crate::join::JoinedRecord;

/// Restriction on the owning user of a record.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub enum UserFilter {
    /// No restriction.
    #[default]
    All,
    /// Only records whose user has exactly this name.
    Named(String),
}

impl UserFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, UserFilter::All)
    }

    /// Whether this filter selects exactly the user with the given name.
    pub fn is_named(&self, name: &str) -> bool {
        matches!(self, UserFilter::Named(selected) if selected == name)
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::All => f.write_str("All"),
            UserFilter::Named(name) => f.write_str(name),
        }
    }
}

/// Whether a single record passes all three filters. `text` must already be
/// trimmed and lower-cased; category titles are compared case-sensitively.
pub fn record_matches(
    record: &JoinedRecord,
    user: &UserFilter,
    categories: &BTreeSet<String>,
    text: &str,
) -> bool {
    let user_ok = match user {
        UserFilter::All => true,
        UserFilter::Named(name) => record.user.name == *name,
    };
    let category_ok = categories.is_empty() || categories.contains(&record.category.title);
    let text_ok = text.is_empty() || record.product.name.to_lowercase().contains(text);

    user_ok && category_ok && text_ok
}

/// Returns the records that pass all three filters, in their original order.
pub fn filter<'a>(
    records: &'a [JoinedRecord],
    user: &UserFilter,
    categories: &BTreeSet<String>,
    text: &str,
) -> Vec<&'a JoinedRecord> {
    records
        .iter()
        .filter(|record| record_matches(record, user, categories, text))
        .collect()
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use crate::data::{CategoriesTable, ProductsTable, Sex, UsersTable};
    use crate::join::test::{category, product, sample_catalog, user};
    use crate::join::Catalog;

    use super::*;

    fn names(records: &[&JoinedRecord]) -> Vec<String> {
        records.iter().map(|record| record.product.name.clone()).collect()
    }

    fn set(titles: &[&str]) -> BTreeSet<String> {
        titles.iter().map(|title| title.to_string()).collect()
    }

    #[test]
    fn defaults_return_everything() {
        let catalog = sample_catalog();
        let visible = filter(catalog.records(), &UserFilter::All, &BTreeSet::new(), "");
        assert_eq!(visible, catalog.records().iter().collect::<Vec<_>>());
    }

    #[test]
    fn filters_by_user() {
        let catalog = sample_catalog();
        let visible = filter(
            catalog.records(),
            &UserFilter::Named("Anna".to_string()),
            &BTreeSet::new(),
            "",
        );
        assert_eq!(names(&visible), vec!["Milk", "Bread"]);

        let visible = filter(
            catalog.records(),
            &UserFilter::Named("Nobody".to_string()),
            &BTreeSet::new(),
            "",
        );
        assert!(visible.is_empty());
    }

    #[test]
    fn filters_by_any_selected_category() {
        let catalog = sample_catalog();
        let visible =
            filter(catalog.records(), &UserFilter::All, &set(&["Drinks", "Grocery"]), "");
        assert_eq!(names(&visible), vec!["Milk", "Beer", "Bread"]);
    }

    #[test]
    fn category_titles_are_case_sensitive() {
        let catalog = sample_catalog();
        let visible = filter(catalog.records(), &UserFilter::All, &set(&["grocery"]), "");
        assert!(visible.is_empty());
    }

    #[test]
    fn search_ignores_product_case() {
        let catalog = sample_catalog();
        let visible = filter(catalog.records(), &UserFilter::All, &BTreeSet::new(), "pho");
        assert_eq!(names(&visible), vec!["Phone"]);

        let visible = filter(catalog.records(), &UserFilter::All, &BTreeSet::new(), "l");
        assert_eq!(names(&visible), vec!["Milk", "Laptop"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let catalog = sample_catalog();
        let visible = filter(
            catalog.records(),
            &UserFilter::Named("Roma".to_string()),
            &set(&["Electronics", "Grocery"]),
            "p",
        );
        assert_eq!(names(&visible), vec!["Laptop", "Phone"]);
    }

    #[test]
    fn single_record_example() {
        let catalog = Catalog::join(
            UsersTable::new(vec![user(1, "Roma", Sex::Male)]),
            CategoriesTable::new(vec![category(1, "Electronics", "💻", 1)]),
            ProductsTable::new(vec![product(1, "Laptop", 1)]),
        )
        .unwrap();

        let visible = filter(
            catalog.records(),
            &UserFilter::Named("Roma".to_string()),
            &BTreeSet::new(),
            "",
        );
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].product.name, "Laptop");
        assert_eq!(visible[0].category.title, "Electronics");
        assert_eq!(visible[0].user.name, "Roma");

        let visible = filter(catalog.records(), &UserFilter::All, &BTreeSet::new(), "phone");
        assert!(visible.is_empty());
    }

    #[test]
    fn user_filter_display() {
        assert_eq!(UserFilter::All.to_string(), "All");
        assert_eq!(UserFilter::Named("Max".to_string()).to_string(), "Max");
        assert!(UserFilter::Named("Max".to_string()).is_named("Max"));
        assert!(!UserFilter::All.is_named("All"));
    }

    fn user_filter_strategy() -> impl Strategy<Value = UserFilter> {
        prop_oneof![
            Just(UserFilter::All),
            prop::sample::select(vec!["Roma", "Anna", "Max"])
                .prop_map(|name| UserFilter::Named(name.to_string())),
        ]
    }

    fn categories_strategy() -> impl Strategy<Value = BTreeSet<String>> {
        prop::collection::btree_set(
            prop::sample::select(vec!["Grocery", "Drinks", "Electronics", "Clothes"])
                .prop_map(str::to_string),
            0..4,
        )
    }

    proptest! {
        /// Property: the visible set is an order-preserving subsequence
        #[test]
        fn prop_visible_is_ordered_subset(
            user in user_filter_strategy(),
            categories in categories_strategy(),
            text in "[a-z]{0,3}",
        ) {
            let catalog = sample_catalog();
            let visible = filter(catalog.records(), &user, &categories, &text);

            let mut remaining = catalog.records().iter();
            for record in &visible {
                prop_assert!(remaining.any(|candidate| std::ptr::eq(candidate, *record)));
            }
        }

        /// Property: filtering is deterministic
        #[test]
        fn prop_filter_is_idempotent(
            user in user_filter_strategy(),
            categories in categories_strategy(),
            text in "[a-z]{0,3}",
        ) {
            let catalog = sample_catalog();
            let first = filter(catalog.records(), &user, &categories, &text);
            let second = filter(catalog.records(), &user, &categories, &text);
            prop_assert_eq!(first, second);
        }

        /// Property: every visible record passes each filter on its own
        #[test]
        fn prop_visible_records_match_each_filter(
            user in user_filter_strategy(),
            categories in categories_strategy(),
            text in "[a-z]{0,3}",
        ) {
            let catalog = sample_catalog();
            for record in filter(catalog.records(), &user, &categories, &text) {
                prop_assert!(record_matches(record, &user, &BTreeSet::new(), ""));
                prop_assert!(record_matches(record, &UserFilter::All, &categories, ""));
                prop_assert!(record_matches(record, &UserFilter::All, &BTreeSet::new(), &text));
            }
        }
    }
}
