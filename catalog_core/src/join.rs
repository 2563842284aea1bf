use thiserror::Error;
use tracing::debug;

use crate::data::{
    CategoriesTable, Category, CategoryId, Product, ProductId, ProductsTable, User, UserId,
    UsersTable,
};

/// A product enriched with its category and the user who owns that category.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct JoinedRecord {
    pub product: Product,
    pub category: Category,
    pub user: User,
}

/// Error type for joining the source tables. Each variant means the source
/// data is inconsistent; none of them can be recovered from at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    #[error("product {product:?} refers to category {category:?}, which does not exist")]
    MissingCategory { product: ProductId, category: CategoryId },
    #[error("product {product:?} refers to category {category:?}, which is defined {count} times")]
    AmbiguousCategory { product: ProductId, category: CategoryId, count: usize },
    #[error("category {category:?} is owned by user {owner:?}, who does not exist")]
    MissingOwner { category: CategoryId, owner: UserId },
    #[error("category {category:?} is owned by user {owner:?}, who is defined {count} times")]
    AmbiguousOwner { category: CategoryId, owner: UserId, count: usize },
}

/// The source tables together with their denormalized join. Once built, a
/// `Catalog` is never modified; changing the source data means building a new
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    users: UsersTable,
    categories: CategoriesTable,
    records: Vec<JoinedRecord>,
}

/// Outcome of looking up an ID that should resolve to exactly one row.
enum Lookup<T> {
    One(T),
    None,
    Many(usize),
}

fn exactly_one<T>(mut matches: impl Iterator<Item = T>) -> Lookup<T> {
    let Some(first) = matches.next() else {
        return Lookup::None;
    };
    let rest = matches.count();
    if rest == 0 {
        Lookup::One(first)
    } else {
        Lookup::Many(rest + 1)
    }
}

impl Catalog {
    /// Resolves every product to its category and that category's owner,
    /// keeping the order of `products`. Fails on the first product whose
    /// category or owner does not resolve to exactly one row.
    pub fn join(
        users: UsersTable,
        categories: CategoriesTable,
        products: ProductsTable,
    ) -> Result<Self, JoinError> {
        let records = products
            .iter()
            .map(|product| {
                let category = match exactly_one(categories.matching(product.category_id)) {
                    Lookup::One(category) => category,
                    Lookup::None => {
                        return Err(JoinError::MissingCategory {
                            product: product.id,
                            category: product.category_id,
                        })
                    }
                    Lookup::Many(count) => {
                        return Err(JoinError::AmbiguousCategory {
                            product: product.id,
                            category: product.category_id,
                            count,
                        })
                    }
                };
                let user = match exactly_one(users.matching(category.owner_id)) {
                    Lookup::One(user) => user,
                    Lookup::None => {
                        return Err(JoinError::MissingOwner {
                            category: category.id,
                            owner: category.owner_id,
                        })
                    }
                    Lookup::Many(count) => {
                        return Err(JoinError::AmbiguousOwner {
                            category: category.id,
                            owner: category.owner_id,
                            count,
                        })
                    }
                };
                Ok(JoinedRecord {
                    product: product.clone(),
                    category: category.clone(),
                    user: user.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            users = users.len(),
            categories = categories.len(),
            records = records.len(),
            "joined catalog tables"
        );

        Ok(Self { users, categories, records })
    }

    /// All joined records, in product order.
    pub fn records(&self) -> &[JoinedRecord] {
        &self.records
    }

    pub fn users(&self) -> &UsersTable {
        &self.users
    }

    pub fn categories(&self) -> &CategoriesTable {
        &self.categories
    }
}
