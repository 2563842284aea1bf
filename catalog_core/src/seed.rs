use thiserror::Error;

use crate::data::{CategoriesTable, ProductsTable, UsersTable};
use crate::join::{Catalog, JoinError};

const USERS_JSON: &str = include_str!("seed/users.json");
const CATEGORIES_JSON: &str = include_str!("seed/categories.json");
const PRODUCTS_JSON: &str = include_str!("seed/products.json");

/// Error type for building a catalog out of JSON tables.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse the {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Join(#[from] JoinError),
}

fn parse<T: serde::de::DeserializeOwned>(table: &'static str, json: &str) -> Result<T, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse { table, source })
}

impl Catalog {
    /// Parses the three tables from JSON arrays and joins them.
    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, LoadError> {
        let users: UsersTable = parse("users", users)?;
        let categories: CategoriesTable = parse("categories", categories)?;
        let products: ProductsTable = parse("products", products)?;
        Ok(Catalog::join(users, categories, products)?)
    }

    /// The catalog bundled with the crate.
    pub fn seed() -> Result<Self, LoadError> {
        Self::from_json(USERS_JSON, CATEGORIES_JSON, PRODUCTS_JSON)
    }
}
