use serde::{Deserialize, Serialize};

use super::user::UserId;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    /// A short name for the category, e.g. "Grocery". Matched
    /// case-sensitively by the category filter.
    pub title: String,
    /// An emoji shown next to the title.
    pub icon: String,
    /// The user who owns every product in this category.
    pub owner_id: UserId,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoriesTable {
    categories: Vec<Category>,
}

impl CategoriesTable {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn matching(&self, id: CategoryId) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |category| category.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
