pub mod category;
pub mod product;
pub mod user;

pub use category::{CategoriesTable, Category, CategoryId};
pub use product::{Product, ProductId, ProductsTable};
pub use user::{Sex, User, UserId, UsersTable};
