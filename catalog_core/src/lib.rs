pub mod data;
pub mod filter;
pub mod join;
pub mod seed;
pub mod state;
pub mod view;

pub use filter::UserFilter;
pub use join::{Catalog, JoinError, JoinedRecord};
pub use seed::LoadError;
pub use state::{FilterCriteria, FilterEvent};
pub use view::CatalogView;
