//! Catalog store for catalogdb
//!
//! CRUD plus filtered, sorted, paginated listing over a CSV data file.
//!
//! # Design Principles
//!
//! - The data file is the only state; every call reloads it
//! - Mutations rewrite the whole file through the codec
//! - First match by key wins for get and update
//! - One lock per store serialises each load-mutate-save sequence

mod errors;
mod query;
mod store;

pub use errors::{StoreError, StoreResult};
pub use query::{ListQuery, SortKey, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use store::ProductStore;
