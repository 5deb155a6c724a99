//! Article store: lifecycle, search, and index durability

mod article_store;
mod consistency;
mod error;


pub use article_store::{ArticleStore, Durability, StoreOptions};
pub use consistency::ConsistencyIssue;
pub use error::{StoreError, StoreResult};
