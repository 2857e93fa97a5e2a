//! Folio database layer.
//!
//! Repositories for the three record types, the listing query builder, and
//! pagination. All SQL lives here; domain models come from `folio-core`.

pub mod db;
pub mod page;
pub mod query;

pub use db::content::{BlogRepository, ContactRepository, VideoRepository};
pub use page::Page;
pub use query::{ContentQuery, ListParams, PredicateBuilder, SqlPredicate};

/// Embedded migrations, applied at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
