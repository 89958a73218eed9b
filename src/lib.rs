//! A read-only book lookup service exposed through a GraphQL query API.
//!
//! The [`RecordStore`] is built once at startup and never changes afterwards. The schema built by
//! [`build_schema`] answers `entityById` by reading from it:
//!
//! ```graphql
//! { entityById(id: "book-1") { name } }
//! ```
//!
//! A lookup that matches nothing resolves to `null` rather than an error. Transport is left to the
//! caller; see the `bookshelf-server` crate for an HTTP endpoint.

pub mod book;
pub mod errors;
pub mod queries;
pub mod records;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

pub use book::Book;
pub use errors::StoreError;
pub use queries::Query;
pub use records::RecordStore;

/// The highest complexity a query may have.
///
/// Every selected field counts one, so a lookup of all four fields costs five and a single
/// request can batch twenty of them under aliases.
pub const MAX_QUERY_COMPLEXITY: usize = 100;

/// The deepest selection set a query may nest.
pub const MAX_QUERY_DEPTH: usize = 5;

/// The schema served by the API. Read-only, so there are no mutations or subscriptions.
pub type BookshelfSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builds the schema, with `store` shared by every request it executes.
#[inline]
#[must_use]
pub fn build_schema(store: Arc<RecordStore>) -> BookshelfSchema {
    Schema::build(Query::from(store), EmptyMutation, EmptySubscription)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}
