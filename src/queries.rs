//! The query root. Every operation the API offers is a method on [`Query`].
use crate::{book::Book, records::RecordStore};
use async_graphql::Object;
use std::sync::Arc;

/// The root of all GraphQL queries.
#[derive(Clone, Debug)]
pub struct Query {
    /// The store all lookups read from.
    store: Arc<RecordStore>,
}

impl From<Arc<RecordStore>> for Query {
    #[inline]
    fn from(value: Arc<RecordStore>) -> Self {
        Self { store: value }
    }
}

#[Object]
impl Query {
    /// Same as `entityById`, under the name older clients use.
    async fn book_by_id(&self, id: String) -> Option<&Book> {
        self.store.find_by_id(&id)
    }

    /// Looks up a single book by its identifier.
    ///
    /// Returns `null` when no book matches; a missing book is not an error.
    async fn entity_by_id(&self, id: String) -> Option<&Book> {
        self.store.find_by_id(&id)
    }
}
