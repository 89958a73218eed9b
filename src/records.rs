//! The in-memory record store.
use crate::{
    book::{Book, SEED},
    errors::StoreError,
};
use std::{collections::HashSet, slice::Iter};
use tracing::{debug, info};

/// An immutable collection of books, built once and only read afterwards.
///
/// There are no methods taking `&mut self`, so a store can be shared between any number of
/// concurrent readers (typically behind an [`Arc`](std::sync::Arc)) without locking.
#[derive(Clone, Debug)]
pub struct RecordStore {
    /// The books, in insertion order. Identifiers are unique.
    books: Box<[Book]>,
}

impl RecordStore {
    /// Returns the book whose identifier is exactly `id`.
    ///
    /// Matching is case-sensitive and an empty identifier never matches.
    #[inline]
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        let found = self.books.iter().find(|book| book.id == id);
        debug!(id, found = found.is_some(), "record lookup");
        found
    }

    /// Builds the store from the fixed set of books the service ships with.
    #[inline]
    #[must_use]
    pub fn initialize() -> Self {
        let books: Box<[Book]> = SEED
            .iter()
            .map(|&(id, name, page_count, author_id)| Book::new(id, name, page_count, author_id))
            .collect();
        info!(records = books.len(), "record store initialized");
        Self { books }
    }

    /// Whether the store holds no books at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterates over the books in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Book> {
        self.books.iter()
    }

    /// The number of books in the store.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Builds a store from arbitrary books, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] for the first identifier that occurs more than once.
    #[inline]
    pub fn new(books: impl IntoIterator<Item = Book>) -> Result<Self, StoreError> {
        let books: Box<[Book]> = books.into_iter().collect();
        let duplicate = {
            let mut seen = HashSet::with_capacity(books.len());
            books
                .iter()
                .find(|book| !seen.insert(book.id.as_str()))
                .map(|book| book.id.clone())
        };
        if let Some(id) = duplicate {
            return Err(StoreError::DuplicateId { id });
        }
        info!(records = books.len(), "record store built");
        Ok(Self { books })
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type IntoIter = Iter<'a, Book>;
    type Item = &'a Book;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
