//! The book record and the fixed set the store is seeded with.
use async_graphql::SimpleObject;

/// The books every store built by [`RecordStore::initialize`](crate::RecordStore::initialize)
/// contains.
///
/// Listed in insertion order as `(id, name, page count, author id)`.
pub(crate) const SEED: [(&str, &str, u32, &str); 3] = [
    (
        "book-1",
        "Harry Potter and the Philosopher's Stone",
        223,
        "author-1",
    ),
    ("book-2", "Moby Dick", 635, "author-2"),
    ("book-3", "Interview with the vampire", 371, "author-3"),
];

/// The representation of a book.
// The id is the only lookup key; the other fields are plain data.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Book {
    /// The identifier of the author. Never resolved to an author record.
    pub author_id: String,
    /// The unique identifier of the book.
    pub id: String,
    /// The title of the book.
    pub name: String,
    /// The number of pages in the book.
    pub page_count: u32,
}

impl Book {
    /// Creates a book from its parts.
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        page_count: u32,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            id: id.into(),
            name: name.into(),
            page_count,
        }
    }
}
