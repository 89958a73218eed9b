//! Error types used by the record store.

use thiserror::Error;

/// Errors that may occur when building a [`RecordStore`](crate::RecordStore).
///
/// Only stores built from arbitrary records can fail. Looking a record up never fails; a missing
/// record is reported as [`None`].
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// Two records share an identifier, which would make lookups ambiguous.
    #[error("Duplicate record identifier \"{id}\".")]
    DuplicateId {
        /// The identifier that occurred more than once.
        id: String,
    },
}
