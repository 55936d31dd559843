//! Boundary to the external, address-based structured store.
//!
//! The store signals policy denial in-band: a denied insert returns the
//! empty address and a denied update or delete returns [`DENIED_RESULT`].
//! Repositories translate these sentinels into
//! [`OperationResult`](crate::OperationResult) and nothing above them ever
//! sees a raw address or row count.
//!
//! Every call blocks for a full store round trip; keep them off
//! latency-sensitive threads.

mod memory;
mod row;
mod uri;

pub use memory::{MemoryStore, Permission};
pub use row::{ColumnValue, Row};
pub use uri::StoreUri;

use crate::error::Result;

/// Row count returned by a policy-denied update or delete
pub const DENIED_RESULT: i64 = -2;

/// Ordering requested from a query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub column: String,
    pub descending: bool,
}

impl SortOrder {
    pub fn ascending(column: &str) -> Self {
        SortOrder {
            column: column.to_string(),
            descending: false,
        }
    }

    pub fn descending(column: &str) -> Self {
        SortOrder {
            column: column.to_string(),
            descending: true,
        }
    }

    /// Parse `"column"`, `"column ASC"` or `"column DESC"`
    pub fn parse(clause: &str) -> Option<Self> {
        let mut words = clause.split_whitespace();
        let column = words.next()?;
        let descending = match words.next() {
            None => false,
            Some(direction) if direction.eq_ignore_ascii_case("asc") => false,
            Some(direction) if direction.eq_ignore_ascii_case("desc") => true,
            Some(_) => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(SortOrder {
            column: column.to_string(),
            descending,
        })
    }
}

/// One step of an atomic batch
#[derive(Clone, Debug, PartialEq)]
pub enum StoreOperation {
    Insert { uri: StoreUri, row: Row },
    Update { uri: StoreUri, row: Row },
    Delete { uri: StoreUri },
}

impl StoreOperation {
    pub fn uri(&self) -> &StoreUri {
        match self {
            StoreOperation::Insert { uri, .. }
            | StoreOperation::Update { uri, .. }
            | StoreOperation::Delete { uri } => uri,
        }
    }
}

/// Outcome of one batch step: an address for inserts, a row count otherwise
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub uri: Option<StoreUri>,
    pub count: Option<i64>,
}

impl BatchResult {
    pub fn inserted(uri: Option<StoreUri>) -> Self {
        BatchResult { uri, count: None }
    }

    pub fn affected(count: i64) -> Self {
        BatchResult {
            uri: None,
            count: Some(count),
        }
    }
}

/// The external store
///
/// Implementations must be shareable across threads; repositories hold them
/// behind an `Arc` and call them concurrently.
pub trait Store: Send + Sync {
    /// Rows under `uri`, or `None` when the store has nothing to say
    fn query(
        &self,
        uri: &StoreUri,
        projection: Option<&[&str]>,
        order: Option<&SortOrder>,
    ) -> Option<Vec<Row>>;

    /// Insert into the collection at `uri`; returns the new row's address,
    /// the empty address on policy denial, or `None` on failure
    fn insert(&self, uri: &StoreUri, row: Row) -> Option<StoreUri>;

    /// Update the row at `uri`; returns the affected row count or [`DENIED_RESULT`]
    fn update(&self, uri: &StoreUri, row: Row) -> i64;

    /// Delete the row at `uri`; returns the affected row count or [`DENIED_RESULT`]
    fn delete(&self, uri: &StoreUri) -> i64;

    /// Apply `operations` as one unit
    ///
    /// On success the results are positionally aligned with `operations`.
    /// An `Err` means the batch as a whole could not be completed.
    fn apply_batch(&self, authority: &str, operations: Vec<StoreOperation>)
        -> Result<Vec<BatchResult>>;
}
