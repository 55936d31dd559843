use super::{metric_uri, record_uri};
use crate::records::RecordFamily;
use crate::store::{StoreOperation, StoreUri};

#[derive(Clone, Debug)]
enum Intent<F> {
    Insert(F),
    Update(F),
    Delete(F),
}

/// Ordered list of writes to submit as one atomic batch
///
/// Obtained from [`RecordsRepo::batch`](super::RecordsRepo::batch) and
/// bound to that repository's base address. Results of the batch line up
/// with the order in which writes were added.
#[derive(Clone, Debug)]
pub struct BatchOperations<F: RecordFamily> {
    base: StoreUri,
    intents: Vec<Intent<F>>,
}

impl<F: RecordFamily> BatchOperations<F> {
    pub(crate) fn new(base: StoreUri) -> Self {
        BatchOperations {
            base,
            intents: Vec::new(),
        }
    }

    pub fn insert(&mut self, record: impl Into<F>) -> &mut Self {
        self.intents.push(Intent::Insert(record.into()));
        self
    }

    /// Update a persisted record, addressed by its metric and id
    pub fn update(&mut self, record: impl Into<F>) -> &mut Self {
        self.intents.push(Intent::Update(record.into()));
        self
    }

    /// Delete a persisted record, addressed by its metric and id
    pub fn delete(&mut self, record: impl Into<F>) -> &mut Self {
        self.intents.push(Intent::Delete(record.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn base_uri(&self) -> &StoreUri {
        &self.base
    }

    /// Compile to store operations, one per write, in insertion order
    pub fn build(&self) -> Vec<StoreOperation> {
        self.intents
            .iter()
            .map(|intent| match intent {
                Intent::Insert(record) => insert_operation(&self.base, record),
                Intent::Update(record) => update_operation(&self.base, record),
                Intent::Delete(record) => delete_operation(&self.base, record),
            })
            .collect()
    }
}

fn insert_operation<F: RecordFamily>(base: &StoreUri, record: &F) -> StoreOperation {
    StoreOperation::Insert {
        uri: metric_uri(base, record.metric_id()),
        row: record.to_row(),
    }
}

fn update_operation<F: RecordFamily>(base: &StoreUri, record: &F) -> StoreOperation {
    StoreOperation::Update {
        uri: record_uri(base, record.metric_id(), record.id()),
        row: record.to_row(),
    }
}

fn delete_operation<F: RecordFamily>(base: &StoreUri, record: &F) -> StoreOperation {
    StoreOperation::Delete {
        uri: record_uri(base, record.metric_id(), record.id()),
    }
}
