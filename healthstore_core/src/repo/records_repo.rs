use super::batch::BatchOperations;
use super::result::{from_count, from_insert};
use super::{metric_uri, record_uri, OperationResult};
use crate::columns;
use crate::config::DEFAULT_AUTHORITY;
use crate::metric::Metric;
use crate::records::{MetricRecord, RecordFamily};
use crate::store::{SortOrder, Store, StoreOperation, StoreUri};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Repository for one record family
///
/// Holds nothing but the store and the family's base address, so a single
/// instance can be shared freely between threads. Every call is one
/// blocking store round trip.
pub struct RecordsRepo<F: RecordFamily> {
    store: Arc<dyn Store>,
    base: StoreUri,
    _family: PhantomData<fn() -> F>,
}

impl<F: RecordFamily> Clone for RecordsRepo<F> {
    fn clone(&self) -> Self {
        RecordsRepo {
            store: Arc::clone(&self.store),
            base: self.base.clone(),
            _family: PhantomData,
        }
    }
}

impl<F: RecordFamily> fmt::Debug for RecordsRepo<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordsRepo").field("base", &self.base).finish()
    }
}

impl<F: RecordFamily> RecordsRepo<F> {
    /// Repository rooted at an explicit base address
    pub fn new(store: Arc<dyn Store>, base: StoreUri) -> Self {
        RecordsRepo {
            store,
            base,
            _family: PhantomData,
        }
    }

    /// Repository rooted at the family's path under `authority`
    pub fn for_authority(store: Arc<dyn Store>, authority: &str) -> Self {
        Self::new(store, StoreUri::base(authority, F::FAMILY.base_path()))
    }

    /// Process-wide repository of the family, bound to the default authority
    ///
    /// The first call creates it with `store`; later calls return the same
    /// instance and ignore their argument.
    pub fn instance(store: Arc<dyn Store>) -> &'static RecordsRepo<F> {
        F::instance_cell().get_or_init(|| {
            tracing::debug!("Creating {:?} repository", F::FAMILY);
            Self::for_authority(store, DEFAULT_AUTHORITY)
        })
    }

    pub fn base_uri(&self) -> &StoreUri {
        &self.base
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Every record of every known metric of the family, oldest first
    pub fn get_all(&self) -> Vec<F> {
        let mut records: Vec<F> = F::FAMILY
            .metrics()
            .iter()
            .flat_map(|&metric| self.get_by_metric(metric))
            .collect();
        records.sort_by_key(|record| record.time());
        records
    }

    /// Records of one metric, newest first
    ///
    /// A metric outside the family, or a store with nothing to return,
    /// yields an empty list.
    pub fn get_by_metric(&self, metric: Metric) -> Vec<F> {
        if metric.family() != Some(F::FAMILY) {
            tracing::debug!("{:?} is not part of {:?}", metric, F::FAMILY);
            return Vec::new();
        }

        let uri = metric_uri(&self.base, metric.id());
        let order = SortOrder::descending(columns::TIME);
        match self.store.query(&uri, None, Some(&order)) {
            Some(rows) => rows.iter().map(F::parse_row).collect(),
            None => {
                tracing::debug!("No rows for {}", uri);
                Vec::new()
            }
        }
    }

    /// The record of `metric` stored under `id`, if any
    pub fn get_by_id(&self, metric: Metric, id: i64) -> Option<F> {
        if metric.family() != Some(F::FAMILY) {
            return None;
        }
        let uri = record_uri(&self.base, metric.id(), id);
        self.store
            .query(&uri, None, None)?
            .first()
            .map(F::parse_row)
    }

    /// Every record of the metric bound to `R`, newest first
    pub fn records_of<R>(&self) -> Vec<R>
    where
        R: MetricRecord<Family = F> + TryFrom<F>,
    {
        self.get_by_metric(R::METRIC)
            .into_iter()
            .filter_map(|record| R::try_from(record).ok())
            .collect()
    }

    /// The record of `R`'s metric stored under `id`, if any
    pub fn record_of<R>(&self, id: i64) -> Option<R>
    where
        R: MetricRecord<Family = F> + TryFrom<F>,
    {
        self.get_by_id(R::METRIC, id)
            .and_then(|record| R::try_from(record).ok())
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Insert a new record; succeeds with the id the store assigned
    pub fn insert(&self, record: impl Into<F>) -> OperationResult<i64> {
        let record = record.into();
        let uri = metric_uri(&self.base, record.metric_id());
        let result = from_insert(self.store.insert(&uri, record.to_row()).as_ref());
        log_outcome("insert", &uri, &result);
        result
    }

    /// Rewrite a persisted record, addressed by its metric and id
    pub fn update(&self, record: impl Into<F>) -> OperationResult<i64> {
        let record = record.into();
        let uri = record_uri(&self.base, record.metric_id(), record.id());
        let result = from_count(self.store.update(&uri, record.to_row()));
        log_outcome("update", &uri, &result);
        result
    }

    /// Delete a persisted record, addressed by its metric and id
    pub fn delete(&self, record: impl Into<F>) -> OperationResult<i64> {
        let record = record.into();
        let uri = record_uri(&self.base, record.metric_id(), record.id());
        let result = from_count(self.store.delete(&uri));
        log_outcome("delete", &uri, &result);
        result
    }

    /// Empty batch bound to this repository's base address
    pub fn batch(&self) -> BatchOperations<F> {
        BatchOperations::new(self.base.clone())
    }

    /// Submit `batch` as one atomic store call
    ///
    /// The result at each position belongs to the write at the same
    /// position. If the store cannot complete the call every result is
    /// `Failure`.
    pub fn execute_batch(&self, batch: &BatchOperations<F>) -> Vec<OperationResult<i64>> {
        let operations = batch.build();
        if operations.is_empty() {
            return Vec::new();
        }

        let inserts: Vec<bool> = operations
            .iter()
            .map(|op| matches!(op, StoreOperation::Insert { .. }))
            .collect();

        match self.store.apply_batch(self.base.authority(), operations) {
            Ok(results) => {
                tracing::debug!("Batch of {} applied at {}", inserts.len(), self.base);
                inserts
                    .iter()
                    .enumerate()
                    .map(|(i, &insert)| match results.get(i) {
                        Some(result) if insert => from_insert(result.uri.as_ref()),
                        Some(result) => result.count.map_or(OperationResult::Failure, from_count),
                        None => OperationResult::Failure,
                    })
                    .collect()
            }
            Err(e) => {
                tracing::warn!("Batch of {} at {} failed: {}", inserts.len(), self.base, e);
                vec![OperationResult::Failure; inserts.len()]
            }
        }
    }

    /// Fill a fresh batch with `fill` and submit it
    pub fn execute_batch_with(
        &self,
        fill: impl FnOnce(&mut BatchOperations<F>),
    ) -> Vec<OperationResult<i64>> {
        let mut batch = self.batch();
        fill(&mut batch);
        self.execute_batch(&batch)
    }

    /// Delete every record returned by [`get_all`](Self::get_all) in one batch
    ///
    /// Returns `false` if any deletion did not succeed.
    pub fn delete_all(&self) -> bool {
        let records = self.get_all();
        if records.is_empty() {
            return true;
        }

        let results = self.execute_batch_with(|batch| {
            for record in records {
                batch.delete(record);
            }
        });
        let deleted = results.iter().filter(|r| r.is_success()).count();
        tracing::info!("Deleted {} of {} {:?} records", deleted, results.len(), F::FAMILY);
        deleted == results.len()
    }
}

fn log_outcome(action: &str, uri: &StoreUri, result: &OperationResult<i64>) {
    match result {
        OperationResult::Success(value) => tracing::debug!("{} {} -> {}", action, uri, value),
        OperationResult::PolicyError => tracing::warn!("{} {} denied by store policy", action, uri),
        OperationResult::Failure => tracing::warn!("{} {} failed", action, uri),
    }
}
