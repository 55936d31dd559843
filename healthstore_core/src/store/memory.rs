//! In-process store.
//!
//! Implements the full store boundary, including per-metric access policy
//! and its sentinels, against tables held in memory. Contents can be saved
//! to and reopened from a JSON file.

use super::{BatchResult, Row, SortOrder, Store, StoreOperation, StoreUri, DENIED_RESULT};
use crate::columns;
use crate::error::{Error, Result};
use crate::metric::{MetricFamily, PROFILE_PATH};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

bitflags::bitflags! {
    /// Access granted to callers for one metric
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permission: u8 {
        const READ = 1;
        const WRITE = 1 << 1;
    }
}

impl Default for Permission {
    fn default() -> Self {
        Permission::all()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Row>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    authority: String,
    tables: BTreeMap<String, Table>,
    profile: Option<Row>,
}

struct Inner {
    data: Snapshot,
    permissions: HashMap<i32, Permission>,
    fail_batches: bool,
}

/// What an address points at
enum Target {
    Profile,
    Family(MetricFamily),
    Metric(MetricFamily, i32),
    Row(MetricFamily, i32, i64),
}

/// Store kept entirely in memory
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Empty store answering for `authority`
    pub fn new(authority: &str) -> Self {
        Self::from_snapshot(Snapshot {
            authority: authority.to_string(),
            ..Snapshot::default()
        })
    }

    fn from_snapshot(data: Snapshot) -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                data,
                permissions: HashMap::new(),
                fail_batches: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation leaves the tables consistent, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn authority(&self) -> String {
        self.lock().data.authority.clone()
    }

    /// Set the access callers have to `metric` (all access by default)
    pub fn set_permission(&self, metric: i32, permission: Permission) {
        self.lock().permissions.insert(metric, permission);
    }

    /// Make every subsequent `apply_batch` fail as a transport error
    pub fn set_fail_batches(&self, fail: bool) {
        self.lock().fail_batches = fail;
    }

    /// Number of record rows across all families
    pub fn record_count(&self) -> usize {
        self.lock().data.tables.values().map(|t| t.rows.len()).sum()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.lock().data)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let data: Snapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(data))
    }

    /// Atomically write the store's contents to `path`
    ///
    /// Access policy and the batch failure switch are not saved.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let contents = self.to_json()?;
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;
        temp.write_all(contents.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved memory store to {:?}", path);
        Ok(())
    }

    /// Reopen a store previously written by [`MemoryStore::save_to`]
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        file.lock_shared()?;
        let mut contents = String::new();
        let read = (&file).read_to_string(&mut contents);
        file.unlock()?;
        read?;

        let store = Self::from_json(&contents)?;
        tracing::debug!("Opened memory store from {:?}", path);
        Ok(store)
    }
}

// ============================================================================
// Address resolution
// ============================================================================

fn resolve(authority: &str, uri: &StoreUri) -> Option<Target> {
    if uri.authority() != authority {
        return None;
    }

    let segments = uri.segments();
    let (first, rest) = segments.split_first()?;
    if first == PROFILE_PATH {
        return rest.is_empty().then_some(Target::Profile);
    }

    let family = MetricFamily::ALL
        .into_iter()
        .find(|family| family.base_path() == first)?;

    match rest {
        [] => Some(Target::Family(family)),
        [metric] => parse_metric(family, metric).map(|m| Target::Metric(family, m)),
        [metric, id] => {
            let metric = parse_metric(family, metric)?;
            let id = id.parse().ok()?;
            Some(Target::Row(family, metric, id))
        }
        _ => None,
    }
}

/// Metric ids are accepted anywhere inside the family's block
fn parse_metric(family: MetricFamily, segment: &str) -> Option<i32> {
    let metric: i32 = segment.parse().ok()?;
    (MetricFamily::of_id(metric) == Some(family) && metric != family.block_start())
        .then_some(metric)
}

fn accepts_columns(family: MetricFamily, row: &Row) -> bool {
    row.columns()
        .all(|c| columns::COMMON.contains(&c) || family.columns().contains(&c))
}

fn sort_rows(rows: &mut [Row], order: &SortOrder) {
    rows.sort_by(|a, b| {
        let a = a.get(&order.column).cloned().unwrap_or_default();
        let b = b.get(&order.column).cloned().unwrap_or_default();
        let ordering = a.compare(&b);
        if order.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

// ============================================================================
// Table operations
// ============================================================================

impl Inner {
    fn permission(&self, metric: i32) -> Permission {
        self.permissions.get(&metric).copied().unwrap_or_default()
    }

    fn readable(&self, metric: i32) -> bool {
        self.permission(metric).contains(Permission::READ)
    }

    fn writable(&self, metric: i32) -> bool {
        self.permission(metric).contains(Permission::WRITE)
    }

    fn query(&self, target: Target) -> Vec<Row> {
        let rows_of = |family: MetricFamily| {
            self.data
                .tables
                .get(family.base_path())
                .into_iter()
                .flat_map(|table| table.rows.values())
        };

        match target {
            Target::Profile => self.data.profile.iter().cloned().collect(),
            Target::Family(family) => rows_of(family)
                .filter(|row| self.readable(row.get_i32(columns::METRIC)))
                .cloned()
                .collect(),
            Target::Metric(family, metric) => {
                if !self.readable(metric) {
                    return Vec::new();
                }
                rows_of(family)
                    .filter(|row| row.get_i32(columns::METRIC) == metric)
                    .cloned()
                    .collect()
            }
            Target::Row(family, metric, id) => {
                if !self.readable(metric) {
                    return Vec::new();
                }
                rows_of(family)
                    .filter(|row| row.get_i64(columns::ID) == id)
                    .filter(|row| row.get_i32(columns::METRIC) == metric)
                    .cloned()
                    .collect()
            }
        }
    }

    fn insert(&mut self, uri: &StoreUri, target: Target, mut row: Row) -> Option<StoreUri> {
        match target {
            Target::Profile => {
                self.data.profile = Some(row);
                Some(uri.clone())
            }
            Target::Metric(family, metric) => {
                if !self.writable(metric) {
                    return Some(StoreUri::empty());
                }
                if !accepts_columns(family, &row) {
                    tracing::debug!("Rejecting row with foreign columns for {}", uri);
                    return None;
                }

                let table = self
                    .data
                    .tables
                    .entry(family.base_path().to_string())
                    .or_default();
                table.next_id += 1;
                let id = table.next_id;

                row.set(columns::ID, id);
                row.set(columns::METRIC, metric);
                table.rows.insert(id, row);
                Some(uri.with_appended_path(&id.to_string()))
            }
            Target::Family(_) | Target::Row(..) => None,
        }
    }

    fn update(&mut self, target: Target, mut row: Row) -> i64 {
        match target {
            Target::Profile => match self.data.profile.as_mut() {
                Some(profile) => {
                    profile.merge(row);
                    1
                }
                None => 0,
            },
            Target::Row(family, metric, id) => {
                if !self.writable(metric) {
                    return DENIED_RESULT;
                }
                if !accepts_columns(family, &row) {
                    return 0;
                }

                // Identity is owned by the address
                row.remove(columns::ID);
                row.remove(columns::METRIC);

                let existing = self
                    .data
                    .tables
                    .get_mut(family.base_path())
                    .and_then(|table| table.rows.get_mut(&id))
                    .filter(|existing| existing.get_i32(columns::METRIC) == metric);
                match existing {
                    Some(existing) => {
                        existing.merge(row);
                        1
                    }
                    None => 0,
                }
            }
            Target::Family(_) | Target::Metric(..) => 0,
        }
    }

    fn delete(&mut self, target: Target) -> i64 {
        match target {
            Target::Profile => i64::from(self.data.profile.take().is_some()),
            Target::Row(family, metric, id) => {
                if !self.writable(metric) {
                    return DENIED_RESULT;
                }
                let Some(table) = self.data.tables.get_mut(family.base_path()) else {
                    return 0;
                };
                let matches = table
                    .rows
                    .get(&id)
                    .is_some_and(|row| row.get_i32(columns::METRIC) == metric);
                if matches {
                    table.rows.remove(&id);
                    1
                } else {
                    0
                }
            }
            Target::Family(_) | Target::Metric(..) => 0,
        }
    }

    fn apply(&mut self, operation: StoreOperation) -> BatchResult {
        let authority = self.data.authority.clone();
        match operation {
            StoreOperation::Insert { uri, row } => BatchResult::inserted(
                resolve(&authority, &uri).and_then(|target| self.insert(&uri, target, row)),
            ),
            StoreOperation::Update { uri, row } => BatchResult::affected(
                resolve(&authority, &uri).map_or(0, |target| self.update(target, row)),
            ),
            StoreOperation::Delete { uri } => BatchResult::affected(
                resolve(&authority, &uri).map_or(0, |target| self.delete(target)),
            ),
        }
    }
}

// ============================================================================
// Store boundary
// ============================================================================

impl Store for MemoryStore {
    fn query(
        &self,
        uri: &StoreUri,
        projection: Option<&[&str]>,
        order: Option<&SortOrder>,
    ) -> Option<Vec<Row>> {
        let inner = self.lock();
        let target = resolve(&inner.data.authority, uri)?;

        let mut rows = inner.query(target);
        if let Some(order) = order {
            sort_rows(&mut rows, order);
        }
        if let Some(projection) = projection {
            rows = rows.iter().map(|row| row.project(projection)).collect();
        }

        tracing::debug!("query {} -> {} rows", uri, rows.len());
        Some(rows)
    }

    fn insert(&self, uri: &StoreUri, row: Row) -> Option<StoreUri> {
        let mut inner = self.lock();
        let target = resolve(&inner.data.authority, uri)?;
        let result = inner.insert(uri, target, row);
        tracing::debug!("insert {} -> {:?}", uri, result.as_ref().map(|u| u.to_string()));
        result
    }

    fn update(&self, uri: &StoreUri, row: Row) -> i64 {
        let mut inner = self.lock();
        let Some(target) = resolve(&inner.data.authority, uri) else {
            return 0;
        };
        let count = inner.update(target, row);
        tracing::debug!("update {} -> {}", uri, count);
        count
    }

    fn delete(&self, uri: &StoreUri) -> i64 {
        let mut inner = self.lock();
        let Some(target) = resolve(&inner.data.authority, uri) else {
            return 0;
        };
        let count = inner.delete(target);
        tracing::debug!("delete {} -> {}", uri, count);
        count
    }

    fn apply_batch(
        &self,
        authority: &str,
        operations: Vec<StoreOperation>,
    ) -> Result<Vec<BatchResult>> {
        let mut inner = self.lock();
        if inner.fail_batches {
            return Err(Error::Transport("batch rejected by store".into()));
        }
        if authority != inner.data.authority {
            return Err(Error::Transport(format!("unknown authority: {}", authority)));
        }

        // The lock is held for the whole batch, so it lands as one unit
        let count = operations.len();
        let results: Vec<BatchResult> = operations
            .into_iter()
            .map(|operation| inner.apply(operation))
            .collect();

        tracing::debug!("apply_batch {} operations on {}", count, authority);
        Ok(results)
    }
}
