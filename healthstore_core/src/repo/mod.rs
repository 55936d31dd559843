//! Typed repositories over the store boundary.
//!
//! Every record family is rooted at `content://{authority}/{family}`.
//! Metric-scoped collections live at `{base}/{metric_id}` and single rows at
//! `{base}/{metric_id}/{id}`. Single calls and batches derive addresses
//! through the same helpers, so both reach the store identically.

mod batch;
mod profile_repo;
mod records_repo;
mod registry;
mod result;

pub use batch::BatchOperations;
pub use profile_repo::MedicalProfileRepo;
pub use records_repo::RecordsRepo;
pub use registry::HealthStore;
pub use result::OperationResult;

use crate::store::StoreUri;

pub(crate) fn metric_uri(base: &StoreUri, metric_id: i32) -> StoreUri {
    base.with_appended_path(&metric_id.to_string())
}

pub(crate) fn record_uri(base: &StoreUri, metric_id: i32, id: i64) -> StoreUri {
    base.with_appended_path(&format!("{}/{}", metric_id, id))
}
