#![forbid(unsafe_code)]

//! Typed client for a platform health-data store.
//!
//! This crate provides:
//! - Unit-safe physical quantities (length, mass, speed, pressure, ...)
//! - The metric catalogue and one record enum per metric family
//! - The store boundary (addresses, rows, an in-memory store)
//! - Repositories translating store sentinels into [`OperationResult`]
//! - Atomic batches with positional results
//! - The medical profile

pub mod columns;
pub mod config;
pub mod error;
pub mod logging;
pub mod metric;
pub mod profile;
pub mod records;
pub mod repo;
pub mod store;
pub mod values;

// Re-export commonly used types
pub use columns::SchemaVersion;
pub use config::Config;
pub use error::{Error, Result};
pub use metric::{Metric, MetricFamily};
pub use profile::MedicalProfile;
pub use records::{MetricRecord, RecordCore, RecordFamily};
pub use repo::{BatchOperations, HealthStore, MedicalProfileRepo, OperationResult, RecordsRepo};
pub use store::{MemoryStore, Row, Store, StoreUri};
