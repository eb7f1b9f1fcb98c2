//! The `RecordStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `medrec-store-sqlite`).
//! The HTTP layer (`medrec-server`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use chrono::NaiveDate;

use crate::record::{NewRecord, PatientRecord};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`RecordStore::query`]. Bounds are inclusive and apply to
/// `issued_date`; `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportQuery {
  pub start_date: Option<NaiveDate>,
  pub end_date:   Option<NaiveDate>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a medrec storage backend.
///
/// Writes are append-only: a record is inserted once and never updated or
/// deleted. Callers validate records before insertion; the store is free to
/// treat a constraint violation as a hard error.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append one record and return it with the store-assigned row id.
  fn insert(
    &self,
    record: NewRecord,
  ) -> impl Future<Output = Result<PatientRecord, Self::Error>> + Send + '_;

  /// Return all records whose `issued_date` lies within the query bounds, in
  /// storage order.
  fn query(
    &self,
    query: ReportQuery,
  ) -> impl Future<Output = Result<Vec<PatientRecord>, Self::Error>> + Send + '_;
}
