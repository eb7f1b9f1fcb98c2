//! Error types for `medrec-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("field `{0}` is required")]
  MissingField(&'static str),

  #[error("invalid date in `{field}`: {value:?} (expected YYYY-MM-DD)")]
  InvalidDate { field: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
