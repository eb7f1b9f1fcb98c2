//! Error types for `medrec-ocr`.

use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to launch OCR engine {binary:?}: {source}")]
  EngineSpawn {
    binary: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("OCR engine exited with {status}: {stderr}")]
  EngineFailed { status: ExitStatus, stderr: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
