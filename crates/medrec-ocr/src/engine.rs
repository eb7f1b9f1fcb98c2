//! [`OcrEngine`] — explicit handle to the external recognition binary.
//!
//! The binary location and language are plain configuration carried in the
//! value; nothing here is process-global. The engine contract is the
//! tesseract CLI one: `<binary> <image> stdout -l <lang>` prints recognized
//! text on stdout.

use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct OcrEngine {
  binary:   PathBuf,
  language: String,
}

impl OcrEngine {
  pub fn new(binary: impl Into<PathBuf>, language: impl Into<String>) -> Self {
    Self {
      binary:   binary.into(),
      language: language.into(),
    }
  }

  /// Run the engine over `image` and return the recognized text.
  ///
  /// An unreadable image, a missing binary, or a non-zero exit all surface
  /// as errors — a failed recognition is never silently an empty page.
  pub async fn recognize(&self, image: &Path) -> Result<String> {
    tracing::debug!(image = %image.display(), "running OCR engine");

    let output = Command::new(&self.binary)
      .arg(image)
      .arg("stdout")
      .arg("-l")
      .arg(&self.language)
      .output()
      .await
      .map_err(|source| Error::EngineSpawn {
        binary: self.binary.clone(),
        source,
      })?;

    if !output.status.success() {
      return Err(Error::EngineFailed {
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
      });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
  }
}
