//! OCR support for medrec: engine invocation and field extraction.
//!
//! [`OcrEngine`] runs an external recognition binary over an image file and
//! returns the raw text. [`extract_fields`] turns that text into the
//! structured field set used to pre-fill the record form. The two halves are
//! independent — extraction is a pure function and never touches the
//! filesystem.

pub mod engine;
pub mod error;
pub mod extract;

pub use engine::OcrEngine;
pub use error::{Error, Result};
pub use extract::{ExtractedFields, extract_fields};
