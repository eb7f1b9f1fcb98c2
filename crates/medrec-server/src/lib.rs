//! HTTP layer for medrec.
//!
//! Exposes an axum [`Router`] over any [`medrec_core::store::RecordStore`],
//! serving the home page and the three flows (scan, add, report). Transport
//! and TLS concerns are the caller's responsibility.

pub mod error;
pub mod handlers;
pub mod render;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use medrec_core::store::RecordStore;
use medrec_ocr::OcrEngine;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`. Every field
/// has a default so the server runs out of the box.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:         String,
  #[serde(default = "default_port")]
  pub port:         u16,
  /// SQLite database file.
  #[serde(default = "default_store_path")]
  pub store_path:   PathBuf,
  /// Transient directory for uploaded images; files are removed after OCR.
  #[serde(default = "default_upload_dir")]
  pub upload_dir:   PathBuf,
  /// OCR engine binary (tesseract CLI contract).
  #[serde(default = "default_ocr_binary")]
  pub ocr_binary:   PathBuf,
  #[serde(default = "default_ocr_language")]
  pub ocr_language: String,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_store_path() -> PathBuf { PathBuf::from("patients.db") }
fn default_upload_dir() -> PathBuf { PathBuf::from("uploads") }
fn default_ocr_binary() -> PathBuf { PathBuf::from("tesseract") }
fn default_ocr_language() -> String { "eng".to_string() }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: RecordStore> {
  pub store:  Arc<S>,
  pub engine: Arc<OcrEngine>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the record service.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(handlers::home))
    .route(
      "/ocr",
      get(handlers::ocr::form).post(handlers::ocr::process::<S>),
    )
    .route(
      "/add",
      get(handlers::add::form).post(handlers::add::submit::<S>),
    )
    .route(
      "/report",
      get(handlers::report::unfiltered::<S>)
        .post(handlers::report::filtered::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
