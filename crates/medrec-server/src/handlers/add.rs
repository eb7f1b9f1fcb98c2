//! The add flow: blank record form and validated submission.

use axum::{
  Form,
  extract::State,
  response::{Html, Redirect},
};
use medrec_core::{record::NewRecord, store::RecordStore};
use medrec_ocr::ExtractedFields;

use crate::{AppState, error::Error, render};

/// `GET /add` — the blank record form.
pub async fn form() -> Html<String> {
  Html(render::record_form(&ExtractedFields::default()))
}

/// `POST /add` — validate the submitted record, persist it, redirect home.
///
/// Any empty field or malformed date is a 400 and nothing is written.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(record): Form<NewRecord>,
) -> Result<Redirect, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  record.validate()?;

  let stored = state
    .store
    .insert(record)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  tracing::info!(id = stored.id, "record added");
  Ok(Redirect::to("/"))
}
