//! The OCR flow: image upload → engine → field extraction → pre-filled form.

use std::path::Path;

use axum::{
  extract::{Multipart, State},
  response::Html,
};
use medrec_core::store::RecordStore;
use medrec_ocr::extract_fields;
use uuid::Uuid;

use crate::{AppState, error::Error, render};

/// `GET /ocr` — the upload form.
pub async fn form() -> Html<String> {
  Html(render::upload_page())
}

/// `POST /ocr` — accept one uploaded image, recognize it, and render the
/// record form pre-filled with whatever the extractor found.
///
/// The image is written to the transient upload directory under a fresh UUID
/// name and removed again once recognition has run, whether or not it
/// succeeded.
pub async fn process<S>(
  State(state): State<AppState<S>>,
  mut multipart: Multipart,
) -> Result<Html<String>, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let mut upload: Option<(String, axum::body::Bytes)> = None;

  while let Some(field) = multipart
    .next_field()
    .await
    .map_err(|e| Error::BadRequest(format!("malformed upload: {e}")))?
  {
    if field.name() != Some("photo") {
      continue;
    }

    let content_type = field.content_type().unwrap_or_default().to_string();
    if !content_type.starts_with("image/") {
      return Err(Error::BadRequest(format!(
        "only image uploads are accepted, got {content_type:?}"
      )));
    }

    let extension = field
      .file_name()
      .and_then(|n| Path::new(n).extension())
      .and_then(|e| e.to_str())
      .unwrap_or("img")
      .to_string();
    let data = field
      .bytes()
      .await
      .map_err(|e| Error::BadRequest(format!("malformed upload: {e}")))?;

    upload = Some((extension, data));
    break;
  }

  let Some((extension, data)) = upload else {
    return Err(Error::BadRequest("missing `photo` upload".to_string()));
  };

  let file_path = state
    .config
    .upload_dir
    .join(format!("{}.{extension}", Uuid::new_v4()));
  tokio::fs::write(&file_path, &data).await?;

  let recognized = state.engine.recognize(&file_path).await;

  // Scoped cleanup: the temp file goes away on the failure path too.
  if let Err(e) = tokio::fs::remove_file(&file_path).await {
    tracing::warn!(path = %file_path.display(), error = %e, "failed to remove upload");
  }

  let text = recognized?;
  let fields = extract_fields(&text);
  tracing::debug!(?fields, "extracted fields");

  Ok(Html(render::record_form(&fields)))
}
