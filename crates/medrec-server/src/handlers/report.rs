//! The report flow: date-filtered listing with derived ages.

use axum::{Form, extract::State, response::Html};
use chrono::{Local, NaiveDate};
use medrec_core::{
  record::parse_record_date,
  store::{RecordStore, ReportQuery},
};
use serde::Deserialize;

use crate::{AppState, error::Error, render};

/// Filter fields from the report form. Browsers submit empty strings for
/// untouched inputs, so both sides default to empty.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
  #[serde(default)]
  pub start_date: String,
  #[serde(default)]
  pub end_date:   String,
}

fn parse_bound(field: &'static str, value: &str) -> Result<Option<NaiveDate>, Error> {
  if value.is_empty() {
    return Ok(None);
  }
  Ok(Some(parse_record_date(field, value)?))
}

/// `GET /report` — the unfiltered listing.
pub async fn unfiltered<S>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  render_report(&state, ReportQuery::default()).await
}

/// `POST /report` — the listing restricted to the submitted inclusive
/// `issued_date` bounds. A malformed bound is a 400, consistent with the add
/// flow's date handling.
pub async fn filtered<S>(
  State(state): State<AppState<S>>,
  Form(params): Form<ReportParams>,
) -> Result<Html<String>, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let query = ReportQuery {
    start_date: parse_bound("start_date", &params.start_date)?,
    end_date:   parse_bound("end_date", &params.end_date)?,
  };
  render_report(&state, query).await
}

async fn render_report<S>(
  state: &AppState<S>,
  query: ReportQuery,
) -> Result<Html<String>, Error>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let records = state
    .store
    .query(query)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let today = Local::now().date_naive();
  let rows = records
    .into_iter()
    .map(|record| {
      let age = record.age_on(today).map_err(Error::CorruptRecord)?;
      Ok((record, age))
    })
    .collect::<Result<Vec<_>, Error>>()?;

  Ok(Html(render::report_page(&rows)))
}
