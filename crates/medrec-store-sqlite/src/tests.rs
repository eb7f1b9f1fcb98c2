//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use medrec_core::{
  record::NewRecord,
  store::{RecordStore, ReportQuery},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn record(name: &str, issued_date: &str) -> NewRecord {
  NewRecord {
    name:        name.into(),
    age:         "34".into(),
    sex:         "F".into(),
    id_card:     "AB-9912".into(),
    birthdate:   "1990-03-15".into(),
    diagnosis:   "J45.0".into(),
    doctor:      "Dr. Aris Thorne".into(),
    issued_date: issued_date.into(),
  }
}

fn date(s: &str) -> NaiveDate {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_sequential_ids() {
  let s = store().await;

  let first = s.insert(record("Jane Doe", "2024-05-01")).await.unwrap();
  let second = s.insert(record("John Roe", "2024-05-02")).await.unwrap();

  assert_eq!(first.id, 1);
  assert_eq!(second.id, 2);
  assert_eq!(first.name, "Jane Doe");
}

#[tokio::test]
async fn insert_preserves_all_fields() {
  let s = store().await;
  let inserted = s.insert(record("Jane Doe", "2024-05-01")).await.unwrap();

  let all = s.query(ReportQuery::default()).await.unwrap();
  assert_eq!(all.len(), 1);
  let read = &all[0];
  assert_eq!(read.id, inserted.id);
  assert_eq!(read.name, "Jane Doe");
  assert_eq!(read.age, "34");
  assert_eq!(read.sex, "F");
  assert_eq!(read.id_card, "AB-9912");
  assert_eq!(read.birthdate, "1990-03-15");
  assert_eq!(read.diagnosis, "J45.0");
  assert_eq!(read.doctor, "Dr. Aris Thorne");
  assert_eq!(read.issued_date, "2024-05-01");
}

#[tokio::test]
async fn age_text_stored_as_entered() {
  let s = store().await;
  let mut r = record("Jane Doe", "2024-05-01");
  r.age = "6 months".into();
  s.insert(r).await.unwrap();

  let all = s.query(ReportQuery::default()).await.unwrap();
  assert_eq!(all[0].age, "6 months");
}

// ─── Query ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn query_empty_store_returns_nothing() {
  let s = store().await;
  let all = s.query(ReportQuery::default()).await.unwrap();
  assert!(all.is_empty());
}

#[tokio::test]
async fn unbounded_query_returns_insertion_order() {
  let s = store().await;
  s.insert(record("First", "2024-03-01")).await.unwrap();
  s.insert(record("Second", "2024-01-01")).await.unwrap();
  s.insert(record("Third", "2024-02-01")).await.unwrap();

  let all = s.query(ReportQuery::default()).await.unwrap();
  let names: Vec<_> = all.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(names, ["First", "Second", "Third"]);
}

#[tokio::test]
async fn bounds_are_inclusive() {
  let s = store().await;
  s.insert(record("Before", "2023-12-31")).await.unwrap();
  s.insert(record("OnStart", "2024-01-01")).await.unwrap();
  s.insert(record("Mid", "2024-06-15")).await.unwrap();
  s.insert(record("OnEnd", "2024-12-31")).await.unwrap();
  s.insert(record("After", "2025-01-01")).await.unwrap();

  let hits = s
    .query(ReportQuery {
      start_date: Some(date("2024-01-01")),
      end_date:   Some(date("2024-12-31")),
    })
    .await
    .unwrap();

  let names: Vec<_> = hits.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(names, ["OnStart", "Mid", "OnEnd"]);
}

#[tokio::test]
async fn start_bound_only() {
  let s = store().await;
  s.insert(record("Old", "2023-06-01")).await.unwrap();
  s.insert(record("New", "2024-06-01")).await.unwrap();

  let hits = s
    .query(ReportQuery {
      start_date: Some(date("2024-01-01")),
      end_date:   None,
    })
    .await
    .unwrap();

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name, "New");
}

#[tokio::test]
async fn end_bound_only() {
  let s = store().await;
  s.insert(record("Old", "2023-06-01")).await.unwrap();
  s.insert(record("New", "2024-06-01")).await.unwrap();

  let hits = s
    .query(ReportQuery {
      start_date: None,
      end_date:   Some(date("2023-12-31")),
    })
    .await
    .unwrap();

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name, "Old");
}

#[tokio::test]
async fn quote_in_field_is_bound_not_interpolated() {
  let s = store().await;
  let mut r = record("O'Brien; DROP TABLE patients; --", "2024-05-01");
  r.diagnosis = "G44.1 \"cluster\"".into();
  s.insert(r).await.unwrap();

  let all = s.query(ReportQuery::default()).await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].name, "O'Brien; DROP TABLE patients; --");
  assert_eq!(all[0].diagnosis, "G44.1 \"cluster\"");
}
