//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use medrec_core::{
  record::{DATE_FORMAT, NewRecord, PatientRecord},
  store::{RecordStore, ReportQuery},
};

use crate::{Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A medrec record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, record: NewRecord) -> Result<PatientRecord> {
    let row = record.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO patients (
             name, age, sex, id_card, birthdate, diagnosis, doctor, issued_date
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            row.name,
            row.age,
            row.sex,
            row.id_card,
            row.birthdate,
            row.diagnosis,
            row.doctor,
            row.issued_date,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(PatientRecord {
      id,
      name:        record.name,
      age:         record.age,
      sex:         record.sex,
      id_card:     record.id_card,
      birthdate:   record.birthdate,
      diagnosis:   record.diagnosis,
      doctor:      record.doctor,
      issued_date: record.issued_date,
    })
  }

  async fn query(&self, query: ReportQuery) -> Result<Vec<PatientRecord>> {
    let start_str = query.start_date.map(|d| d.format(DATE_FORMAT).to_string());
    let end_str   = query.end_date.map(|d| d.format(DATE_FORMAT).to_string());

    let records = self
      .conn
      .call(move |conn| {
        // Build WHERE clause dynamically; values stay parameter-bound.
        let mut conds: Vec<&'static str> = vec![];
        let mut binds: Vec<String> = vec![];
        if let Some(s) = start_str {
          conds.push("issued_date >= ?");
          binds.push(s);
        }
        if let Some(e) = end_str {
          conds.push("issued_date <= ?");
          binds.push(e);
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!(" WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT id, name, age, sex, id_card, birthdate, diagnosis, doctor, issued_date
           FROM patients{where_clause}"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(binds), |row| {
            Ok(PatientRecord {
              id:          row.get(0)?,
              name:        row.get(1)?,
              age:         row.get(2)?,
              sex:         row.get(3)?,
              id_card:     row.get(4)?,
              birthdate:   row.get(5)?,
              diagnosis:   row.get(6)?,
              doctor:      row.get(7)?,
              issued_date: row.get(8)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    Ok(records)
  }
}
