//! SQL schema for the medrec SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Rows are append-only — no UPDATE or DELETE is ever issued against this
/// table. `age` is TEXT because it is stored exactly as entered; the dates
/// are ISO `YYYY-MM-DD` strings, which compare lexically in date order.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS patients (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    age         TEXT NOT NULL,
    sex         TEXT NOT NULL,
    id_card     TEXT NOT NULL,
    birthdate   TEXT NOT NULL,
    diagnosis   TEXT NOT NULL,
    doctor      TEXT NOT NULL,
    issued_date TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS patients_issued_idx ON patients(issued_date);

PRAGMA user_version = 1;
";
