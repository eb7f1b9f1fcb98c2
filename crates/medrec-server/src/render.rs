//! Hand-written HTML rendering for the four pages.
//!
//! The markup is deliberately plain — a handful of forms and one table. All
//! user-sourced values pass through [`escape`] before reaching attribute or
//! text position.

use medrec_core::record::{AgeBreakdown, PatientRecord};
use medrec_ocr::ExtractedFields;

/// Escape `&`, `<`, `>` and `"` for text and double-quoted attribute values.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      other => out.push(other),
    }
  }
  out
}

/// Common page shell.
fn page(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n<html>\n<head><title>{title} — medrec</title></head>\n\
     <body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
    title = escape(title),
  )
}

// ─── Pages ───────────────────────────────────────────────────────────────────

pub fn home_page() -> String {
  page(
    "Clinical Records",
    "<ul>\n\
     <li><a href=\"/ocr\">Scan a document</a></li>\n\
     <li><a href=\"/add\">Add a record</a></li>\n\
     <li><a href=\"/report\">Report</a></li>\n\
     </ul>",
  )
}

pub fn upload_page() -> String {
  page(
    "Scan a document",
    "<form action=\"/ocr\" method=\"post\" enctype=\"multipart/form-data\">\n\
     <label>Document image <input type=\"file\" name=\"photo\" accept=\"image/*\" required></label>\n\
     <button type=\"submit\">Extract</button>\n\
     </form>",
  )
}

/// The editable record form, pre-filled from `fields` (all-empty for the
/// blank `/add` page). Posts to `/add`.
pub fn record_form(fields: &ExtractedFields) -> String {
  let mut inputs = String::new();
  for (label, name, value) in [
    ("Name", "name", &fields.name),
    ("Age", "age", &fields.age),
    ("Sex", "sex", &fields.sex),
    ("ID card", "id_card", &fields.id_card),
    ("Birthdate (YYYY-MM-DD)", "birthdate", &fields.birthdate),
    ("Diagnosis", "diagnosis", &fields.diagnosis),
    ("Doctor", "doctor", &fields.doctor),
    ("Issued date (YYYY-MM-DD)", "issued_date", &fields.issued_date),
  ] {
    inputs.push_str(&format!(
      "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{value}\"></label><br>\n",
      value = escape(value),
    ));
  }

  page(
    "Patient record",
    &format!(
      "<form action=\"/add\" method=\"post\">\n{inputs}\
       <button type=\"submit\">Save</button>\n</form>"
    ),
  )
}

/// The report page: filter form plus one table row per record with its
/// derived age.
pub fn report_page(rows: &[(PatientRecord, AgeBreakdown)]) -> String {
  let mut table = String::from(
    "<table border=\"1\">\n<tr>\
     <th>Name</th><th>Age</th><th>Sex</th><th>ID card</th>\
     <th>Birthdate</th><th>Years</th><th>Months</th>\
     <th>Diagnosis</th><th>Doctor</th><th>Issued date</th></tr>\n",
  );
  for (record, age) in rows {
    table.push_str(&format!(
      "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
       <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
      escape(&record.name),
      escape(&record.age),
      escape(&record.sex),
      escape(&record.id_card),
      escape(&record.birthdate),
      age.years,
      age.months,
      escape(&record.diagnosis),
      escape(&record.doctor),
      escape(&record.issued_date),
    ));
  }
  table.push_str("</table>");

  page(
    "Report",
    &format!(
      "<form action=\"/report\" method=\"post\">\n\
       <label>From <input type=\"text\" name=\"start_date\" placeholder=\"YYYY-MM-DD\"></label>\n\
       <label>To <input type=\"text\" name=\"end_date\" placeholder=\"YYYY-MM-DD\"></label>\n\
       <button type=\"submit\">Filter</button>\n\
       </form>\n{table}"
    ),
  )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
