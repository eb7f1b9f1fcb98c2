//! Keyword-anchored field extraction over raw OCR text.
//!
//! Scanned discharge sheets put each labelled value on its own line, with a
//! tab between the value and whatever the scanner picked up to its right.
//! The scan is line-by-line with first-match-wins precedence per line; lines
//! matching nothing are skipped, and any field never matched stays empty.
//! Repeated matches overwrite (last write wins).

use serde::{Deserialize, Serialize};

// ─── Output ──────────────────────────────────────────────────────────────────

/// The structured field set recovered from one OCR pass. Every field defaults
/// to the empty string; values are copied verbatim from the input apart from
/// whitespace trimming. `birthdate` has no marker on the scanned sheets and
/// is always left for the operator to fill in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
  pub name:        String,
  pub age:         String,
  pub sex:         String,
  pub id_card:     String,
  pub birthdate:   String,
  pub diagnosis:   String,
  pub doctor:      String,
  pub issued_date: String,
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// The value following `marker` on `line`: trimmed, cut at the first tab.
/// `None` when the marker is absent.
fn value_after(line: &str, marker: &str) -> Option<String> {
  let idx = line.find(marker)?;
  let rest = line[idx + marker.len()..].trim();
  Some(rest.split('\t').next().unwrap_or("").to_string())
}

/// The text between the first `[` and the first `]` after it. `None` unless
/// the line contains both brackets.
fn bracketed_code(line: &str) -> Option<String> {
  if !line.contains(']') {
    return None;
  }
  let open = line.find('[')?;
  let rest = &line[open + 1..];
  Some(rest.split(']').next().unwrap_or(rest).to_string())
}

// ─── Extractor ───────────────────────────────────────────────────────────────

/// Extract the record fields from raw recognized text.
///
/// Markers are checked in a fixed priority order and are mutually exclusive
/// per line — a line matching several only triggers the first:
///
/// 1. `Patient:` — value is `name`; the same line is also searched for an
///    `Age:` marker, whose leading whitespace-delimited token becomes `age`
///    (absent marker leaves `age` empty).
/// 2. `ID Card:` — `id_card`.
/// 3. `Sex:` — `sex`.
/// 4. `Issued Date:` — `issued_date`.
/// 5. `DIAGNOSIS` — the line two below (by index, blanks included) is
///    checked for a bracketed code, which becomes `diagnosis`. Out-of-range
///    or bracket-less lines leave the field untouched.
/// 6. `Dr.` — the whole trimmed line becomes `doctor`.
///
/// Pure function; never fails.
pub fn extract_fields(text: &str) -> ExtractedFields {
  let lines: Vec<&str> = text.split('\n').collect();
  let mut fields = ExtractedFields::default();

  for (i, line) in lines.iter().enumerate() {
    if let Some(name) = value_after(line, "Patient:") {
      fields.name = name;
      if let Some(age_info) = value_after(line, "Age:") {
        fields.age = age_info
          .split_whitespace()
          .next()
          .unwrap_or("")
          .to_string();
      }
    } else if let Some(id_card) = value_after(line, "ID Card:") {
      fields.id_card = id_card;
    } else if let Some(sex) = value_after(line, "Sex:") {
      fields.sex = sex;
    } else if let Some(issued) = value_after(line, "Issued Date:") {
      fields.issued_date = issued;
    } else if line.contains("DIAGNOSIS") {
      if let Some(code) = lines.get(i + 2).and_then(|l| bracketed_code(l)) {
        fields.diagnosis = code;
      }
    } else if line.contains("Dr.") {
      fields.doctor = line.trim().to_string();
    }
  }

  fields
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ── Patient / Age line ────────────────────────────────────────────────────

  #[test]
  fn patient_line_yields_name_and_age() {
    let fields = extract_fields("Patient: Jane Doe\tAge: 34 years\n");
    assert_eq!(fields.name, "Jane Doe");
    assert_eq!(fields.age, "34");
  }

  #[test]
  fn patient_line_without_age_leaves_age_empty() {
    let fields = extract_fields("Patient: John Roe\n");
    assert_eq!(fields.name, "John Roe");
    assert_eq!(fields.age, "");
  }

  #[test]
  fn age_takes_leading_token_only() {
    let fields = extract_fields("Patient: A\tAge: 7 years 3 months\n");
    assert_eq!(fields.age, "7");
  }

  #[test]
  fn empty_age_value_stays_empty() {
    let fields = extract_fields("Patient: A\tAge:\n");
    assert_eq!(fields.name, "A");
    assert_eq!(fields.age, "");
  }

  // ── Single-marker lines ───────────────────────────────────────────────────

  #[test]
  fn id_card_extracted() {
    let fields = extract_fields("ID Card: 12345\n");
    assert_eq!(fields.id_card, "12345");
  }

  #[test]
  fn sex_extracted() {
    let fields = extract_fields("Sex: F\tWard 3\n");
    assert_eq!(fields.sex, "F");
  }

  #[test]
  fn issued_date_extracted() {
    let fields = extract_fields("Issued Date: 2024-05-01\n");
    assert_eq!(fields.issued_date, "2024-05-01");
  }

  #[test]
  fn value_cut_at_tab() {
    let fields = extract_fields("ID Card: 12345\tstamp\n");
    assert_eq!(fields.id_card, "12345");
  }

  // ── Diagnosis lookahead ───────────────────────────────────────────────────

  #[test]
  fn diagnosis_two_lines_ahead() {
    let text = "DIAGNOSIS\n\nAsthma [J45.0] confirmed\n";
    assert_eq!(extract_fields(text).diagnosis, "J45.0");
  }

  #[test]
  fn diagnosis_offset_is_by_index_not_content() {
    // The code sits one line below the header; the scan must not find it.
    let text = "DIAGNOSIS\nAsthma [J45.0]\nsomething else\n";
    assert_eq!(extract_fields(text).diagnosis, "");
  }

  #[test]
  fn diagnosis_line_without_brackets_leaves_field_empty() {
    let text = "DIAGNOSIS\n\nno code on this line\n";
    assert_eq!(extract_fields(text).diagnosis, "");
  }

  #[test]
  fn diagnosis_lookahead_out_of_range() {
    assert_eq!(extract_fields("DIAGNOSIS").diagnosis, "");
    assert_eq!(extract_fields("DIAGNOSIS\n").diagnosis, "");
  }

  // ── Doctor line ───────────────────────────────────────────────────────────

  #[test]
  fn doctor_takes_whole_trimmed_line() {
    let fields = extract_fields("  Dr. Aris Thorne, MD  \n");
    assert_eq!(fields.doctor, "Dr. Aris Thorne, MD");
  }

  #[test]
  fn last_doctor_line_wins() {
    let text = "Dr. First\nDr. Second\n";
    assert_eq!(extract_fields(text).doctor, "Dr. Second");
  }

  // ── Precedence ────────────────────────────────────────────────────────────

  #[test]
  fn patient_marker_wins_over_doctor_on_same_line() {
    let text = "Patient: Jane Doe\tAge: 34 years\tDr. Thorne\n";
    let fields = extract_fields(text);
    assert_eq!(fields.name, "Jane Doe");
    assert_eq!(fields.doctor, "");
  }

  #[test]
  fn repeated_marker_overwrites() {
    let text = "Sex: F\nSex: M\n";
    assert_eq!(extract_fields(text).sex, "M");
  }

  // ── Whole-document behaviour ──────────────────────────────────────────────

  #[test]
  fn unmatched_input_yields_all_empty() {
    let fields = extract_fields("lorem ipsum\n\nnothing recognisable here\n");
    assert_eq!(fields, ExtractedFields::default());
  }

  #[test]
  fn empty_input_yields_all_empty() {
    assert_eq!(extract_fields(""), ExtractedFields::default());
  }

  #[test]
  fn full_sheet() {
    let text = "ACME CLINIC\n\
                Patient: Jane Doe\tAge: 34 years\n\
                Sex: F\n\
                ID Card: AB-9912\n\
                Issued Date: 2024-05-01\n\
                DIAGNOSIS\n\
                \n\
                Asthma, allergic [J45.0]\n\
                \n\
                Dr. Aris Thorne\n";
    let fields = extract_fields(text);
    assert_eq!(fields.name, "Jane Doe");
    assert_eq!(fields.age, "34");
    assert_eq!(fields.sex, "F");
    assert_eq!(fields.id_card, "AB-9912");
    assert_eq!(fields.issued_date, "2024-05-01");
    assert_eq!(fields.diagnosis, "J45.0");
    assert_eq!(fields.doctor, "Dr. Aris Thorne");
    assert_eq!(fields.birthdate, "");
  }
}
