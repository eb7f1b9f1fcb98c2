//! Request handlers for the three flows plus the home page.
//!
//! | Method       | Path      | Flow |
//! |--------------|-----------|------|
//! | `GET`        | `/`       | home |
//! | `GET`+`POST` | `/ocr`    | upload form / scan → pre-filled record form |
//! | `GET`+`POST` | `/add`    | blank form / validate and persist |
//! | `GET`+`POST` | `/report` | unfiltered list / date-filtered list |

pub mod add;
pub mod ocr;
pub mod report;

use axum::response::Html;

use crate::render;

/// `GET /`
pub async fn home() -> Html<String> {
  Html(render::home_page())
}
