// jersey_app/src/web/handlers/export_handlers.rs

use actix_web::http::header::ContentDisposition;
use actix_web::{web, HttpResponse};
use tracing::{info, instrument};
use uuid::Uuid;

use super::lookup_session;
use crate::errors::Result as AppResult;
use crate::state::AppState;

#[instrument(name = "handler::export_csv", skip(app_state), fields(session_id = %path))]
pub async fn export_csv_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
  let session = lookup_session(&app_state, path.into_inner())?;
  let export = session.write().export_csv()?;
  info!(rows = export.rows, bytes = export.body.len(), "Orders exported.");

  Ok(
    HttpResponse::Ok()
      .content_type(export.mime)
      .insert_header(ContentDisposition::attachment(export.filename))
      .body(export.body),
  )
}
