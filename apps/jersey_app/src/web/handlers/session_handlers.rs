// jersey_app/src/web/handlers/session_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use super::lookup_session;
use crate::errors::{AppError, Result as AppResult};
use crate::state::AppState;

#[instrument(name = "handler::create_session", skip(app_state))]
pub async fn create_session_handler(app_state: web::Data<AppState>) -> AppResult<HttpResponse> {
  let evicted = app_state.sessions.evict_idle(app_state.config.session_idle_timeout());
  if evicted > 0 {
    info!(evicted, "Dropped idle sessions.");
  }
  let (session_id, session) = app_state.sessions.create();
  let created_at = session.read().created_at();
  info!(%session_id, active_sessions = app_state.sessions.len(), "Session opened.");
  Ok(HttpResponse::Created().json(json!({
    "session_id": session_id,
    "created_at": created_at,
  })))
}

#[instrument(name = "handler::get_session", skip(app_state), fields(session_id = %path))]
pub async fn get_session_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
  let session = lookup_session(&app_state, path.into_inner())?;
  let body = {
    let guard = session.read();
    json!({
      "session_id": guard.id(),
      "created_at": guard.created_at(),
      "orders": guard.store.len(),
      "exported": guard.exported(),
    })
  };
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(name = "handler::delete_session", skip(app_state), fields(session_id = %path))]
pub async fn delete_session_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
  let session_id = path.into_inner();
  match app_state.sessions.remove(&session_id) {
    Some(_) => Ok(HttpResponse::NoContent().finish()),
    None => Err(AppError::NotFound(format!("Session {} does not exist", session_id))),
  }
}
