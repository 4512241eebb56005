// jersey_app/src/web/handlers/mod.rs

pub mod analytics_handlers;
pub mod catalog_handlers;
pub mod export_handlers;
pub mod order_handlers;
pub mod session_handlers;

use crate::errors::{AppError, Result as AppResult};
use crate::state::AppState;
use jersey_orders::{ContextData, Session, SessionId};

/// Resolves a session id from the path, or 404.
pub(crate) fn lookup_session(app_state: &AppState, session_id: SessionId) -> AppResult<ContextData<Session>> {
  app_state
    .sessions
    .get(&session_id)
    .ok_or_else(|| AppError::NotFound(format!("Session {} does not exist", session_id)))
}
