// jersey_app/src/web/handlers/analytics_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::lookup_session;
use crate::errors::Result as AppResult;
use crate::state::AppState;
use jersey_orders::AnalyticsReport;

/// Statistics over the session's orders. An empty session yields an empty report, not an error.
#[instrument(name = "handler::analytics", skip(app_state), fields(session_id = %path))]
pub async fn analytics_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
  let session = lookup_session(&app_state, path.into_inner())?;
  let report = AnalyticsReport::build(&session.read().store);
  debug!(total_orders = report.total_orders, "Analytics report built.");
  Ok(HttpResponse::Ok().json(report))
}
