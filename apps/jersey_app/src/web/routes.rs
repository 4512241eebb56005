// jersey_app/src/web/routes.rs

use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::web::handlers::{
  analytics_handlers, catalog_handlers, export_handlers, order_handlers, session_handlers,
};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// JSON extractor settings: body limit sized for image uploads, and malformed
/// bodies reported through `AppError` like every other client error.
pub fn json_config(config: &AppConfig) -> web::JsonConfig {
  web::JsonConfig::default()
    .limit(config.json_body_limit())
    .error_handler(|err, _req| AppError::Validation(format!("Invalid request body: {}", err)).into())
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .route("/palette", web::get().to(catalog_handlers::palette_handler))
      .service(
        web::scope("/sessions")
          .route("", web::post().to(session_handlers::create_session_handler))
          .route("/{session_id}", web::get().to(session_handlers::get_session_handler))
          .route("/{session_id}", web::delete().to(session_handlers::delete_session_handler))
          .route("/{session_id}/orders", web::get().to(order_handlers::list_orders_handler))
          .route("/{session_id}/orders", web::post().to(order_handlers::submit_order_handler))
          .route("/{session_id}/payment", web::post().to(order_handlers::confirm_payment_handler))
          .route("/{session_id}/analytics", web::get().to(analytics_handlers::analytics_handler))
          .route("/{session_id}/export", web::get().to(export_handlers::export_csv_handler)),
      ),
  );
}
