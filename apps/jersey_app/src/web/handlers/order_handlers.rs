// jersey_app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use super::lookup_session;
use crate::errors::{AppError, Result as AppResult};
use crate::services::image_upload::decode_image_base64;
use crate::state::AppState;
use jersey_orders::{
  submit_order_with, JerseyType, OrderRecord, OrderSubmission, PaymentStatus, PaymentTransition, Size, Sport,
};

// --- Request / response DTOs ---

#[derive(Deserialize, Debug)]
pub struct SubmitOrderRequest {
  // Missing names reach the intake pipeline as empty and fail there with a field error.
  #[serde(default)]
  pub customer_name: String,
  #[serde(default)]
  pub customer_email: String,
  pub sport: Sport,
  pub jersey_type: JerseyType,
  pub size: Size,
  pub color: String,
  pub quantity: u32,
  #[serde(default)]
  pub image_base64: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfirmPaymentRequest {
  /// Confirms only if this position is still the most recent order.
  pub order_position: Option<usize>,
}

impl ConfirmPaymentRequest {
  /// An empty body confirms the latest order. Anything else must parse, so a
  /// mistyped `order_position` can never fall back to paying the latest order.
  pub fn from_body(body: &[u8]) -> AppResult<Self> {
    if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(Self::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::Validation(format!("Invalid payment request body: {}", e)))
  }
}

#[derive(Serialize, Debug)]
pub struct OrderView {
  pub position: usize,
  pub order_date: DateTime<Utc>,
  pub customer_name: String,
  pub customer_email: String,
  pub sport: Sport,
  pub jersey_type: JerseyType,
  pub size: Size,
  pub color: String,
  pub quantity: u32,
  pub image_bytes: Option<usize>,
  pub payment_status: PaymentStatus,
  pub total_amount: u32,
}

impl OrderView {
  pub fn from_record(position: usize, record: &OrderRecord) -> Self {
    Self {
      position,
      order_date: record.order_date(),
      customer_name: record.customer_name().to_string(),
      customer_email: record.customer_email().to_string(),
      sport: record.sport(),
      jersey_type: record.jersey_type(),
      size: record.size(),
      color: record.color().as_str().to_string(),
      quantity: record.quantity(),
      image_bytes: record.image().map(<[u8]>::len),
      payment_status: record.payment_status(),
      total_amount: record.total_amount(),
    }
  }
}

// --- Handlers ---

#[instrument(name = "handler::list_orders", skip(app_state), fields(session_id = %path))]
pub async fn list_orders_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
  let session = lookup_session(&app_state, path.into_inner())?;
  let orders: Vec<OrderView> = {
    let guard = session.read();
    guard
      .store
      .iter()
      .enumerate()
      .map(|(position, record)| OrderView::from_record(position, record))
      .collect()
  };
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(
    name = "handler::submit_order",
    skip(app_state, req_payload),
    fields(session_id = %path, sport = %req_payload.sport, size = %req_payload.size, quantity = req_payload.quantity)
)]
pub async fn submit_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<SubmitOrderRequest>,
) -> AppResult<HttpResponse> {
  let session = lookup_session(&app_state, path.into_inner())?;
  let req = req_payload.into_inner();

  let submission = OrderSubmission {
    customer_name: req.customer_name,
    customer_email: req.customer_email,
    sport: req.sport,
    jersey_type: req.jersey_type,
    size: req.size,
    color: req.color,
    quantity: req.quantity,
    image: decode_image_base64(req.image_base64.as_deref(), app_state.config.max_image_bytes)?,
  };

  let submitted = {
    let mut guard = session.write();
    submit_order_with(&app_state.intake, &mut guard.store, &submission)?
  };
  info!(position = submitted.position, "Order accepted.");

  Ok(HttpResponse::Created().json(OrderView::from_record(submitted.position, &submitted.record)))
}

#[instrument(name = "handler::confirm_payment", skip(app_state, body), fields(session_id = %path))]
pub async fn confirm_payment_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  body: web::Bytes,
) -> AppResult<HttpResponse> {
  let session = lookup_session(&app_state, path.into_inner())?;
  let req = ConfirmPaymentRequest::from_body(&body)?;

  let (transition, view) = {
    let mut guard = session.write();
    let transition = match req.order_position {
      Some(position) => guard.store.mark_paid_if_last(position)?,
      None => guard.store.mark_last_as_paid()?,
    };
    let position = guard.store.len().saturating_sub(1);
    let view = guard
      .store
      .last()
      .map(|record| OrderView::from_record(position, record))
      .ok_or_else(|| AppError::Internal("payment confirmed on an empty store".to_string()))?;
    (transition, view)
  };

  let (confirmed, message) = match transition {
    PaymentTransition::Confirmed => (true, "Payment confirmed. Thank you for your order!"),
    PaymentTransition::AlreadyPaid => (false, "Payment for this order was already confirmed."),
  };
  info!(confirmed, "Payment confirmation handled.");
  Ok(HttpResponse::Ok().json(json!({
    "confirmed": confirmed,
    "message": message,
    "order": view,
  })))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn payment_body_parsing() {
    assert_eq!(ConfirmPaymentRequest::from_body(b"").unwrap().order_position, None);
    assert_eq!(ConfirmPaymentRequest::from_body(b" \n").unwrap().order_position, None);
    assert_eq!(ConfirmPaymentRequest::from_body(b"{}").unwrap().order_position, None);
    assert_eq!(
      ConfirmPaymentRequest::from_body(br#"{"order_position": 3}"#).unwrap().order_position,
      Some(3)
    );
    for bad in [&br#"{"order_position":"0"}"#[..], b"order_position=0", br#"{"position":0}"#, b"null"] {
      assert!(matches!(ConfirmPaymentRequest::from_body(bad), Err(AppError::Validation(_))));
    }
  }
}
