// jersey_app/src/web/handlers/catalog_handlers.rs

use actix_web::HttpResponse;
use jersey_orders::{JerseyType, Size, Sport, PALETTE, QUANTITY_RANGE, UNIT_PRICE};
use serde_json::json;

/// Choices offered by the order form.
pub async fn palette_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({
    "colors": PALETTE,
    "sports": Sport::ALL,
    "jersey_types": JerseyType::ALL,
    "sizes": Size::ALL,
    "quantity": { "min": QUANTITY_RANGE.start(), "max": QUANTITY_RANGE.end() },
    "unit_price": UNIT_PRICE,
  }))
}
