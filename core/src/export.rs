// jersey_orders/src/export.rs

//! CSV snapshot of an order store.

use crate::error::{OrderError, OrderResult};
use crate::model::OrderRecord;
use crate::store::OrderStore;
use tracing::{info, instrument};

pub const EXPORT_FILENAME: &str = "jersey_orders.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// Header row, in column order.
pub const EXPORT_COLUMNS: [&str; 10] = [
  "Order Date",
  "Customer Name",
  "Sport",
  "Jersey Type",
  "Size",
  "Color",
  "Quantity",
  "Image",
  "Payment Status",
  "Total Amount",
];

const ORDER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A point-in-time CSV rendering of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
  pub filename: &'static str,
  pub mime: &'static str,
  /// Data rows, excluding the header.
  pub rows: usize,
  pub body: Vec<u8>,
}

/// Binary image data has no CSV form; the cell holds its size instead.
pub fn image_placeholder(image: Option<&[u8]>) -> String {
  match image {
    Some(bytes) => format!("<{} bytes>", bytes.len()),
    None => String::new(),
  }
}

fn export_row(order: &OrderRecord) -> [String; 10] {
  [
    order.order_date().format(ORDER_DATE_FORMAT).to_string(),
    order.customer_name().to_string(),
    order.sport().to_string(),
    order.jersey_type().to_string(),
    order.size().to_string(),
    order.color().to_string(),
    order.quantity().to_string(),
    image_placeholder(order.image()),
    order.payment_status().to_string(),
    order.total_amount().to_string(),
  ]
}

/// Renders every order, in insertion order, under [`EXPORT_COLUMNS`].
#[instrument(name = "export::export_csv", skip_all, fields(orders = store.len()), err(Display))]
pub fn export_csv(store: &OrderStore) -> OrderResult<CsvExport> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(EXPORT_COLUMNS)?;
  for order in store {
    writer.write_record(export_row(order))?;
  }
  let body = writer
    .into_inner()
    .map_err(|e| OrderError::Internal(format!("failed to flush CSV writer: {}", e)))?;

  info!(rows = store.len(), bytes = body.len(), "Order export rendered.");
  Ok(CsvExport {
    filename: EXPORT_FILENAME,
    mime: EXPORT_MIME,
    rows: store.len(),
    body,
  })
}
