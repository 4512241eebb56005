// jersey_orders/src/model/order.rs

use crate::error::{OrderError, OrderResult};
use crate::model::catalog::{JerseyType, Size, Sport};
use crate::model::color::Color;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Price of one jersey.
pub const UNIT_PRICE: u32 = 20;

pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
  /// Initial state of every order.
  Done,
  /// Terminal.
  Paid,
}

impl fmt::Display for PaymentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PaymentStatus::Done => f.write_str("Done"),
      PaymentStatus::Paid => f.write_str("Paid"),
    }
  }
}

/// Validated order attributes, everything an order needs except its timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
  pub customer_name: String,
  pub customer_email: String,
  pub sport: Sport,
  pub jersey_type: JerseyType,
  pub size: Size,
  pub color: Color,
  pub quantity: u32,
  pub image: Option<Vec<u8>>,
}

impl OrderDetails {
  pub fn validate(&self) -> OrderResult<()> {
    require_present("customer_name", &self.customer_name)?;
    require_present("customer_email", &self.customer_email)?;
    validate_quantity(self.quantity)
  }
}

pub(crate) fn require_present(field: &'static str, value: &str) -> OrderResult<()> {
  if value.trim().is_empty() {
    return Err(OrderError::validation(field, format!("{} is required", field)));
  }
  Ok(())
}

pub(crate) fn validate_quantity(quantity: u32) -> OrderResult<()> {
  if !QUANTITY_RANGE.contains(&quantity) {
    return Err(OrderError::validation(
      "quantity",
      format!(
        "quantity must be between {} and {}, got {}",
        QUANTITY_RANGE.start(),
        QUANTITY_RANGE.end(),
        quantity
      ),
    ));
  }
  Ok(())
}

/// One customer's jersey order.
///
/// Fields are read through accessors. The payment status is the only mutable
/// part and can only be changed by the owning `OrderStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
  order_date: DateTime<Utc>,
  details: OrderDetails,
  payment_status: PaymentStatus,
}

impl OrderRecord {
  pub fn new(details: OrderDetails, order_date: DateTime<Utc>) -> OrderResult<Self> {
    details.validate()?;
    Ok(Self {
      order_date,
      details,
      payment_status: PaymentStatus::Done,
    })
  }

  /// Creates a record stamped with the current time.
  pub fn create(details: OrderDetails) -> OrderResult<Self> {
    Self::new(details, Utc::now())
  }

  pub fn order_date(&self) -> DateTime<Utc> {
    self.order_date
  }

  pub fn customer_name(&self) -> &str {
    &self.details.customer_name
  }

  pub fn customer_email(&self) -> &str {
    &self.details.customer_email
  }

  pub fn sport(&self) -> Sport {
    self.details.sport
  }

  pub fn jersey_type(&self) -> JerseyType {
    self.details.jersey_type
  }

  pub fn size(&self) -> Size {
    self.details.size
  }

  pub fn color(&self) -> &Color {
    &self.details.color
  }

  pub fn quantity(&self) -> u32 {
    self.details.quantity
  }

  pub fn image(&self) -> Option<&[u8]> {
    self.details.image.as_deref()
  }

  pub fn payment_status(&self) -> PaymentStatus {
    self.payment_status
  }

  pub fn total_amount(&self) -> u32 {
    self.details.quantity * UNIT_PRICE
  }

  pub(crate) fn set_payment_status(&mut self, status: PaymentStatus) {
    self.payment_status = status;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn details(quantity: u32) -> OrderDetails {
    OrderDetails {
      customer_name: "Ana".to_string(),
      customer_email: "ana@example.com".to_string(),
      sport: Sport::Football,
      jersey_type: JerseyType::Home,
      size: Size::M,
      color: Color::parse("#3498db").unwrap(),
      quantity,
      image: None,
    }
  }

  #[test]
  fn total_amount_tracks_quantity_across_range() {
    for quantity in QUANTITY_RANGE {
      let record = OrderRecord::create(details(quantity)).unwrap();
      assert_eq!(record.total_amount(), quantity * 20);
      assert_eq!(record.payment_status(), PaymentStatus::Done);
    }
  }

  #[test]
  fn new_rejects_out_of_range_quantity_and_blank_fields() {
    assert!(matches!(
      OrderRecord::create(details(0)),
      Err(OrderError::Validation { field: "quantity", .. })
    ));
    assert!(matches!(
      OrderRecord::create(details(101)),
      Err(OrderError::Validation { field: "quantity", .. })
    ));

    let mut blank_email = details(1);
    blank_email.customer_email = "   ".to_string();
    assert!(matches!(
      OrderRecord::create(blank_email),
      Err(OrderError::Validation { field: "customer_email", .. })
    ));
  }
}
