// jersey_orders/src/store.rs

//! The session's in-memory order table.

use crate::error::{OrderError, OrderResult};
use crate::model::{OrderRecord, PaymentStatus};
use tracing::{debug, info};

/// Outcome of a payment confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentTransition {
  /// The order moved from `Done` to `Paid`.
  Confirmed,
  /// The order was already `Paid`; nothing changed.
  AlreadyPaid,
}

/// Append-only sequence of orders in insertion order.
///
/// Records are never removed or reordered. The only mutation after insertion
/// is flipping the payment status of the most recent record.
#[derive(Debug, Default, Clone)]
pub struct OrderStore {
  orders: Vec<OrderRecord>,
}

impl OrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a record and returns its position. Duplicates are allowed.
  pub fn append(&mut self, record: OrderRecord) -> usize {
    self.orders.push(record);
    let position = self.orders.len() - 1;
    debug!(position, "Order appended to store.");
    position
  }

  /// Marks the most recent order as paid.
  ///
  /// Fails with `EmptyStore` when there is nothing to pay for. Confirming an
  /// order that is already paid is a no-op reported as `AlreadyPaid`.
  pub fn mark_last_as_paid(&mut self) -> OrderResult<PaymentTransition> {
    let position = self.orders.len().checked_sub(1).ok_or(OrderError::EmptyStore)?;
    self.mark_paid_at(position)
  }

  /// Like [`OrderStore::mark_last_as_paid`], but only while the order at
  /// `position` is still the most recent one.
  pub fn mark_paid_if_last(&mut self, position: usize) -> OrderResult<PaymentTransition> {
    let latest = self.orders.len().checked_sub(1).ok_or(OrderError::EmptyStore)?;
    if position != latest {
      return Err(OrderError::NotLatestOrder { position, latest });
    }
    self.mark_paid_at(latest)
  }

  fn mark_paid_at(&mut self, position: usize) -> OrderResult<PaymentTransition> {
    let record = self
      .orders
      .get_mut(position)
      .ok_or_else(|| OrderError::Internal(format!("no order at position {}", position)))?;
    if record.payment_status() == PaymentStatus::Paid {
      debug!(position, "Payment already confirmed, ignoring repeat confirmation.");
      return Ok(PaymentTransition::AlreadyPaid);
    }
    record.set_payment_status(PaymentStatus::Paid);
    info!(position, total_amount = record.total_amount(), "Payment confirmed for latest order.");
    Ok(PaymentTransition::Confirmed)
  }

  /// All orders in insertion order.
  pub fn all(&self) -> &[OrderRecord] {
    &self.orders
  }

  pub fn iter(&self) -> std::slice::Iter<'_, OrderRecord> {
    self.orders.iter()
  }

  pub fn last(&self) -> Option<&OrderRecord> {
    self.orders.last()
  }

  pub fn get(&self, position: usize) -> Option<&OrderRecord> {
    self.orders.get(position)
  }

  pub fn len(&self) -> usize {
    self.orders.len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.is_empty()
  }
}

impl<'a> IntoIterator for &'a OrderStore {
  type Item = &'a OrderRecord;
  type IntoIter = std::slice::Iter<'a, OrderRecord>;

  fn into_iter(self) -> Self::IntoIter {
    self.orders.iter()
  }
}
