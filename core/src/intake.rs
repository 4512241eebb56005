// jersey_orders/src/intake.rs

//! Order intake: turns a form submission into a stored order.
//!
//! The intake pipeline is side-effect free. Its steps validate the raw
//! submission, normalize the color and build the `OrderRecord`;
//! [`submit_order_with`] appends the record only after a completed run, so a
//! rejected submission never touches the store.

use crate::core::context_data::ContextData;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::error::{OrderError, OrderResult};
use crate::model::order::{require_present, validate_quantity};
use crate::model::{Color, JerseyType, OrderDetails, OrderRecord, Size, Sport};
use crate::pipeline::Pipeline;
use crate::store::OrderStore;
use tracing::{info, instrument, warn};

pub const STEP_VALIDATE_CUSTOMER: &str = "validate_customer";
pub const STEP_VALIDATE_QUANTITY: &str = "validate_quantity";
pub const STEP_NORMALIZE_COLOR: &str = "normalize_color";
pub const STEP_BUILD_RECORD: &str = "build_record";

/// Raw field values collected by the order form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmission {
  pub customer_name: String,
  pub customer_email: String,
  pub sport: Sport,
  pub jersey_type: JerseyType,
  pub size: Size,
  /// `#rrggbb` or legacy `rgb(r,g,b)`.
  pub color: String,
  pub quantity: u32,
  pub image: Option<Vec<u8>>,
}

/// Pipeline data for one submission.
#[derive(Debug, Clone)]
pub struct IntakeCtxData {
  pub submission: OrderSubmission,
  pub color: Option<Color>,
  pub record: Option<OrderRecord>,
  /// Set by a step that stops the pipeline to explain why.
  pub rejection: Option<String>,
}

impl IntakeCtxData {
  pub fn new(submission: OrderSubmission) -> Self {
    Self {
      submission,
      color: None,
      record: None,
      rejection: None,
    }
  }
}

pub type IntakePipeline = Pipeline<IntakeCtxData, OrderError>;

/// An order accepted into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedOrder {
  pub position: usize,
  pub record: OrderRecord,
}

pub fn validate_customer_step(ctx_data: ContextData<IntakeCtxData>) -> OrderResult<PipelineControl> {
  let guard = ctx_data.read();
  require_present("customer_name", &guard.submission.customer_name)?;
  require_present("customer_email", &guard.submission.customer_email)?;
  Ok(PipelineControl::Continue)
}

pub fn validate_quantity_step(ctx_data: ContextData<IntakeCtxData>) -> OrderResult<PipelineControl> {
  let quantity = ctx_data.read().submission.quantity;
  validate_quantity(quantity)?;
  Ok(PipelineControl::Continue)
}

pub fn normalize_color_step(ctx_data: ContextData<IntakeCtxData>) -> OrderResult<PipelineControl> {
  let raw = ctx_data.read().submission.color.clone();
  let color = Color::parse(&raw)?;
  ctx_data.write().color = Some(color);
  Ok(PipelineControl::Continue)
}

pub fn build_record_step(ctx_data: ContextData<IntakeCtxData>) -> OrderResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let color = guard
    .color
    .clone()
    .ok_or_else(|| OrderError::Internal("color was not normalized before building the record".to_string()))?;
  let submission = &guard.submission;
  let details = OrderDetails {
    customer_name: submission.customer_name.clone(),
    customer_email: submission.customer_email.clone(),
    sport: submission.sport,
    jersey_type: submission.jersey_type,
    size: submission.size,
    color,
    quantity: submission.quantity,
    image: submission.image.clone(),
  };
  guard.record = Some(OrderRecord::create(details)?);
  Ok(PipelineControl::Continue)
}

/// The default intake flow. Callers may add steps (for example upload checks)
/// before running it through [`submit_order_with`].
pub fn intake_pipeline() -> IntakePipeline {
  let mut p = IntakePipeline::new(&[
    (STEP_VALIDATE_CUSTOMER, false, None),
    (STEP_VALIDATE_QUANTITY, false, None),
    (STEP_NORMALIZE_COLOR, false, None),
    (STEP_BUILD_RECORD, false, None),
  ]);
  p.on_root(STEP_VALIDATE_CUSTOMER, validate_customer_step);
  p.on_root(STEP_VALIDATE_QUANTITY, validate_quantity_step);
  p.on_root(STEP_NORMALIZE_COLOR, normalize_color_step);
  p.on_root(STEP_BUILD_RECORD, build_record_step);
  p
}

/// Validates `submission` with `pipeline` and appends the resulting record.
///
/// The store is only touched after the pipeline completes. A pipeline stopped
/// by one of its steps is reported as a validation failure carrying the
/// step's rejection message.
#[instrument(name = "intake::submit_order", skip_all, fields(store_len = store.len()), err(Display))]
pub fn submit_order_with(
  pipeline: &IntakePipeline,
  store: &mut OrderStore,
  submission: &OrderSubmission,
) -> OrderResult<SubmittedOrder> {
  let ctx_data = ContextData::new(IntakeCtxData::new(submission.clone()));

  match pipeline.run(ctx_data.clone())? {
    PipelineResult::Completed => {}
    PipelineResult::Stopped => {
      let reason = ctx_data
        .read()
        .rejection
        .clone()
        .unwrap_or_else(|| "submission was halted before completion".to_string());
      warn!(%reason, "Order submission rejected.");
      return Err(OrderError::validation("submission", reason));
    }
  }

  let record = ctx_data
    .write()
    .record
    .take()
    .ok_or_else(|| OrderError::Internal("intake pipeline completed without building a record".to_string()))?;
  let position = store.append(record.clone());
  info!(
    position,
    quantity = record.quantity(),
    total_amount = record.total_amount(),
    "Order submitted."
  );
  Ok(SubmittedOrder { position, record })
}

/// Validate-then-append with the default intake flow.
pub fn submit_order(store: &mut OrderStore, submission: &OrderSubmission) -> OrderResult<SubmittedOrder> {
  submit_order_with(&intake_pipeline(), store, submission)
}
