// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use jersey_orders::{
  Color, JerseyType, OrderDetails, OrderRecord, OrderStore, OrderSubmission, PipelineControl, Size, Sport,
};
use once_cell::sync::Lazy;
use tracing::Level;

// --- Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Submission and record builders ---
pub fn submission() -> OrderSubmission {
  OrderSubmission {
    customer_name: "Ana Souza".to_string(),
    customer_email: "ana@example.com".to_string(),
    sport: Sport::Football,
    jersey_type: JerseyType::Home,
    size: Size::M,
    color: "#3498db".to_string(),
    quantity: 1,
    image: None,
  }
}

pub fn submission_with(color: &str, size: Size, quantity: u32) -> OrderSubmission {
  OrderSubmission {
    color: color.to_string(),
    size,
    quantity,
    ..submission()
  }
}

pub fn record(color: &str, size: Size) -> OrderRecord {
  OrderRecord::create(OrderDetails {
    customer_name: "Ben".to_string(),
    customer_email: "ben@example.com".to_string(),
    sport: Sport::Basketball,
    jersey_type: JerseyType::Away,
    size,
    color: Color::parse(color).expect("test color must normalize"),
    quantity: 2,
    image: None,
  })
  .expect("test record must be valid")
}

pub fn store_with(entries: &[(&str, Size)]) -> OrderStore {
  let mut store = OrderStore::new();
  for (color, size) in entries {
    store.append(record(color, *size));
  }
  store
}

// --- Generic engine test context ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Order engine error: {0}")]
  Engine(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<jersey_orders::OrderError> for TestError {
  fn from(err: jersey_orders::OrderError) -> Self {
    TestError::Engine(format!("{:?}", err))
  }
}

pub fn create_simple_handler(
  step_name: &'static str,
  message_to_append: &'static str,
) -> impl Fn(jersey_orders::ContextData<TestContext>) -> Result<PipelineControl, TestError> + Send + Sync + 'static {
  move |ctx| {
    let mut guard = ctx.write();
    guard.counter += 1;
    guard.message.push_str(message_to_append);
    guard.steps_executed.push(step_name.to_string());
    tracing::debug!(target: "test_handlers", step = %step_name, "executed, counter: {}", guard.counter);
    if guard.should_stop_at.as_deref() == Some(step_name) {
      return Ok(PipelineControl::Stop);
    }
    Ok(PipelineControl::Continue)
  }
}

pub fn create_failing_handler(
  step_name: &'static str,
  error_message: &'static str,
) -> impl Fn(jersey_orders::ContextData<TestContext>) -> Result<PipelineControl, TestError> + Send + Sync + 'static {
  move |ctx| {
    ctx.write().steps_executed.push(step_name.to_string());
    tracing::warn!(target: "test_handlers", step = %step_name, "failing with: '{}'", error_message);
    Err(TestError::Handler(error_message.to_string()))
  }
}
