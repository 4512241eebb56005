// tests/error_handling_tests.rs
mod common;

use common::*;
use jersey_orders::{ContextData, OrderError, Pipeline, PipelineControl};
use serial_test::serial;

#[test]
#[serial]
fn test_order_error_survives_anyhow_round_trip() {
  setup_tracing();
  let wrapped = anyhow::Error::new(OrderError::EmptyStore);
  assert!(matches!(OrderError::from(wrapped), OrderError::EmptyStore));
}

#[test]
#[serial]
fn test_foreign_errors_become_handler_errors() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, OrderError>::new(&[("parse", false, None)]);
  pipeline.on_root("parse", |ctx: ContextData<TestContext>| -> anyhow::Result<PipelineControl> {
    let parsed: i32 = "not a number".parse()?;
    ctx.write().counter = parsed;
    Ok(PipelineControl::Continue)
  });

  match pipeline.run(ContextData::new(TestContext::default())) {
    Err(OrderError::HandlerError { source }) => assert!(source.to_string().contains("invalid digit")),
    other => panic!("Expected HandlerError, got {:?}", other),
  }
}

#[test]
#[serial]
fn test_engine_errors_convert_into_custom_error_type() {
  setup_tracing();
  let pipeline = Pipeline::<TestContext, TestError>::new(&[("missing", false, None)]);
  match pipeline.run(ContextData::new(TestContext::default())) {
    Err(TestError::Engine(s)) => {
      assert!(s.contains("HandlerMissing"));
      assert!(s.contains("missing"));
    }
    other => panic!("Expected TestError::Engine(HandlerMissing), got {:?}", other),
  }
}

#[test]
#[serial]
fn test_error_messages_name_the_problem() {
  setup_tracing();
  assert_eq!(
    OrderError::validation("customer_name", "customer_name is required").to_string(),
    "Validation failed for 'customer_name': customer_name is required"
  );
  assert_eq!(
    OrderError::NotLatestOrder { position: 0, latest: 2 }.to_string(),
    "Order at position 0 is no longer the latest order (latest is 2)"
  );
}
