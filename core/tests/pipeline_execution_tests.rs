// tests/pipeline_execution_tests.rs
mod common;

use common::*;
use jersey_orders::{ContextData, OrderError, Pipeline, PipelineControl, PipelineResult};
use serial_test::serial;
use std::sync::Arc;

#[test]
#[serial]
fn test_pipeline_runs_steps_in_order() {
  setup_tracing();
  let mut pipeline =
    Pipeline::<TestContext, TestError>::new(&[("step1", false, None), ("step2", false, None), ("step3", false, None)]);

  pipeline.on_root("step1", create_simple_handler("step1", " S1"));
  pipeline.on_root("step2", create_simple_handler("step2", " S2"));
  pipeline.on_root("step3", create_simple_handler("step3", " S3"));

  let ctx = ContextData::new(TestContext::default());
  let result = pipeline.run(ctx.clone());

  assert_eq!(result.unwrap(), PipelineResult::Completed);
  let guard = ctx.read();
  assert_eq!(guard.counter, 3);
  assert_eq!(guard.message, " S1 S2 S3");
  assert_eq!(guard.steps_executed, vec!["step1", "step2", "step3"]);
}

#[test]
#[serial]
fn test_pipeline_stops_on_pipeline_control_stop() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[
    ("stepA", false, None),
    ("stopStep", false, None),
    ("stepC", false, None),
  ]);

  pipeline.on_root("stepA", create_simple_handler("stepA", "A"));
  pipeline.on_root("stopStep", create_simple_handler("stopStep", "B"));
  pipeline.on_root("stepC", create_simple_handler("stepC", "C"));

  let ctx = ContextData::new(TestContext {
    should_stop_at: Some("stopStep".to_string()),
    ..Default::default()
  });
  let result = pipeline.run(ctx.clone());

  assert_eq!(result.unwrap(), PipelineResult::Stopped);
  let guard = ctx.read();
  assert_eq!(guard.message, "AB");
  assert_eq!(guard.steps_executed, vec!["stepA", "stopStep"]);
}

#[test]
#[serial]
fn test_pipeline_propagates_handler_error() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[
    ("good_step", false, None),
    ("bad_step", false, None),
    ("another_step", false, None),
  ]);

  pipeline.on_root("good_step", create_simple_handler("good_step", "Good"));
  pipeline.on_root("bad_step", create_failing_handler("bad_step", "I am a bad step!"));
  pipeline.on_root("another_step", create_simple_handler("another_step", "NeverRun"));

  let ctx = ContextData::new(TestContext::default());
  let result = pipeline.run(ctx.clone());

  assert_eq!(result.unwrap_err(), TestError::Handler("I am a bad step!".to_string()));
  let guard = ctx.read();
  assert_eq!(guard.counter, 1);
  assert_eq!(guard.steps_executed, vec!["good_step", "bad_step"]);
}

#[test]
#[serial]
fn test_pipeline_skips_step_if_condition_met() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[
    ("step1", false, None),
    (
      "step_to_skip",
      false,
      Some(Arc::new(|ctx: &ContextData<TestContext>| ctx.read().counter > 0)),
    ),
    ("step3", false, None),
  ]);

  pipeline.on_root("step1", create_simple_handler("step1", " S1"));
  pipeline.on_root("step_to_skip", create_simple_handler("step_to_skip", " SKIPPED"));
  pipeline.on_root("step3", create_simple_handler("step3", " S3"));

  let ctx = ContextData::new(TestContext::default());
  assert_eq!(pipeline.run(ctx.clone()).unwrap(), PipelineResult::Completed);
  assert_eq!(ctx.read().message, " S1 S3");
}

#[test]
#[serial]
fn test_before_on_after_run_in_phase_order() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[("only", false, None)]);

  pipeline.after_root("only", create_simple_handler("after", "[after]"));
  pipeline.on_root("only", create_simple_handler("on", "[on]"));
  pipeline.before_root("only", create_simple_handler("before", "[before]"));

  let ctx = ContextData::new(TestContext::default());
  pipeline.run(ctx.clone()).unwrap();
  assert_eq!(ctx.read().message, "[before][on][after]");
}

#[test]
#[serial]
fn test_required_step_without_handlers_fails() {
  setup_tracing();
  let pipeline = Pipeline::<TestContext, OrderError>::new(&[("missing", false, None)]);
  match pipeline.run(ContextData::new(TestContext::default())) {
    Err(OrderError::HandlerMissing { step_name }) => assert_eq!(step_name, "missing"),
    other => panic!("Expected HandlerMissing, got {:?}", other),
  }
}

#[test]
#[serial]
fn test_optional_step_without_handlers_is_skipped() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[("maybe", true, None), ("real", false, None)]);
  pipeline.on_root("real", create_simple_handler("real", "R"));

  let ctx = ContextData::new(TestContext::default());
  assert_eq!(pipeline.run(ctx.clone()).unwrap(), PipelineResult::Completed);
  assert_eq!(ctx.read().steps_executed, vec!["real"]);
}

#[test]
#[serial]
fn test_step_insertion_and_removal() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[("first", false, None), ("last", false, None)]);
  pipeline.insert_after_step("first", "middle", false, None);
  pipeline.insert_before_step("first", "zeroth", true, None);
  assert_eq!(pipeline.step_names(), vec!["zeroth", "first", "middle", "last"]);

  pipeline.on_root("first", create_simple_handler("first", "1"));
  pipeline.on_root("middle", create_simple_handler("middle", "2"));
  pipeline.on_root("last", create_simple_handler("last", "3"));
  pipeline.remove_step("middle");
  pipeline.remove_step("not_there");
  assert!(!pipeline.has_step("middle"));

  let ctx = ContextData::new(TestContext::default());
  pipeline.run(ctx.clone()).unwrap();
  assert_eq!(ctx.read().message, "13");
}

#[test]
#[serial]
fn test_set_optional_and_skip_condition() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[("a", false, None), ("b", false, None)]);
  pipeline.on_root("a", create_simple_handler("a", "A"));
  pipeline.set_optional("b", true);
  pipeline.set_skip_condition("a", Some(Arc::new(|_ctx: &ContextData<TestContext>| true)));

  let ctx = ContextData::new(TestContext::default());
  assert_eq!(pipeline.run(ctx.clone()).unwrap(), PipelineResult::Completed);
  assert!(ctx.read().steps_executed.is_empty());
}

#[test]
#[should_panic(expected = "not found in pipeline definition")]
fn test_registering_handler_for_unknown_step_panics() {
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[("a", false, None)]);
  pipeline.on_root("typo", |_ctx: ContextData<TestContext>| {
    Ok::<_, TestError>(PipelineControl::Continue)
  });
}
