// jersey_orders/src/pipeline/hooks.rs

//! Registration of `before`, `on` and `after` handlers for pipeline steps.

use crate::core::context::Handler;
use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use crate::error::OrderError;
use crate::pipeline::definition::Pipeline;

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<OrderError> + Send + Sync + 'static,
{
  /// Registers a `before` hook for a step.
  ///
  /// The handler may return any error type convertible into the pipeline's
  /// `Err`, so step code can return `OrderError` or `anyhow::Error` directly.
  pub fn before_root<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.step_index(step_name);
    self
      .before
      .entry(step_name.to_string())
      .or_default()
      .push(wrap_handler(handler_fn));
  }

  pub fn on_root<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.step_index(step_name);
    self.on.entry(step_name.to_string()).or_default().push(wrap_handler(handler_fn));
  }

  pub fn after_root<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.step_index(step_name);
    self
      .after
      .entry(step_name.to_string())
      .or_default()
      .push(wrap_handler(handler_fn));
  }
}

fn wrap_handler<TData, Err, UserProvidedErr>(
  handler_fn: impl Fn(ContextData<TData>) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
) -> Handler<TData, Err>
where
  TData: 'static + Send + Sync,
  UserProvidedErr: Into<Err> + 'static,
{
  Box::new(move |ctx_data| handler_fn(ctx_data).map_err(Into::into))
}
