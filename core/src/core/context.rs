// jersey_orders/src/core/context.rs

//! Defines the `Handler<TData, Err>` type used by pipeline steps.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;

/// A step handler.
///
/// Handlers receive a clone of the pipeline's `ContextData<TData>`, lock it for
/// as long as they need, and return whether the pipeline should continue.
/// Intake is synchronous: a handler runs to completion before the next one
/// starts, so there is no suspension point to hold a guard across.
pub type Handler<TData, Err> = Box<dyn Fn(ContextData<TData>) -> Result<PipelineControl, Err> + Send + Sync>;
