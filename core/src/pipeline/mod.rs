// jersey_orders/src/pipeline/mod.rs

//! The step engine: construction, handler registration and execution.

pub mod definition;
pub mod execution;
pub mod hooks;

pub use definition::Pipeline;
