// jersey_orders/src/lib.rs

//! Jersey order intake and analytics.
//!
//! A session collects jersey orders into an in-memory, append-only
//! [`OrderStore`], renders statistics over it and can export it once as CSV:
//!  - [`intake`]: a named-step [`Pipeline`] validates a form submission,
//!    normalizes its color and builds the [`OrderRecord`] before it is appended.
//!  - [`store`]: append, and payment confirmation of the most recent order.
//!  - [`analytics`]: totals, modal color and frequency tables, all read-only.
//!  - [`export`]: the `jersey_orders.csv` snapshot.
//!  - [`session`]: per-client state and the registry that keys it by id.

pub mod analytics;
pub mod core;
pub mod error;
pub mod export;
pub mod intake;
pub mod model;
pub mod pipeline;
pub mod session;
pub mod store;

pub use crate::core::context::Handler;
pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{SkipCondition, StepDef};

pub use crate::pipeline::definition::Pipeline;

pub use crate::analytics::{
  color_distribution, jersey_type_distribution, most_popular_color, size_distribution, sport_distribution,
  total_count, AnalyticsReport, FrequencyTable, PopularColor,
};
pub use crate::error::{OrderError, OrderResult};
pub use crate::export::{export_csv, CsvExport, EXPORT_COLUMNS, EXPORT_FILENAME, EXPORT_MIME};
pub use crate::intake::{
  intake_pipeline, submit_order, submit_order_with, IntakeCtxData, IntakePipeline, OrderSubmission, SubmittedOrder,
};
pub use crate::model::{
  color_to_hex, Color, JerseyType, OrderDetails, OrderRecord, PaletteColor, PaymentStatus, Size, Sport, PALETTE,
  QUANTITY_RANGE, UNIT_PRICE,
};
pub use crate::session::{Session, SessionId, SessionRegistry};
pub use crate::store::{OrderStore, PaymentTransition};
