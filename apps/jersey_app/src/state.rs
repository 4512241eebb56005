// jersey_app/src/state.rs
use crate::config::AppConfig;
use jersey_orders::{IntakePipeline, SessionRegistry};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub sessions: Arc<SessionRegistry>,
  pub intake: Arc<IntakePipeline>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(config: Arc<AppConfig>) -> Self {
    Self {
      sessions: Arc::new(SessionRegistry::new()),
      intake: Arc::new(crate::pipelines::build_intake_pipeline(&config)),
      config,
    }
  }
}
