// jersey_app/src/pipelines/mod.rs

//! Builds the order intake pipeline used by the HTTP handlers.
//!
//! The library's default flow validates customer fields, quantity and color.
//! The service adds an upload check in front of record building: the form only
//! accepts JPEG or PNG images, and the decoded size is capped by configuration.

use crate::config::AppConfig;
use crate::services::image_upload::detect_image_format;
use jersey_orders::intake::STEP_BUILD_RECORD;
use jersey_orders::{intake_pipeline, ContextData, IntakeCtxData, IntakePipeline, OrderError, PipelineControl};
use std::sync::Arc;
use tracing::{debug, info};

pub const STEP_VERIFY_IMAGE_UPLOAD: &str = "verify_image_upload";

pub fn build_intake_pipeline(config: &AppConfig) -> IntakePipeline {
  let mut p = intake_pipeline();

  p.insert_before_step(
    STEP_BUILD_RECORD,
    STEP_VERIFY_IMAGE_UPLOAD,
    false,
    Some(Arc::new(|ctx_data: &ContextData<IntakeCtxData>| {
      ctx_data.read().submission.image.is_none()
    })),
  );

  let max_image_bytes = config.max_image_bytes;
  p.on_root(STEP_VERIFY_IMAGE_UPLOAD, move |ctx_data: ContextData<IntakeCtxData>| {
    let guard = ctx_data.read();
    let image = match guard.submission.image.as_deref() {
      Some(bytes) => bytes,
      None => return Ok::<_, OrderError>(PipelineControl::Continue),
    };
    if image.len() > max_image_bytes {
      return Err(OrderError::validation(
        "image",
        format!("image is {} bytes, the limit is {} bytes", image.len(), max_image_bytes),
      ));
    }
    match detect_image_format(image) {
      Some(format) => {
        debug!(?format, bytes = image.len(), "Jersey image accepted.");
        Ok(PipelineControl::Continue)
      }
      None => Err(OrderError::validation("image", "only JPG, JPEG and PNG images are accepted")),
    }
  });

  info!(steps = ?p.step_names(), "Order intake pipeline built.");
  p
}
