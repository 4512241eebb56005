// jersey_app/src/services/mod.rs

pub mod image_upload;
