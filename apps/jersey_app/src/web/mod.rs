// jersey_app/src/web/mod.rs

pub mod handlers;
pub mod routes;
