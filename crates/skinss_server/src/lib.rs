//! HTTP surface for the skinss asset server.
//!
//! Thin glue over [`skinss_service::SkinService`]: route definitions, body
//! size caps, header handling, and the mapping from the error taxonomy to
//! HTTP status codes. All validation and storage semantics live below the
//! facade.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;

pub use api::{ApiState, create_router};
pub use config::ServerConfig;
