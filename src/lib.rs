//! pipeline-hello: a greeting endpoint and a health check over HTTP.
//! Used by: binary entrypoint, integration tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use server::build_router;
