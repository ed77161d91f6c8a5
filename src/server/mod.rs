//! HTTP server for the ladrilleria API.
//!
//! Exposes the create and list routes over a shared table store, with
//! permissive CORS and request logging.

mod config;
mod error;
mod handlers;
mod middleware;
mod server;

pub use config::{Backend, CliArgs, ServerConfig, DEFAULT_PORT};
pub use handlers::AppState;
pub use server::{build_router, ApiServer};
