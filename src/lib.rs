//! Ladrilleria API - a thin HTTP façade over a managed key-value table.
//!
//! Accepts pedido and contacto records as arbitrary JSON objects, assigns
//! each a unique `id` when one is missing, stores them as items in a single
//! table, and lists everything back via a full-table scan. There is no
//! schema, no pagination, and no update or delete surface.
//!
//! # Architecture
//!
//! - [`record`]: record shape and identifier assignment.
//! - [`attr`]: marshalling between JSON records and the engine's typed
//!   attribute encoding.
//! - [`storage`]: the [`storage::TableStore`] trait with engine-backed and
//!   in-memory implementations.
//! - [`server`]: axum routes, CORS, and request logging.

pub mod attr;
pub mod error;
pub mod record;
pub mod server;
pub mod storage;

pub use error::{Error, Result};
pub use record::{ensure_id, Record};
