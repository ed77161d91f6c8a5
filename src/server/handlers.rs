//! HTTP route handlers for the API server.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use serde_json::Value;

use super::error::ApiError;
use crate::attr::{marshal_item, unmarshal_item};
use crate::error::Error;
use crate::record::{Record, ensure_id};
use crate::storage::TableStore;

/// Shared application state.
///
/// The table handle is constructed once at startup and injected here, never
/// reached through a global, so tests can substitute a fake backend.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<dyn TableStore>,
}

/// Handle GET /
pub async fn handle_index() -> Html<&'static str> {
    Html("<h1>Servidor de Ladrilleria en funcionamiento</h1>")
}

/// Handle POST /api/pedidos and POST /api/contactos.
///
/// Both record kinds share the table and the flow is identical: normalize
/// the body, marshal it, write it unconditionally, and echo the stored
/// record back with its assigned `id`.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let record = match body {
        Value::Object(fields) => fields,
        _ => {
            return Err(ApiError(Error::InvalidInput(
                "request body must be a JSON object".to_string(),
            )));
        }
    };

    let record = ensure_id(record);
    state.table.put_item(marshal_item(&record)).await?;

    tracing::debug!(id = ?record.get("id"), "record stored");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handle GET /api/contactos.
///
/// Returns every record in the table, of either kind, since both share it.
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let items = state.table.scan().await?;
    let records = items
        .iter()
        .map(unmarshal_item)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = records.len(), "records listed");
    Ok(Json(records))
}
