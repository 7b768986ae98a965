
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use schemaviz_objects::Graph;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::model::catalog::CatalogBmc;
use crate::model::{DbParams, ModelManager};
use crate::web::Result;

pub fn routes(mm: ModelManager) -> Router {
    Router::new()
        .route("/api/db-connect", post(api_db_connect))
        .route("/api/columns", post(api_columns))
        .route("/api/health", get(api_health))
        .with_state(mm)
}

#[derive(Debug, Deserialize)]
struct TableRequest {
    table: String,
}

/// Replaces the active connection and returns the table graph of its schema.
async fn api_db_connect(
    State(mm): State<ModelManager>,
    Json(params): Json<DbParams>,
) -> Result<Json<Graph>> {
    debug!("{:<12} - api_db_connect - {params:?}", "HANDLER");

    let conn = mm.connect(&params).await?;
    let graph = CatalogBmc::schema_graph(&conn).await?;

    Ok(Json(graph))
}

async fn api_columns(
    State(mm): State<ModelManager>,
    Json(req): Json<TableRequest>,
) -> Result<Json<Graph>> {
    debug!("{:<12} - api_columns - {}", "HANDLER", req.table);

    let conn = mm.conn().await?;
    let graph = CatalogBmc::column_graph(&conn, &req.table).await?;

    Ok(Json(graph))
}

async fn api_health(State(mm): State<ModelManager>) -> Json<Value> {
    let connected = mm.is_connected().await;
    Json(json!({
        "status": "ok",
        "connected": connected
    }))
}
