
use serde_json::json;

// Expects the server on the default address and the dev database from
// `_dev_utils` (run the ignored tests once to create `schemaviz_dev`).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let hc = httpc_test::new_client("http://localhost:8000")?;

    hc.do_get("/api/health").await?.print().await?;

    let req_connect = hc.do_post(
        "/api/db-connect",
        json!({
            "host": "localhost",
            "port": 5432,
            "username": "postgres",
            "password": "welcome",
            "database": "postgres",
            "schema": "schemaviz_dev"
        }),
    );
    req_connect.await?.print().await?;

    hc.do_post("/api/columns", json!({"table": "orders"})).await?.print().await?;

    Ok(())
}
