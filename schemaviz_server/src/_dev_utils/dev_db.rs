
use tracing::info;

use crate::model::ModelManager;

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

pub const DEV_SCHEMA: &str = "schemaviz_dev";

// `orders` references `users` twice, `shipments` holds a composite key and
// `members` / `projects` each own a constraint named `fk_owner`.
const FIXTURE: &[&str] = &[
    "DROP SCHEMA IF EXISTS schemaviz_dev CASCADE",
    "CREATE SCHEMA schemaviz_dev",
    "CREATE TABLE schemaviz_dev.users (
        id BIGSERIAL PRIMARY KEY,
        email TEXT NOT NULL
    )",
    "CREATE TABLE schemaviz_dev.orders (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES schemaviz_dev.users (id),
        reviewer_id BIGINT REFERENCES schemaviz_dev.users (id)
    )",
    "CREATE TABLE schemaviz_dev.order_lines (
        order_id BIGINT NOT NULL REFERENCES schemaviz_dev.orders (id),
        line_no INT NOT NULL,
        PRIMARY KEY (order_id, line_no)
    )",
    "CREATE TABLE schemaviz_dev.shipments (
        id BIGSERIAL PRIMARY KEY,
        order_id BIGINT NOT NULL,
        line_no INT NOT NULL,
        FOREIGN KEY (order_id, line_no) REFERENCES schemaviz_dev.order_lines (order_id, line_no)
    )",
    "CREATE TABLE schemaviz_dev.teams (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE schemaviz_dev.members (
        id BIGSERIAL PRIMARY KEY,
        team_id BIGINT NOT NULL CONSTRAINT fk_owner REFERENCES schemaviz_dev.teams (id)
    )",
    "CREATE TABLE schemaviz_dev.projects (
        id BIGSERIAL PRIMARY KEY,
        owner_id BIGINT NOT NULL CONSTRAINT fk_owner REFERENCES schemaviz_dev.users (id)
    )",
];

pub async fn init_dev_db() -> Result<()> {
    info!("{:<12} - init_dev_db()", "FOR-DEV-ONLY");

    let mm = ModelManager::new();
    let conn = mm.connect(&super::dev_params("public")).await?;
    for statement in FIXTURE {
        sqlx::query(statement).execute(conn.db()).await?;
    }
    mm.close().await;

    Ok(())
}
