
use serde::Deserialize;
use sqlx::{Pool, Postgres, postgres::{PgConnectOptions, PgPoolOptions}};

use crate::config;
use crate::model::{Error, Result};

pub type Db = Pool<Postgres>;

/// Connection parameters posted by the client.
#[derive(Clone, Deserialize)]
pub struct DbParams {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    #[serde(default = "default_schema")]
    pub schema: String,
}

fn default_schema() -> String {
    "public".to_string()
}

// Never print the password.
impl core::fmt::Debug for DbParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("database", &self.database)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

pub async fn new_db_pool(params: &DbParams) -> Result<Db> {
    let options = PgConnectOptions::new()
        .host(&params.host)
        .port(params.port)
        .username(&params.username)
        .password(&params.password)
        .database(&params.database);

    PgPoolOptions::new()
        .max_connections(config().DB_MAX_CONNECTIONS)
        .acquire_timeout(config().DB_ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
        .map_err(|ex| Error::Connect(ex.to_string()))
}
