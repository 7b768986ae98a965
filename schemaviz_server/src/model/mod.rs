
mod error;
mod store;
pub mod catalog;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

pub use self::error::{Error, Result};
pub use store::DbParams;
use store::{new_db_pool, Db};

/// An open pool together with the schema it was opened for.
#[derive(Clone)]
pub struct Connection {
    db: Db,
    schema: String,
}

impl Connection {
    pub(crate) fn db(&self) -> &Db {
        &self.db
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }
}

/// Owns the lifecycle of the database pool shared by request handlers.
///
/// At most one pool is active. `connect` disposes of the current pool before
/// opening the next one, so a failed reconnect leaves no active connection.
#[derive(Clone, Default)]
pub struct ModelManager {
    conn: Arc<RwLock<Option<Connection>>>,
}

impl ModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn connect(&self, params: &DbParams) -> Result<Connection> {
        let mut current = self.conn.write().await;

        if let Some(previous) = current.take() {
            info!("{:<12} - closing previous pool ({})", "CONNECT", previous.schema);
            previous.db.close().await;
        }

        info!("{:<12} - {params:?}", "CONNECT");
        let db = new_db_pool(params).await?;
        let conn = Connection {
            db,
            schema: params.schema.clone(),
        };
        *current = Some(conn.clone());

        Ok(conn)
    }

    pub async fn conn(&self) -> Result<Connection> {
        self.conn
            .read()
            .await
            .clone()
            .ok_or(Error::NoActiveConnection)
    }

    pub async fn is_connected(&self) -> bool {
        self.conn.read().await.is_some()
    }

    pub async fn close(&self) {
        if let Some(conn) = self.conn.write().await.take() {
            info!("{:<12} - closing pool", "MODEL");
            conn.db.close().await;
        }
    }
}
