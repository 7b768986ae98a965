
mod dev_db;

use tokio::sync::OnceCell;

use crate::model::{DbParams, ModelManager};

pub use dev_db::DEV_SCHEMA;

pub async fn init_dev() {
    static INIT: OnceCell<()> = OnceCell::const_new();

    INIT.get_or_init(|| async {
        dev_db::init_dev_db().await.unwrap();
    })
    .await;
}

/// Each `#[tokio::test]` runs its own runtime, so the pool is opened per call
/// while the fixture is only built once.
pub async fn init_test() -> ModelManager {
    init_dev().await;

    let mm = ModelManager::new();
    mm.connect(&dev_params(DEV_SCHEMA)).await.unwrap();
    mm
}

pub fn dev_params(schema: &str) -> DbParams {
    DbParams {
        host: "localhost".to_string(),
        port: 5432,
        username: "postgres".to_string(),
        password: "welcome".to_string(),
        database: "postgres".to_string(),
        schema: schema.to_string(),
    }
}
