use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use canvass_api::config::{Config, StoreKind};
use canvass_api::state::AppState;
use canvass_storage::memory::MemoryStore;
use canvass_storage::s3::S3Store;
use canvass_storage::store::SurveyStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn SurveyStore> = match config.store {
        StoreKind::S3 => {
            let s3 = canvass_storage::client::build_client().await;
            Arc::new(S3Store::new(s3, config.bucket.clone()))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store, data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };
    tracing::info!(store = ?config.store, bucket = %config.bucket, "starting canvass api");

    let app = canvass_api::router(AppState { store });

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
