//! Author service binary: loads config from the environment, prepares the store and serves HTTP.

use author_service::{
    app, apply_migrations, connect, AppConfig, AppState, AuthorRepository, AuthorService,
    InMemoryAuthorRepository, PgAuthorRepository, StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();
    tracing::debug!(?config, "configuration loaded");

    let repository: Arc<dyn AuthorRepository> = match config.store {
        StoreKind::Postgres => {
            let pool = connect(&config.database).await?;
            if config.database.run_migrations {
                apply_migrations(&pool, &config.database.schema).await?;
            }
            Arc::new(PgAuthorRepository::new(pool, config.database.schema.clone()))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory author store; data is lost on exit");
            Arc::new(InMemoryAuthorRepository::new())
        }
    };
    let state = AppState::new(AuthorService::new(repository));

    let router = app(state, config.server.body_limit_bytes);
    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
