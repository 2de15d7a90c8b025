use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lunchly_db::DbConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lunchly_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DbConfig::from_env()?;
    tracing::info!(
        max_connections = config.max_connections,
        "Loaded database configuration"
    );

    let pool = lunchly_db::create_pool(&config).await?;
    tracing::info!("Database connection pool created");

    lunchly_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    lunchly_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    pool.close().await;
    Ok(())
}
