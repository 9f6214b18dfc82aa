use std::sync::Arc;

use roombook::{
    config::Config, error::AppError, scheduler::cleanup_notifications, service::settings,
    service::telegram::TelegramNotifier, startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    settings::bootstrap_defaults(&db).await?;

    tracing::info!("Starting roombook backend");

    let notifier = Arc::new(TelegramNotifier::new(config.bot_token.clone()));

    cleanup_notifications::start_scheduler(db.clone(), notifier, config.display_offset()).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to listen for shutdown: {}", e)))?;

    tracing::info!("Shutting down");

    Ok(())
}
