use chrono::{FixedOffset, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::{cleanup::CleanupService, notification::Notifier},
};

/// Starts the cleanup notification scheduler.
///
/// Runs every five minutes and sweeps for published bookings whose end time
/// has passed without a cleanup notification. The sweep is idempotent, so an
/// overlapping or repeated run processes nothing extra.
///
/// # Arguments
/// - `db`: Database connection
/// - `notifier`: Dispatch backend for cleanup messages
/// - `tz`: Display timezone for message timestamps
pub async fn start_scheduler(
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    tz: FixedOffset,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_notifier = notifier.clone();

    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let notifier = job_notifier.clone();

        Box::pin(async move {
            let service = CleanupService::new(&db, notifier.as_ref(), tz);

            match service.sweep(Utc::now()).await {
                Ok(batch) if batch.notified > 0 => {
                    tracing::info!(
                        "Cleanup sweep notified {} bookings ({} still pending)",
                        batch.notified,
                        batch.remaining
                    );
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Error processing cleanup notifications: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cleanup notification scheduler started");

    Ok(())
}
