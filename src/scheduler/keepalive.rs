use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;

/// Every five minutes, on the minute.
const KEEPALIVE_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the database keep-alive scheduler
///
/// Pings the database on a fixed schedule so the connection stays usable between
/// bursts of queue activity. Failed pings are logged and retried on the next run.
///
/// # Arguments
/// - `db`: Database connection to keep alive
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(KEEPALIVE_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match db.ping().await {
                Ok(()) => tracing::debug!("Database keep-alive ping succeeded"),
                Err(e) => tracing::error!("Database keep-alive ping failed: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Database keep-alive scheduler started");

    Ok(scheduler)
}
