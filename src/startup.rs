use dioxus_logger::tracing::{self, Level};
use sea_orm::DatabaseConnection;
use tokio::sync::oneshot::error::RecvError;

use crate::{
    config::Config,
    error::AppError,
    model::settings::SharedSettings,
    queue::consumer::ConsumerExit,
    service::settings::BotSettingsService,
};

/// Initializes the global tracing subscriber.
///
/// # Arguments
/// - `level` - Most verbose level that is emitted
pub fn init_logger(level: Level) -> Result<(), AppError> {
    dioxus_logger::init(level)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the bot can access the
/// database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads persisted bot settings into the shared handle the queue handlers read.
pub async fn load_settings(db: &DatabaseConnection) -> Result<SharedSettings, AppError> {
    let settings = BotSettingsService::new(db).load().await?;

    Ok(settings.into_shared())
}

/// Writes the current bot settings back to the database.
pub async fn persist_settings(
    db: &DatabaseConnection,
    settings: &SharedSettings,
) -> Result<(), AppError> {
    let snapshot = settings.read().await.clone();
    BotSettingsService::new(db).persist(&snapshot).await?;

    tracing::info!("Bot settings saved");

    Ok(())
}

/// Maps how the queue consumer ended onto the process result.
///
/// # Returns
/// - `Ok(())` - Consumer stopped at a terminate task, or never started
/// - `Err(AppError::InternalError)` - Consumer aborted on queue overload, so the process
///   exits with a failure status
pub fn consumer_outcome(exit: Result<ConsumerExit, RecvError>) -> Result<(), AppError> {
    match exit {
        Ok(ConsumerExit::Aborted) => Err(AppError::InternalError(
            "Task queue overloaded, bot was shut down".to_string(),
        )),
        Ok(ConsumerExit::Stopped) => {
            tracing::info!("Task queue drained");
            Ok(())
        }
        Err(_) => {
            tracing::warn!("Bot stopped before the queue consumer started");
            Ok(())
        }
    }
}
