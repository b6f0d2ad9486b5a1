//! Connection pools and schema bootstrap.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, warn};

use crate::config::db::{make_conn_spec, DbKind, RuntimeEnv};
use crate::error::AppError;

const PG_CONNECT_ATTEMPTS: u32 = 5;
const PG_RETRY_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

async fn build_sqlite_pool(url: &str, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let connect_opts = SqliteConnectOptions::from_str(url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    // An in-memory database lives exactly as long as its single connection.
    let (min, max) = match kind {
        DbKind::SqliteMemory => (1, 1),
        _ => (1, 5),
    };

    let pool = SqlitePoolOptions::new()
        .min_connections(min)
        .max_connections(max)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite connection pool: {e}")))?;

    info!(
        "pool=create engine=sqlite memory={} min={} max={}",
        kind == DbKind::SqliteMemory,
        min,
        max
    );
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

async fn build_postgres_pool(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.min_connections(1)
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = retry_connection(
        || {
            let opt = opt.clone();
            async move {
                Database::connect(opt)
                    .await
                    .map_err(|e| AppError::config(format!("failed to connect to Postgres: {e}")))
            }
        },
        PG_CONNECT_ATTEMPTS,
        PG_RETRY_INTERVAL_MS,
    )
    .await?;

    info!("pool=create engine=postgres max=10");
    Ok(db)
}

/// Open a pool for the given engine. Does not run migrations.
pub async fn connect_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = make_conn_spec(env, kind)?;
    match kind {
        DbKind::SqliteFile | DbKind::SqliteMemory => build_sqlite_pool(&url, kind).await,
        DbKind::Postgres => build_postgres_pool(&url).await,
    }
}

/// Open a pool *and* bring the schema up to date.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    info!(env = ?env, db_kind = ?kind, "bootstrap=start");

    let db = connect_db(env, kind).await?;
    migrate(&db, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;

    info!("bootstrap=ready");
    Ok(db)
}
