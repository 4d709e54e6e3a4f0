use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

/// Establish a connection to the database with connection pooling.
///
/// An in-memory `SQLite` database only exists inside the connection that created it,
/// so such URLs get a single-connection pool.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let in_memory = is_in_memory_sqlite(database_url);

    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(if in_memory { 1 } else { 20 })
        .min_connections(if in_memory { 1 } else { 2 })
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    if !in_memory {
        opts.idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800));
    }

    let db = Database::connect(opts).await?;
    tracing::debug!(in_memory, "Database pool ready");
    Ok(db)
}

fn is_in_memory_sqlite(database_url: &str) -> bool {
    database_url.starts_with("sqlite:") && database_url.contains(":memory:")
}
