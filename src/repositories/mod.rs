use crate::{config::DatabaseTarget, models::leaderboard::LeaderboardEntry};
use anyhow::Context;
use async_trait::async_trait;
use deadpool_postgres::{
    Config, Hook, HookError, ManagerConfig, Pool, RecyclingMethod, Runtime, SslMode,
};
use openssl::ssl::{SslConnector, SslMethod, SslVerifyMode};
use postgres_openssl::MakeTlsConnector;
use std::time::Duration;

pub mod leaderboard;
pub mod memory;

pub const MAX_POOL_SIZE: usize = 10;
pub const MAX_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// Read side of the leaderboard table.
#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    /// Creates the table if it is missing. Safe to call on every start.
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    async fn count_rows(&self) -> anyhow::Result<i64>;

    /// At most `limit` entries, experience descending then hay eaten descending.
    async fn get_top_entries(&self, limit: i64) -> anyhow::Result<Vec<LeaderboardEntry>>;
}

/// Rejects a pooled connection once it outlives `MAX_CONNECTION_LIFETIME`,
/// so the pool opens a fresh one instead.
fn check_connection_age(age: Duration) -> Result<(), HookError> {
    if age > MAX_CONNECTION_LIFETIME {
        return Err(HookError::Message("connection reached max lifetime".into()));
    }
    Ok(())
}

pub fn create_pool(target: &DatabaseTarget) -> anyhow::Result<Pool> {
    let mut cfg = Config::new();
    match target {
        DatabaseTarget::Url(url) => cfg.url = Some(url.clone()),
        DatabaseTarget::Parts {
            host,
            port,
            user,
            password,
            dbname,
            ssl,
        } => {
            cfg.host = Some(host.clone());
            cfg.port = Some(*port);
            cfg.user = Some(user.clone());
            cfg.password = Some(password.clone());
            cfg.dbname = Some(dbname.clone());
            cfg.ssl_mode = Some(if *ssl {
                SslMode::Require
            } else {
                SslMode::Disable
            });
        }
    }
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });

    // sslmode=require encrypts without verifying the server certificate.
    let mut connector =
        SslConnector::builder(SslMethod::tls()).context("failed to set up TLS connector")?;
    connector.set_verify(SslVerifyMode::NONE);
    let tls = MakeTlsConnector::new(connector.build());

    let pool = cfg
        .builder(tls)
        .context("invalid database configuration")?
        .max_size(MAX_POOL_SIZE)
        .runtime(Runtime::Tokio1)
        .post_recycle(Hook::sync_fn(|_, metrics| check_connection_age(metrics.age())))
        .build()
        .context("failed to build database pool")?;

    Ok(pool)
}
