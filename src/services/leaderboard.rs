use std::sync::Arc;
use std::time::Duration;

use crate::repositories::LeaderboardStore;
use crate::serialize::error::AppError;
use crate::serialize::leaderboard::LeaderboardRes;

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 500;
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Absent, non-numeric, non-positive or over-`MAX_LIMIT` values all become
/// `DEFAULT_LIMIT`. Never fails.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    match raw.and_then(|s| s.parse::<i64>().ok()) {
        Some(limit) if limit > 0 && limit <= MAX_LIMIT => limit,
        _ => DEFAULT_LIMIT,
    }
}

#[derive(Clone)]
pub struct LeaderboardSrv {
    store: Arc<dyn LeaderboardStore>,
    query_timeout: Duration,
}

impl LeaderboardSrv {
    pub fn new(store: Arc<dyn LeaderboardStore>) -> Self {
        LeaderboardSrv {
            store,
            query_timeout: QUERY_TIMEOUT,
        }
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    pub async fn get_leaderboard(&self, limit: i64) -> Result<LeaderboardRes, AppError> {
        let entries = tokio::time::timeout(self.query_timeout, self.store.get_top_entries(limit))
            .await
            .map_err(|_| {
                AppError::new(500).message(&format!(
                    "leaderboard query: timed out after {:?}",
                    self.query_timeout
                ))
            })?
            .map_err(|err| AppError::new(500).message(&format!("leaderboard query: {err:#}")))?;

        log::debug!(
            "GET /api/leaderboard limit={} -> {} entries",
            limit,
            entries.len()
        );
        Ok(LeaderboardRes { entries })
    }
}
