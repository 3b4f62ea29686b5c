use std::sync::Arc;

use crate::models::leaderboard::LeaderboardEntry;
use crate::repositories::LeaderboardStore;
use anyhow::anyhow;
use async_trait::async_trait;
use deadpool_postgres::{Client, Pool};
use tokio_pg_mapper::FromTokioPostgresRow;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS leaderboard (
    username TEXT PRIMARY KEY,
    level INTEGER NOT NULL DEFAULT 1,
    experience INTEGER NOT NULL DEFAULT 0,
    hay_eaten INTEGER NOT NULL DEFAULT 0,
    updated_at BIGINT NOT NULL DEFAULT 0
);";

#[derive(Clone, Debug)]
pub struct LeaderboardDao {
    db: Arc<Pool>,
}

impl LeaderboardDao {
    pub fn new(db: Arc<Pool>) -> Self {
        LeaderboardDao { db: db.clone() }
    }
}

#[async_trait]
impl LeaderboardStore for LeaderboardDao {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        let client: Client = self.db.get().await?;

        client.batch_execute(CREATE_TABLE).await?;
        Ok(())
    }

    async fn count_rows(&self) -> anyhow::Result<i64> {
        let client: Client = self.db.get().await?;

        let row = client
            .query_one("SELECT COUNT(*) FROM leaderboard;", &[])
            .await?;
        Ok(row.try_get(0)?)
    }

    async fn get_top_entries(&self, limit: i64) -> anyhow::Result<Vec<LeaderboardEntry>> {
        let client: Client = self.db.get().await?;

        let _stmt = "SELECT username, level, experience, hay_eaten FROM leaderboard
            ORDER BY experience DESC, hay_eaten DESC
            LIMIT $1;";
        let stmt = client.prepare(_stmt).await?;

        let entries = client
            .query(&stmt, &[&limit])
            .await?
            .iter()
            .map(|row| {
                LeaderboardEntry::from_row_ref(row)
                    .map_err(|err| anyhow!("malformed leaderboard row: {err}"))
            })
            .collect::<anyhow::Result<Vec<LeaderboardEntry>>>()?;

        Ok(entries)
    }
}
