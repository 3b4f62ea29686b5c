use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::models::leaderboard::LeaderboardEntry;
use crate::repositories::LeaderboardStore;
use anyhow::{anyhow, bail};
use async_trait::async_trait;

/// In-process stand-in for the Postgres table.
///
/// Can be flipped to "unavailable" to simulate a database outage.
#[derive(Debug, Default)]
pub struct MemoryLeaderboardStore {
    entries: RwLock<Vec<LeaderboardEntry>>,
    unavailable: AtomicBool,
}

impl MemoryLeaderboardStore {
    pub fn new() -> Self {
        MemoryLeaderboardStore::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = LeaderboardEntry>) -> Self {
        let store = MemoryLeaderboardStore::new();
        for entry in entries {
            store.upsert(entry);
        }
        store
    }

    /// Inserts or replaces by username.
    pub fn upsert(&self, entry: LeaderboardEntry) {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match entries.iter_mut().find(|e| e.username == entry.username) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> anyhow::Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl LeaderboardStore for MemoryLeaderboardStore {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        self.check_available()
    }

    async fn count_rows(&self) -> anyhow::Result<i64> {
        self.check_available()?;
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow!("leaderboard store lock poisoned"))?;
        Ok(entries.len() as i64)
    }

    async fn get_top_entries(&self, limit: i64) -> anyhow::Result<Vec<LeaderboardEntry>> {
        self.check_available()?;
        let mut ranked = self
            .entries
            .read()
            .map_err(|_| anyhow!("leaderboard store lock poisoned"))?
            .clone();

        ranked.sort_by(|a, b| {
            b.experience
                .cmp(&a.experience)
                .then(b.hay_eaten.cmp(&a.hay_eaten))
        });
        ranked.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(ranked)
    }
}
