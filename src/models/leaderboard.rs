use serde_derive::{Deserialize, Serialize};
use tokio_pg_mapper_derive::PostgresMapper;

/// One player's progression snapshot, as served by `/api/leaderboard`.
///
/// The table also stores `updated_at`, which this API never reads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PostgresMapper)]
#[pg_mapper(table = "leaderboard")]
pub struct LeaderboardEntry {
    pub username: String,
    pub level: i32,
    pub experience: i32,
    #[serde(rename = "hayEaten")]
    pub hay_eaten: i32,
}

impl LeaderboardEntry {
    pub fn new(username: &str, level: i32, experience: i32, hay_eaten: i32) -> LeaderboardEntry {
        LeaderboardEntry {
            username: username.to_owned(),
            level,
            experience,
            hay_eaten,
        }
    }
}
