use crate::models::leaderboard::LeaderboardEntry;
use actix_web::web;
use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct LeaderboardRes {
    pub entries: Vec<LeaderboardEntry>,
}

/// Raw `limit` as sent by the client; clamping happens in the service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub limit: Option<String>,
}

impl LeaderboardQuery {
    /// First `limit` pair wins. An undecodable query string counts as no limit.
    pub fn from_query_string(query: &str) -> LeaderboardQuery {
        let limit = web::Query::<Vec<(String, String)>>::from_query(query)
            .ok()
            .and_then(|pairs| {
                pairs
                    .into_inner()
                    .into_iter()
                    .find(|(key, _)| key == "limit")
                    .map(|(_, value)| value)
            });

        LeaderboardQuery { limit }
    }
}
