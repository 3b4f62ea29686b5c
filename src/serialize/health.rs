use chrono::{DateTime, SecondsFormat, Utc};
use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct HealthRes {
    pub status: String,
    pub timestamp: String,
}

impl HealthRes {
    pub fn ok(now: DateTime<Utc>) -> HealthRes {
        HealthRes {
            status: "ok".to_owned(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_is_rfc3339_utc_seconds() {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap();
        assert_eq!(HealthRes::ok(now).timestamp, "2024-05-17T08:30:00Z");
    }
}
