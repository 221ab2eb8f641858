//! Booking Statistics
//!
//! Model of the static `topmate_stats.json` file, the values shown when it
//! cannot be loaded, and the counters derived from it.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, CoreResult};

pub const DEFAULT_BOOKINGS: u64 = 699;
pub const DEFAULT_REVIEWS: u64 = 87;
pub const DEFAULT_RATING: f64 = 4.8;
pub const DEFAULT_HAPPY_STUDENTS: u64 = 545;

/// Share of bookings counted as happy students
pub const HAPPY_STUDENT_RATIO: f64 = 0.78;

/// Age after which the stats file is considered stale
pub const STALE_AFTER_HOURS: i64 = 24;

/// Contents of the stats file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopmateStats {
    pub bookings: u64,
    pub reviews: u64,
    pub rating: f64,
    /// Naive UTC timestamp, e.g. `2025-01-31T08:15:00.123456`. Files with an
    /// RFC 3339 offset are read too; a missing or unreadable value is `None`.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_updated: Option<NaiveDateTime>,
}

/// Parse a naive timestamp or an RFC 3339 one (converted to naive UTC)
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}

/// Never fails: absent, `null` or unreadable values become `None`
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = match &raw {
        Some(serde_json::Value::String(text)) => parse_timestamp(text),
        _ => None,
    };
    if parsed.is_none() && raw.is_some() {
        log::warn!("ignoring unreadable last_updated value");
    }
    Ok(parsed)
}

impl TopmateStats {
    /// Default figures stamped with `now`
    pub fn fallback(now: DateTime<Utc>) -> Self {
        Self {
            bookings: DEFAULT_BOOKINGS,
            reviews: DEFAULT_REVIEWS,
            rating: DEFAULT_RATING,
            last_updated: Some(now.naive_utc()),
        }
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidStats(e.to_string()))
    }

    pub fn happy_students(&self) -> u64 {
        (self.bookings as f64 * HAPPY_STUDENT_RATIO).floor() as u64
    }

    /// Time since the last update; `None` when the file carries no timestamp
    pub fn age(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.last_updated.map(|updated| now.naive_utc() - updated)
    }

    /// Files without a timestamp are never reported stale
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        self.age(now)
            .is_some_and(|age| age > TimeDelta::hours(STALE_AFTER_HOURS))
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            bookings: self.bookings,
            reviews: self.reviews,
            rating: self.rating,
            happy_students: self.happy_students(),
        }
    }
}

/// Counter slots on the page, keyed by `data-counter-id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Bookings,
    Reviews,
    Rating,
    HappyStudents,
}

impl Counter {
    pub const ALL: [Counter; 4] = [
        Counter::Bookings,
        Counter::Reviews,
        Counter::Rating,
        Counter::HappyStudents,
    ];

    /// Counters that animate and show a loading placeholder
    pub const ANIMATED: [Counter; 3] = [Counter::HappyStudents, Counter::Bookings, Counter::Reviews];

    pub fn id(self) -> &'static str {
        match self {
            Counter::Bookings => "bookings",
            Counter::Reviews => "reviews",
            Counter::Rating => "rating",
            Counter::HappyStudents => "happy-students",
        }
    }
}

/// Values ready to be written into the counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub bookings: u64,
    pub reviews: u64,
    pub rating: f64,
    pub happy_students: u64,
}

impl StatsSnapshot {
    pub fn fallback() -> Self {
        Self {
            bookings: DEFAULT_BOOKINGS,
            reviews: DEFAULT_REVIEWS,
            rating: DEFAULT_RATING,
            happy_students: DEFAULT_HAPPY_STUDENTS,
        }
    }

    /// Rating as shown on the page, e.g. `4.8/5`
    pub fn rating_label(&self) -> String {
        format!("{:.1}/5", self.rating)
    }

    /// Target value of an animated counter; `None` for the rating text
    pub fn count(&self, counter: Counter) -> Option<u64> {
        match counter {
            Counter::Bookings => Some(self.bookings),
            Counter::Reviews => Some(self.reviews),
            Counter::HappyStudents => Some(self.happy_students),
            Counter::Rating => None,
        }
    }
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn make_stats(bookings: u64, hours_old: i64) -> TopmateStats {
        TopmateStats {
            bookings,
            reviews: 90,
            rating: 4.9,
            last_updated: Some((make_now() - TimeDelta::hours(hours_old)).naive_utc()),
        }
    }

    #[test]
    fn test_fallback_snapshot_matches_derived_values() {
        let stats = TopmateStats::fallback(make_now());
        assert_eq!(stats.snapshot(), StatsSnapshot::fallback());
        assert_eq!(stats.happy_students(), DEFAULT_HAPPY_STUDENTS);
    }

    #[test]
    fn test_happy_students_rounds_down() {
        assert_eq!(make_stats(100, 0).happy_students(), 78);
        assert_eq!(make_stats(101, 0).happy_students(), 78);
        assert_eq!(make_stats(0, 0).happy_students(), 0);
    }

    #[test]
    fn test_staleness() {
        assert!(!make_stats(1, 23).is_stale(make_now()));
        assert!(!make_stats(1, 24).is_stale(make_now()));
        assert!(make_stats(1, 25).is_stale(make_now()));
    }

    #[test]
    fn test_rating_label() {
        let snapshot = make_stats(10, 0).snapshot();
        assert_eq!(snapshot.rating_label(), "4.9/5");
        assert_eq!(StatsSnapshot { rating: 5.0, ..snapshot }.rating_label(), "5.0/5");
    }

    #[test]
    fn test_counter_ids_and_counts() {
        let snapshot = StatsSnapshot::fallback();
        let ids: Vec<&str> = Counter::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["bookings", "reviews", "rating", "happy-students"]);
        assert_eq!(snapshot.count(Counter::Bookings), Some(699));
        assert_eq!(snapshot.count(Counter::Rating), None);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
  "bookings": 712,
  "reviews": 91,
  "rating": 4.9,
  "last_updated": "2025-03-10T06:30:00.000123"
}"#;
        let stats = TopmateStats::from_json(json).unwrap();
        assert_eq!(stats.bookings, 712);
        assert_eq!(stats.snapshot().happy_students, 555);
        assert!(!stats.is_stale(make_now()));

        let err = TopmateStats::from_json(r#"{"bookings": "many"}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidStats(_)));
    }

    #[test]
    fn test_from_json_accepts_offset_timestamp() {
        let json = r#"{"bookings":712,"reviews":91,"rating":4.9,"last_updated":"2025-03-10T06:30:00Z"}"#;
        let stats = TopmateStats::from_json(json).unwrap();
        assert_eq!(stats.bookings, 712);
        assert_eq!(stats.age(make_now()), Some(TimeDelta::minutes(330)));

        let json = r#"{"bookings":712,"reviews":91,"rating":4.9,"last_updated":"2025-03-08T10:00:00+02:00"}"#;
        let stats = TopmateStats::from_json(json).unwrap();
        assert_eq!(stats.age(make_now()), Some(TimeDelta::hours(52)));
        assert!(stats.is_stale(make_now()));
    }

    #[test]
    fn test_from_json_without_usable_timestamp_keeps_figures() {
        for json in [
            r#"{"bookings":712,"reviews":91,"rating":4.9}"#,
            r#"{"bookings":712,"reviews":91,"rating":4.9,"last_updated":null}"#,
            r#"{"bookings":712,"reviews":91,"rating":4.9,"last_updated":"yesterday"}"#,
            r#"{"bookings":712,"reviews":91,"rating":4.9,"last_updated":1741588200}"#,
        ] {
            let stats = TopmateStats::from_json(json).unwrap();
            assert_eq!(stats.bookings, 712);
            assert_eq!(stats.last_updated, None);
            assert_eq!(stats.age(make_now()), None);
            assert!(!stats.is_stale(make_now()));
        }
    }

    #[test]
    fn test_serialized_timestamp_reads_back() {
        let stats = make_stats(10, 3);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains(r#""last_updated":"2025-03-10T09:00:00""#));
        assert_eq!(TopmateStats::from_json(&json).unwrap(), stats);
    }
}
