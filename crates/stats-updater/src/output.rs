//! Stats File Output

use std::fs;
use std::path::Path;

use anyhow::Context;
use portfolio_core::TopmateStats;

/// Write `stats` as pretty JSON, creating parent directories as needed
pub fn write_stats(path: &Path, stats: &TopmateStats) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(stats).context("failed to encode stats")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets/data/topmate_stats.json");
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let stats = TopmateStats::fallback(now);

        write_stats(&path, &stats).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"bookings\": 699,"));
        assert_eq!(TopmateStats::from_json(&written).unwrap(), stats);
    }

    #[test]
    fn test_write_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();

        write_stats(&path, &TopmateStats::fallback(now)).unwrap();
        let updated = TopmateStats {
            bookings: 1000,
            ..TopmateStats::fallback(now)
        };
        write_stats(&path, &updated).unwrap();

        let written = TopmateStats::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.bookings, 1000);
    }
}
