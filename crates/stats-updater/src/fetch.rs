//! Profile Fetching

use std::time::Duration;

use chrono::{DateTime, Utc};
use portfolio_core::TopmateStats;
use reqwest::Client;

use crate::scrape;

/// Build the HTTP client used for the profile request
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("stats-updater/", env!("CARGO_PKG_VERSION")))
        .build()
}

async fn fetch_page(client: &Client, url: &str) -> reqwest::Result<String> {
    client.get(url).send().await?.error_for_status()?.text().await
}

/// Fetch and scrape the profile; any failure yields the default stats
pub async fn fetch_stats(client: &Client, url: &str, now: DateTime<Utc>) -> TopmateStats {
    match fetch_page(client, url).await {
        Ok(html) => {
            tracing::info!(url, bytes = html.len(), "fetched profile page");
            scrape::extract_stats(&html, now)
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "failed to fetch profile, using default stats");
            TopmateStats::fallback(now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_unreachable_profile_falls_back() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let client = build_client(Duration::from_secs(2)).unwrap();
        // Port 9 (discard) is closed on test machines
        let stats = fetch_stats(&client, "http://127.0.0.1:9/profile", now).await;
        assert_eq!(stats, TopmateStats::fallback(now));
    }
}
