//! Profile Page Scraping
//!
//! Pulls booking, review and rating figures out of the public profile HTML.
//! The page has no stable markup, so figures are located by the text around
//! them.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use portfolio_core::stats::{DEFAULT_BOOKINGS, DEFAULT_RATING, DEFAULT_REVIEWS};
use portfolio_core::TopmateStats;
use regex::Regex;

/// Script, style and comment blocks carry no visible text
static HIDDEN_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->")
        .expect("valid hidden block pattern")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Visible text nodes of `html`, in document order
pub fn text_nodes(html: &str) -> Vec<String> {
    let visible = HIDDEN_BLOCK.replace_all(html, " ");
    TAG.split(&visible)
        .map(decode_entities)
        .filter(|text| !text.trim().is_empty())
        .collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// All ASCII digits of `text` read as one number, e.g. `"1,204 sales"` -> 1204
fn parse_digits(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Leading number of a `"4.9/5"` style rating
fn parse_rating(text: &str) -> Option<f64> {
    text.trim().split('/').next()?.trim().parse().ok()
}

/// Build stats from a profile page.
///
/// - bookings: sum over every text mentioning "sales" (any case)
/// - reviews: first text mentioning "Testimonials"
/// - rating: first text containing "/5"
///
/// With no bookings found, the larger of the default and the review count is used.
pub fn extract_stats(html: &str, now: DateTime<Utc>) -> TopmateStats {
    let texts = text_nodes(html);

    let bookings = texts
        .iter()
        .filter(|text| text.to_lowercase().contains("sales"))
        .filter_map(|text| parse_digits(text))
        .fold(0u64, u64::saturating_add);

    let reviews = match texts.iter().find(|text| text.contains("Testimonials")) {
        Some(text) => parse_digits(text).unwrap_or(DEFAULT_REVIEWS),
        None => 0,
    };

    let rating = texts
        .iter()
        .find(|text| text.contains("/5"))
        .and_then(|text| parse_rating(text))
        .unwrap_or(DEFAULT_RATING);

    let bookings = if bookings == 0 {
        DEFAULT_BOOKINGS.max(reviews)
    } else {
        bookings
    };

    tracing::debug!(bookings, reviews, rating, texts = texts.len(), "extracted stats");

    TopmateStats {
        bookings,
        reviews,
        rating,
        last_updated: Some(now.naive_utc()),
    }
}
