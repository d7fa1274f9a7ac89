//! Decoded wire records, one shape per analytics resource.
//!
//! These structs mirror the JSON bodies the analytics service returns and are
//! discarded as soon as a transformer has shaped them into a
//! [`PanelSpec`](crate::models::panel::PanelSpec). Field names follow the wire
//! contract; the camelCase review fields are renamed on the way in.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::Deserialize;

/// Total number of reviews in the corpus.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TotalReviews {
    pub total_reviews: u64,
}

/// One bucket of the score distribution.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreBucket {
    /// Star rating the bucket counts (1-5 on the service's scale).
    pub score: u8,
    /// Number of reviews that carry this score.
    pub count: u64,
}

/// Sentiment-name to review-count mapping.
///
/// Keys arrive in the order the service emitted them; that order becomes the
/// panel's label order, so an order-preserving map is required.
pub type SentimentRatio = IndexMap<String, u64>;

/// Average review score for one period bucket.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PeriodAverageScore {
    /// Period bucket timestamp. The service emits naive ISO-8601 stamps.
    pub at: NaiveDateTime,
    pub average_score: f64,
}

/// Review count and average score for one application version.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VersionBreakdown {
    #[serde(rename = "reviewCreatedVersion")]
    pub version: String,
    pub review_count: u64,
    pub average_score: f64,
}

/// Frequency of one thumbs-up count across the corpus.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ThumbsUpBucket {
    /// Engagement level: how many thumbs up a review received.
    #[serde(rename = "thumbsUpCount")]
    pub thumbs_up: u64,
    /// Number of reviews with exactly that engagement level.
    pub count: u64,
}

/// Corpus-wide combined sentiment score on the service's 0-5 scale.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CombinedSentimentAverage {
    pub average_combined_score: f64,
}

/// Review count for one hour-of-day bucket.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HourlyFrequency {
    /// Hour of day, 0-23. Hours with no reviews are absent upstream.
    pub hour: u8,
    pub review_count: u64,
}

/// Three-valued sentiment classification attached to review aggregates.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

/// One flat (version, sentiment, count) observation from the trend resource.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SentimentTrendPoint {
    #[serde(rename = "reviewCreatedVersion")]
    pub version: String,
    pub sentiment: Sentiment,
    pub count: u64,
    /// Period bucket the service grouped by. Decoded for completeness but
    /// ignored by the version pivot, which sums across all periods.
    #[serde(default)]
    pub at: Option<NaiveDate>,
}

/// Mean thumbs-up count for one sentiment class.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SentimentThumbsAverage {
    pub sentiment: Sentiment,
    pub average_thumbs_up: f64,
}

/// Review counts per month, shipped as two parallel arrays.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReviews {
    /// `YYYY-MM` month labels.
    pub months: Vec<String>,
    /// Review count per month, index-aligned with `months`.
    pub review_counts: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_renamed_review_fields() {
        let body = r#"{"reviewCreatedVersion": "4.1.0", "review_count": 12, "average_score": 3.876}"#;
        let record: VersionBreakdown = serde_json::from_str(body).unwrap();
        assert_eq!(record.version, "4.1.0");
        assert_eq!(record.review_count, 12);
    }

    #[test]
    fn decodes_naive_period_timestamps() {
        let body = r#"[{"at": "2021-01-31T00:00:00", "average_score": 4.1234}]"#;
        let records: Vec<PeriodAverageScore> = serde_json::from_str(body).unwrap();
        assert_eq!(records[0].at.format("%Y-%m").to_string(), "2021-01");
    }

    #[test]
    fn decodes_trend_points_with_and_without_period() {
        let body = r#"[
            {"reviewCreatedVersion": "1.0", "sentiment": "positive", "count": 3, "at": "2021-02-28"},
            {"reviewCreatedVersion": "1.0", "sentiment": "neutral", "count": 1}
        ]"#;
        let records: Vec<SentimentTrendPoint> = serde_json::from_str(body).unwrap();
        assert_eq!(records[0].sentiment, Sentiment::Positive);
        assert!(records[0].at.is_some());
        assert!(records[1].at.is_none());
    }

    #[test]
    fn sentiment_ratio_preserves_key_order() {
        let body = r#"{"neutral": 5, "positive": 90, "negative": 10}"#;
        let ratio: SentimentRatio = serde_json::from_str(body).unwrap();
        let keys: Vec<&str> = ratio.keys().map(String::as_str).collect();
        assert_eq!(keys, ["neutral", "positive", "negative"]);
    }
}
