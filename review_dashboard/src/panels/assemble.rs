//! Shared series-assembly helpers: label derivation, rounding, and the
//! version pivot used by the sentiment-trend panel.

use chrono::NaiveDateTime;
use indexmap::IndexMap;

use crate::models::records::{Sentiment, SentimentTrendPoint};

/// Rounds to two decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `"Star {score}"` category label for a score bucket.
pub(crate) fn star_label(score: u8) -> String {
    format!("Star {score}")
}

/// `"{hour}:00"` category label for an hour-of-day bucket.
pub(crate) fn hour_label(hour: u8) -> String {
    format!("{hour}:00")
}

/// Year-month (`YYYY-MM`) label for a period timestamp.
pub(crate) fn month_label(at: &NaiveDateTime) -> String {
    at.format("%Y-%m").to_string()
}

/// Summed review counts for one version, split by sentiment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SentimentTotals {
    positive: u64,
    negative: u64,
    neutral: u64,
}

/// Flattened result of the version pivot: one shared version axis and three
/// per-sentiment count series, all index-aligned.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VersionPivot {
    /// Distinct versions in first-occurrence order.
    pub versions: Vec<String>,
    pub positive: Vec<u64>,
    pub negative: Vec<u64>,
    pub neutral: Vec<u64>,
}

/// Regroups flat (version, sentiment, count) records into three aligned
/// per-sentiment series over the distinct versions.
///
/// A version seen under any sentiment appears exactly once in the axis, in
/// first-occurrence order; sentiments it lacks count as zero, and repeated
/// (version, sentiment) pairs are summed. The period field on the records is
/// deliberately not part of the key: totals are cumulative across all
/// periods the service returned.
pub fn pivot_sentiment_by_version(records: &[SentimentTrendPoint]) -> VersionPivot {
    let mut totals: IndexMap<&str, SentimentTotals> = IndexMap::new();

    for record in records {
        let entry = totals.entry(record.version.as_str()).or_default();
        match record.sentiment {
            Sentiment::Positive => entry.positive += record.count,
            Sentiment::Negative => entry.negative += record.count,
            Sentiment::Neutral => entry.neutral += record.count,
        }
    }

    let mut pivot = VersionPivot::default();
    for (version, sums) in totals {
        pivot.versions.push(version.to_string());
        pivot.positive.push(sums.positive);
        pivot.negative.push(sums.negative);
        pivot.neutral.push(sums.neutral);
    }
    pivot
}
