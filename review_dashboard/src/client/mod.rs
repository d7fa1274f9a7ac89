//! Source abstraction for the review analytics service.
//!
//! This module defines the [`ReviewMetricsSource`] trait, the unified
//! interface to the pre-aggregated metrics a dashboard render cycle needs:
//! one method per service resource, each issuing a single read and returning
//! the decoded records or a [`FetchError`](errors::FetchError).
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn ReviewMetricsSource`), so render cycles run identically against the
//! real HTTP service ([`http::HttpReviewMetricsClient`]) or an in-memory
//! stand-in in tests.

pub mod errors;
pub mod http;

use async_trait::async_trait;

use crate::models::granularity::Granularity;
use crate::models::records::{
    CombinedSentimentAverage, HourlyFrequency, MonthlyReviews, PeriodAverageScore, ScoreBucket,
    SentimentRatio, SentimentThumbsAverage, SentimentTrendPoint, ThumbsUpBucket, TotalReviews,
    VersionBreakdown,
};
use errors::FetchError;

/// Read access to every pre-aggregated metric the dashboard panels consume.
///
/// Implementations issue exactly one request per call: no retry, no caching.
#[async_trait]
pub trait ReviewMetricsSource {
    async fn total_reviews(&self) -> Result<TotalReviews, FetchError>;

    async fn score_distribution(&self) -> Result<Vec<ScoreBucket>, FetchError>;

    async fn sentiment_ratio(&self) -> Result<SentimentRatio, FetchError>;

    /// Average score per period bucket at the requested granularity.
    async fn average_score_over_time(
        &self,
        freq: Granularity,
    ) -> Result<Vec<PeriodAverageScore>, FetchError>;

    async fn reviews_by_version(&self) -> Result<Vec<VersionBreakdown>, FetchError>;

    async fn thumbs_up_distribution(&self) -> Result<Vec<ThumbsUpBucket>, FetchError>;

    async fn combined_sentiment_average(&self) -> Result<CombinedSentimentAverage, FetchError>;

    async fn review_frequency_by_hour(&self) -> Result<Vec<HourlyFrequency>, FetchError>;

    /// Flat (version, sentiment, count) observations at the requested
    /// granularity.
    async fn sentiment_trends_by_version(
        &self,
        freq: Granularity,
    ) -> Result<Vec<SentimentTrendPoint>, FetchError>;

    async fn average_thumbs_up_per_sentiment(
        &self,
    ) -> Result<Vec<SentimentThumbsAverage>, FetchError>;

    async fn monthly_reviews(&self) -> Result<MonthlyReviews, FetchError>;
}
